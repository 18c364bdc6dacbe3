//! Chat session data model and store
//!
//! A session is a named, timestamped, append-only conversation record. The
//! store owns the full mapping of session IDs to records plus the "currently
//! active session" pointer, and is the only writer of persisted state: every
//! mutation is followed by a full-snapshot persist to the key-value backend.

use crate::error::Result;
use crate::storage::KvStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ulid::Ulid;

/// Fixed key the full session mapping is stored under
pub const SESSIONS_KEY: &str = "chat_sessions";

/// Fixed filename offered for JSON export
pub const EXPORT_FILENAME: &str = "savant_chat_history.json";

/// Title assigned to a session before its first user message arrives
const PLACEHOLDER_TITLE: &str = "New chat";

/// Maximum title length before truncation
const TITLE_MAX_CHARS: usize = 30;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human user
    User,
    /// The assistant
    Assistant,
}

/// One turn within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message author
    pub sender: Sender,
    /// Message text; assistant content may contain markup
    pub content: String,
    /// When the message was appended (RFC-3339 on the wire)
    pub time: DateTime<Utc>,
}

/// A single chat session record
///
/// Messages are strictly append-only and kept in insertion order. The title
/// is derived exactly once, from the first user message, and never
/// recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// User-facing title derived from the first user message
    pub title: String,
    /// Creation time, immutable
    pub timestamp: DateTime<Utc>,
    /// Ordered message list
    pub messages: Vec<Message>,
}

impl ChatSession {
    fn new() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            timestamp: Utc::now(),
            messages: Vec::new(),
        }
    }
}

/// Derive a session title from its first user message
///
/// The full text if it fits in 30 characters, otherwise the first 30
/// characters plus an ellipsis marker.
fn derive_title(first_message: &str) -> String {
    if first_message.chars().count() > TITLE_MAX_CHARS {
        let mut title: String = first_message.chars().take(TITLE_MAX_CHARS).collect();
        title.push_str("...");
        title
    } else {
        first_message.to_string()
    }
}

/// Owns all chat sessions and their persistence
///
/// Exactly one session is active at a time; all mutation happens through
/// sequential calls into this store, so no locking discipline beyond
/// "mutate in memory, then persist the full snapshot" is needed.
pub struct SessionStore {
    sessions: BTreeMap<String, ChatSession>,
    active: Option<String>,
    kv: Box<dyn KvStore>,
}

impl SessionStore {
    /// Open a store over the given key-value backend, loading any persisted
    /// sessions
    ///
    /// # Errors
    ///
    /// Propagates backend read failures and blob deserialization failures.
    pub fn open(kv: Box<dyn KvStore>) -> Result<Self> {
        let mut store = Self {
            sessions: BTreeMap::new(),
            active: None,
            kv,
        };
        store.load()?;
        Ok(store)
    }

    /// Create a fresh session and make it active
    ///
    /// The new session has a time-derived unique ID, an empty message list,
    /// and a placeholder title. Returns the new session's ID.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn create_session(&mut self) -> Result<String> {
        let id = Ulid::new().to_string();
        self.sessions.insert(id.clone(), ChatSession::new());
        self.active = Some(id.clone());
        tracing::debug!("Created session {}", id);
        self.persist()?;
        Ok(id)
    }

    /// Append a message to the active session
    ///
    /// If no session is active, one is implicitly created first, so this
    /// never fails due to "no session". The first user message of a session
    /// also sets its title. Persists the full snapshot after the mutation.
    ///
    /// Returns the ID of the session the message was appended to.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures.
    pub fn append_message(&mut self, sender: Sender, content: &str) -> Result<String> {
        let id = match self.active.clone() {
            Some(id) if self.sessions.contains_key(&id) => id,
            _ => self.create_session()?,
        };

        let session = self
            .sessions
            .get_mut(&id)
            .expect("active session exists after create");

        session.messages.push(Message {
            sender,
            content: content.to_string(),
            time: Utc::now(),
        });

        if sender == Sender::User {
            let user_messages = session
                .messages
                .iter()
                .filter(|m| m.sender == Sender::User)
                .count();
            if user_messages == 1 {
                session.title = derive_title(content);
            }
        }

        self.persist()?;
        Ok(id)
    }

    /// All sessions ordered by creation timestamp, most recent first
    pub fn list_sessions(&self) -> Vec<(&str, &ChatSession)> {
        let mut sessions: Vec<(&str, &ChatSession)> = self
            .sessions
            .iter()
            .map(|(id, session)| (id.as_str(), session))
            .collect();
        sessions.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));
        sessions
    }

    /// Look up a session by ID
    ///
    /// IDs are ULIDs, canonically upper-case; lookup accepts any casing.
    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.get(&id.to_uppercase())
    }

    /// ID of the currently active session, if any
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Make an existing session active; returns false for an unknown ID
    ///
    /// Accepts the ID in any casing, like [`SessionStore::get`].
    pub fn switch_to(&mut self, id: &str) -> bool {
        let id = id.to_uppercase();
        if self.sessions.contains_key(&id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Serialize the full session mapping to the backend under the fixed key
    ///
    /// # Errors
    ///
    /// Backend failures are not caught or retried here; they propagate to
    /// the caller.
    pub fn persist(&self) -> Result<()> {
        let blob = serde_json::to_vec(&self.sessions)?;
        self.kv.set(SESSIONS_KEY, &blob)
    }

    /// Replace the in-memory mapping with the persisted snapshot
    ///
    /// An absent blob loads as an empty mapping.
    ///
    /// # Errors
    ///
    /// Propagates backend read failures and deserialization failures.
    pub fn load(&mut self) -> Result<()> {
        self.sessions = match self.kv.get(SESSIONS_KEY)? {
            Some(blob) => serde_json::from_slice(&blob)?,
            None => BTreeMap::new(),
        };
        Ok(())
    }

    /// Pretty-printed JSON of the full session mapping, for export
    ///
    /// Identical structure to the persisted blob, 2-space indented.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.sessions)?)
    }

    /// Number of sessions in the store
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True if the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn memory_store() -> SessionStore {
        SessionStore::open(Box::new(MemoryStore::new())).expect("open store")
    }

    #[test]
    fn test_create_session_becomes_active() {
        let mut store = memory_store();
        let id = store.create_session().unwrap();

        assert_eq!(store.active_id(), Some(id.as_str()));
        let session = store.get(&id).unwrap();
        assert_eq!(session.title, "New chat");
        assert!(session.messages.is_empty());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let mut store = memory_store();
        let a = store.create_session().unwrap();
        let b = store.create_session().unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_append_implicitly_creates_session() {
        let mut store = memory_store();
        assert!(store.active_id().is_none());

        let id = store.append_message(Sender::User, "hello").unwrap();

        assert_eq!(store.active_id(), Some(id.as_str()));
        assert_eq!(store.get(&id).unwrap().messages.len(), 1);
    }

    #[test]
    fn test_title_from_short_first_message() {
        let mut store = memory_store();
        let id = store.append_message(Sender::User, "what is rust").unwrap();
        assert_eq!(store.get(&id).unwrap().title, "what is rust");
    }

    #[test]
    fn test_title_truncated_at_thirty_chars() {
        let mut store = memory_store();
        let long = "explain the borrow checker in rust in detail please";
        let id = store.append_message(Sender::User, long).unwrap();

        let title = &store.get(&id).unwrap().title;
        assert_eq!(title, "explain the borrow checker in ...");
        assert_eq!(title.chars().count(), 33);
    }

    #[test]
    fn test_title_exactly_thirty_chars_is_verbatim() {
        let mut store = memory_store();
        let exact = "a".repeat(30);
        let id = store.append_message(Sender::User, &exact).unwrap();
        assert_eq!(store.get(&id).unwrap().title, exact);
    }

    #[test]
    fn test_title_never_recomputed() {
        let mut store = memory_store();
        let id = store.append_message(Sender::User, "first").unwrap();
        store.append_message(Sender::Assistant, "reply").unwrap();
        store.append_message(Sender::User, "second question").unwrap();

        assert_eq!(store.get(&id).unwrap().title, "first");
    }

    #[test]
    fn test_assistant_message_does_not_set_title() {
        let mut store = memory_store();
        let id = store.append_message(Sender::Assistant, "welcome").unwrap();
        assert_eq!(store.get(&id).unwrap().title, "New chat");
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut store = memory_store();
        let id = store.append_message(Sender::User, "one").unwrap();
        store.append_message(Sender::Assistant, "two").unwrap();
        store.append_message(Sender::User, "three").unwrap();

        let contents: Vec<&str> = store
            .get(&id)
            .unwrap()
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_list_sessions_most_recent_first() {
        let mut store = memory_store();
        let first = store.create_session().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = store.create_session().unwrap();

        let listed: Vec<&str> = store.list_sessions().iter().map(|(id, _)| *id).collect();
        assert_eq!(listed, vec![second.as_str(), first.as_str()]);
    }

    #[test]
    fn test_id_lookup_accepts_any_casing() {
        let mut store = memory_store();
        let id = store.create_session().unwrap();

        let lowered = id.to_lowercase();
        assert!(store.get(&lowered).is_some());
        assert!(store.switch_to(&lowered));
        // The active pointer holds the canonical upper-case form
        assert_eq!(store.active_id(), Some(id.as_str()));
    }

    #[test]
    fn test_switch_to_unknown_session() {
        let mut store = memory_store();
        assert!(!store.switch_to("nope"));

        let id = store.create_session().unwrap();
        assert!(store.switch_to(&id));
        assert_eq!(store.active_id(), Some(id.as_str()));
    }

    #[test]
    fn test_persist_load_roundtrip() {
        let kv = Box::new(MemoryStore::new());
        let mut store = SessionStore::open(kv).unwrap();

        let id = store.append_message(Sender::User, "hello there").unwrap();
        store.append_message(Sender::Assistant, "# Hi\n\nGeneral greeting").unwrap();
        let snapshot = store.get(&id).unwrap().clone();

        store.load().unwrap();

        let reloaded = store.get(&id).expect("session survives reload");
        assert_eq!(reloaded.title, snapshot.title);
        assert_eq!(reloaded.messages.len(), snapshot.messages.len());
        for (a, b) in reloaded.messages.iter().zip(snapshot.messages.iter()) {
            assert_eq!(a.sender, b.sender);
            assert_eq!(a.content, b.content);
        }
    }

    #[test]
    fn test_load_with_empty_backend() {
        let store = memory_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_wire_format_shape() {
        let mut store = memory_store();
        store.append_message(Sender::User, "ping").unwrap();

        let json = store.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let (_, session) = value.as_object().unwrap().iter().next().unwrap();

        assert!(session["title"].is_string());
        assert!(session["timestamp"].is_string());
        assert_eq!(session["messages"][0]["sender"], "user");
        assert_eq!(session["messages"][0]["content"], "ping");
        assert!(session["messages"][0]["time"].is_string());
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let mut store = memory_store();
        store.append_message(Sender::User, "ping").unwrap();

        let json = store.export_json().unwrap();
        assert!(json.contains("\n  "));
    }
}
