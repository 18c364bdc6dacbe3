//! Command classification cascade
//!
//! Routes normalized user input (lower-cased, trimmed) through an ordered,
//! short-circuiting sequence of rules; the first rule that matches fully
//! handles the turn. Matching is deliberately substring-based rather than
//! word-boundary-aware: later rules assume earlier rules already filtered
//! their cases, so both the rule order and the matching style are
//! load-bearing.
//!
//! Rule order:
//! 1. subject syllabus PDF
//! 2. generic book/pdf search
//! 3. `open <site>`
//! 4. curated learning video
//! 5. generic video search
//! 6. interrogative question (encyclopedia lookup; the only async rule)
//! 7. curated topic table
//! 8. broader keyword table
//! 9. phrase shape templates (how-to, best, comparison)
//! 10. unconditional default

pub mod tables;
pub mod templates;

use crate::lookup::SummaryLookup;
use rand::Rng;
use regex::Regex;
use tables::{
    CURATED_TOPICS, CURATED_VIDEOS, FALLBACK_CATEGORY, KEYWORD_TOPICS, SUBJECT_PDFS,
    VIDEO_CATEGORIES,
};
use url::Url;

/// External side effect requested by a resolved rule
///
/// The router never performs side effects itself; it surfaces them for the
/// UI adapter to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a URL in the surrounding environment
    OpenUrl(String),
    /// Play a known video
    PlayVideo {
        /// Video identifier
        id: String,
        /// Display title
        title: String,
    },
}

/// The assistant's complete response to one turn
#[derive(Debug, Clone)]
pub struct Reply {
    /// Assistant text, possibly containing markup
    pub text: String,
    /// Short utterance summarizing the action, for speech output
    pub speech: String,
    /// Optional external side effect
    pub action: Option<Action>,
    /// Thumbnail URL to attach after the text has rendered
    pub thumbnail: Option<String>,
}

impl Reply {
    fn text_only(text: String, speech: &str) -> Self {
        Self {
            text,
            speech: speech.to_string(),
            action: None,
            thumbnail: None,
        }
    }
}

/// Ordered, short-circuiting command classifier
pub struct CommandRouter {
    lookup: SummaryLookup,
}

impl CommandRouter {
    /// Create a router using the given encyclopedia lookup client
    pub fn new(lookup: SummaryLookup) -> Self {
        Self { lookup }
    }

    /// Classify input and produce the assistant's response
    ///
    /// Always terminates with a response: rule 10 is an unconditional
    /// catch-all. The caller is responsible for filtering out empty input
    /// before routing.
    pub async fn respond(&self, input: &str) -> Reply {
        let cmd = input.trim().to_lowercase();

        if let Some(reply) = self.subject_pdf(&cmd) {
            return reply;
        }
        if let Some(reply) = self.book_search(&cmd) {
            return reply;
        }
        if let Some(reply) = self.open_site(&cmd) {
            return reply;
        }
        if let Some(reply) = self.curated_video(&cmd) {
            return reply;
        }
        if let Some(reply) = self.video_search(&cmd) {
            return reply;
        }
        if let Some(reply) = self.encyclopedia(&cmd).await {
            return reply;
        }
        if let Some(reply) = self.curated_topic(&cmd) {
            return reply;
        }
        if let Some(reply) = self.keyword_topic(&cmd) {
            return reply;
        }
        if let Some(reply) = self.phrase_template(&cmd) {
            return reply;
        }
        self.fallback(&cmd)
    }

    /// Rule 1: subject syllabus PDF
    ///
    /// Requires both a pdf/syllabus trigger and a recognized subject alias;
    /// a trigger without a subject falls through to rule 2.
    fn subject_pdf(&self, cmd: &str) -> Option<Reply> {
        if !cmd.contains("pdf") && !cmd.contains("syllabus") {
            return None;
        }

        for entry in SUBJECT_PDFS {
            if entry.aliases.iter().any(|alias| cmd.contains(alias)) {
                let subject = entry.subject.to_uppercase();
                return Some(Reply {
                    text: format!("📖 Opening {} syllabus PDF...", subject),
                    speech: format!("Opening {} syllabus PDF from JNTU", subject),
                    action: Some(Action::OpenUrl(entry.url.to_string())),
                    thumbnail: None,
                });
            }
        }
        None
    }

    /// Rule 2: generic book/pdf deep-link search
    fn book_search(&self, cmd: &str) -> Option<Reply> {
        if !cmd.contains("book") && !cmd.contains("pdf") {
            return None;
        }

        let title_re =
            Regex::new(r"(?i)(?:book|open|read|download)?\s*(?:the)?\s*(.+?)\s*(?:book|pdf)?$")
                .unwrap();
        let caps = title_re.captures(cmd)?;
        let title = caps.get(1)?.as_str().trim();
        if title.is_empty() {
            return None;
        }

        let search_url = Url::parse_with_params(
            "https://www.google.com/search",
            &[("q", format!("{} :pdf", title))],
        )
        .expect("static search URL parses");

        Some(Reply {
            text: format!("📚 Searching for free PDF of \"{}\"...", title),
            speech: format!("Searching for a free PDF of {}", title),
            action: Some(Action::OpenUrl(search_url.into())),
            thumbnail: None,
        })
    }

    /// Rule 3: `open <site>`
    fn open_site(&self, cmd: &str) -> Option<Reply> {
        let site = cmd.strip_prefix("open ")?.trim();
        let url = if site.contains("http") {
            site.to_string()
        } else {
            format!("https://{}.com", site.replace(' ', ""))
        };

        Some(Reply {
            text: format!("Opening {}...", site),
            speech: format!("Opening {}", site),
            action: Some(Action::OpenUrl(url)),
            thumbnail: None,
        })
    }

    /// Rule 4: curated learning video
    fn curated_video(&self, cmd: &str) -> Option<Reply> {
        for video in CURATED_VIDEOS {
            let key = video.keyword;
            let triggered = cmd.contains(&format!("best {}", key))
                || cmd.contains(&format!("{} course", key))
                || cmd.contains(&format!("{} tutorial", key))
                || cmd.contains(&format!("learn {}", key));
            if triggered {
                return Some(Reply {
                    text: format!("🎬 Now playing **{}**. Click to watch on YouTube.", video.title),
                    speech: format!(
                        "Here's the best {} learning video, playing now.",
                        key.to_uppercase()
                    ),
                    action: Some(Action::PlayVideo {
                        id: video.id.to_string(),
                        title: video.title.to_string(),
                    }),
                    thumbnail: None,
                });
            }
        }
        None
    }

    /// Rule 5: generic video search
    ///
    /// Strips filler words before matching against the category table; a
    /// request that matches no category plays something from the fallback
    /// category rather than failing.
    fn video_search(&self, cmd: &str) -> Option<Reply> {
        if !cmd.contains("video") && !cmd.contains("watch") && !cmd.contains("play") {
            return None;
        }

        let filler_re = Regex::new(r"video|watch|play|show|me|best|good|funny").unwrap();
        let clean = filler_re.replace_all(cmd, "").trim().to_string();

        for category in VIDEO_CATEGORIES {
            if cmd.contains(category.name) || clean.contains(category.name) {
                let choice = pick_random(category.videos);
                return Some(Reply {
                    text: templates::video_category_response(category.name, choice.title),
                    speech: format!("Playing {} video: {}", category.name, choice.title),
                    action: Some(Action::PlayVideo {
                        id: choice.id.to_string(),
                        title: choice.title.to_string(),
                    }),
                    thumbnail: None,
                });
            }
        }

        let fallback = VIDEO_CATEGORIES
            .iter()
            .find(|c| c.name == FALLBACK_CATEGORY)
            .expect("fallback category exists");
        let choice = pick_random(fallback.videos);
        Some(Reply {
            text: templates::video_fallback_response(&clean, choice.title),
            speech: format!("Playing video: {}", choice.title),
            action: Some(Action::PlayVideo {
                id: choice.id.to_string(),
                title: choice.title.to_string(),
            }),
            thumbnail: None,
        })
    }

    /// Rule 6: interrogative question via encyclopedia lookup
    ///
    /// The only suspending rule. A lookup miss is not an error: control
    /// falls through to rule 7.
    async fn encyclopedia(&self, cmd: &str) -> Option<Reply> {
        let interrogative_re =
            Regex::new(r"^(what|who|where|when|why|how|tell|explain|define|describe)").unwrap();
        if !interrogative_re.is_match(cmd) {
            return None;
        }

        let strip_re = Regex::new(
            r"^(what is|who is|what are|who are|where is|when is|why is|how is|tell me about|explain|define|describe)\s+",
        )
        .unwrap();
        let query = strip_re.replace(cmd, "").trim().to_string();
        if query.is_empty() {
            return None;
        }

        let summary = self.lookup.lookup(&query).await?;
        Some(Reply {
            text: summary.to_markup(),
            speech: summary.extract.clone(),
            action: None,
            thumbnail: summary.thumbnail,
        })
    }

    /// Rule 7: curated topic table, substring match in either direction
    fn curated_topic(&self, cmd: &str) -> Option<Reply> {
        for topic in CURATED_TOPICS {
            if cmd.contains(topic.keyword) || topic.keyword.contains(cmd) {
                return Some(Reply::text_only(
                    format!("# {}\n\n{}", topic.title, topic.content),
                    "Here's information about your query",
                ));
            }
        }
        None
    }

    /// Rule 8: broader keyword table
    fn keyword_topic(&self, cmd: &str) -> Option<Reply> {
        let squashed = cmd.replace(char::is_whitespace, "");
        for topic in KEYWORD_TOPICS {
            if cmd.contains(topic.keyword) || topic.keyword.contains(&squashed) {
                return Some(Reply::text_only(
                    templates::topic_response(topic.keyword, topic.category, topic.description),
                    "Here's what I found",
                ));
            }
        }
        None
    }

    /// Rule 9: phrase shape templates
    fn phrase_template(&self, cmd: &str) -> Option<Reply> {
        if cmd.contains("how to") || cmd.contains("tutorial") {
            return Some(Reply::text_only(
                templates::how_to_response(cmd),
                "Here's what I found",
            ));
        }
        if cmd.contains("best") || cmd.contains("top") {
            return Some(Reply::text_only(
                templates::best_response(cmd),
                "Here's what I found",
            ));
        }
        if cmd.contains("difference") || cmd.contains("vs") || cmd.contains("between") {
            return Some(Reply::text_only(
                templates::comparison_response(cmd),
                "Here's what I found",
            ));
        }
        None
    }

    /// Rule 10: unconditional catch-all
    fn fallback(&self, cmd: &str) -> Reply {
        Reply::text_only(templates::default_response(cmd), "Here's what I found")
    }
}

fn pick_random(videos: &[tables::VideoChoice]) -> &tables::VideoChoice {
    let idx = rand::rng().random_range(0..videos.len());
    &videos[idx]
}
