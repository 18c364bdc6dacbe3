//! Speech synthesis and recognition coordination
//!
//! The synthesizer enforces at most one in-flight utterance: every speak
//! request cancels whatever is currently playing before the new utterance
//! starts. Recognition and synthesis are mutually exclusive in the other
//! direction too, so starting the recognizer silences the synthesizer.
//!
//! Actual audio output is behind [`SpeechBackend`]; the terminal build
//! ships with [`NullBackend`], which reports itself unavailable and lets
//! the UI surface a one-time notice instead of failing.

use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Platform audio interface for the synthesizer
pub trait SpeechBackend: Send + Sync {
    /// Whether this backend can produce audio at all
    fn is_available(&self) -> bool;

    /// Begin speaking the given text
    fn speak(&self, text: &str) -> Result<()>;

    /// Cancel any utterance currently playing or queued
    fn cancel(&self) -> Result<()>;

    /// Whether an utterance is currently playing
    fn is_speaking(&self) -> bool;
}

/// Backend for environments with no audio output
pub struct NullBackend;

impl SpeechBackend for NullBackend {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn cancel(&self) -> Result<()> {
        Ok(())
    }

    fn is_speaking(&self) -> bool {
        false
    }
}

/// Speech synthesizer with the cancel-before-speak invariant
pub struct Synthesizer {
    backend: Arc<dyn SpeechBackend>,
    enabled: bool,
    notice_shown: AtomicBool,
}

impl Synthesizer {
    /// Create a synthesizer over the given backend
    pub fn new(backend: Arc<dyn SpeechBackend>, enabled: bool) -> Self {
        Self {
            backend,
            enabled,
            notice_shown: AtomicBool::new(false),
        }
    }

    /// Speak the given text, replacing any in-flight utterance
    ///
    /// Returns `true` if the utterance was handed to the backend. When the
    /// backend is unavailable, returns `false` exactly once with the
    /// expectation that the caller shows an unsupported-feature notice;
    /// subsequent calls return `false` silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the cancel or the utterance.
    pub fn speak(&self, text: &str) -> Result<bool> {
        if !self.enabled {
            return Ok(false);
        }
        if !self.backend.is_available() {
            return Ok(false);
        }

        // Cancel first so overlapping requests never stack utterances.
        self.backend.cancel()?;
        self.backend.speak(text)?;
        Ok(true)
    }

    /// Stop any in-flight utterance
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the cancel.
    pub fn cancel(&self) -> Result<()> {
        if self.backend.is_available() {
            self.backend.cancel()?;
        }
        Ok(())
    }

    /// Whether speech output is enabled and the backend can produce audio
    pub fn is_supported(&self) -> bool {
        self.enabled && self.backend.is_available()
    }

    /// Whether the unsupported-feature notice should be shown now
    ///
    /// Returns `true` on the first call after an unsupported speak attempt
    /// and `false` thereafter, so the notice appears at most once per run.
    pub fn should_notify_unsupported(&self) -> bool {
        if self.is_supported() {
            return false;
        }
        !self.notice_shown.swap(true, Ordering::SeqCst)
    }
}

/// Speech recognizer session state
///
/// Listening and speaking are mutually exclusive. Starting the recognizer
/// cancels the synthesizer; the caller decides what to do with the
/// transcript once listening stops.
pub struct Recognizer {
    listening: AtomicBool,
    available: bool,
}

impl Recognizer {
    /// Create a recognizer; `available` reflects platform support
    pub fn new(available: bool) -> Self {
        Self {
            listening: AtomicBool::new(false),
            available,
        }
    }

    /// Begin a listening session, silencing the synthesizer first
    ///
    /// Returns `false` without side effects when recognition is
    /// unsupported or a session is already active.
    ///
    /// # Errors
    ///
    /// Returns an error if cancelling the synthesizer fails.
    pub fn start(&self, synthesizer: &Synthesizer) -> Result<bool> {
        if !self.available {
            return Ok(false);
        }
        if self.listening.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }
        synthesizer.cancel()?;
        Ok(true)
    }

    /// End the current listening session
    ///
    /// Returns `false` if no session was active.
    pub fn stop(&self) -> bool {
        self.listening.swap(false, Ordering::SeqCst)
    }

    /// Whether a listening session is active
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }
}
