//! Progress notifications emitted while picking.
//!
//! The picker reports its progress as short human-readable messages. Any
//! `Fn(&str)` closure can receive them:
//!
//! ```
//! use lineup_solver::{ProgressListener, SearchEvent};
//!
//! let print = |message: &str| println!("{message}");
//! print.on_progress(&SearchEvent::Started { sample_size: 30 }.to_string());
//! ```

use std::fmt::{self, Display};
use std::sync::Mutex;

/// Something worth telling the user during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// The search began with the given target sample size.
    Started { sample_size: usize },
    /// A candidate passed every constraint; `index` is 1-based.
    Accepted { index: usize },
    /// The budget ran out with nothing accepted.
    NoSolution,
}

impl Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::Started { sample_size } => {
                write!(f, "Searching for up to {} possibilities", sample_size)
            }
            SearchEvent::Accepted { index } => write!(f, "Found possibility #{}", index),
            SearchEvent::NoSolution => {
                write!(f, "Could not find any choices within the time limit.")
            }
        }
    }
}

/// Receives progress messages from the picker.
pub trait ProgressListener {
    fn on_progress(&self, message: &str);
}

impl<F: Fn(&str)> ProgressListener for F {
    fn on_progress(&self, message: &str) {
        self(message)
    }
}

/// A listener that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressListener for NoProgress {
    fn on_progress(&self, _message: &str) {}
}

/// A listener that keeps every message it receives.
///
/// Useful in tests and for callers that want to show the log afterwards.
#[derive(Debug, Default)]
pub struct RecordingListener {
    messages: Mutex<Vec<String>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Returns the number of messages received so far.
    pub fn len(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProgressListener for RecordingListener {
    fn on_progress(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_event_messages() {
        assert_eq!(
            SearchEvent::Started { sample_size: 30 }.to_string(),
            "Searching for up to 30 possibilities"
        );
        assert_eq!(
            SearchEvent::Accepted { index: 4 }.to_string(),
            "Found possibility #4"
        );
        assert_eq!(
            SearchEvent::NoSolution.to_string(),
            "Could not find any choices within the time limit."
        );
    }

    #[test]
    fn test_recording_listener_shared() {
        let listener = Arc::new(RecordingListener::new());
        let shared = listener.clone();
        let forward = move |m: &str| shared.on_progress(m);
        forward.on_progress("one");
        forward.on_progress("two");

        assert_eq!(listener.messages(), vec!["one", "two"]);
        assert_eq!(listener.len(), 2);
        assert!(!listener.is_empty());
    }

    #[test]
    fn test_closure_listener() {
        let seen = std::cell::RefCell::new(Vec::new());
        let listener = |m: &str| seen.borrow_mut().push(m.to_string());
        listener.on_progress("hello");
        assert_eq!(seen.into_inner(), vec!["hello"]);
    }
}
