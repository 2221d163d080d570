//! Session state carried across stateless request round-trips
//!
//! One `SessionState` exists per in-flight request: decoded from the
//! continuation token, mutated by navigation/acquisition, re-encoded
//! into the outbound token, then dropped. Nothing is shared between
//! requests, so none of this needs synchronization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete playback session snapshot.
///
/// Every field round-trips through the continuation token (see the
/// codec in `token.rs`), collapsing to its default when absent. The
/// queue is an owned ordered list of track ids with `current_index` as
/// a cursor into it; `current_index` is only meaningful while the queue
/// is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Randomize queue order before each navigation
    pub shuffle: bool,

    /// Cursor into an external ranked search-result list, used to retry
    /// with the next match across independent requests
    pub search_result: usize,

    /// Enqueue more tracks automatically when the queue runs out
    pub autoplay: bool,

    /// Name of the voice intent that created this session
    pub current_intent: String,

    /// Original search text (spaces, not placeholder form)
    pub query: String,

    /// Wrap past the queue ends instead of terminating
    pub loop_enabled: bool,

    /// Playback queue of track ids (duplicates allowed, order significant)
    pub queue: Vec<String>,

    /// Index into `queue` of the track currently (or about to be) playing
    pub current_index: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            shuffle: false,
            search_result: 0,
            // Autoplay is on unless something explicitly turned it off;
            // a token with no `a` key means "autoplay on".
            autoplay: true,
            current_intent: String::new(),
            query: String::new(),
            loop_enabled: false,
            queue: Vec::new(),
            current_index: 0,
        }
    }
}

/// The session flags a voice command may toggle.
///
/// An explicit enum rather than flag-by-name: every toggle goes through
/// one exhaustive `match`, so a new flag cannot be half-wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlag {
    Shuffle,
    Loop,
    Autoplay,
}

/// Navigation direction for `skip_track`.
///
/// `None` means "resume/seek in place" and never participates in index
/// arithmetic; the ±1 step exists only for the two traversing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    None,
    Forward,
    Backward,
}

impl SkipDirection {
    /// Step applied to the queue cursor, or `None` for the in-place case.
    pub(crate) fn step(self) -> Option<isize> {
        match self {
            SkipDirection::None => None,
            SkipDirection::Forward => Some(1),
            SkipDirection::Backward => Some(-1),
        }
    }
}

impl SessionState {
    /// Create an empty session (autoplay on, nothing queued).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one of the togglable session flags.
    pub fn set_flag(&mut self, flag: SessionFlag, value: bool) {
        match flag {
            SessionFlag::Shuffle => self.shuffle = value,
            SessionFlag::Loop => self.loop_enabled = value,
            SessionFlag::Autoplay => self.autoplay = value,
        }
    }

    /// Track id at the current cursor, if the queue has one there.
    pub fn current_track(&self) -> Option<&str> {
        self.queue.get(self.current_index).map(String::as_str)
    }
}

/// Displays as the wire token.
impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
