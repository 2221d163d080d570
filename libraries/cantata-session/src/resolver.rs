//! Track resolver seam
//!
//! The navigator and acquisition never know how a track id becomes a
//! playable stream; they only see this trait. The concrete resolver
//! lives with the catalog client. Implementations must fold every
//! internal failure into `ResolveError` - a resolver call either yields
//! a stream or a recoverable failure, never an unhandled fault.

use crate::error::ResolveError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A resolved, immediately playable track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTrack {
    /// Stream URL (or canonical page URL for live content)
    pub url: String,

    /// Display title
    pub title: String,
}

/// Turns a track id into a playable stream URL and title.
///
/// `video_capable` selects between an audio-only stream and one
/// carrying both audio and video, depending on what the requesting
/// device can render.
#[async_trait]
pub trait TrackResolver: Send + Sync {
    async fn resolve(
        &self,
        track_id: &str,
        video_capable: bool,
    ) -> Result<ResolvedTrack, ResolveError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Scripted resolver double for navigator and acquisition tests.

    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Resolver that succeeds for every id except the scripted bad
    /// ones, and records the order of every call it receives.
    pub struct FakeResolver {
        bad: HashSet<String>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeResolver {
        pub fn new() -> Self {
            Self {
                bad: HashSet::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_for<const N: usize>(bad: [&str; N]) -> Self {
            Self {
                bad: bad.iter().map(|s| (*s).to_string()).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TrackResolver for FakeResolver {
        async fn resolve(
            &self,
            track_id: &str,
            video_capable: bool,
        ) -> Result<ResolvedTrack, ResolveError> {
            self.calls.lock().unwrap().push(track_id.to_string());

            if self.bad.contains(track_id) {
                return Err(ResolveError::NoPlayableStream {
                    track_id: track_id.to_string(),
                });
            }

            let kind = if video_capable { "av" } else { "audio" };
            Ok(ResolvedTrack {
                url: format!("https://streams.test/{kind}/{track_id}"),
                title: format!("Title of {track_id}"),
            })
        }
    }
}
