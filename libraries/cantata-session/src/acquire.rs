//! Track acquisition: appending discovered candidates to the queue
//!
//! Acquisition only verifies candidates until it has something to play.
//! Leading candidates that fail resolution are discarded outright;
//! everything after the first success is appended untested and left for
//! the navigator to prune lazily if it turns out dead. Checking the
//! whole batch up front would stall the response on dozens of resolver
//! round-trips for tracks that may never be reached.

use crate::resolver::{ResolvedTrack, TrackResolver};
use crate::session::SessionState;
use tracing::debug;

impl SessionState {
    /// Append a batch of candidate track ids to the queue.
    ///
    /// Returns the first candidate that resolved, which is also the
    /// first entry actually queued from this batch, or `None` when
    /// nothing in the batch resolves (the queue is then unchanged).
    pub async fn add_tracks<R>(
        &mut self,
        candidates: &[String],
        resolver: &R,
        video_capable: bool,
    ) -> Option<ResolvedTrack>
    where
        R: TrackResolver + ?Sized,
    {
        let mut found: Option<ResolvedTrack> = None;

        for id in candidates {
            if found.is_none() {
                match resolver.resolve(id, video_capable).await {
                    Ok(track) => found = Some(track),
                    Err(err) => {
                        debug!(track_id = %id, error = %err, "dropping unresolvable candidate");
                        continue;
                    }
                }
            }
            self.queue.push(id.clone());
        }

        found
    }
}
