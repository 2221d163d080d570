//! Queue navigation: skip, resume, and lazy eviction of dead entries
//!
//! A navigation call walks the queue one entry at a time, asking the
//! resolver whether each candidate is playable. Unplayable entries form
//! a contiguous run that is spliced out in one operation at the end of
//! the walk, with the committed cursor shifted to compensate when the
//! removed run sat in front of it. Resolver calls are strictly
//! sequential - the walk must stop at the first success in traversal
//! order.

use crate::resolver::{ResolvedTrack, TrackResolver};
use crate::session::{SessionState, SkipDirection};
use crate::shuffle::shuffle_queue;
use tracing::debug;

impl SessionState {
    /// Skip forward/backward through the queue, or resolve the current
    /// entry in place for `SkipDirection::None`.
    ///
    /// Returns `None` when nothing in scope is playable: the current
    /// entry failed to resolve (in-place case), the walk ran off a
    /// queue end with looping disabled, or a full loop cycle found
    /// nothing. Unplayable entries discovered during a traversal are
    /// evicted from the queue even when the call ends empty-handed.
    ///
    /// With the shuffle flag set the queue is re-randomized before any
    /// index is computed, on every call - which physical track sits at
    /// an index is not stable between shuffled calls.
    pub async fn skip_track<R>(
        &mut self,
        direction: SkipDirection,
        resolver: &R,
        video_capable: bool,
    ) -> Option<ResolvedTrack>
    where
        R: TrackResolver + ?Sized,
    {
        if self.shuffle {
            shuffle_queue(&mut self.queue);
        }

        let Some(step) = direction.step() else {
            // Resume in place: no traversal, no pruning, no wraparound.
            let id = self.queue.get(self.current_index)?;
            return resolver.resolve(id, video_capable).await.ok();
        };

        if self.queue.is_empty() {
            return None;
        }

        let len = self.queue.len() as isize;
        let origin = self.current_index as isize;
        let mut candidate = origin + step;
        let mut resolved: Option<ResolvedTrack> = None;
        // First and last index of the tracked bad run, in walk order.
        let mut bad_run: Option<(isize, isize)> = None;
        let mut attempts = 0usize;

        loop {
            if candidate < 0 {
                if !self.loop_enabled {
                    break;
                }
                candidate = len - 1;
            } else if candidate >= len {
                if !self.loop_enabled {
                    break;
                }
                candidate = 0;
            }

            // Full cycle with nothing playable. The attempt bound also
            // ends the walk for tokens whose cursor lies outside the
            // queue, where the cycle check can never fire.
            if candidate == origin || attempts >= self.queue.len() {
                break;
            }

            match resolver
                .resolve(&self.queue[candidate as usize], video_capable)
                .await
            {
                Ok(track) => {
                    resolved = Some(track);
                    break;
                }
                Err(err) => {
                    debug!(index = candidate, error = %err, "unplayable queue entry");
                    bad_run = match bad_run {
                        Some((first, last)) if last + step == candidate => {
                            Some((first, candidate))
                        }
                        // Non-contiguous (the walk wrapped): the old run
                        // is abandoned and its entries stay queued for a
                        // later navigation to prune.
                        _ => Some((candidate, candidate)),
                    };
                    attempts += 1;
                    candidate += step;
                }
            }
        }

        let mut index = if resolved.is_some() { candidate } else { origin };

        if let Some((first, last)) = bad_run {
            let (lo, hi) = if first <= last {
                (first, last)
            } else {
                (last, first)
            };
            self.queue.drain(lo as usize..=hi as usize);
            debug!(from = lo, to = hi, remaining = self.queue.len(), "evicted unplayable run");
            // Entries removed in front of the landing index shift it down.
            if lo < index {
                index -= hi - lo + 1;
            }
        }

        self.current_index = index as usize;

        resolved
    }
}
