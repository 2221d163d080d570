//! Error types for track resolution

use thiserror::Error;

/// Failure to turn a track id into a playable stream.
///
/// Resolution failures are never fatal to a session: the navigator
/// prunes the offending entry and keeps walking, and acquisition drops
/// the candidate. Callers only see them indirectly, as an empty result
/// when nothing in scope resolves.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The lookup succeeded but no stream matches the device capability
    #[error("no playable stream for track {track_id}")]
    NoPlayableStream { track_id: String },

    /// The underlying lookup failed (transport, parse, service error)
    #[error("track lookup failed: {0}")]
    Lookup(String),
}
