//! Cantata - Playback Session Core
//!
//! Stateless playback-session management for a voice-driven media
//! controller. The assistant sends independent request/response
//! exchanges with no server-side session store; the entire session -
//! queue of track ids, cursor, shuffle/loop/autoplay flags, search
//! cursor - lives inside an opaque continuation token that the caller
//! echoes back on its next request.
//!
//! This crate provides:
//! - The continuation-token codec (compact `key=value&...` wire form,
//!   defaults collapsed out)
//! - `SessionState`: the decoded per-request session snapshot
//! - Queue navigation: skip forward/backward/resume with loop
//!   wraparound and lazy eviction of unplayable entries
//! - Track acquisition: batch append that only verifies candidates
//!   until one plays
//! - The `TrackResolver` trait, the seam to whatever service turns a
//!   track id into a stream URL
//!
//! # Architecture
//!
//! Each request decodes its token into a fresh `SessionState`, mutates
//! it, re-encodes it onto the outbound directive, and drops it. No
//! state outlives a request and nothing is shared, so there is no
//! locking anywhere in this crate. Resolver calls are the only await
//! points and are issued strictly one at a time: navigation must stop
//! at the first success in traversal order.
//!
//! # Example
//!
//! ```rust,no_run
//! use cantata_session::{SessionState, SkipDirection, TrackResolver};
//!
//! # async fn example(resolver: &dyn TrackResolver) {
//! // Round-trip a session through its token.
//! let mut state = SessionState::decode("v0=abc&v1=def&p=0");
//!
//! // Walk to the next playable entry, pruning dead ones.
//! if let Some(track) = state
//!     .skip_track(SkipDirection::Forward, resolver, false)
//!     .await
//! {
//!     println!("now playing {} from {}", track.title, track.url);
//! }
//!
//! // Hand the mutated session back to the caller.
//! let token = state.encode();
//! # let _ = token;
//! # }
//! ```

mod acquire;
mod attributes;
mod error;
mod navigate;
mod resolver;
mod session;
mod shuffle;
mod token;

// Public exports
pub use attributes::ConversationAttributes;
pub use error::ResolveError;
pub use resolver::{ResolvedTrack, TrackResolver};
pub use session::{SessionFlag, SessionState, SkipDirection};
pub use token::QUERY_PLACEHOLDER;
