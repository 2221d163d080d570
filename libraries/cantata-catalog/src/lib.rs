//! HTTP client for the media catalog service.
//!
//! This crate is the track source behind a playback session: it turns
//! spoken queries, playlist names, channel names and pasted URLs into
//! batches of track ids, and resolves individual track ids into
//! playable stream URLs. The latter is exposed through the session
//! crate's [`cantata_session::TrackResolver`] trait, so the session
//! core never sees HTTP.

mod client;
mod error;
mod resolve;
mod search;
mod types;

pub use client::{CatalogClient, CatalogConfig};
pub use error::{CatalogError, Result};
pub use search::{classify_url, SearchOptions, UrlTarget};
pub use types::{
    ResourceKind, SearchPage, SourceBatch, StreamFormat, StreamManifest,
};
