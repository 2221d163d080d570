//! Stream resolution for the catalog client.

use crate::client::CatalogClient;
use crate::error::Result;
use crate::types::{StreamFormat, StreamManifest};
use async_trait::async_trait;
use cantata_session::{ResolveError, ResolvedTrack, TrackResolver};
use tracing::{debug, warn};

impl CatalogClient {
    /// Fetch the stream manifest for one track.
    pub async fn stream_manifest(&self, track_id: &str) -> Result<StreamManifest> {
        self.get_json(&format!("/api/streams/{track_id}"), &[]).await
    }
}

fn pick_format(formats: &[StreamFormat], video_capable: bool) -> Option<&StreamFormat> {
    if video_capable {
        formats
            .iter()
            .find(|f| f.video_codec.is_some() && f.audio_codec.is_some())
    } else {
        formats.iter().find(|f| f.video_codec.is_none())
    }
}

#[async_trait]
impl TrackResolver for CatalogClient {
    async fn resolve(
        &self,
        track_id: &str,
        video_capable: bool,
    ) -> std::result::Result<ResolvedTrack, ResolveError> {
        let manifest = self
            .stream_manifest(track_id)
            .await
            .map_err(|e| ResolveError::Lookup(e.to_string()))?;

        if manifest.is_live {
            debug!(track = %track_id, "live content, using canonical URL");
            return Ok(ResolvedTrack {
                url: manifest.canonical_url,
                title: manifest.title,
            });
        }

        match pick_format(&manifest.formats, video_capable) {
            Some(format) => Ok(ResolvedTrack {
                url: format.url.clone(),
                title: manifest.title,
            }),
            None => {
                warn!(track = %track_id, video_capable, "no playable format in manifest");
                Err(ResolveError::NoPlayableStream {
                    track_id: track_id.to_string(),
                })
            }
        }
    }
}
