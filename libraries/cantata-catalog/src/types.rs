//! Response and request types for the catalog service API.

use serde::Deserialize;

/// The kinds of catalog resource a search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Video,
    Playlist,
    Channel,
}

impl ResourceKind {
    /// Value of the `kind` query parameter.
    pub(crate) fn as_param(self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Channel => "channel",
        }
    }

    /// Path segment for per-resource endpoints.
    pub(crate) fn as_path(self) -> &'static str {
        match self {
            ResourceKind::Video => "videos",
            ResourceKind::Playlist => "playlists",
            ResourceKind::Channel => "channels",
        }
    }
}

/// One page of ranked search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub items: Vec<SearchItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single search match; exactly one of the id fields is set,
/// depending on the kind searched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    #[serde(default)]
    pub id: ResourceId,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub playlist_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub title: String,
}

/// One page of a playlist's entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsPage {
    #[serde(default)]
    pub items: Vec<PlaylistItemRef>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemRef {
    pub video_id: String,
}

/// A playlist belonging to a channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRef {
    pub id: String,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistListPage {
    #[serde(default)]
    pub items: Vec<PlaylistRef>,
}

/// Channel lookup result (by handle).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelListPage {
    #[serde(default)]
    pub items: Vec<ChannelRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRef {
    pub id: String,
}

/// Title-only view of a resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    #[serde(default)]
    pub title: String,
}

/// Stream manifest for one track id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamManifest {
    pub title: String,
    /// Public page URL; the playable URL for live content
    pub canonical_url: String,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub formats: Vec<StreamFormat>,
}

/// One downloadable/streamable rendition of a track.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamFormat {
    pub url: String,
    #[serde(default)]
    pub audio_codec: Option<String>,
    #[serde(default)]
    pub video_codec: Option<String>,
}

/// A batch of track ids from one source (playlist, channel, search),
/// with the display title of that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBatch {
    pub track_ids: Vec<String>,
    pub title: String,
}
