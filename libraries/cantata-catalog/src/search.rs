//! Search and track-source operations.
//!
//! Every operation here hands back plain track-id batches; resolving an
//! id into a playable stream is the resolver's job (`resolve.rs`).

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::types::{
    ChannelListPage, PlaylistItemsPage, PlaylistListPage, ResourceInfo, ResourceKind, SearchPage,
    SourceBatch,
};
use tracing::debug;
use url::Url;

/// How many playlists/channels a cursor-skipped search scans.
const SEARCH_SCAN_LIMIT: usize = 10;

/// Maximum number of track ids returned in one batch.
const BATCH_LIMIT: usize = 50;

/// Upper bound on items collected while paging through a playlist.
const COLLECT_CAP: usize = 100;

/// Optional knobs for a raw search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Restrict to one channel's content
    pub channel_id: Option<String>,
    /// Find content related to this track id
    pub related_to: Option<String>,
    /// Sort order, e.g. "date" for newest first
    pub order: Option<String>,
    /// Continuation token from a previous page
    pub page_token: Option<String>,
}

/// The kind of resource a public URL points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTarget {
    Video { id: String },
    Playlist { id: String },
    Channel { id: String },
    User { name: String },
}

/// Work out what a pasted catalog URL refers to.
///
/// Playlist links win over the embedded video when both are present, so
/// sharing a "watch" link from inside a playlist queues the playlist.
pub fn classify_url(raw: &str) -> Result<UrlTarget> {
    let parsed = Url::parse(raw).map_err(|e| CatalogError::InvalidUrl(format!("{raw}: {e}")))?;

    let list = parsed
        .query_pairs()
        .find(|(k, _)| k == "list")
        .map(|(_, v)| v.into_owned());
    let video = parsed
        .query_pairs()
        .find(|(k, _)| k == "v")
        .map(|(_, v)| v.into_owned());

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        ["watch"] | ["playlist"] if list.is_some() => Ok(UrlTarget::Playlist {
            id: list.unwrap_or_default(),
        }),
        ["watch"] => video
            .map(|id| UrlTarget::Video { id })
            .ok_or_else(|| CatalogError::InvalidUrl(raw.into())),
        ["channel", id] => Ok(UrlTarget::Channel { id: (*id).into() }),
        ["user", name] => Ok(UrlTarget::User {
            name: (*name).into(),
        }),
        [id] => Ok(UrlTarget::Video { id: (*id).into() }),
        _ => Err(CatalogError::InvalidUrl(raw.into())),
    }
}

impl CatalogClient {
    /// Raw search against the catalog.
    pub async fn search(
        &self,
        query: &str,
        kind: ResourceKind,
        limit: usize,
        options: &SearchOptions,
    ) -> Result<SearchPage> {
        let limit = limit.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("q", query),
            ("kind", kind.as_param()),
            ("limit", &limit),
        ];
        if let Some(channel) = &options.channel_id {
            params.push(("channel", channel));
        }
        if let Some(related) = &options.related_to {
            params.push(("related", related));
        }
        if let Some(order) = &options.order {
            params.push(("order", order));
        }
        if let Some(page) = &options.page_token {
            params.push(("page", page));
        }

        self.get_json("/api/search", &params).await
    }

    /// Track ids matching a free-text query, most relevant first.
    ///
    /// `related_to` switches the search into related-content mode and
    /// `channel_id` restricts it to one channel.
    pub async fn track_ids(
        &self,
        query: &str,
        related_to: Option<&str>,
        channel_id: Option<&str>,
    ) -> Result<Vec<String>> {
        let options = SearchOptions {
            channel_id: channel_id.map(String::from),
            related_to: related_to.map(String::from),
            ..SearchOptions::default()
        };
        let page = self
            .search(query, ResourceKind::Video, BATCH_LIMIT, &options)
            .await?;

        Ok(page
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    /// Tracks of the `cursor`-th playlist matching `name`.
    ///
    /// The cursor lets a caller walk through alternative matches when
    /// the best-ranked playlist was not the one they meant.
    pub async fn playlist_tracks(&self, name: &str, cursor: usize) -> Result<SourceBatch> {
        let page = self
            .search(
                name,
                ResourceKind::Playlist,
                SEARCH_SCAN_LIMIT,
                &SearchOptions::default(),
            )
            .await?;
        if page.items.is_empty() {
            return Err(CatalogError::NoResults);
        }

        let playlist = page
            .items
            .iter()
            .skip(cursor)
            .find_map(|item| {
                item.id
                    .playlist_id
                    .as_deref()
                    .map(|id| (id.to_string(), item.snippet.title.clone()))
            })
            .ok_or(CatalogError::CursorExhausted)?;

        debug!(playlist = %playlist.0, title = %playlist.1, "matched playlist");

        let track_ids = self.collect_playlist_items(&playlist.0).await?;
        Ok(SourceBatch {
            track_ids,
            title: playlist.1,
        })
    }

    /// Tracks from the `cursor`-th channel matching `query`.
    pub async fn channel_tracks(&self, query: &str, cursor: usize) -> Result<SourceBatch> {
        let page = self
            .search(
                query,
                ResourceKind::Channel,
                SEARCH_SCAN_LIMIT,
                &SearchOptions::default(),
            )
            .await?;
        if page.items.is_empty() {
            return Err(CatalogError::NoResults);
        }

        let channel = page.items.get(cursor).ok_or(CatalogError::CursorExhausted)?;
        let channel_id = channel
            .id
            .channel_id
            .as_deref()
            .ok_or(CatalogError::CursorExhausted)?;

        let track_ids = self.track_ids("", None, Some(channel_id)).await?;
        Ok(SourceBatch {
            track_ids,
            title: channel.snippet.title.clone(),
        })
    }

    /// Tracks of the own channel's playlist best matching `query`.
    ///
    /// Playlists are ranked by string similarity to the query, and the
    /// cursor steps down that ranking.
    pub async fn own_playlist_tracks(&self, query: &str, cursor: usize) -> Result<SourceBatch> {
        let channel_id = self.own_channel_id()?.to_string();
        let page: PlaylistListPage = self
            .get_json(&format!("/api/channels/{channel_id}/playlists"), &[])
            .await?;
        if page.items.is_empty() {
            return Err(CatalogError::NoResults);
        }

        let mut ranked: Vec<_> = page
            .items
            .iter()
            .map(|playlist| {
                let score =
                    strsim::normalized_levenshtein(&playlist.snippet.title.to_lowercase(), &query.to_lowercase());
                (score, playlist)
            })
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let (score, playlist) = ranked.get(cursor).ok_or(CatalogError::CursorExhausted)?;
        debug!(playlist = %playlist.id, title = %playlist.snippet.title, score, "ranked own playlist");

        let track_ids = self.collect_playlist_items(&playlist.id).await?;
        Ok(SourceBatch {
            track_ids,
            title: playlist.snippet.title.clone(),
        })
    }

    /// Most recent uploads of the own channel.
    pub async fn latest_uploads(&self) -> Result<Vec<String>> {
        let channel_id = self.own_channel_id()?.to_string();
        let options = SearchOptions {
            channel_id: Some(channel_id),
            order: Some("date".into()),
            ..SearchOptions::default()
        };
        let page = self
            .search("", ResourceKind::Video, BATCH_LIMIT, &options)
            .await?;

        Ok(page
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    /// Display title of one resource.
    pub async fn resource_title(&self, id: &str, kind: ResourceKind) -> Result<String> {
        let info: ResourceInfo = self
            .get_json(&format!("/api/{}/{id}", kind.as_path()), &[])
            .await?;
        Ok(info.title)
    }

    /// Track ids behind a pasted catalog URL.
    pub async fn tracks_from_url(&self, url: &str) -> Result<SourceBatch> {
        match classify_url(url)? {
            UrlTarget::Video { id } => Ok(SourceBatch {
                track_ids: vec![id],
                title: String::new(),
            }),
            UrlTarget::Playlist { id } => {
                let title = self.resource_title(&id, ResourceKind::Playlist).await?;
                if title.is_empty() {
                    return Err(CatalogError::NoResults);
                }
                let track_ids = self.collect_playlist_items(&id).await?;
                Ok(SourceBatch { track_ids, title })
            }
            UrlTarget::Channel { id } => {
                let title = self.resource_title(&id, ResourceKind::Channel).await?;
                let track_ids = self.track_ids("", None, Some(&id)).await?;
                Ok(SourceBatch { track_ids, title })
            }
            UrlTarget::User { name } => {
                let page: ChannelListPage =
                    self.get_json("/api/channels", &[("handle", name.as_str())]).await?;
                let channel = page.items.first().ok_or(CatalogError::NoResults)?;
                let id = channel.id.clone();
                let title = self.resource_title(&id, ResourceKind::Channel).await?;
                let track_ids = self.track_ids("", None, Some(&id)).await?;
                Ok(SourceBatch { track_ids, title })
            }
        }
    }

    /// Page through a playlist, collecting up to [`COLLECT_CAP`] ids and
    /// returning the first [`BATCH_LIMIT`] of them.
    async fn collect_playlist_items(&self, playlist_id: &str) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut params: Vec<(&str, &str)> = Vec::new();
            if let Some(token) = &page_token {
                params.push(("page", token));
            }
            let page: PlaylistItemsPage = self
                .get_json(&format!("/api/playlists/{playlist_id}/items"), &params)
                .await?;

            ids.extend(page.items.into_iter().map(|item| item.video_id));

            if ids.len() >= COLLECT_CAP {
                break;
            }
            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        ids.truncate(BATCH_LIMIT);
        debug!(playlist = %playlist_id, count = ids.len(), "collected playlist items");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_with_list_is_a_playlist() {
        let target =
            classify_url("https://media.example.com/watch?v=abc123&list=PL77").expect("valid");
        assert_eq!(target, UrlTarget::Playlist { id: "PL77".into() });
    }

    #[test]
    fn playlist_url_is_a_playlist() {
        let target = classify_url("https://media.example.com/playlist?list=PL9").expect("valid");
        assert_eq!(target, UrlTarget::Playlist { id: "PL9".into() });
    }

    #[test]
    fn watch_url_is_a_video() {
        let target = classify_url("https://media.example.com/watch?v=abc123").expect("valid");
        assert_eq!(target, UrlTarget::Video { id: "abc123".into() });
    }

    #[test]
    fn channel_and_user_urls_are_recognized() {
        assert_eq!(
            classify_url("https://media.example.com/channel/UC42").expect("valid"),
            UrlTarget::Channel { id: "UC42".into() }
        );
        assert_eq!(
            classify_url("https://media.example.com/user/somebody").expect("valid"),
            UrlTarget::User {
                name: "somebody".into()
            }
        );
    }

    #[test]
    fn short_link_is_a_video() {
        let target = classify_url("https://m.example.com/abc123").expect("valid");
        assert_eq!(target, UrlTarget::Video { id: "abc123".into() });
    }

    #[test]
    fn junk_urls_are_rejected() {
        assert!(classify_url("not a url").is_err());
        assert!(classify_url("https://media.example.com/watch").is_err());
        assert!(classify_url("https://media.example.com/a/b/c").is_err());
    }
}
