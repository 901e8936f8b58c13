use reqwest::Client;

use crate::{
    config,
    types::{LastfmTrack, TopTagsResponse, TrackSearchResponse},
    utils, warning,
};

use super::{TagProvider, pick_lastfm_track};

/// Tag provider backed by Last.fm's track search and top-tags lookup.
///
/// Resolution takes two calls: `track.search` to reconcile the noisy query
/// against Last.fm's catalog (artist-only match heuristic), then
/// `track.getTopTags` for the chosen candidate. Both are unauthenticated
/// reads; only the API key is required.
pub struct Lastfm {
    client: Client,
    api_key: String,
}

impl Lastfm {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_key: config::lastfm_api_key(),
        }
    }

    async fn search_track(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Vec<LastfmTrack>, reqwest::Error> {
        let response = self
            .client
            .get(&config::lastfm_apiurl())
            .query(&[
                ("method", "track.search"),
                ("track", title),
                ("artist", artist),
                ("api_key", &self.api_key),
                ("format", "json"),
                ("limit", "5"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let parsed = response.json::<TrackSearchResponse>().await?;
        Ok(parsed
            .results
            .and_then(|r| r.track_matches)
            .map(|m| m.track)
            .unwrap_or_default())
    }

    async fn top_tags(&self, artist: &str, title: &str) -> Result<Vec<String>, reqwest::Error> {
        let response = self
            .client
            .get(&config::lastfm_apiurl())
            .query(&[
                ("method", "track.getTopTags"),
                ("track", title),
                ("artist", artist),
                ("api_key", &self.api_key),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let parsed = response.json::<TopTagsResponse>().await?;
        Ok(parsed
            .toptags
            .map(|t| t.tag.into_iter().map(|tag| tag.name).collect())
            .unwrap_or_default())
    }
}

impl TagProvider for Lastfm {
    async fn search_tags(&self, artist: &str, title: &str) -> Vec<String> {
        let candidates = match self.search_track(artist, title).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warning!("Last.fm search failed for '{}': {}", title, e);
                return Vec::new();
            }
        };

        let Some(best) = pick_lastfm_track(&candidates, artist) else {
            warning!("No Last.fm result for '{}'.", title);
            return Vec::new();
        };

        match self.top_tags(&best.artist, &best.name).await {
            Ok(tags) => utils::normalize_tags(tags),
            Err(e) => {
                warning!("Last.fm top tags failed for '{}': {}", best.name, e);
                Vec::new()
            }
        }
    }
}
