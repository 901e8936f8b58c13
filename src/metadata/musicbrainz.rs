use reqwest::Client;

use crate::{config, types::RecordingSearchResponse, utils, warning};

use super::{TagProvider, pick_recording};

/// Tag provider backed by the MusicBrainz recording search.
///
/// MusicBrainz requires a meaningful User-Agent identifying the application
/// as part of their terms of service. It is configured once here, when the
/// provider's HTTP client is constructed, instead of as ambient global
/// state.
pub struct MusicBrainz {
    client: Client,
}

impl MusicBrainz {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config::musicbrainz_user_agent())
            .build()?;
        Ok(Self { client })
    }

    async fn search_recordings(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<RecordingSearchResponse, reqwest::Error> {
        let api_url = format!("{uri}/recording", uri = &config::musicbrainz_apiurl());
        let query = format!(
            "recording:\"{title}\" AND artist:\"{artist}\"",
            title = title,
            artist = artist
        );

        let response = self
            .client
            .get(&api_url)
            .query(&[("query", query.as_str()), ("fmt", "json"), ("limit", "5")])
            .send()
            .await?
            .error_for_status()?;

        response.json::<RecordingSearchResponse>().await
    }
}

impl TagProvider for MusicBrainz {
    async fn search_tags(&self, artist: &str, title: &str) -> Vec<String> {
        let result = match self.search_recordings(artist, title).await {
            Ok(result) => result,
            Err(e) => {
                warning!("MusicBrainz lookup failed for '{}': {}", title, e);
                return Vec::new();
            }
        };

        let Some(best) = pick_recording(&result.recordings, artist) else {
            warning!("No MusicBrainz result for '{}'.", title);
            return Vec::new();
        };

        utils::normalize_tags(best.tags.iter().map(|t| t.name.clone()).collect())
    }
}
