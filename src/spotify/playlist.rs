use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, Playlist, PlaylistUrisRequest,
        SnapshotResponse, UserPlaylistsResponse,
    },
    utils,
};

/// Locates a playlist of the authenticated user by its exact name.
///
/// Walks the paginated `GET /me/playlists` listing (50 per page, following
/// the `next` link) until a playlist whose name matches exactly is found or
/// the listing is exhausted.
///
/// # Arguments
///
/// * `token_mgr` - Token manager used to obtain a valid access token per page
/// * `name` - Exact playlist name to look for (case-sensitive)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(Playlist))` - The first playlist with a matching name
/// - `Ok(None)` - No playlist with that name exists
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP-related error
///
/// # Duplicate Names
///
/// Spotify allows several playlists to share a name. The first match in page
/// order wins; there is no conflict detection.
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay. Other
/// errors are propagated immediately.
pub async fn find_by_name(
    token_mgr: &mut TokenManager,
    name: &str,
) -> Result<Option<Playlist>, reqwest::Error> {
    let mut offset: u64 = 0;

    loop {
        let token = token_mgr.get_valid_token().await;
        let api_url = format!(
            "{uri}/me/playlists?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            limit = 50,
            offset = offset
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(&token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let page = response.json::<UserPlaylistsResponse>().await?;
        let page_len = page.items.len() as u64;

        if let Some(playlist) = page.items.into_iter().find(|p| p.name == name) {
            return Ok(Some(playlist));
        }

        if page.next.is_none() || page_len == 0 {
            return Ok(None);
        }

        offset += page_len;
    }
}

/// Creates a new private playlist for the given user.
pub async fn create(
    token_mgr: &mut TokenManager,
    user_id: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let token = token_mgr.get_valid_token().await;
    let api_url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Filtered by genre with genresift.".to_string(),
        public: false,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(&token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Replaces the entire contents of a playlist with the given uris.
///
/// Spotify caps this call at 100 uris; callers batch via
/// `utils::batch_plan` before invoking it.
pub async fn replace_tracks(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<SnapshotResponse, reqwest::Error> {
    let token = token_mgr.get_valid_token().await;
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client
        .put(&api_url)
        .bearer_auth(&token)
        .json(&PlaylistUrisRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    response.json::<SnapshotResponse>().await
}

/// Appends uris to the end of a playlist. Capped at 100 uris per call.
pub async fn add_tracks(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<SnapshotResponse, reqwest::Error> {
    let token = token_mgr.get_valid_token().await;
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(&token)
        .json(&PlaylistUrisRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    response.json::<SnapshotResponse>().await
}

/// Converges the named playlist to exactly the given track uris.
///
/// If a playlist with that exact name exists its contents are replaced:
/// the first batch of up to 100 uris goes through a replace call (clearing
/// everything else), remaining batches are appended. Otherwise a new
/// private playlist is created and all batches are appended. Running this
/// twice with the same name and uri list leaves the playlist unchanged.
///
/// # Returns
///
/// The id of the converged playlist.
///
/// # Errors
///
/// Write failures propagate to the caller and abort the run; there is no
/// partial-failure recovery.
pub async fn converge(
    token_mgr: &mut TokenManager,
    user_id: &str,
    name: &str,
    uris: Vec<String>,
) -> Result<String, reqwest::Error> {
    let batches = utils::batch_plan(&uris);

    match find_by_name(token_mgr, name).await? {
        Some(existing) => {
            let mut batches = batches.into_iter();
            // first batch replaces, which also clears the previous contents
            if let Some(first) = batches.next() {
                replace_tracks(token_mgr, &existing.id, first).await?;
            }
            for batch in batches {
                add_tracks(token_mgr, &existing.id, batch).await?;
            }
            Ok(existing.id)
        }
        None => {
            let created = create(token_mgr, user_id, name).await?;
            for batch in batches {
                add_tracks(token_mgr, &created.id, batch).await?;
            }
            Ok(created.id)
        }
    }
}
