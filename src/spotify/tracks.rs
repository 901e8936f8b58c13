use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    management::TokenManager,
    types::{PlaylistItem, PlaylistItemsResponse},
    warning,
};

/// Fetches every item of a playlist, handling pagination.
///
/// Follows the `next` link of `GET /playlists/{id}/tracks` until the
/// listing is exhausted and returns the raw items. Parsing into the
/// internal `Track` shape happens separately in
/// `utils::parse_playlist_item`, so unparseable items (local files,
/// removed tracks) can be dropped without failing the fetch.
///
/// # Arguments
///
/// * `token_mgr` - Token manager used to obtain a valid access token per page
/// * `playlist_id` - Spotify id of the playlist to list
///
/// # Rate Limiting
///
/// 429 Too Many Requests responses are retried after the delay announced in
/// the `Retry-After` header (when it stays below 120 seconds); 502 Bad
/// Gateway responses are retried after a fixed 10-second delay.
///
/// # Progress Indication
///
/// Displays a spinner while pages are being fetched; it is cleared on all
/// exit paths.
pub async fn get_playlist_items(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<Vec<PlaylistItem>, reqwest::Error> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut items = Vec::new();
    let mut next_url: Option<String> = Some(format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = 100
    ));

    while let Some(api_url) = next_url {
        let token = token_mgr.get_valid_token().await;

        let client = Client::new();
        let response = match client.get(&api_url).bearer_auth(&token).send().await {
            Ok(resp) => resp,
            Err(err) => {
                pb.finish_and_clear();
                return Err(err);
            }
        };

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = response.headers().get("retry-after") {
                let retry_after = retry_after
                    .to_str()
                    .unwrap_or("0")
                    .parse::<u64>()
                    .unwrap_or(0);
                if retry_after <= 120 {
                    sleep(Duration::from_secs(retry_after)).await;
                    next_url = Some(api_url);
                    continue;
                } else {
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again later.",
                        retry_after
                    );
                }
            }
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        next_url = Some(api_url);
                        continue; // retry
                    }
                }
                pb.finish_and_clear();
                return Err(err); // propagate other errors
            }
        };

        let page = match response.json::<PlaylistItemsResponse>().await {
            Ok(page) => page,
            Err(err) => {
                pb.finish_and_clear();
                return Err(err);
            }
        };

        items.extend(page.items);
        pb.set_message(format!("Fetched {} tracks...", items.len()));
        next_url = page.next;
    }

    pb.finish_and_clear();
    Ok(items)
}
