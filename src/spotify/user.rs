use reqwest::Client;

use crate::{config, management::TokenManager, types::CurrentUserResponse};

/// Fetches the profile of the authenticated user from `GET /me`.
///
/// Used to resolve the playlist owner when no user id was supplied via the
/// `--user` flag or the `SPOTIFY_USER_ID` environment variable, and for the
/// "Logged in as" status line at the start of a filter run.
pub async fn current_user(
    token_mgr: &mut TokenManager,
) -> Result<CurrentUserResponse, reqwest::Error> {
    let token = token_mgr.get_valid_token().await;
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUserResponse>().await
}
