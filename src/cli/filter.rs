use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    management::TokenManager,
    metadata::{Lastfm, MusicBrainz, TagProvider},
    spotify, success,
    types::{Track, TrackTableRow},
    utils::{self, TagSource},
    warning,
};

pub async fn filter(
    playlist_name: String,
    genre: String,
    user: Option<String>,
    provider: TagSource,
    target: Option<String>,
) {
    validate_genre(&genre).await;

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run genresift auth\n Error: {}",
                e
            );
        }
    };

    let user_id = match user.or_else(config::spotify_user) {
        Some(id) => id,
        None => match spotify::user::current_user(&mut token_mgr).await {
            Ok(user) => {
                info!(
                    "Logged in as: {}",
                    user.display_name.clone().unwrap_or_else(|| user.id.clone())
                );
                user.id
            }
            Err(e) => error!("Could not retrieve user info: {}", e),
        },
    };

    info!("Searching for playlist '{}'...", playlist_name);
    let playlist = match spotify::playlist::find_by_name(&mut token_mgr, &playlist_name).await {
        Ok(Some(playlist)) => playlist,
        Ok(None) => error!("Playlist '{}' not found for user {}.", playlist_name, user_id),
        Err(e) => error!("Failed to list playlists: {}", e),
    };

    let items = match spotify::tracks::get_playlist_items(&mut token_mgr, &playlist.id).await {
        Ok(items) => items,
        Err(e) => error!("Failed to fetch playlist tracks: {}", e),
    };

    // drop local files and removed tracks instead of failing on them
    let tracks: Vec<Track> = items.iter().filter_map(utils::parse_playlist_item).collect();
    info!(
        "Loaded {} tracks from '{}'. Resolving tags via {}...",
        tracks.len(),
        playlist_name,
        provider
    );

    let matched = match provider {
        TagSource::MusicBrainz => match MusicBrainz::new() {
            Ok(mb) => resolve_and_filter(&mb, &tracks, &genre).await,
            Err(e) => error!("Failed to build MusicBrainz client: {}", e),
        },
        TagSource::Lastfm => resolve_and_filter(&Lastfm::new(), &tracks, &genre).await,
    };

    if matched.is_empty() {
        info!(
            "No tracks found in playlist '{}' matching genre '{}'.",
            playlist_name, genre
        );
        return;
    }

    success!("Found {} tracks matching '{}'.", matched.len(), genre);

    let table_rows: Vec<TrackTableRow> = matched
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artist: t.artist.clone(),
            tags: t.tags.clone().unwrap_or_default().join(","),
        })
        .collect();
    println!("{}", Table::new(table_rows));

    let target_name = target.unwrap_or_else(|| utils::title_case(&genre));
    let uris: Vec<String> = matched.iter().map(|t| t.uri.clone()).collect();

    info!("Writing playlist '{}'...", target_name);
    match spotify::playlist::converge(&mut token_mgr, &user_id, &target_name, uris).await {
        Ok(_) => success!(
            "Playlist '{}' is ready with {} tracks.",
            target_name,
            matched.len()
        ),
        Err(e) => error!(
            "Failed to create or update playlist '{}': {}",
            target_name, e
        ),
    }
}

/// Validates the requested genre against the local vocabulary before any
/// network call. A missing vocabulary file degrades to a warning and no
/// validation.
async fn validate_genre(genre: &str) {
    match utils::load_valid_genres().await {
        Ok(vocabulary) => {
            if vocabulary.is_empty() || vocabulary.contains(&genre.to_lowercase()) {
                return;
            }

            match utils::find_closest_genre(genre, &vocabulary) {
                Some(suggestion) => {
                    error!("Invalid genre: {}. Did you mean: {}?", genre, suggestion)
                }
                None => error!("Invalid genre: {}.", genre),
            }
        }
        Err(e) => warning!("{}", e),
    }
}

async fn resolve_and_filter<P: TagProvider>(
    provider: &P,
    tracks: &[Track],
    genre: &str,
) -> Vec<Track> {
    let pb = ProgressBar::new(tracks.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut matched: Vec<Track> = Vec::new();

    for track in tracks {
        pb.set_message(format!("{} - {}", track.artist, track.name));
        let tags = provider.search_tags(&track.artist, &track.name).await;

        if utils::genre_matches(&tags, genre) {
            let mut track = track.clone();
            track.tags = Some(tags);
            matched.push(track);
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    matched
}
