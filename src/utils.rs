use std::{fmt, path::PathBuf};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use strsim::normalized_levenshtein;

use crate::types::{PlaylistItem, Track};

/// Spotify caps replace/add playlist calls at 100 uris.
pub const WRITE_BATCH_SIZE: usize = 100;

/// At most this many tags are kept per resolved track.
pub const MAX_TAGS: usize = 5;

/// Minimum normalized similarity for a vocabulary suggestion.
pub const SUGGESTION_CUTOFF: f64 = 0.75;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    MusicBrainz,
    Lastfm,
}

impl fmt::Display for TagSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSource::MusicBrainz => write!(f, "musicbrainz"),
            TagSource::Lastfm => write!(f, "lastfm"),
        }
    }
}

pub fn parse_tag_source(s: &str) -> Result<TagSource, String> {
    match s.trim().to_lowercase().as_str() {
        "" => Err("provider cannot be empty".to_string()),
        "musicbrainz" | "mb" => Ok(TagSource::MusicBrainz),
        "lastfm" | "last.fm" => Ok(TagSource::Lastfm),
        other => Err(format!(
            "invalid value '{}' (expected 'musicbrainz' or 'lastfm')",
            other
        )),
    }
}

pub fn parse_playlist_item(item: &PlaylistItem) -> Option<Track> {
    let track = item.track.as_ref()?;
    let id = track.id.clone()?;
    let uri = track.uri.clone()?;
    let artist = track.artists.first().map(|a| a.name.clone())?;

    Some(Track {
        id,
        name: track.name.clone(),
        artist,
        uri,
        tags: None,
    })
}

pub fn genre_matches(tags: &[String], genre: &str) -> bool {
    let genre = genre.to_lowercase();
    tags.iter().any(|t| t.to_lowercase() == genre)
}

pub fn normalize_tags(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .take(MAX_TAGS)
        .collect()
}

pub fn batch_plan(uris: &[String]) -> Vec<Vec<String>> {
    uris.chunks(WRITE_BATCH_SIZE)
        .map(|chunk| chunk.to_vec())
        .collect()
}

pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub async fn load_valid_genres() -> Result<Vec<String>, String> {
    for path in genre_file_candidates() {
        if let Ok(content) = async_fs::read_to_string(&path).await {
            let genres: Vec<String> = content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect();
            return Ok(genres);
        }
    }

    Err("genres.txt not found, no genre validation will be performed".to_string())
}

fn genre_file_candidates() -> Vec<PathBuf> {
    let mut data_path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_path.push("genresift/genres.txt");
    vec![data_path, PathBuf::from("genres.txt")]
}

pub fn find_closest_genre(input: &str, genres: &[String]) -> Option<String> {
    let input = input.to_lowercase();

    genres
        .iter()
        .map(|g| (g, normalized_levenshtein(&input, g)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|(_, score)| *score > SUGGESTION_CUTOFF)
        .map(|(genre, _)| genre.clone())
}
