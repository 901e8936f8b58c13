use genresift::types::{PlaylistItem, PlaylistTrack, Track, TrackArtist};
use genresift::utils::*;

// Helper function to create a raw playlist item
fn create_playlist_item(
    id: Option<&str>,
    name: &str,
    artist: Option<&str>,
    uri: Option<&str>,
) -> PlaylistItem {
    PlaylistItem {
        track: Some(PlaylistTrack {
            id: id.map(|s| s.to_string()),
            name: name.to_string(),
            uri: uri.map(|s| s.to_string()),
            artists: artist
                .map(|a| {
                    vec![TrackArtist {
                        name: a.to_string(),
                    }]
                })
                .unwrap_or_default(),
        }),
    }
}

fn create_track(id: &str, name: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        uri: format!("spotify:track:{}", id),
        tags: None,
    }
}

fn uris(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("spotify:track:{}", i)).collect()
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_batch_plan_splits_at_api_limit() {
    let plan = batch_plan(&uris(250));

    // 250 uris should become one replace batch of 100 and two appends of 100 and 50
    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0].len(), 100);
    assert_eq!(plan[1].len(), 100);
    assert_eq!(plan[2].len(), 50);

    // Order must be preserved across batches
    assert_eq!(plan[0][0], "spotify:track:0");
    assert_eq!(plan[1][0], "spotify:track:100");
    assert_eq!(plan[2][49], "spotify:track:249");
}

#[test]
fn test_batch_plan_small_and_empty_inputs() {
    // Fewer than 100 uris fit in a single batch
    let plan = batch_plan(&uris(42));
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].len(), 42);

    // Exactly 100 uris is still a single batch
    let plan = batch_plan(&uris(100));
    assert_eq!(plan.len(), 1);

    // An empty list produces no batches at all
    let plan = batch_plan(&uris(0));
    assert!(plan.is_empty());
}

#[test]
fn test_genre_matches_is_case_insensitive() {
    let tags = vec!["Techno".to_string(), "Dance".to_string()];

    assert!(genre_matches(&tags, "techno"));
    assert!(genre_matches(&tags, "TECHNO"));
    assert!(genre_matches(&tags, "dance"));

    // "Rock" and "rock" must yield identical results
    assert_eq!(genre_matches(&tags, "Rock"), genre_matches(&tags, "rock"));
    assert!(!genre_matches(&tags, "rock"));
}

#[test]
fn test_genre_matches_empty_tags_never_match() {
    let empty: Vec<String> = Vec::new();

    assert!(!genre_matches(&empty, "rock"));
    assert!(!genre_matches(&empty, "techno"));
    assert!(!genre_matches(&empty, ""));
}

#[test]
fn test_filter_example_road_trip() {
    // Playlist "Road Trip" filtered by "techno": the tagging service reports
    // {"techno","dance"} for Song 1 and {"pop"} for Song 2, so the filtered
    // result is exactly Song 1.
    let song1 = create_track("id1", "Song 1", "Artist A");
    let song2 = create_track("id2", "Song 2", "Artist B");
    let resolved = vec![
        (song1.clone(), vec!["techno".to_string(), "dance".to_string()]),
        (song2.clone(), vec!["pop".to_string()]),
    ];

    let filtered: Vec<Track> = resolved
        .into_iter()
        .filter(|(_, tags)| genre_matches(tags, "techno"))
        .map(|(track, _)| track)
        .collect();

    assert_eq!(filtered, vec![song1]);
}

#[test]
fn test_normalize_tags_lowercases_and_caps() {
    let tags = normalize_tags(vec![
        " Techno ".to_string(),
        "DANCE".to_string(),
        "".to_string(),
        "electro".to_string(),
        "house".to_string(),
        "trance".to_string(),
        "ambient".to_string(),
        "idm".to_string(),
    ]);

    // Capped at 5, lowercased, empties dropped
    assert_eq!(
        tags,
        vec!["techno", "dance", "electro", "house", "trance"]
    );
}

#[test]
fn test_parse_playlist_item_complete() {
    let item = create_playlist_item(
        Some("id1"),
        "Song 1",
        Some("Artist A"),
        Some("spotify:track:id1"),
    );

    let track = parse_playlist_item(&item).unwrap();
    assert_eq!(track.id, "id1");
    assert_eq!(track.name, "Song 1");
    assert_eq!(track.artist, "Artist A");
    assert_eq!(track.uri, "spotify:track:id1");
    assert!(track.tags.is_none());
}

#[test]
fn test_parse_playlist_item_unparseable() {
    // Item without a track payload (removed track)
    let no_track = PlaylistItem { track: None };
    assert!(parse_playlist_item(&no_track).is_none());

    // Local files come back without an id
    let no_id = create_playlist_item(None, "Song", Some("Artist"), Some("spotify:local:x"));
    assert!(parse_playlist_item(&no_id).is_none());

    // Missing uri
    let no_uri = create_playlist_item(Some("id1"), "Song", Some("Artist"), None);
    assert!(parse_playlist_item(&no_uri).is_none());

    // Missing artist credit
    let no_artist = create_playlist_item(Some("id1"), "Song", None, Some("spotify:track:id1"));
    assert!(parse_playlist_item(&no_artist).is_none());
}

#[test]
fn test_title_case() {
    assert_eq!(title_case("road trip"), "Road Trip");
    assert_eq!(title_case("techno"), "Techno");
    assert_eq!(title_case("DRUM AND BASS"), "Drum And Bass");
    assert_eq!(title_case(""), "");
}

#[test]
fn test_find_closest_genre_above_cutoff() {
    let vocabulary = vec![
        "techno".to_string(),
        "rock".to_string(),
        "trance".to_string(),
    ];

    // "tecno" is one edit away from "techno", well above the cutoff
    assert_eq!(
        find_closest_genre("tecno", &vocabulary),
        Some("techno".to_string())
    );

    // Exact matches trivially score 1.0
    assert_eq!(
        find_closest_genre("rock", &vocabulary),
        Some("rock".to_string())
    );

    // Suggestion lookup ignores input casing
    assert_eq!(
        find_closest_genre("Tecno", &vocabulary),
        Some("techno".to_string())
    );
}

#[test]
fn test_find_closest_genre_below_cutoff() {
    let vocabulary = vec!["techno".to_string(), "rock".to_string()];

    // Nothing in the vocabulary is close enough
    assert_eq!(find_closest_genre("xylophone", &vocabulary), None);

    // Empty vocabulary never suggests
    assert_eq!(find_closest_genre("techno", &[]), None);
}

#[test]
fn test_parse_tag_source_valid_inputs() {
    assert_eq!(parse_tag_source("musicbrainz").unwrap(), TagSource::MusicBrainz);
    assert_eq!(parse_tag_source("mb").unwrap(), TagSource::MusicBrainz);
    assert_eq!(parse_tag_source("lastfm").unwrap(), TagSource::Lastfm);
    assert_eq!(parse_tag_source("last.fm").unwrap(), TagSource::Lastfm);

    // Case insensitivity and surrounding whitespace
    assert_eq!(parse_tag_source(" MusicBrainz ").unwrap(), TagSource::MusicBrainz);
    assert_eq!(parse_tag_source("LastFM").unwrap(), TagSource::Lastfm);
}

#[test]
fn test_parse_tag_source_invalid_inputs() {
    let result = parse_tag_source("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_tag_source("spotify");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'spotify'"));
}

#[test]
fn test_tag_source_display() {
    assert_eq!(TagSource::MusicBrainz.to_string(), "musicbrainz");
    assert_eq!(TagSource::Lastfm.to_string(), "lastfm");
}
