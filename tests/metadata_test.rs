use genresift::metadata::{pick_lastfm_track, pick_recording};
use genresift::types::{ArtistCredit, LastfmTrack, Recording, RecordingTag};

// Helper function to create a search candidate recording
fn create_recording(title: &str, artist: Option<&str>, tags: &[&str]) -> Recording {
    Recording {
        title: title.to_string(),
        artist_credit: artist
            .map(|a| {
                vec![ArtistCredit {
                    name: a.to_string(),
                }]
            })
            .unwrap_or_default(),
        tags: tags
            .iter()
            .map(|t| RecordingTag {
                name: t.to_string(),
                count: 1,
            })
            .collect(),
    }
}

fn create_lastfm_track(name: &str, artist: &str) -> LastfmTrack {
    LastfmTrack {
        name: name.to_string(),
        artist: artist.to_string(),
    }
}

#[test]
fn test_pick_recording_prefers_artist_match_with_tags() {
    let recordings = vec![
        // wrong artist, has tags
        create_recording("Song 1", Some("Artist B"), &["pop"]),
        // right artist, no tags
        create_recording("Song 1", Some("Artist A"), &[]),
        // right artist, has tags - this is the best-tagged match
        create_recording("Song 1 (Remastered)", Some("Artist A"), &["techno", "dance"]),
    ];

    let best = pick_recording(&recordings, "Artist A").unwrap();
    assert_eq!(best.title, "Song 1 (Remastered)");
    assert_eq!(best.tags.len(), 2);
}

#[test]
fn test_pick_recording_artist_match_is_case_insensitive() {
    let recordings = vec![
        create_recording("Song", Some("Other"), &["rock"]),
        create_recording("Song", Some("ARTIST a"), &["techno"]),
    ];

    let best = pick_recording(&recordings, "artist A").unwrap();
    assert_eq!(best.title, "Song");
    assert_eq!(best.tags[0].name, "techno");
}

#[test]
fn test_pick_recording_falls_back_to_first_candidate() {
    // No candidate qualifies (wrong artists, or right artist without tags),
    // so the first search result wins regardless of tag presence.
    let recordings = vec![
        create_recording("Song X", Some("Artist B"), &["pop"]),
        create_recording("Song Y", Some("Artist A"), &[]),
    ];

    let best = pick_recording(&recordings, "Artist A").unwrap();
    assert_eq!(best.title, "Song X");
}

#[test]
fn test_pick_recording_handles_missing_artist_credit() {
    // Recordings without an artist credit can never be an artist match
    let recordings = vec![
        create_recording("Song", None, &["rock"]),
        create_recording("Song", Some("Artist A"), &["techno"]),
    ];

    let best = pick_recording(&recordings, "Artist A").unwrap();
    assert_eq!(best.tags[0].name, "techno");
}

#[test]
fn test_pick_recording_empty_candidates() {
    assert!(pick_recording(&[], "Artist A").is_none());
}

#[test]
fn test_pick_lastfm_track_artist_only_heuristic() {
    let tracks = vec![
        create_lastfm_track("Song 1", "Artist B"),
        create_lastfm_track("Song 1", "artist a"),
    ];

    // Artist-only match, case-insensitive; tag presence plays no role here
    let best = pick_lastfm_track(&tracks, "Artist A").unwrap();
    assert_eq!(best.artist, "artist a");
}

#[test]
fn test_pick_lastfm_track_falls_back_to_first_candidate() {
    let tracks = vec![
        create_lastfm_track("Song 1", "Artist B"),
        create_lastfm_track("Song 1", "Artist C"),
    ];

    let best = pick_lastfm_track(&tracks, "Artist A").unwrap();
    assert_eq!(best.artist, "Artist B");
}

#[test]
fn test_pick_lastfm_track_empty_candidates() {
    assert!(pick_lastfm_track(&[], "Artist A").is_none());
}
