//! # Metadata Provider Module
//!
//! Genre tag resolution for (artist, track) pairs against an external
//! community tagging service. Two providers are implemented behind one
//! capability, selectable at the CLI with `--provider`:
//!
//! - [`musicbrainz`] - Searches MusicBrainz recordings and prefers the
//!   first candidate whose artist matches case-insensitively AND which
//!   carries at least one tag, falling back to the first search result.
//! - [`lastfm`] - Searches Last.fm tracks with an artist-only match
//!   heuristic, then fetches the chosen candidate's top tags.
//!
//! Both heuristics are best-effort tie-break policies, not guaranteed
//! matches; ambiguous titles can resolve wrongly and that is accepted.
//!
//! ## Failure Semantics
//!
//! `search_tags` never errors to the caller. Provider errors, empty search
//! results, and unparseable payloads all collapse to an empty tag set with
//! a logged warning, so a single flaky lookup only costs that track its
//! genre, never the run.
//!
//! Returned tags are lowercased and capped at 5 entries
//! (`utils::normalize_tags`). Candidate selection is a pure function over
//! the parsed payloads so the heuristics are unit-testable without a
//! network.

pub mod lastfm;
pub mod musicbrainz;

pub use lastfm::Lastfm;
pub use musicbrainz::MusicBrainz;

use crate::types::{LastfmTrack, Recording};

/// Capability of an external tagging service: resolve an (artist, title)
/// pair to a set of lowercase genre tags, possibly empty, never an error.
pub trait TagProvider {
    async fn search_tags(&self, artist: &str, title: &str) -> Vec<String>;
}

/// Best-tagged match among MusicBrainz search candidates.
///
/// Picks the first recording whose first artist credit equals the query
/// artist case-insensitively and which has at least one tag; if none
/// qualifies, falls back to the first candidate regardless of tag presence.
pub fn pick_recording<'a>(recordings: &'a [Recording], artist: &str) -> Option<&'a Recording> {
    let artist = artist.to_lowercase();

    recordings
        .iter()
        .find(|r| {
            r.artist_credit
                .first()
                .map(|c| c.name.to_lowercase() == artist)
                .unwrap_or(false)
                && !r.tags.is_empty()
        })
        .or_else(|| recordings.first())
}

/// Artist-only match among Last.fm search candidates.
///
/// Picks the first track whose artist equals the query artist
/// case-insensitively, falling back to the first candidate.
pub fn pick_lastfm_track<'a>(tracks: &'a [LastfmTrack], artist: &str) -> Option<&'a LastfmTrack> {
    let artist = artist.to_lowercase();

    tracks
        .iter()
        .find(|t| t.artist.to_lowercase() == artist)
        .or_else(|| tracks.first())
}
