use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// The slice of a playlist item this tool actually works with. Built by
/// `utils::parse_playlist_item`; the resolved tag list is attached after the
/// provider lookup and stays `None` for unresolved tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub uri: String,
    pub tags: Option<Vec<String>>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artist: String,
    pub tags: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub collaborative: Option<bool>,
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    // local files and removed tracks come back without an id
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub uri: Option<String>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistUrisRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingSearchResponse {
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
    #[serde(default)]
    pub tags: Vec<RecordingTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistCredit {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingTag {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchResponse {
    pub results: Option<TrackSearchResults>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchResults {
    #[serde(rename = "trackmatches")]
    pub track_matches: Option<TrackMatches>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackMatches {
    #[serde(default)]
    pub track: Vec<LastfmTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastfmTrack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTagsResponse {
    pub toptags: Option<TopTags>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTags {
    #[serde(default)]
    pub tag: Vec<LastfmTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastfmTag {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}
