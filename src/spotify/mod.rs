//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! genre filter: authentication, playlist lookup, track listing, and
//! playlist writes. It is the only place in the crate that talks to
//! Spotify; higher layers work with the typed structures from
//! [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (filter pipeline)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── User Lookup (current user id)
//!     ├── Track Listing (paginated playlist items)
//!     └── Playlist Operations (find, create, replace, append)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, browser
//!   launch, local callback server, code exchange, token refresh and
//!   persistence. PKCE avoids storing a client secret entirely.
//! - [`user`] - Resolves the authenticated user's id and display name from
//!   `GET /me`, used when no user id is supplied via flag or environment.
//! - [`tracks`] - Fetches every item of a playlist by following the `next`
//!   link of `GET /playlists/{id}/tracks` until the listing is exhausted.
//! - [`playlist`] - Locates a playlist by exact name across the paginated
//!   `GET /me/playlists` listing, and converges a target playlist to a
//!   given track list (replace the first batch, append the rest, batches
//!   capped at 100 uris per call).
//!
//! ## Error Handling
//!
//! Read operations retry transient 502 Bad Gateway responses after a short
//! delay and respect `Retry-After` on 429 responses where applicable; all
//! other HTTP errors are propagated as `reqwest::Error`. Write operations
//! never degrade silently: a failed create/replace/append aborts the run at
//! the call site.
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user profile
//! - `GET /me/playlists` - User's playlists, paginated
//! - `GET /playlists/{id}/tracks` - Playlist items, paginated
//! - `POST /users/{user_id}/playlists` - Create a private playlist
//! - `PUT /playlists/{id}/tracks` - Replace playlist contents
//! - `POST /playlists/{id}/tracks` - Append tracks
//! - `POST /api/token` - Token exchange and refresh
//!
//! ## Thread Safety
//!
//! All operations are async and strictly sequential; the only shared state
//! is the `Arc<Mutex<Option<PkceToken>>>` used between the auth flow and
//! the callback handler.

pub mod auth;
pub mod playlist;
pub mod tracks;
pub mod user;
