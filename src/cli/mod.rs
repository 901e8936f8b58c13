//! # CLI Module
//!
//! This module provides the command-line interface layer for genresift, a
//! Spotify API client that filters a playlist down to the tracks matching a
//! requested genre. It implements all user-facing commands and coordinates
//! between the Spotify integration, the metadata providers, and user
//! interaction.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security and persists the resulting token.
//!
//! ### Filtering
//!
//! - [`filter`] - The core pipeline, composed of four strictly sequential
//!   steps:
//!   1. **Playlist Locator** - paginate the user's playlists until an exact
//!      name match is found
//!   2. **Track Fetcher** - paginate the playlist's items until exhausted
//!      and parse them into typed tracks
//!   3. **Genre Resolver** - look up each track's genre tags through the
//!      selected provider and keep the tracks whose tags contain the
//!      requested genre (case-insensitive)
//!   4. **Playlist Writer** - find-or-create the destination playlist and
//!      converge its contents to the matched tracks, batched at 100 uris
//!      per call
//!
//! ### Vocabulary
//!
//! - [`genres`] - Lists the local genre vocabulary (`genres.txt`) or, with
//!   `--suggest`, prints the closest vocabulary match for an input string.
//!
//! ## Error Handling Philosophy
//!
//! Read-side failures degrade: a track whose tags cannot be resolved is
//! simply excluded from every genre with a warning, and the run continues.
//! Playlist-level reads and all writes are load-bearing: their failures
//! terminate the run with a clear message. Invalid input (an unknown genre)
//! is caught before the first network call, with a fuzzy suggestion where
//! the vocabulary offers a close enough match.
//!
//! ## User Experience
//!
//! Long-running steps show indicatif progress (a spinner for paginated
//! fetches, a bar for per-track tag resolution), matched tracks are printed
//! as a table before writing, and every state change is reported through
//! the `info!`/`success!`/`warning!` macros.

mod auth;
mod filter;
mod genres;

pub use auth::auth;
pub use filter::filter;
pub use genres::genres;
