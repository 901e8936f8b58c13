//! # API Module
//!
//! HTTP endpoints served by the temporary local server that backs the OAuth
//! flow. Only two routes exist:
//!
//! - [`callback`] - Receives the authorization code from Spotify and
//!   completes the PKCE exchange, storing the resulting token in the shared
//!   auth state.
//! - [`health`] - A minimal liveness endpoint that reports status and
//!   version, useful for checking that the callback server actually bound
//!   to the configured address.
//!
//! The routes are wired up in [`crate::server`] with axum; the shared PKCE
//! state travels through an [`axum::Extension`] layer.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
