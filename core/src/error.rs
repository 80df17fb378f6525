//! Error type for the localidades client.
//!
//! # Design
//! Two failure classes exist: a lookup that cannot even name its URL
//! (empty UF) and a request the transport could not complete. HTTP
//! statuses are deliberately not errors; the response carries them as
//! data and the caller decides what a 404 means.

use std::fmt;

/// Errors returned by `LocalidadesClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// A state lookup was attempted with an empty abbreviation.
    EmptyUf,

    /// The request never completed: DNS failure, refused connection,
    /// timeout, or an unparseable URL. Carries the transport's message.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::EmptyUf => write!(f, "state abbreviation is empty"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
