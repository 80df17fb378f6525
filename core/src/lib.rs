//! Synchronous client core for the IBGE localidades service.
//!
//! # Overview
//! Builds the lookup URLs for Brazilian states (UFs) and districts, performs
//! one blocking GET per call through an injectable [`HttpTransport`], and
//! returns the response body verbatim as text. The client never parses the
//! JSON it receives; interpreting the payload is the caller's business.
//!
//! # Design
//! - `LocalidadesClient` holds only a base URL and a boxed transport; every
//!   call is an independent request/response round trip with no shared
//!   mutable state.
//! - The transport is a one-method trait so tests can substitute a canned
//!   response without opening a connection.
//! - Responses come back as plain `{status, body}` data for any HTTP status
//!   the server produces; only transport-level faults are errors.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;

pub use client::{LocalidadesClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::HttpResponse;
pub use transport::{HttpTransport, UreqTransport};
