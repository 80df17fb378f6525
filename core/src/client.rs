//! URL construction and the two lookup operations of the localidades API.
//!
//! # Design
//! `LocalidadesClient` holds a `base_url` and a transport and carries no
//! mutable state between calls. Each lookup is split into a `*_url` method
//! that produces the request URL and a `fetch_*` method that performs one
//! GET through the transport and hands back the raw [`HttpResponse`]. The
//! body is returned for every status the server answers with; only
//! transport failures surface as errors.

use std::fmt;

use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::transport::{HttpTransport, UreqTransport};

/// Base URL of the production localidades service.
pub const DEFAULT_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Synchronous client for the IBGE localidades API.
///
/// Issues one blocking GET per call and returns the response body as
/// uninterpreted text. Lookups do not fail on HTTP status: a 404 or 500
/// comes back as `Ok` with status and body intact, and only requests that
/// never complete surface as [`ApiError`].
pub struct LocalidadesClient {
    base_url: String,
    transport: Box<dyn HttpTransport>,
}

impl LocalidadesClient {
    /// Client against the production service with the default transport.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom base URL (a local mock, a staging host)
    /// with the default transport.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, Box::new(UreqTransport::new()))
    }

    /// Client with full control over both the base URL and the transport.
    pub fn with_transport(base_url: &str, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// URL of the state lookup for `uf`.
    ///
    /// The abbreviation is interpolated verbatim: no case folding, no
    /// escaping. An empty `uf` is rejected because the resulting URL would
    /// address the full state listing instead of a state.
    pub fn estado_url(&self, uf: &str) -> Result<String, ApiError> {
        if uf.is_empty() {
            return Err(ApiError::EmptyUf);
        }
        Ok(format!("{}/estados/{uf}", self.base_url))
    }

    /// URL of the district lookup for `id`.
    pub fn distrito_url(&self, id: u32) -> String {
        format!("{}/distritos/{id}", self.base_url)
    }

    /// Fetch the state identified by the two-letter abbreviation `uf`.
    ///
    /// Returns the service's status and verbatim body for any response.
    /// Fails only when the request cannot be completed at all.
    pub fn fetch_estado(&self, uf: &str) -> Result<HttpResponse, ApiError> {
        let url = self.estado_url(uf)?;
        self.transport.get(&url)
    }

    /// Fetch the district identified by its numeric IBGE code.
    ///
    /// Same contract as [`fetch_estado`](Self::fetch_estado) against the
    /// district route.
    pub fn fetch_distrito(&self, id: u32) -> Result<HttpResponse, ApiError> {
        self.transport.get(&self.distrito_url(id))
    }
}

impl Default for LocalidadesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LocalidadesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalidadesClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
