//! The transport seam: one blocking GET per call.
//!
//! # Design
//! Lookups need exactly one capability from the network stack, so the
//! trait has exactly one method. Tests implement it with canned responses;
//! production goes through [`UreqTransport`]. Implementations must be
//! shareable across threads because the client itself is.

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Perform a blocking HTTP GET and hand back status and body text.
pub trait HttpTransport: Send + Sync {
    /// Execute one GET against `url`.
    ///
    /// A response with any HTTP status is a success at this level; `Err`
    /// is reserved for requests that never completed.
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

/// Production transport backed by a blocking [`ureq::Agent`].
///
/// The default agent is built with `http_status_as_error(false)` so
/// 4xx/5xx responses come back as data rather than `Err`; interpreting
/// the status belongs to the caller.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap a caller-configured agent (timeouts, proxies, TLS settings).
    ///
    /// Non-2xx pass-through only holds if the agent was built with
    /// `http_status_as_error(false)`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_url_is_a_network_error() {
        let err = UreqTransport::new()
            .get("definitely not a url")
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
