//! Plain-data response type for the transport seam.
//!
//! The transport hands status and body back as owned values; nothing here
//! touches the network or interprets the payload. Lookups are GET-only, so
//! the request side of the seam is just the URL string.

/// An HTTP response reduced to what a lookup caller can act on.
///
/// `body` is the verbatim response text. The client performs no JSON
/// parsing, so the field holds whatever the server sent, success or not.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn is_success_covers_exactly_the_2xx_range() {
        assert!(!response(199).is_success());
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(300).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
