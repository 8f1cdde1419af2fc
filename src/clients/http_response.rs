//! HTTP response types for the BigCommerce API client.

use std::collections::HashMap;

/// A raw HTTP response from the API.
///
/// The body is kept as the exact bytes received; decoding into typed
/// resources happens in the [`rest`](crate::rest) layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The complete response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is below 300.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code < 300
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Consumes the response and returns the body bytes.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), Vec::new()).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), Vec::new()).is_ok());
        assert!(!HttpResponse::new(300, HashMap::new(), Vec::new()).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), Vec::new()).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), Vec::new()).is_ok());
    }

    #[test]
    fn test_text_decodes_body() {
        let response = HttpResponse::new(422, HashMap::new(), b"{\"title\":\"bad\"}".to_vec());
        assert_eq!(response.text(), "{\"title\":\"bad\"}");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "x-rate-limit-requests-left".to_string(),
            vec!["149".to_string()],
        );
        let response = HttpResponse::new(200, headers, Vec::new());

        assert_eq!(response.header("X-Rate-Limit-Requests-Left"), Some("149"));
        assert_eq!(response.header("missing"), None);
    }
}
