//! HTTP response types for the WiziShop API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and body of an API response.

use std::collections::HashMap;

/// An HTTP response from the WiziShop API.
///
/// The body is kept as raw bytes: most endpoints answer JSON, but the
/// order documents (invoices, slips) are PDF files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Creates a response with a JSON body and no headers.
    #[must_use]
    pub fn json_body(code: u16, body: &serde_json::Value) -> Self {
        Self::new(code, HashMap::new(), body.to_string())
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decodes the body as JSON.
    ///
    /// An empty (or whitespace-only) body decodes to `null`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(HttpResponse::new(200, HashMap::new(), "").is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(301, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), "").is_ok());
    }

    #[test]
    fn test_empty_body_decodes_to_null() {
        let response = HttpResponse::new(200, HashMap::new(), "");
        assert_eq!(response.json().unwrap(), serde_json::Value::Null);

        let response = HttpResponse::new(200, HashMap::new(), " \n");
        assert_eq!(response.json().unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn test_json_body_decodes() {
        let response = HttpResponse::json_body(200, &json!({"id": 7}));
        assert_eq!(response.json().unwrap(), json!({"id": 7}));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let response = HttpResponse::new(200, HashMap::new(), "<html>");
        assert!(response.json().is_err());
        assert_eq!(response.text(), "<html>");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/pdf".to_string()],
        );
        let response = HttpResponse::new(200, headers, vec![0x25, 0x50, 0x44, 0x46]);

        assert_eq!(response.header("Content-Type"), Some("application/pdf"));
        assert_eq!(response.header("x-missing"), None);
    }
}
