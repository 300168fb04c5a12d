//! JSON bodies exchanged with the generation service.

use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt text exactly as the user typed it
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Successful response body.
///
/// Services answer either with a `code` object or, like the reference
/// backend, with a persisted `website` record carrying the same three
/// fields. Any other members are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    /// Bundle in the canonical shape
    #[serde(default)]
    pub code: Option<Bundle>,

    /// Bundle embedded in a stored website record
    #[serde(default)]
    pub website: Option<Bundle>,
}

impl GenerateResponse {
    /// Pick the bundle out of the response, preferring `code`.
    pub fn into_bundle(self) -> Option<Bundle> {
        self.code.or(self.website)
    }
}

/// Errors that can occur when decoding a response body.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response contains neither `code` nor `website`")]
    MissingBundle,
}

/// Decode a success body into a bundle.
pub fn decode_response(body: &[u8]) -> Result<Bundle, DecodeError> {
    let response: GenerateResponse = serde_json::from_slice(body)?;
    response.into_bundle().ok_or(DecodeError::MissingBundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_request() {
        let json = serde_json::to_string(&GenerateRequest::new("Create a portfolio site")).unwrap();

        assert_eq!(json, r#"{"prompt":"Create a portfolio site"}"#);
    }

    #[test]
    fn decodes_code_shape() {
        let body = br#"{"code":{"html_code":"<h1>Hi</h1>","css_code":"h1{color:red}","js_code":""}}"#;

        let bundle = decode_response(body).unwrap();

        assert_eq!(bundle, Bundle::new("<h1>Hi</h1>", "h1{color:red}", ""));
    }

    #[test]
    fn decodes_website_record_shape() {
        let body = br#"{
            "project": {"id": 3, "project_name": "Blog"},
            "website": {"id": 7, "project_id": 3, "html_code": "<main></main>",
                        "css_code": null, "js_code": "init()", "metadata": {}},
            "preview_html": "<main></main>"
        }"#;

        let bundle = decode_response(body).unwrap();

        assert_eq!(bundle, Bundle::new("<main></main>", "", "init()"));
    }

    #[test]
    fn prefers_code_over_website() {
        let body = br#"{"code":{"html_code":"a"},"website":{"html_code":"b"}}"#;

        assert_eq!(decode_response(body).unwrap().html_code, "a");
    }

    #[test]
    fn rejects_body_without_bundle() {
        let err = decode_response(br#"{"detail":"nope"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingBundle));

        let err = decode_response(b"<html>").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
