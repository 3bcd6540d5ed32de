use thiserror::Error;

/// Problems resolving the admin credential before any request is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no OpenAI admin API key configured (set OPENAI_ADMIN_API_KEY or pass --api-key)")]
    MissingApiKey,
    #[error("the OpenAI admin API key is still the placeholder value")]
    PlaceholderApiKey,
}

/// A single page request that produced no usable page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("an error occurred while making the API request: {0}")]
    Transport(String),
    #[error("HTTP error {status}: {}", status_detail(.body, .raw))]
    Status {
        status: u16,
        /// Server error body, when it parsed as JSON.
        body: Option<serde_json::Value>,
        raw: String,
    },
    #[error("could not decode costs response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_detail(body: &Option<serde_json::Value>, raw: &str) -> String {
    match body {
        Some(json) => json.to_string(),
        None if raw.trim().is_empty() => "<empty response body>".to_string(),
        None => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_json_body() {
        let err = FetchError::Status {
            status: 401,
            body: Some(serde_json::json!({"error": {"message": "bad key"}})),
            raw: String::new(),
        };
        let text = err.to_string();
        assert!(text.starts_with("HTTP error 401: "));
        assert!(text.contains("bad key"));
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn status_error_falls_back_to_raw_text() {
        let err = FetchError::Status {
            status: 502,
            body: None,
            raw: "Bad Gateway\n".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 502: Bad Gateway");

        let err = FetchError::Status {
            status: 500,
            body: None,
            raw: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP error 500: <empty response body>");
    }
}
