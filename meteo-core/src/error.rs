use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single GET issued by [`crate::http::HttpFetcher`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a status outside `200..=299`.
    #[error("HTTP error: {} - {reason}", .status.as_u16())]
    HttpStatus {
        status: StatusCode,
        reason: String,
        body: String,
    },

    /// DNS, connect, timeout or body read failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The body was not JSON, or not JSON of the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl FetchError {
    pub(crate) fn http_status(status: StatusCode, body: &str) -> Self {
        FetchError::HttpStatus {
            status,
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: truncate_body(body),
        }
    }

    /// Start of the response body for a non-success status, if any was read.
    pub fn body_excerpt(&self) -> Option<&str> {
        match self {
            FetchError::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Failure of one lookup stage, shown to the user as-is.
#[derive(Debug, Error)]
pub enum LookupFailure {
    #[error("City '{city}' not found. Check the spelling.")]
    NotFound { city: String },

    #[error("Geocoding result for '{city}' has no coordinates.")]
    MissingCoordinates { city: String },

    #[error("Incomplete weather data in the API response.")]
    IncompleteData,

    #[error("Failed to geocode city: {0}")]
    Geocoding(#[source] FetchError),

    #[error("Failed to fetch weather data: {0}")]
    Weather(#[source] FetchError),
}

/// Result of a lookup stage.
pub type LookupResult<T> = Result<T, LookupFailure>;

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_has_code_and_reason() {
        let err = FetchError::http_status(StatusCode::NOT_FOUND, "nope");
        assert_eq!(err.to_string(), "HTTP error: 404 - Not Found");
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundary() {
        let body = "é".repeat(300);
        let FetchError::HttpStatus { body, .. } =
            FetchError::http_status(StatusCode::BAD_GATEWAY, &body)
        else {
            panic!("expected HttpStatus");
        };
        assert_eq!(body.chars().count(), 203);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn body_excerpt_only_for_status_errors() {
        let err = FetchError::http_status(StatusCode::BAD_REQUEST, r#"{"error":true,"reason":"bad"}"#);
        assert_eq!(err.body_excerpt(), Some(r#"{"error":true,"reason":"bad"}"#));

        let malformed = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert_eq!(FetchError::MalformedResponse(malformed).body_excerpt(), None);
    }

    #[test]
    fn not_found_names_the_city() {
        let err = LookupFailure::NotFound { city: "Qwzxyplace".into() };
        assert!(err.to_string().contains("'Qwzxyplace'"));
    }

    #[test]
    fn wrapped_fetch_errors_keep_the_cause() {
        let err = LookupFailure::Weather(FetchError::http_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "",
        ));
        assert_eq!(
            err.to_string(),
            "Failed to fetch weather data: HTTP error: 500 - Internal Server Error"
        );
    }
}
