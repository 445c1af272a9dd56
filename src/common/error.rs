use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx answer whose body could not be decoded.
    #[error("unexpected response from server: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Builds the error for a rejected request, preferring the body's `error` field.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|error| error.as_str())
                    .map(str::trim)
                    .filter(|error| !error.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Unexpected failure ({status})"));
        ApiError::Status { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_used_verbatim() {
        let err = ApiError::from_status(500, br#"{"error":"db down"}"#);
        assert_eq!(err.to_string(), "db down");
    }

    #[test]
    fn missing_error_field_falls_back_to_status() {
        assert_eq!(
            ApiError::from_status(502, b"<html>bad gateway</html>").to_string(),
            "Unexpected failure (502)"
        );
        assert_eq!(
            ApiError::from_status(404, br#"{"error":""}"#).to_string(),
            "Unexpected failure (404)"
        );
    }
}
