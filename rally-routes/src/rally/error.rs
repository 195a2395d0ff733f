//! Rally client error types.

/// Broad classification used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection failure, timeout, or non-2xx status
    Network,
    /// Response body does not have the expected shape
    Parse,
}

/// Errors from the rally HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RallyError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be parsed or failed validation
    #[error("JSON parse error: {message}{}", .body.as_deref().map(|b| format!(" (body: {b})")).unwrap_or_default())]
    Parse {
        message: String,
        body: Option<String>,
    },

    /// A configured header value is not valid HTTP
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}

impl RallyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RallyError::Parse { .. } => ErrorKind::Parse,
            RallyError::Network(_) | RallyError::Status { .. } | RallyError::InvalidHeader(_) => {
                ErrorKind::Network
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RallyError::Status {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");
        assert_eq!(err.kind(), ErrorKind::Network);

        let err = RallyError::Parse {
            message: "expected array".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected array (body: {})");
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = RallyError::Parse {
            message: "invalid date".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: invalid date");
    }
}
