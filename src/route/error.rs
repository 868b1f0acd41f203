//! Error types for route encoding and decoding.

use thiserror::Error;

/// Error type for route codec operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The encoded polyline string could not be decoded.
    #[error("polyline decode error: {0}")]
    Decode(String),

    /// The coordinate sequence could not be encoded.
    #[error("polyline encode error: {0}")]
    Encode(String),
}

/// Result type alias for route operations.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        let err = RouteError::Decode("bad char".to_string());
        assert_eq!(err.to_string(), "polyline decode error: bad char");
    }

    #[test]
    fn encode_error_display() {
        let err = RouteError::Encode("coordinate out of range".to_string());
        assert_eq!(
            err.to_string(),
            "polyline encode error: coordinate out of range"
        );
    }
}
