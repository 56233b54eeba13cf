//! Resource client: typed CRUD over the REST surface of one collection.
//!
//! Every operation resolves to an `ApiEnvelope`; nothing here panics or
//! returns an error to the caller.

mod client;
mod transport;

pub use client::ResourceClient;
pub use transport::{GlooTransport, HttpMethod, HttpReply, HttpTransport};

/// Ошибки обмена с backend до упаковки в конверт
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("{}", status_text(.status, .body))]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Cannot encode request: {0}")]
    Encode(String),
}

/// `HTTP 422` or `HTTP 422: <body>`
fn status_text(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let plain = ClientError::Status {
            status: 500,
            body: "  ".into(),
        };
        assert_eq!(plain.to_string(), "HTTP 500");
        let with_body = ClientError::Status {
            status: 422,
            body: r#"{"error":"Customer is required"}"#.into(),
        };
        assert_eq!(
            with_body.to_string(),
            r#"HTTP 422: {"error":"Customer is required"}"#
        );
    }

    #[test]
    fn test_decode_prefix() {
        assert!(ClientError::Decode("eof".into())
            .to_string()
            .starts_with("Malformed response"));
    }
}
