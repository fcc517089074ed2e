use thiserror::Error;

/// Why a storefront request did not succeed.
///
/// Every variant is surfaced to the shopper the same way (one error toast),
/// the distinction exists for logs and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("rejected by server{}", .0.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_optional() {
        assert_eq!(ApiError::Rejected(None).to_string(), "rejected by server");
        assert_eq!(
            ApiError::Rejected(Some("out of stock".into())).to_string(),
            "rejected by server: out of stock"
        );
    }
}
