use thiserror::Error;

use crate::api::PageQueryPayload;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query parameter is missing")]
    Missing,
    #[error("query parameter is not valid percent-encoded UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("query parameter is not a valid payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Percent-decodes the raw query value and parses it as a page payload.
pub fn decode_query_payload(raw: &str) -> Result<PageQueryPayload, QueryError> {
    if raw.is_empty() {
        return Err(QueryError::Missing);
    }
    let decoded = urlencoding::decode(raw)?;
    Ok(serde_json::from_str(&decoded)?)
}

/// Payload the page should hold after seeing `raw`.
///
/// A successful decode replaces the previous payload wholesale. A missing
/// parameter or a bad value leaves the previous payload in place.
pub fn next_payload(
    previous: Option<PageQueryPayload>,
    raw: &str,
) -> Option<PageQueryPayload> {
    match decode_query_payload(raw) {
        Ok(payload) => Some(payload),
        Err(QueryError::Missing) => previous,
        Err(err) => {
            tracing::error!("Error parsing data: {err}");
            previous
        }
    }
}
