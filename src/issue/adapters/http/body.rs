//! Response body decoding: charset selection and JSON parsing.

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};
use reqwest::header::HeaderValue;
use serde_json::Value;

use crate::issue::{
    domain::IssueId,
    ports::{IssueTrackerError, IssueTrackerResult},
};

/// Picks the body charset from an optional `Content-Type` header.
///
/// A missing header or a media type without a `charset` parameter means
/// UTF-8. A header that is not a media type, or that names a charset with no
/// known decoder, is an error. Labels that `encoding_rs` maps to its
/// replacement encoding have no decoder and are rejected too.
pub(super) fn charset(
    issue: &IssueId,
    content_type: Option<&HeaderValue>,
) -> IssueTrackerResult<&'static Encoding> {
    let Some(header) = content_type else {
        return Ok(UTF_8);
    };
    let bad_content_type = || IssueTrackerError::BadContentType {
        issue: issue.clone(),
        content_type: String::from_utf8_lossy(header.as_bytes()).into_owned(),
    };

    let media_type = header
        .to_str()
        .map_err(|_| bad_content_type())?
        .parse::<mime::Mime>()
        .map_err(|_| bad_content_type())?;

    media_type.get_param(mime::CHARSET).map_or(Ok(UTF_8), |name| {
        Encoding::for_label(name.as_str().as_bytes())
            .filter(|encoding| *encoding != REPLACEMENT)
            .ok_or_else(bad_content_type)
    })
}

/// Decodes the body in the given charset and parses it as JSON.
pub(super) fn decode_json(
    issue: &IssueId,
    encoding: &'static Encoding,
    body: &[u8],
) -> IssueTrackerResult<Value> {
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| IssueTrackerError::BadJson {
            issue: issue.clone(),
            reason: format!("body is not valid {}", encoding.name()),
        })?;
    serde_json::from_str(&text).map_err(|error| IssueTrackerError::BadJson {
        issue: issue.clone(),
        reason: error.to_string(),
    })
}
