use crate::error::PollError;
use crate::models::PollReference;

const POLL_MARKER: &str = "w=poll";

/// Extracts owner and poll ids from a link such as `https://vk.com/wall-1?w=poll-123_456`.
pub fn parse_poll_reference(url: &str) -> Result<PollReference, PollError> {
    let malformed = || PollError::MalformedReference {
        url: url.to_string(),
    };

    let query = url.split('?').nth(1).ok_or_else(malformed)?;
    let ids = query.replace(POLL_MARKER, "");

    let parts: Vec<&str> = ids.split('_').collect();
    match parts.as_slice() {
        [owner_id, poll_id] if !owner_id.is_empty() && !poll_id.is_empty() => Ok(PollReference {
            owner_id: owner_id.to_string(),
            poll_id: poll_id.to_string(),
        }),
        _ => Err(malformed()),
    }
}
