use std::path::PathBuf;
use thiserror::Error;

/// Problems with the environment the tool was started in. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("VK_TOKEN must be set")]
    MissingToken,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure of a single VK API call.
#[derive(Debug, Error)]
pub enum ApiError {
    // Built through `From`, which strips the URL: it carries the access token
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The remote returned an `error` envelope instead of a `response`.
    #[error("{method} returned error {code}: {message}")]
    Remote {
        method: String,
        code: i64,
        message: String,
    },

    #[error("{method} returned neither response nor error")]
    MissingResponse { method: String },

    #[error("{method} returned an unexpected payload: {source}")]
    UnexpectedPayload {
        method: String,
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e.without_url())
    }
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error("malformed poll reference: {url}")]
    MalformedReference { url: String },

    #[error("answer {expected:?} not found, poll has: {}", .available.join(" or "))]
    AnswerNotFound {
        expected: String,
        available: Vec<String>,
    },

    #[error("poll {poll_id} returned no voter group")]
    NoVoterGroup { poll_id: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input file given")]
    MissingInputFlag,

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} contains no entries", .path.display())]
    Empty { path: PathBuf },

    #[error("line {lineno}: expected `url;answer`, got {line:?}")]
    MalformedLine { lineno: usize, line: String },
}

/// Errors that end a batch run early.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no entries to process")]
    NoEntries,

    #[error("entry {index} ({url}): {source}")]
    Poll {
        index: usize,
        url: String,
        source: PollError,
    },

    #[error("no entry could be resolved")]
    NothingResolved,

    #[error("could not fetch voter profiles: {0}")]
    Api(#[from] ApiError),

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
