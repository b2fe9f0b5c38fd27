use {reqwest::StatusCode, thiserror::Error};

/// Failure at the page-fetch boundary. A page that is legitimately empty is
/// `Ok` with no items, never one of these.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("comment API rejected the request with status {status}: {message}")]
  Api { message: String, status: StatusCode },
  #[error("request to the comment API failed")]
  Http(#[from] reqwest::Error),
}
