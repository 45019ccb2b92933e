use thiserror::Error;

/// Failure reasons surfaced by the acquisition routines.
///
/// Routines report *why* a source could not be fetched instead of a bare
/// success flag, so the end-of-run summary can print the cause. A failed
/// source never aborts the run; callers record the error and move on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {code} for {url}")]
    Status { code: u16, url: String },

    #[error("hub fetch failed: {0}")]
    Hub(#[from] hf_hub::api::sync::ApiError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive extraction failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    MissingData(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
