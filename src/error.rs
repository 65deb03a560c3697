use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandingError {
    /// A DOM element or host object the caller needed is not there.
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("faq index {index} out of range ({len} entries rendered)")]
    OutOfRange { index: usize, len: usize },
    #[error("no movie with id {0}")]
    UnknownMovie(u32),
    #[error("catalog could not be parsed: {0}")]
    Catalog(String),
}

impl From<serde_json::Error> for LandingError {
    fn from(err: serde_json::Error) -> Self {
        LandingError::Catalog(err.to_string())
    }
}
