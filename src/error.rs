//! Error types for the NHL stats scraper

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, NhlError>;

#[derive(Error, Debug)]
pub enum NhlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },

    #[error("Season bounds must share a shape (both YYYY or both YYYYYYYY): {start} / {end}")]
    MixedSeasonBounds { start: String, end: String },

    #[error("Invalid game type: {value}")]
    InvalidGameType { value: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: u64 },

    #[error("Unexpected {kind} payload: {detail}")]
    UnexpectedShape { kind: String, detail: String },

    #[error("Interrupted")]
    Interrupted,

    #[error("Gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: Box<NhlError> },
}

impl NhlError {
    /// Connection-level or throttling failures that are worth waiting out.
    pub fn is_transient(&self) -> bool {
        match self {
            NhlError::Http(e) => {
                if let Some(status) = e.status() {
                    is_transient_status(status.as_u16())
                } else {
                    e.is_connect() || e.is_timeout() || e.is_request()
                }
            }
            NhlError::Status { status, .. } => is_transient_status(*status),
            _ => false,
        }
    }

    /// Failures that only invalidate the current unit of work (one team,
    /// one player selector, one roster). Interruption and local store or
    /// filesystem failures end the run instead.
    pub fn is_skippable(&self) -> bool {
        !matches!(
            self,
            NhlError::Interrupted | NhlError::Storage(_) | NhlError::Io(_)
        )
    }

    pub(crate) fn shape(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        NhlError::UnexpectedShape {
            kind: kind.into(),
            detail: detail.into(),
        }
    }
}

fn is_transient_status(status: u16) -> bool {
    matches!(status, 408 | 425 | 429 | 500..=599)
}
