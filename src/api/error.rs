use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a structured `detail` message.
    #[error("{detail}")]
    Backend { status: u16, detail: String },
    #[error("backend returned HTTP {status}")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode backend response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            ApiError::Backend { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } | ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
