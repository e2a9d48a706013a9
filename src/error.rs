#[derive(Debug, thiserror::Error)]
pub enum PokewealthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PokewealthError {
    /// The inline message a view shows for this error.
    ///
    /// A server-supplied `detail` wins. Other API failures fall back to the
    /// caller's generic text, and transport errors report themselves.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            PokewealthError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            PokewealthError::Api { detail: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PokewealthError>;
