use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("{0}")]
    Domain(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Fetch failure already classified for display.
    #[error("{title}: {message}")]
    FetchFailed { title: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl DiaryError {
    /// Whether this is a classified failure whose message can be shown to the user as is.
    pub fn is_known(&self) -> bool {
        matches!(
            self,
            DiaryError::Domain(_)
                | DiaryError::MealNotFound(_)
                | DiaryError::InvalidInput(_)
                | DiaryError::FetchFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DiaryError>;
