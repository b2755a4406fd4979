use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Question not found: {0}")]
    QuestionNotFound(i64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl TriviaError {
    /// True for missing entities and empty required results.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::QuestionNotFound(_) | Self::NotFound(_))
    }

    /// True when the request itself was at fault, as opposed to the store
    /// or the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::QuestionNotFound(_)
                | Self::NotFound(_)
                | Self::InvalidInput(_)
                | Self::Constraint(_)
        )
    }
}

impl From<confique::Error> for TriviaError {
    fn from(err: confique::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;
