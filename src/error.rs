use thiserror::Error;

/// Everything that can go wrong while fetching the portfolio object.
///
/// None of these reach the page as a failure; the loader turns them into a
/// notice and keeps the current record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Remote(String),

    #[error("No portfolio data found in object")]
    MissingData,

    #[error("invalid JSON response: {0}")]
    Parse(String),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => "transport",
            LoadError::Remote(_) => "remote",
            LoadError::MissingData => "missing_data",
            LoadError::Parse(_) => "parse",
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
