use std::fmt;

pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug)]
pub enum HistoryError {
    Persist(std::io::Error),
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Persist(e)
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Persist(e) => write!(f, "Error opening history file: {}", e),
        }
    }
}

impl std::error::Error for HistoryError {}
