pub mod history;
pub mod reader;
mod tokenizer;

pub use history::{History, HistoryError};
pub use reader::{LineSource, ReadOutcome};
pub use tokenizer::tokenize;
