#![warn(clippy::pedantic)]

pub mod error;
pub mod tokenizer;

pub use error::DecodeError;
pub use tokenizer::{LineTokenizer, TokenizerStats, TrailingRecord};
