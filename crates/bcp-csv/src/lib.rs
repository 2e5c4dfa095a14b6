#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod normalize;
pub mod pipeline;

pub use bcp_decoder::TrailingRecord;
pub use config::ConvertConfig;
pub use error::ConvertError;
pub use fields::split_fields;
pub use formatter::RowFormatter;
pub use normalize::normalize_line;
pub use pipeline::{ConvertSummary, convert};
