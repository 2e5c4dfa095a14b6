#![warn(clippy::pedantic)]

pub mod delimiter;
pub mod scan;

pub use delimiter::{FIELD_TERMINATOR, FIELD_TERMINATOR_CHAR, PAD_BYTE, ROW_TERMINATOR};
pub use scan::{extend_unpadded, find_row_terminator};
