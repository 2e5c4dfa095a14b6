//! Control bytes that structure a BCP character-mode export.
//!
//! A BCP export has no header and no length prefixes. Records and fields
//! are separated purely by in-band control bytes, and the exporter may pad
//! the stream with NUL bytes that carry no data:
//!
//! ```text
//! ┌──────┬──────────────────┬─────────────────────────────────────────┐
//! │ Byte │ Name             │ Meaning                                 │
//! ├──────┼──────────────────┼─────────────────────────────────────────┤
//! │ 0x00 │ PAD_BYTE         │ Padding, discarded wherever it appears  │
//! │ 0x1D │ FIELD_TERMINATOR │ Ends one field within a record          │
//! │ 0x1E │ ROW_TERMINATOR   │ Ends one record                         │
//! └──────┴──────────────────┴─────────────────────────────────────────┘
//! ```
//!
//! The set is fixed; alternate delimiter sets are not supported.

/// Padding byte. Never part of a decoded record.
pub const PAD_BYTE: u8 = 0x00;

/// ASCII group separator, used by BCP as the field terminator.
pub const FIELD_TERMINATOR: u8 = 0x1D;

/// ASCII record separator, used by BCP as the row terminator.
pub const ROW_TERMINATOR: u8 = 0x1E;

/// The field terminator as it appears after the record has been decoded
/// to text. 0x1D is ASCII, so it decodes to a single `char`.
pub const FIELD_TERMINATOR_CHAR: char = FIELD_TERMINATOR as char;
