//! ASCII-only text comparison and byte/text conversion helpers.
//!
//! Texts are treated as sequences of ASCII codes: the insensitive comparator
//! folds `'A'..='Z'` and nothing else, and the conversions move one byte to
//! one character without any encoding machinery.

pub mod errors;
pub mod comparison;
pub mod convert;

pub use comparison::{AsciiComparator, AsciiKey, IDENTITY_COMPARATOR, INSENSITIVE_COMPARATOR};
pub use convert::{
    bytes_to_text, bytes_to_text_range, digits_to_bytes, long_digits_to_bytes, text_to_bytes,
    text_to_bytes_range, text_to_bytes_terminated, DIGIT_FAST_PATH_LIMIT,
};
pub use errors::{AsciiError, Result};
