use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Errors raised by the validating conversion helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Comparable so tests can match exact variants
pub enum AsciiError {
    // A byte inside the requested range is outside 0..=127
    #[error("invalid argument: byte {byte:#04x} at index {index} is not 7-bit ASCII")]
    InvalidArgument { index: usize, byte: u8 },

    // The range starts past the end of the input
    #[error("invalid argument: offset {offset} is past the end of a {len}-byte input")]
    OffsetOutOfRange { offset: usize, len: usize },
}

// Type alias for results that use `AsciiError` as the error type
pub type Result<T> = std::result::Result<T, AsciiError>;
