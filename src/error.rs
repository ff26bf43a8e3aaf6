use thiserror::Error;

/// Result of header parsing and register access.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can fail when reading a binary or poking a register.
///
/// A logo or checksum mismatch is not an error. Those outcomes are reported
/// as flags on the parsed binary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The image is too short for the attempted check or extraction.
    #[error("binary too short: need at least {min:#X} bytes, got {len:#X}")]
    BufferTooShort {
        min: usize,
        len: usize,
    },
    /// A register access outside the valid byte and bit range.
    #[error("register access out of range: byte {byte_index}, bit {bit_index}")]
    IndexOutOfRange {
        byte_index: usize,
        bit_index: usize,
    },
    /// A byte that should be an ASCII digit is not one.
    #[error("expected an ASCII digit, got {0:#04X}")]
    InvalidDigit(u8),
}
