//! ubx2csv error types

use thiserror::Error;

/// Conversion and wire-format errors
#[derive(Error, Debug)]
pub enum Error {
    /// Frame does not start with the sync pattern
    #[error("invalid sync pattern: expected 0xb562, got {found:#06x}")]
    InvalidSync {
        /// The two leading bytes, big-endian
        found: u16,
    },

    /// Buffer too small
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Payload too large for the 16-bit length field
    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge {
        /// Payload size
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// The capture held no decodable positioning messages
    #[error("No valid UBX-NAV-HPPOSLLH messages found")]
    NoUsableRecords,

    /// IO error while acquiring the capture
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
