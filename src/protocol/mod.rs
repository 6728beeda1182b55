//! UBX wire format
//!
//! This module provides frame layout, the Fletcher checksum, the resynchronizing
//! frame scanner, and message class/id filtering.

mod checksum;
mod error;
mod frame;
mod scanner;
mod stats;
mod types;

pub use checksum::Checksum;
pub use error::{Error, Result};
pub use frame::{Frame, FrameHeader, encode_frame};
pub use scanner::{FrameScanner, scan_frames};
pub use stats::ScanStats;
pub use types::MessageKind;

/// First sync character (`µ`)
pub const SYNC_CHAR_1: u8 = 0xB5;

/// Second sync character (`b`)
pub const SYNC_CHAR_2: u8 = 0x62;

/// Header size in bytes: sync (2) + class (1) + id (1) + length (2)
pub const HEADER_SIZE: usize = 6;

/// Checksum size in bytes
pub const CHECKSUM_SIZE: usize = 2;

/// Bytes a frame occupies beyond its payload
pub const FRAME_OVERHEAD: usize = HEADER_SIZE + CHECKSUM_SIZE;

/// Minimum frame size (empty payload)
///
/// The scanner keeps going while this many bytes remain, so a zero-length
/// frame that ends exactly at the end of the buffer is still found.
pub const MIN_FRAME_SIZE: usize = FRAME_OVERHEAD;

/// Maximum payload size the 16-bit length field can describe
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize;
