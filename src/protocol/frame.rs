//! UBX frame header and frame value
//!
//! The header is 6 bytes: sync pattern, class, id and payload length.

use bytes::Bytes;

use super::{
    CHECKSUM_SIZE, Checksum, Error, FRAME_OVERHEAD, HEADER_SIZE, MAX_PAYLOAD_SIZE, MessageKind,
    Result, SYNC_CHAR_1, SYNC_CHAR_2,
};

/// UBX frame header
///
/// # Wire Format
///
/// ```text
/// +--------+--------+--------+--------+-----------------+---------------+----------+
/// | 0xB5   | 0x62   | Class  | Id     | Length (2, LE)  | Payload (len) | CK_A CK_B|
/// +--------+--------+--------+--------+-----------------+---------------+----------+
/// ```
///
/// The checksum covers class, id, length and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    class: u8,
    id: u8,
    payload_len: u16,
}

impl FrameHeader {
    /// Create a new header
    #[must_use]
    pub const fn new(class: u8, id: u8, payload_len: u16) -> Self {
        Self {
            class,
            id,
            payload_len,
        }
    }

    /// Class byte
    #[must_use]
    pub const fn class(&self) -> u8 {
        self.class
    }

    /// Id byte
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Declared payload length
    #[must_use]
    pub const fn payload_len(&self) -> u16 {
        self.payload_len
    }

    /// Size of the whole frame this header announces
    #[must_use]
    pub const fn frame_len(&self) -> usize {
        self.payload_len as usize + FRAME_OVERHEAD
    }

    /// Convert to bytes (little-endian length)
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let len = self.payload_len.to_le_bytes();
        [SYNC_CHAR_1, SYNC_CHAR_2, self.class, self.id, len[0], len[1]]
    }

    /// Parse from the start of a byte slice
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let Some(raw) = bytes.first_chunk::<HEADER_SIZE>() else {
            return Err(Error::BufferTooSmall {
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        };

        if raw[0] != SYNC_CHAR_1 || raw[1] != SYNC_CHAR_2 {
            return Err(Error::InvalidSync {
                found: u16::from_be_bytes([raw[0], raw[1]]),
            });
        }

        Ok(Self {
            class: raw[2],
            id: raw[3],
            payload_len: u16::from_le_bytes([raw[4], raw[5]]),
        })
    }
}

/// A checksum-validated UBX frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    class: u8,
    id: u8,
    payload: Bytes,
}

impl Frame {
    /// Create a frame from its parts
    pub fn new(class: u8, id: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            class,
            id,
            payload: payload.into(),
        }
    }

    /// Class byte
    #[must_use]
    pub const fn class(&self) -> u8 {
        self.class
    }

    /// Id byte
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Class/id pair
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        MessageKind::new(self.class, self.id)
    }

    /// Get payload
    #[must_use]
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Length of the frame on the wire
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.payload.len() + FRAME_OVERHEAD
    }

    /// Encode frame to bytes
    pub fn encode(&self) -> Result<Vec<u8>> {
        encode_frame(self.class, self.id, &self.payload)
    }
}

/// Build a well-formed frame around a payload
///
/// # Format
///
/// ```text
/// [SYNC (2)] [CLASS] [ID] [LENGTH (2, LE)] [PAYLOAD] [CK_A] [CK_B]
/// ```
///
/// # Errors
///
/// Returns [`Error::PayloadTooLarge`] if the payload does not fit the 16-bit
/// length field.
pub fn encode_frame(class: u8, id: u8, payload: &[u8]) -> Result<Vec<u8>> {
    let payload_len = u16::try_from(payload.len()).map_err(|_| Error::PayloadTooLarge {
        size: payload.len(),
        max: MAX_PAYLOAD_SIZE,
    })?;

    let header = FrameHeader::new(class, id, payload_len);
    let mut bytes = Vec::with_capacity(header.frame_len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(payload);

    // Checksum starts after the sync pattern
    let checksum = Checksum::of(&bytes[2..]);
    bytes.extend_from_slice(&checksum.to_bytes());

    debug_assert_eq!(bytes.len(), HEADER_SIZE + payload.len() + CHECKSUM_SIZE);
    Ok(bytes)
}
