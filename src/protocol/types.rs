//! UBX class/id pairs and the message filter

use std::fmt;

use super::Frame;

/// A class/id pair identifying one UBX message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageKind {
    class: u8,
    id: u8,
}

impl MessageKind {
    /// UBX-NAV-HPPOSLLH, the high-precision geodetic position solution
    pub const NAV_HPPOSLLH: Self = Self::new(0x01, 0x14);

    /// Create from raw class and id bytes
    #[must_use]
    pub const fn new(class: u8, id: u8) -> Self {
        Self { class, id }
    }

    /// Class byte
    #[must_use]
    pub const fn class(self) -> u8 {
        self.class
    }

    /// Id byte
    #[must_use]
    pub const fn id(self) -> u8 {
        self.id
    }

    /// Check whether a frame carries this message type
    #[must_use]
    pub fn matches(self, frame: &Frame) -> bool {
        frame.kind() == self
    }

    /// Keep only frames of this message type, preserving order.
    ///
    /// Everything else is dropped without error; a capture normally carries
    /// many unrelated messages.
    pub fn filter<I>(self, frames: I) -> impl Iterator<Item = Frame>
    where
        I: IntoIterator<Item = Frame>,
    {
        frames.into_iter().filter(move |frame| self.matches(frame))
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NAV_HPPOSLLH {
            return write!(f, "NAV-HPPOSLLH");
        }
        write!(f, "{:#04x}-{:#04x}", self.class, self.id)
    }
}
