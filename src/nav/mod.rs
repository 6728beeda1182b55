//! Navigation payload decoding
//!
//! Turns UBX-NAV-HPPOSLLH payloads into [`PositionRecord`] values and maps the
//! GPS time of week onto calendar time.

mod hpposllh;
pub mod time;

pub use hpposllh::{HPPOSLLH_MIN_LEN, PositionRecord, decode_hpposllh};

#[cfg(test)]
pub(crate) use hpposllh::tests::RawPosition;
