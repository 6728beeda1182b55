//! ubx2csv - High-precision RTK positions from u-blox UBX captures
//!
//! This library extracts UBX-NAV-HPPOSLLH solutions from a raw receiver capture
//! and renders them as CSV. It includes a resynchronizing frame scanner, the
//! UBX Fletcher checksum, fixed-point position reconstruction, and GPS
//! time-of-week mapping.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::Local;
//!
//! let capture = std::fs::read("rover.ubx")?;
//! let export = ubx2csv::convert_bytes(capture, &Local::now())?;
//!
//! std::fs::write(&export.filename, &export.content)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - **Resynchronizing scanner** - A corrupted frame never hides the frames after it
//! - **Zero-copy payloads** - Frames borrow their payload from the capture buffer
//! - **Explicit clock** - Time mapping and output naming take the current moment as input
//!
//! # Time of week
//!
//! UBX-NAV-HPPOSLLH carries no week number. Timestamps are placed in the week
//! containing the moment of conversion, so a capture must be converted in the
//! same GPS week it was recorded in to get correct dates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod convert;
pub mod export;
pub mod nav;
pub mod protocol;

pub use convert::{Outcome, convert_bytes, convert_file, convert_now, extract_positions};
pub use export::Export;
pub use nav::{PositionRecord, decode_hpposllh};
pub use protocol::{Error, Frame, FrameScanner, MessageKind, Result, ScanStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
