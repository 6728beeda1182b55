//! Capture-to-CSV pipeline
//!
//! Scanner → class/id filter → payload decoder → CSV renderer → output namer.
//! Frame and payload anomalies are filtered and counted; only an empty result
//! or a failure to read the capture reaches the caller.

use std::fmt;
use std::path::Path;

use bytes::Bytes;
use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, info, instrument, warn};

use crate::export::{Export, output_filename, render_csv};
use crate::nav::time::WeekAnchor;
use crate::nav::{PositionRecord, decode_hpposllh};
use crate::protocol::{Frame, FrameScanner, MessageKind, Result, ScanStats};

/// Scan a capture and decode every usable positioning record, in scan order.
#[must_use]
pub fn extract_positions(buf: impl Into<Bytes>) -> (Vec<PositionRecord>, ScanStats) {
    let mut scanner = FrameScanner::new(buf);
    let positioning: Vec<Frame> = MessageKind::NAV_HPPOSLLH
        .filter(scanner.by_ref())
        .collect();

    let mut stats = *scanner.stats();
    stats.frames_filtered = stats.frames_accepted - positioning.len() as u64;

    let records: Vec<PositionRecord> = positioning
        .iter()
        .filter_map(|frame| decode_hpposllh(frame.payload()))
        .collect();

    stats.records = records.len() as u64;
    stats.payloads_rejected = positioning.len() as u64 - stats.records;

    debug!(
        bytes = stats.bytes_scanned,
        frames = stats.frames_accepted,
        filtered = stats.frames_filtered,
        rejected = stats.candidates_rejected(),
        payloads_rejected = stats.payloads_rejected,
        records = stats.records,
        record_yield = stats.record_yield(),
        "scan complete"
    );

    (records, stats)
}

/// Convert a capture to CSV.
///
/// `now` anchors the GPS week for the time column (in its own time zone) and,
/// converted to UTC, names the output file.
///
/// # Errors
///
/// Returns [`Error::NoUsableRecords`](crate::Error::NoUsableRecords) if the
/// capture holds no valid positioning message.
#[instrument(level = "debug", skip_all, fields(len = tracing::field::Empty))]
pub fn convert_bytes<Tz>(buf: impl Into<Bytes>, now: &DateTime<Tz>) -> Result<Export>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let buf = buf.into();
    tracing::Span::current().record("len", buf.len());

    let (records, stats) = extract_positions(buf);
    let content = render_csv(&records, &WeekAnchor::new(now)).inspect_err(|err| {
        warn!(frames = stats.frames_accepted, "conversion failed: {err}");
    })?;
    let filename = output_filename(&now.with_timezone(&Utc));

    info!(records = stats.records, %filename, "conversion complete");
    Ok(Export {
        filename,
        content,
        stats,
    })
}

/// Read a capture from disk and convert it.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, or
/// [`Error::NoUsableRecords`](crate::Error::NoUsableRecords) as for
/// [`convert_bytes`].
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn convert_file<Tz>(path: impl AsRef<Path>, now: &DateTime<Tz>) -> Result<Export>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let data = std::fs::read(path.as_ref()).inspect_err(|err| {
        warn!("cannot read capture: {err}");
    })?;
    convert_bytes(data, now)
}

/// Convert a capture against the current local time.
pub fn convert_now(buf: impl Into<Bytes>) -> Outcome {
    convert_bytes(buf, &Local::now()).into()
}

/// Result of one conversion as handed to a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// CSV text ready to be saved under `filename`
    Success {
        /// Suggested file name, `.csv` included
        filename: String,
        /// CSV document
        content: String,
    },
    /// Nothing to save
    Failure {
        /// Short human-readable reason
        error: String,
    },
}

impl Outcome {
    /// Check if the conversion produced a document
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Result<Export>> for Outcome {
    fn from(result: Result<Export>) -> Self {
        match result {
            Ok(export) => Self::Success {
                filename: export.filename,
                content: export.content,
            },
            Err(err) => Self::Failure {
                error: err.to_string(),
            },
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        match self {
            Self::Success { filename, content } => {
                let mut state = serializer.serialize_struct("Outcome", 3)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("filename", filename)?;
                state.serialize_field("content", content)?;
                state.end()
            }
            Self::Failure { error } => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}
