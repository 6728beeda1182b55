use std::fmt::{self, Write};

use chrono::TimeZone;

use crate::nav::PositionRecord;
use crate::nav::time::WeekAnchor;
use crate::protocol::{Error, Result};

/// Fixed header line
pub const CSV_HEADER: &str = "time,latitude,longitude,height_msl";

/// Render records as CSV, in the order given.
///
/// Latitude and longitude carry 9 decimals, height 4. Every line, the header
/// included, ends with `\n`.
///
/// # Errors
///
/// Returns [`Error::NoUsableRecords`] for an empty input; a header-only
/// document is never produced.
pub fn render_csv<Tz>(records: &[PositionRecord], anchor: &WeekAnchor<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if records.is_empty() {
        return Err(Error::NoUsableRecords);
    }

    // "2024-05-15 01:00:01.234,-33.699999901,-123.456789099,-1.5005\n" is 62 bytes
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let _ = writeln!(
            out,
            "{},{:.9},{:.9},{:.4}",
            anchor.format(record.time_of_week_ms),
            record.latitude,
            record.longitude,
            record.height_msl,
        );
    }

    Ok(out)
}
