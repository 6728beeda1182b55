use chrono::{DateTime, Utc};

/// Prefix of every generated file name
pub const OUTPUT_PREFIX: &str = "RTK_Rover";

/// `RTK_Rover_YYYY-MM-DD_HH-MM-SS` for the given UTC moment, without extension.
#[must_use]
pub fn output_name(now: &DateTime<Utc>) -> String {
    format!("{OUTPUT_PREFIX}_{}", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// [`output_name`] with a `.csv` extension
#[must_use]
pub fn output_filename(now: &DateTime<Utc>) -> String {
    format!("{}.csv", output_name(now))
}
