//! GPS time-of-week to calendar time
//!
//! `iTOW` counts milliseconds since the start of the GPS week (Sunday 00:00).
//! The payload carries no week number, so the week is taken from the moment of
//! conversion: a capture is assumed to have been recorded during the same week
//! it is processed in. Captures spanning a week rollover, or converted in a
//! later week, get the wrong date.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, NaiveTime, TimeZone};

/// Milliseconds in one GPS week
pub const MS_PER_WEEK: u32 = 604_800_000;

/// Timestamp format with millisecond resolution
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Upper bound on DST-gap steps when resolving local midnight
const MAX_GAP_STEPS: u32 = 8;

/// Start of the week containing a given moment, used to place `iTOW` values.
#[derive(Debug, Clone)]
pub struct WeekAnchor<Tz: TimeZone> {
    start: DateTime<Tz>,
}

impl<Tz: TimeZone> WeekAnchor<Tz> {
    /// Anchor on local midnight of the most recent Sunday at or before `now`
    #[must_use]
    pub fn new(now: &DateTime<Tz>) -> Self {
        Self {
            start: week_start(now),
        }
    }

    /// Absolute instant of a time-of-week offset
    #[must_use]
    pub fn datetime(&self, itow_ms: u32) -> DateTime<Tz> {
        self.start.clone() + Duration::milliseconds(i64::from(itow_ms))
    }

    /// `YYYY-MM-DD HH:MM:SS.mmm` in the anchor's time zone
    #[must_use]
    pub fn format(&self, itow_ms: u32) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.datetime(itow_ms).format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Local midnight of the most recent Sunday at or before `now`.
#[must_use]
pub fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let days_since_sunday = i64::from(now.weekday().num_days_from_sunday());
    let sunday = now.date_naive() - Duration::days(days_since_sunday);
    resolve_local(&now.timezone(), sunday.and_time(NaiveTime::MIN))
}

/// Convert `iTOW` to a timestamp string relative to the week containing `now`.
#[must_use]
pub fn itow_to_timestamp<Tz: TimeZone>(itow_ms: u32, now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    WeekAnchor::new(now).format(itow_ms)
}

// Midnight may not exist on a DST switch day; wall clocks jump forward, so do we.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = naive;
    for _ in 0..MAX_GAP_STEPS {
        if let Some(resolved) = tz.from_local_datetime(&candidate).earliest() {
            return resolved;
        }
        candidate += Duration::minutes(30);
    }
    tz.from_utc_datetime(&naive)
}
