use std::io::Write;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use ubx2csv::protocol::encode_frame;
use ubx2csv::{Error, Outcome, convert_bytes, convert_file, extract_positions};

fn now() -> DateTime<Utc> {
    // Wednesday; the GPS week started on 2024-05-12
    Utc.with_ymd_and_hms(2024, 5, 15, 13, 45, 7).unwrap()
}

struct Fix {
    itow: u32,
    lon: i32,
    lat: i32,
    h_msl: i32,
    lon_hp: i8,
    lat_hp: i8,
    h_msl_hp: i8,
    invalid: bool,
}

impl Default for Fix {
    fn default() -> Self {
        Self {
            itow: 259_200_000,
            lon: 123_456_789,
            lat: 474_977_123,
            h_msl: 408_123,
            lon_hp: 5,
            lat_hp: -12,
            h_msl_hp: 7,
            invalid: false,
        }
    }
}

impl Fix {
    fn frame(&self) -> Vec<u8> {
        let mut payload = [0u8; 36];
        payload[3] = u8::from(self.invalid);
        payload[4..8].copy_from_slice(&self.itow.to_le_bytes());
        payload[8..12].copy_from_slice(&self.lon.to_le_bytes());
        payload[12..16].copy_from_slice(&self.lat.to_le_bytes());
        payload[20..24].copy_from_slice(&self.h_msl.to_le_bytes());
        payload[24] = self.lon_hp.to_le_bytes()[0];
        payload[25] = self.lat_hp.to_le_bytes()[0];
        payload[27] = self.h_msl_hp.to_le_bytes()[0];
        encode_frame(0x01, 0x14, &payload).unwrap()
    }
}

#[test]
fn single_frame_yields_header_and_one_line() {
    let export = convert_bytes(Fix::default().frame(), &now()).unwrap();

    assert_eq!(
        export.content,
        "time,latitude,longitude,height_msl\n\
         2024-05-15 00:00:00.000,47.497712288,12.345678905,408.1237\n"
    );
    assert_eq!(export.filename, "RTK_Rover_2024-05-15_13-45-07.csv");
    assert_eq!(export.record_count(), 1);
}

#[test]
fn capture_without_positioning_messages_fails() {
    let mut capture = encode_frame(0x01, 0x07, &[0u8; 92]).unwrap();
    capture.extend(encode_frame(0x05, 0x01, &[0x06, 0x8A]).unwrap());
    capture.extend(b"$GNGGA,,,,,,0,00,99.99,,,,,,*56\r\n");

    let result = convert_bytes(capture, &now());
    assert!(matches!(result, Err(Error::NoUsableRecords)));

    let outcome = Outcome::from(result);
    assert_eq!(
        outcome,
        Outcome::Failure {
            error: "No valid UBX-NAV-HPPOSLLH messages found".to_string()
        }
    );
}

#[test]
fn corrupted_frame_does_not_hide_the_next_one() {
    let first = Fix {
        itow: 1_000,
        ..Fix::default()
    }
    .frame();
    let mut corrupted = Fix {
        itow: 2_000,
        ..Fix::default()
    }
    .frame();
    corrupted[20] ^= 0x40;
    let last = Fix {
        itow: 3_000,
        ..Fix::default()
    }
    .frame();

    let (records, stats) = extract_positions([first, corrupted, last].concat());
    let times: Vec<u32> = records.iter().map(|r| r.time_of_week_ms).collect();

    assert_eq!(times, [1_000, 3_000]);
    assert_eq!(stats.checksum_mismatches, 1);
}

#[test]
fn invalid_fixes_are_dropped_silently() {
    let mut capture = Fix {
        invalid: true,
        ..Fix::default()
    }
    .frame();
    capture.extend(
        Fix {
            itow: 259_201_000,
            ..Fix::default()
        }
        .frame(),
    );

    let export = convert_bytes(capture, &now()).unwrap();
    assert_eq!(export.record_count(), 1);
    assert_eq!(export.stats.payloads_rejected, 1);
    assert!(export.content.contains("2024-05-15 00:00:01.000,"));
}

#[test]
fn records_keep_scan_order() {
    let mut capture = Vec::new();
    for itow in [5_000, 1_000, 3_000] {
        capture.extend(Fix { itow, ..Fix::default() }.frame());
        capture.extend(encode_frame(0x01, 0x07, &[0u8; 92]).unwrap());
    }

    let export = convert_bytes(capture, &now()).unwrap();
    let seconds: Vec<&str> = export
        .content
        .lines()
        .skip(1)
        .map(|line| &line[17..23])
        .collect();
    assert_eq!(seconds, ["05.000", "01.000", "03.000"]);
}

#[test]
fn conversion_is_deterministic_for_a_fixed_moment() {
    let mut capture = b"\xB5\x62garbage".to_vec();
    for itow in (0..50).map(|n| 259_200_000 + n * 200) {
        capture.extend(Fix { itow, ..Fix::default() }.frame());
    }

    let first = convert_bytes(capture.clone(), &now()).unwrap();
    let second = convert_bytes(capture, &now()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.record_count(), 50);
}

#[test]
fn time_column_follows_the_clock_time_zone() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let local_now = now().with_timezone(&tz);

    let export = convert_bytes(Fix::default().frame(), &local_now).unwrap();
    let line = export.content.lines().nth(1).unwrap();

    // Week start is local midnight, so the wall-clock time is unchanged
    assert!(line.starts_with("2024-05-15 00:00:00.000,"));
    // The file name is always UTC
    assert_eq!(export.filename, "RTK_Rover_2024-05-15_13-45-07.csv");
}

#[test]
fn convert_file_reads_capture_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&Fix::default().frame()).unwrap();
    file.flush().unwrap();

    let export = convert_file(file.path(), &now()).unwrap();
    assert_eq!(export.record_count(), 1);
}

#[test]
fn unreadable_file_surfaces_the_io_message() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.ubx");

    let result = convert_file(&missing, &now());
    let Err(Error::Io(err)) = &result else {
        panic!("expected io error, got {result:?}");
    };
    let message = err.to_string();

    let Outcome::Failure { error } = Outcome::from(result) else {
        panic!("expected failure");
    };
    assert_eq!(error, message);
}
