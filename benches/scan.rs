use bytes::Bytes;
use chrono::{TimeZone, Utc};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use ubx2csv::protocol::{encode_frame, scan_frames};
use ubx2csv::{convert_bytes, extract_positions};

/// A capture of `count` HPPOSLLH frames, each followed by a NAV-PVT-sized frame
/// and a burst of line noise.
fn capture(count: u32) -> Bytes {
    let mut buf = Vec::new();
    for n in 0..count {
        let mut payload = [0u8; 36];
        payload[4..8].copy_from_slice(&(n * 200).to_le_bytes());
        payload[8..12].copy_from_slice(&123_456_789_i32.to_le_bytes());
        payload[12..16].copy_from_slice(&474_977_123_i32.to_le_bytes());
        buf.extend(encode_frame(0x01, 0x14, &payload).unwrap());
        buf.extend(encode_frame(0x01, 0x07, &[0u8; 92]).unwrap());
        buf.extend_from_slice(b"\x00\x01\xB5\x00noise");
    }
    Bytes::from(buf)
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for count in [100, 10_000] {
        let buf = capture(count);
        group.throughput(Throughput::Bytes(buf.len() as u64));
        group.bench_function(format!("frames_{count}"), |b| {
            b.iter(|| black_box(scan_frames(&buf)));
        });
        group.bench_function(format!("positions_{count}"), |b| {
            b.iter(|| black_box(extract_positions(buf.clone())));
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let now = Utc.with_ymd_and_hms(2024, 5, 15, 13, 45, 7).unwrap();

    let buf = capture(10_000);
    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("csv_10k", |b| {
        b.iter(|| black_box(convert_bytes(buf.clone(), &now).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_scan, bench_convert);
criterion_main!(benches);
