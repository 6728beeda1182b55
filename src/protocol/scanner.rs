//! Resynchronizing frame scanner
//!
//! Walks a complete capture byte by byte and yields every checksum-valid frame
//! in the order it appears. Any rejected candidate advances the cursor by
//! exactly one byte, so a corrupted length field or payload never hides the
//! frames that follow it.

use bytes::Bytes;
use tracing::trace;

use super::{CHECKSUM_SIZE, Checksum, Frame, FrameHeader, HEADER_SIZE, MIN_FRAME_SIZE, ScanStats};
use super::{SYNC_CHAR_1, SYNC_CHAR_2};

/// Iterator over the valid frames of a buffer
#[derive(Debug, Clone)]
pub struct FrameScanner {
    buf: Bytes,
    pos: usize,
    stats: ScanStats,
}

impl FrameScanner {
    /// Create a scanner positioned at the start of `buf`
    pub fn new(buf: impl Into<Bytes>) -> Self {
        let buf = buf.into();
        let stats = ScanStats {
            bytes_scanned: buf.len(),
            ..ScanStats::default()
        };
        Self { buf, pos: 0, stats }
    }

    /// Counters gathered so far
    #[must_use]
    pub const fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Current byte offset
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Try to read a frame at the current position.
    ///
    /// Returns the frame and its wire length, or `None` if this position does
    /// not start a valid frame.
    fn frame_at(&mut self, pos: usize) -> Option<(Frame, usize)> {
        let window = &self.buf[pos..];
        if window[0] != SYNC_CHAR_1 || window[1] != SYNC_CHAR_2 {
            return None;
        }

        let header = FrameHeader::parse(window).ok()?;
        let frame_len = header.frame_len();
        if window.len() < frame_len {
            self.stats.length_overruns += 1;
            trace!(
                offset = pos,
                declared = header.payload_len(),
                available = window.len(),
                "length overrun"
            );
            return None;
        }

        let body_end = HEADER_SIZE + usize::from(header.payload_len());
        let checksum = Checksum::of(&window[2..body_end]);
        if !checksum.matches(&window[body_end..body_end + CHECKSUM_SIZE]) {
            self.stats.checksum_mismatches += 1;
            trace!(
                offset = pos,
                class = header.class(),
                id = header.id(),
                "checksum mismatch"
            );
            return None;
        }

        let payload = self.buf.slice(pos + HEADER_SIZE..pos + body_end);
        Some((Frame::new(header.class(), header.id(), payload), frame_len))
    }
}

impl Iterator for FrameScanner {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        while self.buf.len() - self.pos >= MIN_FRAME_SIZE {
            match self.frame_at(self.pos) {
                Some((frame, frame_len)) => {
                    self.pos += frame_len;
                    self.stats.frames_accepted += 1;
                    return Some(frame);
                }
                None => self.pos += 1,
            }
        }

        self.pos = self.buf.len();
        None
    }
}

/// Collect every valid frame in `buf`, in scan order.
#[must_use]
pub fn scan_frames(buf: &Bytes) -> Vec<Frame> {
    FrameScanner::new(buf.clone()).collect()
}
