/// Counters collected over one pass of the pipeline.
///
/// Every corrupted candidate frame and every rejected payload is recovered
/// locally; these counters are the only place such events remain visible.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScanStats {
    /// Bytes in the scanned buffer
    pub bytes_scanned: usize,
    /// Frames that passed the checksum
    pub frames_accepted: u64,
    /// Sync patterns whose announced length ran past the end of the buffer
    pub length_overruns: u64,
    /// Candidates whose checksum did not match
    pub checksum_mismatches: u64,
    /// Valid frames dropped by the class/id filter
    pub frames_filtered: u64,
    /// Positioning payloads that were too short or flagged invalid
    pub payloads_rejected: u64,
    /// Position records produced
    pub records: u64,
}

impl ScanStats {
    /// Rejected sync candidates of any cause.
    #[must_use]
    pub const fn candidates_rejected(&self) -> u64 {
        self.length_overruns + self.checksum_mismatches
    }

    /// Share of positioning payloads that decoded into records.
    #[must_use]
    pub fn record_yield(&self) -> Option<f64> {
        let positioning = self.records + self.payloads_rejected;
        if positioning == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = self.records as f64 / positioning as f64;
        Some(ratio)
    }
}
