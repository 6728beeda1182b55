//! UBX Fletcher-8 checksum

/// Running two-accumulator checksum over the class, id, length and payload bytes.
///
/// Both accumulators wrap modulo 256. For every byte `ck_a += byte`, then
/// `ck_b += ck_a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checksum {
    ck_a: u8,
    ck_b: u8,
}

impl Checksum {
    /// Create a zeroed checksum
    #[must_use]
    pub const fn new() -> Self {
        Self { ck_a: 0, ck_b: 0 }
    }

    /// Compute the checksum of a byte range in one pass
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        let mut checksum = Self::new();
        checksum.update(bytes);
        checksum
    }

    /// Feed more bytes into the accumulators
    pub fn update(&mut self, bytes: &[u8]) {
        let mut ck_a = self.ck_a;
        let mut ck_b = self.ck_b;
        for &byte in bytes {
            ck_a = ck_a.wrapping_add(byte);
            ck_b = ck_b.wrapping_add(ck_a);
        }
        self.ck_a = ck_a;
        self.ck_b = ck_b;
    }

    /// First accumulator
    #[must_use]
    pub const fn ck_a(&self) -> u8 {
        self.ck_a
    }

    /// Second accumulator
    #[must_use]
    pub const fn ck_b(&self) -> u8 {
        self.ck_b
    }

    /// Wire order: `[ck_a, ck_b]`
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.ck_a, self.ck_b]
    }

    /// Compare against the two trailing bytes of a frame
    #[must_use]
    pub fn matches(&self, trailer: &[u8]) -> bool {
        trailer == self.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(Checksum::of(&[]).to_bytes(), [0, 0]);
    }

    #[test]
    fn test_known_vector() {
        // UBX-CFG-PRT poll: B5 62 06 00 00 00 06 18
        let checksum = Checksum::of(&[0x06, 0x00, 0x00, 0x00]);
        assert_eq!(checksum.to_bytes(), [0x06, 0x18]);
    }

    #[test]
    fn test_wraps_modulo_256() {
        let checksum = Checksum::of(&[0xFF, 0xFF]);
        // ck_a: 0xFF, then 0xFE. ck_b: 0xFF, then 0xFF + 0xFE = 0x1FD -> 0xFD
        assert_eq!(checksum.ck_a(), 0xFE);
        assert_eq!(checksum.ck_b(), 0xFD);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let data = [0x01, 0x14, 0x24, 0x00, 0xAA, 0x55, 0x10];
        let mut incremental = Checksum::new();
        incremental.update(&data[..3]);
        incremental.update(&data[3..]);
        assert_eq!(incremental, Checksum::of(&data));
    }

    #[test]
    fn test_matches_trailer() {
        let checksum = Checksum::of(&[0x06, 0x00, 0x00, 0x00]);
        assert!(checksum.matches(&[0x06, 0x18]));
        assert!(!checksum.matches(&[0x18, 0x06]));
        assert!(!checksum.matches(&[0x06]));
    }
}
