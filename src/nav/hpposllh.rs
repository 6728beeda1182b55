//! UBX-NAV-HPPOSLLH payload decoder

/// Minimum payload length the decoder accepts
pub const HPPOSLLH_MIN_LEN: usize = 36;

/// `flags` bit 0: the position solution is not valid
const FLAG_INVALID_LLH: u8 = 0x01;

/// Scale of the base latitude/longitude fields (1e-7 deg)
const DEG_SCALE: f64 = 1e-7;
/// Scale of the high-precision latitude/longitude components (1e-9 deg)
const DEG_HP_SCALE: f64 = 1e-9;
/// Scale of the base height fields (mm)
const HEIGHT_SCALE: f64 = 1e-3;
/// Scale of the high-precision height components and accuracies (0.1 mm)
const HEIGHT_HP_SCALE: f64 = 1e-4;

/// A decoded high-precision position
///
/// # Payload Layout
///
/// ```text
/// offset  size  field
///      0     1  version
///      3     1  flags (bit 0: invalidLlh)
///      4     4  iTOW      u32  ms
///      8     4  lon       i32  1e-7 deg
///     12     4  lat       i32  1e-7 deg
///     16     4  height    i32  mm (ellipsoid)
///     20     4  hMSL      i32  mm
///     24     1  lonHp     i8   1e-9 deg
///     25     1  latHp     i8   1e-9 deg
///     26     1  heightHp  i8   0.1 mm
///     27     1  hMSLHp    i8   0.1 mm
///     28     4  hAcc      u32  0.1 mm
///     32     4  vAcc      u32  0.1 mm
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionRecord {
    /// GPS time of week in milliseconds
    pub time_of_week_ms: u32,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Height above mean sea level in metres
    pub height_msl: f64,
    /// Height above the ellipsoid in metres
    pub height_ellipsoid: f64,
    /// Horizontal accuracy estimate in metres
    pub horizontal_accuracy: f64,
    /// Vertical accuracy estimate in metres
    pub vertical_accuracy: f64,
    /// Message version
    pub version: u8,
}

/// Decode a UBX-NAV-HPPOSLLH payload.
///
/// Returns `None` when the payload is shorter than [`HPPOSLLH_MIN_LEN`] or the
/// receiver flagged the solution invalid. Neither case is an error.
#[must_use]
pub fn decode_hpposllh(payload: &[u8]) -> Option<PositionRecord> {
    let fields = payload.get(..HPPOSLLH_MIN_LEN)?;

    let flags = fields[3];
    if flags & FLAG_INVALID_LLH != 0 {
        return None;
    }

    let lon = read_i32(fields, 8)?;
    let lat = read_i32(fields, 12)?;
    let height = read_i32(fields, 16)?;
    let h_msl = read_i32(fields, 20)?;
    let lon_hp = read_i8(fields, 24)?;
    let lat_hp = read_i8(fields, 25)?;
    let height_hp = read_i8(fields, 26)?;
    let h_msl_hp = read_i8(fields, 27)?;

    Some(PositionRecord {
        time_of_week_ms: read_u32(fields, 4)?,
        latitude: f64::from(lat) * DEG_SCALE + f64::from(lat_hp) * DEG_HP_SCALE,
        longitude: f64::from(lon) * DEG_SCALE + f64::from(lon_hp) * DEG_HP_SCALE,
        height_msl: f64::from(h_msl) * HEIGHT_SCALE + f64::from(h_msl_hp) * HEIGHT_HP_SCALE,
        height_ellipsoid: f64::from(height) * HEIGHT_SCALE
            + f64::from(height_hp) * HEIGHT_HP_SCALE,
        horizontal_accuracy: f64::from(read_u32(fields, 28)?) * HEIGHT_HP_SCALE,
        vertical_accuracy: f64::from(read_u32(fields, 32)?) * HEIGHT_HP_SCALE,
        version: fields[0],
    })
}

fn read_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let raw = bytes.get(offset..offset + 4)?;
    Some(u32::from_le_bytes(raw.try_into().ok()?))
}

fn read_i32(bytes: &[u8], offset: usize) -> Option<i32> {
    let raw = bytes.get(offset..offset + 4)?;
    Some(i32::from_le_bytes(raw.try_into().ok()?))
}

fn read_i8(bytes: &[u8], offset: usize) -> Option<i8> {
    bytes.get(offset).map(|&b| i8::from_le_bytes([b]))
}
