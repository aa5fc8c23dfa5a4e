//! Location bucketing for mechanic records.
//!
//! Each step of the encoder bisects the latitude and longitude intervals at
//! the same time and packs the two comparison results into one symbol:
//!
//! ```text
//! bit0 = latitude  >= latitude midpoint
//! bit1 = longitude >= longitude midpoint
//! symbol = ALPHABET[bit0 | (bit1 << 1)]
//! ```
//!
//! This is not the textbook five-bits-per-symbol geohash. Only the first four
//! symbols of the alphabet (`0`, `1`, `2`, `3`) are ever emitted, and every
//! stored `LocationGeohash` was produced by this scheme, so it must stay
//! bit-for-bit stable. Codes sharing a prefix share a bounding box, which is
//! what makes prefix-based proximity bucketing work.

/// Symbol table shared with the standard geohash alphabet.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Precision used for every mechanic record.
pub const MECHANIC_GEOHASH_PRECISION: usize = 12;

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Encodes a coordinate pair into a location code of exactly `precision`
/// characters.
///
/// The function is total. Coordinates outside the valid ranges saturate to
/// the nearest edge bucket (`3` above, `0` below); callers that care about
/// range must validate before encoding.
///
/// # Examples
///
/// ```
/// use garage_core::location::encode;
///
/// assert_eq!(encode(0.0, 0.0, 1), "3");
/// assert_eq!(encode(12.9716, 77.5946, 12).len(), 12);
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> String {
    let (mut lat_low, mut lat_high) = LATITUDE_RANGE;
    let (mut lon_low, mut lon_high) = LONGITUDE_RANGE;
    let mut code = String::with_capacity(precision);

    for _ in 0..precision {
        let mut bits = 0usize;

        let lat_mid = (lat_low + lat_high) / 2.0;
        if latitude >= lat_mid {
            bits |= 1;
            lat_low = lat_mid;
        } else {
            lat_high = lat_mid;
        }

        let lon_mid = (lon_low + lon_high) / 2.0;
        if longitude >= lon_mid {
            bits |= 2;
            lon_low = lon_mid;
        } else {
            lon_high = lon_mid;
        }

        code.push(char::from(ALPHABET[bits]));
    }

    code
}
