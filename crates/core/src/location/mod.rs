//! Coordinates and location codes.

mod coordinate;
mod geohash;

pub use coordinate::{Coordinate, CoordinateError, MAX_DIGITS};
pub use geohash::{encode, ALPHABET, LATITUDE_RANGE, LONGITUDE_RANGE, MECHANIC_GEOHASH_PRECISION};
