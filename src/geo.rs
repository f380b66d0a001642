use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Mean Earth radius used for every distance in this crate.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("cannot parse point from {0:?}, expected \"lat,lon\"")]
    Parse(String),
    #[error("invalid radius: {0}, must be a non-negative number of meters")]
    InvalidRadius(f64),
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in meters.
///
/// No range checks and no longitude wraparound. NaN input gives NaN.
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        degrees_to_radians(lat1),
        degrees_to_radians(lon1),
        degrees_to_radians(lat2),
        degrees_to_radians(lon2),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 near antipodes. `clamp` keeps NaN as NaN.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Inclusive: a point exactly `radius_in_meters` away is inside.
pub fn is_within_radius(
    current_lat: f64,
    current_lng: f64,
    target_lat: f64,
    target_lng: f64,
    radius_in_meters: f64,
) -> bool {
    calculate_distance(current_lat, current_lng, target_lat, target_lng) <= radius_in_meters
}

/// Accepts any radius `>= 0`, infinity included. Negative and NaN are rejected.
pub fn validate_radius(radius_in_meters: f64) -> Result<f64, GeoError> {
    if radius_in_meters >= 0.0 {
        Ok(radius_in_meters)
    } else {
        Err(GeoError::InvalidRadius(radius_in_meters))
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Unchecked, same contract as [`calculate_distance`].
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Bounds-checked constructor. Rejects NaN and infinities too.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidLongitude(lon));
        }
        Ok(GeoPoint { lat, lon })
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        calculate_distance(self.lat, self.lon, other.lat, other.lon)
    }

    pub fn is_within_radius(&self, target: &GeoPoint, radius_in_meters: f64) -> bool {
        is_within_radius(self.lat, self.lon, target.lat, target.lon, radius_in_meters)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for GeoPoint {
    type Err = GeoError;

    /// Parses `"lat,lon"` and validates the ranges.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || GeoError::Parse(s.to_string());
        let (lat, lon) = s.split_once(',').ok_or_else(parse_err)?;
        let lat: f64 = lat.trim().parse().map_err(|_| parse_err())?;
        let lon: f64 = lon.trim().parse().map_err(|_| parse_err())?;
        GeoPoint::try_new(lat, lon)
    }
}
