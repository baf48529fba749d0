use crate::models::Coordinates;

/// Earth's radius in statute miles.
///
/// All distances in this crate are in miles; search radii are specified in
/// miles on the wire as well.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Miles per degree of latitude, used for bounding-box estimates
const MILES_PER_DEGREE: f64 = 69.0;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Geographic bounding box around a center point
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Calculate a bounding box around a center point.
///
/// Much cheaper than Haversine; used to reject clearly-distant listings
/// before the exact distance check. 1 degree latitude is ~69 miles, and a
/// degree of longitude shrinks with cos(latitude).
pub fn calculate_bounding_box(lat: f64, lon: f64, radius_miles: f64) -> BoundingBox {
    let lat_delta = radius_miles / MILES_PER_DEGREE;
    let lon_delta = radius_miles / (MILES_PER_DEGREE * lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: lat - lat_delta,
        max_lat: lat + lat_delta,
        min_lon: lon - lon_delta,
        max_lon: lon + lon_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(lat: f64, lon: f64, bbox: &BoundingBox) -> bool {
    lat >= bbox.min_lat
        && lat <= bbox.max_lat
        && lon >= bbox.min_lon
        && lon <= bbox.max_lon
}

/// Exact radius test: bounding-box quick reject, then Haversine.
///
/// The box is padded by construction (it circumscribes the radius circle),
/// so the pre-check never rejects a point the exact test would accept.
#[inline]
pub fn within_radius(origin: Coordinates, point: Coordinates, radius_miles: f64) -> bool {
    let bbox = calculate_bounding_box(origin.latitude, origin.longitude, radius_miles);
    if !is_within_bounding_box(point.latitude, point.longitude, &bbox) {
        return false;
    }

    haversine_distance(
        origin.latitude,
        origin.longitude,
        point.latitude,
        point.longitude,
    ) <= radius_miles
}
