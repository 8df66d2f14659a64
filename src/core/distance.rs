use crate::models::{Coordinate, Listing};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `a` - First point, degrees
/// * `b` - Second point, degrees
///
/// # Returns
/// Great-circle distance in kilometers. Non-negative and finite for finite
/// inputs; `f64::NAN` when either point has a non-finite latitude or
/// longitude. Callers filter such points out first, see [`try_distance`].
#[inline]
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }

    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Checked distance: `None` instead of NaN for non-finite input
#[inline]
pub fn try_distance(a: Coordinate, b: Coordinate) -> Option<f64> {
    let d = haversine_distance(a, b);
    d.is_finite().then_some(d)
}

/// Distance from `origin` to a listing, when both sides are usable
#[inline]
pub fn listing_distance(origin: Option<Coordinate>, listing: &Listing) -> Option<f64> {
    try_distance(origin?, listing.usable_coordinate()?)
}
