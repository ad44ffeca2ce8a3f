//! Distance and map-link helpers for polling locations.

use serde::{Deserialize, Serialize};

/// Earth radius in miles, for the haversine formula.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A WGS84 coordinate pair in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Great-circle distance between two points in miles (haversine).
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Renders a distance for display: values under 0.1 mi collapse to
/// "Less than 0.1 mi", everything else gets one decimal place.
///
/// Rounds half away from zero before formatting; `{:.1}` alone would show
/// 0.85 as "0.8 mi" because its nearest IEEE-754 value sits just below 0.85.
pub fn format_distance(miles: f64) -> String {
    if miles < 0.1 {
        return "Less than 0.1 mi".to_string();
    }
    format!("{:.1} mi", (miles * 10.0).round() / 10.0)
}

/// Builds a Google Maps directions deep link to a destination. Pure string
/// templating; no network call.
pub fn directions_url(destination: GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        destination.lat, destination.lng
    )
}
