use serde::{Deserialize, Serialize};

/// Approximate meters per degree of latitude/longitude at the equator.
///
/// Overlap detection runs entirely in this flat-plane metric. It understates
/// east-west distances away from the equator, but it is the contract the
/// service-circle overlap semantics were defined against for city-scale spans,
/// so it must not be swapped for great-circle distance.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

const EARTH_RADIUS: f64 = 6_378_137.0;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Approximate distance in meters using planar Euclidean distance in
    /// degree space scaled by [`METERS_PER_DEGREE`].
    ///
    /// This is the metric the overlap resolver is specified against.
    pub fn flat_distance_meters(&self, other: &LatLng) -> f64 {
        let dx = self.lng - other.lng;
        let dy = self.lat - other.lat;
        (dx * dx + dy * dy).sqrt() * METERS_PER_DEGREE
    }

    /// Calculates the distance to another LatLng using the Haversine formula.
    ///
    /// Used by view math (fly-to, pixel scaling), never by overlap detection.
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Linear interpolation toward another coordinate
    pub fn lerp(&self, other: &LatLng, t: f64) -> LatLng {
        LatLng::new(
            self.lat + (other.lat - self.lat) * t,
            self.lng + (other.lng - self.lng) * t,
        )
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(3.1319, 101.6841);
        assert_eq!(coord.lat, 3.1319);
        assert_eq!(coord.lng, 101.6841);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_flat_distance() {
        let a = LatLng::new(3.10, 101.60);
        let b = LatLng::new(3.1005, 101.60);
        let d = a.flat_distance_meters(&b);

        // 0.0005 degrees of latitude is roughly 55.5 m in the flat metric
        assert!((d - 55.5).abs() < 0.1);
        // Symmetric by construction
        assert_eq!(d, b.flat_distance_meters(&a));
    }

    #[test]
    fn test_flat_distance_ignores_latitude() {
        // The flat metric deliberately applies the equatorial scale everywhere
        let near_equator = LatLng::new(0.0, 0.0).flat_distance_meters(&LatLng::new(0.0, 0.001));
        let far_north = LatLng::new(60.0, 0.0).flat_distance_meters(&LatLng::new(60.0, 0.001));
        assert_eq!(near_equator, far_north);
    }

    #[test]
    fn test_haversine_distance() {
        let kl = LatLng::new(3.1319, 101.6841);
        let sg = LatLng::new(1.3521, 103.8198);
        let distance = kl.distance_to(&sg);

        // KL to Singapore is approximately 316 km
        assert!((distance - 316_000.0).abs() < 10_000.0);
    }

    #[test]
    fn test_lerp() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(2.0, 4.0);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.lat, 1.0);
        assert_eq!(mid.lng, 2.0);
    }
}
