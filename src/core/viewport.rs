use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const TILE_SIZE: f64 = 256.0;
const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
        }
    }

    /// Sets the center of the viewport
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(0.0, 18.0);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Projects a LatLng to world pixel coordinates at the current zoom
    /// (standard Web Mercator, EPSG:3857)
    fn project(&self, pos: &LatLng) -> Point {
        let scale = TILE_SIZE * 2_f64.powf(self.zoom);
        let x = (pos.lng + 180.0) / 360.0 * scale;
        let sin = pos.lat.to_radians().sin().clamp(-0.9999, 0.9999);
        let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * scale;
        Point::new(x, y)
    }

    /// Converts a geographical coordinate to viewport-relative screen pixels
    pub fn lat_lng_to_screen(&self, pos: &LatLng) -> Point {
        let world = self.project(pos);
        let origin = self.project(&self.center);
        Point::new(
            world.x - origin.x + self.size.x / 2.0,
            world.y - origin.y + self.size.y / 2.0,
        )
    }

    /// Ground resolution in meters per screen pixel at the given latitude
    pub fn meters_per_pixel(&self, lat: f64) -> f64 {
        EARTH_CIRCUMFERENCE * lat.to_radians().cos() / (TILE_SIZE * 2_f64.powf(self.zoom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_screen_center() {
        let viewport = Viewport::new(LatLng::new(3.1319, 101.6841), 12.0, Point::new(800.0, 600.0));
        let center = viewport.center;
        let screen = viewport.lat_lng_to_screen(&center);
        assert!((screen.x - 400.0).abs() < 1e-6);
        assert!((screen.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_north_is_up() {
        let viewport = Viewport::new(LatLng::new(3.1319, 101.6841), 12.0, Point::new(800.0, 600.0));
        let north = viewport.lat_lng_to_screen(&LatLng::new(3.2, 101.6841));
        assert!(north.y < 300.0);
    }

    #[test]
    fn test_meters_per_pixel_shrinks_with_zoom() {
        let near = Viewport::new(LatLng::default(), 12.0, Point::new(800.0, 600.0));
        let far = Viewport::new(LatLng::default(), 10.0, Point::new(800.0, 600.0));
        assert!(near.meters_per_pixel(3.0) < far.meters_per_pixel(3.0));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut viewport = Viewport::new(LatLng::default(), 12.0, Point::new(800.0, 600.0));
        viewport.set_zoom(25.0);
        assert_eq!(viewport.zoom, 18.0);
    }
}
