//! Configuration for map behavior and the two remote endpoints.

use crate::core::geo::LatLng;
use std::time::Duration;

/// Static configuration for the map engine and its collaborators.
///
/// The only environment-specific values are the two remote endpoint URLs;
/// everything else is interaction tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// One-shot outlet retrieval endpoint
    pub outlets_url: String,
    /// Assistant exchange endpoint
    pub assistant_url: String,
    /// Initial view center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: f64,
    /// Resting marker icon size in pixels
    pub icon_min_size: f64,
    /// Hovered marker icon size in pixels
    pub icon_max_size: f64,
    /// Duration of the fly-to transition triggered by popup-open commands
    pub fly_duration: Duration,
    /// Tile attribution shown on the surface
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            outlets_url: "https://findmcd-0-0-1.onrender.com/fetchOutlet".to_string(),
            assistant_url: "https://findmcd-0-0-1.onrender.com/chatbot".to_string(),
            center: LatLng::new(3.1319, 101.6841),
            zoom: 12.0,
            icon_min_size: 30.0,
            icon_max_size: 40.0,
            fly_duration: Duration::from_millis(500),
            tile_attribution: "© OpenStreetMap contributors © CARTO".to_string(),
        }
    }
}

impl MapConfig {
    /// Points both endpoints at a different base URL, keeping the original
    /// paths. Used to target a staging service or a mock server in tests.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            outlets_url: format!("{base}/fetchOutlet"),
            assistant_url: format!("{base}/chatbot"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapConfig::default();
        assert_eq!(config.icon_min_size, 30.0);
        assert_eq!(config.icon_max_size, 40.0);
        assert_eq!(config.fly_duration, Duration::from_millis(500));
        assert!(config.center.is_valid());
    }

    #[test]
    fn test_with_base_url() {
        let config = MapConfig::with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.outlets_url, "http://127.0.0.1:9000/fetchOutlet");
        assert_eq!(config.assistant_url, "http://127.0.0.1:9000/chatbot");
    }
}
