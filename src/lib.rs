//! # outletmap
//!
//! An interactive outlet map engine with an assistant-driven command bridge.
//!
//! The crate keeps a set of geo-located outlets (points of interest with a
//! service radius) and drives their per-marker visual state from two sources:
//! pointer hover over the map surface, and commands issued by a separate
//! conversational component through a narrow [`bridge::MapCommands`] handle.
//! Hovering a marker grows its icon and flags every outlet whose service
//! circle overlaps the hovered one; the assistant can highlight outlets by
//! name or pop open a specific outlet's detail callout.

pub mod bridge;
pub mod chat;
pub mod core;
pub mod interaction;
pub mod net;
pub mod prelude;
pub mod spatial;

#[cfg(feature = "egui")]
pub mod ui;

// Re-export public API
pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, Point},
    outlet::{Outlet, OutletStore},
    viewport::Viewport,
};

pub use crate::bridge::{command_channel, CommandReceiver, MapCommand, MapCommands};
pub use crate::interaction::{animation::IconAnimator, state::MarkerInteraction};
pub use crate::net::{assistant::AssistantClient, outlets::OutletClient};

#[cfg(feature = "egui")]
pub use crate::ui::surface::MapSurface;

#[cfg(all(feature = "egui", feature = "tokio-runtime"))]
pub use crate::{chat::ChatPanel, ui::app::OutletMapApp};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Initializes env_logger for binaries and tests that want log output.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
