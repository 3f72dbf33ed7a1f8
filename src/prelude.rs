//! Prelude module for common outletmap types and traits
//!
//! Re-exports the most commonly used types and functions for easy importing
//! with `use outletmap::prelude::*;`

pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, Point},
    outlet::{Outlet, OutletStore},
    viewport::Viewport,
};

pub use crate::interaction::{
    animation::{AnimationDirection, EasingType, FlyToAnimation, IconAnimator},
    state::MarkerInteraction,
};

pub use crate::bridge::{command_channel, CommandReceiver, MapCommand, MapCommands};

pub use crate::chat::{ChatMessage, ChatState, Speaker};

pub use crate::net::{
    assistant::{AssistantClient, AssistantReply},
    outlets::OutletClient,
};

pub use crate::spatial::overlap::overlapping_ids;

#[cfg(feature = "egui")]
pub use crate::ui::{popup::OutletPopup, surface::MapSurface};

#[cfg(all(feature = "egui", feature = "tokio-runtime"))]
pub use crate::{chat::ChatPanel, ui::app::OutletMapApp};

pub use crate::{Error as MapError, Result};

pub use std::{
    sync::Arc,
    time::{Duration, Instant},
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
