//! Per-outlet marker visual state.
//!
//! `MarkerInteraction` is the single owner of hover state, the animated icon
//! sizes, the overlap border set, and the externally supplied highlight
//! fragments. All mutation goes through the operations here; the surface only
//! reads. Conceptually each marker moves through
//! `idle -> hoveredGrowing -> hoveredSteady -> shrinking -> idle`, with at
//! most one outlet in a hovered state at any instant.

use crate::core::outlet::{Outlet, OutletStore};
use crate::interaction::animation::{AnimationDirection, IconAnimator};
use crate::prelude::HashSet;
use crate::spatial::overlap::overlapping_ids;

#[derive(Debug)]
pub struct MarkerInteraction {
    hovered: Option<u64>,
    animator: IconAnimator,
    border: HashSet<u64>,
    highlighted_names: Vec<String>,
    force_colorful: bool,
}

impl MarkerInteraction {
    pub fn new(icon_min_size: f64, icon_max_size: f64) -> Self {
        Self {
            hovered: None,
            animator: IconAnimator::new(icon_min_size, icon_max_size),
            border: HashSet::default(),
            highlighted_names: Vec::new(),
            force_colorful: false,
        }
    }

    /// Pointer entered a marker. Recomputes the border set from the current
    /// outlet arena and starts growing the hovered icon. Supersedes any
    /// in-flight shrink for the same outlet (last writer wins, no queueing).
    pub fn on_hover_start(&mut self, outlet_id: u64, store: &OutletStore) {
        if self.hovered == Some(outlet_id) {
            return;
        }
        let Some(target) = store.get(outlet_id) else {
            log::debug!("hover start for unknown outlet {outlet_id}, ignored");
            return;
        };
        let mut border = overlapping_ids(target, store.outlets());
        border.insert(outlet_id);
        self.border = border;
        self.hovered = Some(outlet_id);
        self.animator.start(outlet_id, AnimationDirection::Grow);
    }

    /// Pointer left the hovered marker. Clears the border set and shrinks
    /// every tracked icon back toward its resting size, each independently.
    pub fn on_hover_end(&mut self) {
        self.hovered = None;
        self.border.clear();
        self.animator.shrink_all();
    }

    /// Replaces the highlight fragments atomically. `None` is a no-op;
    /// `Some(vec![])` explicitly clears all highlighting.
    pub fn set_highlighted_names(&mut self, fragments: Option<Vec<String>>) {
        if let Some(fragments) = fragments {
            self.highlighted_names = fragments;
        }
    }

    /// True when the global force-colorful flag is set, or the outlet's name
    /// contains any highlight fragment (case-sensitive, as supplied).
    pub fn is_highlighted(&self, outlet: &Outlet) -> bool {
        if self.force_colorful {
            return true;
        }
        self.highlighted_names
            .iter()
            .any(|fragment| outlet.name.contains(fragment))
    }

    pub fn set_force_colorful(&mut self, force: bool) {
        self.force_colorful = force;
    }

    pub fn has_border(&self, outlet_id: u64) -> bool {
        self.border.contains(&outlet_id)
    }

    pub fn border_set(&self) -> &HashSet<u64> {
        &self.border
    }

    pub fn hovered(&self) -> Option<u64> {
        self.hovered
    }

    pub fn icon_size(&self, outlet_id: u64) -> f64 {
        self.animator.size_of(outlet_id)
    }

    /// Advances all icon animations one frame. Returns true while any
    /// animation is live.
    pub fn tick(&mut self) -> bool {
        self.animator.tick()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }
}
