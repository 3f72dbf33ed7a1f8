//! Service-circle overlap resolution.
//!
//! Two outlets overlap when the flat-plane distance between their centers is
//! strictly less than the sum of their service radii. Tangency does not count.
//! The metric is degree-space Euclidean distance scaled to meters at the
//! equator, a deliberate small-area approximation (see
//! [`crate::core::geo::METERS_PER_DEGREE`]).

use crate::core::outlet::Outlet;
use crate::prelude::HashSet;

/// Returns whether the service circles of two outlets overlap.
pub fn circles_overlap(a: &Outlet, b: &Outlet) -> bool {
    a.position().flat_distance_meters(&b.position()) < a.radius + b.radius
}

/// Ids of every outlet in `all` whose service circle overlaps `target`'s.
///
/// Excludes `target` itself; callers building a display set that must include
/// the hovered marker add its id back. O(n) over the outlet set, invoked once
/// per hover-start.
pub fn overlapping_ids(target: &Outlet, all: &[Outlet]) -> HashSet<u64> {
    all.iter()
        .filter(|o| o.id != target.id && circles_overlap(target, o))
        .map(|o| o.id)
        .collect()
}
