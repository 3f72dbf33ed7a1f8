//! Explicit per-outlet icon size animation.
//!
//! Icon growth and shrink is a suspend-free re-scheduling loop: each tick
//! advances every live job by exactly one unit toward its target and the
//! surface schedules the next tick while any job is live. A new hover event
//! supersedes an in-flight job for the same outlet (the generation tag makes
//! stale jobs inert), continuing from the current size rather than restarting
//! from the default. Animations for different outlets run independently.

use crate::core::geo::LatLng;
use crate::prelude::{Duration, HashMap, Instant};

/// Direction of an icon size animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationDirection {
    Grow,
    Shrink,
}

/// A single in-flight size animation for one outlet.
///
/// A job whose generation no longer matches the animator's counter for that
/// outlet is stale and is dropped without touching the size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationJob {
    pub outlet_id: u64,
    pub direction: AnimationDirection,
    pub generation: u64,
}

/// Owns every outlet's current icon size and the set of in-flight jobs.
#[derive(Debug)]
pub struct IconAnimator {
    min_size: f64,
    max_size: f64,
    sizes: HashMap<u64, f64>,
    jobs: HashMap<u64, AnimationJob>,
    generations: HashMap<u64, u64>,
}

impl IconAnimator {
    pub fn new(min_size: f64, max_size: f64) -> Self {
        Self {
            min_size,
            max_size,
            sizes: HashMap::default(),
            jobs: HashMap::default(),
            generations: HashMap::default(),
        }
    }

    /// Starts (or redirects) the animation for one outlet.
    ///
    /// Bumps the outlet's generation so any earlier job becomes stale; the new
    /// job continues from whatever size the outlet currently has.
    pub fn start(&mut self, outlet_id: u64, direction: AnimationDirection) {
        let generation = self.generations.entry(outlet_id).or_insert(0);
        *generation += 1;
        self.sizes.entry(outlet_id).or_insert(self.min_size);
        self.jobs.insert(
            outlet_id,
            AnimationJob {
                outlet_id,
                direction,
                generation: *generation,
            },
        );
        log::debug!("animation start: outlet {outlet_id} {direction:?} gen {generation}");
    }

    /// Starts a shrink for every outlet the animator currently tracks.
    pub fn shrink_all(&mut self) {
        let ids: Vec<u64> = self.sizes.keys().copied().collect();
        for id in ids {
            self.start(id, AnimationDirection::Shrink);
        }
    }

    /// Advances every live job by one unit toward its target, stopping exactly
    /// at the target. Returns true while any job remains live, so the caller
    /// knows to schedule another tick.
    pub fn tick(&mut self) -> bool {
        let mut finished = Vec::new();
        for (&id, job) in &self.jobs {
            if self.generations.get(&id) != Some(&job.generation) {
                finished.push(id);
                continue;
            }
            let target = match job.direction {
                AnimationDirection::Grow => self.max_size,
                AnimationDirection::Shrink => self.min_size,
            };
            let size = self.sizes.entry(id).or_insert(self.min_size);
            if *size < target {
                *size = (*size + 1.0).min(target);
            } else if *size > target {
                *size = (*size - 1.0).max(target);
            }
            if *size == target {
                finished.push(id);
            }
        }
        for id in finished {
            self.jobs.remove(&id);
        }
        !self.jobs.is_empty()
    }

    /// Current animated size for an outlet, resting size if untracked
    pub fn size_of(&self, outlet_id: u64) -> f64 {
        self.sizes.get(&outlet_id).copied().unwrap_or(self.min_size)
    }

    pub fn is_animating(&self) -> bool {
        !self.jobs.is_empty()
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn max_size(&self) -> f64 {
        self.max_size
    }
}

/// Easing applied to a normalized time value (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingType {
    Linear,
    EaseOut,
    Smooth,
}

impl EasingType {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingType::Smooth => {
                // Smooth step (3t^2 - 2t^3)
                t * t * (3.0 - 2.0 * t)
            }
        }
    }
}

/// Bounded-duration smooth pan of the viewport center, used when a popup-open
/// command recenters the view at the current zoom.
#[derive(Debug, Clone)]
pub struct FlyToAnimation {
    from: LatLng,
    to: LatLng,
    start_time: Instant,
    duration: Duration,
    easing: EasingType,
}

impl FlyToAnimation {
    pub fn new(from: LatLng, to: LatLng, duration: Duration) -> Self {
        Self {
            from,
            to,
            start_time: Instant::now(),
            duration,
            easing: EasingType::Smooth,
        }
    }

    /// Current interpolated center and whether the transition has finished
    pub fn update(&self) -> (LatLng, bool) {
        let elapsed = self.start_time.elapsed();
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (self.from.lerp(&self.to, self.easing.apply(progress)), false)
    }

    pub fn target(&self) -> LatLng {
        self.to
    }
}
