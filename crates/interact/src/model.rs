//! Per-operation option structs.
//!
//! Each operation takes one of these by value; every field is defaulted and
//! scoped to that single call, nothing is persisted on the actor. Defaults
//! reproduce the engine's stock pacing.

/// Tuning for a pointer move.
#[derive(Clone, Copy, Debug)]
pub struct MoveOptions {
    /// Trajectory length. `None` samples 15..=30 per move.
    pub max_points: Option<usize>,
    /// Total time budget spread across the trajectory steps. `None` samples
    /// 300..=800 ms.
    pub duration_ms: Option<u64>,
    /// Scale on how far the bezier control points wander from the midpoint;
    /// 1.0 is the normal bend.
    pub cp_spread: f64,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            max_points: None,
            duration_ms: None,
            cp_spread: 1.0,
        }
    }
}

/// Tuning for a click.
#[derive(Clone, Copy, Debug)]
pub struct ClickOptions {
    /// Pause 150..=600 ms after releasing. Default true.
    pub pause_after_mouse_up: bool,
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self {
            pause_after_mouse_up: true,
        }
    }
}

/// Tuning for a single key press.
#[derive(Clone, Copy, Debug)]
pub struct KeyOptions {
    /// Pause 300..=1000 ms after the key-up. Default true.
    pub pause_after_key_up: bool,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            pause_after_key_up: true,
        }
    }
}

/// Tuning for typing a string.
#[derive(Clone, Copy, Debug)]
pub struct TypeOptions {
    /// Pause 300..=1000 ms after the last key-up. Default true.
    pub pause_after_last_key_up: bool,
}

impl Default for TypeOptions {
    fn default() -> Self {
        Self {
            pause_after_last_key_up: true,
        }
    }
}

/// Tuning for viewport targeting.
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetingOptions {
    /// Upper bound on scroll/drag rounds. `None` keeps the loop bounded only
    /// by its semantic exit (box visible or element gone), matching the
    /// engine's stock behavior; set it for production hardening against
    /// layouts that keep displacing the element. Exhaustion is reported the
    /// same way as a vanished element.
    pub max_rounds: Option<u32>,
}
