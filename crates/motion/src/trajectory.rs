//! Pointer trajectory generation.
//!
//! A trajectory is a finite, ordered point sequence between two coordinates,
//! realized eagerly and consumed left-to-right exactly once by the actor. The
//! path bends along a cubic bezier whose control points are jittered around
//! the midpoint, and the parametrization follows a human speed profile:
//! accelerate over the first tenth of points, cruise, decelerate over the
//! last tenth.

use ghosthand_core_types::Point;
use tracing::trace;

use crate::bezier::cubic_bezier;
use crate::sample::{rand_int, rand_int_signed};

/// Step growth/shrink per acceleration/deceleration tick.
const RAMP_MIN: i64 = 60;
const RAMP_MAX: i64 = 100;
/// Slowest step the deceleration phase is allowed to reach.
const STEP_FLOOR: f64 = 20.0;
/// Control-point offset magnitude around the path midpoint.
const SPREAD_MIN: i64 = 30;
const SPREAD_MAX: i64 = 100;

/// Generate a pointer path from `start` to `end`.
///
/// Returns exactly `point_count` points; the first equals `start` and the
/// last equals `end` (within float tolerance). `cp_spread` scales how far the
/// bezier control points wander from the midpoint; 1.0 is the normal bend.
///
/// Precondition: `point_count >= 2`.
pub fn generate(start: Point, end: Point, point_count: usize, cp_spread: f64) -> Vec<Point> {
    assert!(point_count >= 2, "a trajectory needs at least two points");

    let progress = progress_curve(point_count);
    let total = *progress.last().expect("progress curve is never empty");

    let mid = start.midpoint(end);
    let c1 = Point {
        x: mid.x + rand_int_signed(SPREAD_MIN, SPREAD_MAX) as f64 * cp_spread,
        y: mid.y + rand_int_signed(SPREAD_MIN, SPREAD_MAX) as f64 * cp_spread,
    };
    let c2 = Point {
        x: mid.x + rand_int_signed(SPREAD_MIN, SPREAD_MAX) as f64 * cp_spread,
        y: mid.y + rand_int_signed(SPREAD_MIN, SPREAD_MAX) as f64 * cp_spread,
    };
    trace!(%start, %end, point_count, "generating trajectory");

    progress
        .iter()
        .map(|p| cubic_bezier(p / total, start, c1, c2, end))
        .collect()
}

/// Monotone progress sequence with an ease-in / cruise / ease-out profile.
///
/// Values are raw accumulations; `generate` normalizes by the final value so
/// the last sample lands on `t = 1` exactly.
fn progress_curve(point_count: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(point_count);
    let mut acc = 0.0;
    let mut step = 1.0;
    for n in 0..point_count {
        values.push(acc);
        if (n as f64) < point_count as f64 / 10.0 {
            step += rand_int(RAMP_MIN, RAMP_MAX) as f64;
        } else if (n as f64) >= point_count as f64 * 9.0 / 10.0 {
            step = (step - rand_int(RAMP_MIN, RAMP_MAX) as f64).max(STEP_FLOOR);
        }
        acc += step;
    }
    values
}
