//! Bounded sampling primitives.
//!
//! Foundation for every jitter in the engine. Stateless: each call pulls from
//! the thread-local rng, which keeps concurrent actors independent.

use ghosthand_core_types::GhostError;
use rand::Rng;

/// Uniform integer in `[min, max]` inclusive.
///
/// Precondition: `min <= max`. Inputs are never expected to violate this;
/// callers own their ranges.
pub fn rand_int(min: i64, max: i64) -> i64 {
    debug_assert!(min <= max, "rand_int range inverted: [{min}, {max}]");
    rand::thread_rng().gen_range(min..=max)
}

/// Uniform magnitude in `[min, max]`, independently multiplied by ±1.
pub fn rand_int_signed(min: i64, max: i64) -> i64 {
    rand_int(min, max) * rand_sign()
}

/// ±1 with equal probability.
pub fn rand_sign() -> i64 {
    if rand_int(0, 10) >= 5 {
        1
    } else {
        -1
    }
}

/// Uniform pick from a slice.
pub fn pick<T>(items: &[T]) -> Result<&T, GhostError> {
    if items.is_empty() {
        return Err(GhostError::invalid("cannot pick from an empty slice"));
    }
    let idx = rand_int(0, items.len() as i64 - 1) as usize;
    Ok(&items[idx])
}
