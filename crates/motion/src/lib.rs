//! Trajectory synthesis and randomized pacing.
//!
//! Everything jittered in ghosthand flows through this crate: bounded integer
//! sampling, async pauses, bezier curve evaluation, and the generator that
//! turns a start/end pair into a believable pointer path. All sampling goes
//! through the thread-local entropy source, so independent actors can run
//! concurrently without sharing state.

pub mod bezier;
pub mod pace;
pub mod sample;
pub mod trajectory;

pub use bezier::{cubic_bezier, quad_bezier};
pub use pace::{sleep_ms, sleep_range};
pub use sample::{pick, rand_int, rand_int_signed, rand_sign};
pub use trajectory::generate;
