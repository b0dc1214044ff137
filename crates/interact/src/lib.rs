//! Humanized interaction orchestration.
//!
//! This crate is the public surface of the engine. It drives the browser
//! driver's input primitives (exposed through the port traits) with the
//! trajectories and pacing from `ghosthand-motion`, tracks the simulated
//! pointer position per session, and branches between desktop and
//! mobile/touch input models.
//!
//! One `UserActor` equals one simulated user. Operations take `&mut self`, so
//! the borrow checker enforces the at-most-one-in-flight-interaction
//! contract; independent actors share nothing and run fully concurrently.

pub mod actor;
pub mod model;
pub mod ports;
pub mod session;
pub mod targeting;

pub use actor::UserActor;
pub use model::{ClickOptions, KeyOptions, MoveOptions, TargetingOptions, TypeOptions};
pub use ports::{DomPort, KeyboardPort, PageHandle, PointerPort, SessionPort, TouchPort};
pub use session::SessionRegistry;
