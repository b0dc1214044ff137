//! Shared primitives for the ghosthand interaction engine.
//!
//! Plain geometry types, uuid-backed handles for sessions and DOM elements,
//! and the error enum every crate in the workspace speaks.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Cross-crate error type.
///
/// Soft unavailability (dead session, vanished element) is *not* an error:
/// operations report it as `Ok(false)` / `Ok(None)`. `GhostError` carries the
/// failures that come back from the driver or from misuse of the API.
#[derive(Debug, Error, Clone)]
pub enum GhostError {
    /// Caller handed us something unusable (empty slice, inverted range).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The browser driver failed to execute an input primitive.
    #[error("driver I/O error: {0}")]
    DriverIo(String),
    /// Should not happen in normal operation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GhostError {
    pub fn driver(message: impl Into<String>) -> Self {
        Self::DriverIo(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Identifier of one simulated browser-user session in the registry.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a DOM element, resolved by the driver's dom port.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementHandle(pub String);

impl ElementHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in page coordinates.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Snapshot of an element's on-screen rectangle.
///
/// Stale after any scroll or drag; viewport targeting re-queries it every
/// round and never caches one across calls.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// Visible window dimensions reported by the driver.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowMetrics {
    pub inner_width: f64,
    pub inner_height: f64,
}

/// Read-only device description supplied by the owning session.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceDescriptor {
    pub window: WindowMetrics,
}

impl DeviceDescriptor {
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            window: WindowMetrics {
                inner_width,
                inner_height,
            },
        }
    }
}
