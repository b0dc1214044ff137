//! Port traits over the browser-driving collaborator.
//!
//! The engine never implements input primitives; it orchestrates them. A
//! driver adapter implements these traits and hands the engine a
//! `PageHandle` per active page. All methods are async and fallible: a
//! `GhostError::DriverIo` from any of them aborts the current operation.

use std::sync::Arc;

use async_trait::async_trait;
use ghosthand_core_types::{BoundingBox, DeviceDescriptor, ElementHandle, GhostError, Point};

/// Pointer (mouse) primitives of one page.
#[async_trait]
pub trait PointerPort: Send + Sync {
    /// Move the pointer to `(x, y)`, letting the driver interpolate `steps`
    /// intermediate events.
    async fn move_to(&self, x: f64, y: f64, steps: u32) -> Result<(), GhostError>;
    async fn down(&self) -> Result<(), GhostError>;
    async fn up(&self) -> Result<(), GhostError>;
    /// Vertical wheel scroll; negative `delta_y` scrolls up.
    async fn wheel(&self, delta_y: f64) -> Result<(), GhostError>;
}

/// Touch primitives of one page. Only present on mobile sessions.
#[async_trait]
pub trait TouchPort: Send + Sync {
    async fn tap(&self, x: f64, y: f64) -> Result<(), GhostError>;
    /// One continuous finger drag from `from` to `to`.
    async fn drag(&self, from: Point, to: Point) -> Result<(), GhostError>;
}

/// Keyboard primitives of one page.
#[async_trait]
pub trait KeyboardPort: Send + Sync {
    async fn down(&self, key: &str) -> Result<(), GhostError>;
    async fn up(&self, key: &str) -> Result<(), GhostError>;
    async fn press(&self, key: &str) -> Result<(), GhostError>;
    /// Type `text` with the driver's own per-key delay of `delay_ms`.
    async fn type_text(&self, text: &str, delay_ms: u64) -> Result<(), GhostError>;
}

/// Element geometry lookup.
#[async_trait]
pub trait DomPort: Send + Sync {
    /// Current on-screen rectangle of `element`, or `None` if it is gone.
    async fn bounding_box(
        &self,
        element: &ElementHandle,
    ) -> Result<Option<BoundingBox>, GhostError>;
}

/// Bundle of the per-page ports the actor drives.
///
/// `touch` is optional: a desktop page has none, and a mobile session whose
/// page lacks one violates the integration contract (the actor aborts).
#[derive(Clone)]
pub struct PageHandle {
    pub pointer: Arc<dyn PointerPort>,
    pub keyboard: Arc<dyn KeyboardPort>,
    pub dom: Arc<dyn DomPort>,
    pub touch: Option<Arc<dyn TouchPort>>,
}

impl PageHandle {
    pub fn new(
        pointer: Arc<dyn PointerPort>,
        keyboard: Arc<dyn KeyboardPort>,
        dom: Arc<dyn DomPort>,
    ) -> Self {
        Self {
            pointer,
            keyboard,
            dom,
            touch: None,
        }
    }

    pub fn with_touch(mut self, touch: Arc<dyn TouchPort>) -> Self {
        self.touch = Some(touch);
        self
    }
}

/// The owning browser session, as seen by the actor.
///
/// Liveness is handled one level up: the actor looks the session up in the
/// `SessionRegistry` on every operation and degrades to a no-op failure when
/// it is gone. A registered session answering these methods is assumed
/// structurally sound; a `None` from `device` or `active_page` here is an
/// integration bug, not transient unavailability.
#[async_trait]
pub trait SessionPort: Send + Sync {
    fn is_mobile(&self) -> bool;
    fn device(&self) -> Option<DeviceDescriptor>;
    async fn active_page(&self) -> Option<PageHandle>;
}
