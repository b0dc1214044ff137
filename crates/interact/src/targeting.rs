//! Viewport targeting: scroll or drag until an element is reachable.
//!
//! Both variants loop on a fresh bounding-box query (the box goes stale after
//! every adjustment), correct only the vertical axis (horizontal adjustment
//! is deliberately left unimplemented, matching observed driver behavior),
//! and exit only when the box sits inside the safe margin or the element is
//! gone. Without `TargetingOptions::max_rounds` the loop is unbounded: a
//! pathological layout that keeps displacing the element can spin forever,
//! which is a documented liveness risk, not a bug.

use ghosthand_core_types::{BoundingBox, DeviceDescriptor, ElementHandle, GhostError, Point};
use ghosthand_motion::{rand_int, sleep_range};
use tracing::debug;

use crate::model::TargetingOptions;
use crate::ports::PageHandle;

/// Safe margin kept between the box and the viewport edge, in px.
const EDGE_MARGIN: f64 = 30.0;

/// Desktop variant: wheel-scroll the page until `element` is fully visible.
///
/// Returns the final fresh bounding box, or `None` if the element
/// disappeared (or the round budget ran out).
pub async fn acquire_with_pointer(
    page: &PageHandle,
    device: &DeviceDescriptor,
    element: &ElementHandle,
    opt: &TargetingOptions,
) -> Result<Option<BoundingBox>, GhostError> {
    let inner_height = device.window.inner_height;
    let mut rounds = 0u32;
    loop {
        let Some(bbox) = page.dom.bounding_box(element).await? else {
            return Ok(None);
        };

        let delta_y = if bbox.y <= 0.0 {
            // Top edge above the viewport: scroll up, at most far enough to
            // leave the margin above the box.
            Some(-(EDGE_MARGIN - bbox.y).min(rand_int(150, 300) as f64))
        } else if bbox.bottom() >= inner_height {
            Some((bbox.bottom() + EDGE_MARGIN - inner_height).min(rand_int(150, 300) as f64))
        } else {
            None
        };

        let Some(delta_y) = delta_y else {
            return Ok(Some(bbox));
        };

        debug!(element = %element, delta_y, "wheel adjust");
        page.pointer.wheel(delta_y).await?;
        sleep_range(100, 400).await;

        rounds += 1;
        if exhausted(rounds, opt) {
            return Ok(None);
        }
    }
}

/// Mobile variant: correct visibility with simulated finger drags.
///
/// Requires the page's touch port; a mobile session without one is a broken
/// integration and aborts.
pub async fn acquire_with_touch(
    page: &PageHandle,
    device: &DeviceDescriptor,
    element: &ElementHandle,
    opt: &TargetingOptions,
) -> Result<Option<BoundingBox>, GhostError> {
    let touch = page
        .touch
        .as_ref()
        .expect("mobile session requires a touch port");
    let inner_width = device.window.inner_width;
    let inner_height = device.window.inner_height;
    let mut rounds = 0u32;
    loop {
        let Some(bbox) = page.dom.bounding_box(element).await? else {
            return Ok(None);
        };

        let delta_y = if bbox.y <= 0.0 {
            Some(-(-bbox.y + EDGE_MARGIN).min(rand_int(100, 300) as f64))
        } else if bbox.bottom() >= inner_height {
            Some((bbox.bottom() - inner_height + EDGE_MARGIN).min(rand_int(100, 300) as f64))
        } else {
            None
        };

        let Some(delta_y) = delta_y else {
            return Ok(Some(bbox));
        };

        // Horizontal endpoints sit in the middle third of the screen; the
        // finger drags opposite to the wheel delta (scroll up = drag down),
        // sampled so the whole gesture stays on screen. One drag covers at
        // most the screen height; a taller correction takes extra rounds.
        let start_x = inner_width / 2.0 + rand_int(0, (inner_width / 6.0) as i64) as f64;
        let end_x = inner_width / 2.0 + rand_int(0, (inner_width / 6.0) as i64) as f64;
        let magnitude = delta_y.abs().min(inner_height);
        let (start_y, end_y) = if delta_y < 0.0 {
            let start = rand_int(0, (inner_height - magnitude) as i64) as f64;
            (start, start + magnitude)
        } else {
            let start = rand_int(magnitude as i64, inner_height as i64) as f64;
            (start, start - magnitude)
        };

        debug!(element = %element, delta_y, "drag adjust");
        touch
            .drag(Point::new(start_x, start_y), Point::new(end_x, end_y))
            .await?;
        sleep_range(100, 300).await;

        rounds += 1;
        if exhausted(rounds, opt) {
            return Ok(None);
        }
    }
}

fn exhausted(rounds: u32, opt: &TargetingOptions) -> bool {
    opt.max_rounds.is_some_and(|max| rounds >= max)
}
