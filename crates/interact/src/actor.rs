//! The interaction orchestrator.
//!
//! One `UserActor` simulates one user: it owns the tracked pointer position,
//! holds a non-owning reference to its browser session through the registry,
//! and sequences trajectories, pacing, and input primitives into the public
//! operations.
//!
//! Failure semantics, everywhere: a dead/removed session makes every
//! operation return `Ok(false)` without touching the driver; a driver I/O
//! failure propagates as `Err`; a session that is alive but structurally
//! broken (no active page, no device descriptor, mobile without touch) is a
//! violated integration contract and panics.

use std::sync::Arc;

use ghosthand_core_types::{ElementHandle, GhostError, Point, SessionId};
use ghosthand_motion::{generate, rand_int, rand_int_signed, sleep_ms, sleep_range};
use tracing::{debug, instrument};

use crate::model::{ClickOptions, KeyOptions, MoveOptions, TargetingOptions, TypeOptions};
use crate::ports::{PageHandle, SessionPort};
use crate::session::SessionRegistry;
use crate::targeting;

/// Printable ASCII characters that need the shift modifier held.
const SHIFTED_CHARS: &str = "~!@#$%^&*()_+QWERTYUIOP{}|ASDFGHJKL:\"ZXCVBNM<>?";

/// CJK ideographs get a longer per-key delay (IME-like deliberation).
fn is_cjk(ch: char) -> bool {
    matches!(ch, '\u{4e00}'..='\u{9fa5}')
}

pub struct UserActor {
    registry: Arc<SessionRegistry>,
    session: SessionId,
    targeting: TargetingOptions,
    /// Last known pointer position. Randomized at birth; within viewport
    /// bounds after any completed move.
    pointer: Point,
}

impl UserActor {
    pub fn new(registry: Arc<SessionRegistry>, session: SessionId) -> Self {
        Self {
            registry,
            session,
            targeting: TargetingOptions::default(),
            pointer: Point::new(rand_int(0, 1280) as f64, rand_int(0, 700) as f64),
        }
    }

    /// Opt into a bounded viewport-targeting loop for this actor.
    pub fn with_targeting(mut self, targeting: TargetingOptions) -> Self {
        self.targeting = targeting;
        self
    }

    /// Tracked pointer position.
    pub fn position(&self) -> Point {
        self.pointer
    }

    fn live_session(&self) -> Option<Arc<dyn SessionPort>> {
        self.registry.get(&self.session)
    }

    async fn page_of(session: &Arc<dyn SessionPort>) -> PageHandle {
        session
            .active_page()
            .await
            .expect("session has no active page")
    }

    /// Move the pointer to `target` along a humanized trajectory.
    ///
    /// Mobile sessions show no pointer trail; the move degenerates to a pause
    /// that preserves the timing. Desktop moves aim first at a jittered
    /// near-target, replay the trajectory with a per-step delay, then finish
    /// with one precise corrective move.
    #[instrument(skip_all, fields(session = %self.session, target = %target))]
    pub async fn move_to(&mut self, target: Point, opt: MoveOptions) -> Result<bool, GhostError> {
        let Some(session) = self.live_session() else {
            return Ok(false);
        };
        if session.is_mobile() {
            sleep_range(300, 800).await;
            return Ok(true);
        }
        let page = Self::page_of(&session).await;

        let near_target = Point::new(
            target.x + rand_int_signed(5, 30) as f64,
            target.y + rand_int_signed(5, 20) as f64,
        );
        let point_count = opt
            .max_points
            .unwrap_or_else(|| rand_int(15, 30) as usize)
            .max(2);
        let path = generate(self.pointer, near_target, point_count, opt.cp_spread);
        let total_ms = opt
            .duration_ms
            .unwrap_or_else(|| rand_int(300, 800) as u64);
        let per_step_ms = total_ms / path.len() as u64;

        for point in &path {
            page.pointer
                .move_to(point.x, point.y, rand_int(1, 2) as u32)
                .await?;
            sleep_ms(per_step_ms).await;
        }
        // The last trajectory point is the jittered near-target; correct it.
        page.pointer
            .move_to(target.x, target.y, rand_int(5, 13) as u32)
            .await?;
        self.pointer = target;
        debug!(position = %self.pointer, "move completed");
        Ok(true)
    }

    /// Drift the pointer to a random point in the central region of the
    /// viewport (x within the middle half, y within the middle two thirds).
    #[instrument(skip_all, fields(session = %self.session))]
    pub async fn move_randomly(&mut self) -> Result<bool, GhostError> {
        let Some(session) = self.live_session() else {
            return Ok(false);
        };
        if session.is_mobile() {
            sleep_range(200, 500).await;
            return Ok(true);
        }
        let device = session.device().expect("session has no device descriptor");
        let width = device.window.inner_width;
        let height = device.window.inner_height;
        let target = Point::new(
            rand_int((width / 4.0) as i64, (width * 3.0 / 4.0) as i64) as f64,
            rand_int((height / 6.0) as i64, (height * 5.0 / 6.0) as i64) as f64,
        );
        if !self.move_to(target, MoveOptions::default()).await? {
            return Ok(false);
        }
        sleep_range(300, 800).await;
        Ok(true)
    }

    /// Click at the tracked position: touch tap on mobile, press/pause/release
    /// on desktop.
    #[instrument(skip_all, fields(session = %self.session))]
    pub async fn click(&mut self, opt: ClickOptions) -> Result<bool, GhostError> {
        let Some(session) = self.live_session() else {
            return Ok(false);
        };
        let page = Self::page_of(&session).await;
        if session.is_mobile() {
            let touch = page
                .touch
                .as_ref()
                .expect("mobile session requires a touch port");
            touch.tap(self.pointer.x, self.pointer.y).await?;
        } else {
            page.pointer.down().await?;
            sleep_range(30, 80).await;
            page.pointer.up().await?;
        }
        if opt.pause_after_mouse_up {
            sleep_range(150, 600).await;
        }
        Ok(true)
    }

    /// Move to `target` and click it. Desktop adds a small horizontal
    /// settling move before the pause, like a hand coming to rest.
    #[instrument(skip_all, fields(session = %self.session, target = %target))]
    pub async fn move_and_click(
        &mut self,
        target: Point,
        opt: ClickOptions,
    ) -> Result<bool, GhostError> {
        let Some(session) = self.live_session() else {
            return Ok(false);
        };
        if !session.is_mobile() {
            let page = Self::page_of(&session).await;
            if !self.move_to(target, MoveOptions::default()).await? {
                return Ok(false);
            }
            page.pointer
                .move_to(
                    target.x + rand_int(-10, 10) as f64,
                    target.y,
                    rand_int(8, 20) as u32,
                )
                .await?;
        }
        self.pointer = target;
        sleep_range(300, 800).await;
        self.click(opt).await
    }

    /// Scroll/drag `element` into view, then move onto it.
    ///
    /// The landing point is the box center plus a small random offset, so the
    /// same element is never hit dead-center twice. Returns `Ok(false)` when
    /// the element cannot be acquired.
    #[instrument(skip_all, fields(session = %self.session, element = %element))]
    pub async fn move_to_element(&mut self, element: &ElementHandle) -> Result<bool, GhostError> {
        let Some(session) = self.live_session() else {
            return Ok(false);
        };
        let device = session.device().expect("session has no device descriptor");
        let page = Self::page_of(&session).await;

        let bbox = if session.is_mobile() {
            targeting::acquire_with_touch(&page, &device, element, &self.targeting).await?
        } else {
            targeting::acquire_with_pointer(&page, &device, element, &self.targeting).await?
        };
        let Some(bbox) = bbox else {
            debug!(element = %element, "element not acquirable");
            return Ok(false);
        };

        let center = bbox.center();
        let target = Point::new(
            center.x + rand_int_signed(0, 5) as f64,
            center.y + rand_int_signed(0, 5) as f64,
        );
        if !self.move_to(target, MoveOptions::default()).await? {
            return Ok(false);
        }
        sleep_range(300, 800).await;
        Ok(true)
    }

    /// Acquire `element`, move onto it, click it. Short-circuits to failure
    /// if targeting fails.
    pub async fn click_element(
        &mut self,
        element: &ElementHandle,
        opt: ClickOptions,
    ) -> Result<bool, GhostError> {
        if !self.move_to_element(element).await? {
            return Ok(false);
        }
        self.click(opt).await
    }

    /// Press a single named key.
    #[instrument(skip_all, fields(session = %self.session, key))]
    pub async fn press_key(&mut self, key: &str, opt: KeyOptions) -> Result<bool, GhostError> {
        let Some(session) = self.live_session() else {
            return Ok(false);
        };
        let page = Self::page_of(&session).await;
        page.keyboard.press(key).await?;
        if opt.pause_after_key_up {
            sleep_range(300, 1000).await;
        }
        Ok(true)
    }

    pub async fn press_enter(&mut self, opt: KeyOptions) -> Result<bool, GhostError> {
        self.press_key("Enter", opt).await
    }

    pub async fn press_escape(&mut self, opt: KeyOptions) -> Result<bool, GhostError> {
        self.press_key("Escape", opt).await
    }

    /// Type `text` character by character with humanized cadence.
    ///
    /// Shifted ASCII holds ShiftLeft around the key event; CJK ideographs get
    /// a much longer per-key delay than latin characters.
    #[instrument(skip_all, fields(session = %self.session, chars = text.chars().count()))]
    pub async fn type_text(&mut self, text: &str, opt: TypeOptions) -> Result<bool, GhostError> {
        let Some(session) = self.live_session() else {
            return Ok(false);
        };
        let page = Self::page_of(&session).await;

        for ch in text.chars() {
            let needs_shift = SHIFTED_CHARS.contains(ch);
            if needs_shift {
                page.keyboard.down("ShiftLeft").await?;
                sleep_range(500, 1000).await;
            }

            let delay_ms = if is_cjk(ch) {
                rand_int(200, 800)
            } else {
                rand_int(30, 100)
            } as u64;
            let mut buf = [0u8; 4];
            page.keyboard
                .type_text(ch.encode_utf8(&mut buf), delay_ms)
                .await?;

            if needs_shift {
                sleep_range(150, 450).await;
                page.keyboard.up("ShiftLeft").await?;
            }
            sleep_range(30, 100).await;
        }

        if opt.pause_after_last_key_up {
            sleep_range(300, 1000).await;
        }
        Ok(true)
    }
}
