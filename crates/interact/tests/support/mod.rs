#![allow(dead_code)]

//! Recording mock ports for exercising the actor against a scripted driver.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ghosthand_core_types::{BoundingBox, DeviceDescriptor, ElementHandle, GhostError, Point};
use ghosthand_interact::{
    DomPort, KeyboardPort, PageHandle, PointerPort, SessionPort, SessionRegistry, TouchPort,
    UserActor,
};
use ghosthand_core_types::SessionId;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Move { x: f64, y: f64, steps: u32 },
    Down,
    Up,
    Wheel { delta_y: f64 },
    Tap { x: f64, y: f64 },
    Drag { from: Point, to: Point },
    KeyDown(String),
    KeyUp(String),
    KeyPress(String),
    Type { text: String, delay_ms: u64 },
}

impl Call {
    pub fn is_move(&self) -> bool {
        matches!(self, Call::Move { .. })
    }

    pub fn is_wheel(&self) -> bool {
        matches!(self, Call::Wheel { .. })
    }
}

/// Shared log of every primitive the actor invoked, in order.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    pub fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn moves(&self) -> Vec<(f64, f64)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Move { x, y, .. } => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    pub fn wheels(&self) -> Vec<f64> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Wheel { delta_y } => Some(delta_y),
                _ => None,
            })
            .collect()
    }

    pub fn drags(&self) -> Vec<(Point, Point)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Drag { from, to } => Some((from, to)),
                _ => None,
            })
            .collect()
    }
}

pub struct MockPointer(pub Arc<Recorder>);

#[async_trait]
impl PointerPort for MockPointer {
    async fn move_to(&self, x: f64, y: f64, steps: u32) -> Result<(), GhostError> {
        self.0.push(Call::Move { x, y, steps });
        Ok(())
    }

    async fn down(&self) -> Result<(), GhostError> {
        self.0.push(Call::Down);
        Ok(())
    }

    async fn up(&self) -> Result<(), GhostError> {
        self.0.push(Call::Up);
        Ok(())
    }

    async fn wheel(&self, delta_y: f64) -> Result<(), GhostError> {
        self.0.push(Call::Wheel { delta_y });
        Ok(())
    }
}

pub struct MockTouch(pub Arc<Recorder>);

#[async_trait]
impl TouchPort for MockTouch {
    async fn tap(&self, x: f64, y: f64) -> Result<(), GhostError> {
        self.0.push(Call::Tap { x, y });
        Ok(())
    }

    async fn drag(&self, from: Point, to: Point) -> Result<(), GhostError> {
        self.0.push(Call::Drag { from, to });
        Ok(())
    }
}

pub struct MockKeyboard(pub Arc<Recorder>);

#[async_trait]
impl KeyboardPort for MockKeyboard {
    async fn down(&self, key: &str) -> Result<(), GhostError> {
        self.0.push(Call::KeyDown(key.to_string()));
        Ok(())
    }

    async fn up(&self, key: &str) -> Result<(), GhostError> {
        self.0.push(Call::KeyUp(key.to_string()));
        Ok(())
    }

    async fn press(&self, key: &str) -> Result<(), GhostError> {
        self.0.push(Call::KeyPress(key.to_string()));
        Ok(())
    }

    async fn type_text(&self, text: &str, delay_ms: u64) -> Result<(), GhostError> {
        self.0.push(Call::Type {
            text: text.to_string(),
            delay_ms,
        });
        Ok(())
    }
}

/// Dom port that replays a scripted sequence of bounding-box answers; the
/// final entry repeats once the script runs out.
pub struct ScriptedDom {
    script: Mutex<(Vec<Option<BoundingBox>>, usize)>,
}

impl ScriptedDom {
    pub fn new(script: Vec<Option<BoundingBox>>) -> Self {
        Self {
            script: Mutex::new((script, 0)),
        }
    }
}

#[async_trait]
impl DomPort for ScriptedDom {
    async fn bounding_box(
        &self,
        _element: &ElementHandle,
    ) -> Result<Option<BoundingBox>, GhostError> {
        let mut guard = self.script.lock().unwrap();
        let (script, idx) = &mut *guard;
        if script.is_empty() {
            return Ok(None);
        }
        let answer = script[(*idx).min(script.len() - 1)];
        *idx += 1;
        Ok(answer)
    }
}

pub struct MockSession {
    pub mobile: bool,
    pub device: DeviceDescriptor,
    pub page: PageHandle,
}

#[async_trait]
impl SessionPort for MockSession {
    fn is_mobile(&self) -> bool {
        self.mobile
    }

    fn device(&self) -> Option<DeviceDescriptor> {
        Some(self.device)
    }

    async fn active_page(&self) -> Option<PageHandle> {
        Some(self.page.clone())
    }
}

/// Everything a test needs: the actor, the registry (to kill the session),
/// and the recorder (to inspect primitive calls).
pub struct Harness {
    pub recorder: Arc<Recorder>,
    pub registry: Arc<SessionRegistry>,
    pub session_id: SessionId,
    pub actor: UserActor,
}

pub const VIEWPORT: (f64, f64) = (1280.0, 800.0);

pub fn desktop_page(recorder: &Arc<Recorder>, boxes: Vec<Option<BoundingBox>>) -> PageHandle {
    PageHandle::new(
        Arc::new(MockPointer(recorder.clone())),
        Arc::new(MockKeyboard(recorder.clone())),
        Arc::new(ScriptedDom::new(boxes)),
    )
}

pub fn mobile_page(recorder: &Arc<Recorder>, boxes: Vec<Option<BoundingBox>>) -> PageHandle {
    desktop_page(recorder, boxes).with_touch(Arc::new(MockTouch(recorder.clone())))
}

pub fn harness(mobile: bool, boxes: Vec<Option<BoundingBox>>) -> Harness {
    let recorder = Arc::new(Recorder::default());
    let page = if mobile {
        mobile_page(&recorder, boxes)
    } else {
        desktop_page(&recorder, boxes)
    };
    let session = MockSession {
        mobile,
        device: DeviceDescriptor::new(VIEWPORT.0, VIEWPORT.1),
        page,
    };
    let registry = Arc::new(SessionRegistry::new());
    let session_id = registry.register(Arc::new(session));
    let actor = UserActor::new(registry.clone(), session_id.clone());
    Harness {
        recorder,
        registry,
        session_id,
        actor,
    }
}

pub fn visible_box() -> BoundingBox {
    BoundingBox::new(100.0, 200.0, 120.0, 40.0)
}
