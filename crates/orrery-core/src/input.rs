/// Input events the simulation understands.
/// Pointer coordinates are client pixels relative to the render surface.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A press began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A press ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scroll; positive delta zooms out.
    Wheel { delta: f32 },
    /// A control-surface event from the DOM (buttons, slider, resize).
    /// `kind` identifies the control; `a`, `b` carry its payload.
    Custom { kind: u32, a: f32, b: f32 },
}

// Custom event kinds sent by the DOM control surface.
pub const CUSTOM_TOGGLE_PAUSE: u32 = 1;
pub const CUSTOM_RESET_CAMERA: u32 = 2;
pub const CUSTOM_TOGGLE_MUTE: u32 = 3;
/// a = new speed for the selected body (from the slider).
pub const CUSTOM_SET_SPEED: u32 = 4;
/// a = width px, b = height px.
pub const CUSTOM_RESIZE: u32 = 5;
/// A click anywhere on the page, outside the render surface. Only feeds
/// the audio-unlock machine.
pub const CUSTOM_PAGE_CLICK: u32 = 6;

/// A queue of input events.
/// JS pushes events as they arrive; the simulation reads them once per
/// frame and the runner drains the queue afterwards.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta: -120.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn custom_event_round_trip() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom {
            kind: CUSTOM_SET_SPEED,
            a: 0.05,
            b: 0.0,
        });
        match q.drain()[0] {
            InputEvent::Custom { kind, a, .. } => {
                assert_eq!(kind, CUSTOM_SET_SPEED);
                assert_eq!(a, 0.05);
            }
            _ => panic!("expected Custom event"),
        }
    }
}
