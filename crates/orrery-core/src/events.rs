use bytemuck::{Pod, Zeroable};

/// A UI event communicated from Rust to the DOM layer each frame.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
/// Read zero-copy from wasm memory as a flat f32 array.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct UiEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl UiEvent {
    pub const FLOATS: usize = 4;
}

/// Show the hover tooltip. a = body index, b/c = cursor client px.
/// The tooltip text itself is read from the label string buffer.
pub const EVENT_TOOLTIP_SHOW: f32 = 1.0;
/// Hide the hover tooltip.
pub const EVENT_TOOLTIP_HIDE: f32 = 2.0;
/// Show the speed panel. a = body index, b = the body's current speed.
pub const EVENT_PANEL_SHOW: f32 = 3.0;
/// Hide the speed panel.
pub const EVENT_PANEL_HIDE: f32 = 4.0;
/// Start audio playback (fired once, on autoplay unlock).
pub const EVENT_AUDIO_PLAY: f32 = 5.0;
/// Mirror the mute flag onto the audio element. a = 1 muted, 0 unmuted.
pub const EVENT_AUDIO_MUTE: f32 = 6.0;
/// Mirror the pause flag onto the pause button label. a = 1 paused.
pub const EVENT_PAUSE_STATE: f32 = 7.0;
