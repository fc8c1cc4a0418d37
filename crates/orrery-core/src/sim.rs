use crate::camera::OrbitCamera;
use crate::events::{
    UiEvent, EVENT_AUDIO_MUTE, EVENT_AUDIO_PLAY, EVENT_PANEL_HIDE, EVENT_PANEL_SHOW,
    EVENT_PAUSE_STATE, EVENT_TOOLTIP_HIDE, EVENT_TOOLTIP_SHOW,
};
use crate::input::{
    InputEvent, InputQueue, CUSTOM_PAGE_CLICK, CUSTOM_RESET_CAMERA, CUSTOM_RESIZE,
    CUSTOM_SET_SPEED, CUSTOM_TOGGLE_MUTE, CUSTOM_TOGGLE_PAUSE,
};
use crate::labels::LabelDataset;
use crate::picking;
use crate::playback::{AudioUnlock, Playback};
use crate::registry::BodyRegistry;
use crate::render::BloomSettings;
use crate::rng::Rng;
use crate::scene::{AmbientLight, Skybox, Starfield};

/// Pixel distance a press may travel before it becomes a camera drag
/// instead of a click-select.
const DRAG_THRESHOLD: f32 = 5.0;

/// Startup configuration for the simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Render surface size in client pixels.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Seed for star scattering and initial orbit angles.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            seed: 42,
        }
    }
}

/// The whole simulation state, owned by one struct and stepped by one
/// `update` call per displayed frame. Nothing here touches the browser;
/// the web bridge feeds input in and reads flat buffers out.
pub struct Orrery {
    viewport: (f32, f32),
    registry: BodyRegistry,
    camera: OrbitCamera,
    starfield: Starfield,
    skybox: Skybox,
    ambient: AmbientLight,
    bloom: BloomSettings,
    labels: LabelDataset,
    playback: Playback,
    audio_unlock: AudioUnlock,

    /// Transient UI selection, recomputed from pointer events.
    hovered: Option<usize>,
    selected: Option<usize>,
    /// Composed tooltip text for the hovered body; read by the host.
    tooltip_text: String,
    /// UI events for the current frame.
    events: Vec<UiEvent>,

    // Drag state
    dragging: bool,
    drag_moved: bool,
    drag_start: (f32, f32),
    last_pointer: (f32, f32),
}

impl Orrery {
    pub fn new(config: SimConfig) -> Self {
        let mut rng = Rng::new(config.seed);
        let starfield = Starfield::generate(&mut rng);
        let registry = BodyRegistry::new(&mut rng);
        let camera = OrbitCamera::new(config.viewport_width / config.viewport_height);

        Self {
            viewport: (config.viewport_width, config.viewport_height),
            registry,
            camera,
            starfield,
            skybox: Skybox::default(),
            ambient: AmbientLight::default(),
            bloom: BloomSettings::default(),
            labels: LabelDataset::new(),
            playback: Playback::new(),
            audio_unlock: AudioUnlock::new(),
            hovered: None,
            selected: None,
            tooltip_text: String::new(),
            events: Vec::with_capacity(8),
            dragging: false,
            drag_moved: false,
            drag_start: (0.0, 0.0),
            last_pointer: (0.0, 0.0),
        }
    }

    /// Swap in the fetched label dataset. The map is replaced whole, so a
    /// reader never sees it half-populated.
    pub fn load_labels(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let parsed = LabelDataset::from_json(json)?;
        self.labels.replace(parsed);
        log::info!("label dataset loaded ({} entries)", self.labels.len());
        Ok(())
    }

    /// One frame: consume input, run interaction, advance orbits unless
    /// paused, and ease the camera. Camera damping runs even while paused.
    pub fn update(&mut self, input: &InputQueue) {
        self.events.clear();

        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.drag_moved = false;
                    self.drag_start = (x, y);
                    self.last_pointer = (x, y);
                    self.unlock_audio();
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let (sx, sy) = self.drag_start;
                        if ((x - sx).powi(2) + (y - sy).powi(2)).sqrt() > DRAG_THRESHOLD {
                            self.drag_moved = true;
                        }
                        if self.drag_moved {
                            let (lx, ly) = self.last_pointer;
                            self.camera.rotate(x - lx, y - ly);
                        }
                    }
                    self.last_pointer = (x, y);
                    self.hover_at(x, y);
                }
                InputEvent::PointerUp { x, y } => {
                    if self.dragging && !self.drag_moved {
                        self.click_at(x, y);
                    }
                    self.dragging = false;
                    self.drag_moved = false;
                }
                InputEvent::Wheel { delta } => {
                    self.camera.zoom(delta);
                }
                InputEvent::Custom { kind, a, b } => self.handle_custom(kind, a, b),
            }
        }

        if !self.playback.paused {
            self.registry.advance();
        }
        self.camera.update();
    }

    fn handle_custom(&mut self, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_TOGGLE_PAUSE => {
                let paused = self.playback.toggle_pause();
                self.emit(EVENT_PAUSE_STATE, paused as u32 as f32, 0.0, 0.0);
            }
            CUSTOM_RESET_CAMERA => {
                self.camera.reset();
            }
            CUSTOM_TOGGLE_MUTE => {
                let muted = self.playback.toggle_mute();
                self.emit(EVENT_AUDIO_MUTE, muted as u32 as f32, 0.0, 0.0);
            }
            CUSTOM_SET_SPEED => {
                if let Some(index) = self.selected {
                    self.registry.set_speed(index, a);
                }
            }
            CUSTOM_RESIZE => {
                self.viewport = (a, b);
                self.camera.set_viewport(a, b);
            }
            CUSTOM_PAGE_CLICK => {
                self.unlock_audio();
            }
            other => {
                log::warn!("unknown custom event kind {other}");
            }
        }
    }

    fn unlock_audio(&mut self) {
        if self.audio_unlock.notify_click() {
            self.emit(EVENT_AUDIO_PLAY, 0.0, 0.0, 0.0);
        }
    }

    /// Client pixels → normalized device coordinates.
    fn ndc(&self, x: f32, y: f32) -> (f32, f32) {
        let (w, h) = self.viewport;
        ((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
    }

    /// Re-cast under the cursor and show or hide the tooltip.
    fn hover_at(&mut self, x: f32, y: f32) {
        let (nx, ny) = self.ndc(x, y);
        let ray = self.camera.pick_ray(nx, ny);
        match picking::pick(&ray, &self.registry) {
            Some(hit) => {
                self.hovered = Some(hit.index);
                let name = self.registry.get(hit.index).descriptor.name;
                let description = self.labels.describe(name);
                self.tooltip_text.clear();
                self.tooltip_text.push_str(name);
                if !description.is_empty() {
                    self.tooltip_text.push('\n');
                    self.tooltip_text.push_str(description);
                }
                self.emit(EVENT_TOOLTIP_SHOW, hit.index as f32, x, y);
            }
            None => {
                self.hovered = None;
                self.emit(EVENT_TOOLTIP_HIDE, 0.0, 0.0, 0.0);
            }
        }
    }

    /// Re-cast at the click point and open or close the speed panel.
    fn click_at(&mut self, x: f32, y: f32) {
        let (nx, ny) = self.ndc(x, y);
        let ray = self.camera.pick_ray(nx, ny);
        match picking::pick(&ray, &self.registry) {
            Some(hit) => {
                self.selected = Some(hit.index);
                let speed = self.registry.speed(hit.index);
                self.emit(EVENT_PANEL_SHOW, hit.index as f32, speed, 0.0);
            }
            None => {
                self.selected = None;
                self.emit(EVENT_PANEL_HIDE, 0.0, 0.0, 0.0);
            }
        }
    }

    fn emit(&mut self, kind: f32, a: f32, b: f32, c: f32) {
        self.events.push(UiEvent { kind, a, b, c });
    }

    // ── Read access for the web bridge ─────────────────────────────

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn skybox(&self) -> &Skybox {
        &self.skybox
    }

    pub fn ambient(&self) -> &AmbientLight {
        &self.ambient
    }

    pub fn bloom(&self) -> &BloomSettings {
        &self.bloom
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    pub fn tooltip_text(&self) -> &str {
        &self.tooltip_text
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}
