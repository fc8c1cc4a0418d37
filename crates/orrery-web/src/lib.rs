pub mod runner;

pub use runner::SimRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use orrery_core::scene::{SKYBOX_RADIUS, STAR_COUNT};
use orrery_core::{AssetManifest, InputEvent, SimConfig};

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Orrery not initialized. Call app_init() first.");
        f(runner)
    })
}

/// Create the simulation for a render surface of the given pixel size.
#[wasm_bindgen]
pub fn app_init(viewport_width: f32, viewport_height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SimRunner::new(SimConfig {
        viewport_width,
        viewport_height,
        ..SimConfig::default()
    });
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized ({STAR_COUNT} stars)");
}

/// Advance one display frame. Call from requestAnimationFrame.
#[wasm_bindgen]
pub fn app_tick() {
    with_runner(|r| r.tick());
}

// ---- Input entry points ----

#[wasm_bindgen]
pub fn app_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn app_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn app_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn app_wheel(delta: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
}

/// Control-surface events: pause/reset/mute buttons, the speed slider,
/// viewport resize, and page-level clicks for the autoplay unlock.
#[wasm_bindgen]
pub fn app_custom_event(kind: u32, a: f32, b: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b }));
}

/// Push the fetched label-dataset JSON. The host calls this once when (and
/// if) the fetch resolves; on failure it simply never calls.
#[wasm_bindgen]
pub fn app_load_labels(json: &str) {
    with_runner(|r| r.load_labels(json));
}

// ---- Data accessors ----

/// JSON list of every asset the host should fetch.
#[wasm_bindgen]
pub fn get_asset_manifest() -> String {
    AssetManifest::new()
        .to_json()
        .expect("manifest serialization is infallible")
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_runner(|r| r.camera_ptr())
}

#[wasm_bindgen]
pub fn get_bloom_ptr() -> *const f32 {
    with_runner(|r| r.bloom_ptr())
}

#[wasm_bindgen]
pub fn get_star_positions_ptr() -> *const f32 {
    with_runner(|r| r.star_positions_ptr())
}

#[wasm_bindgen]
pub fn get_star_vertex_count() -> u32 {
    with_runner(|r| r.star_vertex_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_tooltip_ptr() -> *const u8 {
    with_runner(|r| r.tooltip_ptr())
}

#[wasm_bindgen]
pub fn get_tooltip_len() -> u32 {
    with_runner(|r| r.tooltip_len())
}

#[wasm_bindgen]
pub fn get_skybox_radius() -> f32 {
    SKYBOX_RADIUS
}

#[wasm_bindgen]
pub fn get_ambient_intensity() -> f32 {
    with_runner(|r| r.sim().ambient().intensity)
}
