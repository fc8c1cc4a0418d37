use orrery_core::{
    build_render_buffer, CameraUniform, InputEvent, InputQueue, Orrery, RenderBuffer, SimConfig,
};

/// Drives the simulation once per display frame and keeps the flat buffers
/// the TypeScript renderer reads.
///
/// The browser owns the frame callback; each callback pushes any pending
/// DOM/pointer events and calls `tick()`. One tick advances the orbits by
/// exactly one frame's worth of angle — speeds are radians per displayed
/// frame, so there is no dt argument.
pub struct SimRunner {
    sim: Orrery,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera_uniform: CameraUniform,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Self {
        let sim = Orrery::new(config);
        let camera_uniform = sim.camera().uniform();
        let mut render_buffer = RenderBuffer::new();
        build_render_buffer(sim.registry(), &mut render_buffer);
        Self {
            sim,
            input: InputQueue::new(),
            render_buffer,
            camera_uniform,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the simulation, then rebuild the instance
    /// buffer and camera uniform.
    pub fn tick(&mut self) {
        self.sim.update(&self.input);
        self.input.drain();
        build_render_buffer(self.sim.registry(), &mut self.render_buffer);
        self.camera_uniform = self.sim.camera().uniform();
    }

    /// Swap in the fetched label dataset. A malformed document is logged
    /// and dropped; tooltips then keep showing bare names.
    pub fn load_labels(&mut self, json: &str) {
        if let Err(err) = self.sim.load_labels(json) {
            log::warn!("label dataset rejected: {err}");
        }
    }

    pub fn sim(&self) -> &Orrery {
        &self.sim
    }

    // ---- Pointer accessors for zero-copy reads from JS ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn bloom_ptr(&self) -> *const f32 {
        self.sim.bloom() as *const orrery_core::BloomSettings as *const f32
    }

    pub fn star_positions_ptr(&self) -> *const f32 {
        self.sim.starfield().positions_ptr()
    }

    pub fn star_vertex_count(&self) -> u32 {
        self.sim.starfield().vertex_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.sim.events().as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.sim.events().len() as u32
    }

    pub fn tooltip_ptr(&self) -> *const u8 {
        self.sim.tooltip_text().as_ptr()
    }

    pub fn tooltip_len(&self) -> u32 {
        self.sim.tooltip_text().len() as u32
    }
}
