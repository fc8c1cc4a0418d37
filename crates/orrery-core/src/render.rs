use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::bodies::{self, SUN};
use crate::registry::BodyRegistry;

/// Instance kind discriminants (wire values).
pub const KIND_BODY: f32 = 0.0;
pub const KIND_RING: f32 = 1.0;

/// Per-instance render data read zero-copy by the WebGPU host.
/// Must match the TypeScript protocol: 16 floats = 64 bytes stride.
///
/// For bodies, `radius` is the sphere radius and the color fields carry the
/// emissive tint over the texture. For rings, `radius`/`aux_radius` are the
/// annulus inner/outer radii, the color fields are the flat untextured
/// color, and `texture_slot` is negative.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    /// Ring outer radius; 0 for bodies.
    pub aux_radius: f32,
    /// Orientation, radians around local X and Z. Zero for bodies.
    pub tilt_x: f32,
    pub tilt_z: f32,
    /// Index into the asset manifest's texture list, or -1 for untextured.
    pub texture_slot: f32,
    pub color_r: f32,
    pub color_g: f32,
    pub color_b: f32,
    /// Emissive intensity multiplier on the color fields.
    pub emissive: f32,
    /// Opacity; rings are semi-transparent.
    pub alpha: f32,
    pub _pad: [f32; 2],
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all instances for one frame.
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Bloom pass parameters fed to the host post chain: everything above the
/// threshold glows. The Sun's emissive pushes it well past 1.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct BloomSettings {
    pub threshold: f32,
    pub strength: f32,
    pub radius: f32,
    pub _pad: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            strength: 2.0,
            radius: 0.0,
            _pad: 0.0,
        }
    }
}

fn emissive_for(index: usize) -> ((f32, f32, f32), f32) {
    if index == SUN {
        (bodies::SUN_EMISSIVE_COLOR, bodies::SUN_EMISSIVE_INTENSITY)
    } else {
        (bodies::BODY_EMISSIVE_COLOR, bodies::BODY_EMISSIVE_INTENSITY)
    }
}

/// Build the frame's instance list from the registry: one sphere per body,
/// then one ring instance per decoration, placed at the owning body's
/// position plus the decoration's local offset.
pub fn build_render_buffer(registry: &BodyRegistry, buffer: &mut RenderBuffer) {
    buffer.clear();

    for (index, body) in registry.iter().enumerate() {
        let ((r, g, b), emissive) = emissive_for(index);
        buffer.push(RenderInstance {
            kind: KIND_BODY,
            x: body.pos.x,
            y: body.pos.y,
            z: body.pos.z,
            radius: body.descriptor.radius,
            texture_slot: index as f32,
            color_r: r,
            color_g: g,
            color_b: b,
            emissive,
            alpha: 1.0,
            ..Default::default()
        });
    }

    for body in registry.iter() {
        for deco in &body.decorations {
            let pos: Vec3 = body.pos + deco.offset;
            buffer.push(RenderInstance {
                kind: KIND_RING,
                x: pos.x,
                y: pos.y,
                z: pos.z,
                radius: deco.inner_radius,
                aux_radius: deco.outer_radius,
                tilt_x: deco.tilt_x,
                tilt_z: deco.tilt_z,
                texture_slot: -1.0,
                color_r: deco.color.0,
                color_g: deco.color.1,
                color_b: deco.color.2,
                emissive: 0.0,
                alpha: deco.opacity,
                ..Default::default()
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BODY_COUNT, SATURN};
    use crate::rng::Rng;

    #[test]
    fn render_instance_is_16_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 64);
    }

    #[test]
    fn buffer_holds_nine_bodies_and_one_ring() {
        let reg = BodyRegistry::new(&mut Rng::new(42));
        let mut buf = RenderBuffer::new();
        build_render_buffer(&reg, &mut buf);
        assert_eq!(buf.instance_count() as usize, BODY_COUNT + 1);

        let bodies_n = buf
            .instances()
            .iter()
            .filter(|i| i.kind == KIND_BODY)
            .count();
        assert_eq!(bodies_n, BODY_COUNT);
    }

    #[test]
    fn ring_tracks_its_planet() {
        let mut reg = BodyRegistry::new(&mut Rng::new(42));
        let mut buf = RenderBuffer::new();

        for _ in 0..10 {
            reg.advance();
        }
        build_render_buffer(&reg, &mut buf);

        let saturn = reg.get(SATURN);
        let ring = buf
            .instances()
            .iter()
            .find(|i| i.kind == KIND_RING)
            .expect("ring instance");
        assert_eq!(ring.x, saturn.pos.x);
        assert_eq!(ring.z, saturn.pos.z);
        assert_eq!(ring.alpha, 0.5);
        assert_eq!(ring.texture_slot, -1.0);
    }

    #[test]
    fn only_the_sun_glows_bright() {
        let reg = BodyRegistry::new(&mut Rng::new(42));
        let mut buf = RenderBuffer::new();
        build_render_buffer(&reg, &mut buf);

        let sun = &buf.instances()[SUN];
        assert_eq!(sun.emissive, bodies::SUN_EMISSIVE_INTENSITY);
        for inst in &buf.instances()[1..BODY_COUNT] {
            assert_eq!(inst.emissive, bodies::BODY_EMISSIVE_INTENSITY);
        }
    }

    #[test]
    fn bloom_defaults_match_the_post_chain() {
        let bloom = BloomSettings::default();
        assert_eq!(bloom.threshold, 0.0);
        assert_eq!(bloom.strength, 2.0);
        assert_eq!(bloom.radius, 0.0);
    }
}
