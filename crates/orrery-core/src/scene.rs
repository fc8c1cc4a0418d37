/// Static scene dressing: the scattered starfield, the inverted skybox
/// sphere, and the one ambient light. Built once at startup.

use crate::rng::Rng;

/// Number of stars in the point cloud.
pub const STAR_COUNT: usize = 2000;
/// Side length of the cube the stars are scattered in, centered at origin.
pub const STARFIELD_EXTENT: f32 = 2000.0;

/// Radius of the background sphere carrying the equirectangular sky texture.
pub const SKYBOX_RADIUS: f32 = 1000.0;
/// Skybox texture file name.
pub const SKYBOX_TEXTURE: &str = "milky_way_dark.jpg";

/// Random point-cloud starfield, stored as a flat xyz position buffer the
/// host renderer uploads verbatim.
pub struct Starfield {
    positions: Vec<f32>,
}

impl Starfield {
    pub fn generate(rng: &mut Rng) -> Self {
        let half = STARFIELD_EXTENT / 2.0;
        let mut positions = Vec::with_capacity(STAR_COUNT * 3);
        for _ in 0..STAR_COUNT {
            positions.push(rng.next_range(-half, half));
            positions.push(rng.next_range(-half, half));
            positions.push(rng.next_range(-half, half));
        }
        Self { positions }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Raw pointer for zero-copy reads from JS.
    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }
}

/// The background sphere. Inverted winding so the texture faces inward;
/// if the texture fails to load the host still draws the sphere untextured.
#[derive(Debug, Clone, Copy)]
pub struct Skybox {
    pub radius: f32,
    pub inverted: bool,
    pub texture: &'static str,
}

impl Default for Skybox {
    fn default() -> Self {
        Self {
            radius: SKYBOX_RADIUS,
            inverted: true,
            texture: SKYBOX_TEXTURE,
        }
    }
}

/// Uniform ambient lighting for the whole scene.
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starfield_has_expected_count() {
        let field = Starfield::generate(&mut Rng::new(42));
        assert_eq!(field.positions().len(), STAR_COUNT * 3);
        assert_eq!(field.vertex_count(), STAR_COUNT as u32);
    }

    #[test]
    fn stars_stay_inside_the_cube() {
        let field = Starfield::generate(&mut Rng::new(42));
        let half = STARFIELD_EXTENT / 2.0;
        for &c in field.positions() {
            assert!(c >= -half && c < half, "coordinate out of cube: {c}");
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = Starfield::generate(&mut Rng::new(7));
        let b = Starfield::generate(&mut Rng::new(7));
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn skybox_faces_inward() {
        let sky = Skybox::default();
        assert!(sky.inverted);
        assert_eq!(sky.radius, SKYBOX_RADIUS);
    }

    #[test]
    fn ambient_defaults() {
        let light = AmbientLight::default();
        assert_eq!(light.intensity, 0.6);
        assert_eq!(light.color, [1.0, 1.0, 1.0]);
    }
}
