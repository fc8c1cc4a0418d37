/// Celestial body data — the fixed descriptor table and material constants.
///
/// Distances and speeds are scene units and radians per displayed frame,
/// tuned for readability rather than astronomical accuracy.

/// Body index constants.
pub const SUN: usize = 0;
pub const MERCURY: usize = 1;
pub const VENUS: usize = 2;
pub const EARTH: usize = 3;
pub const MARS: usize = 4;
pub const JUPITER: usize = 5;
pub const SATURN: usize = 6;
pub const URANUS: usize = 7;
pub const NEPTUNE: usize = 8;
pub const BODY_COUNT: usize = 9;

/// Static description of one celestial body. The table below is the whole
/// universe: nothing is ever added or removed at runtime.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    /// Unique display name, also the key into the label dataset.
    pub name: &'static str,
    /// Texture file name (resolved to a path by the asset manifest).
    pub texture: &'static str,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Orbital distance from the origin. Zero for the Sun.
    pub distance: f32,
    /// Base angular speed in radians per displayed frame.
    pub base_speed: f32,
}

pub static BODIES: [BodyDescriptor; BODY_COUNT] = [
    BodyDescriptor { name: "Sun",     texture: "sun.jpg",     radius: 6.0, distance: 0.0,  base_speed: 0.0 },
    BodyDescriptor { name: "Mercury", texture: "mercury.jpg", radius: 1.5, distance: 12.0, base_speed: 0.02 },
    BodyDescriptor { name: "Venus",   texture: "venus.jpg",   radius: 2.0, distance: 16.0, base_speed: 0.015 },
    BodyDescriptor { name: "Earth",   texture: "earth.jpg",   radius: 2.2, distance: 20.0, base_speed: 0.012 },
    BodyDescriptor { name: "Mars",    texture: "mars.jpg",    radius: 1.8, distance: 25.0, base_speed: 0.01 },
    BodyDescriptor { name: "Jupiter", texture: "jupiter.jpg", radius: 6.0, distance: 33.0, base_speed: 0.007 },
    BodyDescriptor { name: "Saturn",  texture: "saturn.jpg",  radius: 4.5, distance: 42.0, base_speed: 0.005 },
    BodyDescriptor { name: "Uranus",  texture: "uranus.jpg",  radius: 3.5, distance: 50.0, base_speed: 0.003 },
    BodyDescriptor { name: "Neptune", texture: "neptune.jpg", radius: 3.5, distance: 56.0, base_speed: 0.002 },
];

// ── Materials ────────────────────────────────────────────────────────

/// Warm emissive tint for the Sun (#fdb813) — bright enough to feed bloom.
pub const SUN_EMISSIVE_COLOR: (f32, f32, f32) = (0.992, 0.722, 0.075);
pub const SUN_EMISSIVE_INTENSITY: f32 = 1.5;

/// Faint uniform emissive tint for everything else (#111111).
pub const BODY_EMISSIVE_COLOR: (f32, f32, f32) = (0.067, 0.067, 0.067);
pub const BODY_EMISSIVE_INTENSITY: f32 = 0.2;

// ── Saturn's ring ────────────────────────────────────────────────────

/// The one ringed body in the table.
pub const RINGED: usize = SATURN;
/// Annulus radii as multiples of the body radius.
pub const RING_INNER_SCALE: f32 = 1.3;
pub const RING_OUTER_SCALE: f32 = 1.8;
/// Fixed ring orientation, radians around the local X and Z axes.
pub const RING_TILT_X: f32 = -std::f32::consts::PI / 2.3;
pub const RING_TILT_Z: f32 = 0.2;
/// Sandy ring color (#c2b280), drawn semi-transparent and double-sided.
pub const RING_COLOR: (f32, f32, f32) = (0.761, 0.698, 0.502);
pub const RING_OPACITY: f32 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_nine_bodies() {
        assert_eq!(BODIES.len(), BODY_COUNT);
    }

    #[test]
    fn names_are_unique() {
        for i in 0..BODY_COUNT {
            for j in (i + 1)..BODY_COUNT {
                assert_ne!(BODIES[i].name, BODIES[j].name);
            }
        }
    }

    #[test]
    fn only_the_sun_sits_at_the_origin() {
        for (i, body) in BODIES.iter().enumerate() {
            if i == SUN {
                assert_eq!(body.distance, 0.0);
                assert_eq!(body.base_speed, 0.0);
            } else {
                assert!(body.distance > 0.0, "{} has no orbit", body.name);
                assert!(body.base_speed > 0.0, "{} never moves", body.name);
            }
        }
    }

    #[test]
    fn index_constants_match_table() {
        assert_eq!(BODIES[SUN].name, "Sun");
        assert_eq!(BODIES[EARTH].name, "Earth");
        assert_eq!(BODIES[SATURN].name, "Saturn");
        assert_eq!(BODIES[NEPTUNE].name, "Neptune");
    }

    #[test]
    fn earth_default_speed() {
        assert_eq!(BODIES[EARTH].base_speed, 0.012);
    }
}
