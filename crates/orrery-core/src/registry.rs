use glam::Vec3;

use crate::bodies::{self, BodyDescriptor, BODIES, BODY_COUNT};
use crate::rng::Rng;

/// A flat decoration attached to a body — currently only Saturn's ring.
/// The decoration carries its own local-space transform so the renderer
/// places it relative to the owning body without a scene-graph parent link.
#[derive(Debug, Clone, Copy)]
pub struct Decoration {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Orientation, radians around the local X and Z axes.
    pub tilt_x: f32,
    pub tilt_z: f32,
    /// Offset from the body center in the body's local space.
    pub offset: Vec3,
    pub color: (f32, f32, f32),
    pub opacity: f32,
}

impl Decoration {
    /// Saturn-style annular ring sized from the body radius.
    pub fn ring(body_radius: f32) -> Self {
        Self {
            inner_radius: body_radius * bodies::RING_INNER_SCALE,
            outer_radius: body_radius * bodies::RING_OUTER_SCALE,
            tilt_x: bodies::RING_TILT_X,
            tilt_z: bodies::RING_TILT_Z,
            offset: Vec3::ZERO,
            color: bodies::RING_COLOR,
            opacity: bodies::RING_OPACITY,
        }
    }
}

/// One live body: its static descriptor plus the mutable orbital state.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub descriptor: &'static BodyDescriptor,
    /// Current orbit angle in radians. Wraps implicitly through cos/sin;
    /// no explicit modulo.
    pub angle: f32,
    /// Current angular speed, radians per displayed frame. Starts at the
    /// descriptor's base speed, overridable from the speed slider.
    pub speed: f32,
    /// World position, recomputed whenever the angle changes.
    pub pos: Vec3,
    pub decorations: Vec<Decoration>,
}

impl BodyState {
    fn position_for(descriptor: &BodyDescriptor, angle: f32) -> Vec3 {
        Vec3::new(
            descriptor.distance * angle.cos(),
            0.0,
            descriptor.distance * angle.sin(),
        )
    }

    /// Recompute the world position from the current angle.
    pub fn sync_position(&mut self) {
        self.pos = Self::position_for(self.descriptor, self.angle);
    }
}

/// The fixed set of nine bodies. Built exactly once at startup; no body is
/// ever added or removed afterwards.
pub struct BodyRegistry {
    bodies: Vec<BodyState>,
}

impl BodyRegistry {
    /// Build the registry from the static table, drawing each initial orbit
    /// angle uniformly from [0, 2π).
    pub fn new(rng: &mut Rng) -> Self {
        let mut states = Vec::with_capacity(BODY_COUNT);
        for (i, descriptor) in BODIES.iter().enumerate() {
            let angle = rng.next_angle();
            let mut decorations = Vec::new();
            if i == bodies::RINGED {
                decorations.push(Decoration::ring(descriptor.radius));
            }
            states.push(BodyState {
                descriptor,
                angle,
                speed: descriptor.base_speed,
                pos: BodyState::position_for(descriptor, angle),
                decorations,
            });
        }
        Self { bodies: states }
    }

    /// Advance every orbiting body by its current speed and reposition it on
    /// its circular path. The Sun (distance 0) never moves.
    pub fn advance(&mut self) {
        for body in &mut self.bodies {
            if body.descriptor.distance > 0.0 {
                body.angle += body.speed;
                body.sync_position();
            }
        }
    }

    /// Override a body's angular speed. Takes effect on the next advance.
    pub fn set_speed(&mut self, index: usize, speed: f32) {
        if let Some(body) = self.bodies.get_mut(index) {
            body.speed = speed;
        }
    }

    pub fn speed(&self, index: usize) -> f32 {
        self.bodies[index].speed
    }

    pub fn get(&self, index: usize) -> &BodyState {
        &self.bodies[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut BodyState {
        &mut self.bodies[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyState> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Find a body index by name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.descriptor.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, SATURN, SUN};

    fn registry() -> BodyRegistry {
        BodyRegistry::new(&mut Rng::new(42))
    }

    #[test]
    fn initial_angles_in_range_and_speeds_match_base() {
        let reg = registry();
        assert_eq!(reg.len(), BODY_COUNT);
        for body in reg.iter() {
            assert!(body.angle >= 0.0 && body.angle < std::f32::consts::TAU);
            assert_eq!(body.speed, body.descriptor.base_speed);
        }
    }

    #[test]
    fn advance_accumulates_speed_per_frame() {
        let mut reg = registry();
        let start = reg.get(EARTH).angle;
        let speed = reg.get(EARTH).speed;
        for _ in 0..5 {
            reg.advance();
        }
        let expected = start + 5.0 * speed;
        assert!((reg.get(EARTH).angle - expected).abs() < 1e-4);
    }

    #[test]
    fn sun_never_moves() {
        let mut reg = registry();
        let before = reg.get(SUN).pos;
        for _ in 0..100 {
            reg.advance();
        }
        assert_eq!(reg.get(SUN).pos, before);
        assert_eq!(reg.get(SUN).pos, Vec3::ZERO);
    }

    #[test]
    fn position_follows_circle() {
        let mut reg = registry();
        reg.get_mut(EARTH).angle = 0.0;
        reg.get_mut(EARTH).sync_position();
        let d = reg.get(EARTH).descriptor.distance;
        assert_eq!(reg.get(EARTH).pos, Vec3::new(d, 0.0, 0.0));

        reg.get_mut(EARTH).angle = std::f32::consts::FRAC_PI_2;
        reg.get_mut(EARTH).sync_position();
        let pos = reg.get(EARTH).pos;
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.z - d).abs() < 1e-4);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn new_speed_applies_on_next_advance() {
        let mut reg = registry();
        reg.get_mut(EARTH).angle = 1.0;
        reg.set_speed(EARTH, 0.5);
        reg.advance();
        assert!((reg.get(EARTH).angle - 1.5).abs() < 1e-6);
    }

    #[test]
    fn only_saturn_carries_a_ring() {
        let reg = registry();
        for (i, body) in reg.iter().enumerate() {
            if i == SATURN {
                assert_eq!(body.decorations.len(), 1);
                let ring = &body.decorations[0];
                assert!((ring.inner_radius - 4.5 * 1.3).abs() < 1e-6);
                assert!((ring.outer_radius - 4.5 * 1.8).abs() < 1e-6);
                assert_eq!(ring.offset, Vec3::ZERO);
            } else {
                assert!(body.decorations.is_empty());
            }
        }
    }

    #[test]
    fn find_by_name() {
        let reg = registry();
        assert_eq!(reg.find("Earth"), Some(EARTH));
        assert_eq!(reg.find("Pluto"), None);
    }
}
