use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::picking::Ray;

/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 2000.0;
/// Where the camera starts and where reset puts it back.
pub const HOME_POSITION: Vec3 = Vec3::new(0.0, 30.0, 100.0);

/// Fraction of the remaining offset consumed per frame.
const DAMPING: f32 = 0.1;
/// Radians of orbit per pixel dragged.
const ROTATE_SPEED: f32 = 0.005;
/// Scene units per wheel-delta unit.
const ZOOM_SPEED: f32 = 0.05;
/// Keep the camera off the poles so the view basis never degenerates.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const DISTANCE_MIN: f32 = 10.0;
const DISTANCE_MAX: f32 = 1500.0;

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// World-space camera position (w unused), for specular shading.
    pub position: [f32; 4],
}

/// Damped orbit camera around a target point.
///
/// Pointer drags and wheel ticks move the *goal* spherical coordinates;
/// `update()` eases the current coordinates toward them each frame, so the
/// camera keeps gliding after the pointer stops. Damping runs regardless of
/// the simulation's pause state.
pub struct OrbitCamera {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_goal: f32,
    pitch_goal: f32,
    distance_goal: f32,
    aspect: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        let distance = HOME_POSITION.length();
        let pitch = (HOME_POSITION.y / distance).asin();
        let yaw = HOME_POSITION.x.atan2(HOME_POSITION.z);
        Self {
            target: Vec3::ZERO,
            yaw,
            pitch,
            distance,
            yaw_goal: yaw,
            pitch_goal: pitch,
            distance_goal: distance,
            aspect,
        }
    }

    /// Re-derive the aspect ratio after a viewport resize.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Orbit by a pointer delta in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_goal -= dx * ROTATE_SPEED;
        self.pitch_goal = (self.pitch_goal + dy * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Dolly in or out by a wheel delta.
    pub fn zoom(&mut self, delta: f32) {
        self.distance_goal = (self.distance_goal + delta * ZOOM_SPEED).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Ease the current orbit toward the goal. Called once per frame.
    pub fn update(&mut self) {
        self.yaw += (self.yaw_goal - self.yaw) * DAMPING;
        self.pitch += (self.pitch_goal - self.pitch) * DAMPING;
        self.distance += (self.distance_goal - self.distance) * DAMPING;
    }

    /// Snap back to the home position and re-target the origin. Unconditional.
    pub fn reset(&mut self) {
        let distance = HOME_POSITION.length();
        let pitch = (HOME_POSITION.y / distance).asin();
        let yaw = HOME_POSITION.x.atan2(HOME_POSITION.z);
        self.target = Vec3::ZERO;
        self.yaw = yaw;
        self.pitch = pitch;
        self.distance = distance;
        self.yaw_goal = yaw;
        self.pitch_goal = pitch;
        self.distance_goal = distance;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current world-space position from the spherical coordinates.
    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        self.target + offset
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, NEAR, FAR)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn uniform(&self) -> CameraUniform {
        let pos = self.position();
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            position: [pos.x, pos.y, pos.z, 1.0],
        }
    }

    /// Build a world-space pick ray through normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn pick_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let inv = self.view_proj().inverse();
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray {
            origin: near,
            dir: (far - near).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASPECT: f32 = 16.0 / 9.0;

    #[test]
    fn starts_at_home_looking_at_origin() {
        let cam = OrbitCamera::new(ASPECT);
        let pos = cam.position();
        assert!((pos - HOME_POSITION).length() < 1e-3, "pos = {pos}");
        assert_eq!(cam.target(), Vec3::ZERO);
    }

    #[test]
    fn damping_keeps_gliding_after_input() {
        let mut cam = OrbitCamera::new(ASPECT);
        cam.rotate(200.0, 0.0);
        let before = cam.position();
        cam.update();
        let after_one = cam.position();
        assert!((after_one - before).length() > 1e-3, "camera did not move");

        // Not there yet after a single frame, but converges eventually.
        cam.update();
        let after_two = cam.position();
        assert!((after_two - after_one).length() > 1e-4);
        for _ in 0..200 {
            cam.update();
        }
        let settled = cam.position();
        cam.update();
        assert!((cam.position() - settled).length() < 1e-3);
    }

    #[test]
    fn reset_restores_home_exactly() {
        let mut cam = OrbitCamera::new(ASPECT);
        cam.rotate(300.0, -120.0);
        cam.zoom(400.0);
        for _ in 0..30 {
            cam.update();
        }
        assert!((cam.position() - HOME_POSITION).length() > 1.0);

        cam.reset();
        assert!((cam.position() - HOME_POSITION).length() < 1e-3);
        assert_eq!(cam.target(), Vec3::ZERO);
        // No residual goal left to drift toward.
        cam.update();
        assert!((cam.position() - HOME_POSITION).length() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::new(ASPECT);
        cam.zoom(-1.0e6);
        for _ in 0..500 {
            cam.update();
        }
        assert!(cam.position().length() >= DISTANCE_MIN - 1e-2);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = OrbitCamera::new(ASPECT);
        let ray = cam.pick_ray(0.0, 0.0);
        let expected = (cam.target() - cam.position()).normalize();
        assert!((ray.dir - expected).length() < 1e-3, "dir = {}", ray.dir);
        // Origin sits on the near plane, just in front of the camera.
        assert!((ray.origin - cam.position()).length() < 1.0);
    }

    #[test]
    fn corner_rays_diverge_from_center() {
        let cam = OrbitCamera::new(ASPECT);
        let center = cam.pick_ray(0.0, 0.0);
        let corner = cam.pick_ray(1.0, 1.0);
        assert!(center.dir.dot(corner.dir) < 0.999);
    }
}
