use glam::Vec3;

use crate::registry::BodyRegistry;

/// A world-space ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// A body hit by a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the body registry.
    pub index: usize,
    /// Distance along the ray to the intersection point.
    pub t: f32,
}

/// Ray/sphere intersection. Returns the nearest intersection distance in
/// front of the ray origin, or None. A grazing ray that just touches the
/// silhouette counts as a hit.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t = -b - sqrt_disc;
    if t >= 0.0 {
        return Some(t);
    }
    // Origin inside the sphere: report the exit point.
    let t = -b + sqrt_disc;
    if t >= 0.0 {
        Some(t)
    } else {
        None
    }
}

/// Cast against every top-level body sphere and return the nearest hit.
/// Decorations (rings) are not pick targets. A body occluded by a nearer
/// one along the same ray loses the tie-break.
pub fn pick(ray: &Ray, registry: &BodyRegistry) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (index, body) in registry.iter().enumerate() {
        if let Some(t) = ray_sphere(ray, body.pos, body.descriptor.radius) {
            if best.map_or(true, |h| t < h.t) {
                best = Some(Hit { index, t });
            }
        }
    }
    best
}
