//! Geometric primitives and the intersection contract they share.

mod cuboid;
mod cylinder;
mod plane;
mod sphere;
mod textured_plane;

pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;
pub use textured_plane::TexturedPlane;

use std::fmt;

use raygun_math::{DVec3, HitRecord, PrimitiveId, Ray};

/// Trait for shapes that can be placed in a [`Group`](crate::Group).
pub trait Primitive: Send + Sync + fmt::Debug {
    /// Index into the scene's material list.
    fn material(&self) -> usize;

    /// Test if a ray hits this shape anywhere in front of its origin.
    ///
    /// Used when the shape bounds a whole group, so it should be cheap.
    fn hit_bounds(&self, ray: &Ray) -> bool {
        let mut rec = HitRecord::new();
        self.intersect(ray, PrimitiveId::default(), &mut rec)
    }

    /// Test if a ray hits this shape strictly closer than `rec.t`.
    ///
    /// On a hit the record is overwritten with this shape's distance, `id`
    /// and surface texel, and true is returned. Otherwise the record is left
    /// untouched.
    fn intersect(&self, ray: &Ray, id: PrimitiveId, rec: &mut HitRecord) -> bool;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: DVec3) -> DVec3;

    /// Upper bound on the distance from `point` to any point of the shape.
    ///
    /// Infinite for unbounded shapes.
    fn furthest_from(&self, point: DVec3) -> f64;
}

/// Roots of `a*t^2 + b*t + c = 0` in ascending order, if real.
pub(crate) fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0.0 {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrtd = discriminant.sqrt();
    let t0 = (-b - sqrtd) / (2.0 * a);
    let t1 = (-b + sqrtd) / (2.0 * a);
    Some((t0.min(t1), t0.max(t1)))
}
