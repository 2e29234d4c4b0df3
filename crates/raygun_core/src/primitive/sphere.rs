//! Sphere primitive.

use raygun_math::{DVec3, HitRecord, PrimitiveId, Ray};

use super::{solve_quadratic, Primitive};

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: usize,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: usize) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Solve `|O + tD - C|^2 = r^2`.
    fn roots(&self, ray: &Ray) -> Option<(f64, f64)> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        solve_quadratic(a, b, c)
    }
}

impl Primitive for Sphere {
    fn material(&self) -> usize {
        self.material
    }

    fn hit_bounds(&self, ray: &Ray) -> bool {
        matches!(self.roots(ray), Some((_, t1)) if t1 >= 0.0)
    }

    fn intersect(&self, ray: &Ray, id: PrimitiveId, rec: &mut HitRecord) -> bool {
        let Some((t0, t1)) = self.roots(ray) else {
            return false;
        };

        // Nearest root in front of the origin
        let t = if t0 >= 0.0 { t0 } else { t1 };
        if t < 0.0 {
            return false;
        }
        rec.record(t, id, None)
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalize_or_zero()
    }

    fn furthest_from(&self, point: DVec3) -> f64 {
        (self.center - point).length() + self.radius
    }
}
