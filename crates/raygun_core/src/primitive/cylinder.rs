//! Finite cylinder primitive with end caps.

use raygun_math::{DVec3, HitRecord, PrimitiveId, Ray, EPS};

use super::{solve_quadratic, Plane, Primitive};

/// A cylinder from `position` along `direction` for `length`, closed by
/// two discs.
#[derive(Clone, Debug, PartialEq)]
pub struct Cylinder {
    position: DVec3,
    direction: DVec3,
    length: f64,
    radius: f64,
    start_cap: Plane,
    end_cap: Plane,
    material: usize,
}

impl Cylinder {
    pub fn new(
        position: DVec3,
        direction: DVec3,
        length: f64,
        radius: f64,
        material: usize,
    ) -> Self {
        let direction = direction.normalize_or_zero();
        let length = length.max(0.0);
        let radius = radius.max(0.0);
        let start_cap = Plane::disc(position, -direction, radius, material);
        let end_cap = Plane::disc(position + direction * length, direction, radius, material);
        Self {
            position,
            direction,
            length,
            radius,
            start_cap,
            end_cap,
            material,
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Primitive for Cylinder {
    fn material(&self) -> usize {
        self.material
    }

    fn intersect(&self, ray: &Ray, id: PrimitiveId, rec: &mut HitRecord) -> bool {
        let ab = self.direction * self.length;
        let ab_dot_ab = ab.dot(ab);
        if ab_dot_ab == 0.0 {
            return false;
        }
        let ao = ray.origin - self.position;

        // Axial parameter of a point at distance t is t * m + n (0 = start, 1 = end)
        let m = ab.dot(ray.direction) / ab_dot_ab;
        let n = ab.dot(ao) / ab_dot_ab;

        // Ray and origin with their axial parts removed
        let q = ray.direction - ab * m;
        let r = ao - ab * n;

        let a = q.dot(q);
        let b = 2.0 * q.dot(r);
        let c = r.dot(r) - self.radius * self.radius;

        let mut local = *rec;
        if a < 1e-12 {
            // Parallel to the axis: only the caps can be hit, and only from
            // inside the radius
            if c > 0.0 {
                return false;
            }
        } else {
            let Some((t0, t1)) = solve_quadratic(a, b, c) else {
                return false;
            };
            if t1 < 0.0 {
                return false;
            }
            // Nearest root in front of the origin that lies between the caps
            let side = [t0, t1]
                .into_iter()
                .find(|&t| t >= 0.0 && (0.0..=1.0).contains(&(t * m + n)));
            if let Some(t) = side {
                local.record(t, id, None);
            }
        }

        // A cap replaces the side hit only if it is closer
        self.start_cap.intersect(ray, id, &mut local);
        self.end_cap.intersect(ray, id, &mut local);

        if local.t < rec.t {
            *rec = local;
            true
        } else {
            false
        }
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        let pq = point - self.position;
        let axial = pq.dot(self.direction);
        let radial = pq - self.direction * axial;

        if radial.length() < self.radius - EPS {
            if axial <= EPS {
                return -self.direction;
            }
            if axial >= self.length - EPS {
                return self.direction;
            }
        }
        radial.normalize_or_zero()
    }

    fn furthest_from(&self, point: DVec3) -> f64 {
        (self.position - point).length() + self.length + self.radius
    }
}
