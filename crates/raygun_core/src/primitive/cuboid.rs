//! Axis-aligned box primitive.

use raygun_math::{DVec3, HitRecord, PrimitiveId, Ray, EPS};

use super::Primitive;

/// An axis-aligned box.
#[derive(Clone, Debug, PartialEq)]
pub struct Cuboid {
    min: DVec3,
    max: DVec3,
    material: usize,
}

impl Cuboid {
    /// Create a box centred on `center` with the given edge lengths.
    ///
    /// The box is centred on all three axes. See [`Cuboid::from_front_face`]
    /// for boxes placed by their near face.
    pub fn new(center: DVec3, size: DVec3, material: usize) -> Self {
        let half = size.abs() / 2.0;
        Self::from_corners(center - half, center + half, material)
    }

    /// Create a box whose near face is centred on `front`.
    ///
    /// `x` and `y` are centred on `front`; the box runs from `front.z` to
    /// `front.z + size.z`.
    pub fn from_front_face(front: DVec3, size: DVec3, material: usize) -> Self {
        let size = size.abs();
        let half = DVec3::new(size.x / 2.0, size.y / 2.0, 0.0);
        Self::from_corners(
            front - half,
            front + half + DVec3::new(0.0, 0.0, size.z),
            material,
        )
    }

    /// Create a box spanning two opposite corners.
    pub fn from_corners(a: DVec3, b: DVec3, material: usize) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            material,
        }
    }

    pub fn min(&self) -> DVec3 {
        self.min
    }

    pub fn max(&self) -> DVec3 {
        self.max
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }
}

impl Primitive for Cuboid {
    fn material(&self) -> usize {
        self.material
    }

    fn intersect(&self, ray: &Ray, id: PrimitiveId, rec: &mut HitRecord) -> bool {
        // Slab method
        let n = (self.min - ray.origin) / ray.direction;
        let f = (self.max - ray.origin) / ray.direction;
        let (near, far) = (n.min(f), n.max(f));

        let t0 = near.max_element();
        let t1 = far.min_element();
        if t0 < 0.0 || t0 >= t1 {
            return false;
        }
        rec.record(t0, id, None)
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        if point.x < self.min.x + EPS {
            return -DVec3::X;
        }
        if point.x > self.max.x - EPS {
            return DVec3::X;
        }
        if point.y < self.min.y + EPS {
            return -DVec3::Y;
        }
        if point.y > self.max.y - EPS {
            return DVec3::Y;
        }
        if point.z < self.min.z + EPS {
            return -DVec3::Z;
        }
        if point.z > self.max.z - EPS {
            return DVec3::Z;
        }

        // Not within tolerance of any face: use the nearest one
        let to_min = point - self.min;
        let to_max = self.max - point;
        let faces = [
            (to_min.x, -DVec3::X),
            (to_max.x, DVec3::X),
            (to_min.y, -DVec3::Y),
            (to_max.y, DVec3::Y),
            (to_min.z, -DVec3::Z),
            (to_max.z, DVec3::Z),
        ];
        faces
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map_or(DVec3::Y, |(_, normal)| normal)
    }

    fn furthest_from(&self, point: DVec3) -> f64 {
        // Every corner is exactly half a diagonal from the center
        let half_diagonal = (self.max - self.min).length() / 2.0;
        (self.center() - point).length() + half_diagonal
    }
}
