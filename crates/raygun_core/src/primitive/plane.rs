//! Plane primitive: infinite plane, disc, or rectangle.

use raygun_math::{DVec3, HitRecord, PrimitiveId, Ray};

use super::Primitive;

/// Below this `|N·D|` a ray is treated as parallel to the plane.
const PARALLEL_EPS: f64 = 1e-12;

/// A plane through `position` facing `normal`.
///
/// With a radius it is a disc; with a width and height it is a rectangle
/// laid out on the in-plane basis; with neither it is infinite.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    position: DVec3,
    normal: DVec3,
    radius: f64,
    half_width: f64,
    half_height: f64,
    /// In-plane axis along the width
    u_axis: DVec3,
    /// In-plane axis along the height
    v_axis: DVec3,
    material: usize,
}

impl Plane {
    /// Create an infinite plane.
    pub fn new(position: DVec3, normal: DVec3, material: usize) -> Self {
        Self::with_extent(position, normal, 0.0, 0.0, 0.0, DVec3::Y, material)
    }

    /// Create a disc of the given radius.
    pub fn disc(position: DVec3, normal: DVec3, radius: f64, material: usize) -> Self {
        Self::with_extent(position, normal, radius, 0.0, 0.0, DVec3::Y, material)
    }

    /// Create a `width` x `height` rectangle centred on `position`.
    ///
    /// The height runs along `up` projected onto the plane.
    pub fn rectangle(
        position: DVec3,
        normal: DVec3,
        width: f64,
        height: f64,
        up: DVec3,
        material: usize,
    ) -> Self {
        Self::with_extent(position, normal, 0.0, width, height, up, material)
    }

    /// Create a plane from every shape parameter. Zero radius, width and
    /// height give an infinite plane.
    pub fn with_extent(
        position: DVec3,
        normal: DVec3,
        radius: f64,
        width: f64,
        height: f64,
        up: DVec3,
        material: usize,
    ) -> Self {
        let normal = normal.normalize_or_zero();
        let (u_axis, v_axis) = in_plane_basis(normal, up);
        Self {
            position,
            normal,
            radius: radius.max(0.0),
            half_width: width.max(0.0) / 2.0,
            half_height: height.max(0.0) / 2.0,
            u_axis,
            v_axis,
            material,
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// True when neither a radius nor a rectangle limits the plane.
    pub fn is_infinite(&self) -> bool {
        self.radius == 0.0 && self.half_width == 0.0 && self.half_height == 0.0
    }

    /// Distance along the ray to the plane, if it lies in front of the origin.
    pub(crate) fn solve(&self, ray: &Ray) -> Option<f64> {
        let v = self.normal.dot(ray.direction);
        if v.abs() < PARALLEL_EPS {
            return None;
        }
        let t = self.normal.dot(self.position - ray.origin) / v;
        (t >= 0.0).then_some(t)
    }

    /// Coordinates of a point in the plane along the width and height axes,
    /// measured from `position`.
    pub(crate) fn local(&self, point: DVec3) -> (f64, f64) {
        let d = point - self.position;
        (d.dot(self.u_axis), d.dot(self.v_axis))
    }

    /// Whether a point on the plane lies inside its disc or rectangle.
    fn contains(&self, point: DVec3) -> bool {
        if self.radius > 0.0 && (point - self.position).length() > self.radius {
            return false;
        }
        if self.half_width > 0.0 || self.half_height > 0.0 {
            let (u, v) = self.local(point);
            if u.abs() > self.half_width || v.abs() > self.half_height {
                return false;
            }
        }
        true
    }
}

impl Primitive for Plane {
    fn material(&self) -> usize {
        self.material
    }

    fn hit_bounds(&self, ray: &Ray) -> bool {
        self.solve(ray)
            .is_some_and(|t| self.contains(ray.at(t)))
    }

    fn intersect(&self, ray: &Ray, id: PrimitiveId, rec: &mut HitRecord) -> bool {
        let Some(t) = self.solve(ray) else {
            return false;
        };
        if !rec.range().admits(t) || !self.contains(ray.at(t)) {
            return false;
        }
        rec.record(t, id, None)
    }

    fn normal_at(&self, _point: DVec3) -> DVec3 {
        self.normal
    }

    fn furthest_from(&self, point: DVec3) -> f64 {
        if self.is_infinite() {
            return f64::INFINITY;
        }
        let half_diagonal = self.half_width.hypot(self.half_height);
        (self.position - point).length() + self.radius.max(half_diagonal)
    }
}

/// Orthonormal axes spanning the plane with the given normal.
///
/// The second axis follows `up` as closely as possible. When `up` is
/// parallel to the normal another world axis stands in for it.
pub(crate) fn in_plane_basis(normal: DVec3, up: DVec3) -> (DVec3, DVec3) {
    let mut u = up.cross(normal);
    if u.length_squared() < 1e-12 {
        let fallback = if normal.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        u = fallback.cross(normal);
    }
    let u = u.normalize_or_zero();
    let v = normal.cross(u);
    (u, v)
}
