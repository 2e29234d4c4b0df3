//! Groups: named clusters of primitives behind a cheap bounding test.

use log::debug;
use raygun_math::{DVec3, Ray};

use crate::primitive::{Plane, Primitive, Sphere};

/// Shape used to reject a whole group before its primitives are tested.
#[derive(Clone, Debug, PartialEq)]
pub enum GroupBounds {
    Sphere(Sphere),
    Plane(Plane),
}

impl GroupBounds {
    /// Test if a ray may hit anything inside the bounds.
    pub fn hit(&self, ray: &Ray) -> bool {
        match self {
            GroupBounds::Sphere(sphere) => sphere.hit_bounds(ray),
            GroupBounds::Plane(plane) => plane.hit_bounds(ray),
        }
    }
}

/// A named collection of primitives.
///
/// A group is entered when it is always visible, when it has no bounds, or
/// when a ray hits its bounds.
#[derive(Debug)]
pub struct Group {
    name: String,
    center: DVec3,
    always_visible: bool,
    bounds: Option<GroupBounds>,
    primitives: Vec<Box<dyn Primitive>>,
}

impl Group {
    /// Create an empty group.
    pub fn new(name: impl Into<String>, center: DVec3, always_visible: bool) -> Self {
        Self {
            name: name.into(),
            center,
            always_visible,
            bounds: None,
            primitives: Vec::new(),
        }
    }

    /// Add a primitive (builder style).
    pub fn with_primitive(mut self, primitive: impl Primitive + 'static) -> Self {
        self.add(Box::new(primitive));
        self
    }

    /// Use explicit bounds instead of computing a bounding sphere.
    pub fn with_bounds(mut self, bounds: GroupBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Add a primitive.
    pub fn add(&mut self, primitive: Box<dyn Primitive>) {
        self.primitives.push(primitive);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn is_always_visible(&self) -> bool {
        self.always_visible
    }

    pub fn bounds(&self) -> Option<&GroupBounds> {
        self.bounds.as_ref()
    }

    pub fn primitives(&self) -> &[Box<dyn Primitive>] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Compute a bounding sphere around the center that encloses every
    /// primitive.
    ///
    /// Does nothing if the group is always visible or already has bounds.
    /// If no finite, non-zero radius exists the group becomes always
    /// visible instead.
    pub fn calc_bounds(&mut self) {
        if self.always_visible || self.bounds.is_some() {
            return;
        }

        let radius = self
            .primitives
            .iter()
            .map(|p| p.furthest_from(self.center))
            .fold(0.0, f64::max);

        if radius == 0.0 || !radius.is_finite() {
            debug!("Group '{}' has no usable bounds, always visible", self.name);
            self.always_visible = true;
            return;
        }

        debug!(
            "Group '{}' bounded by sphere of radius {:.3} around {}",
            self.name, radius, self.center
        );
        self.bounds = Some(GroupBounds::Sphere(Sphere::new(self.center, radius, 0)));
    }

    /// Whether a ray needs to be tested against this group's primitives.
    pub fn hit_bounds(&self, ray: &Ray) -> bool {
        if self.always_visible {
            return true;
        }
        match &self.bounds {
            Some(bounds) => bounds.hit(ray),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Cuboid;

    fn cluster() -> Group {
        Group::new("cluster", DVec3::new(0.0, 0.0, 10.0), false)
            .with_primitive(Sphere::new(DVec3::new(1.0, 0.0, 10.0), 1.0, 0))
            .with_primitive(Cuboid::new(DVec3::new(-1.0, 0.0, 10.0), DVec3::ONE, 0))
    }

    #[test]
    fn test_calc_bounds_encloses_members() {
        let mut group = cluster();
        group.calc_bounds();

        let Some(GroupBounds::Sphere(sphere)) = group.bounds() else {
            panic!("expected sphere bounds");
        };
        assert_eq!(sphere.center(), group.center());
        // Sphere member reaches 2.0 from the center
        assert!(sphere.radius() >= 2.0);
        assert!(!group.is_always_visible());
    }

    #[test]
    fn test_bounds_reject_missing_rays() {
        let mut group = cluster();
        group.calc_bounds();

        let toward = Ray::new(DVec3::ZERO, DVec3::Z);
        let away = Ray::new(DVec3::ZERO, -DVec3::Z);
        assert!(group.hit_bounds(&toward));
        assert!(!group.hit_bounds(&away));
    }

    #[test]
    fn test_infinite_member_makes_group_always_visible() {
        let mut group = cluster().with_primitive(Plane::new(DVec3::ZERO, DVec3::Y, 0));
        group.calc_bounds();

        assert!(group.is_always_visible());
        assert!(group.bounds().is_none());
        assert!(group.hit_bounds(&Ray::new(DVec3::ZERO, -DVec3::Z)));
    }

    #[test]
    fn test_empty_group_is_always_visible() {
        let mut group = Group::new("empty", DVec3::ZERO, false);
        group.calc_bounds();
        assert!(group.is_always_visible());
        assert!(group.is_empty());
    }

    #[test]
    fn test_explicit_bounds_are_kept() {
        let floor = Plane::rectangle(DVec3::ZERO, DVec3::Y, 4.0, 4.0, DVec3::Z, 0);
        let mut group = cluster().with_bounds(GroupBounds::Plane(floor.clone()));
        group.calc_bounds();

        assert_eq!(group.bounds(), Some(&GroupBounds::Plane(floor)));
    }

    #[test]
    fn test_always_visible_skips_bounds() {
        let mut group = Group::new("sky", DVec3::ZERO, true)
            .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 10.0), 1.0, 0));
        group.calc_bounds();

        assert!(group.bounds().is_none());
        assert!(group.hit_bounds(&Ray::new(DVec3::ZERO, -DVec3::Z)));
        assert_eq!(group.len(), 1);
    }
}
