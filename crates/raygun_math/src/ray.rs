use crate::{Color, DVec3, Interval, MAX_DIST};

/// A ray in 3D space with an origin and a unit direction.
///
/// Rays are plain values. The "nearest hit so far" state of an intersection
/// sweep lives in a separate [`HitRecord`] owned by whoever runs the sweep.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized; a zero direction stays zero.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray that starts a small distance along `direction` from
    /// `origin`, used for secondary rays leaving a surface.
    pub fn offset(origin: DVec3, direction: DVec3, offset: f64) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            origin: origin + direction * offset,
            direction,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Identifies a primitive by its group and its position within the group.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrimitiveId {
    pub group: usize,
    pub primitive: usize,
}

impl PrimitiveId {
    pub const fn new(group: usize, primitive: usize) -> Self {
        Self { group, primitive }
    }
}

/// Nearest intersection found so far during a sweep over the scene.
///
/// Primitives only ever replace the record with a strictly closer hit, so a
/// single pass over every primitive leaves the globally nearest one here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray, [`MAX_DIST`] until something is hit
    pub t: f64,
    /// Which primitive was hit
    pub id: Option<PrimitiveId>,
    /// Surface color sampled from a texture, if the surface is textured
    pub texel: Option<Color>,
}

impl HitRecord {
    /// An empty record: no hit at [`MAX_DIST`].
    pub const fn new() -> Self {
        Self {
            t: MAX_DIST,
            id: None,
            texel: None,
        }
    }

    /// Whether any primitive has been recorded.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.id.is_some()
    }

    /// The distances a new hit must fall in to replace this one.
    #[inline]
    pub fn range(&self) -> Interval {
        Interval::new(0.0, self.t)
    }

    /// Record a hit if it is in [`HitRecord::range`].
    ///
    /// Returns whether the record was updated.
    pub fn record(&mut self, t: f64, id: PrimitiveId, texel: Option<Color>) -> bool {
        if !self.range().admits(t) {
            return false;
        }
        self.t = t;
        self.id = Some(id);
        self.texel = texel;
        true
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::new()
    }
}
