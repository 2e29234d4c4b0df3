//! Rectangle with an image mapped across it.

use std::sync::Arc;

use raygun_math::{DVec3, HitRecord, PrimitiveId, Ray};

use super::{Plane, Primitive};
use crate::Texture;

/// A `width` x `height` rectangle showing a texture.
///
/// The texture is stretched over the whole rectangle, its top edge along
/// `up`. Fully transparent texels let rays pass through.
#[derive(Clone, Debug)]
pub struct TexturedPlane {
    plane: Plane,
    width: f64,
    height: f64,
    texture: Arc<Texture>,
}

impl TexturedPlane {
    pub fn new(
        position: DVec3,
        normal: DVec3,
        up: DVec3,
        width: f64,
        height: f64,
        texture: Arc<Texture>,
        material: usize,
    ) -> Self {
        Self {
            plane: Plane::rectangle(position, normal, width, height, up, material),
            width: width.max(0.0),
            height: height.max(0.0),
            texture,
        }
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Texture coordinates of a point on the plane, `(0, 0)` at the
    /// bottom-left corner.
    fn uv(&self, point: DVec3) -> (f64, f64) {
        let (x, y) = self.plane.local(point);
        (x / self.width + 0.5, y / self.height + 0.5)
    }
}

impl Primitive for TexturedPlane {
    fn material(&self) -> usize {
        self.plane.material()
    }

    fn hit_bounds(&self, ray: &Ray) -> bool {
        self.plane.hit_bounds(ray)
    }

    fn intersect(&self, ray: &Ray, id: PrimitiveId, rec: &mut HitRecord) -> bool {
        if self.width == 0.0 || self.height == 0.0 {
            return false;
        }
        let Some(t) = self.plane.solve(ray) else {
            return false;
        };
        if !rec.range().admits(t) {
            return false;
        }

        let (u, v) = self.uv(ray.at(t));
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return false;
        }
        match self.texture.sample(u, v) {
            Some(texel) => rec.record(t, id, Some(texel)),
            None => false,
        }
    }

    fn normal_at(&self, point: DVec3) -> DVec3 {
        self.plane.normal_at(point)
    }

    fn furthest_from(&self, point: DVec3) -> f64 {
        self.plane.furthest_from(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raygun_math::{Color, MAX_DIST};

    const ID: PrimitiveId = PrimitiveId::new(0, 1);

    /// 2x1 texture: opaque red on the viewer's left, transparent on the right.
    fn half_transparent() -> Arc<Texture> {
        Arc::new(
            Texture::new(
                2,
                1,
                vec![[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 0.0]],
                "half",
            )
            .unwrap(),
        )
    }

    fn facing_camera() -> TexturedPlane {
        TexturedPlane::new(
            DVec3::new(0.0, 0.0, 4.0),
            -DVec3::Z,
            DVec3::Y,
            2.0,
            2.0,
            half_transparent(),
            0,
        )
    }

    #[test]
    fn test_opaque_texel_hit_records_color() {
        let plane = facing_camera();
        // Viewer's left is +x when looking down +z
        let ray = Ray::new(DVec3::new(0.5, 0.0, 0.0), DVec3::Z);
        let mut rec = HitRecord::new();

        assert!(plane.intersect(&ray, ID, &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-12);
        assert_eq!(rec.texel, Some(Color::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_transparent_texel_is_miss() {
        let plane = facing_camera();
        let ray = Ray::new(DVec3::new(-0.5, 0.0, 0.0), DVec3::Z);
        let mut rec = HitRecord::new();

        assert!(!plane.intersect(&ray, ID, &mut rec));
        assert_eq!(rec.t, MAX_DIST);
    }

    #[test]
    fn test_outside_rectangle_is_miss() {
        let plane = facing_camera();
        let ray = Ray::new(DVec3::new(0.0, 1.5, 0.0), DVec3::Z);
        assert!(!plane.intersect(&ray, ID, &mut HitRecord::new()));
    }

    #[test]
    fn test_normal_and_furthest_follow_plane() {
        let plane = facing_camera();
        assert_eq!(plane.normal_at(DVec3::ZERO), -DVec3::Z);
        assert!((plane.furthest_from(DVec3::new(0.0, 0.0, 4.0)) - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
