//! Recursive Whitted-style shading.
//!
//! A [`Tracer`] borrows a finished [`Scene`] and owns everything it mutates,
//! so one tracer per worker thread needs no synchronization.

use raygun_core::{LightKind, Material, Scene};
use raygun_math::{Color, DVec3, HitRecord, PrimitiveId, Ray, SMALL};

/// Counters gathered while tracing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RayStats {
    /// Calls to [`Tracer::trace`], primary and secondary
    pub rays: u64,
    /// Shadow rays cast towards point lights
    pub shadow_rays: u64,
    /// Deepest recursion level reached (primary rays are level 1)
    pub max_depth: u32,
}

impl RayStats {
    /// Fold another worker's counters into these.
    pub fn merge(&mut self, other: &RayStats) {
        self.rays += other.rays;
        self.shadow_rays += other.shadow_rays;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Shades rays against a scene.
pub struct Tracer<'a> {
    scene: &'a Scene,
    stats: RayStats,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            stats: RayStats::default(),
        }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn stats(&self) -> &RayStats {
        &self.stats
    }

    /// Find the nearest primitive along a ray.
    ///
    /// Groups whose bounds the ray misses are skipped entirely.
    pub fn nearest_hit(&self, ray: &Ray) -> HitRecord {
        let mut rec = HitRecord::new();
        for (g, group) in self.scene.groups().iter().enumerate() {
            if !group.hit_bounds(ray) {
                continue;
            }
            for (i, primitive) in group.primitives().iter().enumerate() {
                primitive.intersect(ray, PrimitiveId::new(g, i), &mut rec);
            }
        }
        rec
    }

    /// Color seen along a ray.
    ///
    /// `depth` is the recursion level of this ray, starting at 1 for primary
    /// rays. Reflected and refracted rays are only cast while it is below the
    /// scene's trace depth. The result is not clamped.
    pub fn trace(&mut self, ray: &Ray, depth: u32) -> Color {
        self.stats.rays += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let rec = self.nearest_hit(ray);
        let Some(id) = rec.id else {
            return Color::BLACK;
        };

        let scene = self.scene;
        let primitive = scene.primitive(id);
        let material = scene.material(primitive.material());
        let point = ray.at(rec.t);
        let normal = primitive.normal_at(point);
        let to_viewer = -ray.direction;
        let base = rec.texel.unwrap_or(material.color);

        let mut color = Color::BLACK;
        for light in scene.lights() {
            match light.kind {
                LightKind::Ambient => color += light.color,
                LightKind::Point => {
                    let to_light = light.position - point;
                    let light_dir = to_light.normalize_or_zero();
                    let cos = normal.dot(light_dir);
                    if cos <= 0.0 {
                        continue;
                    }

                    let shadow = if scene.settings().calc_shadow {
                        self.shadow(point, light_dir, to_light.length(), id)
                    } else {
                        1.0
                    };
                    if shadow == 0.0 {
                        continue;
                    }

                    color += light.color * base * (material.diffuse * cos * shadow);

                    if material.specular > 0.0 {
                        let mirrored = 2.0 * cos * normal - light_dir;
                        let spec = to_viewer.dot(mirrored);
                        if spec > 0.0 {
                            color += light.color
                                * (material.specular * spec.powf(material.shininess) * shadow);
                        }
                    }
                }
            }
        }

        if depth < scene.settings().trace_depth {
            if material.is_reflective() {
                color += self.reflect(point, normal, to_viewer, material, depth);
            }
            if material.is_transparent() {
                color += self.refract(point, normal, ray.direction, material, depth);
            }
        }

        color
    }

    /// Fraction of a point light that reaches `point`.
    ///
    /// Every primitive between the point and the light multiplies the result
    /// by its material's transmission, so opaque occluders give 0. The hit
    /// primitive never shadows itself, and when the scene has more than one
    /// group nothing in the hit primitive's own group casts a shadow on it.
    pub fn shadow(
        &mut self,
        point: DVec3,
        light_dir: DVec3,
        light_distance: f64,
        hit: PrimitiveId,
    ) -> f64 {
        self.stats.shadow_rays += 1;

        let scene = self.scene;
        let ray = Ray::new(point, light_dir);
        let several_groups = scene.groups().len() > 1;
        let mut shadow = 1.0;

        for (g, group) in scene.groups().iter().enumerate() {
            if g == hit.group && several_groups {
                continue;
            }
            for (i, primitive) in group.primitives().iter().enumerate() {
                let id = PrimitiveId::new(g, i);
                if id == hit {
                    continue;
                }
                // Only occluders in front of the light count
                let mut rec = HitRecord {
                    t: light_distance,
                    ..HitRecord::new()
                };
                if primitive.intersect(&ray, id, &mut rec) {
                    shadow *= scene.material(primitive.material()).transmission;
                    if shadow == 0.0 {
                        return 0.0;
                    }
                }
            }
        }
        shadow
    }

    fn reflect(
        &mut self,
        point: DVec3,
        normal: DVec3,
        to_viewer: DVec3,
        material: &Material,
        depth: u32,
    ) -> Color {
        let cos = to_viewer.dot(normal);
        if cos <= 0.0 {
            return Color::BLACK;
        }
        let direction = 2.0 * cos * normal - to_viewer;
        let ray = Ray::offset(point, direction, SMALL);
        self.trace(&ray, depth + 1) * material.reflection
    }

    fn refract(
        &mut self,
        point: DVec3,
        normal: DVec3,
        incident: DVec3,
        material: &Material,
        depth: u32,
    ) -> Color {
        match refraction(incident, normal, material.ior) {
            Some(direction) => {
                let ray = Ray::offset(point, direction, SMALL);
                self.trace(&ray, depth + 1) * material.transmission
            }
            None => Color::BLACK,
        }
    }
}

/// Direction of a unit ray `incident` after crossing a surface with outward
/// `normal` into (or out of) a medium with index `ior`.
///
/// Returns `None` for total internal reflection and for a zero index.
pub fn refraction(incident: DVec3, normal: DVec3, ior: f64) -> Option<DVec3> {
    let mut normal = normal;
    let mut cos_i = -normal.dot(incident);
    let (n1, n2) = if cos_i < 0.0 {
        // Leaving the medium
        normal = -normal;
        cos_i = -cos_i;
        (ior, 1.0)
    } else {
        (1.0, ior)
    };
    if n1 == 0.0 || n2 == 0.0 {
        return None;
    }

    let eta = n1 / n2;
    let radicand = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if radicand < 0.0 {
        return None;
    }
    Some(eta * incident + (eta * cos_i - radicand.sqrt()) * normal)
}
