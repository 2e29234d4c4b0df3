//! Tests for the recursive shading engine
//!
//! Each test builds a tiny scene and traces hand-picked rays through it, so
//! expected colors can be worked out on paper.

use std::sync::Arc;

use raygun_core::{
    Group, Light, Material, Plane, RenderSettings, Scene, Sphere, Texture, TexturedPlane,
};
use raygun_math::{Color, DVec3, Ray, MAX_DIST};
use raygun_renderer::Tracer;

fn assert_color_close(actual: Color, expected: Color) {
    let diff = (actual.r - expected.r).abs()
        + (actual.g - expected.g).abs()
        + (actual.b - expected.b).abs();
    assert!(diff < 1e-9, "expected {expected:?}, got {actual:?}");
}

/// Receiver sphere in front of the camera, a point light above the camera,
/// and optionally an occluder halfway along the shadow ray.
fn shadow_scene(occluder_transmission: Option<f64>, shadows: bool) -> Scene {
    let mut builder = Scene::builder()
        .settings(RenderSettings::default().with_shadows(shadows))
        .material(Material::diffuse(Color::WHITE, 1.0))
        .light(Light::point(DVec3::new(0.0, 10.0, 0.0), Color::WHITE))
        .group(
            Group::new("receiver", DVec3::new(0.0, 0.0, 5.0), false)
                .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, 0)),
        );

    if let Some(transmission) = occluder_transmission {
        // Hit point is (0, 0, 4); the light is at (0, 10, 0)
        builder = builder
            .material(Material::diffuse(Color::WHITE, 1.0).with_transmission(transmission, 1.0))
            .group(
                Group::new("occluder", DVec3::new(0.0, 5.0, 2.0), false)
                    .with_primitive(Sphere::new(DVec3::new(0.0, 5.0, 2.0), 0.5, 1)),
            );
    }
    builder.build().unwrap()
}

fn center_ray() -> Ray {
    Ray::new(DVec3::ZERO, DVec3::Z)
}

/// Test: a ray that hits nothing is black and leaves the record empty
#[test]
fn test_total_miss_is_background() {
    let scene = shadow_scene(None, true);
    let mut tracer = Tracer::new(&scene);
    let ray = Ray::new(DVec3::ZERO, -DVec3::Z);

    let rec = tracer.nearest_hit(&ray);
    assert_eq!(rec.t, MAX_DIST);
    assert!(rec.id.is_none());
    assert_eq!(tracer.trace(&ray, 1), Color::BLACK);
}

/// Test: unshadowed diffuse term is light * kd * cos * base color
#[test]
fn test_diffuse_term() {
    let scene = shadow_scene(None, true);
    let mut tracer = Tracer::new(&scene);

    let cos = 4.0 / 116.0_f64.sqrt();
    assert_color_close(tracer.trace(&center_ray(), 1), Color::splat(cos));
    assert_eq!(tracer.stats().shadow_rays, 1);
}

/// Test: an opaque occluder removes the light, a half transparent one halves it
#[test]
fn test_occluder_transmission_scales_light() {
    let lit = Tracer::new(&shadow_scene(None, true)).trace(&center_ray(), 1);
    let blocked = Tracer::new(&shadow_scene(Some(0.0), true)).trace(&center_ray(), 1);
    let half = Tracer::new(&shadow_scene(Some(0.5), true)).trace(&center_ray(), 1);

    assert!(lit.r > 0.0);
    assert_eq!(blocked, Color::BLACK);
    assert_color_close(half, lit * 0.5);
}

/// Test: with shadows off occluders are ignored
#[test]
fn test_shadows_disabled() {
    let lit = Tracer::new(&shadow_scene(None, false)).trace(&center_ray(), 1);
    let scene = shadow_scene(Some(0.0), false);
    let mut tracer = Tracer::new(&scene);

    assert_color_close(tracer.trace(&center_ray(), 1), lit);
    assert_eq!(tracer.stats().shadow_rays, 0);
}

/// Test: occluders beyond the light do not shadow
#[test]
fn test_occluder_behind_light_is_ignored() {
    let scene = Scene::builder()
        .material(Material::diffuse(Color::WHITE, 1.0))
        .light(Light::point(DVec3::new(0.0, 10.0, 0.0), Color::WHITE))
        .group(
            Group::new("receiver", DVec3::new(0.0, 0.0, 5.0), false)
                .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, 0)),
        )
        .group(
            Group::new("far", DVec3::new(0.0, 20.0, -4.0), false)
                .with_primitive(Sphere::new(DVec3::new(0.0, 20.0, -4.0), 0.5, 0)),
        )
        .build()
        .unwrap();

    let lit = Tracer::new(&shadow_scene(None, true)).trace(&center_ray(), 1);
    assert_color_close(Tracer::new(&scene).trace(&center_ray(), 1), lit);
}

/// Receiver and an opaque occluder on its light path share one group,
/// optionally next to a bystander group that is on no ray path.
fn shared_group_scene(with_bystander: bool) -> Scene {
    let mut builder = Scene::builder()
        .material(Material::diffuse(Color::WHITE, 1.0))
        .material(Material::diffuse(Color::WHITE, 1.0).with_transmission(0.0, 1.0))
        .light(Light::point(DVec3::new(0.0, 10.0, 0.0), Color::WHITE))
        .group(
            Group::new("shared", DVec3::new(0.0, 0.0, 5.0), false)
                .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, 0))
                .with_primitive(Sphere::new(DVec3::new(0.0, 5.0, 2.0), 0.5, 1)),
        );
    if with_bystander {
        builder = builder.group(
            Group::new("bystander", DVec3::new(0.0, -20.0, 5.0), false)
                .with_primitive(Sphere::new(DVec3::new(0.0, -20.0, 5.0), 0.5, 0)),
        );
    }
    builder.build().unwrap()
}

/// Test: a group only shadows its own primitives when it is the only group
#[test]
fn test_own_group_shadows_only_in_single_group_scene() {
    let single = Tracer::new(&shared_group_scene(false)).trace(&center_ray(), 1);
    assert_eq!(single, Color::BLACK);

    let several = Tracer::new(&shared_group_scene(true)).trace(&center_ray(), 1);
    let cos = 4.0 / 116.0_f64.sqrt();
    assert_color_close(several, Color::splat(cos));
}

/// Test: specular highlight when the light sits at the viewer
#[test]
fn test_specular_term() {
    let material = Material::diffuse(Color::WHITE, 0.0).with_specular(0.5, 10.0);
    let scene = Scene::builder()
        .material(material)
        .light(Light::point(DVec3::ZERO, Color::WHITE))
        .group(
            Group::new("shiny", DVec3::new(0.0, 0.0, 5.0), false)
                .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, 0)),
        )
        .build()
        .unwrap();

    assert_color_close(Tracer::new(&scene).trace(&center_ray(), 1), Color::splat(0.5));
}

/// Test: facing mirrors stop recursing at the trace depth
#[test]
fn test_mirror_recursion_is_bounded() {
    for depth in [1, 3, 5] {
        let mirror = Material::diffuse(Color::WHITE, 1.0).with_reflection(1.0);
        let scene = Scene::builder()
            .settings(RenderSettings::default().with_trace_depth(depth))
            .material(mirror)
            .light(Light::ambient(Color::splat(0.1)))
            .group(
                Group::new("front", DVec3::new(0.0, 0.0, 5.0), false)
                    .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, 0)),
            )
            .group(
                Group::new("back", DVec3::new(0.0, 0.0, -5.0), false)
                    .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0, 0)),
            )
            .build()
            .unwrap();

        let mut tracer = Tracer::new(&scene);
        let color = tracer.trace(&center_ray(), 1);

        assert_eq!(tracer.stats().max_depth, depth);
        assert_eq!(tracer.stats().rays, depth as u64);
        // Every level adds the ambient light once
        assert_color_close(color, Color::splat(0.1 * depth as f64));
    }
}

/// Test: a transparent sphere with index 1 passes the backdrop straight through
#[test]
fn test_refraction_through_sphere() {
    let glass = Material::diffuse(Color::WHITE, 0.0).with_transmission(1.0, 1.0);
    let scene = Scene::builder()
        .settings(RenderSettings::default().with_trace_depth(3))
        .material(glass)
        .material(Material::diffuse(Color::WHITE, 1.0))
        .light(Light::ambient(Color::splat(0.2)))
        .group(
            Group::new("glass", DVec3::new(0.0, 0.0, 5.0), false)
                .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, 0)),
        )
        .group(
            Group::new("backdrop", DVec3::ZERO, true)
                .with_primitive(Plane::new(DVec3::new(0.0, 0.0, 10.0), -DVec3::Z, 1)),
        )
        .build()
        .unwrap();

    let mut tracer = Tracer::new(&scene);
    let color = tracer.trace(&center_ray(), 1);

    // Front surface, back surface, backdrop
    assert_eq!(tracer.stats().rays, 3);
    assert_color_close(color, Color::splat(0.6));
}

/// Test: textured plane shades with its texel and lets transparent texels through
#[test]
fn test_textured_plane_shading() {
    let texture = Texture::new(
        2,
        1,
        vec![[1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.0]],
        "half",
    )
    .unwrap();

    let scene = Scene::builder()
        .material(Material::diffuse(Color::WHITE, 1.0))
        .light(Light::point(DVec3::ZERO, Color::WHITE))
        .group(Group::new("poster", DVec3::new(0.0, 0.0, 4.0), false).with_primitive(
            TexturedPlane::new(
                DVec3::new(0.0, 0.0, 4.0),
                -DVec3::Z,
                DVec3::Y,
                2.0,
                2.0,
                Arc::new(texture),
                0,
            ),
        ))
        .group(
            Group::new("backdrop", DVec3::ZERO, true)
                .with_primitive(Plane::new(DVec3::new(0.0, 0.0, 10.0), -DVec3::Z, 0)),
        )
        .build()
        .unwrap();

    let mut tracer = Tracer::new(&scene);

    // Looking down +z, +x is the left of the image: the opaque red texel
    let left = tracer.trace(&Ray::new(DVec3::ZERO, DVec3::new(0.5, 0.0, 4.0)), 1);
    let cos = 4.0 / 16.25_f64.sqrt();
    assert_color_close(left, Color::new(cos, 0.0, 0.0));

    // The transparent texel shows the white backdrop, unshadowed
    let right = tracer.trace(&Ray::new(DVec3::ZERO, DVec3::new(-0.5, 0.0, 4.0)), 1);
    assert_color_close(right, Color::splat(cos));
}
