//! Simple ray tracer example.
//!
//! Builds a small scene in code, renders it on every core and saves a PNG.
//! Run with `RUST_LOG=info` to see progress.

use std::sync::Arc;

use anyhow::Context;
use raygun_core::{
    Camera, Cuboid, Cylinder, Group, Light, Material, Plane, RenderSettings, Scene, Sphere,
    Texture, TexturedPlane,
};
use raygun_math::{Color, DVec3};
use raygun_renderer::{render, RenderOptions};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = build_scene().context("Failed to build scene")?;
    let output = render(&scene, &RenderOptions::default())?;

    println!(
        "Rendered {} objects in {:?} ({} rays, {} shadow rays, depth {})",
        scene.object_count(),
        output.elapsed,
        output.stats.rays,
        output.stats.shadow_rays,
        output.stats.max_depth
    );

    let filename = "output.png";
    output
        .image
        .to_image()
        .save(filename)
        .with_context(|| format!("Failed to save {filename}"))?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> anyhow::Result<Scene> {
    let settings = RenderSettings::default()
        .with_resolution(640, 400)
        .with_oversampling(2)
        .with_trace_depth(5);
    let camera = Camera::new(
        DVec3::new(0.0, 1.5, -2.0),
        DVec3::new(0.0, 0.0, 8.0),
        DVec3::Y,
    );

    let mut builder = Scene::builder().settings(settings).camera(camera);

    let floor = builder.add_material(Material::diffuse(Color::new(0.8, 0.8, 0.75), 0.9));
    let red = builder.add_material(
        Material::diffuse(Color::new(0.9, 0.2, 0.15), 0.8).with_specular(0.5, 40.0),
    );
    let chrome = builder.add_material(
        Material::diffuse(Color::splat(0.9), 0.1)
            .with_specular(0.8, 80.0)
            .with_reflection(0.8),
    );
    let glass = builder.add_material(
        Material::diffuse(Color::WHITE, 0.05)
            .with_specular(0.9, 120.0)
            .with_transmission(0.85, 1.5),
    );
    let poster = builder.add_material(Material::diffuse(Color::WHITE, 1.0));

    builder.add_light(Light::ambient(Color::splat(0.08)));
    builder.add_light(Light::point(DVec3::new(-4.0, 6.0, 0.0), Color::splat(0.8)));
    builder.add_light(Light::point(DVec3::new(5.0, 4.0, 2.0), Color::new(0.3, 0.3, 0.45)));

    let ground = builder.add_group(Group::new("ground", DVec3::ZERO, true));
    ground.add(Box::new(Plane::new(DVec3::new(0.0, -1.0, 0.0), DVec3::Y, floor)));

    let objects = builder.add_group(Group::new("objects", DVec3::new(0.0, 0.0, 8.0), false));
    objects.add(Box::new(Sphere::new(DVec3::new(-1.8, 0.0, 8.0), 1.0, chrome)));
    objects.add(Box::new(Sphere::new(DVec3::new(0.6, -0.3, 6.5), 0.7, glass)));
    objects.add(Box::new(Cuboid::new(DVec3::new(2.2, -0.4, 9.0), DVec3::splat(1.2), red)));
    objects.add(Box::new(Cylinder::new(
        DVec3::new(0.3, -1.0, 10.0),
        DVec3::Y,
        2.5,
        0.5,
        red,
    )));

    builder
        .group(
            Group::new("poster", DVec3::new(0.0, 2.0, 14.0), false).with_primitive(
                TexturedPlane::new(
                    DVec3::new(0.0, 2.0, 14.0),
                    -DVec3::Z,
                    DVec3::Y,
                    8.0,
                    5.0,
                    Arc::new(checkerboard(8)?),
                    poster,
                ),
            ),
        )
        .build()
        .map_err(Into::into)
}

/// An `n` x `n` checkerboard with transparent dark squares.
fn checkerboard(n: u32) -> anyhow::Result<Texture> {
    let pixels = (0..n * n)
        .map(|i| {
            if (i % n + i / n) % 2 == 0 {
                [0.95, 0.9, 0.3, 1.0]
            } else {
                [0.0, 0.0, 0.0, 0.0]
            }
        })
        .collect();
    Ok(Texture::new(n, n, pixels, "checkerboard")?)
}
