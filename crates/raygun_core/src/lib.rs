//! Raygun Core - Scene description for the Raygun ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane` (infinite, disc, rectangle),
//!   `TexturedPlane`, `Cuboid`, `Cylinder`
//! - **Groups**: named primitive clusters with a bounding pre-filter
//! - **Scene**: settings, camera, lights and materials, validated by
//!   `SceneBuilder`
//!
//! # Example
//!
//! ```ignore
//! use raygun_core::{Group, Light, Material, Scene, Sphere};
//! use raygun_math::{Color, DVec3};
//!
//! let scene = Scene::builder()
//!     .material(Material::diffuse(Color::WHITE, 1.0))
//!     .light(Light::ambient(Color::splat(0.2)))
//!     .group(
//!         Group::new("ball", DVec3::new(0.0, 0.0, 5.0), false)
//!             .with_primitive(Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, 0)),
//!     )
//!     .build()?;
//! println!("{} objects", scene.object_count());
//! ```

pub mod camera;
pub mod group;
pub mod light;
pub mod material;
pub mod primitive;
pub mod scene;
pub mod settings;
pub mod texture;

// Re-export commonly used types
pub use camera::{Camera, ImagePlane};
pub use group::{Group, GroupBounds};
pub use light::{Light, LightKind};
pub use material::Material;
pub use primitive::{Cuboid, Cylinder, Plane, Primitive, Sphere, TexturedPlane};
pub use scene::{Scene, SceneBuilder, SceneError, SceneResult};
pub use settings::RenderSettings;
pub use texture::{Texture, TextureError, TextureResult};
