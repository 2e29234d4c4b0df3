//! The scene: everything a render reads, validated and frozen.
//!
//! A [`Scene`] is assembled with a [`SceneBuilder`]. `build` checks the
//! description, derives the image plane and computes group bounds; after
//! that the scene is only ever handed out by shared reference.

use log::{info, warn};
use raygun_math::PrimitiveId;
use thiserror::Error;

use crate::camera::{Camera, ImagePlane};
use crate::group::Group;
use crate::light::Light;
use crate::material::Material;
use crate::primitive::Primitive;
use crate::settings::RenderSettings;

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Image size must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Oversampling must be at least 1")]
    ZeroOversampling,

    #[error("Field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Render slice {start}..{end} is not inside image height {height}")]
    InvalidRenderSlice { start: u32, end: u32, height: u32 },

    #[error("Camera basis is degenerate (look-at equals position, or up is parallel to the view)")]
    DegenerateCamera,

    #[error(
        "Primitive {primitive} in group '{group}' uses material {index}, \
         but only {count} materials are defined"
    )]
    MaterialOutOfRange {
        group: String,
        primitive: usize,
        index: usize,
        count: usize,
    },

    #[error("Unknown light kind '{0}'")]
    UnknownLightKind(String),
}

/// Result type for scene building.
pub type SceneResult<T> = Result<T, SceneError>;

/// A validated, immutable scene.
#[derive(Debug)]
pub struct Scene {
    settings: RenderSettings,
    camera: Camera,
    image_plane: ImagePlane,
    groups: Vec<Group>,
    lights: Vec<Light>,
    materials: Vec<Material>,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn image_plane(&self) -> &ImagePlane {
        &self.image_plane
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Get a material by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Every primitive's index was checked
    /// by [`SceneBuilder::build`], so this only fails for indices that did
    /// not come from the scene.
    pub fn material(&self, index: usize) -> &Material {
        match self.materials.get(index) {
            Some(material) => material,
            None => panic!(
                "material index {index} out of range ({} materials)",
                self.materials.len()
            ),
        }
    }

    /// Get a primitive by id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not name a primitive of this scene.
    pub fn primitive(&self, id: PrimitiveId) -> &dyn Primitive {
        match self
            .groups
            .get(id.group)
            .and_then(|g| g.primitives().get(id.primitive))
        {
            Some(primitive) => primitive.as_ref(),
            None => panic!("primitive {id:?} does not exist in this scene"),
        }
    }

    /// Total number of primitives across all groups.
    pub fn object_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

/// Assembles a [`Scene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    settings: RenderSettings,
    camera: Camera,
    image_plane: Option<ImagePlane>,
    groups: Vec<Group>,
    lights: Vec<Light>,
    materials: Vec<Material>,
}

impl SceneBuilder {
    pub fn settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Use a precomputed image plane instead of deriving one from the camera.
    pub fn image_plane(mut self, image_plane: ImagePlane) -> Self {
        self.image_plane = Some(image_plane);
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Add a material, returning its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add a group, returning it so primitives can be appended.
    pub fn add_group(&mut self, group: Group) -> &mut Group {
        self.groups.push(group);
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Validate and freeze the scene.
    pub fn build(mut self) -> SceneResult<Scene> {
        self.validate()?;

        let image_plane = match self.image_plane {
            Some(plane) => plane,
            None => ImagePlane::derive(&self.camera, &self.settings)
                .ok_or(SceneError::DegenerateCamera)?,
        };

        for group in &mut self.groups {
            group.calc_bounds();
        }

        let scene = Scene {
            settings: self.settings,
            camera: self.camera,
            image_plane,
            groups: self.groups,
            lights: self.lights,
            materials: self.materials,
        };

        info!(
            "Scene built: {}x{}, {} groups, {} objects, {} lights, {} materials",
            scene.settings.width,
            scene.settings.height,
            scene.groups.len(),
            scene.object_count(),
            scene.lights.len(),
            scene.materials.len()
        );

        Ok(scene)
    }

    fn validate(&self) -> SceneResult<()> {
        let s = &self.settings;
        if s.width == 0 || s.height == 0 {
            return Err(SceneError::EmptyImage {
                width: s.width,
                height: s.height,
            });
        }
        if s.oversampling == 0 {
            return Err(SceneError::ZeroOversampling);
        }
        if !(s.vision_field > 0.0 && s.vision_field < 180.0) {
            return Err(SceneError::InvalidFieldOfView(s.vision_field));
        }

        let slice = s.render_slice();
        if slice.start > slice.end || slice.end > s.height {
            return Err(SceneError::InvalidRenderSlice {
                start: slice.start,
                end: slice.end,
                height: s.height,
            });
        }

        let count = self.materials.len();
        for group in &self.groups {
            if group.is_empty() {
                warn!("Group '{}' has no primitives", group.name());
            }
            for (i, primitive) in group.primitives().iter().enumerate() {
                let index = primitive.material();
                if index >= count {
                    return Err(SceneError::MaterialOutOfRange {
                        group: group.name().to_string(),
                        primitive: i,
                        index,
                        count,
                    });
                }
            }
        }

        for (i, material) in self.materials.iter().enumerate() {
            if material.is_transparent() && material.ior == 0.0 {
                warn!(
                    "Material {i} is transparent but has an index of refraction of 0; \
                     it will not refract"
                );
            }
        }

        Ok(())
    }
}
