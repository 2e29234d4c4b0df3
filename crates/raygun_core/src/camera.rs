//! Camera placement and the image-plane basis derived from it.

use raygun_math::DVec3;

use crate::RenderSettings;

/// Camera position and orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: DVec3,
    pub look_at: DVec3,
    pub up: DVec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            look_at: DVec3::Z,
            up: DVec3::Y,
        }
    }
}

impl Camera {
    pub fn new(position: DVec3, look_at: DVec3, up: DVec3) -> Self {
        Self {
            position,
            look_at,
            up,
        }
    }

    /// Unnormalized view direction.
    pub fn view(&self) -> DVec3 {
        self.look_at - self.position
    }
}

/// Basis vectors that map sub-sample grid coordinates to ray directions.
///
/// The direction through grid point `(gx, gy)` is
/// `gx * horizontal + gy * vertical + origin`. Grid `x` grows to the right of
/// the image and grid `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlane {
    /// Unit step along an image row
    pub horizontal: DVec3,
    /// Unit step down an image column
    pub vertical: DVec3,
    /// Direction to the top-left corner of the grid
    pub origin: DVec3,
}

impl ImagePlane {
    /// Derive the basis from the camera and field of view.
    ///
    /// Returns `None` when the camera looks at its own position or its up
    /// vector is parallel to the view direction.
    pub fn derive(camera: &Camera, settings: &RenderSettings) -> Option<Self> {
        let look = camera.view();
        let horizontal = look.cross(camera.up).normalize_or_zero();
        let vertical = look.cross(horizontal).normalize_or_zero();
        if horizontal == DVec3::ZERO || vertical == DVec3::ZERO {
            return None;
        }

        let grid_width = settings.grid_width() as f64;
        let grid_height = settings.grid_height() as f64;
        let focal_length = grid_width / (2.0 * (0.5 * settings.vision_field).to_radians().tan());

        let origin = look.normalize() * focal_length
            - 0.5 * (grid_width * horizontal + grid_height * vertical);

        Some(Self {
            horizontal,
            vertical,
            origin,
        })
    }

    /// Unnormalized direction through sub-sample grid point `(gx, gy)`.
    #[inline]
    pub fn direction(&self, gx: f64, gy: f64) -> DVec3 {
        gx * self.horizontal + gy * self.vertical + self.origin
    }
}
