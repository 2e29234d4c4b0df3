//! Scene lights.

use std::fmt;
use std::str::FromStr;

use raygun_math::{Color, DVec3};
use serde::{Deserialize, Serialize};

use crate::scene::SceneError;

/// How a light contributes to shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    /// Added to every hit regardless of position or occlusion
    Ambient,
    /// Emits from a position; diffuse, specular and shadowed
    Point,
}

impl FromStr for LightKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ambient" => Ok(LightKind::Ambient),
            "point" => Ok(LightKind::Point),
            other => Err(SceneError::UnknownLightKind(other.to_string())),
        }
    }
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightKind::Ambient => f.write_str("ambient"),
            LightKind::Point => f.write_str("point"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: DVec3,
    pub color: Color,
    pub kind: LightKind,
}

impl Light {
    pub fn new(position: DVec3, color: Color, kind: LightKind) -> Self {
        Self {
            position,
            color,
            kind,
        }
    }

    /// An ambient light. Its position is never used.
    pub fn ambient(color: Color) -> Self {
        Self::new(DVec3::ZERO, color, LightKind::Ambient)
    }

    pub fn point(position: DVec3, color: Color) -> Self {
        Self::new(position, color, LightKind::Point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("ambient".parse::<LightKind>(), Ok(LightKind::Ambient));
        assert_eq!("point".parse::<LightKind>(), Ok(LightKind::Point));
        assert_eq!(
            "spot".parse::<LightKind>(),
            Err(SceneError::UnknownLightKind("spot".to_string()))
        );
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in [LightKind::Ambient, LightKind::Point] {
            assert_eq!(kind.to_string().parse::<LightKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_constructors() {
        let ambient = Light::ambient(Color::splat(0.2));
        assert_eq!(ambient.kind, LightKind::Ambient);

        let point = Light::point(DVec3::new(1.0, 2.0, 3.0), Color::WHITE);
        assert_eq!(point.kind, LightKind::Point);
        assert_eq!(point.position, DVec3::new(1.0, 2.0, 3.0));
    }
}
