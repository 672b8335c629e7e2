//! Object placement copied from the source object onto the water object.

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Translation, rotation and scale of a document object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub translation: [f32; 3],
    pub rotation: [f32; 4], // Quaternion (x, y, z, w)
    pub scale: [f32; 3],
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    pub const IDENTITY: Self = Self {
        translation: [0.0; 3],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0; 3],
    };

    /// Placement that only moves the object
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation: translation.to_array(),
            ..Self::IDENTITY
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.translation)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_array(self.rotation)
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::from_array(self.scale)
    }

    /// Object-to-world transform
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale(), self.rotation(), self.translation())
    }

    /// Transform a point from object space into world space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.to_affine().transform_point3(point)
    }
}
