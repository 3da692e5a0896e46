//! Intersection configuration

/// Tunables for the ray-triangle tests
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntersectConfig {
    /// Determinant magnitude below which a ray counts as parallel to the
    /// triangle plane
    pub triangle_epsilon: f32,

    /// Reject triangles whose winding faces away from the ray
    pub cull_backface: bool,
}

impl Default for IntersectConfig {
    fn default() -> Self {
        Self {
            triangle_epsilon: 1e-6,
            cull_backface: false,
        }
    }
}

impl IntersectConfig {
    /// Configuration for primary rays against closed meshes
    pub fn fast() -> Self {
        Self {
            cull_backface: true,
            ..Default::default()
        }
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.triangle_epsilon = epsilon;
        self
    }

    pub fn with_backface_culling(mut self, cull: bool) -> Self {
        self.cull_backface = cull;
        self
    }
}
