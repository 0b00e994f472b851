use super::showcase::Stage;
use super::{Color, Material, Mesh, Primitive, Transform, Vec3};
use serde::Serialize;

/// Scale applied while the pointer is over the placeholder.
pub const HOVER_SCALE: f64 = 1.1;

pub const PLACEHOLDER_COLOR: Color = Color::rgb(0xD4, 0xC5, 0xA9);

/// Stand-in shown by the product detail viewer: a single colored column that
/// grows slightly while hovered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderModel {
    pub mesh: Mesh,
    pub hovered: bool,
    pub stage: Stage,
}

impl PlaceholderModel {
    pub fn new(color: Color) -> Self {
        Self {
            mesh: Mesh {
                part: "column",
                primitive: Primitive::Cylinder {
                    radius_top: 0.8,
                    radius_bottom: 1.0,
                    height: 2.0,
                    radial_segments: 32,
                },
                transform: Transform::default(),
                material: Material::standard(color),
            },
            hovered: false,
            stage: Stage::detail(),
        }
    }

    pub fn hover(&self, hovered: bool) -> Self {
        let mut next = self.clone();
        next.hovered = hovered;
        next.mesh.transform.scale = if hovered {
            Vec3::splat(HOVER_SCALE)
        } else {
            Vec3::ONE
        };
        next
    }
}

impl Default for PlaceholderModel {
    fn default() -> Self {
        Self::new(PLACEHOLDER_COLOR)
    }
}
