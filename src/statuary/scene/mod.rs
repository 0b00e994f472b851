//! # Scene
//!
//! Procedural statues built from boxes, cylinders and spheres. There are no
//! assets: each [`StatueKind`] has one assembler in [`assembly`] that places a
//! fixed set of primitives, parameterized only by a color and a uniform scale.
//!
//! A [`StatueModel`] is a scene-graph group. It can be animated frame by frame
//! with [`StatueModel::tick`], serialized with serde, or printed as an outline.

use crate::error::{Result, StoreError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub mod assembly;
pub mod placeholder;
pub mod showcase;

/// Rotation applied around Y on every frame.
pub const SPIN_PER_FRAME: f64 = 0.005;

/// Amplitude of the vertical bob of an active model.
pub const BOB_AMPLITUDE: f64 = 0.1;

/// Frame rate used when simulating animation outside a render loop.
pub const FRAMES_PER_SECOND: f64 = 60.0;

pub const DEFAULT_METALNESS: f64 = 0.3;
pub const DEFAULT_ROUGHNESS: f64 = 0.4;

/// The closed set of statues the viewer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatueKind {
    Horse,
    Lion,
    Woman,
}

impl StatueKind {
    pub const ALL: [StatueKind; 3] = [StatueKind::Horse, StatueKind::Lion, StatueKind::Woman];

    pub fn as_str(self) -> &'static str {
        match self {
            StatueKind::Horse => "horse",
            StatueKind::Lion => "lion",
            StatueKind::Woman => "woman",
        }
    }
}

impl fmt::Display for StatueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatueKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "horse" => Ok(StatueKind::Horse),
            "lion" => Ok(StatueKind::Lion),
            "woman" => Ok(StatueKind::Woman),
            _ => Err(StoreError::UnknownStatueKind(s.to_string())),
        }
    }
}

/// An sRGB color, written `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StoreError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A 3-component vector, serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3(pub f64, pub f64, pub f64);

impl Vec3 {
    pub const ZERO: Vec3 = Vec3(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3(1.0, 1.0, 1.0);

    pub const fn splat(v: f64) -> Self {
        Vec3(v, v, v)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const fn at(position: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale,
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO, Vec3::ONE)
    }
}

/// Geometry of a single mesh, with the constructor arguments of the shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: u32,
    },
    Sphere {
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    },
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Box { .. } => "box",
            Primitive::Cylinder { .. } => "cylinder",
            Primitive::Sphere { .. } => "sphere",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Box {
                width,
                height,
                depth,
            } => write!(f, "{} [{}, {}, {}]", self.name(), width, height, depth),
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            } => write!(
                f,
                "{} [{}, {}, {}, {}]",
                self.name(),
                radius_top, radius_bottom, height, radial_segments
            ),
            Primitive::Sphere {
                radius,
                width_segments,
                height_segments,
            } => write!(
                f,
                "{} [{}, {}, {}]",
                self.name(),
                radius, width_segments, height_segments
            ),
        }
    }
}

/// Standard surface: a base color plus two scalar parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub metalness: f64,
    pub roughness: f64,
}

impl Material {
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            metalness: DEFAULT_METALNESS,
            roughness: DEFAULT_ROUGHNESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub part: &'static str,
    pub primitive: Primitive,
    pub transform: Transform,
    pub material: Material,
}

/// Caption floating under the active model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub title: String,
    pub price: String,
    pub position: Vec3,
}

/// An assembled statue: a group transform over its meshes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatueModel {
    pub kind: StatueKind,
    pub transform: Transform,
    pub meshes: Vec<Mesh>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

/// Builds the statue for `kind` in `color`, scaled uniformly by `scale`.
pub fn assemble(kind: StatueKind, color: Color, scale: f64) -> StatueModel {
    let meshes = match kind {
        StatueKind::Horse => assembly::horse(color),
        StatueKind::Lion => assembly::lion(color),
        StatueKind::Woman => assembly::woman(color),
    };
    log::debug!("assembled {} from {} meshes", kind, meshes.len());

    StatueModel {
        kind,
        transform: Transform::at(Vec3::ZERO, Vec3::splat(scale)),
        meshes,
        active: false,
        label: None,
    }
}

impl StatueModel {
    /// Marks the model as the focused one; active models bob and show a label.
    pub fn activate(mut self, title: &str, price: &str) -> Self {
        self.active = true;
        self.label = Some(Label {
            title: title.to_string(),
            price: price.to_string(),
            position: Vec3(0.0, -2.5, 0.0),
        });
        self
    }

    /// Advances one animation frame. `elapsed` is wall-clock seconds since the
    /// scene started.
    pub fn tick(&mut self, elapsed: f64) {
        self.transform.rotation.1 += SPIN_PER_FRAME;
        if self.active {
            self.transform.position.1 = elapsed.sin() * BOB_AMPLITUDE;
        }
    }

    /// Runs `frames` ticks at [`FRAMES_PER_SECOND`].
    pub fn animate(&mut self, frames: u32) {
        for frame in 1..=frames {
            self.tick(f64::from(frame) / FRAMES_PER_SECOND);
        }
    }

    /// Indented scene-graph listing, one line per mesh.
    pub fn outline(&self) -> String {
        let t = &self.transform;
        let mut out = format!(
            "{} group  position {}  rotation {}  scale {}\n",
            self.kind,
            round3(t.position),
            round3(t.rotation),
            t.scale
        );
        for mesh in &self.meshes {
            out.push_str(&format!(
                "  {:<10} {:<28} at {}  scale {}",
                mesh.part,
                mesh.primitive.to_string(),
                mesh.transform.position,
                mesh.transform.scale
            ));
            if mesh.transform.rotation != Vec3::ZERO {
                out.push_str(&format!("  rotation {}", mesh.transform.rotation));
            }
            out.push('\n');
        }
        if let Some(label) = &self.label {
            out.push_str(&format!(
                "  label      \"{} {}\" at {}\n",
                label.title, label.price, label.position
            ));
        }
        out
    }
}

fn round3(v: Vec3) -> Vec3 {
    let r = |x: f64| (x * 1000.0).round() / 1000.0;
    Vec3(r(v.0), r(v.1), r(v.2))
}
