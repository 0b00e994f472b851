//! One assembler per [`StatueKind`](super::StatueKind).
//!
//! Offsets are in model units before the group scale is applied.

use super::{Color, Material, Mesh, Primitive, Transform, Vec3};

fn unit_box() -> Primitive {
    Primitive::Box {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
    }
}

fn cylinder(radius_top: f64, radius_bottom: f64, height: f64) -> Primitive {
    Primitive::Cylinder {
        radius_top,
        radius_bottom,
        height,
        radial_segments: 8,
    }
}

fn sphere(radius: f64) -> Primitive {
    Primitive::Sphere {
        radius,
        width_segments: 16,
        height_segments: 16,
    }
}

fn mesh(part: &'static str, primitive: Primitive, transform: Transform, color: Color) -> Mesh {
    Mesh {
        part,
        primitive,
        transform,
        material: Material::standard(color),
    }
}

/// Four legs at `(±x, -0.8, ±z)`, front pair first.
fn legs(x: f64, z: f64, leg: Primitive, scale: Vec3, color: Color) -> Vec<Mesh> {
    [(-x, z), (x, z), (-x, -z), (x, -z)]
        .into_iter()
        .map(|(lx, lz)| mesh("leg", leg, Transform::at(Vec3(lx, -0.8, lz), scale), color))
        .collect()
}

pub fn horse(color: Color) -> Vec<Mesh> {
    let mut meshes = vec![mesh(
        "body",
        unit_box(),
        Transform::at(Vec3::ZERO, Vec3(1.5, 0.8, 2.2)),
        color,
    )];
    meshes.extend(legs(0.5, 0.8, cylinder(0.1, 0.1, 1.0), Vec3(0.2, 1.0, 0.2), color));
    meshes.push(mesh(
        "neck",
        cylinder(0.3, 0.4, 1.2),
        Transform::at(Vec3(0.0, 0.8, 1.2), Vec3(0.4, 1.2, 0.4)),
        color,
    ));
    meshes.push(mesh(
        "head",
        unit_box(),
        Transform::at(Vec3(0.0, 1.8, 1.4), Vec3(0.6, 0.5, 0.8)),
        color,
    ));
    meshes
}

pub fn lion(color: Color) -> Vec<Mesh> {
    let mut meshes = vec![mesh(
        "body",
        sphere(0.8),
        Transform::at(Vec3::ZERO, Vec3(1.2, 0.8, 1.8)),
        color,
    )];
    meshes.extend(legs(0.4, 0.6, cylinder(0.15, 0.15, 1.0), Vec3(0.25, 1.0, 0.25), color));
    meshes.push(mesh(
        "head",
        sphere(0.6),
        Transform::at(Vec3(0.0, 1.2, 1.0), Vec3(1.0, 1.0, 0.8)),
        color,
    ));
    // The mane is duller than the rest of the cast.
    let mut mane = mesh(
        "mane",
        sphere(0.7),
        Transform::at(Vec3(0.0, 1.2, 0.8), Vec3(1.4, 1.4, 1.2)),
        color,
    );
    mane.material.metalness = 0.2;
    mane.material.roughness = 0.6;
    meshes.push(mane);
    meshes
}

pub fn woman(color: Color) -> Vec<Mesh> {
    let arm = cylinder(0.15, 0.15, 1.0);
    let arm_scale = Vec3(0.2, 1.0, 0.2);

    vec![
        mesh(
            "torso",
            cylinder(0.6, 0.8, 1.5),
            Transform::at(Vec3(0.0, 0.5, 0.0), Vec3(0.8, 1.5, 0.6)),
            color,
        ),
        mesh(
            "head",
            sphere(0.5),
            Transform::at(Vec3(0.0, 1.8, 0.0), Vec3::splat(0.6)),
            color,
        ),
        mesh(
            "arm",
            arm,
            Transform::at(Vec3(-0.8, 0.8, 0.0), arm_scale).rotated(Vec3(0.0, 0.0, -0.3)),
            color,
        ),
        mesh(
            "arm",
            arm,
            Transform::at(Vec3(0.8, 0.8, 0.0), arm_scale).rotated(Vec3(0.0, 0.0, 0.3)),
            color,
        ),
        mesh(
            "skirt",
            cylinder(1.0, 0.8, 1.0),
            Transform::at(Vec3(0.0, -0.8, 0.0), Vec3(1.2, 1.0, 1.2)),
            color,
        ),
    ]
}
