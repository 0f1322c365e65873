//! Procedural ring geometry
//!
//! The ring is a flat annulus in the XZ plane, generated fresh every frame
//! from its authored radii. The texture's U axis sweeps once per segment
//! (a repeating tile around the circumference), V spans inner to outer.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::bodies::PlanetRing;

/// One quad of the ring surface, wound
/// `inner[i-1], outer[i-1], outer[i], inner[i]`
pub struct RingQuad {
    pub positions: [Vec3; 4],
    pub uvs: [[f32; 2]; 4],
}

/// Sample `segments + 1` paired (inner, outer) vertices around the
/// circumference. The first and last pair coincide at angle 0 / 2π, which
/// closes the ring without a seam.
pub fn ring_sample_pairs(
    inner_radius: f32,
    outer_radius: f32,
    segments: usize,
) -> Vec<(Vec3, Vec3)> {
    let mut pairs = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        pairs.push((
            Vec3::new(inner_radius * cos, 0.0, inner_radius * sin),
            Vec3::new(outer_radius * cos, 0.0, outer_radius * sin),
        ));
    }
    pairs
}

/// Build exactly `segments` quads from the `segments + 1` sample pairs
pub fn ring_quads(inner_radius: f32, outer_radius: f32, segments: usize) -> Vec<RingQuad> {
    let pairs = ring_sample_pairs(inner_radius, outer_radius, segments);
    pairs
        .windows(2)
        .map(|pair| {
            let (prev_inner, prev_outer) = pair[0];
            let (inner, outer) = pair[1];
            RingQuad {
                positions: [prev_inner, prev_outer, outer, inner],
                uvs: [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            }
        })
        .collect()
}

/// Triangulate the quads into a renderable mesh
///
/// Adjacent quads share sample angles but not texture coordinates, so each
/// quad contributes its own four vertices.
pub fn ring_mesh(inner_radius: f32, outer_radius: f32, segments: usize) -> Mesh {
    let quads = ring_quads(inner_radius, outer_radius, segments);

    let mut positions = Vec::with_capacity(quads.len() * 4);
    let mut normals = Vec::with_capacity(quads.len() * 4);
    let mut uvs = Vec::with_capacity(quads.len() * 4);
    let mut indices = Vec::with_capacity(quads.len() * 6);

    for (i, quad) in quads.iter().enumerate() {
        let base = (i * 4) as u32;
        positions.extend_from_slice(&quad.positions);
        uvs.extend_from_slice(&quad.uvs);
        normals.extend_from_slice(&[Vec3::Y; 4]);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_indices(Indices::U32(indices));
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}

/// System to rebuild each ring's mesh asset every frame from its authored
/// parameters. The generator is stateless; nothing is cached between
/// frames.
pub fn regenerate_ring_meshes(
    mut meshes: ResMut<Assets<Mesh>>,
    rings: Query<(&PlanetRing, &Mesh3d)>,
) {
    for (ring, mesh3d) in &rings {
        meshes.insert(
            mesh3d.0.id(),
            ring_mesh(ring.inner_radius, ring.outer_radius, ring.segments),
        );
    }
}
