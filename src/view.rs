//! Macroquad render glue: turns built [`RenderMesh`]es into GPU-submittable
//! mesh batches.

use crate::map::Map;
use crate::mesh::RenderMesh;
use macroquad::color::WHITE;
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::math::Vec3;
use macroquad::texture::Texture2D;

// Macroquad meshes index with u16, so a large layer may need several
// batches.
const MAX_QUADS_PER_BATCH: usize = u16::MAX as usize / 4;

/// Split a layer mesh into macroquad meshes textured with the tileset atlas,
/// translated by the layer's offset.
pub fn mesh_batches(mesh: &RenderMesh, texture: &Texture2D, offset: Vec3) -> Vec<Mesh> {
    let quads = mesh.quad_count();
    let mut batches = Vec::new();
    let mut start = 0;

    while start < quads {
        let end = (start + MAX_QUADS_PER_BATCH).min(quads);
        let mut vertices = Vec::with_capacity((end - start) * 4);
        let mut indices = Vec::with_capacity((end - start) * 6);

        for quad in start..end {
            for i in quad * 4..quad * 4 + 4 {
                let p = mesh.vertices[i] + offset;
                let uv = mesh.uvs[i];
                vertices.push(Vertex::new(p.x, p.y, p.z, uv.x, uv.y, WHITE));
            }
            let base = ((quad - start) * 4) as u16;
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        batches.push(Mesh {
            vertices,
            indices,
            texture: Some(texture.clone()),
        });
        start = end;
    }

    batches
}

/// Draw every visible, fully generated layer of `map`.
pub fn draw_map(map: &Map, texture: &Texture2D) {
    for layer in map.layers() {
        if !layer.is_visible() {
            continue;
        }
        for batch in mesh_batches(layer.mesh(), texture, layer.offset()) {
            draw_mesh(&batch);
        }
    }
}
