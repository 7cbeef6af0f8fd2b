//! Visual layer mesh generation.

use crate::document::TileLayer;
use crate::error::Error;
use crate::task::Progress;
use macroquad::math::{vec2, vec3, Vec2, Vec3};
use std::sync::Arc;

/// Triangle-soup mesh for one visual layer.
///
/// `vertices`, `uvs` and `normals` are parallel arrays; `triangles` indexes
/// into them. Every non-empty cell contributes one quad: 4 vertices, 4 UVs,
/// 6 indices. `normals` stays empty until [`RenderMesh::recompute_normals`]
/// runs, which the layer does as part of installing the mesh.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderMesh {
    /// Quad corner positions in tile units, Y-flipped (row 0 is the top of
    /// the map, so its quad spans Y in `[H-1, H]`).
    pub vertices: Vec<Vec3>,
    /// Texture coordinates into the tileset atlas, bottom-left origin.
    pub uvs: Vec<Vec2>,
    /// Vertex indices, two triangles per quad.
    pub triangles: Vec<u32>,
    /// Per-vertex normals, empty until recomputed.
    pub normals: Vec<Vec3>,
}

impl RenderMesh {
    /// Number of emitted quads.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Recompute per-vertex normals by accumulating triangle face normals.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vec3::ZERO);
        for tri in self.triangles.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.vertices[b] - self.vertices[a])
                .cross(self.vertices[c] - self.vertices[a]);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }
        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }
}

/// Resumable mesh build for one visual layer.
///
/// Walks the tile grid column by column, emitting one quad per non-empty
/// cell, and suspends after every `batch_size` emitted quads. Geometry is
/// identical for every batch size; only the number of suspension points
/// changes.
#[derive(Debug)]
pub struct MeshBuildTask {
    layer: Arc<TileLayer>,
    width: u32,
    height: u32,
    tile_size: u32,
    atlas_width: u32,
    atlas_height: u32,
    batch_size: u32,
    /// Cells visited so far, in traversal order (x outer, y inner).
    cursor: u32,
    mesh: RenderMesh,
}

impl MeshBuildTask {
    /// Create a build task for `layer`. Fails with
    /// [`Error::InvalidLayerSize`] when the gid count does not match
    /// `width * height`. A `batch_size` of 0 disables slicing.
    pub fn new(
        layer: Arc<TileLayer>,
        width: u32,
        height: u32,
        tile_size: u32,
        atlas_width: u32,
        atlas_height: u32,
        batch_size: u32,
    ) -> Result<Self, Error> {
        if layer.gids.len() != (width as usize) * (height as usize) {
            return Err(Error::InvalidLayerSize(layer.name.clone()));
        }
        Ok(Self {
            layer,
            width,
            height,
            tile_size,
            atlas_width,
            atlas_height,
            batch_size,
            cursor: 0,
            mesh: RenderMesh::default(),
        })
    }

    /// Resume generation until the batch budget is spent or the grid is
    /// exhausted.
    pub fn resume(&mut self) -> Progress<RenderMesh> {
        let total = self.width * self.height;
        let mut produced = 0u32;

        while self.cursor < total {
            let x = self.cursor / self.height;
            let y = self.cursor % self.height;
            self.cursor += 1;

            let gid = self.layer.gids[(y * self.width + x) as usize];
            if gid == 0 {
                continue;
            }

            self.emit_quad(x, y, gid - 1);
            produced += 1;
            if produced == self.batch_size {
                return Progress::Pending;
            }
        }

        Progress::Done(std::mem::take(&mut self.mesh))
    }

    fn emit_quad(&mut self, x: u32, y: u32, index: u32) {
        let h = self.height as f32;
        let (xf, yf) = (x as f32, y as f32);
        let base = self.mesh.vertices.len() as u32;

        // Y-flip: Tiled's row 0 is the top of the map.
        self.mesh.vertices.push(vec3(xf, h - yf, 0.0));
        self.mesh.vertices.push(vec3(xf + 1.0, h - yf, 0.0));
        self.mesh.vertices.push(vec3(xf + 1.0, h - yf - 1.0, 0.0));
        self.mesh.vertices.push(vec3(xf, h - yf - 1.0, 0.0));

        // Atlas cell for this tile index, with the row order inverted so it
        // lands in bottom-left-origin UV space.
        let tiles_per_row = self.atlas_width / self.tile_size;
        let texture_x = index % tiles_per_row;
        let texture_y =
            (self.atlas_height / self.tile_size) as i64 - (index / tiles_per_row) as i64 - 1;

        let tile_u = self.tile_size as f32 / self.atlas_width as f32;
        let tile_v = self.tile_size as f32 / self.atlas_height as f32;
        let u0 = texture_x as f32 * tile_u;
        let v0 = texture_y as f32 * tile_v;

        self.mesh.uvs.push(vec2(u0, v0 + tile_v));
        self.mesh.uvs.push(vec2(u0 + tile_u, v0 + tile_v));
        self.mesh.uvs.push(vec2(u0 + tile_u, v0));
        self.mesh.uvs.push(vec2(u0, v0));

        self.mesh
            .triangles
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Build a visual layer mesh in one call, without slicing.
pub fn build_mesh(
    layer: &TileLayer,
    width: u32,
    height: u32,
    tile_size: u32,
    atlas_width: u32,
    atlas_height: u32,
) -> Result<RenderMesh, Error> {
    let mut task = MeshBuildTask::new(
        Arc::new(layer.clone()),
        width,
        height,
        tile_size,
        atlas_width,
        atlas_height,
        0,
    )?;
    loop {
        if let Progress::Done(mesh) = task.resume() {
            return Ok(mesh);
        }
    }
}
