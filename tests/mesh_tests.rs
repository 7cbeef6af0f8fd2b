// tests/mesh_tests.rs

use macroquad::math::{vec2, vec3};
use macroquad_tmx::{build_mesh, Error, MeshBuildTask, Progress, TileLayer};
use std::sync::Arc;

fn layer(gids: &[u32]) -> TileLayer {
    TileLayer {
        name: "L".into(),
        gids: gids.to_vec(),
    }
}

#[test]
fn empty_cells_emit_no_geometry() {
    // 2x2 layer with two empty cells: exactly 2 quads, 8 vertices, 12 indices.
    let mesh = build_mesh(&layer(&[0, 1, 0, 2]), 2, 2, 32, 64, 64).unwrap();
    assert_eq!(mesh.quad_count(), 2);
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.uvs.len(), 8);
    assert_eq!(mesh.triangles.len(), 12);
}

#[test]
fn fully_empty_layer_emits_nothing() {
    let mesh = build_mesh(&layer(&[0, 0, 0, 0]), 2, 2, 32, 64, 64).unwrap();
    assert_eq!(mesh.quad_count(), 0);
    assert!(mesh.triangles.is_empty());
}

#[test]
fn vertex_y_is_flipped_per_row() {
    // Height 3: a tile in row 0 has top-left vertex Y = 3, row 2 has Y = 1.
    let top = build_mesh(&layer(&[3, 0, 0]), 1, 3, 32, 64, 64).unwrap();
    assert_eq!(top.vertices[0], vec3(0.0, 3.0, 0.0));
    assert_eq!(top.vertices[2], vec3(1.0, 2.0, 0.0));

    let bottom = build_mesh(&layer(&[0, 0, 3]), 1, 3, 32, 64, 64).unwrap();
    assert_eq!(bottom.vertices[0], vec3(0.0, 1.0, 0.0));
    assert_eq!(bottom.vertices[2], vec3(1.0, 0.0, 0.0));
}

#[test]
fn uv_origin_inverts_atlas_rows() {
    // gid 1 (index 0) in a 2x2-tiles-per-row 64x64 atlas with 32px tiles:
    // texture cell (0, 1), so the V origin lands at 0.5.
    let mesh = build_mesh(&layer(&[1]), 1, 1, 32, 64, 64).unwrap();
    assert_eq!(mesh.uvs[0], vec2(0.0, 1.0));
    assert_eq!(mesh.uvs[1], vec2(0.5, 1.0));
    assert_eq!(mesh.uvs[2], vec2(0.5, 0.5));
    assert_eq!(mesh.uvs[3], vec2(0.0, 0.5));
}

#[test]
fn uv_cell_for_second_atlas_row() {
    // gid 3 (index 2) wraps to atlas cell (0, 1) -> texture_y = 0.
    let mesh = build_mesh(&layer(&[3]), 1, 1, 32, 64, 64).unwrap();
    assert_eq!(mesh.uvs[3], vec2(0.0, 0.0));
    assert_eq!(mesh.uvs[0], vec2(0.0, 0.5));
}

#[test]
fn triangles_index_relative_to_quad_base() {
    let mesh = build_mesh(&layer(&[1, 1]), 2, 1, 32, 64, 64).unwrap();
    assert_eq!(
        mesh.triangles,
        vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]
    );
}

#[test]
fn geometry_is_independent_of_batch_size() {
    let gids = [1, 0, 2, 3, 0, 4, 1, 2, 0, 3, 4, 1, 0, 0, 2, 1];
    let reference = build_mesh(&layer(&gids), 4, 4, 32, 64, 64).unwrap();

    let mut task = MeshBuildTask::new(Arc::new(layer(&gids)), 4, 4, 32, 64, 64, 1).unwrap();
    let mut yields = 0;
    let sliced = loop {
        match task.resume() {
            Progress::Pending => yields += 1,
            Progress::Done(mesh) => break mesh,
        }
    };

    assert_eq!(sliced, reference);
    // Batch size 1: one suspension per emitted quad.
    assert_eq!(yields, reference.quad_count());
}

#[test]
fn gid_count_mismatch_is_invalid_layer_size() {
    let err = MeshBuildTask::new(Arc::new(layer(&[1, 2, 3])), 2, 2, 32, 64, 64, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidLayerSize(name) if name == "L"));
}

#[test]
fn recomputed_normals_face_the_camera() {
    let mut mesh = build_mesh(&layer(&[1, 2, 0, 3]), 2, 2, 32, 64, 64).unwrap();
    assert!(mesh.normals.is_empty());
    mesh.recompute_normals();
    assert_eq!(mesh.normals.len(), mesh.vertices.len());
    for n in &mesh.normals {
        assert_eq!(*n, vec3(0.0, 0.0, -1.0));
    }
}
