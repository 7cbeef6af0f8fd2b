//! Per-layer instances and their generation lifecycle.

use crate::collision::{BoxCollider, ColliderBuildTask};
use crate::document::{ObjectGroup, TileLayer};
use crate::error::Error;
use crate::map::MapConfig;
use crate::mesh::{MeshBuildTask, RenderMesh};
use crate::task::Progress;
use macroquad::math::Vec3;
use std::sync::Arc;

/// What a layer contributes to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// A tile grid rendered as a mesh.
    Visual,
    /// An object group converted into box colliders; never rendered.
    Collision,
}

#[derive(Debug)]
enum LayerSource {
    Tiles(Arc<TileLayer>),
    Objects(Arc<ObjectGroup>),
}

#[derive(Debug)]
enum GenerationTask {
    Mesh(MeshBuildTask),
    Colliders(ColliderBuildTask),
}

/// One instantiated map layer.
///
/// Holds copies of the shared map constants it needs (passed at
/// construction) rather than a back-reference to the owning [`crate::Map`].
/// At most one generation task runs per layer; restarting a load replaces
/// the task handle, which cancels the old task at its next yield point.
#[derive(Debug)]
pub struct MapLayer {
    name: String,
    kind: LayerKind,
    source: LayerSource,
    width: u32,
    height: u32,
    tile_size: u32,
    offset: Vec3,
    visible: bool,
    mesh: RenderMesh,
    colliders: Vec<BoxCollider>,
    task: Option<GenerationTask>,
}

impl MapLayer {
    pub(crate) fn new_visual(
        def: TileLayer,
        width: u32,
        height: u32,
        tile_size: u32,
        offset: Vec3,
    ) -> Self {
        Self {
            name: def.name.clone(),
            kind: LayerKind::Visual,
            source: LayerSource::Tiles(Arc::new(def)),
            width,
            height,
            tile_size,
            offset,
            visible: true,
            mesh: RenderMesh::default(),
            colliders: Vec::new(),
            task: None,
        }
    }

    pub(crate) fn new_collision(
        def: ObjectGroup,
        width: u32,
        height: u32,
        tile_size: u32,
    ) -> Self {
        Self {
            name: def.name.clone(),
            kind: LayerKind::Collision,
            source: LayerSource::Objects(Arc::new(def)),
            width,
            height,
            tile_size,
            offset: Vec3::ZERO,
            visible: false,
            mesh: RenderMesh::default(),
            colliders: Vec::new(),
            task: None,
        }
    }

    /// Start (or restart) this layer's generation task. Replacing the handle
    /// drops any in-flight task, so at most one runs per layer.
    pub(crate) fn start_load(&mut self, config: &MapConfig) -> Result<(), Error> {
        self.task = Some(match &self.source {
            LayerSource::Tiles(def) => GenerationTask::Mesh(MeshBuildTask::new(
                def.clone(),
                self.width,
                self.height,
                self.tile_size,
                config.atlas_width,
                config.atlas_height,
                config.tiles_per_slice,
            )?),
            LayerSource::Objects(def) => GenerationTask::Colliders(ColliderBuildTask::new(
                def.clone(),
                self.tile_size,
                self.height,
                config.collider_template,
                config.tiles_per_slice,
            )),
        });
        Ok(())
    }

    /// Resume this layer's task by one batch. Returns true while generation
    /// is still in flight.
    pub(crate) fn tick(&mut self) -> bool {
        match self.task.as_mut() {
            None => false,
            Some(GenerationTask::Mesh(task)) => match task.resume() {
                Progress::Pending => true,
                Progress::Done(mesh) => {
                    self.task = None;
                    log::debug!("layer '{}': mesh complete, {} quad(s)", self.name, mesh.quad_count());
                    self.install_mesh(mesh);
                    false
                }
            },
            Some(GenerationTask::Colliders(task)) => match task.resume() {
                Progress::Pending => true,
                Progress::Done(colliders) => {
                    self.task = None;
                    log::debug!("layer '{}': {} collider(s)", self.name, colliders.len());
                    self.colliders = colliders;
                    false
                }
            },
        }
    }

    /// Replace the layer's mesh content atomically: the layer is hidden
    /// while the swap and normal recompute happen and revealed afterwards,
    /// so a partially built mesh is never visible.
    fn install_mesh(&mut self, mut mesh: RenderMesh) {
        self.visible = false;
        mesh.recompute_normals();
        self.mesh = mesh;
        if self.kind == LayerKind::Visual {
            self.visible = true;
        }
    }

    /// Layer name from the map document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visual or collision.
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// World-space offset assigned by the map (depth stacking).
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Whether the layer should be drawn. Collision layers are never
    /// visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True while a generation task is in flight.
    pub fn is_loading(&self) -> bool {
        self.task.is_some()
    }

    /// The layer's current mesh. Empty until the first load completes.
    pub fn mesh(&self) -> &RenderMesh {
        &self.mesh
    }

    /// The layer's colliders. Empty for visual layers.
    pub fn colliders(&self) -> &[BoxCollider] {
        &self.colliders
    }
}
