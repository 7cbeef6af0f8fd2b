//! Map assembly and the per-frame generation scheduler.

use crate::collision::{BoxCollider, ColliderTemplate};
use crate::document::MapDocument;
use crate::error::Error;
use crate::layer::MapLayer;
use macroquad::math::{vec3, Vec3};

/// Tuning knobs for map loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// World-space offset between consecutive visual layers; layer i sits at
    /// `layer_offset * i`. Defaults to a z-step of -0.1.
    pub layer_offset: Vec3,
    /// Quads/colliders a layer generates between yields. 0 disables
    /// slicing.
    pub tiles_per_slice: u32,
    /// Tileset atlas width in pixels.
    pub atlas_width: u32,
    /// Tileset atlas height in pixels.
    pub atlas_height: u32,
    /// Prototype for collision-layer colliders; `None` skips collider
    /// generation entirely.
    pub collider_template: Option<ColliderTemplate>,
}

impl MapConfig {
    /// Config for a tileset atlas of the given pixel size, with default
    /// stacking offset and batch size.
    pub fn new(atlas_width: u32, atlas_height: u32) -> Self {
        Self {
            layer_offset: vec3(0.0, 0.0, -0.1),
            tiles_per_slice: 10_000,
            atlas_width,
            atlas_height,
            collider_template: None,
        }
    }
}

/// A loaded map: the document constants plus one [`MapLayer`] per
/// definition.
///
/// `Map` owns its layers outright; layers never point back at it. Layer
/// generation runs cooperatively on the caller's thread: [`Map::load`]
/// starts every layer's task, [`Map::tick`] (once per frame) resumes each
/// in-flight task by one batch. Layers load independently and may finish in
/// any order.
#[derive(Debug)]
pub struct Map {
    width: u32,
    height: u32,
    tile_size: u32,
    config: MapConfig,
    layers: Vec<MapLayer>,
}

impl Map {
    /// Parse TMX text and instantiate layers. The layers start out unloaded;
    /// call [`Map::load`] and then [`Map::tick`] each frame.
    pub fn parse(text: &str, config: MapConfig) -> Result<Self, Error> {
        Ok(Self::from_document(MapDocument::parse(text)?, config))
    }

    /// Instantiate one layer per definition in `doc`: visual layers in
    /// document order at increasing depth offsets, then the collision layer
    /// (if any) at the origin.
    pub fn from_document(doc: MapDocument, config: MapConfig) -> Self {
        let MapDocument {
            width,
            height,
            tile_size,
            layers: defs,
            collision,
        } = doc;

        let mut layers = Vec::with_capacity(defs.len() + 1);
        for (i, def) in defs.into_iter().enumerate() {
            let offset = config.layer_offset * i as f32;
            layers.push(MapLayer::new_visual(def, width, height, tile_size, offset));
        }
        if let Some(group) = collision {
            layers.push(MapLayer::new_collision(group, width, height, tile_size));
        }

        log::info!(
            "map {}x{}: {} layer(s) instantiated",
            width,
            height,
            layers.len()
        );

        Self {
            width,
            height,
            tile_size,
            config,
            layers,
        }
    }

    /// Start (or restart) generation for every layer.
    ///
    /// Restarting replaces each layer's in-flight task; the existing layer
    /// instances are reused, so repeated loads never accumulate layers and
    /// a completed reload produces output identical to a single load.
    pub fn load(&mut self) -> Result<(), Error> {
        for layer in &mut self.layers {
            layer.start_load(&self.config)?;
        }
        Ok(())
    }

    /// Resume every in-flight generation task by one batch. Call once per
    /// frame. Returns true while any layer is still loading.
    pub fn tick(&mut self) -> bool {
        let mut loading = false;
        for layer in &mut self.layers {
            loading |= layer.tick();
        }
        loading
    }

    /// True while any layer's generation task is in flight.
    pub fn is_loading(&self) -> bool {
        self.layers.iter().any(MapLayer::is_loading)
    }

    /// All instantiated layers, visual first, collision last.
    pub fn layers(&self) -> &[MapLayer] {
        &self.layers
    }

    /// Every collider owned by the collision layer.
    pub fn colliders(&self) -> impl Iterator<Item = &BoxCollider> {
        self.layers.iter().flat_map(|l| l.colliders().iter())
    }

    /// Map width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
}
