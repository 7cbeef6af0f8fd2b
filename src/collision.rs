//! Collision layer generation: object rectangles into grid-space box
//! colliders.

use crate::document::ObjectGroup;
use crate::task::Progress;
use macroquad::math::{vec2, Vec2};
use std::sync::Arc;

/// Prototype for spawned colliders. Without one configured the collision
/// builder silently produces nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColliderTemplate {
    /// Spawned colliders report overlaps instead of blocking movement.
    pub is_trigger: bool,
}

/// Axis-aligned box collider in tile units, owned by the collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    /// Local position within the collision layer, in the same Y-flipped
    /// space as the layer meshes.
    pub position: Vec2,
    /// Center offset relative to `position`; the box extends right and down
    /// from its origin.
    pub center: Vec2,
    /// Box size in tiles.
    pub size: Vec2,
    /// Copied from the template.
    pub is_trigger: bool,
}

/// Resumable collider build for the collision object group.
///
/// Object pixel coordinates convert to tile units by integer division, so
/// fractional tile offsets truncate. Suspends after every `batch_size`
/// created colliders.
#[derive(Debug)]
pub struct ColliderBuildTask {
    group: Arc<ObjectGroup>,
    tile_size: u32,
    map_height: u32,
    template: Option<ColliderTemplate>,
    batch_size: u32,
    cursor: usize,
    out: Vec<BoxCollider>,
}

impl ColliderBuildTask {
    /// Create a build task for `group`. A `batch_size` of 0 disables slicing.
    pub fn new(
        group: Arc<ObjectGroup>,
        tile_size: u32,
        map_height: u32,
        template: Option<ColliderTemplate>,
        batch_size: u32,
    ) -> Self {
        Self {
            group,
            tile_size,
            map_height,
            template,
            batch_size,
            cursor: 0,
            out: Vec::new(),
        }
    }

    /// Resume generation until the batch budget is spent or every object has
    /// been converted.
    pub fn resume(&mut self) -> Progress<Vec<BoxCollider>> {
        let template = match self.template {
            Some(t) => t,
            None => {
                // Configuration gap, not an error: no prototype means no
                // colliders, even when objects exist.
                if !self.group.objects.is_empty() {
                    log::debug!(
                        "group '{}' has {} object(s) but no collider template is configured",
                        self.group.name,
                        self.group.objects.len()
                    );
                }
                self.cursor = self.group.objects.len();
                return Progress::Done(Vec::new());
            }
        };

        let mut produced = 0u32;
        while self.cursor < self.group.objects.len() {
            let obj = self.group.objects[self.cursor];
            self.cursor += 1;

            let t = self.tile_size as i32;
            let x = obj.x / t;
            let y = obj.y / t;
            let width = obj.width / t;
            let height = obj.height / t;

            self.out.push(BoxCollider {
                position: vec2(x as f32, (self.map_height as i32 - y) as f32),
                center: vec2(width as f32 * 0.5, height as f32 * -0.5),
                size: vec2(width as f32, height as f32),
                is_trigger: template.is_trigger,
            });

            produced += 1;
            if produced == self.batch_size {
                return Progress::Pending;
            }
        }

        Progress::Done(std::mem::take(&mut self.out))
    }
}

/// Convert an object group into colliders in one call, without slicing.
pub fn build_colliders(
    group: &ObjectGroup,
    tile_size: u32,
    map_height: u32,
    template: Option<ColliderTemplate>,
) -> Vec<BoxCollider> {
    let mut task = ColliderBuildTask::new(
        Arc::new(group.clone()),
        tile_size,
        map_height,
        template,
        0,
    );
    loop {
        if let Progress::Done(colliders) = task.resume() {
            return colliders;
        }
    }
}
