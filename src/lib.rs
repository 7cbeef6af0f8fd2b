#![warn(missing_docs)]

//! Minimal Tiled TMX (XML) loader, mesh & collider builder for Macroquad.
//!
//! A [`MapDocument`] is parsed once from TMX text. [`Map`] instantiates one
//! [`MapLayer`] per definition and drives each layer's time-sliced generation
//! task from the host frame loop: call [`Map::load`] once, then [`Map::tick`]
//! every frame until [`Map::is_loading`] turns false. Visual layers end up
//! with a triangle-soup [`RenderMesh`], the `"Collision"` object group with a
//! list of [`BoxCollider`]s.

mod collision;
mod document;
mod error;
mod layer;
mod loader {
    pub mod xml_loader;
}
mod map;
mod mesh;
mod task;
pub mod view;

pub use collision::{build_colliders, BoxCollider, ColliderBuildTask, ColliderTemplate};
pub use document::{MapDocument, ObjectGroup, ObjectRect, TileLayer};
pub use error::Error;
pub use layer::{LayerKind, MapLayer};
pub use loader::xml_loader::parse_document;
pub use map::{Map, MapConfig};
pub use mesh::{build_mesh, MeshBuildTask, RenderMesh};
pub use task::Progress;
