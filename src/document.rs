//! Parsed map data model. Built once by the loader, read-only afterwards.

use crate::error::Error;
use std::fs;
use std::path::Path;

/// A parsed Tiled map document.
///
/// Holds the map constants plus the raw layer definitions; it creates no
/// renderable state itself. Hand it to [`crate::Map::from_document`] to
/// instantiate layers.
#[derive(Debug, Clone)]
pub struct MapDocument {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Edge length in pixels of one (square) tile.
    pub tile_size: u32,
    /// Visual tile layers, in document order.
    pub layers: Vec<TileLayer>,
    /// The object group named `"Collision"`, if the map has one.
    pub collision: Option<ObjectGroup>,
}

impl MapDocument {
    /// Parse a TMX document from in-memory text.
    pub fn parse(text: &str) -> Result<Self, Error> {
        crate::loader::xml_loader::parse_document(text)
    }

    /// Read and parse a TMX file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

/// One visual layer definition: a name plus the flat gid grid.
#[derive(Debug, Clone)]
pub struct TileLayer {
    /// Layer name from the `name` attribute.
    pub name: String,
    /// Row-major global tile ids, one per cell; 0 marks an empty cell.
    /// Length must equal map width * height.
    pub gids: Vec<u32>,
}

/// An object group definition: a name plus its rectangle objects.
#[derive(Debug, Clone)]
pub struct ObjectGroup {
    /// Group name from the `name` attribute.
    pub name: String,
    /// Rectangle objects in document order.
    pub objects: Vec<ObjectRect>,
}

/// A rectangle object in source pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectRect {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels (Tiled's Y grows downward).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}
