// src/loader/xml_loader.rs
use crate::document::{MapDocument, ObjectGroup, ObjectRect, TileLayer};
use crate::error::Error;
use roxmltree::{Document, Node};
use std::str::FromStr;

/// Name of the object group that is turned into colliders. Exact match,
/// no fallback.
const COLLISION_GROUP: &str = "Collision";

/// Parse TMX text into a [`MapDocument`].
///
/// Child `<layer>` elements are enumerated in document order; the first
/// `<objectgroup name="Collision">` becomes the collision definition. A map
/// without a collision group is fine, a map without the root `<map>` element
/// or its `width`/`height`/`tilewidth` attributes is not.
pub fn parse_document(text: &str) -> Result<MapDocument, Error> {
    let doc = Document::parse(text)?;
    let map = doc.root_element();
    if map.tag_name().name() != "map" {
        return Err(Error::MissingElement("map"));
    }

    let width = positive_attr(&map, "width")?;
    let height = positive_attr(&map, "height")?;
    let tile_size = positive_attr(&map, "tilewidth")?;

    let mut layers = Vec::new();
    let mut collision = None;

    for child in map.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "layer" => layers.push(parse_tile_layer(&child)?),
            "objectgroup" if collision.is_none() => {
                if str_attr(&child, "name")? == COLLISION_GROUP {
                    collision = Some(parse_object_group(&child)?);
                }
            }
            _ => {}
        }
    }

    log::debug!(
        "parsed {}x{} map, tile size {}px, {} visual layer(s), collision: {}",
        width,
        height,
        tile_size,
        layers.len(),
        collision.is_some()
    );

    Ok(MapDocument {
        width,
        height,
        tile_size,
        layers,
        collision,
    })
}

fn parse_tile_layer(node: &Node) -> Result<TileLayer, Error> {
    let name = str_attr(node, "name")?.to_string();

    let data = node
        .children()
        .find(|n| n.has_tag_name("data"))
        .ok_or(Error::MissingElement("data"))?;

    // One <tile gid="N"/> per cell, row-major.
    let mut gids = Vec::new();
    for tile in data.children().filter(|n| n.has_tag_name("tile")) {
        gids.push(attr(&tile, "gid")?);
    }

    Ok(TileLayer { name, gids })
}

fn parse_object_group(node: &Node) -> Result<ObjectGroup, Error> {
    let name = str_attr(node, "name")?.to_string();

    let mut objects = Vec::new();
    for obj in node.children().filter(|n| n.has_tag_name("object")) {
        objects.push(ObjectRect {
            x: attr(&obj, "x")?,
            y: attr(&obj, "y")?,
            width: attr(&obj, "width")?,
            height: attr(&obj, "height")?,
        });
    }

    Ok(ObjectGroup { name, objects })
}

fn str_attr<'a>(node: &Node<'a, '_>, name: &str) -> Result<&'a str, Error> {
    node.attribute(name).ok_or_else(|| Error::MissingAttribute {
        element: node.tag_name().name().to_string(),
        attribute: name.to_string(),
    })
}

fn attr<T: FromStr>(node: &Node, name: &str) -> Result<T, Error> {
    let raw = str_attr(node, name)?;
    raw.parse().map_err(|_| Error::InvalidAttribute {
        element: node.tag_name().name().to_string(),
        attribute: name.to_string(),
        value: raw.to_string(),
    })
}

// Zero would divide by zero in the atlas math later, so the map constants are
// rejected up front.
fn positive_attr(node: &Node, name: &str) -> Result<u32, Error> {
    let value: u32 = attr(node, name)?;
    if value == 0 {
        return Err(Error::InvalidAttribute {
            element: node.tag_name().name().to_string(),
            attribute: name.to_string(),
            value: "0".to_string(),
        });
    }
    Ok(value)
}
