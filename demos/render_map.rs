use anyhow::Context;
use macroquad::prelude::*;
use macroquad_tmx::{view, ColliderTemplate, Map, MapConfig};

const ATLAS_SIZE: u16 = 128;
const TILE_SIZE: usize = 32;

fn window_conf() -> Conf {
    Conf {
        window_title: "TMX Map".into(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

// Flat-colored 4x4 atlas so the demo needs no image asset on disk.
fn generated_atlas() -> Texture2D {
    let size = ATLAS_SIZE as usize;
    let mut bytes = vec![0u8; size * size * 4];
    for y in 0..size {
        for x in 0..size {
            let tile = (y / TILE_SIZE) * 4 + x / TILE_SIZE;
            let i = (y * size + x) * 4;
            bytes[i] = (40 + tile * 13) as u8;
            bytes[i + 1] = (230 - tile * 11) as u8;
            bytes[i + 2] = (90 + tile * 9) as u8;
            bytes[i + 3] = 255;
        }
    }
    let tex = Texture2D::from_rgba8(ATLAS_SIZE, ATLAS_SIZE, &bytes);
    tex.set_filter(FilterMode::Nearest);
    tex
}

fn load_map() -> anyhow::Result<Map> {
    let text = std::fs::read_to_string("assets/map.tmx").context("reading assets/map.tmx")?;
    let mut config = MapConfig::new(ATLAS_SIZE as u32, ATLAS_SIZE as u32);
    config.collider_template = Some(ColliderTemplate::default());
    let mut map = Map::parse(&text, config).context("parsing assets/map.tmx")?;
    map.load().context("starting map generation")?;
    Ok(map)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let atlas = generated_atlas();
    let mut map = load_map().expect("Failed to load map");

    loop {
        map.tick();

        clear_background(BLACK);

        set_camera(&Camera2D {
            target: vec2(map.width() as f32 / 2.0, map.height() as f32 / 2.0),
            zoom: vec2(2.0 / map.width() as f32, 2.0 / map.height() as f32),
            ..Default::default()
        });
        view::draw_map(&map, &atlas);

        set_default_camera();
        draw_text(
            &format!("FPS: {} colliders: {}", get_fps(), map.colliders().count()),
            20.0,
            30.0,
            30.0,
            RED,
        );

        next_frame().await;
    }
}
