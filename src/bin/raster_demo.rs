//! raster-demo - render a scene onto a grid canvas and save it as PNG.
//!
//! Usage: `raster-demo [OUTPUT.png] [SCENE.yaml]`
//!
//! Without a scene file a built-in scene is drawn: a point, a line, a circle
//! and a fan of vectors produced by repeatedly rotating one arrow.

use affine_raster::logging::{init_logging, LoggingConfig};
use affine_raster::prelude::*;

fn builtin_scene() -> Scene {
    Scene::new()
        .with(Primitive::point(point(3.0, 40.0), Rgb::RED))
        .with(Primitive::line(point(2.0, 2.0), point(45.0, 17.0), Rgb::new(0, 128, 0)))
        .with(Primitive::line(point(30.0, 5.0), point(12.0, 35.0), Rgb::new(128, 0, 128)))
        .with(Primitive::circle(point(34.0, 34.0), 9, Rgb::new(255, 128, 0)))
}

fn draw_vector_fan(canvas: &mut Canvas) -> Result<()> {
    let anchor = point(12.0, 24.0);
    let step = rotation(30.0);
    let mut v = vector(8.0, 0.0);
    for _ in 0..6 {
        draw_arrow_along(canvas, &anchor, &v, Rgb::BLACK, None)?;
        v = mat_vec(&step, &v)?;
    }
    Ok(())
}

#[cfg(feature = "yaml")]
fn load_scene(path: Option<&str>) -> Result<Scene> {
    match path {
        Some(path) => Scene::from_yaml_str(&std::fs::read_to_string(path)?),
        None => Ok(builtin_scene()),
    }
}

#[cfg(not(feature = "yaml"))]
fn load_scene(path: Option<&str>) -> Result<Scene> {
    if path.is_some() {
        log::warn!("scene files need the 'yaml' feature; drawing the built-in scene");
    }
    Ok(builtin_scene())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = args.first().map_or("scene.png", String::as_str);
    let scene_path = args.get(1).map(String::as_str);

    let scene = load_scene(scene_path)?;
    let mut canvas = Canvas::new(CanvasConfig::default())?;
    render_scene(&scene, &mut canvas)?;
    if scene_path.is_none() {
        draw_vector_fan(&mut canvas)?;
    }
    canvas.save_png(output)?;

    log::info!("rendered {} primitives to {output}", scene.len());
    Ok(())
}
