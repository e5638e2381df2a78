use anyhow::Result;
use clap::Parser;

use tri_raster::cli::Cli;
use tri_raster::loaders::load_scene;
use tri_raster::renderer::{render, GridConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let scene = load_scene(&cli.input)?;
    log::info!(
        "Scene loaded: {} vertices, {} triangles",
        scene.vertices().len(),
        scene.triangles().len()
    );

    let grid = GridConfig {
        height: cli.height,
        width: cli.width,
    };
    print!("{}", render(&scene, grid));

    Ok(())
}
