// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::renderer::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

const FORMAT_HELP: &str = "\
The input file is a CSV listing of vertices and triangles. Vertices are
listed first, one per line. Each line starts with 'v', followed by two
integers, the X,Y coordinates. After that triangles can be defined by lines
starting with 't' followed by three integers, the index of each of the three
vertices in the order they are listed above, and a single character, which
will be the fill of the triangle.

The example below draws a single triangle with vertices 3,20; 20,20; and
12,50:

    v,3,20
    v,20,20
    v,12,50
    t,0,1,2,a";

#[derive(Parser, Debug, Clone)]
#[command(name = "tri-raster")]
#[command(about = "Rasterizes 2D triangles onto a character grid", long_about = None)]
#[command(after_help = FORMAT_HELP)]
pub struct Cli {
    /// Input scene file in the CSV format described below
    pub input: PathBuf,

    /// Number of rows to render
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: u32,

    /// Number of columns to render
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: u32,
}
