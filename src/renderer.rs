use crate::math::point_in_triangle;
use crate::scene::Scene;

pub const DEFAULT_GRID_HEIGHT: u32 = 24;
pub const DEFAULT_GRID_WIDTH: u32 = 80;

/// Output grid dimensions, in character cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub height: u32,
    pub width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_GRID_HEIGHT,
            width: DEFAULT_GRID_WIDTH,
        }
    }
}

/// Returns the index of the first triangle, in scene order, containing the
/// cell at (row, col), or `None` when the cell is uncovered.
///
/// Overlaps resolve by list position: the earliest triangle wins. There is
/// no depth ordering.
pub fn resolve_cell(scene: &Scene, row: i32, col: i32) -> Option<usize> {
    scene
        .triangles()
        .iter()
        .position(|tri| point_in_triangle(scene.vertices(), tri, row, col))
}

/// Renders the scene onto a character grid, one newline-terminated line per
/// row. Uncovered cells render as spaces.
///
/// Rows are sampled from `height` down to 1: the topmost output line is grid
/// row `height`, and row 0 is never sampled.
pub fn render(scene: &Scene, grid: GridConfig) -> String {
    let mut out = String::with_capacity(grid.height as usize * (grid.width as usize + 1));

    for row in (1..=grid.height as i32).rev() {
        for col in 0..grid.width as i32 {
            match resolve_cell(scene, row, col) {
                Some(index) => out.push(scene.triangles()[index].fill),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }

    out
}
