//! Card rendering: layout -> paint -> raster -> PNG file

pub mod layout;
pub mod paint;
pub mod raster;

use std::fs;
use std::path::Path;

use crate::{Error, Grid, RenderStyle, Renderer, Result};

/// An encoded image together with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Background outside the table
fn background(style: &RenderStyle) -> paint::Rgba {
    if style.transparent {
        (255, 255, 255, 0)
    } else {
        (255, 255, 255, 255)
    }
}

/// Render `grid` to PNG bytes without touching the filesystem.
pub fn render_png(grid: &Grid, style: &RenderStyle) -> Result<Screenshot> {
    style.validate()?;
    let table = layout::layout_table(grid.size(), style);
    let commands = paint::paint_table(&table, grid);
    raster::rasterize(&commands, table.canvas_width, table.canvas_height, background(style))
}

/// Built-in backend writing PNG files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRenderer;

impl PngRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for PngRenderer {
    fn render(&self, grid: &Grid, path: &Path, style: &RenderStyle) -> Result<()> {
        let shot = render_png(grid, style)?;
        fs::write(path, &shot.png_data).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
