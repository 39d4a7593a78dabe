//! Table layout: grid dimensions + style -> pixel geometry

use crate::{GridSize, RenderStyle};

/// Figure margins as fractions of the canvas: left, right, bottom, top.
const MARGIN_LEFT: f32 = 0.125;
const MARGIN_RIGHT: f32 = 0.9;
const MARGIN_BOTTOM: f32 = 0.11;
const MARGIN_TOP: f32 = 0.88;

/// Unscaled row height relative to the text height.
const ROW_TEXT_RATIO: f32 = 1.2;

/// Bitmap glyph cell size in pixels.
pub const GLYPH_PX: u32 = 8;

/// Cell edges are clamped to +/- this many pixels so spans always fit in `i32`.
const COORD_LIMIT: f32 = (1 << 28) as f32;

fn to_px(v: f32) -> i32 {
    v.round().clamp(-COORD_LIMIT, COORD_LIMIT) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Shrink by `amount` on every side, never below zero size.
    pub fn inset(&self, amount: u32) -> Rect {
        Rect {
            x: self.x.saturating_add_unsigned(amount),
            y: self.y.saturating_add_unsigned(amount),
            width: self.width.saturating_sub(amount.saturating_mul(2)),
            height: self.height.saturating_sub(amount.saturating_mul(2)),
        }
    }
}

/// A laid-out table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBox {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Cells in row-major order
    pub cells: Vec<CellBox>,
    /// Integer magnification applied to 8x8 glyphs
    pub text_scale: u32,
    /// Thickness of cell edges in pixels
    pub edge_px: u32,
}

impl TableLayout {
    /// Bounding box of the whole table.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.cells.first()?.rect;
        let last = self.cells.last()?.rect;
        Some(Rect {
            x: first.x,
            y: first.y,
            width: last.right().saturating_sub(first.x).max(0) as u32,
            height: last.bottom().saturating_sub(first.y).max(0) as u32,
        })
    }
}

/// Compute the table geometry for a grid of `size` drawn with `style`.
///
/// - The table is centered inside the plot area (the canvas minus figure margins)
/// - Column width is `col_width` of the plot area width
/// - Row height is `row_scale` times the text line height
/// - Edges of neighbouring cells share pixel boundaries, so cells tile exactly
///
/// Cells may extend past the canvas; painting clips them. Edges far outside
/// the canvas are clamped, so oversized styles degrade instead of overflowing.
pub fn layout_table(size: GridSize, style: &RenderStyle) -> TableLayout {
    let (canvas_width, canvas_height) = style.canvas.pixels();
    let cw = canvas_width as f32;
    let ch = canvas_height as f32;
    let dpi = style.canvas.dpi as f32;

    let plot_x = MARGIN_LEFT * cw;
    let plot_w = (MARGIN_RIGHT - MARGIN_LEFT) * cw;
    let plot_y = (1.0 - MARGIN_TOP) * ch;
    let plot_h = (MARGIN_TOP - MARGIN_BOTTOM) * ch;

    let font_px = style.font_size * dpi / 72.0;
    let col_px = style.col_width * plot_w;
    let row_px = style.row_scale * ROW_TEXT_RATIO * font_px;

    let x0 = plot_x + (plot_w - col_px * size.width as f32) / 2.0;
    let y0 = plot_y + (plot_h - row_px * size.height as f32) / 2.0;

    let xs: Vec<i32> = (0..=size.width).map(|c| to_px(x0 + c as f32 * col_px)).collect();
    let ys: Vec<i32> = (0..=size.height).map(|r| to_px(y0 + r as f32 * row_px)).collect();

    let mut cells = Vec::with_capacity(size.cells().unwrap_or_default());
    for row in 0..size.height {
        for col in 0..size.width {
            cells.push(CellBox {
                row,
                col,
                rect: Rect {
                    x: xs[col],
                    y: ys[row],
                    width: (xs[col + 1] - xs[col]).max(1) as u32,
                    height: (ys[row + 1] - ys[row]).max(1) as u32,
                },
            });
        }
    }

    TableLayout {
        canvas_width,
        canvas_height,
        cells,
        text_scale: ((font_px / GLYPH_PX as f32).round() as u32).max(1),
        edge_px: ((dpi / 72.0).round() as u32).max(1),
    }
}
