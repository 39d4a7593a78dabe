//! Paint command list for a laid-out table

use crate::rendering::layout::{Rect, TableLayout, GLYPH_PX};
use crate::Grid;

pub type Rgba = (u8, u8, u8, u8);

pub const CELL_FILL: Rgba = (255, 255, 255, 255);
pub const CELL_EDGE: Rgba = (0, 0, 0, 255);
pub const TEXT: Rgba = (0, 0, 0, 255);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    /// A single line of text drawn with 8x8 glyphs magnified by `scale`,
    /// clipped to `clip`.
    Text {
        x: i32,
        y: i32,
        text: String,
        scale: u32,
        rgba: Rgba,
        clip: Rect,
    },
}

fn solid(rect: Rect, rgba: Rgba) -> PaintCommand {
    PaintCommand::SolidRect {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        rgba,
    }
}

/// Width and height in pixels of `text` at the given glyph scale.
pub fn text_extent(text: &str, scale: u32) -> (u32, u32) {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    let glyph = GLYPH_PX.saturating_mul(scale);
    (chars.saturating_mul(glyph), glyph)
}

/// Offset that centers a run of `inner` pixels inside `outer` pixels starting at `start`.
fn centered(start: i32, outer: u32, inner: u32) -> i32 {
    let pos = i64::from(start) + (i64::from(outer) - i64::from(inner)) / 2;
    pos.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Turn a layout and its grid into paint commands.
///
/// Per cell, in row-major order: the white fill, four edges, then the word
/// centered in the cell. Empty words still get their cell box. No header row
/// or label column is emitted.
pub fn paint_table(layout: &TableLayout, grid: &Grid) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(layout.cells.len() * 6);
    let edge = layout.edge_px;

    for cell in &layout.cells {
        let r = cell.rect;
        cmds.push(solid(r, CELL_FILL));
        cmds.push(solid(Rect { height: edge.min(r.height), ..r }, CELL_EDGE));
        cmds.push(solid(
            Rect {
                y: r.bottom().saturating_sub_unsigned(edge.min(r.height)),
                height: edge.min(r.height),
                ..r
            },
            CELL_EDGE,
        ));
        cmds.push(solid(Rect { width: edge.min(r.width), ..r }, CELL_EDGE));
        cmds.push(solid(
            Rect {
                x: r.right().saturating_sub_unsigned(edge.min(r.width)),
                width: edge.min(r.width),
                ..r
            },
            CELL_EDGE,
        ));

        let word = grid.cell(cell.row, cell.col).unwrap_or_default();
        if word.is_empty() {
            continue;
        }
        let (tw, th) = text_extent(word, layout.text_scale);
        cmds.push(PaintCommand::Text {
            x: centered(r.x, r.width, tw),
            y: centered(r.y, r.height, th),
            text: word.to_string(),
            scale: layout.text_scale,
            rgba: TEXT,
            clip: r.inset(edge),
        });
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::layout_table;
    use crate::RenderStyle;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn paints_five_boxes_and_one_text_per_cell() {
        let g = grid(&[&["A", "B"], &["C", "D"]]);
        let layout = layout_table(g.size(), &RenderStyle::default());
        let cmds = paint_table(&layout, &g);
        assert_eq!(cmds.len(), 4 * 6);

        let texts: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn empty_word_gets_box_but_no_text() {
        let g = grid(&[&["", "B"]]);
        let layout = layout_table(g.size(), &RenderStyle::default());
        let cmds = paint_table(&layout, &g);
        assert_eq!(cmds.len(), 5 + 6);
        match &cmds[0] {
            PaintCommand::SolidRect { rgba, .. } => assert_eq!(*rgba, CELL_FILL),
            _ => panic!("unexpected"),
        }
    }

    #[test]
    fn text_is_centered_in_cell() {
        let g = grid(&[&["HELLO"]]);
        let layout = layout_table(g.size(), &RenderStyle::default());
        let cell = layout.cells[0].rect;
        let cmds = paint_table(&layout, &g);
        match cmds.last() {
            Some(PaintCommand::Text { x, y, scale, .. }) => {
                let (tw, th) = text_extent("HELLO", *scale);
                assert!(((x - cell.x) - (cell.right() - (x + tw as i32))).abs() <= 1);
                assert!(((y - cell.y) - (cell.bottom() - (y + th as i32))).abs() <= 1);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn text_extent_counts_chars_not_bytes() {
        assert_eq!(text_extent("été", 2), (48, 16));
    }

    #[test]
    fn text_extent_saturates() {
        assert_eq!(text_extent("ab", u32::MAX), (u32::MAX, u32::MAX));
    }

    #[test]
    fn oversized_cells_paint_without_overflow() {
        let g = grid(&[&["A", "B"], &["C", "D"]]);
        let mut style = RenderStyle::default();
        style.canvas.width_in = 2.0;
        style.canvas.height_in = 2.0;
        style.canvas.dpi = 10;
        style.row_scale = 1e9;
        style.font_size = 1e12;
        let layout = layout_table(g.size(), &style);
        let cmds = paint_table(&layout, &g);
        assert_eq!(cmds.len(), 4 * 6);
    }
}
