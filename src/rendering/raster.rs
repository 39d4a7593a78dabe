//! Rasterizer: paint commands -> RGBA pixmap -> PNG

use font8x8::{UnicodeFonts, BASIC_FONTS, BOX_FONTS, GREEK_FONTS, LATIN_FONTS, MISC_FONTS};

use crate::rendering::layout::{Rect, GLYPH_PX};
use crate::rendering::paint::{PaintCommand, Rgba};
use crate::rendering::Screenshot;
use crate::Result;

/// An RGBA8 pixel buffer, row-major, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let (r, g, b, a) = background;
        let data = [r, g, b, a].repeat(width as usize * height as usize);
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some((self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]))
    }

    fn bounds(&self) -> Rect {
        Rect { x: 0, y: 0, width: self.width, height: self.height }
    }

    /// Fill `rect` intersected with `clip` and the pixmap.
    fn fill_clipped(&mut self, rect: Rect, clip: Rect, rgba: Rgba) {
        let (x, y) = (i64::from(rect.x), i64::from(rect.y));
        self.fill_span(x, y, x + i64::from(rect.width), y + i64::from(rect.height), clip, rgba);
    }

    /// Fill the half-open box `[x0, x1) x [y0, y1)` intersected with `clip`
    /// and the pixmap. Coordinates are `i64` so glyph offsets cannot overflow.
    fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, clip: Rect, rgba: Rgba) {
        let x0 = x0.max(i64::from(clip.x)).max(0);
        let y0 = y0.max(i64::from(clip.y)).max(0);
        let x1 = x1
            .min(i64::from(clip.x) + i64::from(clip.width))
            .min(i64::from(self.width));
        let y1 = y1
            .min(i64::from(clip.y) + i64::from(clip.height))
            .min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let (r, g, b, a) = rgba;
        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = y as usize * stride;
            for px in self.data[row + x0 as usize * 4..row + x1 as usize * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, rgba: Rgba) {
        self.fill_clipped(rect, self.bounds(), rgba);
    }

    /// Draw one line of text with its top-left corner at (x, y).
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: u32, rgba: Rgba, clip: Rect) {
        let scale = i64::from(scale);
        let advance = i64::from(GLYPH_PX) * scale;
        let clip_right = i64::from(clip.x) + i64::from(clip.width);
        let mut gx = i64::from(x);
        let gy = i64::from(y);
        for c in text.chars() {
            if gx >= clip_right {
                break;
            }
            if gx + advance > i64::from(clip.x) {
                let bitmap = glyph(c);
                for (row, bits) in (0i64..).zip(bitmap) {
                    for col in 0..i64::from(GLYPH_PX) {
                        if bits & (1 << col) == 0 {
                            continue;
                        }
                        let dx = gx + col * scale;
                        let dy = gy + row * scale;
                        self.fill_span(dx, dy, dx + scale, dy + scale, clip, rgba);
                    }
                }
            }
            gx += advance;
        }
    }
}

/// Look up the 8x8 bitmap for `c`, falling back to `?`.
pub fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .or_else(|| BOX_FONTS.get(c))
        .or_else(|| MISC_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Execute paint commands in order on a fresh pixmap.
pub fn paint(commands: &[PaintCommand], width: u32, height: u32, background: Rgba) -> Pixmap {
    let mut pixmap = Pixmap::new(width, height, background);
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect { x, y, width, height, rgba } => {
                pixmap.fill_rect(Rect { x: *x, y: *y, width: *width, height: *height }, *rgba);
            }
            PaintCommand::Text { x, y, text, scale, rgba, clip } => {
                pixmap.draw_text(*x, *y, text, *scale, *rgba, *clip);
            }
        }
    }
    pixmap
}

/// Encode a pixmap as an 8-bit RGBA PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, pixmap.width, pixmap.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixmap.data)?;
    writer.finish()?;
    Ok(buf)
}

/// Paint `commands` and return the encoded image.
pub fn rasterize(commands: &[PaintCommand], width: u32, height: u32, background: Rgba) -> Result<Screenshot> {
    let pixmap = paint(commands, width, height, background);
    Ok(Screenshot {
        width,
        height,
        png_data: encode_png(&pixmap)?,
    })
}
