//! Bingo Sheets
//!
//! Generates randomized bingo sheets from a word list and renders each sheet
//! as a PNG table.
//!
//! # Features
//!
//! - **Explicit randomness**: sampling takes the random source as a parameter,
//!   so a fixed seed reproduces the exact same cards
//! - **Pluggable rendering**: the [`Renderer`] trait decouples card generation
//!   from the image backend; [`PngRenderer`] is the built-in one
//! - **Self-contained output**: text is drawn with a built-in bitmap font, no
//!   font files or system libraries are needed
//!
//! # Example
//!
//! ```no_run
//! use bingo_sheets::{GridSize, RenderStyle, WordPool};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = WordPool::from_file("words.txt", Default::default())?;
//! let mut rng = bingo_sheets::rng::card_rng(Some(42));
//! let cards = bingo_sheets::generate_cards(GridSize::new(5, 5), 30, &pool, &mut rng)?;
//!
//! let renderer = bingo_sheets::new_renderer();
//! let out_dir = std::path::Path::new("out");
//! std::fs::create_dir_all(out_dir)?;
//! bingo_sheets::render_cards(&renderer, &cards, out_dir, &RenderStyle::default(), 1)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub mod rng;
pub mod sampler;
pub mod words;

pub use rendering::PngRenderer;
pub use sampler::{generate, generate_cards};
pub use words::{LoadOptions, WordPool};

/// Grid dimensions of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub height: usize,
    pub width: usize,
}

impl GridSize {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Number of words one grid needs.
    pub fn cells(&self) -> Result<usize> {
        self.height
            .checked_mul(self.width)
            .ok_or(Error::InvalidDimensions {
                height: self.height,
                width: self.width,
            })
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        self.cells().map(|_| ())
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { height: 5, width: 5 }
    }
}

/// A rectangular arrangement of words, stored row-major.
///
/// A `Grid` can only be built rectangular: every row has the same,
/// non-zero number of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid from explicit rows.
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(Error::InvalidDimensions {
                height: rows.len(),
                width,
            });
        }
        Ok(Self { rows })
    }

    /// Build a grid by splitting a flat, row-major word sequence into rows
    /// of `width` words. The word count must be a non-zero multiple of `width`.
    pub fn from_row_major(words: Vec<String>, width: usize) -> Result<Self> {
        if width == 0 || words.is_empty() || words.len() % width != 0 {
            return Err(Error::InvalidDimensions {
                height: if width == 0 { 0 } else { words.len() / width },
                width,
            });
        }
        let mut rows = Vec::with_capacity(words.len() / width);
        let mut it = words.into_iter().peekable();
        while it.peek().is_some() {
            rows.push(it.by_ref().take(width).collect());
        }
        Ok(Self { rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.height(), self.width())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// All words in row-major order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// One bingo sheet: its ordinal and its grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub grid: Grid,
}

impl Card {
    /// Output file name for this card, `bingo_<index>.png`.
    pub fn file_name(&self) -> String {
        card_file_name(self.index)
    }
}

/// File name used for the card with the given zero-based ordinal.
pub fn card_file_name(index: usize) -> String {
    format!("bingo_{}.png", index)
}

/// Largest canvas side, in pixels.
pub const MAX_CANVAS_PX: f32 = 16384.0;

/// Largest single cell side or text height, in pixels.
pub const MAX_CELL_PX: f32 = 65536.0;

/// Physical canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    /// Width in inches
    pub width_in: f32,
    /// Height in inches
    pub height_in: f32,
    /// Pixels per inch
    pub dpi: u32,
}

impl CanvasSize {
    /// Pixel dimensions `(width, height)`, each at least 1.
    pub fn pixels(&self) -> (u32, u32) {
        let w = (self.width_in * self.dpi as f32).round().max(1.0) as u32;
        let h = (self.height_in * self.dpi as f32).round().max(1.0) as u32;
        (w, h)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width_in: 20.0,
            height_in: 20.0,
            dpi: 100,
        }
    }
}

/// Presentational parameters for rendering a card
///
/// Defaults reproduce a 2000x2000 px sheet with tall rows and small text,
/// on a transparent background:
///
/// ```
/// let style = bingo_sheets::RenderStyle::default();
/// assert_eq!(style.canvas.pixels(), (2000, 2000));
/// assert!(style.transparent);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Figure size
    pub canvas: CanvasSize,
    /// Width of each column as a fraction of the plot area width
    pub col_width: f32,
    /// Point size of cell text
    pub font_size: f32,
    /// Vertical stretch applied to every row
    pub row_scale: f32,
    /// Leave the background outside the table transparent
    pub transparent: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            col_width: 0.17,
            font_size: 9.0,
            row_scale: 10.0,
            transparent: true,
        }
    }
}

impl RenderStyle {
    /// Load a style from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("cannot read style file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let style: RenderStyle = serde_json::from_str(data)
            .map_err(|e| Error::ConfigError(format!("malformed style: {}", e)))?;
        style.validate()?;
        Ok(style)
    }

    /// Reject values that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(Error::ConfigError(format!("{} must be a positive number, got {}", name, v)))
            }
        };
        positive("canvas.width_in", self.canvas.width_in)?;
        positive("canvas.height_in", self.canvas.height_in)?;
        positive("col_width", self.col_width)?;
        positive("font_size", self.font_size)?;
        positive("row_scale", self.row_scale)?;
        if self.canvas.dpi == 0 {
            return Err(Error::ConfigError("canvas.dpi must be at least 1".into()));
        }

        let dpi = self.canvas.dpi as f32;
        let at_most = |name: &str, v: f32, max: f32| {
            if v <= max {
                Ok(())
            } else {
                Err(Error::ConfigError(format!("{} is {} px, the limit is {} px", name, v, max)))
            }
        };
        at_most("canvas width", self.canvas.width_in * dpi, MAX_CANVAS_PX)?;
        at_most("canvas height", self.canvas.height_in * dpi, MAX_CANVAS_PX)?;
        let font_px = self.font_size * dpi / 72.0;
        at_most("text height", font_px, MAX_CELL_PX)?;
        at_most("column width", self.col_width * self.canvas.width_in * dpi, MAX_CELL_PX)?;
        at_most("row height", self.row_scale * 1.2 * font_px, MAX_CELL_PX)?;
        Ok(())
    }
}

/// Core trait for card rendering backends
pub trait Renderer {
    /// Draw `grid` as a table image and write it to `path`.
    ///
    /// Writes exactly one file, replacing any existing one. The parent
    /// directory must already exist.
    fn render(&self, grid: &Grid, path: &Path, style: &RenderStyle) -> Result<()>;
}

/// Create the default rendering backend.
pub fn new_renderer() -> impl Renderer + Sync {
    PngRenderer::new()
}

/// Render every card into `out_dir` as `bingo_<index>.png`.
///
/// `jobs` controls the number of render workers: `1` renders sequentially in
/// index order, `0` uses one worker per CPU. Each card writes its own path, so
/// workers never touch the same file. The first failure stops every worker
/// before its next card and is the error returned; files already written
/// stay on disk.
///
/// Returns the written paths in card order.
pub fn render_cards<R>(
    renderer: &R,
    cards: &[Card],
    out_dir: &Path,
    style: &RenderStyle,
    jobs: usize,
) -> Result<Vec<PathBuf>>
where
    R: Renderer + Sync + ?Sized,
{
    style.validate()?;

    let workers = match jobs {
        0 => num_cpus::get(),
        n => n,
    }
    .clamp(1, cards.len().max(1));

    let stop = AtomicBool::new(false);
    let first_error: Mutex<Option<Error>> = Mutex::new(None);

    let render_chunk = |chunk: &[Card]| -> Vec<PathBuf> {
        let mut written = Vec::with_capacity(chunk.len());
        for card in chunk {
            if stop.load(Ordering::Acquire) {
                break;
            }
            let path = out_dir.join(card.file_name());
            match renderer.render(&card.grid, &path, style) {
                Ok(()) => {
                    log::debug!("wrote card {} to {}", card.index, path.display());
                    written.push(path);
                }
                Err(err) => {
                    if !stop.swap(true, Ordering::AcqRel) {
                        *first_error.lock().unwrap_or_else(|p| p.into_inner()) = Some(err);
                    }
                    break;
                }
            }
        }
        written
    };

    let written = if workers == 1 {
        render_chunk(cards)
    } else {
        log::info!("rendering {} cards on {} workers", cards.len(), workers);
        let chunk_len = cards.len().div_ceil(workers);
        std::thread::scope(|scope| {
            let handles: Vec<_> = cards
                .chunks(chunk_len)
                .map(|chunk| scope.spawn(move || render_chunk(chunk)))
                .collect();

            let mut written = Vec::with_capacity(cards.len());
            for handle in handles {
                let paths = handle
                    .join()
                    .map_err(|_| Error::RenderError("render worker panicked".into()))?;
                written.extend(paths);
            }
            Ok::<_, Error>(written)
        })?
    };

    match first_error.into_inner().unwrap_or_else(|p| p.into_inner()) {
        Some(err) => Err(err),
        None => Ok(written),
    }
}
