use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bingo_sheets::{GridSize, LoadOptions, RenderStyle, WordPool};

/// Icebreak bingo sheet generator
#[derive(Parser, Debug)]
#[command(name = "bingo-sheets", version, about)]
struct Args {
    /// Number of cards to generate
    #[arg(long, default_value_t = 30)]
    nb: usize,

    /// Number of rows
    #[arg(long, default_value_t = 5)]
    height: usize,

    /// Number of columns
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Path to text file with a word per line
    #[arg(long)]
    words: PathBuf,

    /// Path to output folder
    #[arg(short, long)]
    output: PathBuf,

    /// Seed for reproducible cards
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with render style overrides
    #[arg(long)]
    style: Option<PathBuf>,

    /// Point size of cell text
    #[arg(long)]
    font_size: Option<f32>,

    /// Column width as a fraction of the plot area
    #[arg(long)]
    col_width: Option<f32>,

    /// Vertical stretch per row
    #[arg(long)]
    row_scale: Option<f32>,

    /// Paint a white background instead of a transparent one
    #[arg(long)]
    opaque: bool,

    /// Drop blank lines from the word list
    #[arg(long)]
    skip_blank: bool,

    /// Drop repeated words from the word list
    #[arg(long)]
    dedupe: bool,

    /// Render workers (0 = one per CPU)
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,
}

impl Args {
    fn render_style(&self) -> Result<RenderStyle> {
        let mut style = match &self.style {
            Some(path) => RenderStyle::from_json_file(path)?,
            None => RenderStyle::default(),
        };
        if let Some(v) = self.font_size {
            style.font_size = v;
        }
        if let Some(v) = self.col_width {
            style.col_width = v;
        }
        if let Some(v) = self.row_scale {
            style.row_scale = v;
        }
        if self.opaque {
            style.transparent = false;
        }
        style.validate()?;
        Ok(style)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let style = args.render_style().context("invalid render style")?;
    let options = LoadOptions {
        skip_blank: args.skip_blank,
        dedupe: args.dedupe,
    };
    let pool = WordPool::from_file(&args.words, options)?;

    let mut rng = bingo_sheets::rng::card_rng(args.seed);
    let cards = bingo_sheets::generate_cards(GridSize::new(args.height, args.width), args.nb, &pool, &mut rng)?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("cannot create output directory {}", args.output.display()))?;

    let renderer = bingo_sheets::new_renderer();
    let written = bingo_sheets::render_cards(&renderer, &cards, &args.output, &style, args.jobs)?;
    log::info!("wrote {} cards to {}", written.len(), args.output.display());
    Ok(())
}
