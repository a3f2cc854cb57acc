//! `cardsheet` command line: text file in, PDF card sheet out

use std::path::{Path, PathBuf};

use cardsheet::render::defaults;
use cardsheet::{
    Background, LineSource, PdfSurface, RecordingSurface, SheetConfig, TextFile,
    discover_font, metrics, render_sheet,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Lay out shuffled two-line cards onto printable PDF pages")]
struct Args {
    /// Text file with one field per line [default: cards.txt next to the executable]
    input: Option<PathBuf>,

    /// Output PDF [default: cards.pdf next to the executable]
    output: Option<PathBuf>,

    /// Card background image [default: background.png next to the executable]
    #[arg(short, long)]
    background: Option<PathBuf>,

    /// TrueType font for card text; otherwise a few well-known faces are tried
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Seed for the shuffle, for reproducible sheets
    #[arg(short, long)]
    seed: Option<u64>,

    /// Constant 88x63mm cards without gutter, with cut marks
    #[arg(long)]
    fixed_size: bool,

    /// Draw trim marks around the card grid
    #[arg(long)]
    cut_marks: bool,

    /// Cards per row
    #[arg(long, default_value_t = defaults::COLUMNS)]
    columns: usize,

    /// Rows of cards per page
    #[arg(long, default_value_t = defaults::ROWS)]
    rows: usize,

    /// Lay the sheet out and report it without writing a PDF
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn config(&self) -> SheetConfig {
        let base = if self.fixed_size { SheetConfig::fixed_size() } else { SheetConfig::default() };
        SheetConfig {
            columns: self.columns,
            rows: self.rows,
            cut_marks: base.cut_marks || self.cut_marks,
            seed: self.seed,
            ..base
        }
    }
}

/// Directory holding the running executable; bundled files live there
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let dir = exe_dir();
    let input = args.input.clone().unwrap_or_else(|| dir.join("cards.txt"));
    let output = args.output.clone().unwrap_or_else(|| dir.join("cards.pdf"));
    let background = args.background.clone().unwrap_or_else(|| dir.join("background.png"));

    // Both inputs are checked before the document exists
    let lines = TextFile::new(&input).lines()?;
    let background = Background::load(&background)?;

    let mut candidates = vec![dir.join("Marker Felt.ttf")];
    candidates.extend(metrics::SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
    let font = discover_font(args.font.as_deref(), &candidates)?;

    let config = args.config();
    let mut rng = config.rng();

    if args.dry_run {
        let mut surface = RecordingSurface::new(defaults::PAGE_SIZE, background.aspect_ratio())
            .with_metrics(font);
        let summary = render_sheet(lines, config, &mut surface, &mut rng)?;
        for card in &summary.placements {
            let size = |field: Option<cardsheet::render::FittedText>| {
                field.map_or_else(|| "-".to_string(), |f| format!("{}pt", f.size))
            };
            println!(
                "card {} page {} cell ({}, {}) upper {} lower {}",
                card.index + 1,
                card.page + 1,
                card.column,
                card.row,
                size(card.rendered.upper),
                size(card.rendered.lower),
            );
        }
        println!("{} cards on {} pages", summary.cards, surface.page_count());
        return Ok(());
    }

    let mut surface = PdfSurface::new("Cards", defaults::PAGE_SIZE, background, font)?;
    let summary = render_sheet(lines, config, &mut surface, &mut rng)?;
    surface.finish(&output)?;

    tracing::info!(cards = summary.cards, pages = summary.pages, "sheet complete");
    println!("PDF written to: {}", output.display());
    Ok(())
}
