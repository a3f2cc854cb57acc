use std::path::Path;

use cardsheet::metrics::TrueTypeMetrics;
use cardsheet::render::defaults;
use cardsheet::surface::DrawOp;
use cardsheet::{
    Background, FontMetrics, LineSource, PdfSurface, RecordingSurface, SheetConfig, SheetError,
    SheetSummary, TextFile, render_sheet,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("field number {i}")).collect()
}

fn run(lines: Vec<String>, config: SheetConfig, seed: u64) -> (SheetSummary, RecordingSurface) {
    let mut surface = RecordingSurface::new(defaults::PAGE_SIZE, 1.4);
    let mut rng = StdRng::seed_from_u64(seed);
    let summary = render_sheet(lines, config, &mut surface, &mut rng).unwrap();
    (summary, surface)
}

#[test]
fn four_lines_fill_the_first_two_cells() {
    let (summary, surface) = run(lines(4), SheetConfig::default(), 7);
    assert_eq!(summary.cards, 2);
    assert_eq!(summary.pages, 1);
    assert_eq!(surface.page_count(), 1);

    let cells: Vec<_> = summary.placements.iter().map(|p| (p.page, p.column, p.row)).collect();
    assert_eq!(cells, vec![(0, 0, 0), (0, 1, 0)]);
    assert_eq!(surface.images(0).count(), 2);
}

#[test]
fn single_line_skips_the_lower_field() {
    let (summary, surface) = run(vec!["solo".to_string()], SheetConfig::default(), 7);
    assert_eq!(summary.cards, 1);
    let card = summary.placements[0].rendered;
    assert!(card.upper.is_some());
    assert_eq!(card.lower, None);
    assert_eq!(surface.text_runs(0).count(), 1);
}

#[test]
fn twenty_lines_spill_onto_a_second_page() {
    let (summary, surface) = run(lines(20), SheetConfig::default(), 7);
    assert_eq!(summary.cards, 10);
    assert_eq!(summary.pages, 2);
    assert_eq!(surface.page_count(), 2);
    assert_eq!(surface.images(0).count(), 9);
    assert_eq!(surface.images(1).count(), 1);

    let last = summary.placements.last().unwrap();
    assert_eq!((last.page, last.column, last.row), (1, 0, 0));
}

#[test]
fn card_count_is_half_the_lines_rounded_up() {
    for n in 1..40 {
        let (summary, _) = run(lines(n), SheetConfig::default(), n as u64);
        assert_eq!(summary.cards, n.div_ceil(2), "{n} lines");
        assert_eq!(summary.placements.len(), summary.cards);
    }
}

#[test]
fn every_line_is_drawn_exactly_once() {
    let input = lines(13);
    let (_, surface) = run(input.clone(), SheetConfig::default(), 99);
    let mut drawn: Vec<String> = (0..surface.page_count())
        .flat_map(|page| surface.text_runs(page).map(|r| r.text.clone()).collect::<Vec<_>>())
        .collect();
    // fields this short never wrap on a default card
    drawn.sort();
    let mut expected = input;
    expected.sort();
    assert_eq!(drawn, expected);
}

#[test]
fn same_seed_same_sheet() {
    let (a, surface_a) = run(lines(25), SheetConfig::default(), 1234);
    let (b, surface_b) = run(lines(25), SheetConfig::default(), 1234);
    assert_eq!(a, b);
    assert_eq!(surface_a.pages(), surface_b.pages());
}

#[test]
fn card_aspect_follows_the_background() {
    for aspect in [0.5, 0.71, 1.0, 1.4, 2.5, 6.0] {
        let mut surface = RecordingSurface::new(defaults::PAGE_SIZE, aspect);
        let mut rng = StdRng::seed_from_u64(0);
        let summary = render_sheet(lines(2), SheetConfig::default(), &mut surface, &mut rng).unwrap();
        let card = summary.geometry.card;
        assert!((card.w.raw() / card.h.raw() - aspect).abs() < 1e-9, "aspect {aspect}");

        let grid = summary.geometry.grid_rect();
        let margin = defaults::MARGIN.raw();
        assert!(grid.left().raw() >= margin - 1e-9);
        assert!(grid.top().raw() >= margin - 1e-9);
        assert!(grid.right().raw() <= defaults::PAGE_SIZE.w.raw() - margin + 1e-9);
        assert!(grid.bottom().raw() <= defaults::PAGE_SIZE.h.raw() - margin + 1e-9);
    }
}

#[test]
fn fixed_size_marks_every_page() {
    let (summary, surface) = run(lines(20), SheetConfig::fixed_size(), 5);
    assert_eq!(summary.geometry.card, defaults::FIXED_CARD);
    assert_eq!(surface.page_count(), 2);
    // full 3x3 grid of ticks, even on the nearly empty last page
    assert_eq!(surface.line_count(0), 60);
    assert_eq!(surface.line_count(1), 60);

    let last_page = surface.ops(1);
    assert!(matches!(last_page[0], DrawOp::Image(_)));
    assert!(matches!(last_page.last(), Some(DrawOp::Line { .. })));
}

#[test]
fn fixed_size_grid_is_centered_on_the_page() {
    let (summary, _) = run(lines(2), SheetConfig::fixed_size(), 5);
    let grid = summary.geometry.grid_rect();
    let page = defaults::PAGE_SIZE;
    assert!((grid.left() - (page.w - grid.right())).raw().abs() < 1e-9);
    assert!((grid.top() - (page.h - grid.bottom())).raw().abs() < 1e-9);
}

#[test]
fn aspect_fit_draws_no_cut_marks_by_default() {
    let (_, surface) = run(lines(6), SheetConfig::default(), 5);
    assert_eq!(surface.line_count(0), 0);
}

#[test]
fn oversized_field_is_drawn_at_minimum_size() {
    let long = "palabra ".repeat(40);
    let (summary, surface) = run(vec![long, "corto".to_string()], SheetConfig::default(), 2);
    let card = summary.placements[0].rendered;
    let sizes = [card.upper.unwrap().size, card.lower.unwrap().size];
    assert!(sizes.contains(&defaults::MIN_FONT_SIZE));
    assert!(surface.text_runs(0).count() > 2);
}

#[test]
fn missing_input_is_reported() {
    let err = TextFile::new("/definitely/not/here.txt").lines().unwrap_err();
    assert!(matches!(err, SheetError::MissingInput { .. }));
}

#[test]
fn missing_background_is_reported() {
    let err = Background::load(Path::new("/definitely/not/here.png")).unwrap_err();
    assert!(matches!(err, SheetError::MissingBackground { .. }));
}

fn roboto() -> TrueTypeMetrics {
    TrueTypeMetrics::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/RobotoMedium.ttf"))
        .unwrap()
}

/// Lay out 20 lines onto a real PDF in a scratch directory and read it back
fn write_pdf(font: FontMetrics) -> (SheetSummary, lopdf::Document) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cards.txt");
    let background = dir.path().join("background.png");
    let output = dir.path().join("cards.pdf");

    let text: String = lines(20).iter().map(|l| format!("{l}\n")).collect();
    std::fs::write(&input, text).unwrap();
    image::RgbaImage::from_pixel(60, 40, image::Rgba([30, 90, 160, 200]))
        .save(&background)
        .unwrap();

    let lines = TextFile::new(&input).lines().unwrap();
    assert_eq!(lines.len(), 20);
    let background = Background::load(&background).unwrap();
    assert!((background.aspect_ratio() - 1.5).abs() < 1e-12);

    let config = SheetConfig { seed: Some(42), ..SheetConfig::fixed_size() };
    let mut rng = config.rng();
    let mut surface = PdfSurface::new("Cards", defaults::PAGE_SIZE, background, font).unwrap();
    let summary = render_sheet(lines, config, &mut surface, &mut rng).unwrap();
    surface.finish(&output).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    (summary, lopdf::Document::load(&output).unwrap())
}

fn embeds_truetype(doc: &lopdf::Document) -> bool {
    doc.objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .any(|dict| dict.has(b"FontFile2"))
}

#[test]
fn writes_a_two_page_pdf() {
    let (summary, doc) = write_pdf(FontMetrics::default());
    assert_eq!(summary.cards, 10);
    assert_eq!(summary.pages, 2);
    assert_eq!(doc.get_pages().len(), 2);
    assert!(!embeds_truetype(&doc));
}

#[test]
fn writes_a_pdf_with_an_embedded_truetype_font() {
    let (summary, doc) = write_pdf(FontMetrics::from(roboto()));
    assert_eq!(summary.pages, 2);
    assert_eq!(doc.get_pages().len(), 2);
    assert!(embeds_truetype(&doc));
}

#[test]
fn truetype_metrics_change_the_fitted_sizes() {
    // Two-line fits that Helvetica's 1.156em line height allows at 11pt but
    // Roboto's 1.172em does not
    let input = vec![
        "una frase bastante larga para la carta".to_string(),
        "el perro de san roque no tiene rabo".to_string(),
    ];
    let sizes = |summary: &SheetSummary| {
        let card = summary.placements[0].rendered;
        [card.upper.unwrap().size, card.lower.unwrap().size]
    };

    let (helvetica, _) = run(input.clone(), SheetConfig::default(), 3);

    let mut surface = RecordingSurface::new(defaults::PAGE_SIZE, 1.4).with_metrics(roboto().into());
    let mut rng = StdRng::seed_from_u64(3);
    let truetype = render_sheet(input, SheetConfig::default(), &mut surface, &mut rng).unwrap();

    assert_ne!(sizes(&helvetica), sizes(&truetype));
    for (h, t) in sizes(&helvetica).into_iter().zip(sizes(&truetype)) {
        assert!(t < h, "TrueType {t} vs Helvetica {h}");
    }
}
