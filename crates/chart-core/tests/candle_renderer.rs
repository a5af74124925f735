// File: crates/chart-core/tests/candle_renderer.rs
// Purpose: Candlestick renderer geometry, colours, windowing and highlights against a recording context.

use chart_core::{
    Animator, AxisDependency, CandleData, CandleDataProvider, CandleDataSet, CandleEntry, CandleStickRenderer,
    DataRenderer, DataSetSelector, DrawOp, Highlight, Insets, LineDash, Point, RecordingContext, Rect, TextAlign,
    Transformer, ViewPortHandler,
};
use skia_safe::Color;

const SHADOW: Color = Color::GRAY;

/// 100x100 content area, x in [0, 10] and y in [0, 100]:
/// px = 10·x, py = 100 − y.
struct Fixture {
    data: CandleData,
    trans: Transformer,
    lowest: f64,
    highest: f64,
    max_values: usize,
}

impl Fixture {
    fn new(sets: Vec<CandleDataSet>, lowest: f64, highest: f64) -> Self {
        Self {
            data: CandleData::new(sets),
            trans: Transformer::prepare(&viewport(), 0.0, 10.0, 0.0, 100.0),
            lowest,
            highest,
            max_values: 100,
        }
    }
}

impl CandleDataProvider for Fixture {
    fn candle_data(&self) -> Option<&CandleData> { Some(&self.data) }
    fn lowest_visible_x(&self) -> f64 { self.lowest }
    fn highest_visible_x(&self) -> f64 { self.highest }
    fn max_visible_value_count(&self) -> usize { self.max_values }
    fn transformer(&self, _axis: AxisDependency) -> &Transformer { &self.trans }
}

fn viewport() -> ViewPortHandler {
    ViewPortHandler::new(100, 100, Insets::new(0, 0, 0, 0))
}

fn styled(entries: Vec<CandleEntry>) -> CandleDataSet {
    let mut set = CandleDataSet::new(entries, "candles");
    set.style.set_bar_space(0.1);
    set.style.increasing_color = Some(Color::GREEN);
    set.style.decreasing_color = Some(Color::RED);
    set.style.neutral_color = Some(Color::BLUE);
    set.style.shadow_color = Some(SHADOW);
    set
}

fn two_candles() -> Vec<CandleEntry> {
    vec![
        CandleEntry::new(0.0, 10.0, 13.0, 9.0, 12.0),
        CandleEntry::new(1.0, 12.0, 13.0, 10.0, 11.0),
    ]
}

fn series(n: usize) -> Vec<CandleEntry> {
    (0..n).map(|i| CandleEntry::new(i as f64, 10.0, 12.0, 8.0, 11.0)).collect()
}

fn render(fixture: &Fixture) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(fixture), Some(Animator::finished()), Some(viewport()));
    r.draw_data(&mut ctx);
    ctx
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn rect_close(r: &Rect, l: f64, t: f64, rr: f64, b: f64) -> bool {
    let s = r.standardized();
    close(s.x, l) && close(s.y, t) && close(s.x + s.width, rr) && close(s.y + s.height, b)
}

#[test]
fn bodies_and_wicks_for_two_trends() {
    let fixture = Fixture::new(vec![styled(two_candles())], 0.0, 1.0);
    let ctx = render(&fixture);
    assert_eq!(ctx.ops.len(), 4);
    assert_eq!(ctx.save_depth(), 0);

    // entry 0: increasing, outlined body (increasing_filled defaults to false)
    match &ctx.ops[0] {
        DrawOp::Segments { points, color, width, .. } => {
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            assert_eq!(ys, vec![87.0, 88.0, 91.0, 90.0]);
            assert!(points.iter().all(|p| close(p.x, 0.0)));
            assert_eq!(*color, SHADOW);
            assert_eq!(*width, 1.5);
        }
        other => panic!("expected wick, got {other:?}"),
    }
    match &ctx.ops[1] {
        DrawOp::StrokeRect { rect, color, .. } => {
            assert!(rect_close(rect, -4.0, 88.0, 4.0, 90.0), "{rect:?}");
            assert_eq!(*color, Color::GREEN);
        }
        other => panic!("expected outlined body, got {other:?}"),
    }

    // entry 1: decreasing, filled body
    match &ctx.ops[3] {
        DrawOp::FillRect { rect, color } => {
            assert!(rect_close(rect, 6.0, 88.0, 14.0, 89.0), "{rect:?}");
            assert_eq!(*color, Color::RED);
        }
        other => panic!("expected filled body, got {other:?}"),
    }
}

#[test]
fn neutral_candle_is_outlined_and_wick_collapses() {
    let mut set = styled(vec![CandleEntry::new(0.0, 50.0, 60.0, 40.0, 50.0), CandleEntry::new(1.0, 1.0, 2.0, 0.0, 1.5)]);
    set.style.increasing_filled = true;
    let fixture = Fixture::new(vec![set], 0.0, 1.0);
    let ctx = render(&fixture);

    match &ctx.ops[0] {
        DrawOp::Segments { points, .. } => assert_eq!(points[1], points[3]),
        other => panic!("expected wick, got {other:?}"),
    }
    assert!(matches!(&ctx.ops[1], DrawOp::StrokeRect { color, .. } if *color == Color::BLUE));
    assert!(matches!(&ctx.ops[3], DrawOp::FillRect { color, .. } if *color == Color::GREEN));
}

#[test]
fn shadow_follows_candle_colour_when_asked() {
    let mut set = styled(two_candles());
    set.style.shadow_color_same_as_candle = true;
    let fixture = Fixture::new(vec![set], 0.0, 1.0);
    let ctx = render(&fixture);
    let colors: Vec<Color> = ctx
        .segments()
        .map(|op| match op {
            DrawOp::Segments { color, .. } => *color,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(colors, vec![Color::GREEN, Color::RED]);
}

#[test]
fn unset_colours_fall_back_to_palette() {
    let mut set = CandleDataSet::new(two_candles(), "palette");
    set.colors = vec![Color::CYAN, Color::MAGENTA];
    let fixture = Fixture::new(vec![set], 0.0, 1.0);
    let ctx = render(&fixture);
    let expected = [Color::CYAN, Color::CYAN, Color::MAGENTA, Color::MAGENTA];
    for (op, want) in ctx.ops.iter().zip(expected) {
        let got = match op {
            DrawOp::Segments { color, .. } | DrawOp::StrokeRect { color, .. } | DrawOp::FillRect { color, .. } => *color,
            DrawOp::Text { .. } => unreachable!(),
        };
        assert_eq!(got, want);
    }
}

#[test]
fn tick_mode_draws_three_segments_in_trend_colour() {
    let mut set = styled(two_candles());
    set.style.show_candle_bar = false;
    let fixture = Fixture::new(vec![set], 0.0, 1.0);
    let ctx = render(&fixture);
    assert_eq!(ctx.ops.len(), 6);
    assert_eq!(ctx.rects().count(), 0);

    match (&ctx.ops[0], &ctx.ops[1], &ctx.ops[2]) {
        (
            DrawOp::Segments { points: range, color: c0, .. },
            DrawOp::Segments { points: open, .. },
            DrawOp::Segments { points: close_tick, .. },
        ) => {
            assert_eq!(*c0, Color::GREEN);
            assert_eq!(range, &vec![Point::new(0.0, 87.0), Point::new(0.0, 91.0)]);
            assert!(close(open[0].x, -4.0) && close(open[1].x, 0.0) && close(open[0].y, 90.0));
            assert!(close(close_tick[0].x, 4.0) && close(close_tick[1].x, 0.0) && close(close_tick[0].y, 88.0));
        }
        other => panic!("unexpected ops {other:?}"),
    }
    assert!(matches!(&ctx.ops[3], DrawOp::Segments { color, .. } if *color == Color::RED));
}

#[test]
fn visible_window_limits_entries() {
    let fixture = Fixture::new(vec![styled(series(10))], 3.2, 6.7);
    let ctx = render(&fixture);
    // indices 3..8
    assert_eq!(ctx.segments().count(), 5);
    let first_x = match ctx.segments().next() {
        Some(DrawOp::Segments { points, .. }) => points[0].x,
        _ => unreachable!(),
    };
    assert!(close(first_x, 30.0));
}

#[test]
fn coinciding_bounds_widen_the_window() {
    let fixture = Fixture::new(vec![styled(series(10))], 5.0, 5.0);
    let ctx = render(&fixture);
    // widened to indices 4..6
    assert_eq!(ctx.segments().count(), 2);
}

#[test]
fn horizontal_phase_reveals_left_to_right() {
    let fixture = Fixture::new(vec![styled(series(10))], 0.0, 9.0);
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::new(0.5, 1.0)), Some(viewport()));
    r.draw_data(&mut ctx);
    assert_eq!(ctx.segments().count(), 5);

    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::new(-2.0, 1.0)), Some(viewport()));
    r.draw_data(&mut ctx);
    assert!(ctx.ops.is_empty());
}

#[test]
fn vertical_phase_scales_prices() {
    let fixture = Fixture::new(vec![styled(two_candles())], 0.0, 1.0);
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::new(1.0, 0.5)), Some(viewport()));
    r.draw_data(&mut ctx);
    match &ctx.ops[0] {
        DrawOp::Segments { points, .. } => assert!(close(points[0].y, 100.0 - 6.5)),
        other => panic!("expected wick, got {other:?}"),
    }
}

#[test]
fn vertical_phase_above_one_overshoots_prices() {
    let fixture = Fixture::new(vec![styled(two_candles())], 0.0, 1.0);
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::new(1.0, 1.5)), Some(viewport()));
    r.draw_data(&mut ctx);

    // high 13 → 19.5, close 12 → 18, low 9 → 13.5, open 10 → 15
    match &ctx.ops[0] {
        DrawOp::Segments { points, .. } => {
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            assert!(ys.iter().zip([80.5, 82.0, 86.5, 85.0]).all(|(a, b)| close(*a, b)), "{ys:?}");
            // above the unscaled high (py 87)
            assert!(points[0].y < 87.0);
        }
        other => panic!("expected wick, got {other:?}"),
    }
    match &ctx.ops[1] {
        DrawOp::StrokeRect { rect, .. } => assert!(rect_close(rect, -4.0, 82.0, 4.0, 85.0), "{rect:?}"),
        other => panic!("expected outlined body, got {other:?}"),
    }
}

#[test]
fn hidden_or_empty_sets_are_skipped() {
    let mut hidden = styled(two_candles());
    hidden.visible = false;
    let empty = styled(Vec::new());
    let fixture = Fixture::new(vec![hidden, empty], 0.0, 1.0);
    assert!(render(&fixture).ops.is_empty());
}

#[test]
fn missing_collaborators_draw_nothing() {
    let fixture = Fixture::new(vec![styled(two_candles())], 0.0, 1.0);
    let mut ctx = RecordingContext::new();

    let mut r = CandleStickRenderer::new(Some(&fixture), None, Some(viewport()));
    r.draw_data(&mut ctx);
    r.draw_values(&mut ctx);
    r.draw_highlighted(&mut ctx, &[Highlight::all(0.0)]);

    let mut r = CandleStickRenderer::new(None, Some(Animator::finished()), Some(viewport()));
    r.draw_data(&mut ctx);
    r.draw_values(&mut ctx);
    r.draw_highlighted(&mut ctx, &[Highlight::all(0.0)]);

    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::finished()), None);
    r.draw_values(&mut ctx);
    r.draw_highlighted(&mut ctx, &[Highlight::all(0.0)]);
    r.draw_extras(&mut ctx);

    assert!(ctx.ops.is_empty());
    assert_eq!(ctx.save_depth(), 0);
}

#[test]
fn value_labels_above_wick_top() {
    let fixture = Fixture::new(vec![styled(two_candles())], 0.0, 2.0);
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::finished()), Some(viewport()));
    r.draw_values(&mut ctx);

    let texts: Vec<(String, Point, TextAlign)> = ctx
        .texts()
        .map(|op| match op {
            DrawOp::Text { text, at, align, .. } => (text.clone(), *at, *align),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].0, "13.0");
    assert_eq!(texts[0].2, TextAlign::Center);
    // wick top at py 87, label offset = font size 7 + 5
    assert!(close(texts[0].1.x, 0.0) && close(texts[0].1.y, 75.0));
    assert!(close(texts[1].1.x, 10.0));
}

#[test]
fn value_labels_suppressed_when_dense() {
    let mut fixture = Fixture::new(vec![styled(two_candles())], 0.0, 2.0);
    fixture.max_values = 2;
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::finished()), Some(viewport()));
    r.draw_values(&mut ctx);
    assert_eq!(ctx.texts().count(), 0);

    // zooming in raises the threshold
    let mut zoomed = viewport();
    zoomed.set_zoom(2.0, 0.0);
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::finished()), Some(zoomed));
    r.draw_values(&mut ctx);
    assert!(ctx.texts().count() > 0);
}

#[test]
fn value_labels_skip_out_of_view_and_disabled_sets() {
    // second candle's high is above the content area; third is past the right edge
    let entries = vec![
        CandleEntry::new(0.0, 10.0, 13.0, 9.0, 12.0),
        CandleEntry::new(1.0, 10.0, 150.0, 9.0, 12.0),
        CandleEntry::new(2.0, 10.0, 14.0, 9.0, 12.0),
        CandleEntry::new(20.0, 10.0, 15.0, 9.0, 12.0),
        CandleEntry::new(4.0, 10.0, 16.0, 9.0, 12.0),
    ];
    let fixture = Fixture::new(vec![styled(entries)], 0.0, 5.0);
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::finished()), Some(viewport()));
    r.draw_values(&mut ctx);
    let labels: Vec<String> = ctx
        .texts()
        .map(|op| match op {
            DrawOp::Text { text, .. } => text.clone(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(labels, vec!["13.0".to_string(), "14.0".to_string()]);

    let mut set = styled(two_candles());
    set.draw_values = false;
    let fixture = Fixture::new(vec![set], 0.0, 2.0);
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::finished()), Some(viewport()));
    r.draw_values(&mut ctx);
    assert!(ctx.ops.is_empty());
}

fn highlight_fixture() -> Fixture {
    let entries = vec![
        CandleEntry::new(4.0, 10.0, 60.0, 20.0, 12.0),
        CandleEntry::new(5.0, 10.0, 80.0, 40.0, 12.0),
        CandleEntry::new(6.0, 10.0, 70.0, 30.0, 12.0),
    ];
    let mut set = styled(entries);
    set.style.highlight.dash = Some(LineDash { phase: 0.0, lengths: vec![3.0, 2.0] });
    Fixture::new(vec![set], 0.0, 10.0)
}

fn highlight(fixture: &Fixture, highlights: &[Highlight]) -> RecordingContext {
    let mut ctx = RecordingContext::new();
    let mut r = CandleStickRenderer::new(Some(fixture), Some(Animator::finished()), Some(viewport()));
    r.draw_highlighted(&mut ctx, highlights);
    ctx
}

#[test]
fn highlight_exact_match_draws_crosshair() {
    let fixture = highlight_fixture();
    let ctx = highlight(&fixture, &[Highlight::new(5.0, DataSetSelector::Index(0))]);
    assert_eq!(ctx.ops.len(), 2);
    assert_eq!(ctx.save_depth(), 0);
    match (&ctx.ops[0], &ctx.ops[1]) {
        (
            DrawOp::Segments { points: v, color, width, dash },
            DrawOp::Segments { points: h, .. },
        ) => {
            // midpoint of low 40 / high 80 is 60 → py 40
            assert_eq!(v, &vec![Point::new(50.0, 0.0), Point::new(50.0, 100.0)]);
            assert_eq!(h, &vec![Point::new(0.0, 40.0), Point::new(100.0, 40.0)]);
            assert_eq!(*color, Color::from_argb(255, 255, 187, 115));
            assert_eq!(*width, 0.5);
            assert_eq!(dash.as_ref().map(|d| d.lengths.clone()), Some(vec![3.0, 2.0]));
        }
        other => panic!("unexpected ops {other:?}"),
    }
}

#[test]
fn highlight_without_exact_entry_is_skipped() {
    let fixture = highlight_fixture();
    assert!(highlight(&fixture, &[Highlight::all(5.5)]).ops.is_empty());
    assert!(highlight(&fixture, &[Highlight::new(5.0, DataSetSelector::Index(3))]).ops.is_empty());
}

#[test]
fn highlight_respects_flags() {
    let mut fixture = highlight_fixture();
    fixture.data.data_sets[0].style.highlight.draw_horizontal = false;
    assert_eq!(highlight(&fixture, &[Highlight::all(4.0)]).ops.len(), 1);

    fixture.data.data_sets[0].highlight_enabled = false;
    assert!(highlight(&fixture, &[Highlight::all(4.0)]).ops.is_empty());
}

#[test]
fn highlight_all_covers_every_set() {
    let mut fixture = highlight_fixture();
    fixture.data.data_sets.push(styled(vec![CandleEntry::new(6.0, 1.0, 2.0, 0.0, 1.5)]));
    let ctx = highlight(&fixture, &[Highlight::all(6.0)]);
    assert_eq!(ctx.ops.len(), 4);
}

#[test]
fn highlight_midpoint_follows_vertical_phase() {
    let fixture = highlight_fixture();
    // low 40 / high 80 at x = 5
    for (phase_y, py) in [(0.5, 70.0), (1.5, 10.0)] {
        let mut ctx = RecordingContext::new();
        let mut r = CandleStickRenderer::new(Some(&fixture), Some(Animator::new(1.0, phase_y)), Some(viewport()));
        r.draw_highlighted(&mut ctx, &[Highlight::all(5.0)]);
        match &ctx.ops[1] {
            DrawOp::Segments { points, .. } => {
                assert!(close(points[0].y, py) && close(points[1].y, py), "phase {phase_y}: {points:?}");
            }
            other => panic!("expected horizontal line, got {other:?}"),
        }
    }
}
