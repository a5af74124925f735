// File: crates/chart-core/tests/chart_render.rs
// Purpose: Chart host behaviour (axes, visible range, highlights) and end-to-end PNG rendering.

use chart_core::{
    AxisDependency, CandleData, CandleDataProvider, CandleDataSet, CandleEntry, CandleStickChart,
    CandleStyleConfig, DataSetSelector, DrawOp, Insets, RecordingContext, RenderOptions, Theme,
};

fn candles(n: usize) -> Vec<CandleEntry> {
    (0..n)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.7).sin() * 5.0;
            let (open, close) = if i % 3 == 0 { (base, base + 1.5) } else { (base + 1.0, base - 0.5) };
            CandleEntry::new(i as f64, open, open.max(close) + 1.0, open.min(close) - 1.0, close)
        })
        .collect()
}

fn chart(n: usize) -> CandleStickChart {
    let mut chart = CandleStickChart::new(CandleData::new(vec![CandleDataSet::new(candles(n), "prices")]));
    chart.set_viewport(420, 220, Insets::new(10, 10, 10, 10));
    chart
}

fn no_chrome() -> RenderOptions {
    RenderOptions { draw_grid: false, draw_values: false, ..RenderOptions::default() }
}

#[test]
fn axes_fit_data_with_padding() {
    let c = chart(20);
    assert_eq!((c.x_axis.min, c.x_axis.max), (-0.5, 19.5));
    let set = &c.data.data_sets[0];
    assert!(c.left_axis.min < set.y_min() && c.left_axis.max > set.y_max());
    // no right-axis sets: right axis mirrors the left one
    assert_eq!((c.right_axis.min, c.right_axis.max), (c.left_axis.min, c.left_axis.max));
}

#[test]
fn visible_range_spans_whole_axis_until_zoomed() {
    let mut c = chart(20);
    assert!((c.lowest_visible_x() - -0.5).abs() < 1e-9);
    assert!((c.highest_visible_x() - 19.5).abs() < 1e-9);

    c.set_zoom(2.0, 0.0);
    assert!((c.lowest_visible_x() - -0.5).abs() < 1e-9);
    assert!((c.highest_visible_x() - 9.5).abs() < 1e-9);
}

#[test]
fn draw_visits_every_candle() {
    let c = chart(20);
    let mut ctx = RecordingContext::new();
    c.draw(&mut ctx, &no_chrome());
    // one wick + one body per candle
    assert_eq!(ctx.segments().count(), 20);
    assert_eq!(ctx.rects().count(), 20);
    assert_eq!(ctx.save_depth(), 0);
}

#[test]
fn zoomed_draw_visits_fewer_candles() {
    let mut c = chart(20);
    c.set_zoom(4.0, 0.0);
    let mut ctx = RecordingContext::new();
    c.draw(&mut ctx, &no_chrome());
    let drawn = ctx.segments().count();
    assert!(drawn > 0 && drawn < 20, "drew {drawn}");
}

#[test]
fn value_labels_and_highlights_in_frame() {
    let mut c = chart(12);
    c.highlight_value(3.0, DataSetSelector::All);
    c.highlight_value(3.25, DataSetSelector::All);
    let opts = RenderOptions { draw_grid: false, ..RenderOptions::default() };

    let mut ctx = RecordingContext::new();
    c.draw(&mut ctx, &opts);
    assert!(ctx.texts().count() > 0);
    // crosshair for x = 3 only: two more segments than the 12 wicks
    assert_eq!(ctx.segments().count(), 14);

    c.clear_highlights();
    assert!(c.highlights().is_empty());
}

#[test]
fn right_axis_sets_use_right_transformer() {
    let mut right = CandleDataSet::new(vec![CandleEntry::new(0.0, 1000.0, 1010.0, 990.0, 1005.0)], "right");
    right.axis = AxisDependency::Right;
    let mut c = CandleStickChart::new(CandleData::new(vec![CandleDataSet::new(candles(5), "left"), right]));
    c.set_viewport(300, 200, Insets::new(0, 0, 0, 0));
    assert!(c.right_axis.min > 900.0);
    assert!(c.left_axis.max < 200.0);
    assert_ne!(c.transformer(AxisDependency::Left), c.transformer(AxisDependency::Right));
}

#[test]
fn grid_is_drawn_when_enabled() {
    let c = chart(3);
    let mut ctx = RecordingContext::new();
    let opts = RenderOptions { draw_values: false, ..RenderOptions::default() };
    c.draw(&mut ctx, &opts);
    let theme = Theme::dark();
    let grid_lines = ctx
        .segments()
        .filter(|op| matches!(op, DrawOp::Segments { color, .. } if *color == theme.grid))
        .count();
    assert_eq!(grid_lines, 16);
}

#[test]
fn style_config_changes_rendering() {
    let mut c = chart(6);
    let cfg = CandleStyleConfig::from_json(r##"{ "show_candle_bar": false, "neutral_color": "#808080" }"##)
        .expect("valid style");
    cfg.apply(&mut c.data.data_sets[0]).expect("apply style");

    let mut ctx = RecordingContext::new();
    c.draw(&mut ctx, &no_chrome());
    assert_eq!(ctx.rects().count(), 0);
    assert_eq!(ctx.segments().count(), 18);
}

#[test]
fn render_png_smoke() {
    let mut c = chart(40);
    c.highlight_value(10.0, DataSetSelector::Index(0));
    for set in &mut c.data.data_sets {
        Theme::dark().style_data_set(set);
    }
    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 300;
    opts.draw_values = false; // avoid font variance

    let bytes = c.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (480, 300));
    // background in the top-left corner, fully opaque
    let px = img.get_pixel(0, 0);
    assert_eq!(px.0, [18, 18, 20, 255]);

    let out = std::path::PathBuf::from("target/test_out/candles.png");
    c.render_to_png(&opts, &out).expect("render to file");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
