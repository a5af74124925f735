// File: crates/demo/src/main.rs
// Summary: Demo loads an OHLC CSV (and optional JSON style) and renders a candlestick chart to PNG.

use anyhow::{Context, Result};
use chart_core::{
    BarDataSet, BarEntry, CandleData, CandleDataSet, CandleEntry, CandleStickChart, CandleStyleConfig,
    theme, DataSetSelector, RenderOptions, Theme,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept path from CLI or fall back to sample filename (supports .csv/.cvs swap)
    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .unwrap_or_else(|| "binanceus_CRVUSDT_6h_2023-09-13_to_2025-01-21.cvs".to_string());
    let style_path = args.next().map(PathBuf::from);
    let theme_name = args.next();

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), swapped_extension = used_alt, "using input file");

    let candles = load_ohlc_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(count = candles.len(), "loaded candles");

    if candles.is_empty() {
        anyhow::bail!("no candles loaded; check headers/delimiter.");
    }

    log_anatomy(&candles);

    let theme = match theme_name.as_deref() {
        None => Theme::dark(),
        Some(name) => theme::find(name).unwrap_or_else(|| {
            let known = theme::presets().iter().map(|t| t.name).collect::<Vec<_>>();
            warn!(name, ?known, "unknown theme, using dark");
            Theme::dark()
        }),
    };
    info!(theme = theme.name, "using theme");
    let mut set = CandleDataSet::new(candles, path.file_stem().and_then(|s| s.to_str()).unwrap_or("candles"));
    theme.style_data_set(&mut set);
    if let Some(style_path) = &style_path {
        let cfg = CandleStyleConfig::from_path(style_path)
            .with_context(|| format!("reading style '{}'", style_path.display()))?;
        cfg.apply(&mut set)
            .with_context(|| format!("applying style '{}'", style_path.display()))?;
        info!(path = %style_path.display(), "applied style");
    }

    let last_x = set.x_max();
    let mut chart = CandleStickChart::new(CandleData::new(vec![set]));
    chart.highlight_value(last_x, DataSetSelector::All);

    let opts = RenderOptions { theme, ..RenderOptions::default() };
    let out = out_name(&path);
    chart.render_to_png(&opts, &out)?;
    info!(out = %out.display(), "wrote chart");

    Ok(())
}

/// Split each candle into body / upper wick / lower wick and summarise them as stacked bars.
fn log_anatomy(candles: &[CandleEntry]) {
    let bars = candles
        .iter()
        .map(|c| {
            let top = c.open.max(c.close);
            let bottom = c.open.min(c.close);
            BarEntry::stacked(c.x, vec![c.close - c.open, c.high - top, -(bottom - c.low)])
        })
        .collect();
    let anatomy = BarDataSet::new(bars, "anatomy");
    info!(
        stack_size = anatomy.stack_size(),
        values = anatomy.entry_count_stacks(),
        y_min = anatomy.y_min(),
        y_max = anatomy.y_max(),
        "candle anatomy"
    );
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Output file name: target/out/candles_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push("candles.png");
    } else {
        out.push(format!("candles_{stem}.png"));
    }
    out
}

/// Load Binance-like OHLC CSV. Candles are placed at their row index so one
/// x unit is one candle.
fn load_ohlc_csv(path: &Path) -> Result<Vec<CandleEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> { i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) };
        match (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            (Some(o), Some(h), Some(l), Some(c)) => out.push(CandleEntry::new(out.len() as f64, o, h, l, c)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a full OHLC quadruple were skipped");
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_named_after_input_stem() {
        assert_eq!(
            out_name(Path::new("data/binanceus_CRVUSDT_6h.csv")),
            PathBuf::from("target/out/candles_binanceus_CRVUSDT_6h.png")
        );
        assert_eq!(out_name(Path::new("")), PathBuf::from("target/out/candles.png"));
    }

    #[test]
    fn extension_swap_between_csv_and_cvs() {
        assert_eq!(swap_ext(Path::new("a.cvs")), Some(PathBuf::from("a.csv")));
        assert_eq!(swap_ext(Path::new("a.CSV")), Some(PathBuf::from("a.cvs")));
        assert_eq!(swap_ext(Path::new("a.txt")), None);
    }
}
