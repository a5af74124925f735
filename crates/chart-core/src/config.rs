// File: crates/chart-core/src/config.rs
// Summary: JSON-loadable candle style overrides.

use serde::Deserialize;
use skia_safe as skia;

use crate::axis::AxisDependency;
use crate::candle::{CandleDataSet, LineDash, MAX_BAR_SPACE};
use crate::error::{ChartError, Result};
use crate::format::DecimalFormatter;

/// Every field is optional; unset fields leave the dataset untouched.
///
/// ```json
/// { "bar_space": 0.2, "increasing_color": "#28c878", "highlight_dash": [4, 2] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CandleStyleConfig {
    pub bar_space: Option<f64>,
    pub shadow_width: Option<f32>,
    pub show_candle_bar: Option<bool>,
    pub shadow_color_same_as_candle: Option<bool>,
    pub shadow_color: Option<String>,
    pub increasing_color: Option<String>,
    pub decreasing_color: Option<String>,
    pub neutral_color: Option<String>,
    pub increasing_filled: Option<bool>,
    pub decreasing_filled: Option<bool>,
    pub highlight_color: Option<String>,
    pub highlight_line_width: Option<f32>,
    pub highlight_dash: Option<Vec<f32>>,
    pub highlight_dash_phase: Option<f32>,
    pub draw_values: Option<bool>,
    pub value_digits: Option<usize>,
    pub value_font_size: Option<f32>,
    pub axis: Option<AxisDependency>,
}

impl CandleStyleConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Validate everything first, then write into `set`; on error `set` is unchanged.
    pub fn apply(&self, set: &mut CandleDataSet) -> Result<()> {
        if let Some(space) = self.bar_space {
            if !(0.0..=MAX_BAR_SPACE).contains(&space) {
                return Err(ChartError::OutOfRange { field: "bar_space", value: space });
            }
        }
        non_negative("shadow_width", self.shadow_width)?;
        non_negative("highlight_line_width", self.highlight_line_width)?;
        non_negative("value_font_size", self.value_font_size)?;
        if let Some(lengths) = &self.highlight_dash {
            if let Some(bad) = lengths.iter().find(|l| !(l.is_finite() && **l > 0.0)) {
                return Err(ChartError::OutOfRange { field: "highlight_dash", value: *bad as f64 });
            }
        }
        let shadow = parse_opt(&self.shadow_color)?;
        let increasing = parse_opt(&self.increasing_color)?;
        let decreasing = parse_opt(&self.decreasing_color)?;
        let neutral = parse_opt(&self.neutral_color)?;
        let highlight = parse_opt(&self.highlight_color)?;

        let style = &mut set.style;
        if let Some(space) = self.bar_space { style.set_bar_space(space); }
        if let Some(w) = self.shadow_width { style.shadow_width = w; }
        if let Some(v) = self.show_candle_bar { style.show_candle_bar = v; }
        if let Some(v) = self.shadow_color_same_as_candle { style.shadow_color_same_as_candle = v; }
        if shadow.is_some() { style.shadow_color = shadow; }
        if increasing.is_some() { style.increasing_color = increasing; }
        if decreasing.is_some() { style.decreasing_color = decreasing; }
        if neutral.is_some() { style.neutral_color = neutral; }
        if let Some(v) = self.increasing_filled { style.increasing_filled = v; }
        if let Some(v) = self.decreasing_filled { style.decreasing_filled = v; }
        if let Some(c) = highlight { style.highlight.color = c; }
        if let Some(w) = self.highlight_line_width { style.highlight.line_width = w; }
        if let Some(lengths) = &self.highlight_dash {
            style.highlight.dash = if lengths.is_empty() {
                None
            } else {
                Some(LineDash { phase: self.highlight_dash_phase.unwrap_or(0.0), lengths: lengths.clone() })
            };
        }
        if let Some(v) = self.draw_values { set.draw_values = v; }
        if let Some(d) = self.value_digits { set.value_formatter = Some(Box::new(DecimalFormatter { digits: d })); }
        if let Some(s) = self.value_font_size { set.value_font_size = s; }
        if let Some(a) = self.axis { set.axis = a; }
        Ok(())
    }
}

fn non_negative(field: &'static str, v: Option<f32>) -> Result<()> {
    match v {
        Some(v) if !(v.is_finite() && v >= 0.0) => Err(ChartError::OutOfRange { field, value: v as f64 }),
        _ => Ok(()),
    }
}

fn parse_opt(s: &Option<String>) -> Result<Option<skia::Color>> {
    s.as_deref().map(parse_hex_color).transpose()
}

/// `#RRGGBB` (opaque) or `#AARRGGBB`.
pub fn parse_hex_color(s: &str) -> Result<skia::Color> {
    let err = || ChartError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }
    let v = u32::from_str_radix(hex, 16).map_err(|_| err())?;
    match hex.len() {
        6 => Ok(skia::Color::new(0xff00_0000 | v)),
        8 => Ok(skia::Color::new(v)),
        _ => Err(err()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#ff0000").unwrap(), skia::Color::RED);
        assert_eq!(parse_hex_color("#80000000").unwrap(), skia::Color::from_argb(0x80, 0, 0, 0));
        assert!(parse_hex_color("ff0000").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }

    #[test]
    fn apply_overrides_only_set_fields() {
        let mut set = CandleDataSet::new(Vec::new(), "s");
        let cfg = CandleStyleConfig::from_json(
            r##"{ "bar_space": 0.25, "decreasing_color": "#0000ff", "highlight_dash": [4, 2], "axis": "right" }"##,
        )
        .unwrap();
        cfg.apply(&mut set).unwrap();
        assert_eq!(set.style.bar_space(), 0.25);
        assert_eq!(set.style.decreasing_color, Some(skia::Color::BLUE));
        assert_eq!(set.style.increasing_color, None);
        assert_eq!(set.style.highlight.dash, Some(LineDash { phase: 0.0, lengths: vec![4.0, 2.0] }));
        assert_eq!(set.axis, AxisDependency::Right);
        assert!(set.style.show_candle_bar);
    }

    #[test]
    fn invalid_values_leave_set_untouched() {
        let mut set = CandleDataSet::new(Vec::new(), "s");
        let cfg = CandleStyleConfig { bar_space: Some(0.8), shadow_width: Some(4.0), ..Default::default() };
        assert!(matches!(cfg.apply(&mut set), Err(ChartError::OutOfRange { field: "bar_space", .. })));
        assert_eq!(set.style.shadow_width, 1.5);

        let cfg = CandleStyleConfig { neutral_color: Some("#xyz".into()), ..Default::default() };
        assert!(matches!(cfg.apply(&mut set), Err(ChartError::InvalidColor(_))));
        assert!(CandleStyleConfig::from_json(r#"{ "bogus": 1 }"#).is_err());
    }
}
