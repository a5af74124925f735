// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome and default candle colours.

use skia_safe as skia;

use crate::candle::CandleDataSet;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    /// Per-index fallback colour given to datasets.
    pub palette: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
    pub candle_neutral: skia::Color,
    pub value_text: skia::Color,
    pub crosshair: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            palette: skia::Color::from_argb(255, 140, 234, 255),
            candle_up: skia::Color::from_argb(255, 40, 200, 120),
            candle_down: skia::Color::from_argb(255, 220, 80, 80),
            candle_neutral: skia::Color::from_argb(255, 150, 150, 160),
            value_text: skia::Color::from_argb(255, 235, 235, 245),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            palette: skia::Color::from_argb(255, 32, 120, 200),
            candle_up: skia::Color::from_argb(255, 20, 160, 90),
            candle_down: skia::Color::from_argb(255, 200, 60, 60),
            candle_neutral: skia::Color::from_argb(255, 100, 100, 110),
            value_text: skia::Color::from_argb(255, 20, 20, 30),
            crosshair: skia::Color::from_argb(255, 30, 120, 240),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            palette: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),    // blue
            candle_up: skia::Color::from_argb(255, 0x2a, 0xa1, 0x98),  // cyan
            candle_down: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
            candle_neutral: skia::Color::from_argb(255, 0x83, 0x94, 0x96), // base0
            value_text: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            crosshair: skia::Color::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
        }
    }

    /// Fill in the trend colours the dataset has not chosen itself. Palette,
    /// value text and crosshair colours always come from the theme.
    pub fn style_data_set(&self, set: &mut CandleDataSet) {
        let style = &mut set.style;
        style.increasing_color.get_or_insert(self.candle_up);
        style.decreasing_color.get_or_insert(self.candle_down);
        style.neutral_color.get_or_insert(self.candle_neutral);
        style.highlight.color = self.crosshair;
        set.colors = vec![self.palette];
        set.value_colors = vec![self.value_text];
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a preset by its `name`, ignoring case.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
