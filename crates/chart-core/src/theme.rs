// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark page themes and a small CSS colour type shared with the raster backend.

/// 8-bit ARGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// `#rrggbb`, or `rgba(...)` when not opaque.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }

    /// Parse `#rgb`, `#rrggbb` or one of the named colours the charts use.
    /// `currentColor` and `none` are handled by callers.
    pub fn parse_css(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let digit = |i: usize, len: usize| u8::from_str_radix(hex.get(i..i + len)?, 16).ok();
            return match hex.len() {
                3 => Some(Self::from_rgb(digit(0, 1)? * 17, digit(1, 1)? * 17, digit(2, 1)? * 17)),
                6 => Some(Self::from_rgb(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
                _ => None,
            };
        }
        let named = match s.to_ascii_lowercase().as_str() {
            "black" => Self::from_rgb(0, 0, 0),
            "white" => Self::from_rgb(255, 255, 255),
            "red" => Self::from_rgb(255, 0, 0),
            "maroon" => Self::from_rgb(128, 0, 0),
            "steelblue" => Self::from_rgb(70, 130, 180),
            "gray" | "grey" => Self::from_rgb(128, 128, 128),
            "transparent" => Self::from_argb(0, 0, 0, 0),
            _ => return None,
        };
        Some(named)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Text, axes and anything drawn with `currentColor`.
    pub foreground: Color,
    /// Grid and secondary text.
    pub muted: Color,
    /// Plot frame rectangles.
    pub border: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(255, 255, 255),
            foreground: Color::from_rgb(0, 0, 0),
            muted: Color::from_rgb(0x63, 0x63, 0x63),
            border: Color::from_rgb(0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            foreground: Color::from_rgb(235, 235, 245),
            muted: Color::from_rgb(150, 150, 160),
            border: Color::from_rgb(180, 180, 190),
        }
    }

    /// Page stylesheet: chart containers, titles and axis labels.
    pub fn stylesheet(&self) -> String {
        format!(
            "body {{ background: {bg}; color: {fg}; font-family: sans-serif; }}\n\
             svg {{ display: block; margin: 24px auto; color: {fg}; background: {bg}; }}\n\
             .chartTitle {{ font-size: 24px; fill: {fg}; }}\n\
             .xAxisLabel, .yAxisLabelScatterPlot, .yAxisLabelLineChart, .yAxisLabelAreaChart {{ font-size: 16px; fill: {muted}; }}\n\
             .tick text {{ font-size: 12px; }}\n\
             .tickLineScatterPlot {{ stroke: {muted}; }}\n\
             .line {{ fill: none; stroke-width: 2px; }}\n\
             #borderLineChart, #borderAreaChart {{ stroke: {border}; }}\n",
            bg = self.background.to_css(),
            fg = self.foreground.to_css(),
            muted = self.muted.to_css(),
            border = self.border.to_css(),
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
