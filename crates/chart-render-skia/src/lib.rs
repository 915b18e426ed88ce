// File: crates/chart-render-skia/src/lib.rs
// Summary: Paints a chart's SVG scene onto a Skia CPU raster surface and encodes it as PNG.
// Notes:
// - Supports the subset the charts emit: g, rect, circle, line, path, text.
// - Presentation values (fill, stroke, stroke-width, opacity, font-size, text-anchor)
//   inherit down the tree; inline style wins over attributes.

pub mod text;

use anyhow::{anyhow, Context, Result};
use chart_core::svg::{Element, Transform};
use chart_core::theme::{Color, Theme};
use chart_core::types::{HEIGHT, WIDTH};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    Start,
    Middle,
    End,
}

/// Paint state carried from parents to children.
#[derive(Clone, Copy, Debug)]
struct Inherited {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f32,
    opacity: f32,
    font_size: f32,
    anchor: Anchor,
}

impl Inherited {
    fn root() -> Self {
        Self {
            fill: Some(Color::from_rgb(0, 0, 0)),
            stroke: None,
            stroke_width: 1.0,
            opacity: 1.0,
            font_size: 16.0,
            anchor: Anchor::Start,
        }
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Rasterize `svg` (a root `svg` element) and return PNG bytes.
    /// Canvas size comes from the root's `width`/`height`.
    pub fn render_png(&self, svg: &Element, theme: &Theme) -> Result<Vec<u8>> {
        let width = dimension(svg, "width").unwrap_or(WIDTH as i32);
        let height = dimension(svg, "height").unwrap_or(HEIGHT as i32);

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(theme.background, 1.0));

        let state = Inherited::root();
        for child in &svg.children {
            self.draw(canvas, child, state, theme);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        debug!(width, height, bytes = data.size(), "encoded png");
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write to `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, svg: &Element, theme: &Theme, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png(svg, theme)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, el: &Element, parent: Inherited, theme: &Theme) {
        let state = inherit(el, parent, theme);
        canvas.save();
        for t in el
            .get_attr("transform")
            .into_iter()
            .chain(el.get_style("transform"))
            .flat_map(Transform::parse_list)
        {
            match t {
                Transform::Translate(x, y) => {
                    canvas.translate((x as f32, y as f32));
                }
                Transform::Rotate(deg) => {
                    canvas.rotate(deg as f32, None);
                }
            }
        }

        match el.name.as_str() {
            "rect" => {
                let rect = skia::Rect::from_xywh(num(el, "x"), num(el, "y"), num(el, "width"), num(el, "height"));
                if let Some(p) = fill_paint(&state) {
                    canvas.draw_rect(rect, &p);
                }
                if let Some(p) = stroke_paint(&state) {
                    canvas.draw_rect(rect, &p);
                }
            }
            "circle" => {
                let center = (num(el, "cx"), num(el, "cy"));
                let r = num(el, "r");
                if let Some(p) = fill_paint(&state) {
                    canvas.draw_circle(center, r, &p);
                }
                if let Some(p) = stroke_paint(&state) {
                    canvas.draw_circle(center, r, &p);
                }
            }
            "line" => {
                if let Some(p) = stroke_paint(&state) {
                    canvas.draw_line((num(el, "x1"), num(el, "y1")), (num(el, "x2"), num(el, "y2")), &p);
                }
            }
            "path" => {
                if let Some(path) = el.get_attr("d").and_then(|d| skia::Path::from_svg(d)) {
                    if let Some(p) = fill_paint(&state) {
                        canvas.draw_path(&path, &p);
                    }
                    if let Some(p) = stroke_paint(&state) {
                        canvas.draw_path(&path, &p);
                    }
                }
            }
            "text" => self.draw_text(canvas, el, &state),
            _ => {}
        }

        for child in &el.children {
            self.draw(canvas, child, state, theme);
        }
        canvas.restore();
    }

    fn draw_text(&self, canvas: &skia::Canvas, el: &Element, state: &Inherited) {
        let (Some(content), Some(color)) = (el.text.as_deref(), state.fill) else { return };
        let size = state.font_size;
        let width = self.shaper.measure(content, size);
        let x = num(el, "x")
            - match state.anchor {
                Anchor::Start => 0.0,
                Anchor::Middle => width / 2.0,
                Anchor::End => width,
            };
        let mut baseline = num(el, "y") + el.get_attr("dy").map_or(0.0, |dy| length(dy, size));
        if el.presentation("alignment-baseline") == Some("middle") {
            baseline += 0.32 * size;
        }
        self.shaper.draw(canvas, content, x, baseline, size, to_skia(color, state.opacity));
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn dimension(el: &Element, key: &str) -> Option<i32> {
    el.get_attr(key)?.trim_end_matches("px").parse::<f64>().ok().map(|v| v.round() as i32)
}

/// Numeric attribute, 0 when absent or malformed.
fn num(el: &Element, key: &str) -> f32 {
    el.get_attr(key).and_then(|v| v.parse::<f32>().ok()).unwrap_or(0.0)
}

/// `12`, `12px` or `0.71em` (relative to `font_size`).
fn length(value: &str, font_size: f32) -> f32 {
    let v = value.trim();
    if let Some(em) = v.strip_suffix("em") {
        return em.parse::<f32>().unwrap_or(0.0) * font_size;
    }
    v.trim_end_matches("px").parse().unwrap_or(0.0)
}

/// `none` clears the paint, `currentColor` is the theme foreground; unknown
/// names keep the inherited value.
fn paint_value(value: Option<&str>, inherited: Option<Color>, theme: &Theme) -> Option<Color> {
    match value.map(str::trim) {
        None => inherited,
        Some("none") => None,
        Some("currentColor") => Some(theme.foreground),
        Some(css) => Color::parse_css(css).or(inherited),
    }
}

fn inherit(el: &Element, parent: Inherited, theme: &Theme) -> Inherited {
    let mut s = parent;
    s.fill = paint_value(el.presentation("fill"), parent.fill, theme);
    s.stroke = paint_value(el.presentation("stroke"), parent.stroke, theme);
    if let Some(w) = el.presentation("stroke-width") {
        s.stroke_width = length(w, s.font_size);
    }
    if let Some(o) = el.presentation("opacity").and_then(|o| o.trim().parse::<f32>().ok()) {
        s.opacity *= o.clamp(0.0, 1.0);
    }
    if let Some(f) = el.presentation("font-size") {
        s.font_size = length(f, parent.font_size);
    }
    if let Some(a) = el.presentation("text-anchor") {
        s.anchor = match a {
            "middle" => Anchor::Middle,
            "end" => Anchor::End,
            _ => Anchor::Start,
        };
    }
    s
}

fn to_skia(c: Color, opacity: f32) -> skia::Color {
    let a = (c.a as f32 * opacity).round().clamp(0.0, 255.0) as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn fill_paint(state: &Inherited) -> Option<skia::Paint> {
    let color = state.fill?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color, state.opacity));
    Some(paint)
}

fn stroke_paint(state: &Inherited) -> Option<skia::Paint> {
    let color = state.stroke?;
    if state.stroke_width <= 0.0 {
        return None;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(state.stroke_width);
    paint.set_color(to_skia(color, state.opacity));
    Some(paint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_resolve_em_and_px() {
        assert_eq!(length("0.5em", 10.0), 5.0);
        assert_eq!(length("1px", 10.0), 1.0);
        assert_eq!(length("2", 10.0), 2.0);
    }

    #[test]
    fn paint_values_follow_svg_rules() {
        let theme = Theme::dark();
        let black = Some(Color::from_rgb(0, 0, 0));
        assert_eq!(paint_value(None, black, &theme), black);
        assert_eq!(paint_value(Some("none"), black, &theme), None);
        assert_eq!(paint_value(Some("currentColor"), None, &theme), Some(theme.foreground));
        assert_eq!(paint_value(Some("#ff0000"), None, &theme), Some(Color::from_rgb(255, 0, 0)));
    }

    #[test]
    fn opacity_multiplies_down_the_tree() {
        let theme = Theme::light();
        let outer = Element::new("g").attr("opacity", 0.5);
        let inner = Element::new("circle").style("opacity", 0.5).style("fill", "red");
        let s = inherit(&inner, inherit(&outer, Inherited::root(), &theme), &theme);
        assert_eq!(s.opacity, 0.25);
        assert_eq!(s.fill, Some(Color::from_rgb(255, 0, 0)));
    }
}
