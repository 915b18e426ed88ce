// File: crates/chart-render-skia/src/text.rs
// Summary: Label shaping with Skia textlayout: measure for text-anchor, paint at a baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const FAMILIES: [&str; 6] = ["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"];

/// Ascent used to place a paragraph's top edge from a baseline, as a fraction of the font size.
const ASCENT: f32 = 0.8;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn paragraph(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&FAMILIES);

        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Advance width of a single-line label.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        self.paragraph(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Paint `text` with its left edge at `x` and its baseline at `baseline`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, baseline: f32, size: f32, color: skia::Color) {
        let mut p = self.paragraph(text, size, color);
        p.paint(canvas, (x, baseline - size * ASCENT));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
