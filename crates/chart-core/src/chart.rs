// File: crates/chart-core/src/chart.rs
// Summary: Render options and the rendered chart (svg scene + coercion report) with SVG file output.

use anyhow::{Context, Result};

use crate::data::CoercionReport;
use crate::svg::Element;
use crate::theme::Theme;
use crate::types::Canvas;

/// Immutable configuration handed to every pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOptions {
    pub canvas: Canvas,
    pub theme: Theme,
}

impl RenderOptions {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }
}

/// Output of one pipeline run.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    /// Container id, e.g. `barChart`.
    pub id: &'static str,
    /// Root `svg` element sized to the canvas.
    pub svg: Element,
    pub report: CoercionReport,
    /// Records that made it into the plot.
    pub plotted: usize,
}

impl RenderedChart {
    /// The translated plot group (first `g` under the root).
    pub fn plot(&self) -> Option<&Element> {
        self.svg.children.iter().find(|c| c.name == "g")
    }

    pub fn to_svg_string(&self) -> String {
        self.svg.to_document()
    }

    /// Write a standalone SVG document to `output_svg_path`.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string())
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
