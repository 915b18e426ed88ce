// File: crates/chart-core/src/charts/mod.rs
// Summary: The four chart configurations and the text/frame elements they share.

pub mod area;
pub mod bar;
pub mod line;
pub mod scatter;

pub use area::AreaChart;
pub use bar::BarChart;
pub use line::{LineChart, SeriesSpec};
pub use scatter::ScatterPlot;

use crate::pipeline::ChartPipeline;
use crate::svg::Element;
use crate::theme::Theme;
use crate::types::Layout;

/// Tick label size, matching the page stylesheet.
pub(crate) const TICK_FONT_SIZE: f64 = 12.0;

/// Page order: bar, scatter, line, area.
pub fn default_pipelines() -> Vec<Box<dyn ChartPipeline>> {
    vec![
        Box::new(BarChart::default()),
        Box::new(ScatterPlot::default()),
        Box::new(LineChart::default()),
        Box::new(AreaChart::default()),
    ]
}

/// Plot group translated by the margins.
pub(crate) fn plot_group(layout: &Layout) -> Element {
    Element::new("g").attr("transform", layout.plot_transform())
}

/// Centred title above the plot.
pub(crate) fn title(text: &str, layout: &Layout, y: f64, theme: &Theme) -> Element {
    Element::new("text")
        .attr("class", "chartTitle")
        .attr("x", layout.inner_width / 2.0)
        .attr("y", y)
        .attr("text-anchor", "middle")
        .attr("font-size", 24)
        .attr("fill", theme.foreground.to_css())
        .text(text)
}

/// Label under a bottom axis, placed in axis-group coordinates.
pub(crate) fn x_label(text: &str, layout: &Layout, y: f64, theme: &Theme) -> Element {
    Element::new("text")
        .attr("class", "xAxisLabel")
        .attr("x", layout.inner_width / 2.0)
        .attr("y", y)
        .attr("text-anchor", "middle")
        .attr("font-size", 16)
        .attr("fill", theme.muted.to_css())
        .text(text)
}

/// Rotated label beside a left axis;
/// `offset` is the distance left of the axis, applied after the rotation.
pub(crate) fn y_label(class: &str, text: &str, layout: &Layout, offset: f64, theme: &Theme) -> Element {
    Element::new("text")
        .attr("class", class)
        .attr("x", -layout.inner_height / 2.0)
        .attr("y", offset)
        .attr("text-anchor", "middle")
        .attr("font-size", 16)
        .attr("fill", theme.muted.to_css())
        .style("transform", "rotate(-90deg)")
        .text(text)
}

/// Unfilled frame around the plot area.
pub(crate) fn border(id: &str, layout: &Layout, theme: &Theme) -> Element {
    Element::new("rect")
        .attr("x", 0)
        .attr("y", 0.5)
        .attr("height", layout.inner_height)
        .attr("width", layout.inner_width)
        .attr("id", id)
        .attr("stroke", theme.border.to_css())
        .style("fill", "none")
        .style("stroke-width", "1px")
}
