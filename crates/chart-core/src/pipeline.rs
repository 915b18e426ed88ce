// File: crates/chart-core/src/pipeline.rs
// Summary: Shared chart pipeline: coerce -> filter -> layout -> draw, wrapped in the container svg.

use tracing::{debug, warn};

use crate::chart::{RenderOptions, RenderedChart};
use crate::data::{coerce, Coercion, Dataset, Record};
use crate::error::{ChartError, Result};
use crate::svg::Element;
use crate::types::{Insets, Layout};

/// One chart configuration. Implementations only describe fields, margins and drawing;
/// `render` runs the shared stages.
pub trait ChartPipeline: Send + Sync {
    /// Container id on the page.
    fn id(&self) -> &'static str;
    /// CSV file name, relative to the data directory.
    fn source(&self) -> &str;
    fn insets(&self) -> Insets;
    /// Columns that must exist in the CSV header.
    fn columns(&self) -> Vec<&str>;
    /// Fields to convert before drawing.
    fn coercions(&self) -> Vec<Coercion>;
    /// Fields every mark needs; records with one of them invalid are left out
    /// of the plot. Defaults to all coerced fields.
    fn required_fields(&self) -> Vec<String> {
        self.coercions().into_iter().map(|c| c.field).collect()
    }
    /// Build the children of the container svg (plot group first).
    fn draw(&self, records: &[Record], layout: &Layout, opts: &RenderOptions) -> Result<Vec<Element>>;
}

/// Run the synchronous render stage on a fetched dataset.
pub fn render(pipeline: &dyn ChartPipeline, mut data: Dataset, opts: &RenderOptions) -> Result<RenderedChart> {
    let id = pipeline.id();
    data.require_columns(&pipeline.columns())?;

    let coercions = pipeline.coercions();
    let report = coerce(&mut data.records, &coercions);
    for (field, invalid) in report.iter() {
        warn!(chart = id, field, invalid, "values failed coercion; records left out of the plot");
    }

    let required = pipeline.required_fields();
    let fields = required.iter().map(String::as_str).collect::<Vec<_>>();
    let records = data
        .records
        .into_iter()
        .filter(|r| r.is_plottable(&fields))
        .collect::<Vec<_>>();
    if records.is_empty() {
        return Err(ChartError::EmptyData(id));
    }

    let layout = opts.canvas.layout(pipeline.insets())?;
    debug!(
        chart = id,
        records = records.len(),
        inner_width = layout.inner_width,
        inner_height = layout.inner_height,
        "drawing chart"
    );

    let mut svg = Element::new("svg")
        .attr("id", id)
        .attr("width", opts.canvas.width)
        .attr("height", opts.canvas.height);
    for child in pipeline.draw(&records, &layout, opts)? {
        svg.push(child);
    }

    Ok(RenderedChart { id, svg, report, plotted: records.len() })
}
