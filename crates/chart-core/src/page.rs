// File: crates/chart-core/src/page.rs
// Summary: Concurrent fetch of every chart source and assembly of the HTML page.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tracing::{debug, warn};

use crate::chart::{RenderOptions, RenderedChart};
use crate::charts::default_pipelines;
use crate::data::fetch_csv;
use crate::error::ChartError;
use crate::pipeline::{self, ChartPipeline};
use crate::svg::xml_escape;
use crate::theme::Theme;

/// One container on the page and what ended up in it.
#[derive(Debug)]
pub struct Slot {
    pub id: &'static str,
    pub source: PathBuf,
    pub outcome: Result<RenderedChart, ChartError>,
}

impl Slot {
    pub fn chart(&self) -> Option<&RenderedChart> {
        self.outcome.as_ref().ok()
    }
}

/// Rendered page: one slot per chart, in page order.
#[derive(Debug)]
pub struct Page {
    pub theme: Theme,
    pub width: u32,
    pub height: u32,
    pub slots: Vec<Slot>,
}

impl Page {
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Successfully rendered charts, in page order.
    pub fn charts(&self) -> impl Iterator<Item = &RenderedChart> {
        self.slots.iter().filter_map(Slot::chart)
    }

    /// Charts that were left out, with the reason.
    pub fn omitted(&self) -> impl Iterator<Item = (&'static str, &ChartError)> {
        self.slots.iter().filter_map(|s| s.outcome.as_ref().err().map(|e| (s.id, e)))
    }

    /// Full HTML document. Omitted charts keep an empty container.
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        for slot in &self.slots {
            match slot.chart() {
                Some(chart) => body.push_str(&chart.svg.to_markup()),
                None => body.push_str(&format!(
                    "<svg id=\"{}\" width=\"{}\" height=\"{}\"></svg>\n",
                    xml_escape(slot.id),
                    self.width,
                    self.height
                )),
            }
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>csvcharts</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            self.theme.stylesheet(),
            body
        )
    }
}

/// Fetch one chart's CSV and render it.
pub async fn render_one(
    pipeline: &dyn ChartPipeline,
    data_dir: &Path,
    opts: &RenderOptions,
) -> Result<RenderedChart, ChartError> {
    let path = data_dir.join(pipeline.source());
    let data = fetch_csv(&path).await?;
    pipeline::render(pipeline, data, opts)
}

/// Render the default chart set from `data_dir`. Sources are read concurrently;
/// a chart whose source or render fails is logged and left out.
pub async fn build_page(data_dir: impl AsRef<Path>, opts: &RenderOptions) -> Page {
    build_page_with(&default_pipelines(), data_dir.as_ref(), opts).await
}

pub async fn build_page_with(
    pipelines: &[Box<dyn ChartPipeline>],
    data_dir: &Path,
    opts: &RenderOptions,
) -> Page {
    let jobs = pipelines.iter().map(|p| async move {
        let outcome = render_one(p.as_ref(), data_dir, opts).await;
        let source = data_dir.join(p.source());
        match &outcome {
            Ok(chart) => debug!(chart = chart.id, plotted = chart.plotted, "chart rendered"),
            Err(err) => warn!(
                chart = p.id(),
                file = %source.display(),
                error = err as &dyn std::error::Error,
                "chart omitted"
            ),
        }
        Slot { id: p.id(), source, outcome }
    });
    let slots = join_all(jobs).await;

    Page {
        theme: opts.theme,
        width: opts.canvas.width,
        height: opts.canvas.height,
        slots,
    }
}
