// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the CSV-to-SVG chart pipelines and their building blocks.

pub mod axis;
pub mod chart;
pub mod charts;
pub mod data;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod page;
pub mod pipeline;
pub mod scale;
pub mod shape;
pub mod svg;
pub mod theme;
pub mod time;
pub mod types;

pub use axis::{Axis, Orient};
pub use chart::{RenderOptions, RenderedChart};
pub use charts::{default_pipelines, AreaChart, BarChart, LineChart, ScatterPlot, SeriesSpec};
pub use data::{coerce, fetch_csv, read_csv, Coerce, Coercion, CoercionReport, Dataset, DateFormat, Field, Record};
pub use error::{ChartError, Result};
pub use legend::{Legend, LegendEntry};
pub use page::{build_page, Page};
pub use pipeline::{render, ChartPipeline};
pub use scale::{BandScale, LinearScale, Scale, TickValue, TimeScale};
pub use svg::Element;
pub use theme::{Color, Theme};
pub use types::{Canvas, Insets, Layout};
