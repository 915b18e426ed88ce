// File: crates/chart-core/src/charts/line.rs
// Summary: Two-series temperature line chart over a time axis, with legend and frame.

use chrono::NaiveDateTime;

use crate::axis::{self, Axis};
use crate::chart::RenderOptions;
use crate::data::{Coercion, DateFormat, Record};
use crate::error::{ChartError, Result};
use crate::format::{TickFormat, MONTH_ABBREVIATIONS};
use crate::geometry::{extent, merge_extents, Point};
use crate::legend::{Legend, LegendEntry};
use crate::pipeline::ChartPipeline;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::shape::{line_path, Curve};
use crate::svg::Element;
use crate::types::{Insets, Layout};

use super::{border, plot_group, title, x_label, y_label, TICK_FONT_SIZE};

/// One plotted column; the field name doubles as its legend label.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub field: String,
    pub color: String,
}

impl SeriesSpec {
    pub fn new(field: impl Into<String>, color: impl Into<String>) -> Self {
        Self { field: field.into(), color: color.into() }
    }
}

#[derive(Clone, Debug)]
pub struct LineChart {
    pub source: String,
    pub date_field: String,
    pub series: Vec<SeriesSpec>,
    pub insets: Insets,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curve: Curve,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            source: "OutdoorTemperatures.csv".into(),
            date_field: "date".into(),
            series: vec![
                SeriesSpec::new("Kragujevac", "#1F77B4"),
                SeriesSpec::new("Tallinn", "#FF7F0E"),
            ],
            insets: Insets::new(80, 20, 40, 65),
            title: "Outdoor Temperatures".into(),
            x_label: "Time".into(),
            y_label: "Temperature [\u{b0}C]".into(),
            curve: Curve::Basis,
        }
    }
}

impl LineChart {
    /// Union of the per-series extents; each series skips its own invalid cells.
    /// `None` when no series has a value.
    pub fn value_extent(&self, records: &[Record]) -> Option<(f64, f64)> {
        merge_extents(
            self.series
                .iter()
                .filter_map(|s| extent(records.iter().filter_map(|r| r.number(&s.field)))),
        )
    }

    /// Shared value axis over `value_extent`, niced.
    pub fn y_scale(&self, records: &[Record], layout: &Layout) -> LinearScale {
        let domain = self.value_extent(records).unwrap_or((0.0, 0.0));
        LinearScale::new(domain, (layout.inner_height, 0.0)).nice()
    }

    /// `None` when no record carries a date.
    pub fn x_scale(&self, records: &[Record], layout: &Layout) -> Option<TimeScale> {
        let dates = records.iter().filter_map(|r| r.date(&self.date_field));
        let (lo, hi) = dates.fold(None, |acc: Option<(NaiveDateTime, NaiveDateTime)>, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })?;
        Some(TimeScale::new((lo, hi), (0.0, layout.inner_width)))
    }

    /// Path data for one series, in record order, over the records where that series has a value.
    pub fn series_path(&self, series: &SeriesSpec, records: &[Record], x: &TimeScale, y: &LinearScale) -> String {
        let points = records
            .iter()
            .filter_map(|r| Some(Point::new(x.map(r.date(&self.date_field)?), y.map(r.number(&series.field)?))))
            .collect::<Vec<_>>();
        line_path(&points, self.curve)
    }

    pub fn legend(&self) -> Legend {
        Legend::new(
            self.series
                .iter()
                .map(|s| LegendEntry::new(s.color.clone(), s.field.clone()))
                .collect(),
        )
    }
}

impl ChartPipeline for LineChart {
    fn id(&self) -> &'static str { "lineChart" }

    fn source(&self) -> &str { &self.source }

    fn insets(&self) -> Insets { self.insets }

    fn columns(&self) -> Vec<&str> {
        std::iter::once(self.date_field.as_str())
            .chain(self.series.iter().map(|s| s.field.as_str()))
            .collect()
    }

    fn coercions(&self) -> Vec<Coercion> {
        std::iter::once(Coercion::date(self.date_field.as_str(), DateFormat::DayMonthShortYear))
            .chain(self.series.iter().map(|s| Coercion::float(s.field.as_str())))
            .collect()
    }

    /// Only the date is shared; a blank cell drops a point from its own series.
    fn required_fields(&self) -> Vec<String> {
        vec![self.date_field.clone()]
    }

    fn draw(&self, records: &[Record], layout: &Layout, opts: &RenderOptions) -> Result<Vec<Element>> {
        let theme = &opts.theme;
        let (Some(x), Some(_)) = (self.x_scale(records, layout), self.value_extent(records)) else {
            return Err(ChartError::EmptyData(self.id()));
        };
        let y = self.y_scale(records, layout);
        let mut g = plot_group(layout);

        for s in &self.series {
            g.push(
                Element::new("path")
                    .attr("fill", "none")
                    .attr("stroke-width", 2)
                    .attr("class", "line")
                    .attr("d", self.series_path(s, records, &x, &y))
                    .attr("stroke", &s.color),
            );
        }

        let mut y_axis = Axis::left(Scale::Linear(y))
            .font_size(TICK_FONT_SIZE)
            .tick_padding(10.0)
            .render()
            .attr("class", "yAxisLineChart");
        // Hide the vertical domain line against the background.
        if let Some(domain) = axis::domain_mut(&mut y_axis) {
            domain.set_attr("stroke", theme.background.to_css());
        }
        y_axis.push(y_label("yAxisLabelLineChart", &self.y_label, layout, -40.0, theme));

        let mut x_axis = Axis::bottom(Scale::Time(x))
            .font_size(TICK_FONT_SIZE)
            .tick_format(TickFormat::month_names(&MONTH_ABBREVIATIONS))
            .tick_padding(10.0)
            .tick_size_outer(0.0)
            .render()
            .attr("class", "xAxisLineChart")
            .attr("transform", format!("translate(0, {})", layout.inner_height));
        x_axis.push(x_label(&self.x_label, layout, 50.0, theme));

        g.push(y_axis);
        g.push(x_axis);
        g.push(title(&self.title, layout, -10.0, theme));
        g.push(border("borderLineChart", layout, theme));

        let mut out = vec![g];
        out.extend(self.legend().label_color(theme.foreground.to_css()).render());
        Ok(out)
    }
}
