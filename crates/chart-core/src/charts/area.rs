// File: crates/chart-core/src/charts/area.rs
// Summary: World population area chart over a fixed 1950-2020 time window.

use crate::axis::Axis;
use crate::chart::RenderOptions;
use crate::data::{Coercion, DateFormat, Record};
use crate::error::{ChartError, Result};
use crate::format::TickFormat;
use crate::geometry::{max_value, Point};
use crate::pipeline::ChartPipeline;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::shape::{area_path, Curve};
use crate::svg::Element;
use crate::time::month_start;
use crate::types::{Insets, Layout};

use super::{border, plot_group, title, x_label, y_label, TICK_FONT_SIZE};

#[derive(Clone, Debug)]
pub struct AreaChart {
    pub source: String,
    pub date_field: String,
    pub value_field: String,
    /// Time axis bounds as `(year, zero-based month)`; months past 11 carry into the year.
    pub window: [(i32, i32); 2],
    pub insets: Insets,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub fill: String,
    pub stroke: String,
    pub curve: Curve,
}

impl Default for AreaChart {
    fn default() -> Self {
        Self {
            source: "WorldPopulationByYear.csv".into(),
            date_field: "Year".into(),
            value_field: "Population".into(),
            // 1950-01-01 .. 2020-02-01
            window: [(1949, 12), (2020, 1)],
            insets: Insets::new(80, 20, 50, 65),
            title: "World Population per Year".into(),
            x_label: "Year".into(),
            y_label: "Population (billions)".into(),
            fill: "maroon".into(),
            stroke: "black".into(),
            curve: Curve::Basis,
        }
    }
}

impl AreaChart {
    /// `[0, max]` niced, larger values higher.
    pub fn y_scale(&self, records: &[Record], layout: &Layout) -> LinearScale {
        let max = max_value(records.iter().filter_map(|r| r.number(&self.value_field))).unwrap_or(0.0);
        LinearScale::new((0.0, max), (layout.inner_height, 0.0)).nice()
    }

    /// The fixed window, ignoring the data; `None` if a bound is not a calendar date.
    pub fn x_scale(&self, layout: &Layout) -> Option<TimeScale> {
        let [(y0, m0), (y1, m1)] = self.window;
        let (a, b) = (month_start(y0, m0)?, month_start(y1, m1)?);
        Some(TimeScale::new((a.min(b), a.max(b)), (0.0, layout.inner_width)))
    }

    pub fn path(&self, records: &[Record], x: &TimeScale, y: &LinearScale, baseline: f64) -> String {
        let points = records
            .iter()
            .filter_map(|r| Some(Point::new(x.map(r.date(&self.date_field)?), y.map(r.number(&self.value_field)?))))
            .collect::<Vec<_>>();
        area_path(&points, baseline, self.curve)
    }
}

impl ChartPipeline for AreaChart {
    fn id(&self) -> &'static str { "areaChart" }

    fn source(&self) -> &str { &self.source }

    fn insets(&self) -> Insets { self.insets }

    fn columns(&self) -> Vec<&str> {
        vec![self.date_field.as_str(), self.value_field.as_str()]
    }

    fn coercions(&self) -> Vec<Coercion> {
        vec![
            Coercion::date(self.date_field.as_str(), DateFormat::Loose),
            Coercion::number(self.value_field.as_str()),
        ]
    }

    fn draw(&self, records: &[Record], layout: &Layout, opts: &RenderOptions) -> Result<Vec<Element>> {
        let theme = &opts.theme;
        let y = self.y_scale(records, layout);
        let Some(x) = self.x_scale(layout) else {
            return Err(ChartError::EmptyData(self.id()));
        };
        let mut g = plot_group(layout);

        g.push(
            Element::new("path")
                .attr("class", "area")
                .attr("d", self.path(records, &x, &y, layout.inner_height))
                .attr("stroke", &self.stroke)
                .attr("fill", &self.fill),
        );

        let mut y_axis = Axis::left(Scale::Linear(y))
            .font_size(TICK_FONT_SIZE)
            .tick_format(TickFormat::si_replacing(1, "G", ""))
            .tick_padding(10.0)
            .render()
            .attr("class", "yAxisAreaChart");
        y_axis.push(y_label("yAxisLabelAreaChart", &self.y_label, layout, -40.0, theme));

        let mut x_axis = Axis::bottom(Scale::Time(x))
            .font_size(TICK_FONT_SIZE)
            .tick_padding(8.0)
            .render()
            .attr("class", "xAxisAreaChart")
            .attr("transform", format!("translate(0, {})", layout.inner_height));
        x_axis.push(x_label(&self.x_label, layout, 50.0, theme));

        g.push(y_axis);
        g.push(x_axis);
        g.push(title(&self.title, layout, -15.0, theme));
        g.push(border("borderAreaChart", layout, theme));
        Ok(vec![g])
    }
}
