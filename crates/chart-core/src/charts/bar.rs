// File: crates/chart-core/src/charts/bar.rs
// Summary: Horizontal bar chart of population per country.

use crate::axis::{self, Axis};
use crate::chart::RenderOptions;
use crate::data::{Coercion, Record};
use crate::error::Result;
use crate::format::TickFormat;
use crate::geometry::max_value;
use crate::pipeline::ChartPipeline;
use crate::scale::{BandScale, LinearScale, Scale};
use crate::svg::Element;
use crate::types::{Insets, Layout};

use super::{plot_group, title, x_label, TICK_FONT_SIZE};

#[derive(Clone, Debug)]
pub struct BarChart {
    pub source: String,
    /// Column holding the population count. The published CSV calls it `Year`.
    pub population_field: String,
    pub category_field: String,
    pub insets: Insets,
    pub title: String,
    pub x_label: String,
    pub fill: String,
    pub stroke: String,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            source: "PopulationByCountry.csv".into(),
            population_field: "Year".into(),
            category_field: "Country".into(),
            insets: Insets::new(120, 20, 40, 50),
            title: "Most populous countries in 2016".into(),
            x_label: "Population".into(),
            fill: "steelblue".into(),
            stroke: "black".into(),
        }
    }
}

impl BarChart {
    fn population(&self, r: &Record) -> Option<f64> {
        r.number(&self.population_field)
    }

    /// `[0, max]` rounded outward, mapped onto the plot width.
    pub fn x_scale(&self, records: &[Record], layout: &Layout) -> LinearScale {
        let max = max_value(records.iter().filter_map(|r| self.population(r))).unwrap_or(0.0);
        LinearScale::new((0.0, max), (0.0, layout.inner_width)).nice()
    }

    /// One band per country in data order.
    pub fn y_scale(&self, records: &[Record], layout: &Layout) -> BandScale {
        let categories = records.iter().filter_map(|r| r.text(&self.category_field));
        BandScale::new(categories, (0.0, layout.inner_height)).padding(0.1)
    }
}

impl ChartPipeline for BarChart {
    fn id(&self) -> &'static str { "barChart" }

    fn source(&self) -> &str { &self.source }

    fn insets(&self) -> Insets { self.insets }

    fn columns(&self) -> Vec<&str> {
        vec![self.population_field.as_str(), self.category_field.as_str()]
    }

    fn coercions(&self) -> Vec<Coercion> {
        vec![Coercion::number(self.population_field.as_str())]
    }

    fn draw(&self, records: &[Record], layout: &Layout, opts: &RenderOptions) -> Result<Vec<Element>> {
        let theme = &opts.theme;
        let x = self.x_scale(records, layout);
        let y = self.y_scale(records, layout);
        let mut g = plot_group(layout);

        // Category axis keeps only its labels.
        let mut y_axis = Axis::left(Scale::Band(y.clone())).font_size(TICK_FONT_SIZE).render();
        axis::remove_domain(&mut y_axis);
        axis::remove_tick_lines(&mut y_axis);
        g.push(y_axis);

        // Tick lines span the plot height as vertical grid lines.
        let mut x_axis = Axis::bottom(Scale::Linear(x))
            .font_size(TICK_FONT_SIZE)
            .tick_format(TickFormat::si_replacing(2, "G", "B"))
            .tick_size(-layout.inner_height)
            .render()
            .attr("transform", format!("translate(0, {})", layout.inner_height));
        axis::remove_domain(&mut x_axis);
        x_axis.push(x_label(&self.x_label, layout, 40.0, theme));
        g.push(x_axis);

        for r in records {
            let (Some(value), Some(country)) = (self.population(r), r.text(&self.category_field)) else {
                continue;
            };
            let Some(band) = y.map(country) else { continue };
            g.push(
                Element::new("rect")
                    .attr("y", band)
                    .attr("width", x.map(value))
                    .attr("height", y.bandwidth())
                    .attr("fill", &self.fill)
                    .attr("stroke", &self.stroke),
            );
        }

        g.push(title(&self.title, layout, -10.0, theme));
        Ok(vec![g])
    }
}
