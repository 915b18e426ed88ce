// File: crates/chart-core/src/charts/scatter.rs
// Summary: Scatter plot of sale price against gross living area.

use crate::axis::{self, Axis};
use crate::chart::RenderOptions;
use crate::data::{Coercion, Record};
use crate::error::Result;
use crate::geometry::{extent, Point};
use crate::pipeline::ChartPipeline;
use crate::scale::{LinearScale, Scale};
use crate::svg::Element;
use crate::types::{Insets, Layout};

use super::{plot_group, title, x_label, y_label, TICK_FONT_SIZE};

#[derive(Clone, Debug)]
pub struct ScatterPlot {
    pub source: String,
    pub x_field: String,
    pub y_field: String,
    pub insets: Insets,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub radius: f64,
    pub fill: String,
    pub opacity: f64,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self {
            source: "LivingArea.csv".into(),
            x_field: "GrLivArea".into(),
            y_field: "SalePrice".into(),
            insets: Insets::new(120, 20, 40, 50),
            title: "House Prices vs Gross Living Area".into(),
            x_label: "Gross Living Area [m\u{b2}]".into(),
            y_label: "House Prices [$]".into(),
            radius: 3.0,
            fill: "red".into(),
            opacity: 0.3,
        }
    }
}

impl ScatterPlot {
    fn field_scale(records: &[Record], field: &str, range: (f64, f64)) -> LinearScale {
        let domain = extent(records.iter().filter_map(|r| r.number(field))).unwrap_or((0.0, 0.0));
        LinearScale::new(domain, range).nice()
    }

    pub fn x_scale(&self, records: &[Record], layout: &Layout) -> LinearScale {
        Self::field_scale(records, &self.x_field, (0.0, layout.inner_width))
    }

    /// Inverted range: larger prices sit higher.
    pub fn y_scale(&self, records: &[Record], layout: &Layout) -> LinearScale {
        Self::field_scale(records, &self.y_field, (layout.inner_height, 0.0))
    }

    /// Pixel centre of every record with both fields present.
    pub fn points(&self, records: &[Record], x: &LinearScale, y: &LinearScale) -> Vec<Point> {
        records
            .iter()
            .filter_map(|r| Some(Point::new(x.map(r.number(&self.x_field)?), y.map(r.number(&self.y_field)?))))
            .collect()
    }
}

impl ChartPipeline for ScatterPlot {
    fn id(&self) -> &'static str { "scatterPlot" }

    fn source(&self) -> &str { &self.source }

    fn insets(&self) -> Insets { self.insets }

    fn columns(&self) -> Vec<&str> {
        vec![self.y_field.as_str(), self.x_field.as_str()]
    }

    fn coercions(&self) -> Vec<Coercion> {
        vec![Coercion::number(self.y_field.as_str()), Coercion::number(self.x_field.as_str())]
    }

    fn draw(&self, records: &[Record], layout: &Layout, opts: &RenderOptions) -> Result<Vec<Element>> {
        let theme = &opts.theme;
        let x = self.x_scale(records, layout);
        let y = self.y_scale(records, layout);
        let mut g = plot_group(layout);

        let mut y_axis = Axis::left(Scale::Linear(y)).font_size(TICK_FONT_SIZE).render();
        let mut x_axis = Axis::bottom(Scale::Linear(x))
            .font_size(TICK_FONT_SIZE)
            .render()
            .attr("transform", format!("translate(0, {})", layout.inner_height));

        // The outermost tick lines close the frame on the top and right edges.
        if let Some(line) = axis::last_tick_line_mut(&mut x_axis) {
            line.set_attr("y2", -layout.inner_height);
        }
        if let Some(line) = axis::last_tick_line_mut(&mut y_axis) {
            line.set_attr("x2", layout.inner_width);
        }
        if let Some(line) = axis::first_tick_line_mut(&mut y_axis) {
            line.set_attr("class", "tickLineScatterPlot");
            line.set_attr("stroke", theme.muted.to_css());
        }

        x_axis.push(x_label(&self.x_label, layout, 40.0, theme));
        y_axis.push(y_label("yAxisLabelScatterPlot", &self.y_label, layout, -60.0, theme));
        g.push(y_axis);
        g.push(x_axis);

        for p in self.points(records, &x, &y) {
            g.push(
                Element::new("circle")
                    .attr("cx", p.x)
                    .attr("cy", p.y)
                    .attr("r", self.radius)
                    .style("fill", &self.fill)
                    .style("opacity", self.opacity),
            );
        }

        g.push(title(&self.title, layout, -10.0, theme));
        Ok(vec![g])
    }
}
