// File: crates/chart-core/src/legend.rs
// Summary: Fixed-position legend: one colour swatch and label per series, stacked vertically.

use crate::svg::Element;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

impl LegendEntry {
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self { color: color.into(), label: label.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    /// Top-left of the first swatch, in svg coordinates.
    pub x: f64,
    pub y: f64,
    /// Swatch edge length; rows are `size + 5` apart.
    pub size: f64,
    pub label_color: String,
}

impl Legend {
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Self { entries, x: 100.0, y: 80.0, size: 15.0, label_color: "black".into() }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn label_color(mut self, color: impl Into<String>) -> Self {
        self.label_color = color.into();
        self
    }

    fn row_y(&self, i: usize) -> f64 {
        self.y + i as f64 * (self.size + 5.0)
    }

    /// All swatches first, then all labels.
    pub fn render(&self) -> Vec<Element> {
        let swatches = self.entries.iter().enumerate().map(|(i, e)| {
            Element::new("rect")
                .attr("x", self.x)
                .attr("y", self.row_y(i))
                .attr("width", self.size)
                .attr("height", self.size)
                .style("fill", &e.color)
        });
        let labels = self.entries.iter().enumerate().map(|(i, e)| {
            Element::new("text")
                .attr("class", "myLab")
                .attr("x", self.x + self.size * 1.2)
                .attr("y", self.row_y(i) + self.size / 2.0)
                .attr("text-anchor", "start")
                .style("fill", &self.label_color)
                .style("font-size", 16)
                .style("alignment-baseline", "middle")
                .text(e.label.clone())
        });
        swatches.chain(labels).collect()
    }
}
