// File: crates/chart-core/src/axis.rs
// Summary: Axis generator producing domain path, tick lines and tick labels for a scale.

use crate::format::TickFormat;
use crate::scale::{Scale, DEFAULT_TICKS};
use crate::svg::Element;

/// Half-pixel shift so 1px strokes land on pixel centres.
const OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub scale: Scale,
    pub tick_count: usize,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    pub font_size: f64,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(orient: Orient, scale: Scale) -> Self {
        Self {
            orient,
            scale,
            tick_count: DEFAULT_TICKS,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            font_size: 10.0,
            format: TickFormat::Auto,
        }
    }

    pub fn bottom(scale: Scale) -> Self {
        Self::new(Orient::Bottom, scale)
    }

    pub fn left(scale: Scale) -> Self {
        Self::new(Orient::Left, scale)
    }

    /// Sets inner and outer tick size together.
    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size_inner = size;
        self.tick_size_outer = size;
        self
    }

    pub fn tick_size_outer(mut self, size: f64) -> Self {
        self.tick_size_outer = size;
        self
    }

    pub fn tick_padding(mut self, padding: f64) -> Self {
        self.tick_padding = padding;
        self
    }

    /// Label size set on the axis group; tick texts inherit it.
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn tick_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Sign of the tick direction: ticks point away from the plot.
    fn k(&self) -> f64 {
        match self.orient {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }

    /// Build the axis group: `path.domain` first, then one `g.tick` per tick value.
    pub fn render(&self) -> Element {
        let k = self.k();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let (r0, r1) = self.scale.range();
        let (range0, range1) = (r0 + OFFSET, r1 + OFFSET);
        // Band ticks sit at the band centre.
        let center = (self.scale.bandwidth() - OFFSET * 2.0).max(0.0) / 2.0;

        let anchor = match self.orient {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        };
        let mut g = Element::new("g")
            .attr("fill", "none")
            .attr("font-size", self.font_size)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor);

        let outer = k * self.tick_size_outer;
        let off = OFFSET;
        let d = match (self.orient, self.tick_size_outer != 0.0) {
            (Orient::Bottom, true) => format!("M{range0},{outer}V{off}H{range1}V{outer}"),
            (Orient::Bottom, false) => format!("M{range0},{off}H{range1}"),
            (Orient::Left, true) => format!("M{outer},{range0}H{off}V{range1}H{outer}"),
            (Orient::Left, false) => format!("M{off},{range0}V{range1}"),
        };
        g.push(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", d),
        );

        for value in self.scale.ticks(self.tick_count) {
            let Some(pos) = self.scale.map(&value) else { continue };
            let pos = pos + center + OFFSET;
            let label = self.format.label(&self.scale, &value, self.tick_count);
            let (transform, line, text) = match self.orient {
                Orient::Bottom => (
                    format!("translate({pos},0)"),
                    Element::new("line").attr("stroke", "currentColor").attr("y2", k * self.tick_size_inner),
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("y", k * spacing)
                        .attr("dy", "0.71em"),
                ),
                Orient::Left => (
                    format!("translate(0,{pos})"),
                    Element::new("line").attr("stroke", "currentColor").attr("x2", k * self.tick_size_inner),
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .attr("x", k * spacing)
                        .attr("dy", "0.32em"),
                ),
            };
            g.push(
                Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", 1)
                    .attr("transform", transform)
                    .child(line)
                    .child(text.text(label)),
            );
        }
        g
    }
}

// ---- post-processing on a rendered axis group ------------------------------

pub fn remove_domain(axis: &mut Element) {
    axis.children.retain(|c| !c.has_class("domain"));
}

pub fn domain_mut(axis: &mut Element) -> Option<&mut Element> {
    axis.children.iter_mut().find(|c| c.has_class("domain"))
}

pub fn remove_tick_lines(axis: &mut Element) {
    for tick in axis.children.iter_mut().filter(|c| c.has_class("tick")) {
        tick.children.retain(|c| c.name != "line");
    }
}

/// Tick line of the first tick group.
pub fn first_tick_line_mut(axis: &mut Element) -> Option<&mut Element> {
    axis.children
        .iter_mut()
        .find(|c| c.has_class("tick"))
        .and_then(|t| t.children.iter_mut().find(|c| c.name == "line"))
}

/// Tick line of the last tick group.
pub fn last_tick_line_mut(axis: &mut Element) -> Option<&mut Element> {
    axis.children
        .iter_mut()
        .rev()
        .find(|c| c.has_class("tick"))
        .and_then(|t| t.children.iter_mut().find(|c| c.name == "line"))
}

/// Tick label texts in order.
pub fn tick_labels(axis: &Element) -> Vec<String> {
    axis.children
        .iter()
        .filter(|c| c.has_class("tick"))
        .filter_map(|t| t.children.iter().find(|c| c.name == "text"))
        .filter_map(|t| t.text.clone())
        .collect()
}
