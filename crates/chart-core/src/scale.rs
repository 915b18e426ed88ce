// File: crates/chart-core/src/scale.rs
// Summary: Linear, band and time scales mapping domain values to pixel coordinates.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::format::{format_fixed, format_time_multi, precision_fixed};
use crate::grid;
use crate::time;

/// Default tick count requested by axes.
pub const DEFAULT_TICKS: usize = 10;

/// A domain value: what gets mapped and what axes label.
#[derive(Clone, Debug, PartialEq)]
pub enum TickValue {
    Number(f64),
    Category(String),
    Time(NaiveDateTime),
}

/// Closed set of scale kinds used by the charts.
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Band(BandScale),
    Time(TimeScale),
}

impl Scale {
    /// Pixel coordinate for `value`; `None` when the value kind does not match
    /// the scale or a category is unknown.
    pub fn map(&self, value: &TickValue) -> Option<f64> {
        match (self, value) {
            (Scale::Linear(s), TickValue::Number(v)) => Some(s.map(*v)),
            (Scale::Band(s), TickValue::Category(c)) => s.map(c),
            (Scale::Time(s), TickValue::Time(t)) => Some(s.map(*t)),
            _ => None,
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<TickValue> {
        match self {
            Scale::Linear(s) => s.ticks(count).into_iter().map(TickValue::Number).collect(),
            Scale::Band(s) => s.domain().iter().cloned().map(TickValue::Category).collect(),
            Scale::Time(s) => s.ticks(count).into_iter().map(TickValue::Time).collect(),
        }
    }

    /// The scale's own label for a tick, given the tick count in use.
    pub fn default_label(&self, value: &TickValue, count: usize) -> String {
        match (self, value) {
            (Scale::Linear(s), TickValue::Number(v)) => s.format_tick(*v, count),
            (_, TickValue::Number(v)) => v.to_string(),
            (_, TickValue::Category(c)) => c.clone(),
            (_, TickValue::Time(t)) => format_time_multi(*t),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        match self {
            Scale::Linear(s) => s.range,
            Scale::Band(s) => s.range,
            Scale::Time(s) => s.range,
        }
    }

    /// Band width for band scales, zero otherwise.
    pub fn bandwidth(&self) -> f64 {
        match self {
            Scale::Band(s) => s.bandwidth(),
            _ => 0.0,
        }
    }
}

// ---- linear -----------------------------------------------------------------

/// Continuous scale: `range.0 + t * (range.1 - range.0)` with `t` the position in the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Round the domain outward to tick values (default tick count).
    pub fn nice(self) -> Self {
        self.nice_count(DEFAULT_TICKS)
    }

    pub fn nice_count(mut self, count: usize) -> Self {
        self.domain = grid::nice(self.domain.0, self.domain.1, count);
        self
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        // A collapsed domain maps everything to the middle of the range.
        let t = if span != 0.0 { (v - d0) / span } else { 0.5 };
        let (r0, r1) = self.range;
        r0 * (1.0 - t) + r1 * t
    }

    pub fn invert(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span != 0.0 { (px - r0) / span } else { 0.5 };
        let (d0, d1) = self.domain;
        d0 * (1.0 - t) + d1 * t
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    /// `,.Nf` where N is just enough digits to tell adjacent ticks apart.
    pub fn format_tick(&self, v: f64, count: usize) -> String {
        let step = grid::tick_step(self.domain.0, self.domain.1, count);
        format_fixed(v, precision_fixed(step), true)
    }
}

// ---- band -------------------------------------------------------------------

/// Categorical scale splitting the range into equal slots, one per distinct category.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    /// Category -> position in `domain`.
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    step: f64,
    bandwidth: f64,
    positions: Vec<f64>,
}

impl BandScale {
    /// Duplicate categories keep their first position.
    pub fn new<I, S>(domain: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        let mut index = HashMap::new();
        for c in domain {
            let c = c.into();
            if let Entry::Vacant(slot) = index.entry(c.clone()) {
                slot.insert(unique.len());
                unique.push(c);
            }
        }
        let mut s = Self {
            domain: unique,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            step: 0.0,
            bandwidth: 0.0,
            positions: Vec::new(),
        };
        s.rescale();
        s
    }

    /// Same padding inside and outside, as a fraction of the step.
    pub fn padding(mut self, p: f64) -> Self {
        self.padding_inner = p.clamp(0.0, 1.0);
        self.padding_outer = p;
        self.rescale();
        self
    }

    pub fn align(mut self, a: f64) -> Self {
        self.align = a.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let reverse = r1 < r0;
        let (mut start, stop) = if reverse { (r1, r0) } else { (r0, r1) };
        self.step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        start += (stop - start - self.step * (n - self.padding_inner)) * self.align;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
        let mut positions: Vec<f64> = (0..self.domain.len())
            .map(|i| start + self.step * i as f64)
            .collect();
        if reverse {
            positions.reverse();
        }
        self.positions = positions;
    }

    pub fn map(&self, category: &str) -> Option<f64> {
        let i = *self.index.get(category)?;
        self.positions.get(i).copied()
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

// ---- time -------------------------------------------------------------------

/// Linear scale over timestamps (milliseconds) with calendar-aware ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveDateTime, NaiveDateTime),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    fn linear(&self) -> LinearScale {
        LinearScale::new((time::millis(self.domain.0), time::millis(self.domain.1)), self.range)
    }

    #[inline]
    pub fn map(&self, t: NaiveDateTime) -> f64 {
        self.linear().map(time::millis(t))
    }

    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let (a, b) = self.domain;
        let (lo, hi) = if b < a { (b, a) } else { (a, b) };
        let mut out = time::ticks(lo, hi, count);
        if b < a {
            out.reverse();
        }
        out
    }
}
