// File: crates/chart-core/src/shape.rs
// Summary: Line and area path generators with linear and B-spline (basis) curves.

use std::fmt::Write;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Straight segments between points.
    Linear,
    /// Uniform cubic B-spline; passes through the first and last points only.
    Basis,
}

/// Accumulates SVG path data commands.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    d: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "M{x},{y}");
    }
    pub fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "L{x},{y}");
    }
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let _ = write!(self.d, "C{x1},{y1},{x2},{y2},{x},{y}");
    }
    pub fn close(&mut self) {
        self.d.push('Z');
    }
    pub fn finish(self) -> String {
        self.d
    }
}

/// Feeds points of one polyline into a `PathBuilder`.
/// `joined` continues the current subpath with a line instead of starting a new one.
struct Segment<'a> {
    out: &'a mut PathBuilder,
    curve: Curve,
    joined: bool,
    count: usize,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl<'a> Segment<'a> {
    fn new(out: &'a mut PathBuilder, curve: Curve, joined: bool) -> Self {
        Self { out, curve, joined, count: 0, x0: f64::NAN, y0: f64::NAN, x1: f64::NAN, y1: f64::NAN }
    }

    fn basis_point(&mut self, x: f64, y: f64) {
        self.out.cubic_to(
            (2.0 * self.x0 + self.x1) / 3.0,
            (2.0 * self.y0 + self.y1) / 3.0,
            (self.x0 + 2.0 * self.x1) / 3.0,
            (self.y0 + 2.0 * self.y1) / 3.0,
            (self.x0 + 4.0 * self.x1 + x) / 6.0,
            (self.y0 + 4.0 * self.y1 + y) / 6.0,
        );
    }

    fn point(&mut self, p: Point) {
        let (x, y) = (p.x, p.y);
        match self.curve {
            Curve::Linear => {
                if self.count == 0 && !self.joined {
                    self.out.move_to(x, y);
                } else {
                    self.out.line_to(x, y);
                }
            }
            Curve::Basis => match self.count {
                0 => {
                    if self.joined {
                        self.out.line_to(x, y);
                    } else {
                        self.out.move_to(x, y);
                    }
                }
                1 => {}
                2 => {
                    self.out.line_to((5.0 * self.x0 + self.x1) / 6.0, (5.0 * self.y0 + self.y1) / 6.0);
                    self.basis_point(x, y);
                }
                _ => self.basis_point(x, y),
            },
        }
        self.count += 1;
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
    }

    fn end(&mut self) {
        if self.curve == Curve::Basis {
            if self.count >= 3 {
                let (x1, y1) = (self.x1, self.y1);
                self.basis_point(x1, y1);
            }
            if self.count >= 2 {
                self.out.line_to(self.x1, self.y1);
            }
        }
    }
}

/// Path through `points`; empty string for no points.
pub fn line_path(points: &[Point], curve: Curve) -> String {
    let mut out = PathBuilder::new();
    if points.is_empty() {
        return out.finish();
    }
    {
        let mut seg = Segment::new(&mut out, curve, false);
        for p in points {
            seg.point(*p);
        }
        seg.end();
    }
    // A lone point still yields a closed (degenerate) subpath.
    if points.len() == 1 {
        out.close();
    }
    out.finish()
}

/// Closed area between the top line through `points` and a horizontal baseline at `y0`.
pub fn area_path(points: &[Point], y0: f64, curve: Curve) -> String {
    let mut out = PathBuilder::new();
    if points.is_empty() {
        return out.finish();
    }
    {
        let mut top = Segment::new(&mut out, curve, false);
        for p in points {
            top.point(*p);
        }
        top.end();
    }
    {
        let mut bottom = Segment::new(&mut out, curve, true);
        for p in points.iter().rev() {
            bottom.point(Point::new(p.x, y0));
        }
        bottom.end();
    }
    out.close();
    out.finish()
}
