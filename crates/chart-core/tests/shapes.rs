// File: crates/chart-core/tests/shapes.rs
// Purpose: Path generators, axis structure, legend placement and SVG serialization.

use chart_core::axis::{self, Axis};
use chart_core::geometry::Point;
use chart_core::scale::{BandScale, LinearScale, Scale};
use chart_core::shape::{area_path, line_path, Curve};
use chart_core::svg::{Element, Transform};
use chart_core::{Legend, LegendEntry};

fn pts(v: &[(f64, f64)]) -> Vec<Point> {
    v.iter().copied().map(Point::from).collect()
}

#[test]
fn basis_curve_matches_b_spline_construction() {
    let d = line_path(&pts(&[(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)]), Curve::Basis);
    assert_eq!(d, "M0,0L1,1C2,2,4,4,6,4C8,4,10,2,11,1L12,0");
}

#[test]
fn short_lines() {
    assert_eq!(line_path(&[], Curve::Basis), "");
    assert_eq!(line_path(&pts(&[(3.0, 4.0)]), Curve::Basis), "M3,4Z");
    assert_eq!(line_path(&pts(&[(0.0, 0.0), (10.0, 5.0)]), Curve::Basis), "M0,0L10,5");
    assert_eq!(line_path(&pts(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)]), Curve::Linear), "M0,0L10,5L20,0");
}

#[test]
fn area_closes_back_along_baseline() {
    let d = area_path(&pts(&[(0.0, 10.0), (10.0, 0.0)]), 20.0, Curve::Linear);
    assert_eq!(d, "M0,10L10,0L10,20L0,20Z");
    let basis = area_path(&pts(&[(0.0, 10.0), (10.0, 0.0), (20.0, 5.0)]), 20.0, Curve::Basis);
    assert!(basis.starts_with("M0,10"));
    assert!(basis.ends_with("L0,20Z"));
}

#[test]
fn left_axis_has_domain_and_ticks() {
    let scale = Scale::Linear(LinearScale::new((0.0, 10.0), (100.0, 0.0)));
    let g = Axis::left(scale).render();
    let domain = g.children.first().unwrap();
    assert!(domain.has_class("domain"));
    assert_eq!(domain.get_attr("d"), Some("M-6,100.5H0.5V0.5H-6"));
    assert_eq!(axis::tick_labels(&g), vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);

    let first = g.children.iter().find(|c| c.has_class("tick")).unwrap();
    assert_eq!(first.get_attr("transform"), Some("translate(0,100.5)"));
    let text = first.children.iter().find(|c| c.name == "text").unwrap();
    assert_eq!(text.get_attr("x"), Some("-9"));
    assert_eq!(text.get_attr("dy"), Some("0.32em"));
}

#[test]
fn band_axis_centres_ticks_and_trims() {
    let band = BandScale::new(["a", "b"], (0.0, 200.0));
    let mut g = Axis::bottom(Scale::Band(band)).tick_size(-50.0).render();
    let ticks = g.children.iter().filter(|c| c.has_class("tick")).collect::<Vec<_>>();
    // bandwidth 100, centre (100 - 1) / 2 = 49.5, plus the half-pixel offset.
    assert_eq!(ticks[0].get_attr("transform"), Some("translate(50,0)"));
    assert_eq!(ticks[1].get_attr("transform"), Some("translate(150,0)"));

    axis::remove_domain(&mut g);
    axis::remove_tick_lines(&mut g);
    assert!(g.descendants_by_class("domain").is_empty());
    assert!(g.descendants_by_name("line").is_empty());
    assert_eq!(axis::tick_labels(&g), vec!["a", "b"]);
}

#[test]
fn legend_stacks_rows() {
    let legend = Legend::new(vec![
        LegendEntry::new("#1F77B4", "Kragujevac"),
        LegendEntry::new("#FF7F0E", "Tallinn"),
    ]);
    let els = legend.render();
    assert_eq!(els.len(), 4);

    let num = |e: &Element, k: &str| e.get_attr(k).unwrap().parse::<f64>().unwrap();
    assert_eq!(els[0].name, "rect");
    assert_eq!(num(&els[0], "x"), 100.0);
    assert_eq!(num(&els[0], "y"), 80.0);
    assert_eq!(num(&els[1], "y"), 100.0);
    assert_eq!(els[1].get_style("fill"), Some("#FF7F0E"));

    assert_eq!(els[2].text.as_deref(), Some("Kragujevac"));
    assert!((num(&els[2], "x") - 118.0).abs() < 1e-9);
    assert_eq!(num(&els[2], "y"), 87.5);
    assert_eq!(num(&els[3], "y"), 107.5);
    assert_eq!(els[3].get_style("alignment-baseline"), Some("middle"));
}

#[test]
fn svg_serialization_escapes_and_declares_namespace() {
    let svg = Element::new("svg")
        .attr("id", "x")
        .child(Element::new("text").style("fill", "red").text("a < b & \"c\""));
    let doc = svg.to_document();
    assert!(doc.starts_with("<?xml"));
    assert!(doc.contains("<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"x\">"));
    assert!(doc.contains("<text style=\"fill: red\">a &lt; b &amp; &quot;c&quot;</text>"));
    assert!(svg.find_by_id("x").is_some());
}

#[test]
fn transforms_parse_in_order() {
    assert_eq!(
        Transform::parse_list("translate(80, 40) rotate(-90deg)"),
        vec![Transform::Translate(80.0, 40.0), Transform::Rotate(-90.0)]
    );
    assert_eq!(Transform::parse_list("translate(5)"), vec![Transform::Translate(5.0, 0.0)]);
    assert!(Transform::parse_list("skewX(3)").is_empty());
}
