// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic bar chart to an SVG document.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the documents for exact match.
// - Else fails: the golden file is committed under tests/__snapshots__.

use chart_core::{read_csv, render, BarChart, RenderOptions};

fn render_svg() -> String {
    let csv = "Year,Country\n1400000000,China\n1300000000,India\n320000000,USA\n";
    let data = read_csv(csv.as_bytes()).expect("parse csv");
    render(&BarChart::default(), data, &RenderOptions::default())
        .expect("render bar chart")
        .to_svg_string()
}

#[test]
fn golden_bar_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("bar_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    assert!(
        snap_path.exists(),
        "missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless",
        snap_path.display()
    );
    let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
    assert_eq!(svg, want, "rendered svg differs from golden snapshot: {}", snap_path.display());
}

#[test]
fn svg_file_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested/bar.svg");
    let data = read_csv("Year,Country\n5,A\n".as_bytes()).unwrap();
    let chart = render(&BarChart::default(), data, &RenderOptions::default()).unwrap();
    chart.render_to_svg(&path).expect("write svg");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, chart.to_svg_string());
    assert!(written.contains("xmlns=\"http://www.w3.org/2000/svg\""));
}
