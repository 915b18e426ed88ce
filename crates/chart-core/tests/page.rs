// File: crates/chart-core/tests/page.rs
// Purpose: Concurrent page build from a data directory; failed sources leave empty containers.

use chart_core::{build_page, ChartError, RenderOptions};

fn write(dir: &std::path::Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write fixture");
}

#[tokio::test]
async fn missing_source_omits_only_that_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "PopulationByCountry.csv", "Year,Country\n1400000000,China\n300000000,USA\n");
    write(dir.path(), "LivingArea.csv", "SalePrice,GrLivArea\n200000,1500\n150000,1100\n");
    write(dir.path(), "WorldPopulationByYear.csv", "Year,Population\n1950,2500000000\n2020,7800000000\n");

    let page = build_page(dir.path(), &RenderOptions::default()).await;

    let ids = page.slots.iter().map(|s| s.id).collect::<Vec<_>>();
    assert_eq!(ids, vec!["barChart", "scatterPlot", "lineChart", "areaChart"]);
    assert_eq!(page.charts().count(), 3);

    let omitted = page.omitted().collect::<Vec<_>>();
    assert_eq!(omitted.len(), 1);
    assert_eq!(omitted[0].0, "lineChart");
    assert!(matches!(omitted[0].1, ChartError::Io { .. }));
    // The logged error carries the io cause as its source.
    let cause = std::error::Error::source(omitted[0].1)
        .and_then(|e| e.downcast_ref::<std::io::Error>())
        .expect("io source");
    assert_eq!(cause.kind(), std::io::ErrorKind::NotFound);

    let html = page.to_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<svg id=\"lineChart\" width=\"800\" height=\"500\"></svg>"));
    assert!(html.contains("<svg id=\"barChart\" width=\"800\" height=\"500\">\n"));
    assert!(html.contains(".chartTitle"));
    let bar = html.find("id=\"barChart\"").unwrap();
    let area = html.find("id=\"areaChart\"").unwrap();
    assert!(bar < area);
}

#[tokio::test]
async fn bad_header_is_isolated_to_its_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "PopulationByCountry.csv", "Population,Country\n1,A\n");
    write(dir.path(), "LivingArea.csv", "SalePrice,GrLivArea\n200000,1500\n");

    let page = build_page(dir.path(), &RenderOptions::default()).await;
    let bar = page.slot("barChart").unwrap();
    assert!(matches!(bar.outcome, Err(ChartError::MissingColumn(ref c)) if c == "Year"));
    assert!(page.slot("scatterPlot").unwrap().chart().is_some());
    assert_eq!(page.charts().count(), 1);
}
