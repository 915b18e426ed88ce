// File: crates/chart-render-skia/tests/png.rs
// Purpose: Rasterize rendered charts and check size, background and mark colours.

use chart_core::{read_csv, render, BarChart, Element, RenderOptions, Theme};
use chart_render_skia::SkiaRenderer;

fn bar_scene(theme: Theme) -> Element {
    let data = read_csv("Year,Country\n1400000000,China\n300000000,USA\n".as_bytes()).expect("csv");
    render(&BarChart::default(), data, &RenderOptions::with_theme(theme))
        .expect("render")
        .svg
}

#[test]
fn bar_chart_png_has_canvas_size_and_bar_colour() {
    let bytes = SkiaRenderer::new().render_png(&bar_scene(Theme::light()), &Theme::light()).expect("png");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 500));

    // Top-left corner is bare background.
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
    // Inside the China bar, between two grid lines.
    assert_eq!(img.get_pixel(470, 147).0, [70, 130, 180, 255]);
}

#[test]
fn dark_theme_background() {
    let theme = Theme::dark();
    let bytes = SkiaRenderer::new().render_png(&bar_scene(theme), &theme).expect("png");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    let bg = theme.background;
    assert_eq!(img.get_pixel(5, 5).0, [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn png_file_written_under_new_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out/bar.png");
    SkiaRenderer::default()
        .render_to_png(&bar_scene(Theme::light()), &Theme::light(), &path)
        .expect("write png");
    let img = image::open(&path).expect("open png");
    assert_eq!(img.width(), 800);
}
