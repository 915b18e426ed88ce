// File: crates/page/src/main.rs
// Summary: Renders the four charts from a data directory into an HTML page, with optional SVG/PNG exports.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{build_page, theme, Page, RenderOptions};
use chart_render_skia::SkiaRenderer;
use clap::{ArgAction, Parser, ValueHint};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render CSV files into bar, scatter, line and area charts", long_about = None)]
struct Cli {
    /// Directory holding the chart CSV files.
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    data_dir: PathBuf,

    /// HTML page to write.
    #[arg(short, long, default_value = "index.html", value_hint = ValueHint::FilePath)]
    out: PathBuf,

    /// Also write one standalone SVG per chart into this directory.
    #[arg(long, value_hint = ValueHint::DirPath)]
    svg_dir: Option<PathBuf>,

    /// Also rasterize each chart to PNG into this directory.
    #[arg(long, value_hint = ValueHint::DirPath)]
    png_dir: Option<PathBuf>,

    /// Colour theme (light or dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// More logging (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let theme = theme::find(&cli.theme);
    if !theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, using = theme.name, "unknown theme");
    }
    let opts = RenderOptions::with_theme(theme);

    let page = build_page(&cli.data_dir, &opts).await;
    info!(
        rendered = page.charts().count(),
        omitted = page.omitted().count(),
        data_dir = %cli.data_dir.display(),
        "page built"
    );

    write_html(&page, &cli.out)?;
    if let Some(dir) = &cli.svg_dir {
        write_svgs(&page, dir)?;
    }
    if let Some(dir) = &cli.png_dir {
        write_pngs(&page, dir)?;
    }
    Ok(())
}

fn write_html(page: &Page, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, page.to_html()).with_context(|| format!("writing {}", out.display()))?;
    info!(file = %out.display(), "wrote page");
    Ok(())
}

fn write_svgs(page: &Page, dir: &Path) -> Result<()> {
    for chart in page.charts() {
        let path = dir.join(format!("{}.svg", chart.id));
        chart.render_to_svg(&path)?;
        info!(file = %path.display(), "wrote svg");
    }
    Ok(())
}

fn write_pngs(page: &Page, dir: &Path) -> Result<()> {
    let renderer = SkiaRenderer::new();
    for chart in page.charts() {
        let path = dir.join(format!("{}.png", chart.id));
        renderer
            .render_to_png(&chart.svg, &page.theme, &path)
            .with_context(|| format!("rasterizing {}", chart.id))?;
        info!(file = %path.display(), "wrote png");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["csvcharts"]);
        assert_eq!(cli.data_dir, PathBuf::from("."));
        assert_eq!(cli.out, PathBuf::from("index.html"));
        assert_eq!(cli.theme, "light");
        assert_eq!(cli.verbose, 0);
        assert!(cli.png_dir.is_none());
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from([
            "csvcharts", "--data-dir", "data", "-o", "out/page.html", "--svg-dir", "svg", "--theme", "dark", "-vv",
        ]);
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert_eq!(cli.out, PathBuf::from("out/page.html"));
        assert_eq!(cli.svg_dir, Some(PathBuf::from("svg")));
        assert_eq!(cli.theme, "dark");
        assert_eq!(cli.verbose, 2);
    }
}
