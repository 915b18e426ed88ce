use chart_core::{read_csv, render, Dataset, LineChart, RenderOptions, ScatterPlot};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn scatter_data(n: usize) -> Dataset {
    let mut csv = String::from("SalePrice,GrLivArea\n");
    for i in 0..n {
        let area = 500.0 + (i as f64 * 0.37).sin().abs() * 4000.0;
        let price = 30_000.0 + area * 110.0 + (i % 97) as f64 * 500.0;
        csv.push_str(&format!("{price},{area}\n"));
    }
    read_csv(csv.as_bytes()).expect("scatter csv")
}

fn temperature_data(days: usize) -> Dataset {
    let mut csv = String::from("date,Kragujevac,Tallinn\n");
    for i in 0..days {
        let (d, m) = (i % 28 + 1, (i / 28) % 12 + 1);
        let t = (i as f64 / 58.0).sin() * 15.0;
        csv.push_str(&format!("{d:02}-{m:02}-21,{:.1},{:.1}\n", t + 10.0, t));
    }
    read_csv(csv.as_bytes()).expect("temperature csv")
}

fn bench_render(c: &mut Criterion) {
    let opts = RenderOptions::default();

    let mut group = c.benchmark_group("render_svg");
    for &n in &[1_000usize, 10_000usize] {
        let data = scatter_data(n);
        group.bench_function(format!("scatter_{n}"), |b| {
            b.iter(|| {
                let chart = render(&ScatterPlot::default(), data.clone(), &opts).expect("render");
                black_box(chart.to_svg_string());
            });
        });
    }
    let data = temperature_data(336);
    group.bench_function("line_336", |b| {
        b.iter(|| {
            let chart = render(&LineChart::default(), data.clone(), &opts).expect("render");
            black_box(chart.to_svg_string());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
