// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: round tick steps, tick sequences and "nice" domain bounds.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick indices and the increment between them.
/// A negative `inc` means ticks are `i / -inc` (sub-unit steps); positive means `i * inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment for `[start, stop]` (see `tick_spec`).
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Distance between adjacent ticks, negative when `stop < start`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Roughly `count` round values spanning `[start, stop]`, inclusive where they land on a bound.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start.is_nan() || stop.is_nan() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let idx = if reverse { i2 - i as f64 } else { i1 + i as f64 };
            if inc < 0.0 { idx / -inc } else { idx * inc }
        })
        .collect()
}

/// Extend `[start, stop]` outward to round tick values.
/// Repeats until the tick increment stops changing (at most 10 passes).
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    if !(lo < hi) || !lo.is_finite() || !hi.is_finite() {
        return (start, stop);
    }
    let mut prestep: Option<f64> = None;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if prestep == Some(step) {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    if reverse { (hi, lo) } else { (lo, hi) }
}
