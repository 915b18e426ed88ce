// File: crates/chart-core/src/time.rs
// Summary: Calendar intervals (second .. year) and time-scale tick selection.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike};

use crate::grid::tick_step;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = SECOND * 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;
const MONTH: f64 = DAY * 30.0;
const YEAR: f64 = DAY * 365.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    /// Sunday-based weeks.
    Week,
    Month,
    Year,
}

/// Tick candidates in ascending duration; the last column is the nominal length in ms.
const TICK_INTERVALS: [(Unit, u32, f64); 18] = [
    (Unit::Second, 1, SECOND),
    (Unit::Second, 5, 5.0 * SECOND),
    (Unit::Second, 15, 15.0 * SECOND),
    (Unit::Second, 30, 30.0 * SECOND),
    (Unit::Minute, 1, MINUTE),
    (Unit::Minute, 5, 5.0 * MINUTE),
    (Unit::Minute, 15, 15.0 * MINUTE),
    (Unit::Minute, 30, 30.0 * MINUTE),
    (Unit::Hour, 1, HOUR),
    (Unit::Hour, 3, 3.0 * HOUR),
    (Unit::Hour, 6, 6.0 * HOUR),
    (Unit::Hour, 12, 12.0 * HOUR),
    (Unit::Day, 1, DAY),
    (Unit::Day, 2, 2.0 * DAY),
    (Unit::Week, 1, WEEK),
    (Unit::Month, 1, MONTH),
    (Unit::Month, 3, 3.0 * MONTH),
    (Unit::Year, 1, YEAR),
];

/// A calendar unit and a stride: boundaries whose unit field is a multiple of `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub unit: Unit,
    pub step: u64,
}

/// Milliseconds since the Unix epoch, treating the naive time as UTC.
pub fn millis(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64
}

fn from_millis(ms: i64) -> Option<NaiveDateTime> {
    chrono::DateTime::from_timestamp_millis(ms).map(|d| d.naive_utc())
}

/// Pick the interval whose nominal length is closest (by ratio) to `span / count`.
pub fn tick_interval(start: NaiveDateTime, stop: NaiveDateTime, count: usize) -> Interval {
    let (a, b) = (millis(start), millis(stop));
    let target = (b - a).abs() / count.max(1) as f64;
    let i = TICK_INTERVALS.partition_point(|&(_, _, d)| d <= target);
    if i == TICK_INTERVALS.len() {
        let step = tick_step(a / YEAR, b / YEAR, count).abs().floor().max(1.0);
        return Interval { unit: Unit::Year, step: step as u64 };
    }
    if i == 0 {
        let step = tick_step(a, b, count).abs().floor().max(1.0);
        return Interval { unit: Unit::Millisecond, step: step as u64 };
    }
    let pick = if target / TICK_INTERVALS[i - 1].2 < TICK_INTERVALS[i].2 / target {
        i - 1
    } else {
        i
    };
    let (unit, step, _) = TICK_INTERVALS[pick];
    Interval { unit, step: step as u64 }
}

/// Tick dates within `[start, stop]` (both inclusive), `start <= stop`.
pub fn ticks(start: NaiveDateTime, stop: NaiveDateTime, count: usize) -> Vec<NaiveDateTime> {
    if count == 0 {
        return Vec::new();
    }
    range(tick_interval(start, stop, count), start, stop)
}

/// Interval boundaries within `[start, stop]`.
pub fn range(interval: Interval, start: NaiveDateTime, stop: NaiveDateTime) -> Vec<NaiveDateTime> {
    let mut out = Vec::new();
    if interval.unit == Unit::Millisecond {
        let k = interval.step as i64;
        let first = (millis(start) as i64).div_euclid(k) * k;
        let first = if first < millis(start) as i64 { first + k } else { first };
        let mut ms = first;
        while ms <= millis(stop) as i64 {
            if let Some(t) = from_millis(ms) {
                out.push(t);
            }
            ms += k;
        }
        return out;
    }
    let mut t = ceil(interval.unit, start);
    while t <= stop {
        if matches_step(interval, t) {
            out.push(t);
        }
        match offset(interval.unit, t) {
            Some(next) => t = next,
            None => break,
        }
    }
    out
}

fn matches_step(interval: Interval, t: NaiveDateTime) -> bool {
    if interval.step <= 1 {
        return true;
    }
    let field = match interval.unit {
        Unit::Second => t.second() as i64,
        Unit::Minute => t.minute() as i64,
        Unit::Hour => t.hour() as i64,
        Unit::Day => t.day() as i64 - 1,
        Unit::Month => t.month0() as i64,
        Unit::Year => t.year() as i64,
        Unit::Week | Unit::Millisecond => return true,
    };
    field.rem_euclid(interval.step as i64) == 0
}

/// Start of the unit containing `t`.
pub fn floor(unit: Unit, t: NaiveDateTime) -> NaiveDateTime {
    let date = t.date();
    let midnight = |d: NaiveDate| d.and_hms_opt(0, 0, 0).unwrap_or(t);
    match unit {
        Unit::Millisecond => t.with_nanosecond(t.nanosecond() / 1_000_000 * 1_000_000).unwrap_or(t),
        Unit::Second => t.with_nanosecond(0).unwrap_or(t),
        Unit::Minute => date.and_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t),
        Unit::Hour => date.and_hms_opt(t.hour(), 0, 0).unwrap_or(t),
        Unit::Day => midnight(date),
        Unit::Week => {
            let back = date.weekday().num_days_from_sunday() as i64;
            midnight(date - Duration::days(back))
        }
        Unit::Month => midnight(date.with_day(1).unwrap_or(date)),
        Unit::Year => midnight(NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)),
    }
}

/// First unit boundary at or after `t`.
pub fn ceil(unit: Unit, t: NaiveDateTime) -> NaiveDateTime {
    let f = floor(unit, t);
    if f == t {
        f
    } else {
        offset(unit, f).unwrap_or(f)
    }
}

/// One unit after `t`.
pub fn offset(unit: Unit, t: NaiveDateTime) -> Option<NaiveDateTime> {
    match unit {
        Unit::Millisecond => t.checked_add_signed(Duration::milliseconds(1)),
        Unit::Second => t.checked_add_signed(Duration::seconds(1)),
        Unit::Minute => t.checked_add_signed(Duration::minutes(1)),
        Unit::Hour => t.checked_add_signed(Duration::hours(1)),
        Unit::Day => t.checked_add_signed(Duration::days(1)),
        Unit::Week => t.checked_add_signed(Duration::weeks(1)),
        Unit::Month => t.checked_add_months(Months::new(1)),
        Unit::Year => t.checked_add_months(Months::new(12)),
    }
}

/// Calendar date from a year and a zero-based month index that may overflow,
/// e.g. `(1949, 12)` is January 1950.
pub fn month_start(year: i32, month_index: i32) -> Option<NaiveDateTime> {
    let total = year * 12 + month_index;
    let y = total.div_euclid(12);
    let m = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(y, m, 1)?.and_hms_opt(0, 0, 0)
}
