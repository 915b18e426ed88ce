// File: crates/chart-core/src/format.rs
// Summary: Tick label formatting: SI prefixes, grouped fixed-point, calendar multi-format.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::scale::{Scale, TickValue};

/// U+2212, used in place of '-' for negative labels.
pub const MINUS: char = '\u{2212}';

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Short month names used by the temperature chart's time axis.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// How an axis turns tick values into text.
#[derive(Clone, Debug, PartialEq)]
pub enum TickFormat {
    /// Whatever the scale uses by default.
    Auto,
    /// SI prefix with `precision` significant digits, then substring replacement
    /// on the result (e.g. `G` -> `B`).
    Si {
        precision: usize,
        replace: Option<(String, String)>,
    },
    /// Month name by zero-based month index of a time tick.
    MonthNames(Vec<String>),
}

impl TickFormat {
    pub fn si(precision: usize) -> Self {
        TickFormat::Si { precision, replace: None }
    }

    pub fn si_replacing(precision: usize, from: &str, to: &str) -> Self {
        TickFormat::Si {
            precision,
            replace: Some((from.to_string(), to.to_string())),
        }
    }

    pub fn month_names(names: &[&str]) -> Self {
        TickFormat::MonthNames(names.iter().map(|s| s.to_string()).collect())
    }

    pub fn label(&self, scale: &Scale, value: &TickValue, count: usize) -> String {
        match (self, value) {
            (TickFormat::Si { precision, replace }, TickValue::Number(v)) => {
                let s = format_si(*v, *precision);
                match replace {
                    Some((from, to)) => s.replace(from.as_str(), to),
                    None => s,
                }
            }
            (TickFormat::MonthNames(names), TickValue::Time(t)) => names
                .get(t.month0() as usize)
                .cloned()
                .unwrap_or_default(),
            _ => scale.default_label(value, count),
        }
    }
}

/// Significant digits and decimal exponent of `|x|` rounded to `p` digits (`p == 0`: shortest).
fn decimal_parts(x: f64, p: usize) -> (String, i32) {
    let s = if p == 0 {
        format!("{:e}", x.abs())
    } else {
        format!("{:.*e}", p - 1, x.abs())
    };
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let digits = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exp.parse().unwrap_or(0))
}

fn signed(negative: bool, body: String) -> String {
    let nonzero = body.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative && nonzero {
        format!("{MINUS}{body}")
    } else {
        body
    }
}

/// SI-prefixed value with `precision` significant digits: 1.4e9 -> "1.4G", 0 -> "0.0".
pub fn format_si(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let p = precision.clamp(1, 21);
    let (coefficient, exponent) = decimal_parts(value, p);
    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8);
    let i = exponent - prefix_exponent * 3 + 1;
    let n = coefficient.len() as i32;
    let body = if i == n {
        coefficient
    } else if i > n {
        format!("{coefficient}{}", "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (a, b) = coefficient.split_at(i as usize);
        format!("{a}.{b}")
    } else {
        let rest = decimal_parts(value, (p as i32 + i - 1).max(0) as usize).0;
        format!("0.{}{rest}", "0".repeat((-i) as usize))
    };
    let suffix = SI_PREFIXES[(8 + prefix_exponent) as usize];
    signed(value < 0.0, format!("{body}{suffix}"))
}

/// Fixed-point with `precision` decimals, optionally grouped by thousands with ','.
pub fn format_fixed(value: f64, precision: usize, grouped: bool) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let raw = format!("{:.*}", precision, value.abs());
    let body = if grouped {
        let (int, frac) = match raw.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (raw.as_str(), None),
        };
        let mut out = group_thousands(int);
        if let Some(f) = frac {
            out.push('.');
            out.push_str(f);
        }
        out
    } else {
        raw
    };
    signed(value < 0.0, body)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        format!("{MINUS}Infinity")
    }
}

/// Decimals needed to show multiples of `step` exactly.
pub fn precision_fixed(step: f64) -> usize {
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let (_, exponent) = decimal_parts(step, 0);
    (-exponent).max(0) as usize
}

/// Label a time tick by its coarsest non-zero calendar field
/// (year, month name, week day, hour, minute, second, millisecond).
pub fn format_time_multi(t: NaiveDateTime) -> String {
    let pattern = if t.nanosecond() != 0 {
        ".%3f"
    } else if t.second() != 0 {
        ":%S"
    } else if t.minute() != 0 {
        "%I:%M"
    } else if t.hour() != 0 {
        "%I %p"
    } else if t.day() != 1 {
        if t.weekday().num_days_from_sunday() != 0 {
            "%a %d"
        } else {
            "%b %d"
        }
    } else if t.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    t.format(pattern).to_string()
}
