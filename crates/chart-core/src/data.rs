// File: crates/chart-core/src/data.rs
// Summary: CSV records, in-place field coercion and the async fetch stage.
// Notes:
// - Records keep every column as raw text until a pipeline coerces the fields it plots.
// - Coercion never fails; invalid values become sentinels and are counted in a report.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::{ChartError, Result};

/// One CSV cell, before or after coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Text(String),
    /// NaN marks a value that failed numeric coercion.
    Number(f64),
    /// `None` marks a value that failed date coercion.
    Date(Option<NaiveDateTime>),
}

impl Field {
    /// Whether the value is usable for plotting.
    pub fn is_valid(&self) -> bool {
        match self {
            Field::Text(_) => true,
            Field::Number(v) => !v.is_nan(),
            Field::Date(d) => d.is_some(),
        }
    }
}

/// Column name -> value for one CSV row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record of raw text fields.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Field::Text(v.into())))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Field) {
        self.fields.insert(name.into(), value);
    }

    /// Raw text of a field that has not been coerced.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Field::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Coerced number; `None` when missing, not coerced, or NaN.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.fields.get(name) {
            Some(Field::Number(v)) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    /// Coerced date; `None` when missing, not coerced, or invalid.
    pub fn date(&self, name: &str) -> Option<NaiveDateTime> {
        match self.fields.get(name) {
            Some(Field::Date(d)) => *d,
            _ => None,
        }
    }

    /// True when every named field is present and valid.
    pub fn is_plottable(&self, names: &[&str]) -> bool {
        names
            .iter()
            .all(|n| self.fields.get(*n).is_some_and(Field::is_valid))
    }
}

/// Parsed CSV: header order plus rows.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Fails with `MissingColumn` for the first name absent from the header.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        for name in names {
            if !self.columns.iter().any(|c| c == name) {
                return Err(ChartError::MissingColumn((*name).to_string()));
            }
        }
        Ok(())
    }
}

/// Parse CSV with a header row. Short rows are padded with empty strings.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let rec = Record::from_pairs(
            columns
                .iter()
                .enumerate()
                .map(|(i, c)| (c.clone(), row.get(i).unwrap_or("").to_string())),
        );
        records.push(rec);
    }
    Ok(Dataset { columns, records })
}

/// Asynchronously read and parse a CSV file.
pub async fn fetch_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = read_csv(bytes.as_slice())?;
    debug!(file = %path.display(), rows = data.records.len(), "loaded csv");
    Ok(data)
}

// ---- coercion ---------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFormat {
    /// `%d-%m-%y`; two-digit years above 68 land in the 1900s.
    DayMonthShortYear,
    /// `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]`.
    Loose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coerce {
    /// Whole-string numeric conversion (empty string is 0).
    Number,
    /// Leading numeric prefix, `parseFloat` style.
    Float,
    Date(DateFormat),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coercion {
    pub field: String,
    pub kind: Coerce,
}

impl Coercion {
    pub fn new(field: impl Into<String>, kind: Coerce) -> Self {
        Self { field: field.into(), kind }
    }
    pub fn number(field: impl Into<String>) -> Self { Self::new(field, Coerce::Number) }
    pub fn float(field: impl Into<String>) -> Self { Self::new(field, Coerce::Float) }
    pub fn date(field: impl Into<String>, format: DateFormat) -> Self {
        Self::new(field, Coerce::Date(format))
    }
}

/// Invalid-value counts per coerced field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoercionReport {
    invalid: BTreeMap<String, usize>,
}

impl CoercionReport {
    pub fn invalid(&self, field: &str) -> usize {
        self.invalid.get(field).copied().unwrap_or(0)
    }
    pub fn total_invalid(&self) -> usize {
        self.invalid.values().sum()
    }
    pub fn is_clean(&self) -> bool {
        self.total_invalid() == 0
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.invalid.iter().filter(|(_, n)| **n > 0).map(|(k, n)| (k.as_str(), *n))
    }
}

/// Coerce the listed fields of every record in place.
/// Already-coerced fields are left alone; missing fields coerce from "".
pub fn coerce(records: &mut [Record], coercions: &[Coercion]) -> CoercionReport {
    let mut report = CoercionReport::default();
    for c in coercions {
        report.invalid.entry(c.field.clone()).or_insert(0);
    }
    for rec in records.iter_mut() {
        for c in coercions {
            let raw = match rec.get(&c.field) {
                Some(Field::Text(s)) => s.clone(),
                Some(_) => continue,
                None => String::new(),
            };
            let value = coerce_value(&raw, c.kind);
            if !value.is_valid() {
                *report.invalid.entry(c.field.clone()).or_insert(0) += 1;
            }
            rec.set(c.field.clone(), value);
        }
    }
    report
}

fn coerce_value(raw: &str, kind: Coerce) -> Field {
    match kind {
        Coerce::Number => Field::Number(coerce_number(raw)),
        Coerce::Float => Field::Number(parse_float(raw)),
        Coerce::Date(DateFormat::DayMonthShortYear) => Field::Date(parse_day_month_short_year(raw)),
        Coerce::Date(DateFormat::Loose) => Field::Date(parse_loose_date(raw)),
    }
}

/// Whole-string numeric conversion: trimmed, empty -> 0, radix prefixes,
/// `Infinity`; anything else unparsable -> NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u128::from_str_radix(&s[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }
    // f64::from_str also takes "inf"/"nan" spellings, which are not numbers here.
    let numeric = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Longest leading decimal literal after leading whitespace; none -> NaN.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    let negative = matches!(b.first(), Some(b'-'));
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return f64::NAN;
    }
    let mut end = i;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }
    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// `%d-%m-%y` with the 1969 pivot for two-digit years.
pub fn parse_day_month_short_year(raw: &str) -> Option<NaiveDateTime> {
    let mut parts = raw.split('-');
    let day = parse_digits(parts.next()?, 1, 2)?;
    let month = parse_digits(parts.next()?, 1, 2)?;
    let yy = parse_digits(parts.next()?, 2, 2)? as i32;
    if parts.next().is_some() {
        return None;
    }
    let year = if yy > 68 { 1900 + yy } else { 2000 + yy };
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

/// Year, year-month, date, or date-time; midnight when no time is given.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    let mut parts = s.split('-');
    let year = parse_digits(parts.next()?, 4, 4)? as i32;
    let month = match parts.next() {
        Some(m) => parse_digits(m, 2, 2)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}

fn parse_digits(s: &str, min: usize, max: usize) -> Option<u32> {
    if s.len() < min || s.len() > max || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
