// File: crates/chart-core/tests/coercion.rs
// Purpose: Field coercion rules and the invalid-value report.

use chart_core::data::{coerce_number, parse_day_month_short_year, parse_float, parse_loose_date};
use chart_core::{coerce, read_csv, Coercion, DateFormat, Field};
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

#[test]
fn number_follows_unary_plus() {
    assert_eq!(coerce_number("1400000000"), 1.4e9);
    assert_eq!(coerce_number("  42 "), 42.0);
    assert_eq!(coerce_number(""), 0.0);
    assert_eq!(coerce_number("0x1A"), 26.0);
    assert_eq!(coerce_number("-2.5e3"), -2500.0);
    assert_eq!(coerce_number("Infinity"), f64::INFINITY);
    assert!(coerce_number("12abc").is_nan());
    assert!(coerce_number("inf").is_nan());
}

#[test]
fn float_takes_leading_prefix() {
    assert_eq!(parse_float("12.5abc"), 12.5);
    assert_eq!(parse_float("  -3.2e1x"), -32.0);
    assert_eq!(parse_float(".5"), 0.5);
    assert_eq!(parse_float("7e"), 7.0);
    assert!(parse_float("abc").is_nan());
    assert!(parse_float("").is_nan());
}

#[test]
fn short_year_dates_pivot_at_69() {
    assert_eq!(parse_day_month_short_year("05-03-21"), Some(ymd(2021, 3, 5)));
    assert_eq!(parse_day_month_short_year("1-1-68"), Some(ymd(2068, 1, 1)));
    assert_eq!(parse_day_month_short_year("01-01-69"), Some(ymd(1969, 1, 1)));
    assert_eq!(parse_day_month_short_year("31-02-21"), None);
    assert_eq!(parse_day_month_short_year("2021-03-05"), None);
}

#[test]
fn loose_dates_accept_year_month_and_day() {
    assert_eq!(parse_loose_date("1950"), Some(ymd(1950, 1, 1)));
    assert_eq!(parse_loose_date("1950-06"), Some(ymd(1950, 6, 1)));
    assert_eq!(parse_loose_date("1950-06-15"), Some(ymd(1950, 6, 15)));
    assert_eq!(
        parse_loose_date("1950-06-15T10:30"),
        NaiveDate::from_ymd_opt(1950, 6, 15).unwrap().and_hms_opt(10, 30, 0)
    );
    assert_eq!(parse_loose_date("nineteen fifty"), None);
    assert_eq!(parse_loose_date("1950-13"), None);
}

#[test]
fn coerce_counts_invalid_values_per_field() {
    let csv = "SalePrice,GrLivArea\n200000,1500\nabc,1600\n180000,\n";
    let mut data = read_csv(csv.as_bytes()).unwrap();
    let report = coerce(
        &mut data.records,
        &[Coercion::number("SalePrice"), Coercion::number("GrLivArea")],
    );

    assert_eq!(report.invalid("SalePrice"), 1);
    // Empty string coerces to 0, which is a valid number.
    assert_eq!(report.invalid("GrLivArea"), 0);
    assert_eq!(report.total_invalid(), 1);
    assert!(!report.is_clean());
    assert_eq!(report.iter().collect::<Vec<_>>(), vec![("SalePrice", 1)]);

    assert_eq!(data.records[0].number("SalePrice"), Some(200000.0));
    assert_eq!(data.records[1].number("SalePrice"), None);
    assert_eq!(data.records[2].number("GrLivArea"), Some(0.0));
    assert!(!data.records[1].is_plottable(&["SalePrice", "GrLivArea"]));
    assert!(data.records[2].is_plottable(&["SalePrice", "GrLivArea"]));
}

#[test]
fn coerce_leaves_uncoerced_fields_as_text() {
    let mut data = read_csv("Year,Country\n1400000000,China\n".as_bytes()).unwrap();
    let report = coerce(&mut data.records, &[Coercion::number("Year")]);
    assert!(report.is_clean());
    assert_eq!(data.records[0].text("Country"), Some("China"));
    assert_eq!(data.records[0].get("Year"), Some(&Field::Number(1.4e9)));
}

#[test]
fn date_coercion_marks_unparsable_dates() {
    let mut data = read_csv("date,Tallinn\n01-01-21,-3.5\nyesterday,2\n".as_bytes()).unwrap();
    let report = coerce(
        &mut data.records,
        &[Coercion::date("date", DateFormat::DayMonthShortYear), Coercion::float("Tallinn")],
    );
    assert_eq!(report.invalid("date"), 1);
    assert_eq!(data.records[0].date("date"), Some(ymd(2021, 1, 1)));
    assert_eq!(data.records[1].get("date"), Some(&Field::Date(None)));
    assert_eq!(data.records[0].number("Tallinn"), Some(-3.5));
}

#[test]
fn short_rows_are_padded() {
    let data = read_csv("a,b\n1\n".as_bytes()).unwrap();
    assert_eq!(data.columns, vec!["a", "b"]);
    assert_eq!(data.records[0].text("b"), Some(""));
}
