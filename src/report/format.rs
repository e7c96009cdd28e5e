//! Currency and date formatting for rendered documents.
//!
//! Amounts are integer cents rendered in Brazilian Real style
//! (`R$ 1.234,56`); dates are rendered as `dd/mm/yyyy`.

use chrono::{DateTime, NaiveDate, TimeZone};

pub const CURRENCY_SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Placeholder for any absent optional value.
pub const PLACEHOLDER: &str = "-";

/// Format an amount in cents, e.g. `123456` -> `"R$ 1.234,56"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let units = (abs / 100).to_string();
    let fraction = abs % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    format!(
        "{}{} {}{}{:02}",
        sign, CURRENCY_SYMBOL, grouped, DECIMAL_SEPARATOR, fraction
    )
}

/// Values that can be printed as a calendar date.
pub trait ReportDate {
    fn format_report_date(&self) -> String;
}

impl ReportDate for NaiveDate {
    fn format_report_date(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl<Tz: TimeZone> ReportDate for DateTime<Tz> {
    fn format_report_date(&self) -> String {
        self.date_naive().format(DATE_FORMAT).to_string()
    }
}

/// ISO dates (`2026-03-01`) and timestamps (`2026-03-01T10:00:00Z`) are
/// reformatted; anything else is printed unchanged.
impl ReportDate for str {
    fn format_report_date(&self) -> String {
        let trimmed = self.trim();
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return datetime.format_report_date();
        }
        match trimmed
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        {
            Some(date) => date.format_report_date(),
            None => trimmed.to_string(),
        }
    }
}

impl ReportDate for String {
    fn format_report_date(&self) -> String {
        self.as_str().format_report_date()
    }
}

impl<T: ReportDate + ?Sized> ReportDate for &T {
    fn format_report_date(&self) -> String {
        (**self).format_report_date()
    }
}

pub fn format_date<D: ReportDate>(date: D) -> String {
    date.format_report_date()
}

/// Optional text, or the placeholder when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "R$ 0,00");
        assert_eq!(format_cents(5), "R$ 0,05");
        assert_eq!(format_cents(25000), "R$ 250,00");
        assert_eq!(format_cents(123456), "R$ 1.234,56");
        assert_eq!(format_cents(100000000), "R$ 1.000.000,00");
        assert_eq!(format_cents(-100), "-R$ 1,00");
    }

    #[test]
    fn test_format_cents_extremes_do_not_panic() {
        assert!(format_cents(i64::MIN).starts_with("-R$ "));
        assert!(format_cents(i64::MAX).starts_with("R$ "));
    }

    #[test]
    fn test_format_date_variants() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(format_date(date), "09/03/2026");

        let datetime = Utc.with_ymd_and_hms(2026, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(format_date(&datetime), "31/12/2026");

        assert_eq!(format_date("2026-01-02"), "02/01/2026");
        assert_eq!(format_date("2026-01-02T08:30:00Z"), "02/01/2026");
        assert_eq!(format_date("2026-01-02T08:30:00"), "02/01/2026");
        assert_eq!(format_date("next week"), "next week");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(None), "-");
        assert_eq!(or_placeholder(Some("  ")), "-");
        assert_eq!(or_placeholder(Some("x")), "x");
    }
}
