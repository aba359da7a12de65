//! Display formatting shared by every page.

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse what date and datetime inputs (and the backend) produce: a plain
/// date, a local date-time with or without seconds, or an RFC 3339 stamp.
pub fn parse_loose_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(stamp.naive_utc());
    }
    let trimmed = value.trim_end_matches('Z');
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `2024-01-05T00:00:00` -> `Jan 5, 2024`; empty -> `N/A`. Unparseable
/// values are shown as they came.
pub fn format_short_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => "N/A".to_string(),
        Some(raw) => parse_loose_datetime(raw)
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Value for an `<input type="datetime-local">`
pub fn datetime_input_value(value: Option<&str>) -> String {
    value
        .and_then(parse_loose_datetime)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// `2024-01-01T00:00:00.000Z`
pub fn iso_utc(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// `1234.5` -> `$1,234.50`, `-20` -> `-$20.00`
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Two decimals without grouping, as used inside sentences (`$12.50`).
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Cut `text` to at most `max` characters, appending `...` when shortened.
pub fn truncate_preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}

/// `PROFIT_LOSS` -> `PROFIT LOSS`
pub fn underscores_to_spaces(value: &str) -> String {
    value.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(-20.0), "-$20.00");
    }

    #[test]
    fn test_parse_loose_datetime_accepts_input_shapes() {
        let midnight = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_loose_datetime("2024-01-05"), Some(midnight));
        assert_eq!(parse_loose_datetime("2024-01-05T00:00"), Some(midnight));
        assert_eq!(parse_loose_datetime("2024-01-05T00:00:00"), Some(midnight));
        assert_eq!(parse_loose_datetime("2024-01-05T00:00:00.000Z"), Some(midnight));
        assert_eq!(parse_loose_datetime("yesterday"), None);
        assert_eq!(parse_loose_datetime(""), None);
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date(Some("2024-01-05T10:30:00")), "Jan 5, 2024");
        assert_eq!(format_short_date(None), "N/A");
        assert_eq!(format_short_date(Some("soon")), "soon");
    }

    #[test]
    fn test_datetime_input_value_and_iso() {
        assert_eq!(datetime_input_value(Some("2024-03-01T08:15:00")), "2024-03-01T08:15");
        assert_eq!(datetime_input_value(None), "");

        let dt = parse_loose_datetime("2024-03-01T08:15").unwrap();
        assert_eq!(iso_utc(&dt), "2024-03-01T08:15:00.000Z");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
    }

    #[test]
    fn test_truncate_preview() {
        assert_eq!(truncate_preview("Tea", 50), "Tea");
        let long = "a".repeat(60);
        let cut = truncate_preview(&long, 50);
        assert_eq!(cut.len(), 53);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_preview_counts_chars_not_bytes() {
        assert_eq!(truncate_preview("crème brûlée", 5), "crème...");
    }
}
