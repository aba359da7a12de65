use chrono::NaiveDate;
use js_sys::Date;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Current month in the `YYYY-MM` shape a month input expects
pub fn current_month() -> String {
    today().format("%Y-%m").to_string()
}

/// Local date and time the way the browser prints it, for "generated at" labels
pub fn now_display() -> String {
    Date::new_0()
        .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Parse the value of a `<input type="date">`; empty means not chosen yet
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Inverse of `parse_input_date`
pub fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-03-09"),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("03/09/2024"), None);
    }

    #[test]
    fn test_input_value_round_trips_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1);
        assert_eq!(input_value(date), "2024-12-01");
        assert_eq!(parse_input_date(&input_value(date)), date);
        assert_eq!(input_value(None), "");
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_current_month() {
        assert!(current_month().starts_with(&today().format("%Y").to_string()));
        assert!(!now_display().is_empty());
    }
}
