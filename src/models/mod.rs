pub mod record;
pub mod warehouse;

pub use record::{LogColumn, RecordKey, ShipmentRecord};
pub use warehouse::{SettingColumn, WarehouseSetting};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// String coercion for one positional cell. Missing and null cells become
/// empty strings, everything else keeps its spreadsheet string form.
pub(crate) fn cell_string(row: &[Value], idx: usize) -> String {
    match row.get(idx) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Numeric coercion for one positional cell. Numeric strings parse, anything
/// non-numeric (including NaN-producing input) collapses to 0 so the
/// aggregation engine never sees a non-finite value.
pub(crate) fn cell_number(row: &[Value], idx: usize) -> f64 {
    let value = match row.get(idx) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    if value.is_finite() { value } else { 0.0 }
}

/// The sheet stores the transfer flag either as a real boolean or as the
/// string "TRUE".
pub(crate) fn cell_flag(row: &[Value], idx: usize) -> bool {
    match row.get(idx) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "TRUE",
        _ => false,
    }
}

/// Normalizes a date-like cell to `YYYY-MM-DD`. The sheet hands back a mix of
/// RFC 3339 timestamps, plain dates and epoch milliseconds depending on how
/// the cell was written. Values that cannot be read as a date pass through
/// in their string form unchanged.
pub fn normalize_date(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => {
            if s.is_empty() {
                return String::new();
            }
            parse_date_string(s).unwrap_or_else(|| s.clone())
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}

fn parse_date_string(s: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.format("%Y-%m-%d").to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_date_handles_sheet_formats() {
        assert_eq!(normalize_date(&json!("2024-03-05")), "2024-03-05");
        assert_eq!(
            normalize_date(&json!("2024-03-05T22:00:00.000Z")),
            "2024-03-05"
        );
        assert_eq!(normalize_date(&json!("2024-03-05T22:00:00")), "2024-03-05");
        assert_eq!(normalize_date(&json!("2024-03-05 22:00:00")), "2024-03-05");
    }

    #[test]
    fn normalize_date_passes_unparseable_values_through() {
        assert_eq!(normalize_date(&json!("kovo 5 d.")), "kovo 5 d.");
        assert_eq!(normalize_date(&Value::Null), "");
        assert_eq!(normalize_date(&json!("")), "");
    }

    #[test]
    fn normalize_date_reads_epoch_millis() {
        // 2024-01-10T00:00:00Z
        assert_eq!(normalize_date(&json!(1704844800000i64)), "2024-01-10");
    }

    #[test]
    fn cell_number_coerces_strings_and_defaults() {
        let row = vec![json!("12.5"), json!("abc"), json!(null), json!(3)];
        assert_eq!(cell_number(&row, 0), 12.5);
        assert_eq!(cell_number(&row, 1), 0.0);
        assert_eq!(cell_number(&row, 2), 0.0);
        assert_eq!(cell_number(&row, 3), 3.0);
        assert_eq!(cell_number(&row, 99), 0.0);
    }

    #[test]
    fn cell_flag_accepts_bool_and_sheet_string() {
        assert!(cell_flag(&[json!(true)], 0));
        assert!(cell_flag(&[json!("TRUE")], 0));
        assert!(!cell_flag(&[json!("true")], 0));
        assert!(!cell_flag(&[json!(null)], 0));
        assert!(!cell_flag(&[], 0));
    }
}
