//! SQL literal formatting helpers.

use chrono::NaiveDateTime;

/// Quote a string literal, doubling embedded single quotes.
pub fn quote_str(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Render a float so it always reads as a numeric literal with a decimal
/// point (`0.0`, not `0`). Display already picks the shortest round-trip
/// form for fractional values.
pub fn float_literal(v: f64) -> String {
    let s = format!("{}", v);
    if s.contains('.') || s.contains('e') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// `NULL` or the integer value.
pub fn nullable_int<T: std::fmt::Display>(v: Option<T>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => "NULL".to_string(),
    }
}

/// `NULL` or a quoted `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn nullable_timestamp(v: Option<NaiveDateTime>) -> String {
    match v {
        Some(ts) => format!("'{}'", timestamp(ts)),
        None => "NULL".to_string(),
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quote_str("O'Brien县"), "'O''Brien县'");
        assert_eq!(quote_str("plain"), "'plain'");
    }

    #[test]
    fn float_literal_keeps_a_decimal_point() {
        assert_eq!(float_literal(0.035), "0.035");
        assert_eq!(float_literal(-0.03), "-0.03");
        assert_eq!(float_literal(0.0), "0.0");
        assert_eq!(float_literal(10000.0), "10000.0");
    }

    #[test]
    fn nullable_renderers() {
        assert_eq!(nullable_int(Some(2019)), "2019");
        assert_eq!(nullable_int::<u16>(None), "NULL");

        let ts = NaiveDate::from_ymd_opt(2024, 9, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid timestamp");
        assert_eq!(nullable_timestamp(Some(ts)), "'2024-09-01 09:00:00'");
        assert_eq!(nullable_timestamp(None), "NULL");
    }
}
