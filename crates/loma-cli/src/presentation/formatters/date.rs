use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date as "Mar 22, 2024". Month names are fixed English
/// abbreviations; no locale or timezone is consulted.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Timestamp reduced to its UTC calendar date
pub fn format_timestamp_date(ts: DateTime<Utc>) -> String {
    format_date(ts.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
        assert_eq!(format_date(date), "Mar 22, 2024");

        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_date(date), "May 1, 2024");
    }

    #[test]
    fn test_timestamp_uses_utc_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 22, 23, 59, 0).unwrap();
        assert_eq!(format_timestamp_date(ts), "Mar 22, 2024");
    }
}
