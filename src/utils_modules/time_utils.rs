use crate::common::*;

/// Date format the statistics API expects in `minDate`/`maxDate`
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

#[doc = "January 1st of the year `date` falls in"]
pub fn year_start(date: NaiveDate) -> NaiveDate {
    date.with_month(1)
        .and_then(|d| d.with_day(1))
        .unwrap_or(date)
}

#[doc = "Formats a date the way the statistics API query parameters expect"]
pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

#[doc = r#"
    Parses a key of the API's `dates` mapping.

    The API keys its buckets with plain ISO dates, but a timestamp form is accepted
    too and truncated to its date: `2021-01-01`, `2021-01-01T00:00:00` and
    `2021-01-01T00:00:00Z` all give 2021-01-01.

    # Errors
    The key matches none of the accepted forms
"#]
pub fn parse_stats_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw: &str = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, QUERY_DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(date_time.date());
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date_time.date_naive());
    }

    Err(anyhow!(
        "[parse_stats_date] '{}' is not an ISO 8601 date",
        raw
    ))
}

#[doc = "x-axis label of a monthly bucket"]
pub fn month_label(date: &NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[doc = "x-axis label of an annual bucket"]
pub fn year_label(date: &NaiveDate) -> String {
    date.format("%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_start_is_january_first() {
        assert_eq!(year_start(date(2024, 7, 9)), date(2024, 1, 1));
        assert_eq!(year_start(date(2024, 2, 29)), date(2024, 1, 1));
    }

    #[test]
    fn accepts_plain_dates_and_timestamps() {
        assert_eq!(parse_stats_date("2021-01-01").unwrap(), date(2021, 1, 1));
        assert_eq!(parse_stats_date("2021-02-01T00:00:00").unwrap(), date(2021, 2, 1));
        assert_eq!(parse_stats_date("2021-03-01T12:30:00Z").unwrap(), date(2021, 3, 1));
    }

    #[test]
    fn rejects_non_dates() {
        assert!(parse_stats_date("January 2021").is_err());
        assert!(parse_stats_date("").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(format_query_date(date(2015, 1, 16)), "2015-01-16");
        assert_eq!(month_label(&date(2021, 2, 1)), "2021-02");
        assert_eq!(year_label(&date(2021, 2, 1)), "2021");
    }
}
