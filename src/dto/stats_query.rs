use crate::common::*;

use crate::enums::date_interval::*;

use crate::utils_modules::time_utils::*;

#[doc = r#"
    Parameters of one summary-statistics request. Serialized either as the JSON
    body (POST) or as the query string (GET), with the API's camelCase names.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    date_interval: DateInterval,
    min_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_date: Option<String>,
    recordset: String,
}

impl StatsQuery {
    pub fn new(
        date_interval: DateInterval,
        recordset: &str,
        min_date: NaiveDate,
        max_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            date_interval,
            min_date: format_query_date(min_date),
            max_date: max_date.map(format_query_date),
            recordset: recordset.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_api_field_names() {
        let query: StatsQuery = StatsQuery::new(
            DateInterval::Year,
            "rs1",
            NaiveDate::from_ymd_opt(2015, 1, 16).unwrap(),
            Some(NaiveDate::from_ymd_opt(2024, 7, 9).unwrap()),
        );

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "dateInterval": "year",
                "minDate": "2015-01-16",
                "maxDate": "2024-07-09",
                "recordset": "rs1"
            })
        );
    }

    #[test]
    fn max_date_is_left_out_when_absent() {
        let query: StatsQuery = StatsQuery::new(
            DateInterval::Month,
            "rs1",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            None,
        );

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({ "dateInterval": "month", "minDate": "2024-01-01", "recordset": "rs1" })
        );
    }
}
