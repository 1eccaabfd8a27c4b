use crate::common::*;

use crate::model::table::{long_table::*, wide_table::*};

use crate::utils_modules::time_utils::*;

/// metric name -> count
pub type MetricCounts = BTreeMap<String, i64>;

#[doc = r#"
    Body of a summary-statistics response:
    `{"dates": {<ISO date>: {<recordset uuid>: {<metric>: <count>, ...}}}}`
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct StatsResponse {
    dates: BTreeMap<String, BTreeMap<String, MetricCounts>>,
}

impl StatsResponse {
    #[doc = r#"
        Decodes a raw response body.

        # Errors
        The body is not an object with a `dates` mapping of the expected shape
    "#]
    pub fn from_value(body: Value) -> anyhow::Result<Self> {
        serde_json::from_value(body).map_err(|e| {
            anyhow!(
                "[StatsResponse->from_value] Unexpected statistics response shape: {}",
                e
            )
        })
    }

    #[doc = r#"
        One row per date with the recordset's metrics as columns, sorted by date.

        A date that carries no entry for `recordset` still gets a row, with every
        metric reading as zero.
    "#]
    pub fn to_wide_table(&self, recordset: &str) -> anyhow::Result<DateTable> {
        let mut rows: Vec<WideRow<NaiveDate>> = Vec::with_capacity(self.dates.len());

        for (raw_date, per_recordset) in &self.dates {
            let date: NaiveDate = parse_stats_date(raw_date)?;

            let metrics: BTreeMap<String, f64> = per_recordset
                .get(recordset)
                .map(|counts| {
                    counts
                        .iter()
                        .map(|(metric, count)| (metric.clone(), *count as f64))
                        .collect()
                })
                .unwrap_or_default();

            rows.push(WideRow::new(date, metrics));
        }

        Ok(WideTable::from_rows(rows))
    }

    #[doc = r#"
        One row per (date, metric) of the recordset. Dates without an entry for
        `recordset` contribute no rows.
    "#]
    pub fn to_long_table(&self, recordset: &str) -> anyhow::Result<LongTable> {
        let mut rows: Vec<LongRow> = Vec::new();

        for (raw_date, per_recordset) in &self.dates {
            let date: NaiveDate = parse_stats_date(raw_date)?;

            let Some(counts) = per_recordset.get(recordset) else {
                continue;
            };

            rows.extend(
                counts
                    .iter()
                    .map(|(metric, count)| LongRow::new(date, metric.clone(), *count)),
            );
        }

        Ok(LongTable::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> StatsResponse {
        StatsResponse::from_value(json!({
            "dates": {
                "2021-02-01": {"rs1": {"search": 7, "download": 1}},
                "2021-01-01": {"rs1": {"search": 10, "download": 2}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn monthly_wide_table_end_to_end() {
        let table: DateTable = sample().to_wide_table("rs1").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.keys(), vec![date(2021, 1, 1), date(2021, 2, 1)]);
        assert_eq!(table.column("search"), vec![10.0, 7.0]);
        assert_eq!(table.column("download"), vec![2.0, 1.0]);
    }

    #[test]
    fn one_row_per_distinct_date_in_ascending_order() {
        let response: StatsResponse = StatsResponse::from_value(json!({
            "dates": {
                "2020-12-01": {"rs1": {"search": 1}},
                "2019-05-01": {"rs1": {"search": 2}},
                "2020-01-01": {"other": {"search": 3}},
                "2021-07-01": {"rs1": {}}
            }
        }))
        .unwrap();

        let table: DateTable = response.to_wide_table("rs1").unwrap();

        assert_eq!(
            table.keys(),
            vec![date(2019, 5, 1), date(2020, 1, 1), date(2020, 12, 1), date(2021, 7, 1)]
        );
    }

    #[test]
    fn missing_metric_or_recordset_reads_as_zero_in_wide_table() {
        let response: StatsResponse = StatsResponse::from_value(json!({
            "dates": {
                "2021-01-01": {"rs1": {"search": 4, "download": 2}},
                "2021-02-01": {"rs1": {"search": 3}},
                "2021-03-01": {"rs2": {"search": 9, "download": 9}}
            }
        }))
        .unwrap();

        let table: DateTable = response.to_wide_table("rs1").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.column("download"), vec![2.0, 0.0, 0.0]);
        assert_eq!(table.column("search"), vec![4.0, 3.0, 0.0]);
    }

    #[test]
    fn long_table_skips_dates_without_the_recordset() {
        let response: StatsResponse = StatsResponse::from_value(json!({
            "dates": {
                "2020-01-01": {"rs1": {"records": 100, "mediarecords": 20}},
                "2021-01-01": {"rs2": {"records": 5}},
                "2022-01-01": {"rs1": {"records": 130}}
            }
        }))
        .unwrap();

        let table: LongTable = response.to_long_table("rs1").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.total(date(2020, 1, 1), "mediarecords"), 20);
        assert_eq!(table.total(date(2022, 1, 1), "records"), 130);
        assert_eq!(table.total(date(2021, 1, 1), "records"), 0);
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(StatsResponse::from_value(json!({"no_dates": {}})).is_err());
        assert!(StatsResponse::from_value(json!({"dates": {"2021-01-01": {"rs1": 5}}})).is_err());
        assert!(
            StatsResponse::from_value(json!({"dates": {"2021-01-01": {"rs1": {"search": "x"}}}}))
                .is_err()
        );
    }

    #[test]
    fn unparseable_date_key_is_an_error() {
        let response: StatsResponse =
            StatsResponse::from_value(json!({"dates": {"soon": {"rs1": {"search": 1}}}})).unwrap();

        assert!(response.to_wide_table("rs1").is_err());
        assert!(response.to_long_table("rs1").is_err());
    }
}
