use crate::common::*;

use crate::model::table::wide_table::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct LongRow {
    pub date: NaiveDate,
    pub metric: String,
    pub count: i64,
}

#[doc = r#"
    Tabular data with one row per (date, metric) pair and a single count.

    Pairs may repeat as they come from the API; every reshaping operation sums
    repeated pairs, so each pair is counted exactly once after a pivot.
    Rows are kept ordered by (date, metric).
"#]
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
#[getset(get = "pub")]
pub struct LongTable {
    rows: Vec<LongRow>,
}

impl LongTable {
    pub fn from_rows(mut rows: Vec<LongRow>) -> Self {
        rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.metric.cmp(&b.metric)));
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn metric_names(&self) -> BTreeSet<String> {
        self.rows.iter().map(|row| row.metric.clone()).collect()
    }

    #[doc = "Sum of the counts of every row matching `(date, metric)`"]
    pub fn total(&self, date: NaiveDate, metric: &str) -> i64 {
        self.rows
            .iter()
            .filter(|row| row.date == date && row.metric == metric)
            .map(|row| row.count)
            .sum()
    }

    #[doc = "Keeps only the rows whose metric is one of `metrics`"]
    pub fn filter_metrics(&self, metrics: &[&str]) -> LongTable {
        let rows: Vec<LongRow> = self
            .rows
            .iter()
            .filter(|row| metrics.contains(&row.metric.as_str()))
            .cloned()
            .collect();

        Self { rows }
    }

    #[doc = "Drops the rows whose metric is one of `metrics`"]
    pub fn exclude_metrics(&self, metrics: &[&str]) -> LongTable {
        let rows: Vec<LongRow> = self
            .rows
            .iter()
            .filter(|row| !metrics.contains(&row.metric.as_str()))
            .cloned()
            .collect();

        Self { rows }
    }

    #[doc = r#"
        Pivots into a wide table indexed by date with one column per metric.

        Repeated `(date, metric)` pairs are summed. A metric that has no row for a
        given date reads as zero in that date's row.
    "#]
    pub fn pivot(&self) -> DateTable {
        let rows: Vec<WideRow<NaiveDate>> = self
            .rows
            .iter()
            .map(|row| {
                WideRow::new(
                    row.date,
                    BTreeMap::from([(row.metric.clone(), row.count as f64)]),
                )
            })
            .collect();

        WideTable::from_rows(rows)
    }

    #[doc = r#"
        Groups rows by the year of their date and by metric, summing the counts,
        then pivots into one column per metric indexed by year.
    "#]
    pub fn aggregate_by_year(&self) -> YearTable {
        let rows: Vec<WideRow<i32>> = self
            .rows
            .iter()
            .map(|row| {
                WideRow::new(
                    row.date.year(),
                    BTreeMap::from([(row.metric.clone(), row.count as f64)]),
                )
            })
            .collect();

        WideTable::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn long(rows: &[(NaiveDate, &str, i64)]) -> LongTable {
        LongTable::from_rows(
            rows.iter()
                .map(|(d, metric, count)| LongRow::new(*d, metric.to_string(), *count))
                .collect(),
        )
    }

    #[test]
    fn pivot_zero_fills_metrics_absent_for_a_date() {
        let table: LongTable = long(&[
            (date(2020, 1, 1), "search_count", 100),
            (date(2020, 1, 1), "download_count", 3),
            (date(2021, 1, 1), "search_count", 80),
        ]);

        let wide: DateTable = table.pivot();

        assert_eq!(wide.keys(), vec![date(2020, 1, 1), date(2021, 1, 1)]);
        assert_eq!(wide.column("search_count"), vec![100.0, 80.0]);
        assert_eq!(wide.column("download_count"), vec![3.0, 0.0]);
    }

    #[test]
    fn pivot_then_unpivot_preserves_totals_per_pair() {
        let table: LongTable = long(&[
            (date(2019, 1, 1), "records", 10),
            (date(2019, 1, 1), "records", 15),
            (date(2019, 1, 1), "mediarecords", 2),
            (date(2020, 1, 1), "records", 30),
            (date(2021, 1, 1), "mediarecords", 7),
        ]);

        let round_trip: LongTable = table.pivot().to_long();

        for row in table.rows() {
            assert_eq!(
                round_trip.total(row.date, &row.metric),
                table.total(row.date, &row.metric),
                "total mismatch for {} {}",
                row.date,
                row.metric
            );
        }
        assert_eq!(round_trip.len(), 4);
    }

    #[test]
    fn annual_aggregation_sums_each_contribution_once() {
        let table: LongTable = long(&[
            (date(2021, 3, 1), "search_count", 3),
            (date(2021, 9, 1), "search_count", 5),
            (date(2022, 1, 1), "search_count", 1),
        ]);

        let annual: YearTable = table.aggregate_by_year();

        assert_eq!(annual.keys(), vec![2021, 2022]);
        assert_eq!(annual.column("search_count"), vec![8.0, 1.0]);
    }

    #[test]
    fn filter_and_exclude_metrics() {
        let table: LongTable = long(&[
            (date(2020, 1, 1), "search_count", 1),
            (date(2020, 1, 1), "download_count", 2),
            (date(2020, 1, 1), "viewed_media", 3),
        ]);

        let kept: LongTable = table.filter_metrics(&["search_count", "download_count"]);
        assert_eq!(
            kept.metric_names().into_iter().collect::<Vec<String>>(),
            vec!["download_count".to_string(), "search_count".to_string()]
        );

        let dropped: LongTable = table.exclude_metrics(&["viewed_media"]);
        assert_eq!(dropped.len(), 2);
        assert!(!dropped.metric_names().contains("viewed_media"));
    }

    #[test]
    fn rows_are_ordered_by_date_then_metric() {
        let table: LongTable = long(&[
            (date(2021, 1, 1), "b", 1),
            (date(2020, 1, 1), "z", 1),
            (date(2021, 1, 1), "a", 1),
        ]);

        let order: Vec<(NaiveDate, String)> = table
            .rows()
            .iter()
            .map(|row| (row.date, row.metric.clone()))
            .collect();

        assert_eq!(
            order,
            vec![
                (date(2020, 1, 1), "z".to_string()),
                (date(2021, 1, 1), "a".to_string()),
                (date(2021, 1, 1), "b".to_string()),
            ]
        );
    }
}
