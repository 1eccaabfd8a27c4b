use crate::common::*;

use crate::model::table::long_table::*;

#[doc = r#"
    One row of a wide table: a key (date or year) and the metric values observed for it.
    Metrics that were never observed are simply absent from `metrics`.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct WideRow<K> {
    pub key: K,
    pub metrics: BTreeMap<String, f64>,
}

#[doc = r#"
    Tabular data with one row per key and one column per metric.

    Keys are unique and kept in ascending order. Reading a metric that a row does
    not carry yields `0.0`, so every column is always complete.
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct WideTable<K> {
    rows: Vec<WideRow<K>>,
}

/// Monthly or per-date table
pub type DateTable = WideTable<NaiveDate>;

/// Table indexed by calendar year
pub type YearTable = WideTable<i32>;

#[doc = "Ratio with the zero-denominator clamp: a denominator of 0 is treated as 1"]
pub fn clamped_ratio(numerator: f64, denominator: f64) -> f64 {
    let denominator: f64 = if denominator == 0.0 { 1.0 } else { denominator };
    numerator / denominator
}

impl<K: Ord + Copy> WideTable<K> {
    #[doc = r#"
        Builds a table from rows in any order.

        Rows are sorted ascending by key. Rows sharing a key are merged into one,
        summing the values of metrics they have in common.
    "#]
    pub fn from_rows(rows: Vec<WideRow<K>>) -> Self {
        let mut merged: BTreeMap<K, BTreeMap<String, f64>> = BTreeMap::new();

        for row in rows {
            let target: &mut BTreeMap<String, f64> = merged.entry(row.key).or_default();
            for (metric, value) in row.metrics {
                *target.entry(metric).or_insert(0.0) += value;
            }
        }

        let rows: Vec<WideRow<K>> = merged
            .into_iter()
            .map(|(key, metrics)| WideRow::new(key, metrics))
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> Vec<K> {
        self.rows.iter().map(|row| row.key).collect()
    }

    #[doc = "Union of the metric names of every row, in name order"]
    pub fn metric_names(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .flat_map(|row| row.metrics.keys().cloned())
            .collect()
    }

    pub fn has_column(&self, metric: &str) -> bool {
        self.rows.iter().any(|row| row.metrics.contains_key(metric))
    }

    #[doc = "Values of `metric` for every row, zero where a row lacks it"]
    pub fn column(&self, metric: &str) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.metrics.get(metric).copied().unwrap_or(0.0))
            .collect()
    }

    #[doc = r#"
        Adds the derived column `name = numerator / denominator` to every row.

        Missing operands read as zero and a zero denominator is clamped to 1, so a row
        whose denominator is zero gets the numerator itself as its ratio.
    "#]
    pub fn with_ratio(mut self, name: &str, numerator: &str, denominator: &str) -> Self {
        for row in self.rows.iter_mut() {
            let num: f64 = row.metrics.get(numerator).copied().unwrap_or(0.0);
            let den: f64 = row.metrics.get(denominator).copied().unwrap_or(0.0);
            row.metrics.insert(name.to_string(), clamped_ratio(num, den));
        }

        self
    }
}

impl DateTable {
    #[doc = "Unpivots into one long row per stored cell, values rounded back to counts"]
    pub fn to_long(&self) -> LongTable {
        let rows: Vec<LongRow> = self
            .rows
            .iter()
            .flat_map(|row| {
                row.metrics.iter().map(move |(metric, value)| {
                    LongRow::new(row.key, metric.to_string(), value.round() as i64)
                })
            })
            .collect();

        LongTable::from_rows(rows)
    }
}
