use crate::common::*;

use crate::model::chart::chart_spec::*;
use crate::model::table::wide_table::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesData {
    pub spec: SeriesSpec,
    pub values: Vec<f64>,
}

#[doc = r#"
    Everything the renderer needs: the category/date labels of the x axis and one
    value vector per series, aligned with the labels.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartData {
    pub x_labels: Vec<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    #[doc = r#"
        Lays the columns named by `spec` out in the order `spec` lists them.

        A column the table does not have is zero-filled rather than skipped, so every
        requested series is present in the chart and in its legend.
    "#]
    pub fn from_table<K, F>(table: &WideTable<K>, spec: &ChartSpec, label_of: F) -> Self
    where
        K: Ord + Copy,
        F: Fn(&K) -> String,
    {
        let x_labels: Vec<String> = table.keys().iter().map(label_of).collect();

        let series: Vec<SeriesData> = spec
            .series()
            .iter()
            .map(|series_spec| {
                if !table.has_column(series_spec.column()) {
                    warn!(
                        "[ChartData->from_table] '{}' has no '{}' column. Plotting it as zero.",
                        spec.title(),
                        series_spec.column()
                    );
                }
                SeriesData::new(series_spec.clone(), table.column(series_spec.column()))
            })
            .collect();

        ChartData::new(x_labels, series)
    }

    #[doc = "Every value of every series, for axis range computation"]
    pub fn all_values(&self) -> Vec<f64> {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::{line_style::*, y_scale::*};

    #[test]
    fn missing_series_is_zero_filled_and_order_follows_spec() {
        let table: YearTable = WideTable::from_rows(vec![
            WideRow::new(2020, BTreeMap::from([("search_count".to_string(), 5.0)])),
            WideRow::new(2021, BTreeMap::from([("search_count".to_string(), 6.0)])),
        ]);
        let spec: ChartSpec = ChartSpec::new(
            "t".to_string(),
            "Year".to_string(),
            "Count".to_string(),
            YScale::Log,
            vec![
                SeriesSpec::of("download_count", LineStyle::CircleSolid),
                SeriesSpec::of("search_count", LineStyle::CircleSolid),
            ],
        );

        let data: ChartData = ChartData::from_table(&table, &spec, |year| year.to_string());

        assert_eq!(data.x_labels(), &vec!["2020".to_string(), "2021".to_string()]);
        assert_eq!(data.series()[0].spec().label(), "download_count");
        assert_eq!(data.series()[0].values(), &vec![0.0, 0.0]);
        assert_eq!(data.series()[1].values(), &vec![5.0, 6.0]);
        assert_eq!(data.all_values().len(), 4);
    }
}
