use crate::common::*;

use crate::enums::monthly_chart_style::*;

#[doc = "Fully resolved parameters of one chart-generation run"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct RunParams {
    pub recordset: String,
    pub monthly_min_date: NaiveDate,
    pub overall_min_date: NaiveDate,
    pub max_date: NaiveDate,
    pub out_dir: PathBuf,
    pub monthly_chart_style: MonthlyChartStyle,
    pub include_mediarecords: bool,
}
