use crate::common::*;

use crate::enums::monthly_chart_style::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub monthly_chart_style: MonthlyChartStyle,
    pub include_mediarecords: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            monthly_chart_style: MonthlyChartStyle::Line,
            include_mediarecords: true,
        }
    }
}
