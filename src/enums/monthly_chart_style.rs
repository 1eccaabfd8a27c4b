use crate::common::*;

#[doc = "How the monthly usage chart is drawn"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyChartStyle {
    /// Line chart on a linear axis
    #[default]
    Line,
    /// Grouped bars on a log axis
    Bar,
}
