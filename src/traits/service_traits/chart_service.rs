use crate::common::*;

use crate::model::chart::{chart_data::*, chart_spec::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Draw a line chart and save it as a PNG, overwriting any existing file
        # Arguments
        * `spec` - Caption, axis descriptions, y scale and series styles
        * `data` - X labels and one value vector per series
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_line_chart(
        &self,
        spec: &ChartSpec,
        data: &ChartData,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Draw a grouped bar chart (one group per x label, one bar per series) and save it as a PNG
        # Arguments
        * `spec` - Caption, axis descriptions, y scale and series order
        * `data` - Category labels and one value vector per series
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_grouped_bar_chart(
        &self,
        spec: &ChartSpec,
        data: &ChartData,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
