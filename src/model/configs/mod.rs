pub mod api_config;
pub mod chart_config;
pub mod total_config;
