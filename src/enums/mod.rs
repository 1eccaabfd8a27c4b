pub mod date_interval;
pub mod line_style;
pub mod monthly_chart_style;
pub mod stats_endpoint;
pub mod y_scale;
