pub mod chart_catalog;
pub mod chart_data;
pub mod chart_spec;
