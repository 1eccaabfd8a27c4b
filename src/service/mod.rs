pub mod chart_service_impl;
pub mod stats_service_impl;
