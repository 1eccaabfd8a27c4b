pub mod stats_query;
pub mod stats_response;
