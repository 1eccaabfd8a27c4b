use crate::common::*;

use crate::enums::date_interval::*;

use crate::model::configs::api_config::*;

#[doc = "The three summary-statistics endpoints this tool reads from"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEndpoint {
    /// Search/download counts per month (POST, JSON body)
    UsageByMonth,
    /// Record/media ingestion counts per year (GET, query string)
    IngestByYear,
    /// Search/download/view counts per year (GET, query string)
    UsageByYear,
}

impl StatsEndpoint {
    pub fn method(&self) -> Method {
        match self {
            StatsEndpoint::UsageByMonth => Method::POST,
            StatsEndpoint::IngestByYear | StatsEndpoint::UsageByYear => Method::GET,
        }
    }

    pub fn date_interval(&self) -> DateInterval {
        match self {
            StatsEndpoint::UsageByMonth => DateInterval::Month,
            StatsEndpoint::IngestByYear | StatsEndpoint::UsageByYear => DateInterval::Year,
        }
    }

    pub fn path<'a>(&self, api_config: &'a ApiConfig) -> &'a str {
        match self {
            StatsEndpoint::UsageByMonth => api_config.monthly_usage_path(),
            StatsEndpoint::IngestByYear => api_config.ingest_path(),
            StatsEndpoint::UsageByYear => api_config.usage_path(),
        }
    }

    #[doc = "Joins the configured base url and endpoint path without doubling or dropping the slash"]
    pub fn url(&self, api_config: &ApiConfig) -> String {
        let base: &str = api_config.base_url().trim_end_matches('/');
        let path: &str = self.path(api_config);

        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}
