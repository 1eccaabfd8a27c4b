use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub monthly_usage_path: String,
    pub ingest_path: String,
    pub usage_path: String,
    pub timeout_sec: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://search.idigbio.org".to_string(),
            monthly_usage_path: "/v2/summary/stats/search".to_string(),
            ingest_path: "/v2/summary/stats/api/".to_string(),
            usage_path: "/v2/summary/stats/search/".to_string(),
            timeout_sec: None,
        }
    }
}
