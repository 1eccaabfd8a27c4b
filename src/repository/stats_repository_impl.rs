use crate::common::*;

use crate::dto::stats_query::*;

use crate::enums::stats_endpoint::*;

use crate::model::configs::api_config::*;

use crate::traits::repository_traits::stats_repository::*;

#[derive(Debug, Clone)]
pub struct StatsRepositoryImpl {
    client: Client,
    api_config: ApiConfig,
}

impl StatsRepositoryImpl {
    pub fn new(api_config: &ApiConfig) -> Result<Self, anyhow::Error> {
        let mut builder: reqwest::ClientBuilder = Client::builder();

        if let Some(timeout_sec) = api_config.timeout_sec() {
            builder = builder.timeout(Duration::from_secs(*timeout_sec));
        }

        let client: Client = builder
            .build()
            .context("[StatsRepositoryImpl->new] Failed to build the HTTP client")?;

        Ok(StatsRepositoryImpl {
            client,
            api_config: api_config.clone(),
        })
    }
}

#[async_trait]
impl StatsRepository for StatsRepositoryImpl {
    #[doc = "Function that EXECUTES summary-statistics requests"]
    async fn get_stats(
        &self,
        endpoint: StatsEndpoint,
        query: &StatsQuery,
    ) -> anyhow::Result<Value> {
        let url: String = endpoint.url(&self.api_config);

        let request: reqwest::RequestBuilder = if endpoint.method() == Method::POST {
            self.client.post(&url).json(query)
        } else {
            self.client.get(&url).query(query)
        };

        let response: reqwest::Response = request.send().await.with_context(|| {
            format!("[StatsRepositoryImpl->get_stats] Request to {} failed", url)
        })?;

        let status: StatusCode = response.status();

        if status.is_success() {
            let response_body: Value = response.json::<Value>().await.with_context(|| {
                format!(
                    "[StatsRepositoryImpl->get_stats] Response of {} is not valid JSON",
                    url
                )
            })?;
            Ok(response_body)
        } else {
            let error_body: String = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "[StatsRepositoryImpl->get_stats] {} responded with status {}: {:?}",
                url,
                status,
                error_body
            ))
        }
    }
}
