use crate::common::*;

use crate::dto::stats_query::*;

use crate::enums::stats_endpoint::*;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    #[doc = r#"
        Sends exactly one request to `endpoint` and returns the decoded JSON body.
        A non-success status is returned as an error, never retried.
    "#]
    async fn get_stats(&self, endpoint: StatsEndpoint, query: &StatsQuery)
        -> anyhow::Result<Value>;
}
