use crate::common::*;

use crate::dto::{stats_query::*, stats_response::*};

use crate::enums::stats_endpoint::*;

use crate::model::table::{long_table::*, wide_table::*};

use crate::traits::{repository_traits::stats_repository::*, service_traits::stats_service::*};

#[derive(Debug, new)]
pub struct StatsServiceImpl<R: StatsRepository> {
    stats_repo: R,
}

impl<R: StatsRepository> StatsServiceImpl<R> {
    #[doc = "Sends one request and decodes the `dates` mapping of its response"]
    async fn request_stats(
        &self,
        endpoint: StatsEndpoint,
        recordset: &str,
        min_date: NaiveDate,
        max_date: Option<NaiveDate>,
    ) -> anyhow::Result<StatsResponse> {
        let query: StatsQuery =
            StatsQuery::new(endpoint.date_interval(), recordset, min_date, max_date);

        info!(
            "Fetching {:?} for recordset {} ({} ~ {})",
            endpoint,
            recordset,
            query.min_date(),
            query.max_date().as_deref().unwrap_or("now")
        );

        let body: Value = self.stats_repo.get_stats(endpoint, &query).await?;

        StatsResponse::from_value(body)
            .with_context(|| format!("[StatsServiceImpl->request_stats] {:?}", endpoint))
    }
}

#[async_trait]
impl<R: StatsRepository> StatsService for StatsServiceImpl<R> {
    async fn fetch_monthly_usage(
        &self,
        recordset: &str,
        min_date: NaiveDate,
    ) -> anyhow::Result<DateTable> {
        let response: StatsResponse = self
            .request_stats(StatsEndpoint::UsageByMonth, recordset, min_date, None)
            .await?;

        let table: DateTable = response.to_wide_table(recordset)?;
        info!("Monthly usage: {} months", table.len());

        Ok(table)
    }

    async fn fetch_ingest_stats(
        &self,
        recordset: &str,
        min_date: NaiveDate,
        max_date: NaiveDate,
    ) -> anyhow::Result<LongTable> {
        let response: StatsResponse = self
            .request_stats(StatsEndpoint::IngestByYear, recordset, min_date, Some(max_date))
            .await?;

        let table: LongTable = response.to_long_table(recordset)?;
        info!("Annual ingestion: {} rows", table.len());

        Ok(table)
    }

    async fn fetch_use_stats(
        &self,
        recordset: &str,
        min_date: NaiveDate,
        max_date: NaiveDate,
    ) -> anyhow::Result<LongTable> {
        let response: StatsResponse = self
            .request_stats(StatsEndpoint::UsageByYear, recordset, min_date, Some(max_date))
            .await?;

        let table: LongTable = response.to_long_table(recordset)?;
        info!("Annual usage: {} rows", table.len());

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    /* Answers every request with the same body and remembers what was asked */
    struct FakeStatsRepository {
        body: Result<Value, String>,
        calls: Mutex<Vec<(StatsEndpoint, StatsQuery)>>,
    }

    impl FakeStatsRepository {
        fn answering(body: Value) -> Self {
            Self {
                body: Ok(body),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                body: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl StatsRepository for FakeStatsRepository {
        async fn get_stats(
            &self,
            endpoint: StatsEndpoint,
            query: &StatsQuery,
        ) -> anyhow::Result<Value> {
            self.calls.lock().unwrap().push((endpoint, query.clone()));
            self.body.clone().map_err(|e| anyhow!(e))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn monthly_usage_builds_sorted_wide_table() {
        let repo: FakeStatsRepository = FakeStatsRepository::answering(json!({
            "dates": {
                "2021-01-01": {"rs1": {"search": 10, "download": 2}},
                "2021-02-01": {"rs1": {"search": 7, "download": 1}}
            }
        }));
        let service: StatsServiceImpl<FakeStatsRepository> = StatsServiceImpl::new(repo);

        let table: DateTable = service
            .fetch_monthly_usage("rs1", date(2021, 1, 1))
            .await
            .unwrap();

        assert_eq!(table.keys(), vec![date(2021, 1, 1), date(2021, 2, 1)]);
        assert_eq!(table.column("search"), vec![10.0, 7.0]);
        assert_eq!(table.column("download"), vec![2.0, 1.0]);

        let calls = service.stats_repo.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, StatsEndpoint::UsageByMonth);
        assert_eq!(calls[0].1.min_date(), "2021-01-01");
        assert_eq!(calls[0].1.max_date(), &None);
    }

    #[tokio::test]
    async fn annual_fetches_hit_their_own_endpoints_with_the_range() {
        let body: Value = json!({
            "dates": {"2020-01-01": {"rs1": {"records": 3, "mediarecords": 1}}}
        });
        let service: StatsServiceImpl<FakeStatsRepository> =
            StatsServiceImpl::new(FakeStatsRepository::answering(body));

        let ingest: LongTable = service
            .fetch_ingest_stats("rs1", date(2015, 1, 16), date(2024, 7, 9))
            .await
            .unwrap();
        let usage: LongTable = service
            .fetch_use_stats("rs1", date(2015, 1, 16), date(2024, 7, 9))
            .await
            .unwrap();

        assert_eq!(ingest.len(), 2);
        assert_eq!(usage.len(), 2);

        let calls = service.stats_repo.calls.lock().unwrap();
        assert_eq!(calls[0].0, StatsEndpoint::IngestByYear);
        assert_eq!(calls[1].0, StatsEndpoint::UsageByYear);
        assert_eq!(calls[1].1.max_date(), &Some("2024-07-09".to_string()));
    }

    #[tokio::test]
    async fn repository_errors_propagate_without_retry() {
        let service: StatsServiceImpl<FakeStatsRepository> =
            StatsServiceImpl::new(FakeStatsRepository::failing("status 500"));

        let result: anyhow::Result<LongTable> = service
            .fetch_use_stats("rs1", date(2015, 1, 16), date(2024, 7, 9))
            .await;

        assert!(result.is_err());
        assert_eq!(service.stats_repo.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unexpected_shape_is_an_error() {
        let service: StatsServiceImpl<FakeStatsRepository> =
            StatsServiceImpl::new(FakeStatsRepository::answering(json!({"items": []})));

        assert!(service.fetch_monthly_usage("rs1", date(2021, 1, 1)).await.is_err());
    }
}
