use crate::common::*;

use crate::model::table::{long_table::*, wide_table::*};

#[async_trait]
pub trait StatsService: Send + Sync {
    #[doc = "Month-by-month search/download counts as a date-indexed wide table"]
    async fn fetch_monthly_usage(
        &self,
        recordset: &str,
        min_date: NaiveDate,
    ) -> anyhow::Result<DateTable>;

    #[doc = "Annual ingestion counts (records, mediarecords, ...) as a long table"]
    async fn fetch_ingest_stats(
        &self,
        recordset: &str,
        min_date: NaiveDate,
        max_date: NaiveDate,
    ) -> anyhow::Result<LongTable>;

    #[doc = "Annual usage counts (search, download, views, ...) as a long table"]
    async fn fetch_use_stats(
        &self,
        recordset: &str,
        min_date: NaiveDate,
        max_date: NaiveDate,
    ) -> anyhow::Result<LongTable>;
}
