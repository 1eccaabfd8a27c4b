use crate::common::*;

use crate::enums::monthly_chart_style::*;

use crate::model::{
    args::run_params::*,
    chart::{chart_catalog::*, chart_data::*, chart_spec::*},
    table::{long_table::*, wide_table::*},
};

use crate::traits::service_traits::{chart_service::*, stats_service::*};

use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct MainController<S: StatsService, C: ChartService> {
    stats_service: S,
    chart_service: C,
}

impl<S: StatsService, C: ChartService> MainController<S, C> {
    #[doc = r#"
        하나의 recordset 에 대한 모든 차트를 순서대로 하나씩 생성하는 핵심 함수.

        1. 월별 사용량 (선형 축의 꺾은선 또는 로그 축의 묶음 막대)
        2. 연도별 적재 지표
        3. 연도별 검색 vs 다운로드
        4. 연도별 다운로드 vs 조회
        5. 연도별 사용량 비율
        6. 연도별 사용량 요약 (묶음 막대)

        연도별 사용량 통계는 한 번만 조회하여 3 ~ 6번 차트가 함께 사용한다.
        조회나 렌더링 중 처음 발생한 오류에서 전체 작업을 중단한다.

        # Arguments
        * `params` - 명령행 인자와 설정을 해석한 실행 파라미터

        # Returns
        * `anyhow::Result<Vec<PathBuf>>` - 생성된 이미지 경로 (생성 순서대로)
    "#]
    pub async fn main_task(&self, params: &RunParams) -> anyhow::Result<Vec<PathBuf>> {
        ensure_dir(params.out_dir()).await?;

        let mut written: Vec<PathBuf> = Vec::new();

        /* 1. 월별 사용량 */
        written.push(self.monthly_usage_chart(params).await?);

        /* 2. 연도별 적재 지표 */
        written.push(self.ingest_metrics_chart(params).await?);

        /* 3 ~ 6. 연도별 사용량 기반 차트 */
        let use_stats: LongTable = self
            .stats_service
            .fetch_use_stats(
                params.recordset(),
                *params.overall_min_date(),
                *params.max_date(),
            )
            .await?;

        written.push(self.search_download_chart(params, &use_stats).await?);
        written.push(self.usage_vs_viewed_chart(params, &use_stats).await?);
        written.push(self.usage_ratios_chart(params, &use_stats).await?);
        written.push(self.annual_summary_chart(params, &use_stats).await?);

        Ok(written)
    }

    #[doc = "월별 검색/다운로드 횟수 차트"]
    async fn monthly_usage_chart(&self, params: &RunParams) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = params.out_dir().join(USAGE_MONTHLY_FILE);

        let monthly: DateTable = self
            .stats_service
            .fetch_monthly_usage(params.recordset(), *params.monthly_min_date())
            .await?;

        match params.monthly_chart_style() {
            MonthlyChartStyle::Line => {
                let spec: ChartSpec = monthly_usage_line_spec();
                let data: ChartData = ChartData::from_table(&monthly, &spec, month_label);
                self.chart_service
                    .generate_line_chart(&spec, &data, &output_path)
                    .await?;
            }
            MonthlyChartStyle::Bar => {
                let spec: ChartSpec = monthly_usage_bar_spec();
                let data: ChartData = ChartData::from_table(&monthly, &spec, month_label);
                self.chart_service
                    .generate_grouped_bar_chart(&spec, &data, &output_path)
                    .await?;
            }
        }

        Ok(output_path)
    }

    #[doc = "연도별 적재 지표 차트 (mediarecords 포함 여부는 설정을 따른다)"]
    async fn ingest_metrics_chart(&self, params: &RunParams) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = params.out_dir().join(INGEST_METRICS_FILE);

        let ingest: LongTable = self
            .stats_service
            .fetch_ingest_stats(
                params.recordset(),
                *params.overall_min_date(),
                *params.max_date(),
            )
            .await?;

        let ingest: LongTable = if *params.include_mediarecords() {
            ingest
        } else {
            ingest.exclude_metrics(&[MEDIARECORDS])
        };

        let spec: ChartSpec = ingest_metrics_spec(&ingest.metric_names());
        let data: ChartData = ChartData::from_table(&ingest.pivot(), &spec, year_label);

        self.chart_service
            .generate_line_chart(&spec, &data, &output_path)
            .await?;

        Ok(output_path)
    }

    #[doc = "연도별 검색/다운로드 횟수 차트"]
    async fn search_download_chart(
        &self,
        params: &RunParams,
        use_stats: &LongTable,
    ) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = params.out_dir().join(SEARCH_DOWNLOAD_FILE);

        let table: DateTable = use_stats.filter_metrics(&SEARCH_DOWNLOAD_METRICS).pivot();

        let spec: ChartSpec = search_download_spec();
        let data: ChartData = ChartData::from_table(&table, &spec, year_label);

        self.chart_service
            .generate_line_chart(&spec, &data, &output_path)
            .await?;

        Ok(output_path)
    }

    #[doc = "연도별 다운로드 횟수와 조회 레코드/미디어 수 비교 차트"]
    async fn usage_vs_viewed_chart(
        &self,
        params: &RunParams,
        use_stats: &LongTable,
    ) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = params.out_dir().join(USAGE_VS_VIEWED_FILE);

        let table: DateTable = use_stats.filter_metrics(&USAGE_VIEWED_METRICS).pivot();

        let spec: ChartSpec = usage_vs_viewed_spec();
        let data: ChartData = ChartData::from_table(&table, &spec, year_label);

        self.chart_service
            .generate_line_chart(&spec, &data, &output_path)
            .await?;

        Ok(output_path)
    }

    #[doc = "비율 지표는 분모가 0이면 1로 취급한다"]
    async fn usage_ratios_chart(
        &self,
        params: &RunParams,
        use_stats: &LongTable,
    ) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = params.out_dir().join(USAGE_RATIOS_FILE);

        let table: DateTable = USAGE_RATIOS.iter().fold(
            use_stats.pivot(),
            |table, (name, numerator, denominator)| table.with_ratio(name, numerator, denominator),
        );

        let spec: ChartSpec = usage_ratios_spec();
        let data: ChartData = ChartData::from_table(&table, &spec, year_label);

        self.chart_service
            .generate_line_chart(&spec, &data, &output_path)
            .await?;

        Ok(output_path)
    }

    #[doc = "연도별로 합산한 사용량 지표를 묶음 막대로 그린 요약 차트"]
    async fn annual_summary_chart(
        &self,
        params: &RunParams,
        use_stats: &LongTable,
    ) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = params.out_dir().join(ANNUAL_SUMMARY_FILE);

        let table: YearTable = use_stats
            .filter_metrics(&ANNUAL_SUMMARY_METRICS)
            .aggregate_by_year();

        let spec: ChartSpec = annual_summary_spec();
        let data: ChartData = ChartData::from_table(&table, &spec, |year: &i32| year.to_string());

        self.chart_service
            .generate_grouped_bar_chart(&spec, &data, &output_path)
            .await?;

        Ok(output_path)
    }
}
