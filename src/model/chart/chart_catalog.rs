use crate::common::*;

use crate::enums::{line_style::*, y_scale::*};

use crate::model::chart::chart_spec::*;

pub const SEARCH_COUNT: &str = "search_count";
pub const DOWNLOAD_COUNT: &str = "download_count";
pub const DOWNLOADED_RECORDS: &str = "download";
pub const VIEWED_RECORDS: &str = "viewed_records";
pub const VIEWED_MEDIA: &str = "viewed_media";
pub const MEDIARECORDS: &str = "mediarecords";

pub const DL_RATIO: &str = "dlRatio";
pub const SD_RATIO: &str = "sdRatio";
pub const VS_RATIO: &str = "vsRatio";

pub const USAGE_MONTHLY_FILE: &str = "usage_monthly.png";
pub const INGEST_METRICS_FILE: &str = "ingest_metrics.png";
pub const SEARCH_DOWNLOAD_FILE: &str = "search_download.png";
pub const USAGE_VS_VIEWED_FILE: &str = "usage_vs_viewed.png";
pub const USAGE_RATIOS_FILE: &str = "usage_ratios.png";
pub const ANNUAL_SUMMARY_FILE: &str = "annual_summary.png";

/// Series order of the search-vs-download charts
pub const SEARCH_DOWNLOAD_METRICS: [&str; 2] = [SEARCH_COUNT, DOWNLOAD_COUNT];

/// Series order of the downloaded-vs-viewed chart
pub const USAGE_VIEWED_METRICS: [&str; 3] = [DOWNLOAD_COUNT, VIEWED_RECORDS, VIEWED_MEDIA];

/// Bar order of the annual summary
pub const ANNUAL_SUMMARY_METRICS: [&str; 4] =
    [SEARCH_COUNT, DOWNLOAD_COUNT, VIEWED_RECORDS, VIEWED_MEDIA];

/// (derived column, numerator, denominator)
pub const USAGE_RATIOS: [(&str, &str, &str); 3] = [
    (DL_RATIO, DOWNLOADED_RECORDS, DOWNLOAD_COUNT),
    (SD_RATIO, DOWNLOADED_RECORDS, SEARCH_COUNT),
    (VS_RATIO, VIEWED_RECORDS, SEARCH_COUNT),
];

fn spec(title: &str, x_desc: &str, y_desc: &str, y_scale: YScale, series: Vec<SeriesSpec>) -> ChartSpec {
    ChartSpec::new(
        title.to_string(),
        x_desc.to_string(),
        y_desc.to_string(),
        y_scale,
        series,
    )
}

pub fn monthly_usage_line_spec() -> ChartSpec {
    spec(
        "Monthly Usage",
        "Date",
        "Count",
        YScale::Linear,
        SEARCH_DOWNLOAD_METRICS
            .iter()
            .map(|metric| SeriesSpec::of(metric, LineStyle::CircleSolid))
            .collect(),
    )
}

pub fn monthly_usage_bar_spec() -> ChartSpec {
    spec(
        "Monthly Usage",
        "Month",
        "Count",
        YScale::Log,
        SEARCH_DOWNLOAD_METRICS
            .iter()
            .map(|metric| SeriesSpec::of(metric, LineStyle::CircleSolid))
            .collect(),
    )
}

#[doc = "One series per ingestion metric, in name order"]
pub fn ingest_metrics_spec(metrics: &BTreeSet<String>) -> ChartSpec {
    spec(
        "Data Ingestion Metrics (annual)",
        "Date",
        "Count",
        YScale::Log,
        metrics
            .iter()
            .map(|metric| SeriesSpec::of(metric, LineStyle::CircleSolid))
            .collect(),
    )
}

pub fn search_download_spec() -> ChartSpec {
    spec(
        "Search Events vs Download Events (annual)",
        "Date",
        "Count",
        YScale::Log,
        SEARCH_DOWNLOAD_METRICS
            .iter()
            .map(|metric| SeriesSpec::of(metric, LineStyle::CircleSolid))
            .collect(),
    )
}

pub fn usage_vs_viewed_spec() -> ChartSpec {
    spec(
        "Downloaded vs Viewed (annual)",
        "Date",
        "Count",
        YScale::Log,
        vec![
            SeriesSpec::of(DOWNLOAD_COUNT, LineStyle::CircleSolid),
            SeriesSpec::of(VIEWED_RECORDS, LineStyle::SquareDashed),
            SeriesSpec::of(VIEWED_MEDIA, LineStyle::CrossDashDot),
        ],
    )
}

pub fn usage_ratios_spec() -> ChartSpec {
    spec(
        "Usage Ratios (annual)",
        "Date",
        "Ratio",
        YScale::Log,
        vec![
            SeriesSpec::of(DL_RATIO, LineStyle::CircleSolid),
            SeriesSpec::of(SD_RATIO, LineStyle::SquareDashed),
            SeriesSpec::of(VS_RATIO, LineStyle::CrossDashDot),
        ],
    )
}

pub fn annual_summary_spec() -> ChartSpec {
    spec(
        "Annual Usage Summary",
        "Year",
        "Count",
        YScale::Log,
        ANNUAL_SUMMARY_METRICS
            .iter()
            .map(|metric| SeriesSpec::of(metric, LineStyle::CircleSolid))
            .collect(),
    )
}
