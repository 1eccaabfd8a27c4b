use crate::common::*;

use crate::enums::monthly_chart_style::*;

use crate::model::args::run_params::*;
use crate::model::configs::chart_config::*;

use crate::utils_modules::time_utils::*;

/// Earliest date the annual statistics are requested from unless told otherwise
pub const DEFAULT_OVERALL_MIN_DATE: &str = "2015-01-16";

/// Output directory used when `--out-dir` is not given
pub const DEFAULT_OUT_DIR: &str = "public/charts";

#[derive(Debug, Parser)]
#[command(name = "idigbio_stats_charts")]
#[command(about = "Fetch iDigBio stats and generate charts", long_about = None)]
pub struct CliArgs {
    /// UUID of the iDigBio recordset
    #[arg(long)]
    pub recordset: String,

    /// Earliest date (YYYY-MM-DD) to fetch for MONTHLY stats [default: Jan 1 of this year]
    #[arg(long, value_parser = parse_cli_date)]
    pub monthly_min_date: Option<NaiveDate>,

    /// Earliest date (YYYY-MM-DD) to fetch for all ANNUAL stats
    #[arg(long, value_parser = parse_cli_date, default_value = DEFAULT_OVERALL_MIN_DATE)]
    pub overall_min_date: NaiveDate,

    /// Latest date (YYYY-MM-DD) for ANNUAL stats [default: today]
    #[arg(long, value_parser = parse_cli_date)]
    pub max_date: Option<NaiveDate>,

    /// Directory to save generated charts
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Draw the monthly usage chart as lines or grouped bars [default: from config]
    #[arg(long, value_enum)]
    pub monthly_chart_style: Option<MonthlyChartStyle>,

    /// Leave mediarecords out of the annual ingestion chart
    #[arg(long)]
    pub exclude_mediarecords: bool,
}

fn parse_cli_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input, QUERY_DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", input, e))
}

impl CliArgs {
    #[doc = r#"
        Fills in every default that depends on the current date and merges the
        command-line overrides into the configured chart options.

        `today` is passed in by the caller instead of being read from the clock here,
        so the resolution is deterministic under test.

        # Arguments
        * `today` - The current local date
        * `chart_config` - Chart settings from the configuration file

        # Returns
        * `anyhow::Result<RunParams>` - Fails when the annual range is inverted or the recordset is blank
    "#]
    pub fn resolve(self, today: NaiveDate, chart_config: &ChartConfig) -> anyhow::Result<RunParams> {
        let recordset: String = self.recordset.trim().to_string();

        if recordset.is_empty() {
            return Err(anyhow!("[CliArgs->resolve] --recordset must not be empty"));
        }

        let monthly_min_date: NaiveDate = self
            .monthly_min_date
            .unwrap_or_else(|| year_start(today));
        let max_date: NaiveDate = self.max_date.unwrap_or(today);

        if max_date < self.overall_min_date {
            return Err(anyhow!(
                "[CliArgs->resolve] --max-date {} is earlier than --overall-min-date {}",
                max_date,
                self.overall_min_date
            ));
        }

        let monthly_chart_style: MonthlyChartStyle = self
            .monthly_chart_style
            .unwrap_or(*chart_config.monthly_chart_style());
        let include_mediarecords: bool =
            *chart_config.include_mediarecords() && !self.exclude_mediarecords;

        Ok(RunParams::new(
            recordset,
            monthly_min_date,
            self.overall_min_date,
            max_date,
            self.out_dir,
            monthly_chart_style,
            include_mediarecords,
        ))
    }
}
