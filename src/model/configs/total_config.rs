use crate::common::*;

use crate::model::configs::{api_config::*, chart_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_chart_config);

#[doc = "Function to initialize the API/chart configuration instance"]
pub fn initialize_chart_config() -> TotalConfig {
    info!("initialize_chart_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Default, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub api: ApiConfig,
    pub chart: ChartConfig,
}

#[doc = "iDigBio statistics API settings"]
pub fn get_api_config_info() -> &'static ApiConfig {
    &TOTAL_CONFIG.api
}

#[doc = "Chart rendering settings"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    fn new() -> Self {
        let config_path: &str = match CHART_CONFIG_PATH.as_deref() {
            Some(path) => path,
            None => {
                info!("CHART_CONFIG_PATH is not set. Using the default configuration.");
                return TotalConfig::default();
            }
        };

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str =
                    "Failed to convert the data from CHART_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::monthly_chart_style::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("chart_config.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "http://localhost:9200"
timeout_sec = 15

[chart]
monthly_chart_style = "bar"
include_mediarecords = false
"#,
        )
        .unwrap();

        let config: TotalConfig = read_toml_from_file(path.to_str().unwrap()).unwrap();

        assert_eq!(config.api().base_url(), "http://localhost:9200");
        assert_eq!(*config.api().timeout_sec(), Some(15));
        assert_eq!(config.api().ingest_path(), "/v2/summary/stats/api/");
        assert_eq!(*config.chart().monthly_chart_style(), MonthlyChartStyle::Bar);
        assert!(!config.chart().include_mediarecords());
        assert_eq!(*config.chart().width(), 1000);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config: TotalConfig = read_toml_from_file(path.to_str().unwrap()).unwrap();

        assert_eq!(config.api().base_url(), "https://search.idigbio.org");
        assert!(config.chart().include_mediarecords());
        assert_eq!(*config.chart().monthly_chart_style(), MonthlyChartStyle::Line);
    }

    #[test]
    fn unknown_chart_style_is_rejected() {
        let dir: tempfile::TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("bad.toml");
        fs::write(&path, "[chart]\nmonthly_chart_style = \"pie\"\n").unwrap();

        assert!(read_toml_from_file::<TotalConfig>(path.to_str().unwrap()).is_err());
    }
}
