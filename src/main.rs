/*
Author      : Seunghwan Shin
Create date : 2026-10-17
Description : iDigBio summary-statistics API 에서 특정 recordset 의 사용량/적재 통계를 조회하여
              월별/연도별 PNG 차트를 생성한다.

History     : 2026-10-17 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod enums;

mod dto;

mod model;
use model::{
    args::{cli_args::*, run_params::*},
    configs::total_config::*,
};

mod traits;

mod repository;
use repository::stats_repository_impl::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, stats_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger().unwrap_or_else(|e| {
        eprintln!("[main] Failed to initialize the logger: {:?}", e);
        std::process::exit(1)
    });

    let cli_args: CliArgs = CliArgs::parse();

    /* 오늘 날짜는 여기서 한 번만 읽어 인자 해석에 주입한다 */
    let today: NaiveDate = Local::now().date_naive();

    let params: RunParams = cli_args
        .resolve(today, get_chart_config_info())
        .unwrap_or_else(|e| {
            error!("{:?}", e);
            std::process::exit(2)
        });

    info!("Chart generation start! recordset: {}", params.recordset());

    /* 의존 주입 */
    let stats_repo: StatsRepositoryImpl = StatsRepositoryImpl::new(get_api_config_info())
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing stats_repo.";
            error!("{} {:?}", err_msg, e);
            std::process::exit(1)
        });

    let stats_service: StatsServiceImpl<StatsRepositoryImpl> = StatsServiceImpl::new(stats_repo);
    let chart_config = get_chart_config_info();
    let chart_service: ChartServiceImpl =
        ChartServiceImpl::new(*chart_config.width(), *chart_config.height());

    let main_controller: MainController<StatsServiceImpl<StatsRepositoryImpl>, ChartServiceImpl> =
        MainController::new(stats_service, chart_service);

    match main_controller.main_task(&params).await {
        Ok(written) => {
            info!("{} charts written", written.len());
            println!("All charts generated in {}", params.out_dir().display());
        }
        Err(e) => {
            error!("{:?}", e);
            std::process::exit(1)
        }
    }
}
