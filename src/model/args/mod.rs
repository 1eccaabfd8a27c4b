pub mod cli_args;
pub mod run_params;
