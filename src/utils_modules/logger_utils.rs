use crate::common::*;

/// Directory the rotated log files are written to
const LOG_DIRECTORY: &str = "logs";

#[doc = "Line format shared by the log files and stdout"]
fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        std::thread::current().name().unwrap_or("<unnamed>"),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    - Level comes from `RUST_LOG`, `info` when unset
    - Files go to `logs/`, rotated daily with timestamped names, the last 10 kept
    - Info and above is duplicated to stdout

    The returned handle must stay alive for the whole run, dropping it stops the
    file writer.
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let handle: LoggerHandle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(LOG_DIRECTORY)
                .basename("idigbio_stats_charts"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(log_format)
        .format_for_stdout(log_format)
        .duplicate_to_stdout(Duplicate::Info)
        .start()?;

    Ok(handle)
}
