pub use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
pub use clap::{Parser, ValueEnum};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming, Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{Client, Method, StatusCode};
