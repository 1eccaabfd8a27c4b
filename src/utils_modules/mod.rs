pub mod axis_utils;
pub mod io_utils;
pub mod logger_utils;
pub mod time_utils;
