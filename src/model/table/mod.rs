pub mod long_table;
pub mod wide_table;
