use crate::common::*;

use crate::enums::{line_style::*, y_scale::*};

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesSpec {
    pub label: String,
    pub column: String,
    pub style: LineStyle,
}

impl SeriesSpec {
    #[doc = "Series labelled with its own column name"]
    pub fn of(column: &str, style: LineStyle) -> Self {
        SeriesSpec::new(column.to_string(), column.to_string(), style)
    }
}

#[doc = "Caption, axis descriptions, y scale and the ordered series of one chart"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartSpec {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub y_scale: YScale,
    pub series: Vec<SeriesSpec>,
}
