use crate::common::*;

use crate::enums::{line_style::*, y_scale::*};

use crate::model::chart::{chart_data::*, chart_spec::*};

use crate::traits::service_traits::chart_service::*;

use crate::utils_modules::axis_utils::*;

use plotters::coord::{ranged1d::Ranged, types::RangedCoordusize};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

const TEXT_COLOR: RGBColor = RGBColor(40, 40, 40);
const GRID_COLOR: RGBColor = RGBColor(225, 225, 225);

/// Share of a category slot covered by its group of bars
const BAR_GROUP_WIDTH: f64 = 0.8;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    width: u32,
    height: u32,
}

fn series_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

#[doc = r#"
    Splits a series into runs of consecutive drawable points.

    On a log axis zero and negative values have no position, so they are dropped and
    the line is broken around them instead of being joined across the gap.
"#]
pub fn drawable_segments(values: &[f64], mask_non_positive: bool) -> Vec<Vec<(usize, f64)>> {
    let mut segments: Vec<Vec<(usize, f64)>> = Vec::new();
    let mut current: Vec<(usize, f64)> = Vec::new();

    for (idx, value) in values.iter().copied().enumerate() {
        if !value.is_finite() || (mask_non_positive && value <= 0.0) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push((idx, value));
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[doc = "Category name under a bar group; ticks between two categories stay blank"]
pub fn category_label(x_labels: &[String], x: f64) -> String {
    let idx: f64 = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return String::new();
    }
    x_labels.get(idx as usize).cloned().unwrap_or_default()
}

#[doc = "x-range bounds `[left, right)` of bar `series_idx` out of `series_cnt` in category `category_idx`"]
pub fn bar_bounds(category_idx: usize, series_idx: usize, series_cnt: usize) -> (f64, f64) {
    let bar_width: f64 = BAR_GROUP_WIDTH / series_cnt.max(1) as f64;
    let left: f64 = category_idx as f64 - BAR_GROUP_WIDTH / 2.0 + series_idx as f64 * bar_width;
    (left, left + bar_width)
}

fn draw_lines<'a, Y>(
    chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordusize, Y>>,
    data: &ChartData,
    mask_non_positive: bool,
) -> anyhow::Result<()>
where
    Y: Ranged<ValueType = f64>,
{
    for (idx, series) in data.series().iter().enumerate() {
        let color: RGBColor = series_color(idx);
        let style: LineStyle = *series.spec().style();

        /* legend entry, drawn even when nothing of the series is visible */
        chart
            .draw_series(std::iter::empty::<PathElement<(usize, f64)>>())?
            .label(series.spec().label().as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        for segment in drawable_segments(series.values(), mask_non_positive) {
            match style {
                LineStyle::CircleSolid => {
                    chart.draw_series(LineSeries::new(segment.clone(), color.stroke_width(2)))?;
                    chart.draw_series(PointSeries::of_element(
                        segment,
                        4,
                        color.filled(),
                        &|c: (usize, f64), s: i32, st: ShapeStyle| {
                            EmptyElement::at(c) + Circle::new((0, 0), s, st)
                        },
                    ))?;
                }
                LineStyle::SquareDashed => {
                    chart.draw_series(DashedLineSeries::new(
                        segment.clone(),
                        10,
                        6,
                        color.stroke_width(2),
                    ))?;
                    chart.draw_series(PointSeries::of_element(
                        segment,
                        4,
                        color.filled(),
                        &|c: (usize, f64), s: i32, st: ShapeStyle| {
                            EmptyElement::at(c) + Rectangle::new([(-s, -s), (s, s)], st)
                        },
                    ))?;
                }
                LineStyle::CrossDashDot => {
                    /* plotters has no dash-dot stroke, short dashes stand in for it */
                    chart.draw_series(DashedLineSeries::new(
                        segment.clone(),
                        4,
                        4,
                        color.stroke_width(2),
                    ))?;
                    chart.draw_series(PointSeries::of_element(
                        segment,
                        5,
                        color.stroke_width(2),
                        &|c: (usize, f64), s: i32, st: ShapeStyle| {
                            EmptyElement::at(c) + Cross::new((0, 0), s, st)
                        },
                    ))?;
                }
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 16).into_font().color(&TEXT_COLOR))
        .draw()?;

    Ok(())
}

fn draw_bars<'a, X, Y>(
    chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<X, Y>>,
    data: &ChartData,
    base: f64,
) -> anyhow::Result<()>
where
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    let series_cnt: usize = data.series().len();

    for (series_idx, series) in data.series().iter().enumerate() {
        let color: RGBColor = series_color(series_idx);

        let bars: Vec<Rectangle<(f64, f64)>> = series
            .values()
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, value)| value.is_finite() && *value > 0.0)
            .map(|(category_idx, value)| {
                let (left, right) = bar_bounds(category_idx, series_idx, series_cnt);
                Rectangle::new([(left, base), (right, value)], color.filled())
            })
            .collect();

        chart
            .draw_series(bars)?
            .label(series.spec().label().as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 16).into_font().color(&TEXT_COLOR))
        .draw()?;

    Ok(())
}

impl ChartServiceImpl {
    fn render_line_chart(
        &self,
        spec: &ChartSpec,
        data: &ChartData,
        output_path_str: &str,
    ) -> anyhow::Result<()> {
        let root = BitMapBackend::new(output_path_str, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let x_labels: &Vec<String> = data.x_labels();
        let x_max: usize = x_labels.len().max(2) - 1;
        let x_formatter = |x: &usize| x_labels.get(*x).cloned().unwrap_or_default();

        let mut builder = ChartBuilder::on(&root);
        builder
            .caption(spec.title(), ("sans-serif", 28).into_font().color(&TEXT_COLOR))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90);

        match spec.y_scale() {
            YScale::Linear => {
                let (y_min, y_max) = linear_y_range(&data.all_values());
                let mut chart = builder.build_cartesian_2d(0..x_max, y_min..y_max)?;

                chart
                    .configure_mesh()
                    .x_desc(spec.x_desc())
                    .y_desc(spec.y_desc())
                    .x_labels(x_labels.len().clamp(2, 12))
                    .y_labels(10)
                    .light_line_style(GRID_COLOR.stroke_width(1))
                    .x_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                    .y_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                    .x_label_formatter(&x_formatter)
                    .y_label_formatter(&|y: &f64| format_number(*y))
                    .draw()?;

                draw_lines(&mut chart, data, false)?;
            }
            YScale::Log => {
                let (y_min, y_max) = log_y_range(&data.all_values());
                let mut chart = builder.build_cartesian_2d(0..x_max, (y_min..y_max).log_scale())?;

                chart
                    .configure_mesh()
                    .x_desc(spec.x_desc())
                    .y_desc(spec.y_desc())
                    .x_labels(x_labels.len().clamp(2, 12))
                    .light_line_style(GRID_COLOR.stroke_width(1))
                    .x_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                    .y_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
                    .x_label_formatter(&x_formatter)
                    .y_label_formatter(&|y: &f64| format_number(*y))
                    .draw()?;

                draw_lines(&mut chart, data, true)?;
            }
        }

        root.present()?;
        Ok(())
    }

    #[doc = r#"
        Grouped bars always sit on a log y-axis with only the powers of ten labelled.
        Zero and negative bars have no height there and are left out.
    "#]
    fn render_grouped_bar_chart(
        &self,
        spec: &ChartSpec,
        data: &ChartData,
        output_path_str: &str,
    ) -> anyhow::Result<()> {
        let root = BitMapBackend::new(output_path_str, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let x_labels: &Vec<String> = data.x_labels();
        let category_cnt: usize = x_labels.len().max(1);
        let x_formatter = |x: &f64| category_label(x_labels, *x);

        let (y_min, y_max) = log_y_range(&data.all_values());

        let mut chart = ChartBuilder::on(&root)
            .caption(spec.title(), ("sans-serif", 28).into_font().color(&TEXT_COLOR))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(
                -0.5..category_cnt as f64 - 0.5,
                (y_min..y_max).log_scale(),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_desc())
            .y_desc(spec.y_desc())
            .x_labels(category_cnt + 1)
            .light_line_style(GRID_COLOR.stroke_width(1))
            .x_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
            .y_label_style(("sans-serif", 14).into_font().color(&TEXT_COLOR))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&|y: &f64| major_tick_label(*y))
            .draw()?;

        draw_bars(&mut chart, data, y_min)?;

        root.present()?;
        Ok(())
    }

    #[doc = "Creates the parent directory of `output_path` when it is missing"]
    async fn prepare_output(&self, output_path: &std::path::Path) -> anyhow::Result<String> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        Ok(output_path.to_string_lossy().to_string())
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_line_chart(
        &self,
        spec: &ChartSpec,
        data: &ChartData,
        output_path: &std::path::Path,
    ) -> anyhow::Result<()> {
        let output_path_str: String = self.prepare_output(output_path).await?;

        let renderer: ChartServiceImpl = self.clone();
        let spec: ChartSpec = spec.clone();
        let data: ChartData = data.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                renderer.render_line_chart(&spec, &data, &output_path_str)
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_line_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->generate_line_chart] drawing/present failed")?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn generate_grouped_bar_chart(
        &self,
        spec: &ChartSpec,
        data: &ChartData,
        output_path: &std::path::Path,
    ) -> anyhow::Result<()> {
        let output_path_str: String = self.prepare_output(output_path).await?;

        let renderer: ChartServiceImpl = self.clone();
        let spec: ChartSpec = spec.clone();
        let data: ChartData = data.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                renderer.render_grouped_bar_chart(&spec, &data, &output_path_str)
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_grouped_bar_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_grouped_bar_chart] drawing/present failed")?;

        info!("Grouped bar chart generated successfully: {:?}", output_path);

        Ok(())
    }
}
