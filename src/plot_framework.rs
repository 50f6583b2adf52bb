// src/plot_framework.rs

use log::{info, warn};
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND};
use crate::font_config::{
    ensure_fonts_registered, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND,
    FONT_TUPLE_MAIN_TITLE, FONT_TUPLE_MESSAGE,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Number of decimals that keeps neighbouring ticks distinguishable on an axis spanning `span`.
fn decimals_for_span(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 2;
    }
    ((-span.log10()).ceil() + 1.0).clamp(0.0, 6.0) as usize
}

/// Formats a tick label.
///
/// Large magnitudes use "k" and "M" notation. Everything else gets as many
/// decimals as the axis span needs, so accelerometer noise around 0.001 g and
/// tilt angles around 45 degrees both read naturally.
pub fn format_axis_value(value: f64, span: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1000.0 {
        format!("{:.0}k", value / 1000.0)
    } else {
        let decimals = decimals_for_span(span);
        // Avoid "-0.00" for ticks that are zero up to float noise.
        let value = if value.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
            0.0
        } else {
            value
        };
        format!("{:.*}", decimals, value)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let heading = format!("{panel_name} Data Unavailable:");
    let lines = [heading.as_str(), reason];

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0) as i32;
    let estimated_text_width = max_line_length * estimated_char_width;
    let estimated_text_height = lines.len() as i32 * line_height;

    let left_x = (width / 2 - estimated_text_width / 2).max(0);
    let top_y = height / 2 - estimated_text_height / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    for (line_index, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.to_string(),
            (left_x, top_y + line_index as i32 * line_height),
            text_style.clone(),
        ))?;
    }
    Ok(())
}

/// A line on a chart. Points with a non-finite coordinate mark gaps: the line
/// is broken there instead of joining its neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub opacity: f64, // 0.0 to 1.0
    pub stroke_width: u32,
}

fn is_plottable(&(x, y): &(f64, f64)) -> bool {
    x.is_finite() && y.is_finite()
}

impl PlotSeries {
    /// Runs of consecutive plottable points, split at gaps.
    pub fn segments(&self) -> impl Iterator<Item = &[(f64, f64)]> + '_ {
        self.data
            .split(|point| !is_plottable(point))
            .filter(|segment| !segment.is_empty())
    }

    pub fn has_points(&self) -> bool {
        self.data.iter().any(is_plottable)
    }
}

/// One chart: title, ranges, series and axis descriptions.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

impl PlotConfig {
    /// Builds a chart whose X range spans the data exactly and whose Y range is padded.
    pub fn from_series(
        title: impl Into<String>,
        series: Vec<PlotSeries>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        let mut time_min = f64::INFINITY;
        let mut time_max = f64::NEG_INFINITY;
        let mut val_min = f64::INFINITY;
        let mut val_max = f64::NEG_INFINITY;
        for &(x, y) in series
            .iter()
            .flat_map(|s| s.data.iter())
            .filter(|point| is_plottable(point))
        {
            time_min = time_min.min(x);
            time_max = time_max.max(x);
            val_min = val_min.min(y);
            val_max = val_max.max(y);
        }

        let (x_range, y_range) = if time_min.is_finite() && val_min.is_finite() {
            let x_range = if time_max > time_min {
                time_min..time_max
            } else {
                let (lo, hi) = calculate_range(time_min, time_max);
                lo..hi
            };
            let (lo, hi) = calculate_range(val_min, val_max);
            (x_range, lo..hi)
        } else {
            (0.0..1.0, 0.0..1.0)
        };

        Self {
            title: title.into(),
            x_range,
            y_range,
            series,
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.series.iter().any(PlotSeries::has_points)
    }

    fn has_valid_ranges(&self) -> bool {
        self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start
    }
}

/// A whole image: a main title above a `rows` x `cols` grid of charts (row-major).
/// `None` panels are drawn as a placeholder message.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureConfig {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub width: u32,
    pub height: u32,
    pub panels: Vec<Option<PlotConfig>>,
}

impl FigureConfig {
    pub fn panel(&self, row: usize, col: usize) -> Option<&PlotConfig> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.panels.get(row * self.cols + col).and_then(Option::as_ref)
    }
}

/// Draws a single chart using a PlotConfig struct.
fn draw_single_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let x_span = plot_config.x_range.end - plot_config.x_range.start;
    let y_span = plot_config.y_range.end - plot_config.y_range.start;

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(8)
        .x_label_formatter(&|x| format_axis_value(*x, x_span))
        .y_label_formatter(&|y| format_axis_value(*y, y_span))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        let line_style = s.color.mix(s.opacity).stroke_width(s.stroke_width);
        let legend_style = s.color.mix(s.opacity).stroke_width(LINE_WIDTH_LEGEND);

        // Only the first segment carries the legend entry.
        let mut legend_done = s.label.is_empty();
        for segment in s.segments() {
            let series =
                chart.draw_series(LineSeries::new(segment.iter().cloned(), line_style))?;
            if !legend_done {
                series.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], legend_style)
                });
                legend_done = true;
                legend_series_count += 1;
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Renders a figure to a PNG file.
pub fn render_figure_png(output_path: &Path, figure: &FigureConfig) -> Result<(), Box<dyn Error>> {
    ensure_fonts_registered()?;

    let root_area = BitMapBackend::new(output_path, (figure.width, figure.height)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        figure.title.as_str(),
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((figure.rows.max(1), figure.cols.max(1)));
    let mut any_plot_drawn = false;

    for (panel_index, area) in sub_plot_areas.iter().enumerate() {
        match figure.panels.get(panel_index).and_then(Option::as_ref) {
            Some(plot_config) => {
                let has_data = plot_config.has_data();
                if has_data && plot_config.has_valid_ranges() {
                    draw_single_chart(area, plot_config)?;
                    any_plot_drawn = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, &plot_config.title, reason)?;
                }
            }
            None => {
                let panel_name = format!("Panel {}", panel_index + 1);
                draw_unavailable_message(area, &panel_name, "Data Not Available")?;
            }
        }
    }

    root_area.present()?;
    if any_plot_drawn {
        info!("  Plot saved as '{}'.", output_path.display());
    } else {
        warn!(
            "  '{}' saved with placeholder messages only: no panel had data to plot.",
            output_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(data: Vec<(f64, f64)>) -> PlotSeries {
        PlotSeries {
            data,
            label: "s".to_string(),
            color: RED,
            opacity: 1.0,
            stroke_width: 1,
        }
    }

    #[test]
    fn test_calculate_range_pads_and_orders() {
        assert_eq!(calculate_range(0.0, 10.0), (-1.5, 11.5));
        assert_eq!(calculate_range(10.0, 0.0), (-1.5, 11.5));
        assert_eq!(calculate_range(2.0, 2.0), (1.5, 2.5));
    }

    #[test]
    fn test_from_series_ranges() {
        let config = PlotConfig::from_series(
            "t",
            vec![series(vec![(0.0, -1.0), (2.0, 1.0)]), series(vec![(1.0, 3.0)])],
            "x",
            "y",
        );
        assert_eq!(config.x_range, 0.0..2.0);
        assert!((config.y_range.start + 1.6).abs() < 1e-9);
        assert!((config.y_range.end - 3.6).abs() < 1e-9);
        assert!(config.has_data());
    }

    #[test]
    fn test_from_series_single_point_and_empty() {
        let single = PlotConfig::from_series("t", vec![series(vec![(0.0, 5.0)])], "x", "y");
        assert_eq!(single.x_range, -0.5..0.5);
        assert_eq!(single.y_range, 4.5..5.5);

        let empty = PlotConfig::from_series("t", vec![series(vec![])], "x", "y");
        assert!(!empty.has_data());
    }

    #[test]
    fn test_gaps_split_segments_and_are_ignored_by_ranges() {
        let s = series(vec![
            (0.0, 1.0),
            (1.0, 2.0),
            (2.0, f64::NAN),
            (3.0, 4.0),
            (4.0, f64::NAN),
            (5.0, f64::NAN),
            (6.0, 3.0),
            (7.0, 2.0),
        ]);
        let segments: Vec<&[(f64, f64)]> = s.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], &[(0.0, 1.0), (1.0, 2.0)]);
        assert_eq!(segments[1], &[(3.0, 4.0)]);
        assert_eq!(segments[2], &[(6.0, 3.0), (7.0, 2.0)]);

        let config = PlotConfig::from_series("t", vec![s], "x", "y");
        assert_eq!(config.x_range, 0.0..7.0);
        assert!(config.y_range.start.is_finite() && config.y_range.end.is_finite());

        let only_gaps = series(vec![(0.0, f64::NAN), (1.0, f64::NAN)]);
        assert!(!only_gaps.has_points());
        assert!(!PlotConfig::from_series("t", vec![only_gaps], "x", "y").has_data());
    }

    #[test]
    fn test_render_figure_with_empty_and_missing_panels() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("figure.png");
        let figure = FigureConfig {
            title: "Mixed".to_string(),
            rows: 1,
            cols: 3,
            width: 900,
            height: 300,
            panels: vec![
                Some(PlotConfig::from_series(
                    "with data",
                    vec![series(vec![(0.0, 0.0), (1.0, f64::NAN), (2.0, 1.0), (3.0, 0.5)])],
                    "x",
                    "y",
                )),
                Some(PlotConfig::from_series(
                    "no values",
                    vec![series(vec![(0.0, f64::NAN)])],
                    "x",
                    "y",
                )),
                None,
            ],
        };

        render_figure_png(&output_path, &figure).unwrap();
        let bytes = std::fs::read(&output_path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_figure_panel_lookup_is_row_major() {
        let a = PlotConfig::from_series("a", vec![], "x", "y");
        let b = PlotConfig::from_series("b", vec![], "x", "y");
        let figure = FigureConfig {
            title: "f".to_string(),
            rows: 1,
            cols: 2,
            width: 100,
            height: 100,
            panels: vec![Some(a), Some(b)],
        };
        assert_eq!(figure.panel(0, 1).map(|p| p.title.as_str()), Some("b"));
        assert!(figure.panel(1, 0).is_none());
    }
}

// src/plot_framework.rs
