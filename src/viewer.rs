// src/viewer.rs

// Interactive display of the rendered figures: one window, one tab per figure,
// every chart zoomable and draggable.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, PlotPoints};
use log::info;
use std::error::Error;

use crate::plot_framework::{FigureConfig, PlotConfig};

const WINDOW_TITLE: &str = "IMU Tilt Analysis";
const PANEL_TITLE_HEIGHT: f32 = 24.0;
const MIN_CELL_SIZE: f32 = 50.0;

/// Opens the viewer and blocks until the window is closed.
pub fn show_figures(figures: Vec<FigureConfig>) -> Result<(), Box<dyn Error>> {
    if figures.is_empty() {
        return Ok(());
    }
    info!("Opening viewer with {} figure(s).", figures.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(FigureViewer::new(figures)))),
    )
    .map_err(|e| format!("viewer failed: {e}").into())
}

struct FigureViewer {
    figures: Vec<FigureConfig>,
    selected: usize,
}

impl FigureViewer {
    fn new(figures: Vec<FigureConfig>) -> Self {
        Self {
            figures,
            selected: 0,
        }
    }
}

fn series_color(plot_config: &PlotConfig, index: usize) -> Color32 {
    let s = &plot_config.series[index];
    let alpha = (s.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(s.color.0, s.color.1, s.color.2, alpha)
}

fn show_chart(ui: &mut egui::Ui, id: String, plot_config: &PlotConfig, width: f32, height: f32) {
    ui.label(egui::RichText::new(plot_config.title.as_str()).strong());
    egui_plot::Plot::new(id)
        .width(width)
        .height(height)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_label(plot_config.x_label.as_str())
        .y_axis_label(plot_config.y_label.as_str())
        .show(ui, |plot_ui| {
            for (index, s) in plot_config.series.iter().enumerate() {
                let color = series_color(plot_config, index);
                // Segments share a name, so the legend shows one entry per series.
                for segment in s.segments() {
                    let points: PlotPoints = segment.iter().map(|&(x, y)| [x, y]).collect();
                    plot_ui.line(Line::new(points).name(&s.label).color(color));
                }
            }
        });
}

/// Size of one chart cell in a `rows` x `cols` grid, never below `MIN_CELL_SIZE`.
fn cell_size(available: egui::Vec2, spacing: egui::Vec2, rows: usize, cols: usize) -> egui::Vec2 {
    let rows = rows.max(1) as f32;
    let cols = cols.max(1) as f32;
    let width = (available.x - spacing.x * cols) / cols;
    let height = (available.y - spacing.y * rows) / rows - PANEL_TITLE_HEIGHT;
    egui::vec2(width.max(MIN_CELL_SIZE), height.max(MIN_CELL_SIZE))
}

impl eframe::App for FigureViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("figure_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (index, figure) in self.figures.iter().enumerate() {
                    ui.selectable_value(&mut self.selected, index, figure.title.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(figure) = self.figures.get(self.selected) else {
                ui.label("No figure selected");
                return;
            };

            let rows = figure.rows.max(1);
            let cols = figure.cols.max(1);
            let cell = cell_size(ui.available_size(), ui.spacing().item_spacing, rows, cols);

            egui::Grid::new("figure_grid")
                .num_columns(cols)
                .show(ui, |ui| {
                    for row in 0..rows {
                        for col in 0..cols {
                            ui.vertical(|ui| match figure.panel(row, col) {
                                Some(plot_config) => show_chart(
                                    ui,
                                    format!("figure_{}_panel_{}_{}", self.selected, row, col),
                                    plot_config,
                                    cell.x,
                                    cell.y,
                                ),
                                None => {
                                    ui.label("Data Not Available");
                                }
                            });
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_splits_available_space() {
        let cell = cell_size(egui::vec2(1216.0, 912.0), egui::vec2(8.0, 4.0), 3, 2);
        assert_eq!(cell.x, 600.0);
        assert_eq!(cell.y, 300.0 - PANEL_TITLE_HEIGHT);
    }

    #[test]
    fn test_cell_size_is_clamped_on_tiny_windows() {
        let cell = cell_size(egui::vec2(20.0, 10.0), egui::vec2(8.0, 4.0), 3, 2);
        assert_eq!(cell, egui::vec2(MIN_CELL_SIZE, MIN_CELL_SIZE));
    }
}

// src/viewer.rs
