/*!
 * Desktop app for energy-forecast
 *
 * A single window providing:
 * - A country selector and a line chart of its yearly consumption
 * - Toggleable model-description and accuracy-comparison panels
 * - CSV export of the displayed series through a native save dialog
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::{Context, Result};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use energy_forecast::export::{self, CSV_MIME, SaveTarget};
use energy_forecast::info;
use energy_forecast::view::PageView;
use energy_forecast::{Catalog, Country, SelectionState, render};
use log::warn;
use std::path::PathBuf;

const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(136, 132, 216);

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title(info::APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "Energy Forecast",
        options,
        Box::new(|_cc| Ok(Box::new(ForecastApp::new()))),
    )
}

/// Native "save as" dialog, starting in the user's download directory.
struct DialogTarget;

impl SaveTarget for DialogTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8], mime: &str) -> Result<Option<PathBuf>> {
        let (filter_name, ext) = if mime == CSV_MIME {
            ("CSV", "csv")
        } else {
            ("JSON", "json")
        };
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter(filter_name, &[ext]);
        if let Some(dir) = dirs::download_dir().or_else(dirs::home_dir) {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return Ok(None);
        };
        std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(Some(path))
    }
}

/// User input collected while drawing a frame, applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Select(Country),
    Export,
    ToggleModelDetails,
    ToggleAccuracy,
}

/// Main application state
struct ForecastApp {
    catalog: &'static Catalog,
    state: SelectionState,
    status_message: String,
    error_message: String,
}

impl ForecastApp {
    fn new() -> Self {
        let catalog = Catalog::builtin();
        Self {
            catalog,
            state: SelectionState::new(catalog),
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Select(country) => self.state.select(country),
            Action::ToggleModelDetails => self.state.toggle_model_details(),
            Action::ToggleAccuracy => self.state.toggle_accuracy(),
            Action::Export => self.export_csv(),
        }
    }

    fn export_csv(&mut self) {
        match export::export_selected(self.catalog, &self.state, &mut DialogTarget) {
            Ok(Some(path)) => {
                self.status_message = format!("Saved {}", path.display());
                self.error_message.clear();
            }
            Ok(None) => {}
            Err(err) => {
                warn!("export failed: {err:#}");
                self.error_message = format!("Export failed: {err:#}");
                self.status_message.clear();
            }
        }
    }

    fn controls(&self, ui: &mut egui::Ui, view: &PageView, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.label("Select Country:");
            egui::ComboBox::from_id_salt("country")
                .selected_text(&view.selected_country)
                .show_ui(ui, |ui| {
                    for country in self.catalog.countries() {
                        let selected = country == self.state.selected();
                        if ui
                            .selectable_label(selected, self.catalog.name(country))
                            .clicked()
                        {
                            actions.push(Action::Select(country));
                        }
                    }
                });

            if ui.button("Export CSV").clicked() {
                actions.push(Action::Export);
            }
            ui.label(egui::RichText::new("ℹ").color(egui::Color32::GRAY))
                .on_hover_text(view.info_tooltip);

            if ui.button(view.model_details_button).clicked() {
                actions.push(Action::ToggleModelDetails);
            }
            if ui.button(view.accuracy_button).clicked() {
                actions.push(Action::ToggleAccuracy);
            }
        });
    }
}

fn model_details_panel(ui: &mut egui::Ui, view: &PageView) {
    let Some(d) = &view.model_details else {
        return;
    };
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(249, 249, 249))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(d.heading);
            ui.label(d.intro);
            for c in d.components {
                ui.horizontal_wrapped(|ui| {
                    ui.label("•");
                    ui.label(egui::RichText::new(c.name).strong());
                    ui.label(format!(": {}", c.summary));
                });
            }
            ui.label(d.closing);
        });
    ui.add_space(10.0);
}

fn accuracy_panel(ui: &mut egui::Ui, view: &PageView) {
    let Some(t) = &view.accuracy else {
        return;
    };
    egui::Frame::group(ui.style())
        .fill(egui::Color32::from_rgb(238, 248, 240))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(t.heading);
            egui::Grid::new("accuracy_table")
                .num_columns(3)
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    for col in t.columns {
                        ui.label(egui::RichText::new(col).strong());
                    }
                    ui.end_row();
                    for row in t.rows {
                        let [model, mape, r2] = info::accuracy_cells(row);
                        ui.label(model);
                        if row.highlight {
                            ui.label(egui::RichText::new(mape).strong());
                            ui.label(egui::RichText::new(r2).strong());
                        } else {
                            ui.label(mape);
                            ui.label(r2);
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);
            ui.label(t.conclusion);
        });
    ui.add_space(10.0);
}

fn chart(ui: &mut egui::Ui, view: &PageView) {
    let c = &view.chart;
    ui.heading(&c.heading);
    Plot::new("consumption_chart")
        .height(300.0)
        .legend(Legend::default())
        .x_axis_label(c.x_label)
        .y_axis_label(c.y_label)
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(c.points.clone()))
                    .name(c.series_name)
                    .color(LINE_COLOR)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(c.points.clone()))
                    .name(c.series_name)
                    .color(LINE_COLOR)
                    .radius(3.0),
            );
        });
}

impl eframe::App for ForecastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = render(&self.state, self.catalog);
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(view.title);
                ui.add_space(10.0);

                self.controls(ui, &view, &mut actions);
                ui.add_space(10.0);

                model_details_panel(ui, &view);
                accuracy_panel(ui, &view);
                chart(ui, &view);

                ui.add_space(10.0);
                ui.label(egui::RichText::new(view.footer).small().color(egui::Color32::GRAY));

                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });

        if !actions.is_empty() {
            for action in actions {
                self.apply(action);
            }
            ctx.request_repaint();
        }
    }
}
