//! Pure description of the page for a given selection.
//!
//! `render` is re-run after every state change; the GUI only draws what it returns.

use crate::catalog::Catalog;
use crate::info::{
    self, ACCURACY_TABLE, APP_TITLE, DATA_SOURCES_FOOTER, INFO_TOOLTIP, MODEL_DESCRIPTION,
};
use crate::models::{AccuracyTable, ModelDescription};
use crate::state::SelectionState;

/// Line chart contents for the selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub heading: String,
    pub series_name: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `[year, value]` pairs in year order.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: &'static str,
    pub countries: Vec<String>,
    pub selected_country: String,
    pub info_tooltip: &'static str,
    pub model_details_button: &'static str,
    pub accuracy_button: &'static str,
    pub model_details: Option<ModelDescription>,
    pub accuracy: Option<AccuracyTable>,
    pub chart: ChartView,
    pub footer: &'static str,
}

pub fn model_details_button_label(visible: bool) -> &'static str {
    if visible {
        "Hide Model Details"
    } else {
        "View Model Details"
    }
}

pub fn accuracy_button_label(visible: bool) -> &'static str {
    if visible {
        "Hide Accuracy Comparison"
    } else {
        "Show Accuracy Comparison"
    }
}

pub fn render(state: &SelectionState, catalog: &Catalog) -> PageView {
    let selected = state.selected();
    let name = catalog.name(selected);
    let points = catalog
        .series(selected)
        .iter()
        .map(|p| [f64::from(p.year), p.value])
        .collect();

    PageView {
        title: APP_TITLE,
        countries: catalog.names().map(str::to_string).collect(),
        selected_country: name.to_string(),
        info_tooltip: INFO_TOOLTIP,
        model_details_button: model_details_button_label(state.show_model_details()),
        accuracy_button: accuracy_button_label(state.show_accuracy()),
        model_details: state.show_model_details().then_some(MODEL_DESCRIPTION),
        accuracy: state.show_accuracy().then_some(ACCURACY_TABLE),
        chart: ChartView {
            heading: format!("Forecasted Energy Consumption for {name}"),
            series_name: info::SERIES_LABEL,
            x_label: info::X_AXIS_LABEL,
            y_label: info::Y_AXIS_LABEL,
            points,
        },
        footer: DATA_SOURCES_FOOTER,
    }
}
