//! Static explanatory content shown next to the chart.
//!
//! Nothing here is computed: the accuracy figures and model description are fixed
//! literals that ship with the catalog.

use crate::models::{AccuracyRow, AccuracyTable, ModelComponent, ModelDescription};

pub const APP_TITLE: &str = "Energy Consumption Forecast Tool";

/// Hover text for the info marker beside the export button.
pub const INFO_TOOLTIP: &str = "Data from Eurostat, IEA, National Statistics; 2025 forecast is \
annual total based on ensemble model combining XGBoost, Random Forest, and Neural Networks";

pub const DATA_SOURCES_FOOTER: &str = "Data sources: Eurostat, IEA, National Statistics Offices, \
and AI-based model projections for total annual consumption in 2025 using ensemble forecasting.";

pub const SERIES_LABEL: &str = "Consumption (TWh)";
pub const X_AXIS_LABEL: &str = "Year";
pub const Y_AXIS_LABEL: &str = "TWh";

pub const MODEL_DESCRIPTION: ModelDescription = ModelDescription {
    heading: "Model Description",
    intro: "The forecasts are generated using an ensemble machine learning model. \
It combines the predictions from:",
    components: &[
        ModelComponent {
            name: "XGBoost",
            summary: "Excellent for tabular data and trend detection.",
        },
        ModelComponent {
            name: "Random Forest",
            summary: "Handles noise and avoids overfitting.",
        },
        ModelComponent {
            name: "Artificial Neural Networks",
            summary: "Captures complex non-linear patterns.",
        },
    ],
    closing: "Each model is trained on historical data from 2015–2024. \
Their outputs are weighted and averaged for the 2025 forecast.",
};

pub const ACCURACY_TABLE: AccuracyTable = AccuracyTable {
    heading: "Model Accuracy Comparison (MAPE / R²)",
    columns: ["Model", "MAPE (%)", "R²"],
    rows: &[
        AccuracyRow {
            model: "XGBoost",
            mape: 3.0,
            r_squared: 0.91,
            highlight: false,
        },
        AccuracyRow {
            model: "Random Forest",
            mape: 3.6,
            r_squared: 0.89,
            highlight: false,
        },
        AccuracyRow {
            model: "Neural Network",
            mape: 3.8,
            r_squared: 0.88,
            highlight: false,
        },
        AccuracyRow {
            model: "Linear Regression",
            mape: 5.2,
            r_squared: 0.76,
            highlight: false,
        },
        AccuracyRow {
            model: "Ensemble (Final)",
            mape: 2.6,
            r_squared: 0.93,
            highlight: true,
        },
    ],
    conclusion: "The ensemble model outperformed all individual models in both accuracy \
and generalization.",
};

/// Table cells as displayed: MAPE with one decimal, R² with two.
pub fn accuracy_cells(row: &AccuracyRow) -> [String; 3] {
    [
        row.model.to_string(),
        format!("{:.1}", row.mape),
        format!("{:.2}", row.r_squared),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_table_shape() {
        assert_eq!(ACCURACY_TABLE.rows.len(), 5);
        let highlighted: Vec<&str> = ACCURACY_TABLE
            .rows
            .iter()
            .filter(|r| r.highlight)
            .map(|r| r.model)
            .collect();
        assert_eq!(highlighted, vec!["Ensemble (Final)"]);
    }

    #[test]
    fn cells_keep_trailing_zero() {
        assert_eq!(
            accuracy_cells(&ACCURACY_TABLE.rows[0]),
            ["XGBoost".to_string(), "3.0".to_string(), "0.91".to_string()]
        );
    }
}
