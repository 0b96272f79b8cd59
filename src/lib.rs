//! energy_forecast
//!
//! Browse, chart and export a fixed table of yearly energy-consumption figures
//! (2015–2024 history plus a 2025 forecast) for a handful of countries. Pairs with
//! the `energy-forecast` CLI and the `energy-forecast-gui` desktop app.
//!
//! ### Features
//! - Built-in, validated country catalog
//! - Selection state with two independent info-panel toggles, and a pure page view
//! - CSV/JSON export through a pluggable save target
//! - Quick summary statistics (min, max, mean, median, total change)
//! - SVG/PNG line charts of a single country
//!
//! ### Example
//! ```no_run
//! use energy_forecast::{Catalog, SelectionState, export};
//!
//! let catalog = Catalog::builtin();
//! let mut state = SelectionState::new(catalog);
//! state.select(catalog.lookup("Hungary")?);
//! let mut target = export::DirectoryTarget::new("out");
//! export::export_selected(catalog, &state, &mut target)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod export;
pub mod info;
pub mod models;
pub mod state;
pub mod stats;
pub mod view;
pub mod viz;

pub use catalog::{Catalog, CatalogError, Country};
pub use models::{CountrySeries, DataPoint, SeriesError};
pub use state::SelectionState;
pub use view::{PageView, render};
