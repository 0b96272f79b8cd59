use crate::catalog::{Catalog, Country};
use log::debug;

/// What the user has chosen to look at. Owned by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    selected: Country,
    show_model_details: bool,
    show_accuracy: bool,
}

impl SelectionState {
    /// Start on the catalog's first country with both panels hidden.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            selected: catalog.first(),
            show_model_details: false,
            show_accuracy: false,
        }
    }

    pub fn selected(&self) -> Country {
        self.selected
    }

    pub fn show_model_details(&self) -> bool {
        self.show_model_details
    }

    pub fn show_accuracy(&self) -> bool {
        self.show_accuracy
    }

    pub fn select(&mut self, country: Country) {
        debug!("select country #{}", country.index());
        self.selected = country;
    }

    pub fn toggle_model_details(&mut self) {
        self.show_model_details = !self.show_model_details;
        debug!("model details visible: {}", self.show_model_details);
    }

    pub fn toggle_accuracy(&mut self) {
        self.show_accuracy = !self.show_accuracy;
        debug!("accuracy table visible: {}", self.show_accuracy);
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
