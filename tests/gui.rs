/*!
 * Tests for the GUI application flow
 *
 * These drive the same state/render/export calls the window makes per frame,
 * without requiring a display.
 */

use energy_forecast::export::{self, SaveTarget};
use energy_forecast::{Catalog, SelectionState, render};
use std::path::PathBuf;

/// Stands in for the native save dialog: accepts into a temp dir or cancels.
struct FakeDialog {
    dir: Option<PathBuf>,
    offered: Vec<String>,
}

impl SaveTarget for FakeDialog {
    fn save(&mut self, file_name: &str, bytes: &[u8], _mime: &str) -> anyhow::Result<Option<PathBuf>> {
        self.offered.push(file_name.to_string());
        match &self.dir {
            Some(dir) => {
                let path = dir.join(file_name);
                std::fs::write(&path, bytes)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}

#[test]
fn dialog_is_offered_the_selected_country_file() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = Catalog::builtin();
    let mut state = SelectionState::new(catalog);
    let mut dialog = FakeDialog {
        dir: Some(tmp.path().to_path_buf()),
        offered: Vec::new(),
    };

    export::export_selected(catalog, &state, &mut dialog).unwrap();
    state.select(catalog.lookup("Poland").unwrap());
    export::export_selected(catalog, &state, &mut dialog).unwrap();

    assert_eq!(
        dialog.offered,
        vec!["Romania_forecast.csv", "Poland_forecast.csv"]
    );
    assert!(tmp.path().join("Poland_forecast.csv").exists());
}

#[test]
fn cancelled_dialog_leaves_state_untouched() {
    let catalog = Catalog::builtin();
    let mut state = SelectionState::new(catalog);
    state.toggle_model_details();
    let before = render(&state, catalog);

    let mut dialog = FakeDialog {
        dir: None,
        offered: Vec::new(),
    };
    let saved = export::export_selected(catalog, &state, &mut dialog).unwrap();

    assert!(saved.is_none());
    assert_eq!(dialog.offered.len(), 1);
    assert_eq!(render(&state, catalog), before);
}

#[test]
fn export_follows_what_the_chart_shows() {
    let catalog = Catalog::builtin();
    let mut state = SelectionState::new(catalog);
    state.select(catalog.lookup("Hungary").unwrap());

    let view = render(&state, catalog);
    let csv_txt = export::series_to_csv(catalog.series(state.selected())).unwrap();
    assert_eq!(csv_txt.lines().count(), view.chart.points.len() + 1);
}
