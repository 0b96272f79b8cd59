//! Serialize a country's series and hand it to a platform "save file" primitive.

use crate::catalog::Catalog;
use crate::models::CountrySeries;
use crate::state::SelectionState;
use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const CSV_MIME: &str = "text/csv";
pub const JSON_MIME: &str = "application/json";

/// Output formats offered for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_MIME,
            ExportFormat::Json => JSON_MIME,
        }
    }
}

/// Somewhere bytes can be saved under a suggested file name.
///
/// Returns the path actually written, or `None` when the user declined
/// (e.g. cancelled a save dialog).
pub trait SaveTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8], mime: &str) -> Result<Option<PathBuf>>;
}

/// Writes files into a fixed directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, file_name: &str, bytes: &[u8], _mime: &str) -> Result<Option<PathBuf>> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(Some(path))
    }
}

/// `<country>_forecast.<ext>`
pub fn export_file_name(country: &str, format: ExportFormat) -> String {
    format!("{}_forecast.{}", country, format.extension())
}

/// `Year,Value` header plus one `<year>,<value>` line per point, joined by `\n`
/// with no trailing newline.
pub fn series_to_csv(series: &CountrySeries) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(["Year", "Value"])?;
    for p in series {
        // Display on f64 gives the shortest form ("22", "61.8").
        wtr.write_record([p.year.to_string(), p.value.to_string()])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV buffer")?;
    let mut text = String::from_utf8(bytes).context("CSV output is not UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Pretty JSON array of `{ "year": .., "value": .. }` objects.
pub fn series_to_json(series: &CountrySeries) -> Result<String> {
    Ok(serde_json::to_string_pretty(series)?)
}

/// Export one country's series in `format` through `target`.
pub fn export_series<T: SaveTarget + ?Sized>(
    country: &str,
    series: &CountrySeries,
    format: ExportFormat,
    target: &mut T,
) -> Result<Option<PathBuf>> {
    let body = match format {
        ExportFormat::Csv => series_to_csv(series)?,
        ExportFormat::Json => series_to_json(series)?,
    };
    let file_name = export_file_name(country, format);
    let saved = target.save(&file_name, body.as_bytes(), format.mime())?;
    if let Some(path) = &saved {
        info!(
            "exported {} rows for {} to {}",
            series.len(),
            country,
            path.display()
        );
    }
    Ok(saved)
}

/// Export whatever the selection currently shows, as CSV.
pub fn export_selected<T: SaveTarget + ?Sized>(
    catalog: &Catalog,
    state: &SelectionState,
    target: &mut T,
) -> Result<Option<PathBuf>> {
    let country = state.selected();
    export_series(
        catalog.name(country),
        catalog.series(country),
        ExportFormat::Csv,
        target,
    )
}
