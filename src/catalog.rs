//! The fixed country → series table behind the selector, the chart and the export.
//!
//! The built-in catalog is assembled and validated once, on first access, and is
//! read-only afterwards. Entries keep their insertion order, which is also the
//! order the selector lists them in.

use crate::models::{CountrySeries, DataPoint, SeriesError};
use std::sync::LazyLock;
use thiserror::Error;

/// Raw built-in figures (TWh). 2024 and 2025 are the model's projections.
const BUILTIN: &[(&str, &[(i32, f64)])] = &[
    (
        "Romania",
        &[
            (2015, 42.0),
            (2016, 44.0),
            (2017, 46.0),
            (2018, 49.0),
            (2019, 50.0),
            (2020, 48.0),
            (2021, 52.0),
            (2022, 55.0),
            (2023, 58.0),
            (2024, 60.0),
            (2025, 61.8),
        ],
    ),
    (
        "Poland",
        &[
            (2015, 120.0),
            (2016, 122.0),
            (2017, 124.0),
            (2018, 127.0),
            (2019, 130.0),
            (2020, 128.0),
            (2021, 132.0),
            (2022, 136.0),
            (2023, 140.0),
            (2024, 166.1),
            (2025, 173.2),
        ],
    ),
    (
        "Hungary",
        &[
            (2015, 22.0),
            (2016, 23.0),
            (2017, 24.0),
            (2018, 26.0),
            (2019, 27.0),
            (2020, 26.0),
            (2021, 28.0),
            (2022, 30.0),
            (2023, 33.0),
            (2024, 45.3),
            (2025, 47.1),
        ],
    ),
];

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = BUILTIN.iter().map(|(name, raw)| {
        let points: Vec<DataPoint> = raw.iter().copied().map(DataPoint::from).collect();
        ((*name).to_string(), points)
    });
    match Catalog::from_entries(entries) {
        Ok(catalog) => catalog,
        // The literals above are part of the binary; a failure here is a build defect.
        Err(err) => panic!("built-in catalog is invalid: {err}"),
    }
});

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("catalog has no countries")]
    Empty,
    #[error("country '{0}' appears more than once")]
    DuplicateCountry(String),
    #[error("invalid series for {country}: {source}")]
    InvalidSeries {
        country: String,
        #[source]
        source: SeriesError,
    },
    #[error("unknown country '{name}' (expected one of: {})", .known.join(", "))]
    UnknownCountry { name: String, known: Vec<String> },
}

/// Handle to one catalog entry. Only a catalog hands these out, so a `Country`
/// names a real entry of the catalog that produced it. Handles are not portable
/// between catalogs; use [`Catalog::get`] when the origin is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country(usize);

impl Country {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    series: CountrySeries,
}

/// Ordered, immutable mapping from country name to its series.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Build a catalog from `(name, points)` pairs, validating every series.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, Vec<DataPoint>)>,
    {
        let mut out: Vec<Entry> = Vec::new();
        for (name, points) in entries {
            if out.iter().any(|e| e.name.eq_ignore_ascii_case(&name)) {
                return Err(CatalogError::DuplicateCountry(name));
            }
            let series = CountrySeries::new(points).map_err(|source| {
                CatalogError::InvalidSeries {
                    country: name.clone(),
                    source,
                }
            })?;
            out.push(Entry { name, series });
        }
        if out.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries: out })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All countries in selector order.
    pub fn countries(&self) -> impl ExactSizeIterator<Item = Country> + '_ {
        (0..self.entries.len()).map(Country)
    }

    /// Country names in selector order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// The first entry; the selector starts here.
    pub fn first(&self) -> Country {
        Country(0)
    }

    /// Resolve a user-typed name (case-insensitive, surrounding whitespace ignored).
    pub fn lookup(&self, name: &str) -> Result<Country, CatalogError> {
        let wanted = name.trim();
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(wanted))
            .map(Country)
            .ok_or_else(|| CatalogError::UnknownCountry {
                name: wanted.to_string(),
                known: self.names().map(str::to_string).collect(),
            })
    }

    /// Name and series for `country`, or `None` if the handle is out of range
    /// for this catalog.
    pub fn get(&self, country: Country) -> Option<(&str, &CountrySeries)> {
        self.entries
            .get(country.0)
            .map(|e| (e.name.as_str(), &e.series))
    }

    /// # Panics
    /// If `country` came from a different, smaller catalog.
    pub fn name(&self, country: Country) -> &str {
        &self.entries[country.0].name
    }

    /// # Panics
    /// If `country` came from a different, smaller catalog.
    pub fn series(&self, country: Country) -> &CountrySeries {
        &self.entries[country.0].series
    }
}
