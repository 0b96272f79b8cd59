use energy_forecast::catalog::{Catalog, CatalogError};
use energy_forecast::models::{DataPoint, SeriesError};

#[test]
fn builtin_series_are_contiguous_and_increasing() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 3);
    for country in catalog.countries() {
        let series = catalog.series(country);
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years.first(), Some(&2015), "{}", catalog.name(country));
        assert_eq!(years.last(), Some(&2025), "{}", catalog.name(country));
        for pair in years.windows(2) {
            assert_eq!(pair[1], pair[0] + 1, "gap in {}", catalog.name(country));
        }
        assert!(series.iter().all(|p| p.value >= 0.0));
    }
}

#[test]
fn builtin_figures_match_published_table() {
    let catalog = Catalog::builtin();
    let value = |name: &str, year: i32| {
        let c = catalog.lookup(name).unwrap();
        catalog.series(c).value_for(year).unwrap()
    };
    assert_eq!(value("Romania", 2015), 42.0);
    assert_eq!(value("Romania", 2025), 61.8);
    assert_eq!(value("Poland", 2024), 166.1);
    assert_eq!(value("Poland", 2025), 173.2);
    assert_eq!(value("Hungary", 2020), 26.0);
    assert_eq!(value("Hungary", 2025), 47.1);
}

#[test]
fn builtin_is_shared() {
    assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
}

#[test]
fn from_entries_reports_offending_country() {
    let err = Catalog::from_entries(vec![
        ("Ok".to_string(), vec![DataPoint::new(2015, 1.0), DataPoint::new(2016, 2.0)]),
        ("Broken".to_string(), vec![DataPoint::new(2015, 1.0), DataPoint::new(2018, 2.0)]),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidSeries {
            country: "Broken".into(),
            source: SeriesError::NotContiguous {
                previous: 2015,
                found: 2018
            },
        }
    );
    assert!(err.to_string().contains("Broken"));
}

#[test]
fn custom_catalog_preserves_insertion_order() {
    let catalog = Catalog::from_entries(vec![
        ("Zeta".to_string(), vec![DataPoint::new(2000, 1.0)]),
        ("Alpha".to_string(), vec![DataPoint::new(2000, 2.0)]),
    ])
    .unwrap();
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
    assert_eq!(catalog.name(catalog.first()), "Zeta");
}
