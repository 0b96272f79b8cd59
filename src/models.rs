use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One yearly consumption figure, in terawatt-hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub year: i32,
    pub value: f64,
}

impl DataPoint {
    pub const fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

impl From<(i32, f64)> for DataPoint {
    fn from((year, value): (i32, f64)) -> Self {
        Self { year, value }
    }
}

/// Reasons a list of points cannot form a [`CountrySeries`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("series has no data points")]
    Empty,
    /// Years must step by exactly one.
    #[error("year {found} does not directly follow {previous}")]
    NotContiguous { previous: i32, found: i32 },
    #[error("value for {year} must be a finite number >= 0, got {value}")]
    InvalidValue { year: i32, value: f64 },
}

/// Yearly points for one country, ascending and contiguous by year.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct CountrySeries {
    points: Vec<DataPoint>,
}

impl CountrySeries {
    /// Validate and wrap `points`. They must already be in year order.
    /// A `-0.0` value is stored as `0.0`.
    pub fn new(mut points: Vec<DataPoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        for p in &mut points {
            if !p.value.is_finite() || p.value < 0.0 {
                return Err(SeriesError::InvalidValue {
                    year: p.year,
                    value: p.value,
                });
            }
            p.value += 0.0;
        }
        for pair in points.windows(2) {
            if pair[0].year.checked_add(1) != Some(pair[1].year) {
                return Err(SeriesError::NotContiguous {
                    previous: pair[0].year,
                    found: pair[1].year,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a validated series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_year(&self) -> i32 {
        self.points[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.points[self.points.len() - 1].year
    }

    /// Value recorded for `year`, if the series covers it.
    pub fn value_for(&self, year: i32) -> Option<f64> {
        let idx = usize::try_from(year.checked_sub(self.first_year())?).ok()?;
        self.points.get(idx).map(|p| p.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a CountrySeries {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// One row of the static model accuracy comparison.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct AccuracyRow {
    pub model: &'static str,
    /// Mean absolute percentage error, in percent.
    pub mape: f64,
    pub r_squared: f64,
    /// Set on the row the table calls out (the final ensemble).
    pub highlight: bool,
}

/// A named component of the ensemble with a one-line description.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ModelComponent {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Static text for the "model details" panel.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ModelDescription {
    pub heading: &'static str,
    pub intro: &'static str,
    pub components: &'static [ModelComponent],
    pub closing: &'static str,
}

/// Static content for the "accuracy comparison" panel.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct AccuracyTable {
    pub heading: &'static str,
    pub columns: [&'static str; 3],
    pub rows: &'static [AccuracyRow],
    pub conclusion: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, f64)]) -> Vec<DataPoint> {
        raw.iter().copied().map(DataPoint::from).collect()
    }

    #[test]
    fn rejects_gaps_and_reordering() {
        let gap = CountrySeries::new(pts(&[(2015, 1.0), (2017, 2.0)]));
        assert_eq!(
            gap,
            Err(SeriesError::NotContiguous {
                previous: 2015,
                found: 2017
            })
        );

        let dup = CountrySeries::new(pts(&[(2015, 1.0), (2015, 2.0)]));
        assert!(matches!(dup, Err(SeriesError::NotContiguous { .. })));

        let backwards = CountrySeries::new(pts(&[(2016, 1.0), (2015, 2.0)]));
        assert!(matches!(backwards, Err(SeriesError::NotContiguous { .. })));
    }

    #[test]
    fn rejects_empty_and_bad_values() {
        assert_eq!(CountrySeries::new(Vec::new()), Err(SeriesError::Empty));
        assert!(matches!(
            CountrySeries::new(pts(&[(2015, -0.5)])),
            Err(SeriesError::InvalidValue { year: 2015, .. })
        ));
        assert!(matches!(
            CountrySeries::new(pts(&[(2015, f64::NAN)])),
            Err(SeriesError::InvalidValue { .. })
        ));
    }

    #[test]
    fn year_overflow_is_an_error() {
        let wrapped = CountrySeries::new(pts(&[(i32::MAX, 1.0), (i32::MIN, 1.0)]));
        assert_eq!(
            wrapped,
            Err(SeriesError::NotContiguous {
                previous: i32::MAX,
                found: i32::MIN
            })
        );
        let s = CountrySeries::new(pts(&[(i32::MAX, 1.0)])).unwrap();
        assert_eq!(s.value_for(i32::MAX), Some(1.0));
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let s = CountrySeries::new(pts(&[(2015, -0.0)])).unwrap();
        assert!(s.points()[0].value.is_sign_positive());
    }

    #[test]
    fn value_lookup_by_year() {
        let s = CountrySeries::new(pts(&[(2015, 1.0), (2016, 2.5), (2017, 3.0)])).unwrap();
        assert_eq!(s.first_year(), 2015);
        assert_eq!(s.last_year(), 2017);
        assert_eq!(s.value_for(2016), Some(2.5));
        assert_eq!(s.value_for(2014), None);
        assert_eq!(s.value_for(2018), None);
    }
}
