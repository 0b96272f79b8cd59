use crate::models::CountrySeries;
use serde::{Deserialize, Serialize};

/// Summary statistics for one series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Change from the first to the last value, in percent. `None` when the first value is 0.
    pub total_change_pct: Option<f64>,
}

pub fn summarize(series: &CountrySeries) -> Summary {
    let mut vals: Vec<f64> = series.iter().map(|p| p.value).collect();
    vals.sort_by(f64::total_cmp);
    let count = vals.len();
    let min = vals[0];
    let max = vals[count - 1];
    let mean = vals.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        vals[count / 2]
    } else {
        (vals[count / 2 - 1] + vals[count / 2]) / 2.0
    };

    let points = series.points();
    let first = points[0].value;
    let last = points[count - 1].value;
    let total_change_pct = (first != 0.0).then(|| (last - first) / first * 100.0);

    Summary {
        count,
        first_year: series.first_year(),
        last_year: series.last_year(),
        min,
        max,
        mean,
        median,
        total_change_pct,
    }
}
