//! Utility functions for chart rendering: series color, axis range, locale-aware tick labels.

use crate::models::CountrySeries;
use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

/// Stroke color of the consumption line (#8884D8).
pub const SERIES_COLOR: RGBColor = RGBColor(136, 132, 216);

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format a Y tick: grouped thousands, one decimal below 10, whole numbers above.
pub fn format_tick(v: f64, locale: &Locale, dec_sep: char) -> String {
    if v.abs() >= 10.0 {
        return (v.round() as i64).to_formatted_string(locale);
    }
    let s = format!("{:.1}", v);
    if dec_sep == '.' {
        s
    } else {
        s.replace('.', &dec_sep.to_string())
    }
}

/// Y range for the chart: anchored at zero with 10% headroom above the largest value.
pub fn value_range(series: &CountrySeries) -> (f64, f64) {
    let max = series.iter().map(|p| p.value).fold(0.0f64, f64::max);
    if max <= 0.0 { (0.0, 1.0) } else { (0.0, max * 1.1) }
}

/// X range for the chart. A single-year series is padded by one year either side.
pub fn year_range(series: &CountrySeries) -> (f64, f64) {
    let (first, last) = (series.first_year(), series.last_year());
    if first == last {
        (
            f64::from(first.saturating_sub(1)),
            f64::from(last.saturating_add(1)),
        )
    } else {
        (f64::from(first), f64::from(last))
    }
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Width of the left label area, sized to the widest Y tick label plus the axis title.
pub fn compute_left_label_area_px(
    ymax: f64,
    locale: &Locale,
    dec_sep: char,
    font_px: u32,
) -> u32 {
    let widest = estimate_text_width_px(&format_tick(ymax, locale, dec_sep), font_px);
    // tick marks + rotated axis title
    widest.saturating_add(40).clamp(56, 140)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataPoint;

    #[test]
    fn ticks_follow_locale() {
        let (german, sep) = map_locale("de");
        assert_eq!(format_tick(1234.4, german, sep), "1.234");
        assert_eq!(format_tick(2.5, german, sep), "2,5");
        let (english, sep) = map_locale("EN");
        assert_eq!(format_tick(1234.4, english, sep), "1,234");
        assert_eq!(format_tick(2.5, english, sep), "2.5");
    }

    #[test]
    fn ranges_include_zero_and_pad_single_year() {
        let s = CountrySeries::new(vec![DataPoint::new(2020, 50.0)]).unwrap();
        assert_eq!(year_range(&s), (2019.0, 2021.0));
        let (lo, hi) = value_range(&s);
        assert_eq!(lo, 0.0);
        assert!((hi - 55.0).abs() < 1e-9);
    }

    #[test]
    fn single_year_at_i32_edge_does_not_overflow() {
        let s = CountrySeries::new(vec![DataPoint::new(i32::MAX, 1.0)]).unwrap();
        assert_eq!(year_range(&s), (f64::from(i32::MAX - 1), f64::from(i32::MAX)));
    }
}
