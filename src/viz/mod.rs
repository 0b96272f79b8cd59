//! Render a country's consumption series to **SVG** or **PNG**.
//!
//! Mirrors the on-screen chart: year on X, TWh on Y, one labeled line with point
//! markers, legend inside the plot area. Tick labels follow the requested locale
//! (`1,234` vs `1.234`).

pub mod util;

use crate::info::{SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::models::CountrySeries;
use anyhow::{Result, anyhow};
use log::info;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

use util::{
    SERIES_COLOR, compute_left_label_area_px, format_tick, map_locale, value_range, year_range,
};

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Convenience: plot with the default locale (`"en"`).
pub fn plot_series_default<P: AsRef<Path>>(
    country: &str,
    series: &CountrySeries,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    plot_series(country, series, out_path, width, height, "en")
}

/// Render `series` to `out_path`; the backend is chosen by extension (`.svg`, else PNG).
pub fn plot_series<P: AsRef<Path>>(
    country: &str,
    series: &CountrySeries,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
) -> Result<()> {
    if series.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    if width == 0 || height == 0 {
        return Err(anyhow!("chart dimensions must be non-zero"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let title = format!("Forecasted Energy Consumption for {country}");

    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &title, series, locale_tag)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &title, series, locale_tag)?;
    }
    info!("wrote {} chart to {}", country, out_path.display());
    Ok(())
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    title: &str,
    series: &CountrySeries,
    locale_tag: &str,
) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: u32 = 16;

    let (x_min, x_max) = year_range(series);
    let (y_min, y_max) = value_range(series);
    let (num_locale, dec_sep) = map_locale(locale_tag);

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(title, (FontFamily::SansSerif, 22))
        .set_label_area_size(
            LabelAreaPosition::Left,
            compute_left_label_area_px(y_max, num_locale, dec_sep, 12),
        )
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |x: &f64| (x.round() as i32).to_string();
    let y_label_fmt = |v: &f64| format_tick(*v, num_locale, dec_sep);
    let x_label_count = series.len().min(12);

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_labels(x_label_count)
        .y_labels(8)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .light_line_style(RGBColor(230, 230, 230))
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let line: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (f64::from(p.year), p.value))
        .collect();
    let style = ShapeStyle {
        color: SERIES_COLOR.to_rgba(),
        filled: false,
        stroke_width: 2,
    };

    chart
        .draw_series(LineSeries::new(line.clone(), style))
        .map_err(|e| anyhow!("{:?}", e))?
        .label(SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], SERIES_COLOR.stroke_width(2)));

    chart
        .draw_series(
            line.iter()
                .map(|(x, y)| Circle::new((*x, *y), 3, SERIES_COLOR.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
