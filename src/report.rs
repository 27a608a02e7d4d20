//! User-facing text for the statistics, the sorted price list and the best
//! charging window.
//!
//! Prices are kept in öre everywhere else; conversion to SEK and the half-up
//! rounding of averages happen only here.

use crate::chart;
use crate::config::AppConfig;
use crate::error::PriceError;
use crate::series::PriceSeries;

/// Minor units (öre) per major unit (SEK).
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// Rounds a minor-unit amount half up to a whole minor unit.
pub fn round_half_up(minor: f64) -> u64 {
    (minor + 0.5).floor() as u64
}

/// Formats a whole minor-unit amount in major units with two decimals.
pub fn format_major(minor: u64) -> String {
    format!("{}.{:02}", minor / MINOR_UNITS_PER_MAJOR, minor % MINOR_UNITS_PER_MAJOR)
}

/// Average, lowest and highest price followed by the chart.
pub fn statistics_report(series: &PriceSeries, cfg: &AppConfig) -> Result<String, PriceError> {
    let avg = series.average()?;
    let (min, max) = series.find_min_max()?;
    let chart = chart::render(series, &cfg.chart)?;
    let unit = cfg.price_unit();

    Ok(format!(
        "\nMedelpris: \n\t{} {unit}\n\
        Lägsta pris: \n\t{}\n\t{} {unit}\n\
        Högsta pris: \n\t{}\n\t{} {unit}\n\
        \n{}\n",
        format_major(round_half_up(avg)),
        min.time_interval(),
        format_major(u64::from(min.price())),
        max.time_interval(),
        format_major(u64::from(max.price())),
        chart,
    ))
}

/// Every hour, cheapest first.
pub fn sorted_report(series: &PriceSeries, cfg: &AppConfig) -> Result<String, PriceError> {
    let sorted = series.sorted_ascending()?;
    let unit = cfg.price_unit();

    let mut report = String::from("\nPrislista - lägst pris:\n");
    for p in &sorted {
        report.push_str(&format!(
            "{}  -->  {} {}\n",
            p.time_interval(),
            format_major(u64::from(p.price())),
            unit
        ));
    }
    Ok(report)
}

/// The cheapest 4-hour charging window and its average price, shown in the
/// bare currency.
pub fn window_report(series: &PriceSeries, cfg: &AppConfig) -> Result<String, PriceError> {
    let window = series.optimal_window()?;

    Ok(format!(
        "\nBästa laddningstid ({}h) är:\n\n{}\nMedelpris: {} {}\n",
        window.len,
        window.label(),
        format_major(round_half_up(window.average())),
        cfg.currency
    ))
}
