//! ASCII bar chart of the day's prices.
//!
//! Each row is a gridline (bucket threshold); a sample's column gets a marker
//! on every row whose threshold its price reaches.

use crate::config::ChartConfig;
use crate::error::PriceError;
use crate::models::HOURS_PER_DAY;
use crate::series::PriceSeries;

/// Characters per sample column.
const COLUMN_WIDTH: usize = 3;

/// Gridline thresholds for prices between `min_price` and `max_price`,
/// ascending.
///
/// Wide spreads get six evenly spaced lines; integer spacing means the top
/// line can sit below `max_price`.
pub fn compute_buckets(min_price: u32, max_price: u32) -> Vec<u32> {
    let spread = max_price.saturating_sub(min_price);

    match spread {
        0 => vec![min_price],
        1..=5 => vec![min_price, max_price],
        6..=30 => vec![min_price, min_price + spread / 2, max_price],
        _ => {
            let step = spread / 6;
            (0..6).map(|i| min_price + i * step).collect()
        }
    }
}

/// Renders the series in hour order, highest gridline first, followed by an
/// axis line and an hour ruler.
pub fn render(series: &PriceSeries, cfg: &ChartConfig) -> Result<String, PriceError> {
    let points = series.points()?;
    let (min, max) = series.find_min_max()?;
    let buckets = compute_buckets(min.price(), max.price());

    let width = cfg.label_width;
    let marker = format!(" {} ", cfg.marker);
    let blank = " ".repeat(COLUMN_WIDTH);

    let mut chart = String::new();

    for &threshold in buckets.iter().rev() {
        chart.push_str(&format!("{:>width$}|", threshold, width = width));
        for p in points.iter() {
            if p.price() >= threshold {
                chart.push_str(&marker);
            } else {
                chart.push_str(&blank);
            }
        }
        chart.push('\n');
    }

    // Axis and ruler line up with the column centres.
    let pad = " ".repeat(width);
    chart.push_str(&format!("{}|{}\n", pad, "-".repeat(HOURS_PER_DAY * COLUMN_WIDTH - 1)));

    let ruler: Vec<String> = (0..HOURS_PER_DAY).map(|hour| format!("{:02}", hour)).collect();
    chart.push_str(&format!("{}|{}\n", pad, ruler.join(" ")));

    Ok(chart)
}
