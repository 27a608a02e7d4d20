use electricity_prices::chart::{compute_buckets, render};
use electricity_prices::config::AppConfig;
use electricity_prices::error::PriceError;
use electricity_prices::series::PriceSeries;
use electricity_prices::shell::Shell;

fn spread_prices() -> [u32; 24] {
    let mut prices = [50; 24];
    prices[3] = 0;
    prices[18] = 100;
    prices[19] = 100;
    prices
}

#[test]
fn test_spread_series_statistics_and_chart() {
    let series = PriceSeries::from_prices(spread_prices());

    let (min, max) = series.find_min_max().unwrap();
    assert_eq!(min.time_interval(), "03:00-04:00");
    assert_eq!(max.time_interval(), "18:00-19:00");
    assert_eq!(compute_buckets(min.price(), max.price()), vec![0, 16, 32, 48, 64, 80]);

    let chart = render(&series, &AppConfig::default().chart).unwrap();
    let rows: Vec<&str> = chart.lines().collect();
    // Six gridlines, the axis and the ruler.
    assert_eq!(rows.len(), 8);
    assert!(rows[0].starts_with("  80|"));
    assert_eq!(rows[0].matches(" x ").count(), 2);
    assert_eq!(rows[5].matches(" x ").count(), 24);
}

#[test]
fn test_absent_series_everywhere() {
    let series = PriceSeries::default();
    assert_eq!(render(&series, &AppConfig::default().chart), Err(PriceError::NoDataAvailable));
    assert_eq!(series.average(), Err(PriceError::NoDataAvailable));
}

#[tokio::test]
async fn test_full_session_with_custom_config() {
    let cfg = AppConfig::from_yaml("currency: EUR\nenergy_unit: MWh\nchart:\n  marker: \"*\"\n").unwrap();

    let prices: String = spread_prices().iter().map(|p| format!("{}\n", p)).collect();
    let input = format!("4\n1\n{}2\n4\nE\n", prices);

    let mut shell = Shell::new(input.as_bytes(), Vec::new(), Vec::new(), cfg);
    shell.run().await.unwrap();
    assert!(shell.series().is_populated());

    let (out, err) = shell.into_output();
    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();

    // The first window request came before any data.
    assert_eq!(err.matches("Menyval 1").count(), 1);
    assert!(out.contains("Lägsta pris: \n\t03:00-04:00\n\t0.00 EUR/MWh"));
    assert!(out.contains("  80| "));
    assert!(out.contains(" * "));
    // 50 + 0 + 50 + 50 = 150 beats every other window.
    assert!(out.contains("\n00:00-04:00\nMedelpris: 0.38 EUR\n"));
}
