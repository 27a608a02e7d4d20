//! Hourly price samples.
//!
//! Prices are stored in minor currency units (öre), labels as `HH:MM-HH:MM`.

/// Number of hourly slots in one day.
pub const HOURS_PER_DAY: usize = 24;

/// One hour's price paired with its time-interval label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePoint {
    time_interval: String,
    price: u32,
}

impl PricePoint {
    pub fn new(time_interval: impl Into<String>, price: u32) -> Self {
        Self {
            time_interval: time_interval.into(),
            price,
        }
    }

    /// Creates the sample for hour `hour` with the default one-hour label.
    pub fn for_hour(hour: usize, price: u32) -> Self {
        Self::new(format_time_interval(hour, 1), price)
    }

    pub fn time_interval(&self) -> &str {
        &self.time_interval
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

/// Formats `[start_hour, start_hour + span_hours)` as `HH:00-HH:00`.
///
/// Both ends are taken modulo 24, so a span crossing midnight reads
/// `23:00-03:00`.
pub fn format_time_interval(start_hour: usize, span_hours: usize) -> String {
    let from = start_hour % HOURS_PER_DAY;
    let to = (start_hour + span_hours) % HOURS_PER_DAY;
    format!("{:02}:00-{:02}:00", from, to)
}
