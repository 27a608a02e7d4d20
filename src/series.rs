//! The day's price series and its population.

use crate::analytics::statistics;
use crate::analytics::window::{self, CHARGE_WINDOW_HOURS, OptimalWindow};
use crate::error::PriceError;
use crate::models::{HOURS_PER_DAY, PricePoint, format_time_interval};

/// A day of hourly prices, or nothing yet.
///
/// Index `i` of a populated series covers the hour `[i, i + 1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PriceSeries {
    #[default]
    Absent,
    Populated(Box<[PricePoint; HOURS_PER_DAY]>),
}

impl PriceSeries {
    /// Builds a populated series with one-hour labels.
    pub fn from_prices(prices: [u32; HOURS_PER_DAY]) -> Self {
        let points = std::array::from_fn(|hour| PricePoint::for_hour(hour, prices[hour]));
        PriceSeries::Populated(Box::new(points))
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, PriceSeries::Populated(_))
    }

    /// The 24 samples in hour order.
    pub fn points(&self) -> Result<&[PricePoint; HOURS_PER_DAY], PriceError> {
        match self {
            PriceSeries::Absent => Err(PriceError::NoDataAvailable),
            PriceSeries::Populated(points) => Ok(&**points),
        }
    }

    /// Mean price in minor units.
    pub fn average(&self) -> Result<f64, PriceError> {
        Ok(statistics::average(self.points()?))
    }

    /// Cheapest and dearest hour, earliest first on ties.
    pub fn find_min_max(&self) -> Result<(&PricePoint, &PricePoint), PriceError> {
        statistics::find_min_max(self.points()?).ok_or(PriceError::NoDataAvailable)
    }

    /// A new, stably sorted copy; the series itself keeps hour order.
    pub fn sorted_ascending(&self) -> Result<Vec<PricePoint>, PriceError> {
        Ok(statistics::sorted_ascending(self.points()?))
    }

    /// Cheapest contiguous 4-hour window.
    pub fn optimal_window(&self) -> Result<OptimalWindow, PriceError> {
        window::optimal_window(self.points()?, CHARGE_WINDOW_HOURS).ok_or(PriceError::NoDataAvailable)
    }
}

/// Collects prices slot by slot, 00:00 through 23:00.
#[derive(Debug, Default)]
pub struct SeriesBuilder {
    points: Vec<PricePoint>,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(HOURS_PER_DAY),
        }
    }

    /// Index of the slot the next price fills, if any remain.
    pub fn next_slot(&self) -> Option<usize> {
        let slot = self.points.len();
        (slot < HOURS_PER_DAY).then_some(slot)
    }

    /// Label of the slot the next price fills.
    pub fn next_label(&self) -> Option<String> {
        self.next_slot().map(|slot| format_time_interval(slot, 1))
    }

    /// Fills the next slot. Extra prices past the last slot are ignored.
    pub fn push(&mut self, price: u32) {
        if let Some(slot) = self.next_slot() {
            self.points.push(PricePoint::for_hour(slot, price));
        }
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == HOURS_PER_DAY
    }

    /// The finished series, or `None` while slots are still empty.
    pub fn build(self) -> Option<PriceSeries> {
        let points: [PricePoint; HOURS_PER_DAY] = self.points.try_into().ok()?;
        Some(PriceSeries::Populated(Box::new(points)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> PriceSeries {
        PriceSeries::from_prices(std::array::from_fn(|i| i as u32 * 10 + 10))
    }

    #[test]
    fn test_absent_series_reports_no_data() {
        let series = PriceSeries::default();
        assert!(!series.is_populated());
        assert_eq!(series.average(), Err(PriceError::NoDataAvailable));
        assert_eq!(series.find_min_max().unwrap_err(), PriceError::NoDataAvailable);
        assert_eq!(series.sorted_ascending(), Err(PriceError::NoDataAvailable));
        assert_eq!(series.optimal_window(), Err(PriceError::NoDataAvailable));
    }

    #[test]
    fn test_ramp_scenario() {
        let series = ramp();
        assert!((series.average().unwrap() - 125.0).abs() < 1e-9);

        let (min, max) = series.find_min_max().unwrap();
        assert_eq!((min.time_interval(), min.price()), ("00:00-01:00", 10));
        assert_eq!((max.time_interval(), max.price()), ("23:00-00:00", 240));

        let w = series.optimal_window().unwrap();
        assert_eq!((w.start, w.sum), (0, 100));
    }

    #[test]
    fn test_sorted_copy_is_permutation() {
        let mut prices = [0u32; HOURS_PER_DAY];
        for (i, p) in prices.iter_mut().enumerate() {
            *p = ((i * 7) % 5) as u32;
        }
        let series = PriceSeries::from_prices(prices);
        let sorted = series.sorted_ascending().unwrap();

        assert_eq!(sorted.len(), HOURS_PER_DAY);
        assert!(sorted.windows(2).all(|w| w[0].price() <= w[1].price()));

        let mut original = series.points().unwrap().to_vec();
        let mut resorted = sorted.clone();
        original.sort_by(|a, b| a.time_interval().cmp(b.time_interval()));
        resorted.sort_by(|a, b| a.time_interval().cmp(b.time_interval()));
        assert_eq!(original, resorted);

        // Hour order survives.
        assert_eq!(series.points().unwrap()[1].time_interval(), "01:00-02:00");
    }

    #[test]
    fn test_builder_fills_slots_in_order() {
        let mut builder = SeriesBuilder::new();
        assert_eq!(builder.next_label().as_deref(), Some("00:00-01:00"));

        for i in 0..HOURS_PER_DAY {
            assert_eq!(builder.next_slot(), Some(i));
            builder.push(i as u32 * 10 + 10);
        }
        assert!(builder.is_complete());
        assert_eq!(builder.next_slot(), None);
        assert_eq!(builder.next_label(), None);

        assert_eq!(builder.build(), Some(ramp()));
    }

    #[test]
    fn test_incomplete_builder_builds_nothing() {
        let mut builder = SeriesBuilder::new();
        builder.push(5);
        assert!(!builder.is_complete());
        assert_eq!(builder.build(), None);
    }
}
