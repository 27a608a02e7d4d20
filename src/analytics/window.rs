use crate::models::{PricePoint, format_time_interval};

/// Length of the charging window, in hours.
pub const CHARGE_WINDOW_HOURS: usize = 4;

/// The cheapest run of consecutive hours found by [`optimal_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalWindow {
    pub start: usize,
    pub len: usize,
    /// Sum of the window's prices, in minor units.
    pub sum: u64,
}

impl OptimalWindow {
    /// `HH:00-HH:00` covering the whole window.
    pub fn label(&self) -> String {
        format_time_interval(self.start, self.len)
    }

    /// Mean price over the window, in minor units.
    pub fn average(&self) -> f64 {
        self.sum as f64 / self.len as f64
    }
}

/// Finds the `len`-sample window with the smallest sum.
///
/// The first window is summed once; every later sum is derived from the
/// previous one by dropping the sample that leaves and adding the one that
/// enters. The best window only moves on a strictly smaller sum, so the
/// earliest start wins ties.
///
/// Returns `None` when `len` is zero or longer than the input.
pub fn optimal_window(points: &[PricePoint], len: usize) -> Option<OptimalWindow> {
    if len == 0 || len > points.len() {
        return None;
    }

    let price = |i: usize| u64::from(points[i].price());

    let mut current: u64 = (0..len).map(price).sum();
    let mut best = OptimalWindow { start: 0, len, sum: current };

    for start in 1..=(points.len() - len) {
        current = current - price(start - 1) + price(start + len - 1);
        if current < best.sum {
            best.start = start;
            best.sum = current;
        }
    }
    Some(best)
}
