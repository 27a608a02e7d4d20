use std::cmp::Ordering;

use crate::models::PricePoint;

/// Arithmetic mean of all prices, in minor units. NaN for an empty slice.
pub fn average(points: &[PricePoint]) -> f64 {
    let total: u64 = points.iter().map(|p| u64::from(p.price())).sum();
    total as f64 / points.len() as f64
}

/// Returns `(min, max)` in one pass.
///
/// Both ends keep the earliest sample on ties: a later sample only replaces
/// the current candidate when it is strictly cheaper (or dearer).
pub fn find_min_max(points: &[PricePoint]) -> Option<(&PricePoint, &PricePoint)> {
    let (first, rest) = points.split_first()?;
    let mut min = first;
    let mut max = first;

    for p in rest {
        if p.price() < min.price() {
            min = p;
        }
        if p.price() > max.price() {
            max = p;
        }
    }
    Some((min, max))
}

/// Orders samples by price, cheapest first.
pub fn by_price(a: &PricePoint, b: &PricePoint) -> Ordering {
    a.price().cmp(&b.price())
}

/// Copy of `points` sorted with [`by_price`]. Stable, so equal prices keep
/// their hour order.
pub fn sorted_ascending(points: &[PricePoint]) -> Vec<PricePoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(by_price);
    sorted
}
