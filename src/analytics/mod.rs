//! Computations over a day of hourly prices.
//!
//! - `statistics`: average, min/max, ascending order
//! - `window`: cheapest contiguous window (sliding sum)

pub mod statistics;
pub mod window;
