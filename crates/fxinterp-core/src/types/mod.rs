//! Domain types for exchange rate interpolation.

mod axis;
mod date;

pub use axis::{DateAxis, EpochConvention};
pub use date::{Date, DATE_FORMAT};
