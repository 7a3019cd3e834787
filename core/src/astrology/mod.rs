//! Tứ Trụ (Four Pillars) readings.

pub mod reading;
pub mod types;

pub use reading::{calculate_reading, calculate_reading_now};
pub use types::{AstrologyReading, BirthInfo};
