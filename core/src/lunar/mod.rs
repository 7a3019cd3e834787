//! Heuristic solar-to-lunar conversion and the daily summary.

pub mod converter;
pub mod types;

pub use converter::{current_today_summary, to_lunar, today_summary};
pub use types::{LunarSummary, TodaySummary};
