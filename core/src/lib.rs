//! Pure calculation engines behind the lunar-calendar site: Can-Chi
//! (sexagenary) cycle arithmetic, the heuristic solar-to-lunar conversion,
//! the 42-cell month grid, Tứ Trụ astrology readings, numerology profiles
//! and the festival table.
//!
//! Every function here is a total, side-effect-free derivation over value
//! inputs; identical inputs always produce identical outputs, so callers may
//! memoize freely and invoke from any number of threads. Validation of
//! caller-supplied data lives in the contracts crate, which admits input
//! before anything in here runs.

pub mod astrology;
pub mod calendar;
pub mod festivals;
pub mod lunar;
pub mod numerology;
pub mod sexagenary;
pub mod tables;

pub use astrology::{calculate_reading, AstrologyReading, BirthInfo};
pub use calendar::{build_month_grid, CalendarDay, GRID_CELLS};
pub use festivals::Festival;
pub use lunar::{to_lunar, today_summary, LunarSummary, TodaySummary};
pub use numerology::{calculate_numerology, NumerologyProfile};
pub use sexagenary::{CycleIndex, Pillar};
