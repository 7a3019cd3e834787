//! Fixed six-week month grids for the calendar view.

pub mod grid;
pub mod types;

pub use grid::{build_current_month_grid, build_month_grid, days_in_month, GRID_CELLS};
pub use types::CalendarDay;
