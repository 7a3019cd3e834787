//! Month-grid construction.
//!
//! A month view is always 6 weeks of 7 cells: the tail of the previous
//! month down to the Sunday column, the whole current month, and enough of
//! the next month to reach 42 cells. Each cell is annotated from its actual
//! solar date, so grids spanning a year boundary pick up the neighbouring
//! year's lunar values.

use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::types::CalendarDay;
use crate::lunar::to_lunar;
use crate::tables::CHI;

/// 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

/// Build the 42-cell grid for the month containing `target`. `today` marks
/// at most one current-month cell by year/month/day equality.
pub fn build_month_grid(target: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
    let year = target.year();
    let month = target.month();
    let current_days = days_in_month(year, month);
    let starting_weekday = first_of_month(year, month)
        .weekday()
        .num_days_from_sunday();

    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let prev_days = days_in_month(prev_year, prev_month);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for offset in 0..starting_weekday {
        let day = prev_days - starting_weekday + 1 + offset;
        cells.push(adjacent_cell(prev_year, prev_month, day));
    }

    for day in 1..=current_days {
        let date = solar_date(year, month, day);
        cells.push(CalendarDay {
            day_number: day,
            lunar_day: to_lunar(date).day_label,
            // Current-month cells start the branch run at Tý on the 1st;
            // adjacent-month cells are offset by one. Kept as the site has
            // always rendered it.
            zodiac_animal: CHI[((day - 1) % 12) as usize].to_string(),
            is_today: date == today,
            is_current_month: true,
        });
    }

    let trailing = GRID_CELLS - cells.len();
    for day in 1..=trailing as u32 {
        cells.push(adjacent_cell(next_year, next_month, day));
    }

    log::trace!(
        "grid {}-{:02}: {} leading, {} current, {} trailing",
        year,
        month,
        starting_weekday,
        current_days,
        trailing
    );
    cells
}

/// Grid for the month of `target`, with today taken from the system clock.
pub fn build_current_month_grid(target: NaiveDate) -> Vec<CalendarDay> {
    build_month_grid(target, Local::now().date_naive())
}

/// Length of a calendar month, leap-February included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of_month(year, month);
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    (next - first).num_days() as u32
}

fn adjacent_cell(year: i32, month: u32, day: u32) -> CalendarDay {
    CalendarDay {
        day_number: day,
        lunar_day: to_lunar(solar_date(year, month, day)).day_label,
        zodiac_animal: CHI[(day % 12) as usize].to_string(),
        is_today: false,
        is_current_month: false,
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    solar_date(year, month, 1)
}

fn solar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("grid dates stay within the month")
}
