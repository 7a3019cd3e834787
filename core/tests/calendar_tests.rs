use chrono::NaiveDate;
use lichviet_core::calendar::{build_month_grid, days_in_month, GRID_CELLS};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_every_month_fills_exactly_42_cells() {
    let today = date(2024, 6, 1);
    for year in 2020..=2030 {
        for month in 1..=12 {
            let grid = build_month_grid(date(year, month, 1), today);
            assert_eq!(grid.len(), GRID_CELLS, "size for {year}-{month:02}");

            let leading = grid.iter().take_while(|c| !c.is_current_month).count();
            let current = grid.iter().filter(|c| c.is_current_month).count();
            let trailing = GRID_CELLS - leading - current;
            assert_eq!(current as u32, days_in_month(year, month));
            assert_eq!(leading + current + trailing, GRID_CELLS);
        }
    }
}

#[test]
fn test_leap_february_keeps_29_current_cells() {
    let grid = build_month_grid(date(2024, 2, 1), date(2024, 6, 1));
    assert_eq!(grid.len(), GRID_CELLS);
    assert_eq!(grid.iter().filter(|c| c.is_current_month).count(), 29);
}

#[test]
fn test_exactly_one_today_cell_when_in_view() {
    let grid = build_month_grid(date(2024, 2, 15), date(2024, 2, 29));
    let todays: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
    assert_eq!(todays.len(), 1);
    assert_eq!(todays[0].day_number, 29);
    assert!(todays[0].is_current_month);
}

#[test]
fn test_no_today_cell_for_other_months() {
    let grid = build_month_grid(date(2024, 5, 1), date(2024, 2, 29));
    assert!(grid.iter().all(|c| !c.is_today));
}

#[test]
fn test_adjacent_cells_never_today() {
    // 2024-03-31 is a Sunday that lands in April's leading row; it must not
    // be flagged as today inside the April view's adjacent cells.
    let grid = build_month_grid(date(2024, 4, 1), date(2024, 3, 31));
    assert!(grid.iter().all(|c| !c.is_today));
}

#[test]
fn test_view_navigation_is_stateless() {
    let today = date(2024, 6, 15);
    let june = build_month_grid(date(2024, 6, 1), today);
    let july = build_month_grid(date(2024, 7, 1), today);
    let june_again = build_month_grid(date(2024, 6, 1), today);
    assert_eq!(june, june_again);
    assert_ne!(june, july);
}
