use chrono::NaiveDate;
use lichviet_core::sexagenary::{
    day_pillar, hour_pillar, month_pillar, year_cycle_index, year_pillar,
};
use lichviet_core::tables::CHI;

#[test]
fn test_sixty_year_period_holds_across_two_centuries() {
    for year in 1900..=2040 {
        assert_eq!(
            year_pillar(year),
            year_pillar(year + 60),
            "pillar drifted at {year}"
        );
    }
}

#[test]
fn test_year_pillar_1990_is_canh_ngo() {
    let idx = year_cycle_index(1990);
    assert_eq!((idx.can, idx.chi), (6, 6));
    assert_eq!(year_pillar(1990).label(), "Canh Ngọ");
}

#[test]
fn test_month_branch_depends_only_on_month() {
    for year in [1950, 1990, 2024, 2100] {
        for month in 1..=12u32 {
            let pillar = month_pillar(year, month);
            assert_eq!(pillar.chi, CHI[(month as usize - 1) % 12]);
        }
    }
}

#[test]
fn test_day_pillar_sixty_day_period() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for offset in 0..120 {
        let a = start + chrono::Duration::days(offset);
        let b = a + chrono::Duration::days(60);
        assert_eq!(day_pillar(a), day_pillar(b));
    }
}

#[test]
fn test_hour_23_is_ty_block() {
    assert_eq!(hour_pillar(23).chi, "Tý");
}

#[test]
fn test_every_hour_maps_into_range() {
    for hour in 0..24 {
        let pillar = hour_pillar(hour);
        assert!(CHI.contains(&pillar.chi));
    }
}
