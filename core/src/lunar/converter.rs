//! The solar-to-lunar heuristic.
//!
//! This is not a real lunisolar conversion: there are no new-moon tables and
//! no leap-month insertion. The lunar month is approximated by slicing the
//! solar year into 29.5-day segments, which the site this engine backs relies
//! on verbatim. Late in December the approximation runs past month 12 and is
//! rendered as "Tháng 13"; that overflow is part of the contract.

use chrono::{Datelike, Local, NaiveDate};

use crate::lunar::types::{LunarSummary, TodaySummary};
use crate::sexagenary::{year_pillar, CycleIndex};
use crate::tables::{DATE_DESCRIPTIONS, ZODIAC_SIGNS};

/// Mean synodic month, in days.
const LUNAR_MONTH_DAYS: f64 = 29.5;

/// Auspicious-hours text shown on the today card.
const LUCKY_HOURS: &str = "Tý, Dần, Mão";

/// Convert a solar date into its lunar summary.
pub fn to_lunar(date: NaiveDate) -> LunarSummary {
    let day_of_year = i64::from(date.ordinal0());
    let lunar_month = (day_of_year as f64 / LUNAR_MONTH_DAYS).floor() as u32 + 1;
    let lunar_day = (day_of_year % 30) as u32 + 1;

    // Day-level Can-Chi surrogate. This composite index is deliberately a
    // different derivation from the astrology day pillar; both exist in the
    // site and disagree with each other.
    let composite =
        i64::from(date.year()) * 12 + i64::from(date.month()) + i64::from(date.day());
    let cycle = CycleIndex::from_counters(composite, composite);

    let year_name = year_pillar(date.year()).label();

    LunarSummary {
        lunar_day,
        lunar_month,
        lunar_year: date.year(),
        day_label: day_label(lunar_day),
        month_label: format!("Tháng {} Năm {}", lunar_month, year_name),
        lunar_year_name: year_name,
        can_chi: cycle.pillar().label(),
        zodiac_sign: ZODIAC_SIGNS[(date.month() % 12) as usize].to_string(),
        zodiac_animal: format!("{} ({})", cycle.pillar().chi, cycle.animal()),
        season: season(date.month()).to_string(),
        description: date_description(date.month(), date.day()).to_string(),
        is_leap_month: false,
    }
}

/// Lunar days up to the 15th are prefixed "Mùng".
pub fn day_label(lunar_day: u32) -> String {
    if lunar_day <= 15 {
        format!("Mùng {}", lunar_day)
    } else {
        lunar_day.to_string()
    }
}

/// Solar-term season bucket for a solar month.
pub fn season(month: u32) -> &'static str {
    match month {
        12 | 1 | 2 => "Đông Chí",
        3..=5 => "Xuân Phân",
        6..=8 => "Hạ Chí",
        _ => "Thu Phân",
    }
}

pub fn date_description(month: u32, day: u32) -> &'static str {
    DATE_DESCRIPTIONS[((month + day) % DATE_DESCRIPTIONS.len() as u32) as usize]
}

/// Today card for an explicit date.
pub fn today_summary(today: NaiveDate) -> TodaySummary {
    let lunar = to_lunar(today);
    TodaySummary {
        solar_date: format!(
            "{:02}/{:02}/{}",
            today.day(),
            today.month(),
            today.year()
        ),
        lunar_date: format!("{} {}", lunar.day_label, lunar.month_label),
        can_chi: lunar.can_chi,
        zodiac_sign: lunar.zodiac_sign,
        lucky_hours: LUCKY_HOURS.to_string(),
    }
}

/// Today card for the system clock.
pub fn current_today_summary() -> TodaySummary {
    today_summary(Local::now().date_naive())
}
