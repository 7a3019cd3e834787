use serde::{Deserialize, Serialize};

/// Lunar rendering of one solar date, plus the almanac texts shown with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunarSummary {
    #[serde(rename = "lunarDay")]
    pub lunar_day: u32,
    #[serde(rename = "lunarMonth")]
    pub lunar_month: u32,
    #[serde(rename = "lunarYear")]
    pub lunar_year: i32,
    /// Can-Chi name of the lunar year, e.g. "Giáp Thìn".
    #[serde(rename = "lunarYearName")]
    pub lunar_year_name: String,
    /// Display form of the day: "Mùng 5" up to the 15th, plain "23" after.
    #[serde(rename = "dayLabel")]
    pub day_label: String,
    /// Display form of the month: "Tháng 7 Năm Giáp Thìn".
    #[serde(rename = "monthLabel")]
    pub month_label: String,
    /// Day-level Can-Chi surrogate (distinct from the astrology day pillar).
    #[serde(rename = "canChi")]
    pub can_chi: String,
    #[serde(rename = "zodiacSign")]
    pub zodiac_sign: String,
    /// Branch plus animal, e.g. "Ngọ (Ngựa)".
    #[serde(rename = "zodiacAnimal")]
    pub zodiac_animal: String,
    pub season: String,
    pub description: String,
    /// Always `false` under the 29.5-day heuristic; carried because the
    /// storage schema records it.
    #[serde(rename = "isLeapMonth")]
    pub is_leap_month: bool,
}

/// Compact "today" card for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodaySummary {
    /// Solar date in the vi-VN day-first form, e.g. "05/08/2026".
    #[serde(rename = "solarDate")]
    pub solar_date: String,
    #[serde(rename = "lunarDate")]
    pub lunar_date: String,
    #[serde(rename = "canChi")]
    pub can_chi: String,
    #[serde(rename = "zodiacSign")]
    pub zodiac_sign: String,
    #[serde(rename = "luckyHours")]
    pub lucky_hours: String,
}
