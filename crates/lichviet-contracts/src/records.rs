//! JSON shapes exchanged with the site's endpoints and storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored/served lunar date, the `GET /lunar-dates/{solarDate}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDateRecord {
    #[serde(rename = "solarDate")]
    pub solar_date: NaiveDate,
    #[serde(rename = "lunarDay")]
    pub lunar_day: u32,
    #[serde(rename = "lunarMonth")]
    pub lunar_month: u32,
    #[serde(rename = "lunarYear")]
    pub lunar_year: i32,
    #[serde(rename = "canChi")]
    pub can_chi: String,
    pub zodiac: String,
    #[serde(rename = "isLeapMonth")]
    pub is_leap_month: bool,
}

/// Body of `POST /astrology`. `birthTime` is optional; a missing or blank
/// value is defaulted to noon before the reading is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrologyRequest {
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    #[serde(rename = "birthTime", default)]
    pub birth_time: Option<String>,
    pub gender: String,
    #[serde(rename = "birthPlace", default)]
    pub birth_place: Option<String>,
}

/// A reading ready for storage: the validated request echoed back plus the
/// derived values. Identifiers are assigned by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrologyReadingRecord {
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    #[serde(rename = "birthTime")]
    pub birth_time: String,
    pub gender: String,
    #[serde(rename = "birthPlace")]
    pub birth_place: Option<String>,
    #[serde(rename = "yearPillar")]
    pub year_pillar: String,
    #[serde(rename = "monthPillar")]
    pub month_pillar: String,
    #[serde(rename = "dayPillar")]
    pub day_pillar: String,
    #[serde(rename = "hourPillar")]
    pub hour_pillar: String,
    #[serde(rename = "zodiacAnimal")]
    pub zodiac_animal: String,
    pub destiny: String,
    pub age: i32,
    pub personality: String,
}

/// Body of the numerology calculator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyRequest {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    #[serde(rename = "fullName")]
    pub full_name: String,
}
