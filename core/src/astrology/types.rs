use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Birth moment as supplied by the caller. The engine never mutates it and
/// never interprets `gender` or `birth_place`; they ride along into the
/// reading's storage record. Hour/minute defaulting for callers that omit a
/// birth time happens at the boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub gender: String,
    #[serde(rename = "birthPlace")]
    pub birth_place: Option<String>,
}

/// A complete Four-Pillars reading. Pure derivation of one `BirthInfo`;
/// nothing here is cached between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrologyReading {
    #[serde(rename = "yearPillar")]
    pub year_pillar: String,
    #[serde(rename = "monthPillar")]
    pub month_pillar: String,
    #[serde(rename = "dayPillar")]
    pub day_pillar: String,
    #[serde(rename = "hourPillar")]
    pub hour_pillar: String,
    /// Branch plus animal of the birth year, e.g. "Ngọ (Ngựa)".
    #[serde(rename = "zodiacAnimal")]
    pub zodiac_animal: String,
    /// Destiny element label (Mệnh).
    pub destiny: String,
    pub age: i32,
    pub personality: String,
}
