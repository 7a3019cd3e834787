//! Reading assembly: four pillars, zodiac animal, destiny, personality.

use chrono::{Datelike, Local};

use crate::astrology::types::{AstrologyReading, BirthInfo};
use crate::sexagenary::{day_pillar, hour_pillar, month_pillar, year_cycle_index, year_pillar};
use crate::tables::{personality_trait, DESTINIES};

/// Derive the full reading for a birth moment. `current_year` feeds only the
/// age; everything else depends on the birth data alone.
pub fn calculate_reading(birth: &BirthInfo, current_year: i32) -> AstrologyReading {
    let year = birth.date.year();
    let cycle = year_cycle_index(year);
    let chi_name = cycle.pillar().chi;

    AstrologyReading {
        year_pillar: year_pillar(year).label(),
        month_pillar: month_pillar(year, birth.date.month()).label(),
        day_pillar: day_pillar(birth.date).label(),
        hour_pillar: hour_pillar(birth.hour).label(),
        zodiac_animal: format!("{} ({})", chi_name, cycle.animal()),
        destiny: DESTINIES[year.rem_euclid(12) as usize].to_string(),
        age: current_year - year,
        personality: personality_trait(chi_name).to_string(),
    }
}

/// Reading with the age taken against the system clock's year.
pub fn calculate_reading_now(birth: &BirthInfo) -> AstrologyReading {
    calculate_reading(birth, Local::now().year())
}
