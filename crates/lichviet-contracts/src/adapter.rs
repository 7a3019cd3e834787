//! Parse, validate, delegate.
//!
//! Every operation here follows the same shape: admit the raw strings and
//! numbers a form or endpoint produced, reject anything the engines are not
//! specified for, then hand a well-formed value to `lichviet_core` and wrap
//! the result in its record type.

use chrono::{Datelike, NaiveDate};

use lichviet_core::astrology::{calculate_reading, BirthInfo};
use lichviet_core::calendar::days_in_month;
use lichviet_core::lunar::to_lunar;
use lichviet_core::numerology::{calculate_numerology, letter_sum, NumerologyProfile};

use crate::error::ContractError;
use crate::records::{
    AstrologyReadingRecord, AstrologyRequest, LunarDateRecord, NumerologyRequest,
};

/// Year window the cycle math is served for. The day-pillar epoch opens the
/// window; the site never renders dates past 2100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedRange {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for SupportedRange {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2100,
        }
    }
}

impl SupportedRange {
    fn admit_year(&self, year: i32) -> Result<(), ContractError> {
        if year < self.min_year || year > self.max_year {
            return Err(ContractError::OutOfSupportedRange {
                field: "year",
                value: i64::from(year),
                min: i64::from(self.min_year),
                max: i64::from(self.max_year),
            });
        }
        Ok(())
    }
}

/// `GET /lunar-dates/{solarDate}` behind a `YYYY-MM-DD` path segment.
pub fn lunar_date_record(
    date_str: &str,
    range: &SupportedRange,
) -> Result<LunarDateRecord, ContractError> {
    let date = parse_solar_date(date_str, range)?;
    Ok(record_for(date))
}

/// `GET /lunar-dates?startDate&endDate`: one record per day, both ends
/// inclusive.
pub fn lunar_date_records(
    start_str: &str,
    end_str: &str,
    range: &SupportedRange,
) -> Result<Vec<LunarDateRecord>, ContractError> {
    let start = parse_solar_date(start_str, range)?;
    let end = parse_solar_date(end_str, range)?;
    if end < start {
        return Err(ContractError::InvalidDateRange { start, end });
    }

    let records: Vec<LunarDateRecord> = start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(record_for)
        .collect();
    log::debug!("lunar range {start}..={end}: {} records", records.len());
    Ok(records)
}

/// `POST /astrology`: validate the request, default a missing birth time to
/// noon, compute the reading against `today`'s year.
pub fn astrology_record(
    request: &AstrologyRequest,
    today: NaiveDate,
    range: &SupportedRange,
) -> Result<AstrologyReadingRecord, ContractError> {
    let date = parse_solar_date(&request.birth_date, range)?;
    let (hour, minute) = match request.birth_time.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_birth_time(raw)?,
        _ => {
            log::debug!("birth time missing, defaulting to 12:00");
            (12, 0)
        }
    };

    let birth = BirthInfo {
        date,
        hour,
        minute,
        gender: request.gender.clone(),
        birth_place: request.birth_place.clone(),
    };
    let reading = calculate_reading(&birth, today.year());

    Ok(AstrologyReadingRecord {
        birth_date: date,
        birth_time: format!("{:02}:{:02}", hour, minute),
        gender: birth.gender,
        birth_place: birth.birth_place,
        year_pillar: reading.year_pillar,
        month_pillar: reading.month_pillar,
        day_pillar: reading.day_pillar,
        hour_pillar: reading.hour_pillar,
        zodiac_animal: reading.zodiac_animal,
        destiny: reading.destiny,
        age: reading.age,
        personality: reading.personality,
    })
}

/// Numerology form handler. A name with no letters in the Vietnamese
/// alphabet sums to zero and is rejected rather than producing a zeroed
/// profile.
pub fn numerology_record(
    request: &NumerologyRequest,
    range: &SupportedRange,
) -> Result<NumerologyProfile, ContractError> {
    let date = admit_date_parts(request.year, request.month, request.day, range)?;
    if letter_sum(&request.full_name) == 0 {
        return Err(ContractError::EmptyName);
    }
    Ok(calculate_numerology(date, &request.full_name))
}

fn record_for(date: NaiveDate) -> LunarDateRecord {
    let summary = to_lunar(date);
    LunarDateRecord {
        solar_date: date,
        lunar_day: summary.lunar_day,
        lunar_month: summary.lunar_month,
        lunar_year: summary.lunar_year,
        can_chi: summary.can_chi,
        zodiac: summary.zodiac_animal,
        is_leap_month: summary.is_leap_month,
    }
}

fn parse_solar_date(raw: &str, range: &SupportedRange) -> Result<NaiveDate, ContractError> {
    let invalid = || ContractError::InvalidDateFormat {
        value: raw.to_string(),
    };

    let mut parts = raw.trim().splitn(3, '-');
    let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;

    admit_date_parts(year, month, day, range)
}

fn admit_date_parts(
    year: i32,
    month: u32,
    day: u32,
    range: &SupportedRange,
) -> Result<NaiveDate, ContractError> {
    range.admit_year(year)?;
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return Err(ContractError::InvalidCalendarDate { year, month, day });
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ContractError::InvalidCalendarDate { year, month, day })
}

fn parse_birth_time(raw: &str) -> Result<(u32, u32), ContractError> {
    let invalid = || ContractError::InvalidTimeFormat {
        value: raw.to_string(),
    };

    let mut parts = raw.trim().splitn(2, ':');
    let hour: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let minute: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;

    if hour > 23 {
        return Err(ContractError::OutOfSupportedRange {
            field: "hour",
            value: i64::from(hour),
            min: 0,
            max: 23,
        });
    }
    if minute > 59 {
        return Err(ContractError::OutOfSupportedRange {
            field: "minute",
            value: i64::from(minute),
            min: 0,
            max: 59,
        });
    }
    Ok((hour, minute))
}
