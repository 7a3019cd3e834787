//! Can-Chi (sexagenary) cycle arithmetic.
//!
//! Stems repeat every 10 steps and branches every 12, so a stem/branch pair
//! repeats with period lcm(10, 12) = 60. Year counting is anchored so that
//! year 4 CE is Giáp Tý (index 0/0), the traditional epoch of the cycle.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tables::{CAN, CHI, ZODIAC_ANIMALS};

/// A stem/branch index pair. Both fields are always the result of modulo
/// reduction and therefore in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleIndex {
    /// Stem index, 0..=9 (0 = Giáp).
    pub can: u8,
    /// Branch index, 0..=11 (0 = Tý).
    pub chi: u8,
}

impl CycleIndex {
    /// Reduce arbitrary cycle counters into the 10- and 12-step ranges.
    /// Negative counters wrap backwards through the cycle.
    pub fn from_counters(can: i64, chi: i64) -> Self {
        Self {
            can: can.rem_euclid(10) as u8,
            chi: chi.rem_euclid(12) as u8,
        }
    }

    pub fn pillar(self) -> Pillar {
        Pillar {
            can: CAN[self.can as usize],
            chi: CHI[self.chi as usize],
        }
    }

    /// Animal name for the branch half of the pair.
    pub fn animal(self) -> &'static str {
        ZODIAC_ANIMALS[self.chi as usize]
    }
}

/// A named Can-Chi pair, e.g. "Canh Ngọ".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub can: &'static str,
    pub chi: &'static str,
}

impl Pillar {
    pub fn label(&self) -> String {
        format!("{} {}", self.can, self.chi)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.can, self.chi)
    }
}

/// Cycle indices of a calendar year: `(year - 4) mod 10 / mod 12`.
pub fn year_cycle_index(year: i32) -> CycleIndex {
    let anchored = i64::from(year) - 4;
    CycleIndex::from_counters(anchored, anchored)
}

pub fn year_pillar(year: i32) -> Pillar {
    year_cycle_index(year).pillar()
}

/// Month pillar. The branch is fixed by the month alone; the stem walks the
/// 10-cycle with the year. Solar-term month boundaries are ignored, so this
/// is deterministic but not astronomically exact.
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let can = (i64::from(year) - 4) * 12 + i64::from(month) - 1;
    CycleIndex::from_counters(can, i64::from(month) - 1).pillar()
}

/// Day pillar from the count of days elapsed since 1900-01-01.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let days = (date - day_epoch()).num_days();
    CycleIndex::from_counters(days, days).pillar()
}

/// Hour pillar over the 12 traditional two-hour blocks. 23:00 opens the Tý
/// block, so both 23:00 and 00:00 land on branch 0.
///
/// The stem is taken from the clock hour directly; the authentic rule would
/// derive it from the day pillar's stem.
pub fn hour_pillar(hour: u32) -> Pillar {
    let chi = (i64::from(hour) + 1) / 2;
    let can = i64::from(hour) / 2;
    CycleIndex::from_counters(can, chi).pillar()
}

fn day_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("1900-01-01 is a valid date")
}
