use serde::{Deserialize, Serialize};

/// One cell of the 42-cell month grid. Cells are immutable once built and
/// discarded when the view moves to another month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Solar day-of-month the cell shows (of the previous/next month for
    /// cells outside the current one).
    #[serde(rename = "dayNumber")]
    pub day_number: u32,
    /// Lunar day label of the cell's date, e.g. "Mùng 5".
    #[serde(rename = "lunarDay")]
    pub lunar_day: String,
    /// Branch label cycled over the day-of-month.
    #[serde(rename = "zodiacAnimal")]
    pub zodiac_animal: String,
    #[serde(rename = "isToday")]
    pub is_today: bool,
    #[serde(rename = "isCurrentMonth")]
    pub is_current_month: bool,
}
