use serde::{Deserialize, Serialize};

/// Full numerology profile for one name and birth date.
///
/// The life-path number may be a master number (11, 22, 33); expression,
/// personality and birthday numbers are always reduced to a single digit.
/// That asymmetry is deliberate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    #[serde(rename = "lifePathNumber")]
    pub life_path_number: u32,
    #[serde(rename = "expressionNumber")]
    pub expression_number: u32,
    #[serde(rename = "personalityNumber")]
    pub personality_number: u32,
    #[serde(rename = "birthdayNumber")]
    pub birthday_number: u32,
    #[serde(rename = "lifePathMeaning")]
    pub life_path_meaning: String,
    #[serde(rename = "expressionMeaning")]
    pub expression_meaning: String,
    #[serde(rename = "personalityMeaning")]
    pub personality_meaning: String,
    /// Deduplicated, ascending.
    #[serde(rename = "luckyNumbers")]
    pub lucky_numbers: Vec<u32>,
    pub challenges: Vec<String>,
    pub opportunities: Vec<String>,
    /// Always contains the life-path number itself.
    #[serde(rename = "compatibleNumbers")]
    pub compatible_numbers: Vec<u32>,
}
