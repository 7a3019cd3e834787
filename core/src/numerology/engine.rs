//! Number reduction and profile assembly.

use chrono::{Datelike, NaiveDate};

use crate::numerology::meanings::{
    compatible_for, list_for, meaning_for, CHALLENGES, CHALLENGES_FALLBACK, EXPRESSION_FALLBACK,
    EXPRESSION_MEANINGS, LIFE_PATH_FALLBACK, LIFE_PATH_MEANINGS, OPPORTUNITIES,
    OPPORTUNITIES_FALLBACK, PERSONALITY_FALLBACK, PERSONALITY_MEANINGS,
};
use crate::numerology::types::NumerologyProfile;
use crate::tables::{is_consonant, letter_value};

/// Fold a number to a single digit by repeated decimal digit sums.
/// Positive input always lands in 1..=9; zero stays zero.
pub fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Digit-sum fold that stops early on the master numbers 11, 22 and 33.
pub fn reduce_to_master_number(mut n: u32) -> u32 {
    while n > 9 && n != 11 && n != 22 && n != 33 {
        n = digit_sum(n);
    }
    n
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum of letter values over every alphabetic character of the name.
/// Characters outside the Vietnamese alphabet contribute nothing.
pub fn letter_sum(full_name: &str) -> u32 {
    full_name
        .chars()
        .flat_map(char::to_uppercase)
        .filter_map(letter_value)
        .sum()
}

/// Sum of letter values over the consonants of the name only.
pub fn consonant_sum(full_name: &str) -> u32 {
    full_name
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|ch| is_consonant(*ch))
        .filter_map(letter_value)
        .sum()
}

/// Build the full profile for a birth date and name.
///
/// The caller is responsible for rejecting names whose letter sum is zero;
/// given such a name this still returns a profile, with zeroed numbers and
/// fallback texts, the way the site behaved.
pub fn calculate_numerology(date: NaiveDate, full_name: &str) -> NumerologyProfile {
    let day = date.day();
    let total = i64::from(day) + i64::from(date.month()) + i64::from(date.year());
    let life_path = reduce_to_master_number(total.max(0) as u32);
    let expression = reduce_to_single_digit(letter_sum(full_name));
    let personality = reduce_to_single_digit(consonant_sum(full_name));

    NumerologyProfile {
        life_path_number: life_path,
        expression_number: expression,
        personality_number: personality,
        birthday_number: reduce_to_single_digit(day),
        life_path_meaning: meaning_for(LIFE_PATH_MEANINGS, life_path, LIFE_PATH_FALLBACK)
            .to_string(),
        expression_meaning: meaning_for(EXPRESSION_MEANINGS, expression, EXPRESSION_FALLBACK)
            .to_string(),
        personality_meaning: meaning_for(PERSONALITY_MEANINGS, personality, PERSONALITY_FALLBACK)
            .to_string(),
        lucky_numbers: lucky_numbers(life_path, expression, personality),
        challenges: list_for(CHALLENGES, life_path, CHALLENGES_FALLBACK),
        opportunities: list_for(OPPORTUNITIES, life_path, OPPORTUNITIES_FALLBACK),
        compatible_numbers: compatible_for(life_path),
    }
}

/// The three core numbers plus three pairwise-derived ones, deduplicated and
/// sorted ascending.
fn lucky_numbers(life_path: u32, expression: u32, personality: u32) -> Vec<u32> {
    let mut numbers = vec![
        life_path,
        expression,
        personality,
        (life_path + expression) % 9 + 1,
        (expression + personality) % 9 + 1,
        (life_path + personality) % 9 + 1,
    ];
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reduce_to_single_digit() {
        assert_eq!(reduce_to_single_digit(0), 0);
        assert_eq!(reduce_to_single_digit(9), 9);
        assert_eq!(reduce_to_single_digit(10), 1);
        assert_eq!(reduce_to_single_digit(2011), 4);
        assert_eq!(reduce_to_single_digit(999), 9); // 27 -> 9
    }

    #[test]
    fn test_reduce_preserves_masters() {
        assert_eq!(reduce_to_master_number(11), 11);
        assert_eq!(reduce_to_master_number(22), 22);
        assert_eq!(reduce_to_master_number(33), 33);
        // 2018 digit-sums to 11 and stops; 2011 passes 4 without touching one.
        assert_eq!(reduce_to_master_number(2018), 11);
        assert_eq!(reduce_to_master_number(2011), 4);
        // 996 -> 24 -> 6: lands under 9 in two steps.
        assert_eq!(reduce_to_master_number(996), 6);
    }

    #[test]
    fn test_life_path_scenario() {
        // 15 + 6 + 1990 = 2011 -> 2+0+1+1 = 4; never touches a master.
        let profile = calculate_numerology(date(1990, 6, 15), "Nguyễn Văn An");
        assert_eq!(profile.life_path_number, 4);
        assert_eq!(profile.birthday_number, 6); // 15 -> 6
    }

    #[test]
    fn test_life_path_master_number() {
        // 16 + 12 + 1990 = 2018 -> 2+0+1+8 = 11, a master: kept as-is.
        let profile = calculate_numerology(date(1990, 12, 16), "Nguyễn Văn An");
        assert_eq!(profile.life_path_number, 11);
        assert_eq!(
            profile.life_path_meaning,
            "Số chủ đạo - Người có trực giác mạnh, nhạy cảm tâm linh và có khả năng truyền cảm hứng đặc biệt."
        );
    }

    #[test]
    fn test_letter_sums() {
        // AN: A=1, N=5.
        assert_eq!(letter_sum("An"), 6);
        // Consonants of "An": just N.
        assert_eq!(consonant_sum("An"), 5);
        // Diacritics map to the base vowel value: Ỹ = 7.
        assert_eq!(letter_sum("ỹ"), 7);
        // Đ is a consonant worth 4.
        assert_eq!(consonant_sum("đỗ"), 4);
        assert_eq!(letter_sum("123 !?"), 0);
    }

    #[test]
    fn test_expression_never_master() {
        // H(8) + Q(8) + D(4) + R(9) = 29. Under the life-path rule 29 would
        // stop at 11; the expression number reduces it all the way to 2.
        assert_eq!(letter_sum("HQDR"), 29);
        let profile = calculate_numerology(date(2000, 1, 1), "HQDR");
        assert_eq!(profile.expression_number, 2);
    }

    #[test]
    fn test_lucky_numbers_sorted_dedup() {
        let profile = calculate_numerology(date(1990, 6, 15), "Nguyễn Văn An");
        let mut sorted = profile.lucky_numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(profile.lucky_numbers, sorted);
        assert!(profile.lucky_numbers.contains(&profile.life_path_number));
    }

    #[test]
    fn test_compatible_contains_self() {
        for key in [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33] {
            assert!(
                compatible_for(key).contains(&key),
                "compatibility table misses {key}"
            );
        }
    }
}
