//! Static reference tables: stems, branches, zodiac names, destiny and
//! personality lookups, and the Vietnamese numerology alphabet.
//!
//! All of this is immutable configuration. The const arrays are the source of
//! truth; the letter-value map is built once on first use and shared
//! read-only afterwards, so concurrent callers need no synchronization.

use std::collections::HashMap;

/// The 10 Celestial Stems (Thiên Can), index 0 = Giáp.
pub const CAN: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

/// The 12 Terrestrial Branches (Địa Chi), index 0 = Tý.
pub const CHI: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Animal names paired with the 12 branches (Tý = Chuột .. Hợi = Heo).
pub const ZODIAC_ANIMALS: [&str; 12] = [
    "Chuột", "Trâu", "Hổ", "Mèo", "Rồng", "Rắn", "Ngựa", "Dê", "Khỉ", "Gà", "Chó", "Heo",
];

/// Western zodiac sign names, indexed by `solar_month % 12` (0 = Ma Kết).
pub const ZODIAC_SIGNS: [&str; 12] = [
    "Ma Kết",
    "Bảo Bình",
    "Song Ngư",
    "Bạch Dương",
    "Kim Ngưu",
    "Song Tử",
    "Cự Giải",
    "Sư Tử",
    "Xử Nữ",
    "Thiên Bình",
    "Bọ Cạp",
    "Nhân Mã",
];

/// Destiny (Mệnh) labels indexed by `year % 12`.
///
/// The traditional Nạp Âm cycle has 60 entries (5 elements over 12 branch
/// pairs); this 12-entry table collides for years sharing `year % 12` and is
/// kept that way for parity with the site it backs.
pub const DESTINIES: [&str; 12] = [
    "Hải Trung Kim",
    "Lộ Bàng Thổ",
    "Đại Khê Thủy",
    "Lư Trung Hỏa",
    "Đại Lâm Mộc",
    "Lộ Bàng Thổ",
    "Kiếm Phong Kim",
    "Sơn Đầu Hỏa",
    "Bình Địa Mộc",
    "Bích Thượng Thổ",
    "Kim Bạch Kim",
    "Phúc Đăng Hỏa",
];

/// Personality traits keyed by branch name. Covers all 12 branches.
pub const PERSONALITY_TRAITS: &[(&str, &str)] = &[
    ("Tý", "Thông minh, linh hoạt, có khả năng thích nghi tốt"),
    ("Sửu", "Chăm chỉ, kiên nhẫn, có trách nhiệm"),
    ("Dần", "Can đảm, quyết đoán, có khả năng lãnh đạo"),
    ("Mão", "Nhạy cảm, tận tâm, có tính nghệ thuật"),
    ("Thìn", "Năng động, thích tự do và phiêu lưu"),
    ("Tỵ", "Thông thái, bí ẩn, có trực giác tốt"),
    ("Ngọ", "Năng động, thích tự do và phiêu lưu"),
    ("Mùi", "Hiền lành, sáng tạo, yêu thích nghệ thuật"),
    ("Thân", "Thông minh, tò mò, thích khám phá"),
    ("Dậu", "Cẩn thận, có tổ chức, thích sự hoàn hảo"),
    ("Tuất", "Trung thành, đáng tin cậy, có lòng nhân ái"),
    ("Hợi", "Chân thành, hào phóng, yêu thích hòa bình"),
];

pub const PERSONALITY_FALLBACK: &str = "Có tính cách độc đáo và thú vị";

/// Almanac blurbs cycled by `(month + day) % 4`. Cosmetic text, not an
/// ephemeris lookup.
pub const DATE_DESCRIPTIONS: [&str; 4] = [
    "Ngày này thuộc tuần lễ Đại Tuyết, thời tiết trở lạnh. Phù hợp cho việc cúng tế tổ tiên và làm việc nhà.",
    "Ngày đẹp cho việc khởi công xây dựng và giao dịch kinh doanh.",
    "Thích hợp cho việc cưới hỏi và tổ chức lễ hội.",
    "Ngày tốt để du lịch và gặp gỡ bạn bè.",
];

/// Letter values over the Vietnamese alphabet, diacritic forms included.
/// Keys are upper-case.
const LETTER_VALUES: &[(char, u32)] = &[
    ('A', 1),
    ('Á', 1),
    ('À', 1),
    ('Ả', 1),
    ('Ã', 1),
    ('Ạ', 1),
    ('Ă', 1),
    ('Ắ', 1),
    ('Ằ', 1),
    ('Ẳ', 1),
    ('Ẵ', 1),
    ('Ặ', 1),
    ('Â', 1),
    ('Ấ', 1),
    ('Ầ', 1),
    ('Ẩ', 1),
    ('Ẫ', 1),
    ('Ậ', 1),
    ('B', 2),
    ('C', 3),
    ('D', 4),
    ('Đ', 4),
    ('E', 5),
    ('É', 5),
    ('È', 5),
    ('Ẻ', 5),
    ('Ẽ', 5),
    ('Ẹ', 5),
    ('Ê', 5),
    ('Ế', 5),
    ('Ề', 5),
    ('Ể', 5),
    ('Ễ', 5),
    ('Ệ', 5),
    ('F', 6),
    ('G', 7),
    ('H', 8),
    ('I', 9),
    ('Í', 9),
    ('Ì', 9),
    ('Ỉ', 9),
    ('Ĩ', 9),
    ('Ị', 9),
    ('J', 1),
    ('K', 2),
    ('L', 3),
    ('M', 4),
    ('N', 5),
    ('O', 6),
    ('Ó', 6),
    ('Ò', 6),
    ('Ỏ', 6),
    ('Õ', 6),
    ('Ọ', 6),
    ('Ô', 6),
    ('Ố', 6),
    ('Ồ', 6),
    ('Ổ', 6),
    ('Ỗ', 6),
    ('Ộ', 6),
    ('Ơ', 6),
    ('Ớ', 6),
    ('Ờ', 6),
    ('Ở', 6),
    ('Ỡ', 6),
    ('Ợ', 6),
    ('P', 7),
    ('Q', 8),
    ('R', 9),
    ('S', 1),
    ('T', 2),
    ('U', 3),
    ('Ú', 3),
    ('Ù', 3),
    ('Ủ', 3),
    ('Ũ', 3),
    ('Ụ', 3),
    ('Ư', 3),
    ('Ứ', 3),
    ('Ừ', 3),
    ('Ử', 3),
    ('Ữ', 3),
    ('Ự', 3),
    ('V', 4),
    ('W', 5),
    ('X', 6),
    ('Y', 7),
    ('Ý', 7),
    ('Ỳ', 7),
    ('Ỷ', 7),
    ('Ỹ', 7),
    ('Ỵ', 7),
    ('Z', 8),
];

/// Consonants for the personality-number sum. Đ is the only Vietnamese
/// consonant written with a mark, so membership is checked on the letter
/// itself.
pub const CONSONANTS: [char; 22] = [
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'X', 'Y', 'Z', 'Đ',
];

lazy_static::lazy_static! {
    static ref LETTER_VALUE_MAP: HashMap<char, u32> = LETTER_VALUES.iter().copied().collect();
}

/// Numerology value of an upper-cased letter; `None` for anything outside
/// the alphabet (digits, spaces, punctuation).
pub fn letter_value(ch: char) -> Option<u32> {
    LETTER_VALUE_MAP.get(&ch).copied()
}

pub fn is_consonant(ch: char) -> bool {
    CONSONANTS.contains(&ch)
}

/// Personality text for a branch name, with the generic fallback for
/// anything the table does not cover.
pub fn personality_trait(chi_name: &str) -> &'static str {
    PERSONALITY_TRAITS
        .iter()
        .find(|(chi, _)| *chi == chi_name)
        .map(|(_, trait_text)| *trait_text)
        .unwrap_or(PERSONALITY_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CAN.len(), 10);
        assert_eq!(CHI.len(), 12);
        assert_eq!(ZODIAC_ANIMALS.len(), 12);
        assert_eq!(ZODIAC_SIGNS.len(), 12);
        assert_eq!(DESTINIES.len(), 12);
        assert_eq!(PERSONALITY_TRAITS.len(), 12);
    }

    #[test]
    fn test_personality_covers_every_branch() {
        for chi in CHI {
            assert_ne!(personality_trait(chi), PERSONALITY_FALLBACK, "no trait for {chi}");
        }
    }

    #[test]
    fn test_personality_fallback() {
        assert_eq!(personality_trait("Khỉ Gió"), PERSONALITY_FALLBACK);
    }

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value('A'), Some(1));
        assert_eq!(letter_value('Ặ'), Some(1));
        assert_eq!(letter_value('Đ'), Some(4));
        assert_eq!(letter_value('Ỹ'), Some(7));
        assert_eq!(letter_value('Z'), Some(8));
        assert_eq!(letter_value('5'), None);
        assert_eq!(letter_value(' '), None);
    }

    #[test]
    fn test_consonant_set() {
        assert!(is_consonant('B'));
        assert!(is_consonant('Đ'));
        assert!(!is_consonant('A'));
        assert!(!is_consonant('Ê'));
    }
}
