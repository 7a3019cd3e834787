//! Traditional festivals of the lunar year, keyed by lunar day and month.

use serde::{Deserialize, Serialize};

/// (name, lunar day, lunar month, description, nationally observed)
const FESTIVAL_ORDER: &[(&str, u32, u32, &str, bool)] = &[
    (
        "Tết Nguyên Đán",
        1,
        1,
        "Tết cổ truyền Việt Nam, ngày quan trọng nhất trong năm",
        true,
    ),
    ("Tết Hàn Thực", 3, 3, "Lễ tảo mộ và thờ cúng tổ tiên", false),
    ("Phật Đản", 8, 4, "Lễ kỷ niệm ngày sinh của Đức Phật", false),
    ("Tết Đoan Ngọ", 5, 5, "Lễ hội giữa mùa hè, ăn bánh ít", false),
    (
        "Tết Trung Nguyên",
        15,
        7,
        "Lễ cúng cầu siêu cho các linh hồn",
        false,
    ),
    (
        "Tết Trung Thu",
        15,
        8,
        "Lễ hội trung thu với bánh trung thu và đèn lồng",
        true,
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    #[serde(rename = "lunarDay")]
    pub lunar_day: u32,
    #[serde(rename = "lunarMonth")]
    pub lunar_month: u32,
    pub description: String,
    #[serde(rename = "isImportant")]
    pub is_important: bool,
}

fn build_festival_table() -> Vec<Festival> {
    FESTIVAL_ORDER
        .iter()
        .map(|(name, day, month, description, important)| Festival {
            name: name.to_string(),
            lunar_day: *day,
            lunar_month: *month,
            description: description.to_string(),
            is_important: *important,
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref FESTIVALS: Vec<Festival> = build_festival_table();
}

/// Every festival, in lunar-calendar order.
pub fn all_festivals() -> &'static [Festival] {
    &FESTIVALS
}

pub fn festivals_in_month(lunar_month: u32) -> Vec<Festival> {
    FESTIVALS
        .iter()
        .filter(|f| f.lunar_month == lunar_month)
        .cloned()
        .collect()
}

pub fn festival_on(lunar_day: u32, lunar_month: u32) -> Option<&'static Festival> {
    FESTIVALS
        .iter()
        .find(|f| f.lunar_day == lunar_day && f.lunar_month == lunar_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tet_on_first_day() {
        let tet = festival_on(1, 1).expect("Tết is in the table");
        assert_eq!(tet.name, "Tết Nguyên Đán");
        assert!(tet.is_important);
    }

    #[test]
    fn test_no_festival_most_days() {
        assert!(festival_on(2, 1).is_none());
        assert!(festival_on(15, 6).is_none());
    }

    #[test]
    fn test_mid_autumn_month() {
        let in_month = festivals_in_month(8);
        assert_eq!(in_month.len(), 1);
        assert_eq!(in_month[0].name, "Tết Trung Thu");
        assert_eq!(in_month[0].lunar_day, 15);
    }

    #[test]
    fn test_table_complete() {
        assert_eq!(all_festivals().len(), 6);
    }
}
