use chrono::NaiveDate;
use lichviet_core::astrology::{calculate_reading, BirthInfo};

fn birth(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> BirthInfo {
    BirthInfo {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        hour,
        minute,
        gender: "male".to_string(),
        birth_place: Some("Hà Nội".to_string()),
    }
}

#[test]
fn test_full_reading_for_1990() {
    let reading = calculate_reading(&birth(1990, 6, 15, 14, 30), 2026);
    assert_eq!(reading.year_pillar, "Canh Ngọ");
    assert_eq!(reading.zodiac_animal, "Ngọ (Ngựa)");
    assert_eq!(reading.destiny, "Kim Bạch Kim");
    assert_eq!(reading.age, 36);
    assert!(!reading.personality.is_empty());
}

#[test]
fn test_reading_is_pure() {
    let info = birth(1975, 11, 2, 6, 0);
    assert_eq!(calculate_reading(&info, 2026), calculate_reading(&info, 2026));
}

#[test]
fn test_hour_pillar_defaulted_noon() {
    // Callers that omit the birth time default it to 12:00 before building
    // BirthInfo; noon sits in the Ngọ block.
    let reading = calculate_reading(&birth(1990, 6, 15, 12, 0), 2026);
    assert!(reading.hour_pillar.ends_with("Ngọ"));
}

#[test]
fn test_serialized_field_names() {
    let reading = calculate_reading(&birth(1990, 6, 15, 14, 30), 2026);
    let value = serde_json::to_value(&reading).unwrap();
    for field in [
        "yearPillar",
        "monthPillar",
        "dayPillar",
        "hourPillar",
        "zodiacAnimal",
        "destiny",
        "age",
        "personality",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
}
