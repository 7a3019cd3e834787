//! Terminal front-end for poking at the engines: today card, month grid and
//! festivals for a given (or the current) solar date.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};

use lichviet_contracts::{lunar_date_record, SupportedRange};
use lichviet_core::calendar::build_month_grid;
use lichviet_core::festivals::festivals_in_month;
use lichviet_core::lunar::{to_lunar, today_summary};

fn main() -> Result<()> {
    env_logger::init();

    let today = Local::now().date_naive();
    let target = match std::env::args().nth(1) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("unusable date argument {raw:?}, expected YYYY-MM-DD"))?,
        None => today,
    };
    log::debug!("rendering {target}");

    let card = today_summary(target);
    println!("Ngày {}", card.solar_date);
    println!("  Âm lịch:   {}", card.lunar_date);
    println!("  Can Chi:   {}", card.can_chi);
    println!("  Cung:      {}", card.zodiac_sign);
    println!("  Giờ tốt:   {}", card.lucky_hours);

    // The record the lunar-dates endpoint would serve for the same day.
    let record = lunar_date_record(&target.format("%Y-%m-%d").to_string(), &SupportedRange::default())?;
    println!("  Con giáp:  {}", record.zodiac);

    println!();
    print_month_grid(target, today);

    let lunar_month = to_lunar(target).lunar_month;
    let festivals = festivals_in_month(lunar_month);
    if !festivals.is_empty() {
        println!();
        println!("Lễ hội tháng {} âm lịch:", lunar_month);
        for festival in festivals {
            println!(
                "  {:02}/{:02}  {}: {}",
                festival.lunar_day, festival.lunar_month, festival.name, festival.description
            );
        }
    }

    Ok(())
}

fn print_month_grid(target: NaiveDate, today: NaiveDate) {
    println!("Tháng {}/{}", target.month(), target.year());
    println!("  CN  T2  T3  T4  T5  T6  T7");
    for week in build_month_grid(target, today).chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if cell.is_today {
                    format!("[{:>2}]", cell.day_number)
                } else if cell.is_current_month {
                    format!(" {:>2} ", cell.day_number)
                } else {
                    format!(" {:>2}.", cell.day_number)
                }
            })
            .collect();
        println!("{}", row.join(""));
    }
}
