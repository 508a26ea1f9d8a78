//! Demo data fixtures.
//!
//! # Responsibility
//! - Produce the fixed example collections appended by the demo-data
//!   action.
//!
//! # Invariants
//! - Output is deterministic: fixed ids, fixed dates, no randomness, no
//!   I/O.

use crate::model::daily::DailyEntry;
use crate::model::expense::Expense;
use crate::model::gear::GearItem;
use crate::model::journal::JournalEntry;
use crate::model::utc_day_start;
use chrono::{DateTime, NaiveDate, Utc};

/// The four fixture collections.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    pub daily_entries: Vec<DailyEntry>,
    pub journal_entries: Vec<JournalEntry>,
    pub expenses: Vec<Expense>,
    pub gear: Vec<GearItem>,
}

fn day(year: i32, month: u32, dom: u32) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(year, month, dom).expect("valid demo date");
    utc_day_start(date)
}

#[allow(clippy::too_many_arguments)]
fn demo_day(
    id: &str,
    date: DateTime<Utc>,
    start_location: &str,
    end_location: &str,
    miles: f64,
    start_time: &str,
    end_time: &str,
    break_time: i64,
    elevation_gain: f64,
    elevation_loss: f64,
    final_elevation: f64,
    sleep_quality: i64,
    weather: &str,
    is_raining: bool,
    has_trail_magic: bool,
    notes: &str,
) -> DailyEntry {
    DailyEntry {
        id: id.to_string(),
        date,
        section: 1,
        start_location: start_location.to_string(),
        end_location: end_location.to_string(),
        miles,
        start_time: Some(start_time.to_string()),
        end_time: Some(end_time.to_string()),
        break_time: Some(break_time),
        elevation_gain: Some(elevation_gain),
        elevation_loss: Some(elevation_loss),
        final_elevation: Some(final_elevation),
        sleep_quality: Some(sleep_quality),
        weather: Some(weather.to_string()),
        is_raining: Some(is_raining),
        has_trail_magic: Some(has_trail_magic),
        notes: Some(notes.to_string()),
    }
}

fn demo_journal(id: &str, date: DateTime<Utc>, content: &str, hashtags: &[&str]) -> JournalEntry {
    JournalEntry {
        id: id.to_string(),
        date,
        content: content.to_string(),
        hashtags: Some(hashtags.iter().map(|tag| tag.to_string()).collect()),
        photos: None,
    }
}

fn demo_expense(
    id: &str,
    date: DateTime<Utc>,
    category: &str,
    amount: f64,
    description: &str,
) -> Expense {
    Expense {
        id: id.to_string(),
        date,
        category: category.to_string(),
        amount,
        description: Some(description.to_string()),
    }
}

fn demo_gear(id: &str, date: DateTime<Utc>, name: &str, category: &str, price: f64, weight: f64) -> GearItem {
    GearItem {
        id: id.to_string(),
        date,
        name: name.to_string(),
        category: category.to_string(),
        price,
        weight: Some(weight),
    }
}

/// Builds the demo fixture set: one example week on the Appalachian
/// Trail plus matching expenses and a starter gear list.
pub fn demo_collections() -> DemoData {
    let daily_entries = vec![
        demo_day(
            "1",
            day(2024, 6, 10),
            "Springer Mountain Shelter",
            "Hawk Mountain Shelter",
            7.8,
            "07:30",
            "16:45",
            60,
            2100.0,
            1850.0,
            3450.0,
            3,
            "Partly cloudy, 68F",
            false,
            false,
            "First day on the trail. Met some great hikers at the shelter.",
        ),
        demo_day(
            "2",
            day(2024, 6, 11),
            "Hawk Mountain Shelter",
            "Gooch Mountain Shelter",
            12.3,
            "06:45",
            "17:20",
            75,
            2850.0,
            2600.0,
            2900.0,
            4,
            "Sunny, 72F",
            false,
            true,
            "Trail magic at Woody Gap, fresh fruit and cold drinks.",
        ),
        demo_day(
            "3",
            day(2024, 6, 12),
            "Gooch Mountain Shelter",
            "Neels Gap",
            15.2,
            "06:30",
            "18:00",
            90,
            3200.0,
            2900.0,
            3125.0,
            5,
            "Clear skies, 75F",
            false,
            false,
            "Blood Mountain summit, then resupply at Mountain Crossings.",
        ),
        demo_day(
            "4",
            day(2024, 6, 13),
            "Neels Gap",
            "Low Gap Shelter",
            9.5,
            "08:00",
            "16:30",
            60,
            1800.0,
            2100.0,
            3050.0,
            4,
            "Overcast, 70F",
            false,
            false,
            "Nero day after the town stop to let blisters recover.",
        ),
        demo_day(
            "5",
            day(2024, 6, 14),
            "Low Gap Shelter",
            "Blue Mountain Shelter",
            13.8,
            "07:00",
            "17:45",
            80,
            2650.0,
            2400.0,
            3350.0,
            3,
            "Foggy morning, 65F",
            true,
            false,
            "Rain from noon on. Everything is wet but the pace held.",
        ),
        demo_day(
            "6",
            day(2024, 6, 15),
            "Blue Mountain Shelter",
            "Unicoi Gap",
            11.2,
            "07:15",
            "16:00",
            70,
            2100.0,
            2800.0,
            2450.0,
            4,
            "Clearing up, 68F",
            false,
            true,
            "Hot dogs and lemonade from a church group at the gap.",
        ),
        demo_day(
            "7",
            day(2024, 6, 16),
            "Unicoi Gap",
            "Tray Mountain Shelter",
            14.5,
            "06:45",
            "18:15",
            85,
            3400.0,
            2650.0,
            3850.0,
            5,
            "Perfect hiking weather, 70F",
            false,
            false,
            "Week one complete, 84 miles down. Sunset from Tray Mountain.",
        ),
    ];

    let journal_entries = vec![
        demo_journal(
            "1",
            day(2024, 6, 10),
            "Day 1 on the Appalachian Trail. After months of planning the \
             first climb out of Springer finally made it real.",
            &["AppalachianTrail", "ThruHike2024", "HikeYourOwnHike", "Day1", "Georgia"],
        ),
        demo_journal(
            "2",
            day(2024, 6, 11),
            "Trail magic already: cold drinks and fresh strawberries at \
             Woody Gap from a couple who thru-hiked in 1998.",
            &["TrailMagic", "AppalachianTrail", "ThruHike", "Grateful", "HYOH"],
        ),
        demo_journal(
            "3",
            day(2024, 6, 12),
            "Blood Mountain summit, then a pack shakedown at Mountain \
             Crossings. Three pounds lighter and sleeping in a real bed.",
            &["BloodMountain", "NeelsGap", "PackShakedown", "ATMilestone", "Georgia"],
        ),
        demo_journal(
            "4",
            day(2024, 6, 13),
            "Nero day. Blisters needed the break and the rhododendron \
             tunnels made slowing down easy.",
            &["NeroDay", "RestDay", "Rhododendrons", "TrailPhilosophy", "ListenToYourBody"],
        ),
        demo_journal(
            "5",
            day(2024, 6, 14),
            "First full day of rain. Wet socks, questionable jacket, still \
             smiling. Shared the shelter with a PCT section hiker.",
            &["RainyDayHiking", "EmbraceTheSuck", "TrailStories", "ShelterLife", "StillSmiling"],
        ),
        demo_journal(
            "6",
            day(2024, 6, 15),
            "Trail angels at Unicoi Gap dried out my gear and my mood. The \
             trail community keeps showing up when it matters.",
            &["TrailAngels", "TrailCommunity", "UnicoiGap", "Grateful", "PayItForward"],
        ),
        demo_journal(
            "7",
            day(2024, 6, 16),
            "One week and 84.3 miles. Watched the sunset from Tray Mountain \
             with the trail family, nobody said a word.",
            &["WeekOne", "TrailFamily", "TrayMountain", "ThruHikeLife", "AppalachianTrail2024"],
        ),
    ];

    let expenses = vec![
        demo_expense("1", day(2024, 6, 10), "Food", 15.50, "Snacks and energy bars"),
        demo_expense("2", day(2024, 6, 12), "Lodging", 45.00, "Hostel at Neels Gap"),
        demo_expense(
            "3",
            day(2024, 6, 12),
            "Food",
            28.75,
            "Pizza dinner and breakfast in town",
        ),
        demo_expense(
            "4",
            day(2024, 6, 12),
            "Resupply",
            67.20,
            "Week 2 food resupply at Mountain Crossings",
        ),
        demo_expense("5", day(2024, 6, 14), "Gear", 12.50, "Replaced broken tent stake"),
    ];

    let gear = vec![
        demo_gear(
            "1",
            day(2024, 6, 1),
            "Big Agnes Copper Spur HV UL2",
            "Shelter",
            449.95,
            42.0,
        ),
        demo_gear("2", day(2024, 6, 1), "Osprey Exos 58", "Backpack", 270.00, 39.0),
        demo_gear(
            "3",
            day(2024, 6, 1),
            "Enlightened Equipment Revelation 20",
            "Sleep System",
            325.00,
            18.5,
        ),
        demo_gear(
            "4",
            day(2024, 6, 12),
            "Sawyer Squeeze Water Filter",
            "Water",
            42.00,
            3.0,
        ),
    ];

    DemoData {
        daily_entries,
        journal_entries,
        expenses,
        gear,
    }
}
