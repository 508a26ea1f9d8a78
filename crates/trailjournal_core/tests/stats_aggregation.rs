use chrono::{NaiveDate, TimeZone, Utc};
use trailjournal_core::{
    daily_entry_for_day, expense_totals_by_category, gear_by_category, hike_stats, recent_days,
    total_gear_cost, total_gear_weight, DailyDraft, DailyEntry, Expense, ExpenseDraft, GearDraft,
    DatedRecord,
};

const EPS: f64 = 1e-9;

fn day_entry(day: u32, miles: f64) -> DailyEntry {
    DailyDraft {
        date: NaiveDate::from_ymd_opt(2024, 6, day),
        miles: Some(miles),
        ..DailyDraft::default()
    }
    .finalize()
    .unwrap()
}

fn expense(day: u32, category: &str, amount: f64) -> Expense {
    ExpenseDraft {
        date: NaiveDate::from_ymd_opt(2024, 6, day),
        category: Some(category.to_string()),
        amount: Some(amount),
        ..ExpenseDraft::default()
    }
    .finalize()
    .unwrap()
}

#[test]
fn miles_totals_and_average() {
    let entries = vec![day_entry(10, 7.8), day_entry(11, 12.3), day_entry(12, 15.2)];
    let stats = hike_stats(&entries, &[]);

    assert!((stats.total_miles - 35.3).abs() < EPS);
    assert!((stats.avg_miles_per_day - 35.3 / 3.0).abs() < EPS);
    assert_eq!(stats.total_days, 3);
    assert_eq!(stats.zero_days, 0);
}

#[test]
fn empty_log_yields_zero_averages_not_nan() {
    let stats = hike_stats(&[], &[]);

    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.total_miles, 0.0);
    assert_eq!(stats.avg_miles_per_day, 0.0);
    assert_eq!(stats.avg_elevation_gain, 0.0);
    assert_eq!(stats.avg_sleep_quality, 0.0);
}

#[test]
fn zero_rainy_and_trail_magic_days_are_counted() {
    let mut zero = day_entry(13, 0.0);
    zero.is_raining = Some(true);
    let mut magic = day_entry(14, 11.2);
    magic.has_trail_magic = Some(true);
    let plain = day_entry(15, 9.5);

    let stats = hike_stats(&[zero, magic, plain], &[]);

    assert_eq!(stats.zero_days, 1);
    assert_eq!(stats.rainy_days, 1);
    assert_eq!(stats.trail_magic_days, 1);
}

#[test]
fn elevation_and_sleep_aggregate_over_present_fields_only() {
    let mut with_elevation = day_entry(10, 7.8);
    with_elevation.elevation_gain = Some(2100.0);
    with_elevation.elevation_loss = Some(1850.0);
    with_elevation.sleep_quality = Some(4);
    let without = day_entry(11, 12.3);

    let stats = hike_stats(&[with_elevation, without], &[]);

    assert!((stats.total_elevation_gain - 2100.0).abs() < EPS);
    assert!((stats.total_elevation_loss - 1850.0).abs() < EPS);
    // Averages divide by total days, matching the display contract.
    assert!((stats.avg_elevation_gain - 1050.0).abs() < EPS);
    assert!((stats.avg_sleep_quality - 2.0).abs() < EPS);
}

#[test]
fn expense_totals_group_by_category() {
    let expenses = vec![
        expense(10, "Food", 15.50),
        expense(12, "Food", 28.75),
        expense(12, "Lodging", 45.00),
    ];

    let totals = expense_totals_by_category(&expenses);

    assert_eq!(totals.len(), 2);
    assert!((totals["Food"] - 44.25).abs() < EPS);
    assert!((totals["Lodging"] - 45.00).abs() < EPS);

    let stats = hike_stats(&[], &expenses);
    assert!((stats.total_expenses - 89.25).abs() < EPS);
}

#[test]
fn gear_groups_by_category_with_cost_and_weight_totals() {
    let gear = vec![
        GearDraft {
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
            name: Some("Tent".to_string()),
            category: Some("Shelter".to_string()),
            price: Some(449.95),
            weight: Some(42.0),
        }
        .finalize()
        .unwrap(),
        GearDraft {
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
            name: Some("Stakes".to_string()),
            category: Some("Shelter".to_string()),
            price: Some(12.50),
            weight: None,
        }
        .finalize()
        .unwrap(),
        GearDraft {
            date: NaiveDate::from_ymd_opt(2024, 6, 12),
            name: Some("Water filter".to_string()),
            category: Some("Water".to_string()),
            price: Some(42.00),
            weight: Some(3.0),
        }
        .finalize()
        .unwrap(),
    ];

    let groups = gear_by_category(&gear);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["Shelter"].len(), 2);
    assert_eq!(groups["Shelter"][0].name, "Tent");
    assert_eq!(groups["Water"].len(), 1);

    assert!((total_gear_cost(&gear) - 504.45).abs() < EPS);
    // Items without a known weight count as zero.
    assert!((total_gear_weight(&gear) - 45.0).abs() < EPS);
}

#[test]
fn journal_join_matches_utc_calendar_day() {
    let entries = vec![day_entry(10, 7.8), day_entry(11, 12.3)];

    let june_10 = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let found = daily_entry_for_day(&entries, june_10).unwrap();
    assert_eq!(found.calendar_day(), june_10);

    let june_12 = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
    assert!(daily_entry_for_day(&entries, june_12).is_none());
}

#[test]
fn join_boundary_is_utc_midnight() {
    // Pinned behavior for the known fragility: day equality follows the
    // UTC clock, so one second before midnight belongs to the earlier
    // day and midnight itself to the next.
    let mut late = day_entry(10, 5.0);
    late.date = Utc.with_ymd_and_hms(2024, 6, 10, 23, 59, 59).unwrap();
    let mut midnight = day_entry(11, 6.0);
    midnight.date = Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap();
    let entries = vec![late, midnight];

    let june_10 = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let june_11 = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();

    assert_eq!(daily_entry_for_day(&entries, june_10).unwrap().miles, 5.0);
    assert_eq!(daily_entry_for_day(&entries, june_11).unwrap().miles, 6.0);
}

#[test]
fn recent_days_returns_newest_first_capped_at_limit() {
    let entries = vec![
        day_entry(10, 7.8),
        day_entry(13, 9.5),
        day_entry(11, 12.3),
        day_entry(12, 15.2),
    ];

    let recent = recent_days(&entries, 3);

    let miles: Vec<f64> = recent.iter().map(|entry| entry.miles).collect();
    assert_eq!(miles, vec![9.5, 15.2, 12.3]);
}
