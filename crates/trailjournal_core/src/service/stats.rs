//! Display aggregates over in-memory collections.
//!
//! # Responsibility
//! - Compute hike statistics, expense and gear groupings, and the
//!   journal-to-daily calendar-day join.
//!
//! # Invariants
//! - Every function is a pure function of its slice arguments; nothing
//!   is cached or incrementally maintained.
//! - Averages over an empty collection are 0, never NaN.

use crate::model::daily::DailyEntry;
use crate::model::expense::Expense;
use crate::model::gear::GearItem;
use crate::model::DatedRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Summary numbers for the stats and home screens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HikeStats {
    pub total_miles: f64,
    pub total_days: usize,
    pub zero_days: usize,
    pub avg_miles_per_day: f64,
    pub total_elevation_gain: f64,
    pub total_elevation_loss: f64,
    pub avg_elevation_gain: f64,
    pub rainy_days: usize,
    pub trail_magic_days: usize,
    pub avg_sleep_quality: f64,
    pub total_expenses: f64,
}

/// Computes the full stats summary from the daily log and expenses.
pub fn hike_stats(entries: &[DailyEntry], expenses: &[Expense]) -> HikeStats {
    let total_days = entries.len();
    let total_miles: f64 = entries.iter().map(|entry| entry.miles).sum();
    let total_elevation_gain: f64 = entries
        .iter()
        .filter_map(|entry| entry.elevation_gain)
        .sum();
    let total_elevation_loss: f64 = entries
        .iter()
        .filter_map(|entry| entry.elevation_loss)
        .sum();
    let total_sleep_quality: i64 = entries.iter().filter_map(|entry| entry.sleep_quality).sum();

    let per_day = |total: f64| {
        if total_days > 0 {
            total / total_days as f64
        } else {
            0.0
        }
    };

    HikeStats {
        total_miles,
        total_days,
        zero_days: entries.iter().filter(|entry| entry.is_zero_day()).count(),
        avg_miles_per_day: per_day(total_miles),
        total_elevation_gain,
        total_elevation_loss,
        avg_elevation_gain: per_day(total_elevation_gain),
        rainy_days: entries
            .iter()
            .filter(|entry| entry.is_raining == Some(true))
            .count(),
        trail_magic_days: entries
            .iter()
            .filter(|entry| entry.has_trail_magic == Some(true))
            .count(),
        avg_sleep_quality: per_day(total_sleep_quality as f64),
        total_expenses: total_expenses(expenses),
    }
}

/// Sum of all expense amounts.
pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Per-category expense totals, ordered by category name.
pub fn expense_totals_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Gear grouped by category, ordered by category name. Items keep their
/// stored order within each group.
pub fn gear_by_category(gear: &[GearItem]) -> BTreeMap<String, Vec<GearItem>> {
    let mut groups: BTreeMap<String, Vec<GearItem>> = BTreeMap::new();
    for item in gear {
        groups.entry(item.category.clone()).or_default().push(item.clone());
    }
    groups
}

/// Sum of all gear prices.
pub fn total_gear_cost(gear: &[GearItem]) -> f64 {
    gear.iter().map(|item| item.price).sum()
}

/// Sum of known gear weights in ounces; unweighted items count as zero.
pub fn total_gear_weight(gear: &[GearItem]) -> f64 {
    gear.iter().filter_map(|item| item.weight).sum()
}

/// Finds the daily entry logged on the given UTC calendar day.
///
/// This is the derived journal-to-daily association; there is no stored
/// relation. Days are compared in UTC, so an instant at 23:59:59Z joins
/// that day and 00:00:00Z the next.
pub fn daily_entry_for_day(entries: &[DailyEntry], day: NaiveDate) -> Option<&DailyEntry> {
    entries.iter().find(|entry| entry.calendar_day() == day)
}

/// Most recent days first, at most `limit` of them.
pub fn recent_days(entries: &[DailyEntry], limit: usize) -> Vec<DailyEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted.truncate(limit);
    sorted
}
