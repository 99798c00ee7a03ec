//! Derived menu aggregates.
//!
//! # Responsibility
//! - Compute total item count and per-course average price from a snapshot.
//!
//! # Invariants
//! - Pure functions over [`MenuSnapshot`]; recomputed from scratch on every
//!   call, no caching. Dataset size is tens of items.
//! - An empty course averages to `"0.00"`, never an error.
//! - Price strings use two decimals with round-half-up.

use crate::store::menu_store::MenuSnapshot;
use serde::{Deserialize, Serialize};

/// Average price of one course, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAverage {
    pub course: String,
    /// Two-decimal price string, `"0.00"` for an empty course.
    pub average: String,
}

/// Sum of dish counts across all courses.
pub fn total_item_count(view: &MenuSnapshot) -> usize {
    view.sections().iter().map(|bucket| bucket.dishes.len()).sum()
}

/// Per-course average price, one entry per configured course in
/// configuration order.
pub fn average_price_by_course(view: &MenuSnapshot) -> Vec<CourseAverage> {
    view.sections()
        .iter()
        .map(|bucket| {
            let average = if bucket.dishes.is_empty() {
                "0.00".to_string()
            } else {
                let total: f64 = bucket.dishes.iter().map(|dish| dish.price).sum();
                format_price(total / bucket.dishes.len() as f64)
            };
            CourseAverage {
                course: bucket.name.clone(),
                average,
            }
        })
        .collect()
}

/// Formats a non-negative amount with two decimals, round-half-up.
///
/// `f64::round` ties away from zero; amounts here are never negative, so
/// that is exactly half-up (15.665 -> "15.67", 0.125 -> "0.13").
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    format!("{}.{:02}", cents / 100, cents % 100)
}
