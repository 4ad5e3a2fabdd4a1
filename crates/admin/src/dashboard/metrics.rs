//! Figures derived from the customer list.

use chrono::{Days, NaiveDate};
use rental_admin_core::Customer;
use serde::Serialize;

/// Bucket name for customers without a city and for folded small cities.
pub const OTHER: &str = "Other";

/// Number of named cities kept when the breakdown is folded.
const TOP_CITIES: usize = 4;

/// Fold only when there are more distinct cities than this.
const MAX_UNFOLDED: usize = 5;

/// Customer count for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationBucket {
    pub name: String,
    pub count: usize,
}

/// Customers grouped by address city.
///
/// Buckets appear in first-seen order. Customers with no city count toward
/// `"Other"`. With more than five distinct buckets, the four largest are
/// kept (ties keep first-seen order) and the rest are summed into
/// `"Other"`.
#[must_use]
pub fn location_breakdown(customers: &[Customer]) -> Vec<LocationBucket> {
    let mut buckets: Vec<LocationBucket> = Vec::new();
    for customer in customers {
        let city = customer.city().unwrap_or(OTHER);
        match buckets.iter_mut().find(|b| b.name == city) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(LocationBucket {
                name: city.to_owned(),
                count: 1,
            }),
        }
    }

    if buckets.len() <= MAX_UNFOLDED {
        return buckets;
    }

    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    let rest: usize = buckets.drain(TOP_CITIES..).map(|b| b.count).sum();

    // an "Other" bucket already in the top four absorbs the remainder
    match buckets.iter_mut().find(|b| b.name == OTHER) {
        Some(other) => other.count += rest,
        None => buckets.push(LocationBucket {
            name: OTHER.to_owned(),
            count: rest,
        }),
    }
    buckets
}

/// Customers whose first deal falls within the seven days up to and
/// including `today`.
#[must_use]
pub fn new_customers_this_week(customers: &[Customer], today: NaiveDate) -> usize {
    let Some(week_ago) = today.checked_sub_days(Days::new(7)) else {
        return 0;
    };
    customers
        .iter()
        .filter_map(|c| c.first_deal_date)
        .filter(|date| (week_ago..=today).contains(date))
        .count()
}

/// The `n` customers with the latest last-deal date. Customers without one
/// sort last.
#[must_use]
pub fn recent_customers(customers: &[Customer], n: usize) -> Vec<Customer> {
    let mut sorted = customers.to_vec();
    sorted.sort_by(|a, b| b.last_deal_date.cmp(&a.last_deal_date));
    sorted.truncate(n);
    sorted
}
