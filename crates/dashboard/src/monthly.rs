//! Calendar-month bucketing of invoices.
//!
//! Months follow the wall-clock time recorded on each invoice; no time zone
//! conversion happens here. Invoices without a readable `created_at` fall in
//! no month.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use invoicer_invoicing::Invoice;

/// Paid revenue per month (1–12) of a single year.
///
/// Sparse: months without paid invoices are absent. Iterates in ascending
/// month order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyRevenue(BTreeMap<u32, Decimal>);

impl MonthlyRevenue {
    pub fn get(&self, month: u32) -> Option<Decimal> {
        self.0.get(&month).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Decimal)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }

    pub fn months(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    pub fn total(&self) -> Decimal {
        self.0
            .values()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct Amount<'a>(&'a Decimal);

impl Serialize for Amount<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(self.0, serializer)
    }
}

impl Serialize for MonthlyRevenue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (month, revenue) in &self.0 {
            map.serialize_entry(month, &Amount(revenue))?;
        }
        map.end()
    }
}

/// Sum paid amounts per month for invoices created in `year`.
pub fn monthly_revenue(invoices: &[Invoice], year: i32) -> MonthlyRevenue {
    let mut buckets = BTreeMap::new();
    let mut undated = 0usize;

    for invoice in invoices.iter().filter(|inv| inv.is_paid()) {
        let Some(created_at) = invoice.created_at else {
            undated += 1;
            continue;
        };
        if created_at.year() != year {
            continue;
        }
        let bucket = buckets.entry(created_at.month()).or_insert(Decimal::ZERO);
        *bucket = bucket.saturating_add(invoice.amount);
    }

    if undated > 0 {
        tracing::debug!(undated, year, "paid invoices without created_at left out of monthly revenue");
    }

    MonthlyRevenue(buckets)
}

/// Invoices created in the given 0-indexed month (0 = January) of `year`.
///
/// The returned iterator borrows the input and can be cloned to walk the
/// cohort again.
pub fn monthly_cohort(
    invoices: &[Invoice],
    month0: u32,
    year: i32,
) -> impl Iterator<Item = &Invoice> + Clone {
    invoices.iter().filter(move |inv| {
        inv.created_at
            .is_some_and(|created| created.month0() == month0 && created.year() == year)
    })
}
