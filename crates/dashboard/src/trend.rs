//! Month-over-month trends.

use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use invoicer_invoicing::Invoice;

use crate::monthly::monthly_cohort;
use crate::summary::{DashboardSummary, Metric, summarize};

/// Percentage change from `previous` to `current`.
///
/// `None` when there is no baseline (`previous` is zero). Declines are
/// negative; the magnitude is not clamped.
pub fn compute_trend(current: Decimal, previous: Decimal) -> Option<f64> {
    if previous.is_zero() {
        return None;
    }

    let exact = current
        .checked_sub(previous)
        .and_then(|delta| delta.checked_div(previous))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.to_f64());

    exact.or_else(|| {
        let (current, previous) = (current.to_f64()?, previous.to_f64()?);
        Some((current - previous) / previous * 100.0)
    })
}

/// Trend per dashboard metric; `None` where last month has no baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrendSet {
    pub total_invoices: Option<f64>,
    pub total_revenue: Option<f64>,
    pub paid: Option<f64>,
    pub unpaid: Option<f64>,
    pub overdue: Option<f64>,
}

impl TrendSet {
    /// Compare each metric of two months independently.
    pub fn between(current: &DashboardSummary, previous: &DashboardSummary) -> Self {
        let trend = |m: Metric| compute_trend(current.metric(m), previous.metric(m));
        Self {
            total_invoices: trend(Metric::TotalInvoices),
            total_revenue: trend(Metric::TotalRevenue),
            paid: trend(Metric::Paid),
            unpaid: trend(Metric::Unpaid),
            overdue: trend(Metric::Overdue),
        }
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::TotalInvoices => self.total_invoices,
            Metric::TotalRevenue => self.total_revenue,
            Metric::Paid => self.paid,
            Metric::Unpaid => self.unpaid,
            Metric::Overdue => self.overdue,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        Metric::ALL.into_iter().map(|m| (m.name(), self.get(m)))
    }
}

/// Metrics of the month containing `now` and of the month before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthComparison {
    pub current: DashboardSummary,
    pub previous: DashboardSummary,
}

impl MonthComparison {
    pub fn trends(&self) -> TrendSet {
        TrendSet::between(&self.current, &self.previous)
    }
}

/// `(month0, year)` of the calendar month before the given one.
fn previous_month(month0: u32, year: i32) -> (u32, i32) {
    if month0 == 0 {
        (11, year - 1)
    } else {
        (month0 - 1, year)
    }
}

/// Summarize this month's and last month's cohorts relative to `now`.
///
/// January compares against December of the prior year.
pub fn month_comparison(invoices: &[Invoice], now: impl Datelike) -> MonthComparison {
    let (month0, year) = (now.month0(), now.year());
    let (prev_month0, prev_year) = previous_month(month0, year);

    MonthComparison {
        current: summarize(monthly_cohort(invoices, month0, year)),
        previous: summarize(monthly_cohort(invoices, prev_month0, prev_year)),
    }
}

/// Month-over-month trend for every dashboard metric.
pub fn month_over_month_trends(invoices: &[Invoice], now: impl Datelike) -> TrendSet {
    month_comparison(invoices, now).trends()
}
