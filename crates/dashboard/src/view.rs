use chrono::Datelike;
use serde::Serialize;

use invoicer_invoicing::Invoice;

use crate::monthly::{MonthlyRevenue, monthly_revenue};
use crate::summary::{DashboardSummary, summarize};
use crate::trend::{MonthComparison, TrendSet, month_comparison};

/// Everything the dashboard page shows, derived from one invoice snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: DashboardSummary,
    /// Paid revenue per month of the year containing `now`.
    pub monthly_revenue: MonthlyRevenue,
    pub months: MonthComparison,
    pub trends: TrendSet,
}

impl DashboardView {
    pub fn build(invoices: &[Invoice], now: impl Datelike + Copy) -> Self {
        let months = month_comparison(invoices, now);
        let trends = months.trends();
        let view = Self {
            summary: summarize(invoices),
            monthly_revenue: monthly_revenue(invoices, now.year()),
            months,
            trends,
        };

        tracing::debug!(
            invoices = view.summary.total_invoices,
            revenue_months = view.monthly_revenue.len(),
            "dashboard view built"
        );
        view
    }
}
