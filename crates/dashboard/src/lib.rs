//! Dashboard aggregation engine.
//!
//! Derives the dashboard views (status tallies, monthly revenue,
//! month-over-month trends) from an in-memory invoice snapshot. Every function
//! borrows its input, reads no clock and never fails: malformed records are
//! absorbed so the dashboard still renders on partial data.

pub mod monthly;
pub mod summary;
pub mod trend;
pub mod view;

pub use monthly::{MonthlyRevenue, monthly_cohort, monthly_revenue};
pub use summary::{DashboardSummary, Metric, filter_by_status, summarize};
pub use trend::{
    MonthComparison, TrendSet, compute_trend, month_comparison, month_over_month_trends,
};
pub use view::DashboardView;
