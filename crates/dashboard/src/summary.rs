//! Status tallies and paid revenue.

use rust_decimal::Decimal;
use serde::Serialize;

use invoicer_invoicing::{Invoice, InvoiceStatus};

/// Dashboard metric names, as used for trends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TotalInvoices,
    TotalRevenue,
    Paid,
    Unpaid,
    Overdue,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Self::TotalInvoices,
        Self::TotalRevenue,
        Self::Paid,
        Self::Unpaid,
        Self::Overdue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TotalInvoices => "total_invoices",
            Self::TotalRevenue => "total_revenue",
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Overdue => "overdue",
        }
    }
}

/// Counts by status plus the revenue collected on paid invoices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub total_invoices: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub paid: usize,
    pub unpaid: usize,
    pub overdue: usize,
}

impl DashboardSummary {
    pub fn count(&self, status: InvoiceStatus) -> usize {
        match status {
            InvoiceStatus::Paid => self.paid,
            InvoiceStatus::Unpaid => self.unpaid,
            InvoiceStatus::Overdue => self.overdue,
        }
    }

    pub fn metric(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::TotalInvoices => Decimal::from(self.total_invoices),
            Metric::TotalRevenue => self.total_revenue,
            Metric::Paid => Decimal::from(self.paid),
            Metric::Unpaid => Decimal::from(self.unpaid),
            Metric::Overdue => Decimal::from(self.overdue),
        }
    }
}

/// Tally invoices in one pass.
///
/// Invoices without a recognized status count toward `total_invoices` only.
pub fn summarize<'a>(invoices: impl IntoIterator<Item = &'a Invoice>) -> DashboardSummary {
    let mut summary = DashboardSummary::default();
    for invoice in invoices {
        summary.total_invoices += 1;
        match invoice.status {
            Some(InvoiceStatus::Paid) => {
                summary.paid += 1;
                summary.total_revenue = summary.total_revenue.saturating_add(invoice.amount);
            }
            Some(InvoiceStatus::Unpaid) => summary.unpaid += 1,
            Some(InvoiceStatus::Overdue) => summary.overdue += 1,
            None => {
                tracing::trace!(invoice_id = %invoice.id, "invoice without a recognized status");
            }
        }
    }
    summary
}

/// Invoices with the given status, or all of them for `None`.
pub fn filter_by_status(
    invoices: &[Invoice],
    status: Option<InvoiceStatus>,
) -> impl Iterator<Item = &Invoice> + Clone {
    invoices
        .iter()
        .filter(move |inv| status.is_none_or(|s| inv.status == Some(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::invoice;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_input_gives_zero_summary() {
        assert_eq!(summarize(&[] as &[Invoice]), DashboardSummary::default());
    }

    #[test]
    fn revenue_counts_paid_invoices_only() {
        let invoices = vec![
            invoice(1, Some(InvoiceStatus::Paid), dec!(100), "2024-01-05T10:00:00"),
            invoice(2, Some(InvoiceStatus::Unpaid), dec!(50), "2024-01-06T10:00:00"),
        ];
        assert_eq!(
            summarize(&invoices),
            DashboardSummary {
                total_invoices: 2,
                total_revenue: dec!(100),
                paid: 1,
                unpaid: 1,
                overdue: 0,
            }
        );
    }

    #[test]
    fn unrecognized_status_counts_in_total_only() {
        let invoices = vec![
            invoice(1, None, dec!(75), "2024-01-05T10:00:00"),
            invoice(2, Some(InvoiceStatus::Overdue), dec!(20), "2024-01-06T10:00:00"),
        ];
        let summary = summarize(&invoices);
        assert_eq!(summary.total_invoices, 2);
        assert_eq!(summary.paid + summary.unpaid + summary.overdue, 1);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.count(InvoiceStatus::Overdue), 1);
    }

    #[test]
    fn filter_by_status_selects_matching_invoices() {
        let invoices = vec![
            invoice(1, Some(InvoiceStatus::Paid), dec!(10), "2024-01-05T10:00:00"),
            invoice(2, Some(InvoiceStatus::Unpaid), dec!(10), "2024-01-05T10:00:00"),
            invoice(3, None, dec!(10), "2024-01-05T10:00:00"),
        ];
        assert_eq!(filter_by_status(&invoices, None).count(), 3);
        let paid: Vec<_> = filter_by_status(&invoices, Some(InvoiceStatus::Paid))
            .map(|inv| inv.id.get())
            .collect();
        assert_eq!(paid, vec![1]);
    }

    #[test]
    fn serializes_revenue_as_number() {
        let json = serde_json::to_value(DashboardSummary {
            total_invoices: 1,
            total_revenue: dec!(99.5),
            paid: 1,
            unpaid: 0,
            overdue: 0,
        })
        .unwrap();
        assert_eq!(json["total_revenue"], 99.5);
        assert_eq!(json["total_invoices"], 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn status() -> impl Strategy<Value = Option<InvoiceStatus>> {
            prop_oneof![
                Just(None),
                Just(Some(InvoiceStatus::Paid)),
                Just(Some(InvoiceStatus::Unpaid)),
                Just(Some(InvoiceStatus::Overdue)),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: status buckets never exceed the total, revenue is the
            /// paid sum, and a second pass gives the same answer.
            #[test]
            fn summary_is_consistent_and_repeatable(
                rows in prop::collection::vec((status(), 0i64..100_000), 0..40)
            ) {
                let invoices: Vec<Invoice> = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (s, cents))| {
                        invoice(i as u64 + 1, *s, Decimal::new(*cents, 2), "2024-05-01T00:00:00")
                    })
                    .collect();

                let summary = summarize(&invoices);
                prop_assert_eq!(summary.total_invoices, invoices.len());
                prop_assert!(summary.paid + summary.unpaid + summary.overdue <= summary.total_invoices);

                let paid_sum = rows
                    .iter()
                    .filter(|(s, _)| *s == Some(InvoiceStatus::Paid))
                    .fold(Decimal::ZERO, |acc, (_, cents)| acc + Decimal::new(*cents, 2));
                prop_assert_eq!(summary.total_revenue, paid_sum);

                prop_assert_eq!(summarize(&invoices), summary);
            }
        }
    }
}
