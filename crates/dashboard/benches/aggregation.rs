use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use invoicer_core::{ClientId, Currency, InvoiceId};
use invoicer_dashboard::{DashboardView, monthly_revenue, month_over_month_trends, summarize};
use invoicer_invoicing::{Invoice, InvoiceStatus};

/// Deterministic snapshot spread over two years with a mix of statuses.
fn snapshot(n: usize) -> Vec<Invoice> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let status = match i % 7 {
                0 => None,
                1 | 2 => Some(InvoiceStatus::Unpaid),
                3 => Some(InvoiceStatus::Overdue),
                _ => Some(InvoiceStatus::Paid),
            };
            let day = start + chrono::Days::new((i % 730) as u64);
            Invoice {
                id: InvoiceId::new(i as u64 + 1),
                number: (i + 1).to_string(),
                client_id: Some(ClientId::new((i % 50) as u64 + 1)),
                amount: Decimal::new((i as i64 % 10_000) * 100 + 99, 2),
                currency: Currency::default(),
                status,
                created_at: day.and_hms_opt(10, 0, 0),
                due_date: Some(day + chrono::Days::new(30)),
                items_count: (i % 5) as u32 + 1,
            }
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut group = c.benchmark_group("dashboard");

    for size in [1_000usize, 10_000, 100_000] {
        let invoices = snapshot(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("summarize", size), &invoices, |b, inv| {
            b.iter(|| summarize(black_box(inv)))
        });

        group.bench_with_input(BenchmarkId::new("monthly_revenue", size), &invoices, |b, inv| {
            b.iter(|| monthly_revenue(black_box(inv), 2024))
        });

        group.bench_with_input(BenchmarkId::new("trends", size), &invoices, |b, inv| {
            b.iter(|| month_over_month_trends(black_box(inv), now))
        });

        group.bench_with_input(BenchmarkId::new("full_view", size), &invoices, |b, inv| {
            b.iter(|| DashboardView::build(black_box(inv), now))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
