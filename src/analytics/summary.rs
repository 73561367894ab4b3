//! Screen-level statistics derived from the fixtures.

use serde::Serialize;

use crate::analytics::aggregate::{
    average_where, collection_rate, count_where, percent_of, sum_where,
};
use crate::shared::money::Money;
use crate::shared::types::{
    Customer, CustomerStatus, Invoice, InvoiceStatus, PlanLimit, Product, ProductStatus,
    RecentInvoice, UsageMetric,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    /// MRR over every customer that is not inactive.
    pub mrr: u32,
    /// Rounded mean usage over every customer that is not inactive.
    pub avg_usage: u32,
}

impl CustomerStats {
    pub fn from_customers(customers: &[Customer]) -> Self {
        Self {
            total: customers.len(),
            active: count_where(customers, |c| c.status == CustomerStatus::Active),
            mrr: billable_mrr(customers.iter()),
            avg_usage: average_where(customers, |c| c.status.is_billable(), |c| c.usage as f64)
                .round() as u32,
        }
    }
}

/// MRR over the non-inactive customers of a (possibly filtered) selection.
pub fn billable_mrr<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> u32 {
    customers
        .into_iter()
        .filter(|c| c.status.is_billable())
        .map(|c| c.mrr)
        .sum()
}

pub fn customer_status_count(customers: &[Customer], status: CustomerStatus) -> usize {
    count_where(customers, |c| c.status == status)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStats {
    pub total: usize,
    pub live: usize,
    pub draft: usize,
    /// Subscribers summed over live products.
    pub subscribers: u32,
    /// MRR summed over live products.
    pub mrr: u32,
}

impl ProductStats {
    pub fn from_products(products: &[Product]) -> Self {
        let is_live = |p: &Product| p.status == ProductStatus::Live;
        Self {
            total: products.len(),
            live: count_where(products, is_live),
            draft: product_status_count(products, ProductStatus::Draft),
            subscribers: sum_where(products, is_live, |p| p.subscribers),
            mrr: live_mrr(products.iter()),
        }
    }
}

pub fn live_mrr<'a>(products: impl IntoIterator<Item = &'a Product>) -> u32 {
    products
        .into_iter()
        .filter(|p| p.status == ProductStatus::Live)
        .map(|p| p.mrr)
        .sum()
}

pub fn product_status_count(products: &[Product], status: ProductStatus) -> usize {
    count_where(products, |p| p.status == status)
}

/// Count and total of the invoices in one status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusTotal {
    pub status: InvoiceStatus,
    pub count: usize,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceBreakdown {
    pub paid: StatusTotal,
    pub issued: StatusTotal,
    pub overdue: StatusTotal,
    /// Everything billed and not voided.
    pub billed: Money,
    pub collection_rate: u32,
}

impl InvoiceBreakdown {
    pub fn from_amounts(rows: &[(InvoiceStatus, Money)]) -> Self {
        let total = |status: InvoiceStatus| StatusTotal {
            status,
            count: count_where(rows, |(s, _)| *s == status),
            amount: sum_where(rows, |(s, _)| *s == status, |(_, m)| *m),
        };
        let paid = total(InvoiceStatus::Paid);
        let billed = sum_where(rows, |(s, _)| *s != InvoiceStatus::Void, |(_, m)| *m);
        Self {
            paid,
            issued: total(InvoiceStatus::Issued),
            overdue: total(InvoiceStatus::Overdue),
            billed,
            collection_rate: collection_rate(paid.amount, billed),
        }
    }

    pub fn from_recent(invoices: &[RecentInvoice]) -> Self {
        let rows: Vec<_> = invoices.iter().map(|i| (i.status, i.amount)).collect();
        Self::from_amounts(&rows)
    }

    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        let rows: Vec<_> = invoices.iter().map(|i| (i.status, i.amount)).collect();
        Self::from_amounts(&rows)
    }

    /// Width of one status' segment in the stacked status bar, as a percentage.
    pub fn share(&self, part: &StatusTotal) -> u32 {
        collection_rate(part.amount, self.billed)
    }

    pub fn rows(&self) -> [StatusTotal; 3] {
        [self.paid, self.issued, self.overdue]
    }
}

/// Billing-period total of the usage line items.
pub fn metrics_total(metrics: &[UsageMetric]) -> Money {
    sum_where(metrics, |_| true, |m| m.subtotal)
}

pub fn plan_limit_percent(limit: &PlanLimit) -> u32 {
    percent_of(limit.used, limit.limit.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures::Fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn customer_stats_skip_inactive_accounts() {
        let fx = Fixtures::seeded();
        let stats = CustomerStats::from_customers(&fx.customers);
        assert_eq!(
            stats,
            CustomerStats {
                total: 5,
                active: 3,
                mrr: 2400 + 890 + 1100 + 299,
                avg_usage: 69,
            }
        );
    }

    #[test]
    fn product_stats_count_live_only() {
        let fx = Fixtures::seeded();
        let stats = ProductStats::from_products(&fx.products);
        assert_eq!(
            stats,
            ProductStats {
                total: 5,
                live: 4,
                draft: 1,
                subscribers: 28 + 14 + 41 + 6,
                mrr: 5200 + 4186 + 1230 + 2880,
            }
        );
    }

    #[test]
    fn paid_invoices_sum_as_numbers() {
        let fx = Fixtures::seeded();
        let rec = fx.customer_record("1");
        let breakdown = InvoiceBreakdown::from_invoices(rec.invoices);
        assert_eq!(breakdown.paid.count, 5);
        assert_eq!(breakdown.paid.amount, Money::from_dollars(10_680));

        let first_two: Money = rec.invoices[..2]
            .iter()
            .filter(|i| i.status == InvoiceStatus::Paid)
            .map(|i| i.amount)
            .sum();
        assert_eq!(first_two, Money::from_dollars(4_800));
        assert_eq!(breakdown.collection_rate, 100);
    }

    #[test]
    fn overview_breakdown_derives_collection_rate() {
        let fx = Fixtures::seeded();
        let b = InvoiceBreakdown::from_recent(&fx.recent_invoices);
        assert_eq!(b.paid.count, 3);
        assert_eq!(b.paid.amount.short(), "$2,580");
        assert_eq!(b.issued.count, 2);
        assert_eq!(b.issued.amount.short(), "$5,300");
        assert_eq!(b.overdue.count, 0);
        assert_eq!(b.overdue.amount, Money::ZERO);
        assert_eq!(b.collection_rate, 33);
        assert_eq!(b.share(&b.issued), 67);
    }

    #[test]
    fn void_invoices_are_not_billed() {
        let b = InvoiceBreakdown::from_amounts(&[(InvoiceStatus::Void, Money::ZERO)]);
        assert_eq!(b.billed, Money::ZERO);
        assert_eq!(b.collection_rate, 0);
    }

    #[test]
    fn usage_metrics_total_is_exact() {
        let fx = Fixtures::seeded();
        assert_eq!(
            metrics_total(fx.customer_record("1").metrics).to_string(),
            "$2,099.22"
        );
        assert_eq!(metrics_total(fx.customer_record("5").metrics), Money::ZERO);
    }

    #[test]
    fn unlimited_plan_limits_report_zero() {
        let fx = Fixtures::seeded();
        let pcts: Vec<u32> = fx
            .customer_record("1")
            .plan_limits
            .iter()
            .map(plan_limit_percent)
            .collect();
        assert_eq!(pcts, vec![87, 87, 0, 25]);
        let starter: Vec<u32> = fx
            .customer_record("4")
            .plan_limits
            .iter()
            .map(plan_limit_percent)
            .collect();
        assert_eq!(starter, vec![91, 91, 67, 32]);
    }

    #[test]
    fn filtered_selection_mrr() {
        let fx = Fixtures::seeded();
        assert_eq!(billable_mrr(fx.customers.iter().filter(|c| c.id == "5")), 0);
        assert_eq!(billable_mrr(&fx.customers), 4689);
    }
}
