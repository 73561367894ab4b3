use std::io::Write;

use anyhow::Context;
use dioxus::logger::tracing::info;
use serde::Serialize;

use crate::analytics::summary::{CustomerStats, InvoiceBreakdown, ProductStats};
use crate::shared::fixtures::Fixtures;

/// Derived statistics of every screen, as printed by the `summary` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub customers: CustomerStats,
    pub products: ProductStats,
    pub invoices: InvoiceBreakdown,
}

impl Snapshot {
    pub fn from_fixtures(fx: &Fixtures) -> Self {
        Self {
            customers: CustomerStats::from_customers(&fx.customers),
            products: ProductStats::from_products(&fx.products),
            invoices: InvoiceBreakdown::from_recent(&fx.recent_invoices),
        }
    }
}

pub fn print_summary(mut out: impl Write) -> anyhow::Result<()> {
    let fx = Fixtures::seeded();
    let snapshot = Snapshot::from_fixtures(&fx);
    let json = serde_json::to_string_pretty(&snapshot).context("serializing summary")?;
    writeln!(out, "{json}").context("writing summary")?;
    info!(
        "[summary] {} customers, {} products",
        snapshot.customers.total, snapshot.products.total
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_parseable_json() {
        let mut buf = Vec::new();
        print_summary(&mut buf).expect("summary");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(v["customers"]["total"], 5);
        assert_eq!(v["customers"]["mrr"], 4689);
        assert_eq!(v["products"]["live"], 4);
        assert_eq!(v["invoices"]["collection_rate"], 33);
        // Money serializes as integer cents
        assert_eq!(v["invoices"]["paid"]["amount"], 258_000);
        assert_eq!(v["invoices"]["paid"]["status"], "paid");
    }
}
