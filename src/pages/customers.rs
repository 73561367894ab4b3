use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::analytics::filter::{filter_records, Choice, Facet, FieldFacet, SearchField};
use crate::analytics::summary::{billable_mrr, customer_status_count, CustomerStats};
use crate::app::Route;
use crate::components::{Section, Shell, StatCard, StatusBadge, UsageBar};
use crate::shared::fixtures::Fixtures;
use crate::shared::types::{Customer, CustomerStatus, Plan};
use crate::theme::Theme;
use crate::utils::format::{format_dollars, format_percent};

fn name(c: &Customer) -> &str {
    &c.name
}

fn company(c: &Customer) -> &str {
    &c.company
}

/// Fields the customer search box looks at.
pub const SEARCH_FIELDS: [SearchField<Customer>; 2] = [name, company];

/// Customers matching the search box and both filter rows, in list order.
pub fn select_customers<'a>(
    customers: &'a [Customer],
    query: &str,
    status: Choice<CustomerStatus>,
    plan: Choice<Plan>,
) -> Vec<&'a Customer> {
    let by_status = FieldFacet::new(status, |c: &Customer| c.status);
    let by_plan = FieldFacet::new(plan, |c: &Customer| c.plan);
    let facets: [&dyn Facet<Customer>; 2] = [&by_status, &by_plan];
    filter_records(customers, query, &SEARCH_FIELDS, &facets)
}

#[allow(non_snake_case)]
#[component]
pub fn Customers(theme: Theme) -> Element {
    let fx = use_context::<Rc<Fixtures>>();
    let mut query = use_signal(String::new);
    let mut status = use_signal(|| Choice::<CustomerStatus>::All);
    let mut plan = use_signal(|| Choice::<Plan>::All);

    let stats = CustomerStats::from_customers(&fx.customers);
    let shown = select_customers(&fx.customers, &query.read(), status(), plan());
    let shown_mrr = billable_mrr(shown.iter().copied());

    let status_chips: Vec<(Choice<CustomerStatus>, String, usize)> =
        std::iter::once((Choice::All, "All".to_string(), stats.total))
            .chain(CustomerStatus::ALL.into_iter().map(|s| {
                (
                    Choice::Only(s),
                    s.label().to_string(),
                    customer_status_count(&fx.customers, s),
                )
            }))
            .collect();
    let plan_chips: Vec<(Choice<Plan>, &'static str)> = std::iter::once((Choice::All, "All plans"))
        .chain(Plan::ALL.into_iter().map(|p| (Choice::Only(p), p.label())))
        .collect();

    rsx! {
        Shell { theme, section: Section::Customers, title: "Customers".to_string(),
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                StatCard { theme, label: "Total customers".to_string(), value: stats.total.to_string(), sub: format!("{} active", stats.active), trend: None }
                StatCard { theme, label: "MRR".to_string(), value: format_dollars(stats.mrr), sub: "Active and trial accounts".to_string(), trend: None }
                StatCard { theme, label: "Avg. usage".to_string(), value: format_percent(stats.avg_usage), sub: "Of plan limits".to_string(), trend: None }
            }

            div { class: "{theme.card()} space-y-4",
                div { class: "flex flex-wrap items-center gap-3",
                    input {
                        class: "{theme.input()}",
                        r#type: "search",
                        placeholder: "Search name or company",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    div { class: "flex items-center gap-1",
                        for (choice, label, count) in status_chips {
                            button {
                                key: "{label}",
                                class: "{theme.chip(status() == choice)}",
                                onclick: move |_| {
                                    info!("[customers] status filter -> {:?}", choice);
                                    status.set(choice);
                                },
                                "{label} "
                                span { class: "opacity-60", "{count}" }
                            }
                        }
                    }
                    div { class: "flex items-center gap-1",
                        for (choice, label) in plan_chips {
                            button {
                                key: "{label}",
                                class: "{theme.chip(plan() == choice)}",
                                onclick: move |_| {
                                    info!("[customers] plan filter -> {:?}", choice);
                                    plan.set(choice);
                                },
                                "{label}"
                            }
                        }
                    }
                }

                if shown.is_empty() {
                    div { class: "py-12 text-center {theme.muted()}", "No customers match your filters" }
                } else {
                    table { class: "w-full",
                        thead {
                            tr { class: "{theme.table_head()}",
                                th { class: "py-2", "Customer" }
                                th { "Plan" }
                                th { "Status" }
                                th { class: "text-right", "MRR" }
                                th { "Usage" }
                                th { "Last invoice" }
                            }
                        }
                        tbody {
                            for c in shown.iter().copied() {
                                CustomerRow { key: "{c.id}", theme, customer: c.clone() }
                            }
                        }
                    }
                }

                div { class: "flex items-center justify-between {theme.muted()}",
                    span { "Showing {shown.len()} of {stats.total}" }
                    span { "MRR {format_dollars(shown_mrr)}" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn CustomerRow(theme: Theme, customer: Customer) -> Element {
    let c = customer;
    rsx! {
        tr { class: "{theme.table_row()}",
            td { class: "py-2",
                Link { to: Route::CustomerDetail { theme, id: c.id.clone() }, class: "flex items-center gap-3",
                    span { class: "grid h-8 w-8 place-items-center text-[11px] font-semibold {theme.track()}", "{c.avatar}" }
                    span {
                        span { class: "block font-medium", "{c.name}" }
                        span { class: "block {theme.muted()}", "{c.company}" }
                    }
                }
            }
            td { span { class: "px-1.5 py-0.5 text-[11px] {theme.plan(c.plan)}", "{c.plan.label()}" } }
            td { StatusBadge { theme, label: c.status.label().to_string(), tone: theme.customer_status(c.status).to_string() } }
            td { class: "text-right tabular-nums", "{format_dollars(c.mrr)}" }
            td { UsageBar { theme, percent: u32::from(c.usage) } }
            td {
                span { class: "block tabular-nums", "{c.last_invoice_amount.short()}" }
                span { class: "block {theme.muted()}", "{c.last_invoice}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(rows: &[&Customer]) -> Vec<String> {
        rows.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn active_filter_keeps_seed_order() {
        let fx = Fixtures::seeded();
        let rows = select_customers(
            &fx.customers,
            "",
            Choice::Only(CustomerStatus::Active),
            Choice::All,
        );
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|c| c.status == CustomerStatus::Active));
        let expected: Vec<String> = fx
            .customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Active)
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids(&rows), expected);
    }

    #[test]
    fn search_covers_company_and_ands_with_plan() {
        let fx = Fixtures::seeded();
        let acme = select_customers(&fx.customers, "ACME", Choice::All, Choice::All);
        assert_eq!(ids(&acme), vec!["1".to_string()]);

        let none = select_customers(
            &fx.customers,
            "ACME",
            Choice::All,
            Choice::Only(Plan::Starter),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn nothing_selected_returns_everyone() {
        let fx = Fixtures::seeded();
        let all = select_customers(&fx.customers, "", Choice::All, Choice::All);
        assert_eq!(all.len(), fx.customers.len());
        assert!(select_customers(&fx.customers, "  ", Choice::All, Choice::All).is_empty());
        assert_eq!(billable_mrr(all.iter().copied()), 4689);
    }
}
