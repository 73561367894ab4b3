use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::analytics::summary::{metrics_total, plan_limit_percent, InvoiceBreakdown};
use crate::components::{Section, SeriesChart, Shell, StatCard, StatusBadge, UsageBar, UsageGauge};
use crate::shared::fixtures::{CustomerRecord, Fixtures};
use crate::shared::types::{Customer, CustomerStatus, PlanLimit};
use crate::theme::{usage_chart_color, Theme};
use crate::utils::format::{format_dollars, format_number, format_percent, group_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Overview,
    Usage,
    Invoices,
    Subscription,
}

impl DetailTab {
    const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Usage,
        DetailTab::Invoices,
        DetailTab::Subscription,
    ];

    fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Usage => "Usage",
            DetailTab::Invoices => "Invoices",
            DetailTab::Subscription => "Subscription",
        }
    }
}

/// Date the subscription next bills, or an em dash when it will not.
pub fn next_renewal(customer: &Customer) -> &'static str {
    match customer.status {
        CustomerStatus::Inactive => "—",
        CustomerStatus::Trial => "Feb 11, 2025",
        CustomerStatus::Active => "Mar 1, 2025",
    }
}

fn substitution_note(requested: &str, record: &CustomerRecord) -> Option<String> {
    record
        .substituted
        .then(|| format!("unknown id {requested:?}, showing {}", record.customer.id))
}

fn limit_text(limit: &PlanLimit) -> String {
    match limit.limit {
        Some(l) => format!("{} / {}", format_number(limit.used), format_number(l)),
        None => format!("{} / Unlimited", format_number(limit.used)),
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CustomerDetail(theme: Theme, id: String) -> Element {
    let fx = use_context::<Rc<Fixtures>>();
    let mut tab = use_signal(|| DetailTab::Overview);

    let record = fx.customer_record(&id);
    // Logged after render, and again only when the requested id changes.
    let note = substitution_note(&id, &record);
    use_effect(use_reactive!(|(note,)| {
        if let Some(note) = note {
            info!("[customer_detail] {note}");
        }
    }));
    let c = record.customer;
    let latest = record.usage.last();
    let billed = InvoiceBreakdown::from_invoices(record.invoices);
    let period_total = metrics_total(record.metrics);

    rsx! {
        Shell { theme, section: Section::Customers, title: c.name.clone(),
            div { class: "{theme.card()} flex flex-wrap items-center justify-between gap-4",
                div { class: "flex items-center gap-4",
                    span { class: "grid h-12 w-12 place-items-center text-sm font-semibold {theme.track()}", "{c.avatar}" }
                    div {
                        div { class: "flex items-center gap-2",
                            h1 { class: "{theme.heading()}", "{c.name}" }
                            StatusBadge { theme, label: c.status.label().to_string(), tone: theme.customer_status(c.status).to_string() }
                            span { class: "px-1.5 py-0.5 text-[11px] {theme.plan(c.plan)}", "{c.plan.label()}" }
                        }
                        p { class: "{theme.muted()}", "{c.company} · {c.location}" }
                    }
                }
                dl { class: "grid grid-cols-2 gap-x-6 gap-y-1 text-sm",
                    dt { class: "{theme.muted()}", "Email" }
                    dd { "{c.email}" }
                    dt { class: "{theme.muted()}", "Phone" }
                    dd { "{c.phone}" }
                    dt { class: "{theme.muted()}", "Website" }
                    dd { "{c.website}" }
                }
            }

            div { class: "grid grid-cols-2 lg:grid-cols-4 gap-4",
                StatCard { theme, label: "MRR".to_string(), value: format_dollars(c.mrr), sub: c.plan.label().to_string(), trend: None }
                StatCard { theme, label: "Usage".to_string(), value: format_percent(u32::from(c.usage)), sub: "Of monthly limit".to_string(), trend: None }
                StatCard { theme, label: "Total paid".to_string(), value: format_dollars(c.total_paid), sub: "Lifetime".to_string(), trend: None }
                StatCard { theme, label: "Active since".to_string(), value: c.joined.clone(), sub: format!("Renews {}", next_renewal(c)), trend: None }
            }

            div { class: "flex items-center gap-1",
                for t in DetailTab::ALL {
                    button {
                        key: "{t.label()}",
                        class: "{theme.chip(tab() == t)}",
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }

            {
                match tab() {
                    DetailTab::Overview => rsx! {
                        div { class: "grid grid-cols-1 xl:grid-cols-3 gap-6",
                            div { class: "{theme.card()} xl:col-span-2 space-y-3",
                                div { class: "flex items-center justify-between",
                                    h2 { class: "{theme.heading()}", "Usage events" }
                                    if let Some(p) = latest {
                                        span { class: "{theme.muted()}", "{p.month}: {format_number(p.value)}" }
                                    }
                                }
                                SeriesChart {
                                    points: record.usage.to_vec(),
                                    config: theme.usage_chart(),
                                    theme,
                                    color: usage_chart_color(c).to_string(),
                                    suffix: "events".to_string(),
                                    period: "2025".to_string(),
                                }
                            }
                            div { class: "{theme.card()} space-y-4",
                                div { class: "flex justify-center",
                                    UsageGauge { percent: u32::from(c.usage), theme,
                                        div { class: "text-center",
                                            p { class: "{theme.value_text()}", "{format_percent(u32::from(c.usage))}" }
                                            p { class: "{theme.muted()}", "used" }
                                        }
                                    }
                                }
                                h2 { class: "{theme.heading()}", "Timeline" }
                                ul { class: "space-y-3",
                                    for (i, ev) in record.timeline.iter().enumerate() {
                                        li { key: "{i}", class: "flex items-start gap-3",
                                            span { class: "mt-1.5 h-2 w-2 shrink-0 {theme.tone(ev.tone)}" }
                                            div {
                                                p { class: "text-sm", "{ev.text}" }
                                                p { class: "{theme.muted()}", "{ev.time}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    DetailTab::Usage => rsx! {
                        div { class: "{theme.card()}",
                            h2 { class: "{theme.heading()} mb-3", "Current billing period" }
                            if record.metrics.is_empty() {
                                p { class: "py-8 text-center {theme.muted()}", "No metered usage this period" }
                            } else {
                                table { class: "w-full",
                                    thead {
                                        tr { class: "{theme.table_head()}",
                                            th { class: "py-2", "Metric" }
                                            th { class: "text-right", "Events" }
                                            th { class: "text-right", "Unit price" }
                                            th { class: "text-right", "Subtotal" }
                                        }
                                    }
                                    tbody {
                                        for m in record.metrics.iter() {
                                            tr { key: "{m.name}", class: "{theme.table_row()}",
                                                td { class: "py-2", "{m.name}" }
                                                td { class: "text-right tabular-nums", "{group_thousands(m.events)}" }
                                                td { class: "text-right tabular-nums", "{m.unit_price}" }
                                                td { class: "text-right tabular-nums", "{m.subtotal}" }
                                            }
                                        }
                                        tr { class: "font-semibold",
                                            td { class: "py-2", colspan: "3", "Total" }
                                            td { class: "text-right tabular-nums", "{period_total}" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    DetailTab::Invoices => rsx! {
                        div { class: "{theme.card()}",
                            div { class: "flex items-center justify-between mb-3",
                                h2 { class: "{theme.heading()}", "Invoices" }
                                span { class: "{theme.muted()}", "Paid {billed.paid.amount} across {billed.paid.count}" }
                            }
                            if record.invoices.is_empty() {
                                p { class: "py-8 text-center {theme.muted()}", "No invoices yet" }
                            } else {
                                table { class: "w-full",
                                    thead {
                                        tr { class: "{theme.table_head()}",
                                            th { class: "py-2", "Invoice" }
                                            th { "Period" }
                                            th { "Date" }
                                            th { "Status" }
                                            th { class: "text-right", "Amount" }
                                        }
                                    }
                                    tbody {
                                        for inv in record.invoices.iter() {
                                            tr { key: "{inv.id}", class: "{theme.table_row()}",
                                                td { class: "py-2 tabular-nums", "{inv.id}" }
                                                td { "{inv.period}" }
                                                td { class: "{theme.muted()}", "{inv.date}" }
                                                td { StatusBadge { theme, label: inv.status.label().to_string(), tone: theme.invoice_status(inv.status).to_string() } }
                                                td { class: "text-right tabular-nums", "{inv.amount}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    DetailTab::Subscription => rsx! {
                        div { class: "{theme.card()} space-y-4",
                            div { class: "flex items-center justify-between",
                                h2 { class: "{theme.heading()}", "{c.plan.label()} plan" }
                                span { class: "{theme.muted()}", "Next renewal {next_renewal(c)}" }
                            }
                            ul { class: "space-y-3",
                                for limit in record.plan_limits.iter() {
                                    li { key: "{limit.feature}", class: "flex items-center justify-between gap-4",
                                        div {
                                            p { class: "text-sm", "{limit.feature}" }
                                            p { class: "{theme.muted()}", "{limit_text(limit)}" }
                                        }
                                        UsageBar { theme, percent: plan_limit_percent(limit) }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renewal_depends_on_status() {
        let fx = Fixtures::seeded();
        let labels: Vec<&str> = fx.customers.iter().map(next_renewal).collect();
        assert_eq!(
            labels,
            vec!["Mar 1, 2025", "Mar 1, 2025", "Feb 11, 2025", "Mar 1, 2025", "—"]
        );
    }

    #[test]
    fn only_substituted_lookups_leave_a_note() {
        let fx = Fixtures::seeded();
        assert_eq!(substitution_note("2", &fx.customer_record("2")), None);
        assert_eq!(
            substitution_note("999", &fx.customer_record("999")).as_deref(),
            Some("unknown id \"999\", showing 1")
        );
    }

    #[test]
    fn unlimited_limits_say_so() {
        let limit = PlanLimit {
            feature: "Team Seats".into(),
            limit: None,
            used: 12.0,
        };
        assert_eq!(limit_text(&limit), "12 / Unlimited");
        assert_eq!(plan_limit_percent(&limit), 0);
    }
}
