use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::analytics::summary::InvoiceBreakdown;
use crate::components::{Section, SeriesChart, Shell, StatCard, StatusBadge};
use crate::shared::fixtures::Fixtures;
use crate::shared::types::{Kpi, KpiValue};
use crate::theme::Theme;
use crate::utils::format::{format_dollars, format_number, format_percent, group_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Revenue,
    Events,
}

impl ChartTab {
    const ALL: [ChartTab; 2] = [ChartTab::Revenue, ChartTab::Events];

    fn label(self) -> &'static str {
        match self {
            ChartTab::Revenue => "Revenue",
            ChartTab::Events => "Events",
        }
    }
}

fn kpi_text(value: &KpiValue) -> String {
    match value {
        KpiValue::Dollars(d) => format_dollars(*d),
        KpiValue::Count(n) => group_thousands(u64::from(*n)),
        KpiValue::Text(s) => s.clone(),
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Home(theme: Theme) -> Element {
    let fx = use_context::<Rc<Fixtures>>();
    let mut tab = use_signal(|| ChartTab::Revenue);

    let (series, suffix) = match tab() {
        ChartTab::Revenue => (fx.revenue.clone(), ""),
        ChartTab::Events => (fx.events.clone(), "events"),
    };
    let current = series.last().map(|p| p.value).unwrap_or(0.0);
    let current_label = match tab() {
        ChartTab::Revenue => format!("${}", format_number(current)),
        ChartTab::Events => format_number(current),
    };
    let breakdown = InvoiceBreakdown::from_recent(&fx.recent_invoices);

    rsx! {
        Shell { theme, section: Section::Home, title: "Home".to_string(),
            KpiRow { theme, kpis: fx.kpis_top.clone() }
            KpiRow { theme, kpis: fx.kpis_bottom.clone() }

            div { class: "grid grid-cols-1 xl:grid-cols-3 gap-6",
                div { class: "{theme.card()} xl:col-span-2 space-y-4",
                    div { class: "flex items-center justify-between",
                        div { class: "flex items-center gap-1",
                            for t in ChartTab::ALL {
                                button {
                                    key: "{t.label()}",
                                    class: "{theme.chip(tab() == t)}",
                                    onclick: move |_| {
                                        info!("[home] chart tab -> {}", t.label());
                                        tab.set(t);
                                    },
                                    "{t.label()}"
                                }
                            }
                        }
                        div { class: "flex items-baseline gap-1.5",
                            span { class: "{theme.label_text()}", "Current" }
                            span { class: "{theme.value_text()}", "{current_label}" }
                        }
                    }
                    SeriesChart {
                        points: series,
                        config: theme.overview_chart(),
                        theme,
                        color: theme.accent().to_string(),
                        suffix: suffix.to_string(),
                        period: "2025".to_string(),
                    }
                }
                InvoiceStatusPanel { theme, breakdown }
            }

            div { class: "grid grid-cols-1 xl:grid-cols-3 gap-6",
                div { class: "{theme.card()} xl:col-span-2",
                    h2 { class: "{theme.heading()} mb-3", "Recent invoices" }
                    table { class: "w-full",
                        thead {
                            tr { class: "{theme.table_head()}",
                                th { class: "py-2", "Invoice" }
                                th { "Customer" }
                                th { "Date" }
                                th { "Status" }
                                th { class: "text-right", "Amount" }
                            }
                        }
                        tbody {
                            for inv in fx.recent_invoices.iter() {
                                tr { key: "{inv.id}", class: "{theme.table_row()}",
                                    td { class: "py-2 tabular-nums", "{inv.id}" }
                                    td { "{inv.customer}" }
                                    td { class: "{theme.muted()}", "{inv.date}" }
                                    td {
                                        StatusBadge { theme, label: inv.status.label().to_string(), tone: theme.invoice_status(inv.status).to_string() }
                                    }
                                    td { class: "text-right tabular-nums", "{inv.amount.short()}" }
                                }
                            }
                        }
                    }
                }
                div { class: "{theme.card()}",
                    h2 { class: "{theme.heading()} mb-3", "Activity" }
                    ul { class: "space-y-3",
                        for (i, ev) in fx.activity.iter().enumerate() {
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
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn KpiRow(theme: Theme, kpis: Vec<Kpi>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 lg:grid-cols-4 gap-4",
            for k in kpis {
                StatCard {
                    key: "{k.label}",
                    theme,
                    label: k.label.clone(),
                    value: kpi_text(&k.value),
                    sub: k.sub.clone(),
                    trend: k.trend.clone(),
                    tip: k.tip.clone(),
                }
            }
        }
    }
}

/// Collected amount and per-status totals of the recent invoices.
#[allow(non_snake_case)]
#[component]
fn InvoiceStatusPanel(theme: Theme, breakdown: InvoiceBreakdown) -> Element {
    let rows = breakdown.rows();
    rsx! {
        div { class: "{theme.card()} space-y-4",
            h2 { class: "{theme.heading()}", "Invoice status" }
            div {
                p { class: "{theme.label_text()}", "Collected" }
                p { class: "{theme.value_text()}", "{breakdown.paid.amount.short()}" }
                p { class: "{theme.muted()}", "of {breakdown.billed.short()} billed" }
            }
            div { class: "flex h-2 w-full overflow-hidden {theme.track()}",
                for row in rows {
                    div { key: "{row.status.label()}", class: "h-full {theme.invoice_bar(row.status)}", style: "width:{breakdown.share(&row)}%" }
                }
            }
            ul { class: "space-y-2",
                for row in rows {
                    li { key: "{row.status.label()}", class: "flex items-center justify-between",
                        div { class: "flex items-center gap-2",
                            span { class: "h-2 w-2 {theme.invoice_bar(row.status)}" }
                            span { class: "text-sm", "{row.status.label()}" }
                            span { class: "{theme.muted()}", "{row.count}" }
                        }
                        span { class: "text-sm tabular-nums", "{row.amount.short()}" }
                    }
                }
            }
            div { class: "flex items-center justify-between pt-2",
                span { class: "{theme.label_text()}", "Collection rate" }
                span { class: "text-sm font-semibold tabular-nums", "{format_percent(breakdown.collection_rate)}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_values_render_for_display() {
        assert_eq!(kpi_text(&KpiValue::Dollars(15_340)), "$15,340");
        assert_eq!(kpi_text(&KpiValue::Count(24)), "24");
        assert_eq!(kpi_text(&KpiValue::Text("2.1%".into())), "2.1%");
    }
}
