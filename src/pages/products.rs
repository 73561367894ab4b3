use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::analytics::filter::{filter_records, Choice, Facet, FieldFacet, SearchField};
use crate::analytics::summary::{live_mrr, product_status_count, ProductStats};
use crate::components::{Section, Shell, StatCard, StatusBadge};
use crate::shared::fixtures::Fixtures;
use crate::shared::types::{PricingModel, Product, ProductStatus};
use crate::theme::Theme;
use crate::utils::format::{format_dollars, group_thousands};

fn name(p: &Product) -> &str {
    &p.name
}

fn description(p: &Product) -> &str {
    &p.description
}

pub const SEARCH_FIELDS: [SearchField<Product>; 2] = [name, description];

pub fn select_products<'a>(
    products: &'a [Product],
    query: &str,
    status: Choice<ProductStatus>,
    model: Choice<PricingModel>,
) -> Vec<&'a Product> {
    let by_status = FieldFacet::new(status, |p: &Product| p.status);
    let by_model = FieldFacet::new(model, |p: &Product| p.pricing_model);
    let facets: [&dyn Facet<Product>; 2] = [&by_status, &by_model];
    filter_records(products, query, &SEARCH_FIELDS, &facets)
}

#[allow(non_snake_case)]
#[component]
pub fn Products(theme: Theme) -> Element {
    let fx = use_context::<Rc<Fixtures>>();
    let mut query = use_signal(String::new);
    let mut status = use_signal(|| Choice::<ProductStatus>::All);
    let mut model = use_signal(|| Choice::<PricingModel>::All);

    let stats = ProductStats::from_products(&fx.products);
    let shown = select_products(&fx.products, &query.read(), status(), model());
    let shown_mrr = live_mrr(shown.iter().copied());

    let status_chips: Vec<(Choice<ProductStatus>, &'static str, usize)> =
        std::iter::once((Choice::All, "All", stats.total))
            .chain(
                ProductStatus::ALL
                    .into_iter()
                    .map(|s| (Choice::Only(s), s.label(), product_status_count(&fx.products, s))),
            )
            .collect();
    let model_chips: Vec<(Choice<PricingModel>, &'static str)> =
        std::iter::once((Choice::All, "All models"))
            .chain(PricingModel::ALL.into_iter().map(|m| (Choice::Only(m), m.label())))
            .collect();

    rsx! {
        Shell { theme, section: Section::Products, title: "Products".to_string(),
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                StatCard { theme, label: "Products".to_string(), value: stats.total.to_string(), sub: format!("{} live · {} draft", stats.live, stats.draft), trend: None }
                StatCard { theme, label: "Active subscriptions".to_string(), value: group_thousands(u64::from(stats.subscribers)), sub: "Across live products".to_string(), trend: None }
                StatCard { theme, label: "Product MRR".to_string(), value: format_dollars(stats.mrr), sub: "Live products only".to_string(), trend: None }
            }

            div { class: "{theme.card()} space-y-4",
                div { class: "flex flex-wrap items-center gap-3",
                    input {
                        class: "{theme.input()}",
                        r#type: "search",
                        placeholder: "Search products",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    div { class: "flex items-center gap-1",
                        for (choice, label, count) in status_chips {
                            button {
                                key: "{label}",
                                class: "{theme.chip(status() == choice)}",
                                onclick: move |_| {
                                    info!("[products] status filter -> {:?}", choice);
                                    status.set(choice);
                                },
                                "{label} "
                                span { class: "opacity-60", "{count}" }
                            }
                        }
                    }
                    div { class: "flex items-center gap-1",
                        for (choice, label) in model_chips {
                            button {
                                key: "{label}",
                                class: "{theme.chip(model() == choice)}",
                                onclick: move |_| {
                                    info!("[products] pricing filter -> {:?}", choice);
                                    model.set(choice);
                                },
                                "{label}"
                            }
                        }
                    }
                }

                if shown.is_empty() {
                    div { class: "py-12 text-center {theme.muted()}", "No products match your filters" }
                } else {
                    table { class: "w-full",
                        thead {
                            tr { class: "{theme.table_head()}",
                                th { class: "py-2", "Product" }
                                th { "Pricing" }
                                th { "Rate" }
                                th { class: "text-right", "Subscribers" }
                                th { class: "text-right", "MRR" }
                                th { "Status" }
                                th { "Created" }
                            }
                        }
                        tbody {
                            for p in shown.iter().copied() {
                                tr { key: "{p.id}", class: "{theme.table_row()}",
                                    td { class: "py-2",
                                        span { class: "block font-medium", "{p.name}" }
                                        span { class: "block {theme.muted()}", "{p.description}" }
                                    }
                                    td { span { class: "px-1.5 py-0.5 text-[11px] {theme.pricing_model(p.pricing_model)}", "{p.pricing_model.label()}" } }
                                    td { class: "tabular-nums", "{p.rate}" }
                                    td { class: "text-right tabular-nums", "{p.subscribers}" }
                                    td { class: "text-right tabular-nums", "{format_dollars(p.mrr)}" }
                                    td { StatusBadge { theme, label: p.status.label().to_string(), tone: theme.product_status(p.status).to_string() } }
                                    td { class: "{theme.muted()}", "{p.created}" }
                                }
                            }
                        }
                    }
                }

                div { class: "flex items-center justify-between {theme.muted()}",
                    span { "Showing {shown.len()} of {stats.total}" }
                    span { "Live MRR {format_dollars(shown_mrr)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_reads_descriptions() {
        let fx = Fixtures::seeded();
        let rows = select_products(&fx.products, "vector", Choice::All, Choice::All);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Embeddings API");
    }

    #[test]
    fn status_and_model_filters_combine() {
        let fx = Fixtures::seeded();
        let per_token_live = select_products(
            &fx.products,
            "",
            Choice::Only(ProductStatus::Live),
            Choice::Only(PricingModel::PerToken),
        );
        assert_eq!(per_token_live.len(), 2);

        let drafts = select_products(
            &fx.products,
            "",
            Choice::Only(ProductStatus::Draft),
            Choice::All,
        );
        assert_eq!(drafts.len(), 1);
        assert_eq!(live_mrr(drafts.iter().copied()), 0);
        assert!(select_products(&fx.products, "", Choice::Only(ProductStatus::Archived), Choice::All).is_empty());
    }
}
