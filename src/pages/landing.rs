use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::app::Route;
use crate::theme::Theme;

/// Entry page linking to both variants.
#[allow(non_snake_case)]
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-50 text-slate-900 grid place-items-center p-6",
            div { class: "w-full max-w-md space-y-4",
                h1 { class: "text-2xl font-semibold tracking-tight", "UnitPay dashboard" }
                p { class: "text-sm text-slate-500", "Pick a variant." }
                div { class: "grid grid-cols-2 gap-3",
                    for t in Theme::ALL {
                        Link {
                            key: "{t}",
                            to: Route::Home { theme: t },
                            class: "rounded-xl border border-slate-200 bg-white p-4 shadow-sm hover:border-slate-400",
                            span { class: "block text-xs text-slate-400", "/{t}" }
                            span { class: "block font-medium", "{t.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    info!("[router] no page at /{}", segments.join("/"));
    rsx! {
        div { class: "min-h-screen grid place-items-center bg-slate-50 text-slate-900",
            div { class: "text-center space-y-2",
                p { class: "text-lg font-medium", "Page not found" }
                Link { to: Route::Landing {}, class: "text-sm text-indigo-600 hover:underline", "Back to the dashboard" }
            }
        }
    }
}
