use dioxus::prelude::*;

use crate::shared::types::Trend;
use crate::theme::Theme;

/// Headline number with a caption and an optional trend line.
#[allow(non_snake_case)]
#[component]
pub fn StatCard(
    label: String,
    value: String,
    theme: Theme,
    #[props(!optional)] trend: Option<Trend>,
    #[props(default)] sub: String,
    #[props(default)] tip: String,
) -> Element {
    let trend_class = |up: bool| match (theme, up) {
        (Theme::Light, true) => "text-emerald-600",
        (Theme::Light, false) => "text-red-600",
        (Theme::Terminal, true) => "text-[#22C55E]",
        (Theme::Terminal, false) => "text-[#EF4444]",
    };
    rsx! {
        div { class: "{theme.card()} space-y-1.5", title: "{tip}",
            p { class: "{theme.label_text()}", "{label}" }
            p { class: "{theme.value_text()}", "{value}" }
            div { class: "flex items-center gap-2",
                if let Some(t) = trend {
                    span { class: "text-xs font-medium {trend_class(t.up)}",
                        if t.up { "▲ " } else { "▼ " }
                        "{t.label}"
                    }
                }
                if !sub.is_empty() {
                    span { class: "{theme.muted()}", "{sub}" }
                }
            }
        }
    }
}
