use dioxus::prelude::*;

use crate::theme::Theme;

/// Small pill with a status label. `tone` is one of the theme's status classes.
#[allow(non_snake_case)]
#[component]
pub fn StatusBadge(label: String, tone: String, theme: Theme) -> Element {
    let shape = match theme {
        Theme::Light => "rounded-full px-2 py-0.5 text-[11px] font-medium capitalize",
        Theme::Terminal => "px-1.5 py-px text-[9px] uppercase tracking-widest",
    };
    rsx! {
        span { class: "inline-flex items-center gap-1 {shape} {tone}", "{label}" }
    }
}
