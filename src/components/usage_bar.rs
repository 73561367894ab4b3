use dioxus::prelude::*;

use crate::theme::{Theme, UsageLevel};

#[allow(non_snake_case)]
#[component]
pub fn UsageBar(percent: u32, theme: Theme, #[props(default = true)] show_label: bool) -> Element {
    let pct = percent.min(100);
    let fill = theme.usage_bar(UsageLevel::from_percent(pct));
    let track = theme.track();
    rsx! {
        div { class: "flex items-center gap-2",
            div { class: "h-1.5 w-20 overflow-hidden {track}",
                div { class: "h-full {fill}", style: "width:{pct}%" }
            }
            if show_label {
                span { class: "{theme.muted()} tabular-nums", "{pct}%" }
            }
        }
    }
}
