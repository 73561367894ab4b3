use dioxus::prelude::*;

use crate::app::Route;
use crate::components::LiveClock;
use crate::theme::Theme;

/// Top-level navigation entries of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Customers,
    Products,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Customers, Section::Products];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Customers => "Customers",
            Section::Products => "Products",
        }
    }

    pub fn route(self, theme: Theme) -> Route {
        match self {
            Section::Home => Route::Home { theme },
            Section::Customers => Route::Customers { theme },
            Section::Products => Route::Products { theme },
        }
    }
}

/// Sidebar and header around one page.
#[allow(non_snake_case)]
#[component]
pub fn Shell(theme: Theme, section: Section, title: String, children: Element) -> Element {
    let brand = match theme {
        Theme::Light => "text-sm font-semibold tracking-tight text-slate-900",
        Theme::Terminal => "text-[11px] font-bold uppercase tracking-[0.22em] text-[#22C55E]",
    };
    let header = match theme {
        Theme::Light => "h-12 flex items-center justify-between px-6 border-b border-slate-200 bg-white",
        Theme::Terminal => "h-10 flex items-center justify-between px-6 border-b border-white/[0.05]",
    };

    let scheme = match theme {
        Theme::Light => "light",
        Theme::Terminal => "dark",
    };

    rsx! {
        document::Meta { name: "color-scheme", content: scheme }
        div { class: "flex h-screen overflow-hidden {theme.page()}",
            aside { class: "{theme.sidebar()} flex flex-col gap-6",
                Link { to: Route::Home { theme }, class: "{brand} px-2", "UnitPay" }
                nav { class: "flex-1 space-y-1",
                    for s in Section::ALL {
                        Link { key: "{s.label()}", to: s.route(theme), class: "{theme.nav_link(s == section)}", "{s.label()}" }
                    }
                }
                div { class: "space-y-1",
                    p { class: "{theme.muted()} px-2", "Variant" }
                    for t in Theme::ALL {
                        Link { key: "{t}", to: section.route(t), class: "{theme.nav_link(t == theme)}", "{t.label()}" }
                    }
                }
            }
            div { class: "flex-1 flex flex-col overflow-hidden",
                header { class: "{header} shrink-0",
                    div { class: "flex items-center gap-1.5",
                        span { class: "{theme.muted()}", "General" }
                        span { class: "{theme.muted()}", "/" }
                        span { class: "{theme.label_text()}", "{title}" }
                    }
                    if theme == Theme::Terminal {
                        LiveClock { class: "text-[11px] tracking-widest text-[#ACACAA]".to_string() }
                    }
                }
                main { class: "flex-1 overflow-y-auto p-6 space-y-6", {children} }
            }
        }
    }
}
