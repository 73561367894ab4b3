use std::rc::Rc;

use dioxus::prelude::*;

use crate::pages::{CustomerDetail, Customers, Home, Landing, NotFound, Products};
use crate::shared::fixtures::Fixtures;
use crate::theme::Theme;
use crate::{FAVICON, TAILWIND_CSS};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/:theme")]
    Home { theme: Theme },
    #[route("/:theme/customers")]
    Customers { theme: Theme },
    #[route("/:theme/customers/:id")]
    CustomerDetail { theme: Theme, id: String },
    #[route("/:theme/products")]
    Products { theme: Theme },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // Seed data is built once and shared read-only with every page.
    use_context_provider(|| Rc::new(Fixtures::seeded()));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "UnitPay" }
        Router::<Route> {}
    }
}
