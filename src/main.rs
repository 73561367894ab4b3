use dioxus::prelude::*;

mod analytics;
mod app;
mod chart;
mod components;
mod config;
mod pages;
mod shared;
mod theme;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        backend::init_tracing();

        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "summary" {
                // Print the derived statistics and exit without serving
                if let Err(e) = backend::summary::print_summary(std::io::stdout().lock()) {
                    eprintln!("[summary] failed: {e:#}");
                    std::process::exit(1);
                }
                return;
            }
        }
    }
    dioxus::launch(app::App);
}
