use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::utils::format::clock_now;

/// HH:MM:SS label refreshed once a second.
#[allow(non_snake_case)]
#[component]
pub fn LiveClock(class: String) -> Element {
    // Left blank until the client takes over so the server render hydrates cleanly.
    let now = use_signal(|| {
        if cfg!(any(feature = "web", feature = "server")) {
            String::new()
        } else {
            clock_now()
        }
    });

    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        let ticker: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut ticker = ticker;
            move || {
                if let Some(h) = ticker.write().take() {
                    h.cancel();
                }
            }
        });

        use_effect({
            let mut now = now;
            let mut ticker = ticker;
            move || {
                now.set(clock_now());
                if ticker.peek().is_some() {
                    return;
                }
                info!("[live_clock] started");
                let handle = Interval::new(1_000, move || now.set(clock_now()));
                ticker.set(Some(handle));
            }
        });
    }

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    {
        // The task belongs to this scope and is dropped with it.
        let mut now = now;
        use_future(move || async move {
            loop {
                now.set(clock_now());
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            }
        });
    }

    rsx! {
        span { class: "{class} tabular-nums", "{now}" }
    }
}
