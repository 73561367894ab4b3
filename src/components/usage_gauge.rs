use dioxus::prelude::*;

use crate::theme::{Marker, Theme, UsageLevel};

const SWEEP_START: f64 = 135.0;
const SWEEP: f64 = 270.0;

fn polar(c: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (c + r * rad.cos(), c + r * rad.sin())
}

/// SVG arc from `a0` to `a1` degrees (clockwise, 0° pointing right).
fn arc(c: f64, r: f64, a0: f64, a1: f64) -> String {
    let (x0, y0) = polar(c, r, a0);
    let (x1, y1) = polar(c, r, a1);
    let large = u8::from((a1 - a0).abs() >= 180.0);
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large} 1 {x1:.3} {y1:.3}")
}

/// Three-quarter ring showing how much of the plan quota is used.
#[allow(non_snake_case)]
#[component]
pub fn UsageGauge(
    percent: u32,
    theme: Theme,
    #[props(default = 132)] size: u32,
    #[props(default = 10)] stroke: u32,
    children: Element,
) -> Element {
    let pct = percent.min(100) as f64;
    let c = size as f64 / 2.0;
    let r = c - stroke as f64 / 2.0 - 1.0;
    let track_d = arc(c, r, SWEEP_START, SWEEP_START + SWEEP);
    // A zero-length arc renders as a dot with round caps, so skip it.
    let fill_d = (pct > 0.0).then(|| arc(c, r, SWEEP_START, SWEEP_START + SWEEP * pct / 100.0));
    let level = UsageLevel::from_percent(percent);
    let fill_class = match level {
        UsageLevel::Critical => "text-red-500",
        UsageLevel::High => "text-amber-400",
        UsageLevel::Normal if theme == Theme::Terminal => "text-[#22C55E]",
        UsageLevel::Normal => "text-emerald-500",
    };
    let track_class = match theme {
        Theme::Light => "text-slate-100",
        Theme::Terminal => "text-white/10",
    };
    let cap = match theme.marker() {
        Marker::Circle => "round",
        Marker::Square => "butt",
    };

    rsx! {
        div { class: "relative", style: "width:{size}px;height:{size}px",
            svg { width: "{size}", height: "{size}", view_box: "0 0 {size} {size}",
                path { class: "{track_class}", d: "{track_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "{cap}" }
                if let Some(d) = fill_d {
                    path { class: "{fill_class}", d: "{d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "{cap}" }
                }
            }
            div { class: "absolute inset-0 grid place-items-center", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sweep_uses_the_large_arc_flag() {
        assert!(arc(50.0, 40.0, SWEEP_START, SWEEP_START + SWEEP).contains(" 0 1 1 "));
        assert!(arc(50.0, 40.0, SWEEP_START, SWEEP_START + 90.0).contains(" 0 0 1 "));
    }

    #[test]
    fn arc_starts_on_the_circle() {
        let d = arc(50.0, 40.0, 0.0, 90.0);
        assert!(d.starts_with("M 90.000 50.000"));
        assert!(d.ends_with("50.000 90.000"));
    }
}
