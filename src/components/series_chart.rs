use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::chart::hover::HoverTarget;
use crate::chart::path::{area_path, line_path};
use crate::chart::scale::SeriesScales;
use crate::config::ChartConfig;
use crate::shared::types::SeriesPoint;
use crate::theme::{Marker, Theme};
use crate::utils::format::format_compact;

/// Monthly series drawn as a monotone line over a shaded area, with a
/// crosshair and tooltip following the pointer.
#[allow(non_snake_case)]
#[component]
pub fn SeriesChart(
    points: Vec<SeriesPoint>,
    config: ChartConfig,
    theme: Theme,
    color: String,
    #[props(default = 640.0)] width: f64,
    #[props(default = 220.0)] height: f64,
    /// Appended to the tooltip value, e.g. a unit.
    #[props(default)]
    suffix: String,
    /// Appended to the tooltip month, e.g. a year.
    #[props(default)]
    period: String,
) -> Element {
    let mut hovered = use_signal(|| Option::<HoverTarget>::None);

    let scales = SeriesScales::new(&points, width, height, &config);
    let m = config.margins;
    let coords = scales.plot_all(&points);
    let line_d = line_path(&coords);
    let area_d = area_path(&coords, scales.inner_height);
    let grid = scales.grid_rows();
    let marker = theme.marker();
    let view_box = format!("0 0 {width} {height}");
    let inner_w = scales.inner_width;
    let inner_h = scales.inner_height;
    let gradient_id = format!("series-fill-{}", color.trim_start_matches('#'));
    let grid_stroke = theme.grid_stroke();
    let axis_text = theme.axis_text();

    let on_move = {
        let scales = scales.clone();
        let points = points.clone();
        move |evt: MouseEvent| {
            let offset_x = evt.element_coordinates().x;
            let target = HoverTarget::resolve(&scales, &points, offset_x);
            if let Some(t) = &target {
                debug!("[series_chart] hover {} at {:.1}", t.label(), offset_x);
            }
            hovered.set(target);
        }
    };

    rsx! {
        div { class: "relative select-none overflow-x-auto",
            // Drawn at its nominal size so pointer offsets are in scale pixels
            svg { class: "block", view_box: "{view_box}", width: "{width}", height: "{height}",
                defs {
                    linearGradient { id: "{gradient_id}", x1: "0", y1: "0", x2: "0", y2: "1",
                        stop { offset: "0%", stop_color: "{color}", stop_opacity: "0.22" }
                        stop { offset: "100%", stop_color: "{color}", stop_opacity: "0" }
                    }
                }
                g { transform: "translate({m.left},{m.top})",
                    // Grid rows at the nice tick values
                    for (value, gy) in grid.iter().copied() {
                        line { key: "{value}", x1: "0", x2: "{inner_w}", y1: "{gy}", y2: "{gy}", stroke: "{grid_stroke}", stroke_width: "1", stroke_dasharray: "3 3" }
                        text { x: "{inner_w}", y: "{gy - 4.0}", text_anchor: "end", font_size: "9", fill: "{axis_text}", "{format_compact(value)}" }
                    }
                    // Baseline is drawn even when there is nothing to plot
                    line { x1: "0", x2: "{inner_w}", y1: "{inner_h}", y2: "{inner_h}", stroke: "{grid_stroke}", stroke_width: "1" }
                    if scales.draws_series() {
                        path { d: "{area_d}", fill: "url(#{gradient_id})", stroke: "none" }
                        path { d: "{line_d}", fill: "none", stroke: "{color}", stroke_width: "2", stroke_linejoin: "round" }
                        for (i, (px, py)) in coords.iter().copied().enumerate() {
                            {marker_node(marker, i, px, py, 2.5, &color)}
                        }
                    }
                    for (i, label) in scales.x.labels().iter().enumerate() {
                        text { key: "{label}", x: "{scales.x.position(i)}", y: "{inner_h + 18.0}", text_anchor: "middle", font_size: "10", fill: "{axis_text}", "{label}" }
                    }
                    {
                        match hovered.read().as_ref() {
                            Some(t) => {
                                let title = t.title(&period);
                                let value_label = if suffix.is_empty() {
                                    t.value_label()
                                } else {
                                    format!("{} {suffix}", t.value_label())
                                };
                                let tip_w = (title.len().max(value_label.len()) as f64) * 7.0 + 16.0;
                                let tip_h = 34.0;
                                let tip_x = (t.x - tip_w / 2.0).clamp(0.0, (inner_w - tip_w).max(0.0));
                                let tip_y = (t.y - 12.0 - tip_h).max(-m.top);
                                let tip_rx = if marker == Marker::Circle { 6 } else { 0 };
                                let tip_fill = theme.tooltip_fill();
                                rsx! {
                                    g { key: "tooltip", pointer_events: "none",
                                        line { x1: "{t.x}", x2: "{t.x}", y1: "0", y2: "{inner_h}", stroke: "{color}", stroke_opacity: "0.4", stroke_width: "1", stroke_dasharray: "2 2" }
                                        if scales.draws_series() {
                                            {marker_node(marker, t.index, t.x, t.y, 4.5, &color)}
                                        }
                                        rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "{tip_rx}", fill: "{tip_fill}", stroke: "{color}", stroke_opacity: "0.3" }
                                        text { x: "{tip_x + 8.0}", y: "{tip_y + 13.0}", font_size: "9", fill: "#C0C0BA", "{title}" }
                                        text { x: "{tip_x + 8.0}", y: "{tip_y + 27.0}", font_size: "12", font_weight: "700", fill: "{color}", "{value_label}" }
                                    }
                                }
                            }
                            _ => rsx! { Fragment {} },
                        }
                    }
                    // Transparent hit surface over the inner area
                    rect {
                        x: "0", y: "0", width: "{inner_w}", height: "{inner_h}", fill: "transparent",
                        onmousemove: on_move,
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
            }
        }
    }
}

fn marker_node(marker: Marker, key: usize, x: f64, y: f64, r: f64, color: &str) -> Element {
    match marker {
        Marker::Circle => rsx! {
            circle { key: "{key}", cx: "{x}", cy: "{y}", r: "{r}", fill: "white", stroke: "{color}", stroke_width: "1.5" }
        },
        Marker::Square => rsx! {
            rect { key: "{key}", x: "{x - r}", y: "{y - r}", width: "{r * 2.0}", height: "{r * 2.0}", fill: "#0A0A08", stroke: "{color}", stroke_width: "1.5" }
        },
    }
}
