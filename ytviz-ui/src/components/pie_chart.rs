//! Pie Chart Component
//!
//! Sentiment shares drawn on HTML5 Canvas with an HTML legend.

use leptos::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use ytviz::render::PieChart;

use super::Card;

const RADIUS: f64 = 80.0;

/// Sentiment distribution card
#[component]
pub fn SentimentPieChart(chart: PieChart) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (title, description) = (chart.title, chart.description);
    let legend = chart.slices.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &chart);
        }
    });

    view! {
        <Card title=title description=description>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="mx-auto h-[300px]"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {legend
                    .into_iter()
                    .map(|slice| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-sm"
                                style=format!("background-color: {}", slice.color)
                            />
                            <span class="text-sm text-gray-300">{slice.label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

/// Start and end angle of each slice, clockwise from twelve o'clock
fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return vec![(0.0, 0.0); values.len()];
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let end = start + v.max(0.0) / total * TAU;
            let angles = (start, end);
            start = end;
            angles
        })
        .collect()
}

fn draw_pie(canvas: &HtmlCanvasElement, chart: &PieChart) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let values: Vec<f64> = chart.slices.iter().map(|s| s.value).collect();
    let total = chart.total();

    ctx.set_font("12px sans-serif");
    for (slice, (start, end)) in chart.slices.iter().zip(slice_angles(&values)) {
        if end <= start {
            continue;
        }

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, RADIUS, start, end);
        ctx.close_path();
        ctx.fill();

        // Value label just outside the slice
        let mid = (start + end) / 2.0;
        let x = cx + (RADIUS + 14.0) * mid.cos();
        let y = cy + (RADIUS + 14.0) * mid.sin();
        ctx.set_text_align(if mid.cos() >= 0.0 { "left" } else { "right" });
        let _ = ctx.fill_text(&format!("{}", slice.value), x, y + 4.0);
    }
    ctx.set_text_align("start");

    if total <= 0.0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No sentiment data", cx - 65.0, cy);
    }
}
