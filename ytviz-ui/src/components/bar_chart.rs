//! Bar Chart Component
//!
//! Word frequency bars drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use ytviz::render::BarChart;

use super::Card;

const BAR_COLOR: &str = "#0088FE";

/// Margins around the plot area: left, right, top, bottom
const MARGIN: (f64, f64, f64, f64) = (50.0, 20.0, 20.0, 60.0);

const GRID_LINES: usize = 5;

/// Word frequency card
#[component]
pub fn WordFrequencyChart(chart: BarChart) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (title, description) = (chart.title, chart.description);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &chart);
        }
    });

    view! {
        <Card title=title description=description>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-[400px] rounded-lg"
            />
        </Card>
    }
}

/// Largest axis value: `max` rounded up to a multiple of the grid step
fn axis_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let raw_step = max / GRID_LINES as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw_step)
        .unwrap_or(raw_step);
    step * GRID_LINES as f64
}

/// Horizontal extent `(x, width)` of each of `count` bars
fn bar_slots(count: usize, plot_width: f64) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let slot = plot_width / count as f64;
    let width = slot * 0.8;
    (0..count)
        .map(|i| (i as f64 * slot + (slot - width) / 2.0, width))
        .collect()
}

fn draw_bars(canvas: &HtmlCanvasElement, chart: &BarChart) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (left, right, top, bottom) = MARGIN;
    let plot_width = width - left - right;
    let plot_height = height - top - bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let max = chart.bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let y_max = axis_max(max);

    // Dashed grid with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    let dash = dash_pattern(&[3.0, 3.0]);
    let _ = ctx.set_line_dash(&dash);
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("12px sans-serif");

    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = top + fraction * plot_height;
        ctx.begin_path();
        ctx.move_to(left, y);
        ctx.line_to(width - right, y);
        ctx.stroke();

        let value = y_max * (GRID_LINES - i) as f64 / GRID_LINES as f64;
        let _ = ctx.fill_text(&format!("{}", value), 5.0, y + 4.0);
    }
    let _ = ctx.set_line_dash(&dash_pattern(&[]));

    let slots = bar_slots(chart.bars.len(), plot_width);
    for (bar, (x, bar_width)) in chart.bars.iter().zip(slots) {
        let bar_height = (bar.value.max(0.0) / y_max) * plot_height;
        let x = left + x;

        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x, top + plot_height - bar_height, bar_width, bar_height);

        // Category label, rotated so long words fit
        ctx.save();
        let _ = ctx.translate(x + bar_width / 2.0, top + plot_height + 10.0);
        let _ = ctx.rotate(std::f64::consts::FRAC_PI_4);
        ctx.set_fill_style(&"#d1d5db".into()); // gray-300
        let _ = ctx.fill_text(&bar.label, 0.0, 0.0);
        ctx.restore();
    }

    if chart.bars.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No words", width / 2.0 - 30.0, height / 2.0);
    }
}

fn dash_pattern(values: &[f64]) -> wasm_bindgen::JsValue {
    values
        .iter()
        .map(|v| wasm_bindgen::JsValue::from_f64(*v))
        .collect::<js_sys::Array>()
        .into()
}
