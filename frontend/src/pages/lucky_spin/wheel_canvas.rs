use std::f64::consts::PI;

use shared::wheel_geometry::{
    label_font_px, label_text, rim_light_lit, rim_lights, slices, WHEEL_SIZE,
};
use shared::wheel_settings::Segment;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();

        use_effect_with(
            (props.segments.clone(), props.rotation, props.is_spinning),
            move |(segments, rotation, is_spinning)| {
                match context_2d(&canvas_ref) {
                    Some(context) => draw_wheel(&context, segments, *rotation, *is_spinning),
                    None => log::warn!("Wheel canvas has no 2d context"),
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative w-[320px] h-[320px] md:w-[480px] md:h-[480px]">
            <canvas
                ref={canvas_ref}
                width={WHEEL_SIZE.to_string()}
                height={WHEEL_SIZE.to_string()}
                class="w-full h-full drop-shadow-[0_20px_50px_rgba(0,0,0,0.5)]"
            />
        </div>
    }
}

fn context_2d(canvas_ref: &NodeRef) -> Option<CanvasRenderingContext2d> {
    canvas_ref
        .cast::<HtmlCanvasElement>()?
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn draw_wheel(context: &CanvasRenderingContext2d, segments: &[Segment], rotation: f64, is_spinning: bool) {
    let radius = WHEEL_SIZE / 2.0;
    let (cx, cy) = (radius, radius);

    context.clear_rect(0.0, 0.0, WHEEL_SIZE, WHEEL_SIZE);

    // Everything below turns with the wheel; the pointer lives outside the canvas.
    context.save();
    let _ = context.translate(cx, cy);
    let _ = context.rotate(rotation.to_radians());
    let _ = context.translate(-cx, -cy);

    let layout = slices(segments.len(), cx, cy, radius);

    for (segment, slice) in segments.iter().zip(&layout) {
        context.begin_path();
        context.move_to(cx, cy);
        let _ = context.arc(cx, cy, radius, slice.start_angle, slice.end_angle);
        context.close_path();
        context.set_fill_style_str(&segment.color);
        context.fill();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.2)");
        context.set_line_width(1.0);
        context.stroke();
    }

    context.set_font(&format!(
        "900 {}px 'Segoe UI', Roboto, system-ui, sans-serif",
        label_font_px(segments.len())
    ));
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(2.0);
    context.set_shadow_offset_y(2.0);

    for (segment, slice) in segments.iter().zip(&layout) {
        context.save();
        let _ = context.translate(slice.label_x, slice.label_y);
        let _ = context.rotate(slice.label_rotation);
        let _ = context.fill_text(&label_text(&segment.text).to_uppercase(), 0.0, 0.0);
        context.restore();
    }

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_y(0.0);

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str("rgba(255, 255, 255, 0.1)");
    context.set_line_width(10.0);
    let _ = context.arc(cx, cy, radius - 5.0, 0.0, 2.0 * PI);
    context.stroke();

    let now = js_sys::Date::now();
    for (i, (x, y)) in rim_lights(cx, cy, radius).into_iter().enumerate() {
        context.begin_path();
        context.set_fill_style_str(if rim_light_lit(i, now, is_spinning) {
            "#ffffff"
        } else {
            "rgba(255, 255, 255, 0.4)"
        });
        let _ = context.arc(x, y, 4.0, 0.0, 2.0 * PI);
        context.fill();
    }

    draw_hub(context, cx, cy);

    context.restore();
}

fn draw_hub(context: &CanvasRenderingContext2d, cx: f64, cy: f64) {
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(6.0);
    context.set_shadow_offset_x(2.0);
    context.set_shadow_offset_y(2.0);

    context.begin_path();
    context.set_fill_style_str("#0f172a");
    context.set_stroke_style_str("rgba(255, 255, 255, 0.15)");
    context.set_line_width(8.0);
    let _ = context.arc(cx, cy, 45.0, 0.0, 2.0 * PI);
    context.fill();
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);

    context.begin_path();
    context.set_fill_style_str("#1e293b");
    let _ = context.arc(cx, cy, 35.0, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(cx, cy, 15.0, 0.0, 2.0 * PI);
    context.fill();
}
