use std::f64::consts::PI;

use crate::constants::{LABEL_MAX_CHARS, LABEL_TRUNCATED_CHARS, SMALL_LABEL_THRESHOLD};

pub const WHEEL_SIZE: f64 = 600.0;
pub const LABEL_RADIUS_RATIO: f64 = 0.65;
pub const RIM_LIGHT_COUNT: usize = 24;
pub const RIM_LIGHT_INSET: f64 = 15.0;
pub const RIM_LIGHT_PERIOD_MS: f64 = 100.0;

/// Where one slice sits on the unrotated wheel, in canvas coordinates
/// (angles in radians, 0 at 3 o'clock, growing clockwise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    pub start_angle: f64,
    pub end_angle: f64,
    pub label_x: f64,
    pub label_y: f64,
    /// Rotation applied to the label so it reads outward along the bisector.
    pub label_rotation: f64,
}

/// Lays out `count` equal slices clockwise, the first one starting at
/// 12 o'clock, on a wheel centred at (`cx`, `cy`).
pub fn slices(count: usize, cx: f64, cy: f64, radius: f64) -> Vec<SliceGeometry> {
    if count == 0 {
        return Vec::new();
    }

    let step = 360.0 / count as f64;
    (0..count)
        .map(|index| {
            let start_angle = (index as f64 * step - 90.0).to_radians();
            let end_angle = ((index + 1) as f64 * step - 90.0).to_radians();
            let bisector = start_angle + (end_angle - start_angle) / 2.0;
            let label_radius = radius * LABEL_RADIUS_RATIO;

            SliceGeometry {
                start_angle,
                end_angle,
                label_x: cx + label_radius * bisector.cos(),
                label_y: cy + label_radius * bisector.sin(),
                label_rotation: bisector + PI / 2.0,
            }
        })
        .collect()
}

/// Long labels are cut down so they fit inside a slice.
pub fn label_text(text: &str) -> String {
    if text.chars().count() > LABEL_MAX_CHARS {
        let head: String = text.chars().take(LABEL_TRUNCATED_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

pub fn label_font_px(segment_count: usize) -> u32 {
    if segment_count > SMALL_LABEL_THRESHOLD {
        14
    } else {
        22
    }
}

/// Centres of the decorative lights around the rim.
pub fn rim_lights(cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    let light_radius = radius - RIM_LIGHT_INSET;
    (0..RIM_LIGHT_COUNT)
        .map(|i| {
            let angle = (i as f64 * 360.0 / RIM_LIGHT_COUNT as f64).to_radians();
            (cx + light_radius * angle.cos(), cy + light_radius * angle.sin())
        })
        .collect()
}

/// While spinning, every other light is lit and the pattern flips every
/// `RIM_LIGHT_PERIOD_MS`.
pub fn rim_light_lit(index: usize, now_ms: f64, is_spinning: bool) -> bool {
    if !is_spinning {
        return false;
    }
    let phase = (now_ms / RIM_LIGHT_PERIOD_MS).floor() as u64 % 2;
    index as u64 % 2 == phase
}
