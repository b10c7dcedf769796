//! Color descriptor to markup color string

use crate::model::Color;

/// Convert a color into `rgb(r,g,b)`, or `rgba(r,g,b,a)` when translucent
pub fn color_to_markup(color: &Color) -> String {
    let (r, g, b) = (channel(color.r), channel(color.g), channel(color.b));
    match color.alpha {
        Some(alpha) if alpha < 1.0 => {
            format!("rgba({},{},{},{})", r, g, b, alpha.clamp(0.0, 1.0))
        }
        _ => format!("rgb({},{},{})", r, g, b),
    }
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
