//! Platform abstraction layer
//!
//! Maps browser pointer coordinates onto the simulation surface. Kept free of
//! `web_sys` types so it runs (and tests) natively.

/// Where the canvas sits on the page, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub top: f32,
    pub height: f32,
}

/// Convert a client-space pointer y into the human paddle's top edge
///
/// The paddle is centered on the pointer. When the canvas is displayed at a
/// different size than its surface, CSS pixels are scaled to surface pixels.
/// The result is clamped to `[0, surface_height - paddle_height]`.
pub fn pointer_to_paddle_y(
    client_y: f32,
    rect: CanvasRect,
    surface_height: f32,
    paddle_height: f32,
) -> f32 {
    let scale = if rect.height > 0.0 {
        surface_height / rect.height
    } else {
        1.0
    };
    let surface_y = (client_y - rect.top) * scale;
    let y = surface_y - paddle_height / 2.0;
    y.max(0.0).min(surface_height - paddle_height)
}
