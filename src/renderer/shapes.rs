//! Shape generation for 2D primitives
//!
//! All shapes are emitted in surface coordinates (top-left origin, y down)
//! as triangle lists.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_rect(&mut vertices, x, y, w, h, color);
    vertices
}

fn push_rect(vertices: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    vertices.push(Vertex::new(x, y, color));
    vertices.push(Vertex::new(x + w, y, color));
    vertices.push(Vertex::new(x, y + h, color));

    vertices.push(Vertex::new(x, y + h, color));
    vertices.push(Vertex::new(x + w, y, color));
    vertices.push(Vertex::new(x + w, y + h, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Dashed vertical net down the middle of the surface
///
/// One `dash`-long segment every `2 * dash`, starting at the top.
pub fn net(
    surface_width: f32,
    surface_height: f32,
    width: f32,
    dash: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let x = surface_width / 2.0 - width / 2.0;
    let mut y = 0.0;
    while y < surface_height {
        push_rect(&mut vertices, x, y, width, dash, color);
        y += dash * 2.0;
    }
    vertices
}

/// Seven-segment masks, bit 0 = a (top) through bit 6 = g (middle)
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Size of a seven-segment glyph
#[derive(Debug, Clone, Copy)]
pub struct GlyphSize {
    pub width: f32,
    pub height: f32,
    pub stroke: f32,
}

impl GlyphSize {
    /// Glyph roughly matching a font of the given pixel size
    pub fn for_font(px: f32) -> Self {
        Self {
            width: px * 0.55,
            height: px * 0.75,
            stroke: (px * 0.12).max(1.0),
        }
    }

    fn advance(&self) -> f32 {
        self.width + self.stroke * 1.5
    }
}

/// Generate a single digit (0-9) with its top-left corner at `(x, y)`
pub fn digit(value: u8, x: f32, y: f32, size: GlyphSize, color: [f32; 4]) -> Vec<Vertex> {
    let mask = DIGIT_SEGMENTS[(value % 10) as usize];
    let GlyphSize {
        width: w,
        height: h,
        stroke: t,
    } = size;
    let half = h / 2.0;

    // (x, y, w, h) for segments a..g
    let segments = [
        (x, y, w, t),                      // a
        (x + w - t, y, t, half),           // b
        (x + w - t, y + half, t, half),    // c
        (x, y + h - t, w, t),              // d
        (x, y + half, t, half),            // e
        (x, y, t, half),                   // f
        (x, y + half - t / 2.0, w, t),     // g
    ];

    let mut vertices = Vec::with_capacity(mask.count_ones() as usize * 6);
    for (bit, &(sx, sy, sw, sh)) in segments.iter().enumerate() {
        if mask & (1 << bit) != 0 {
            push_rect(&mut vertices, sx, sy, sw, sh, color);
        }
    }
    vertices
}

/// Generate a left-aligned number whose baseline sits at `baseline_y`
pub fn number(value: u32, x: f32, baseline_y: f32, size: GlyphSize, color: [f32; 4]) -> Vec<Vertex> {
    let text = value.to_string();
    let top = baseline_y - size.height;
    let mut vertices = Vec::new();
    for (i, c) in text.bytes().enumerate() {
        let d = c - b'0';
        vertices.extend(digit(d, x + i as f32 * size.advance(), top, size, color));
    }
    vertices
}
