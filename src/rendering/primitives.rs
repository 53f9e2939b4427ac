//! Draw primitives emitted by the rendering pipeline
//!
//! The core never touches a drawing API: each tick it produces a [`Frame`],
//! a complete, self-contained, ordered list of primitives (clear-then-draw
//! contract, no incremental diffing). An external surface adapter walks the
//! list in order; later primitives visually sit on top of earlier ones.

use crate::geometry::isometric::NVec2;

/// Straight-alpha color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Scale the color channels, keeping alpha; used for face shading
    pub fn shaded(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }
}

/// Stroke style: color, width, optional dash pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32, // px
    pub dash: Option<[f32; 2]>, // [on, off] lengths in px; None = solid
}

impl Stroke {
    pub const fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: Rgba, width: f32, on: f32, off: f32) -> Self {
        Self {
            color,
            width,
            dash: Some([on, off]),
        }
    }
}

/// One drawable shape with explicit style
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: NVec2,
        to: NVec2,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<NVec2>,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<NVec2>,
        fill: Rgba,
        outline: Option<Stroke>,
    },
    Text {
        at: NVec2,
        content: String,
        size: f32, // px
        color: Rgba,
    },
}

/// Ordered primitive list for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    primitives: Vec<Primitive>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    pub fn line(&mut self, from: NVec2, to: NVec2, stroke: Stroke) {
        self.push(Primitive::Line { from, to, stroke });
    }

    pub fn polyline(&mut self, points: Vec<NVec2>, stroke: Stroke) {
        self.push(Primitive::Polyline { points, stroke });
    }

    pub fn polygon(&mut self, points: Vec<NVec2>, fill: Rgba, outline: Option<Stroke>) {
        self.push(Primitive::Polygon {
            points,
            fill,
            outline,
        });
    }

    pub fn text(&mut self, at: NVec2, content: impl Into<String>, size: f32, color: Rgba) {
        self.push(Primitive::Text {
            at,
            content: content.into(),
            size,
            color,
        });
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }
}
