// Core types shared by the scratch logic and the renderer.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the canvas is on screen (pixels)
    pub height: usize,     // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Read one pixel; None when (x,y) is off the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// A position in canvas space (same units as the pointer).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

/// One white scratch line. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkSegment {
    pub start: Point,
    pub end: Point,
    pub thickness: f32, // stroke width in pixels
}

/// What the host reports once per frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub pointer: Point,  // where the pointer is now
    pub previous: Point, // where it was last frame
    pub active: bool,    // button held
}
