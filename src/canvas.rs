// The picture the user sees and exports.
// Visual: the tank is painted once; scratches are painted on top every
// frame and never erased, so marks dropped from the store stay visible
// until the next clear.

use crate::raster::{rgb, stroke_line};
use crate::scene::paint_background;
use crate::types::{FrameBuffer, MarkSegment};

const SCRATCH: u32 = rgb(255, 255, 255);

pub struct Canvas {
    buffer: FrameBuffer,
}

impl Canvas {
    /// A canvas with the tank already painted.
    pub fn new(width: usize, height: usize) -> Self {
        let mut canvas = Self { buffer: FrameBuffer::new(width, height) };
        canvas.reset();
        canvas
    }

    /// Repaint the tank over everything.
    /// Visual: all scratches vanish at once.
    pub fn reset(&mut self) {
        paint_background(&mut self.buffer);
    }

    /// Paint every mark, oldest first, as an opaque round-capped white line.
    pub fn draw_marks(&mut self, marks: &[MarkSegment]) {
        for mark in marks {
            stroke_line(&mut self.buffer, mark.start, mark.end, mark.thickness, SCRATCH, 255);
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn scratch(x0: f32, y0: f32, x1: f32, y1: f32) -> MarkSegment {
        MarkSegment { start: Point::new(x0, y0), end: Point::new(x1, y1), thickness: 3.0 }
    }

    #[test]
    fn starts_with_the_tank() {
        let canvas = Canvas::new(800, 600);
        let mut tank = FrameBuffer::new(800, 600);
        paint_background(&mut tank);
        assert_eq!(canvas.buffer().pixels, tank.pixels);
    }

    #[test]
    fn marks_are_white() {
        let mut canvas = Canvas::new(800, 600);
        canvas.draw_marks(&[scratch(700.0, 250.0, 700.0, 270.0)]);
        assert_eq!(canvas.buffer().pixel(700, 260), Some(SCRATCH));
    }

    #[test]
    fn marks_persist_until_reset() {
        let mut canvas = Canvas::new(800, 600);
        canvas.draw_marks(&[scratch(700.0, 250.0, 700.0, 270.0)]);
        // next frame with an empty store: the old scratch is still painted
        canvas.draw_marks(&[]);
        assert_eq!(canvas.buffer().pixel(700, 260), Some(SCRATCH));

        canvas.reset();
        assert_ne!(canvas.buffer().pixel(700, 260), Some(SCRATCH));
    }

    #[test]
    fn redrawing_is_idempotent() {
        let marks = [scratch(650.0, 240.0, 690.0, 280.0), scratch(660.0, 240.0, 700.0, 280.0)];
        let mut once = Canvas::new(800, 600);
        once.draw_marks(&marks);
        let mut twice = Canvas::new(800, 600);
        twice.draw_marks(&marks);
        twice.draw_marks(&marks);
        assert_eq!(once.buffer().pixels, twice.buffer().pixels);
    }
}
