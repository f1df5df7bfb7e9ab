// The static fish tank painted behind the scratches.
// Visual (back to front): blue water gradient, dark floor with pebbles,
// two flat fish, white glass streaks, grey frame bars top and bottom.

use crate::raster::{fill_ellipse, fill_rect, fill_triangle, hline, rgb, stroke_line};
use crate::types::{FrameBuffer, Point};

const WATER_TOP: (u8, u8, u8) = (120, 200, 255);
const WATER_BOTTOM: (u8, u8, u8) = (40, 140, 200);

const FRAME_BAR: i32 = 30; // height of the top and bottom frame

struct Fish {
    x: f32,
    y: f32,
    size: f32,
    color: (u8, u8, u8),
}

const FISH: [Fish; 2] = [
    Fish { x: 200.0, y: 150.0, size: 80.0, color: (255, 150, 50) }, // orange
    Fish { x: 500.0, y: 350.0, size: 70.0, color: (50, 150, 255) },  // blue
];

/// Paint the whole tank into `fb`, overwriting everything.
pub fn paint_background(fb: &mut FrameBuffer) {
    paint_water(fb);
    paint_floor(fb);
    for fish in &FISH {
        paint_fish(fb, fish);
    }
    paint_glass(fb);
    paint_frame(fb);
}

fn paint_water(fb: &mut FrameBuffer) {
    let h = fb.height as f32;
    for y in 0..fb.height {
        let t = y as f32 / h;
        hline(fb, y as i32, lerp_rgb(WATER_TOP, WATER_BOTTOM, t), 255);
    }
}

fn paint_floor(fb: &mut FrameBuffer) {
    let (w, h) = (fb.width as i32, fb.height as i32);
    let top = h - 80;
    let bottom = h - FRAME_BAR;
    fill_rect(fb, 0, top, w, bottom - top, rgb(20, 80, 120));

    // darker stripes fading toward the bottom
    for y in (top..bottom).step_by(2) {
        let t = (y - top) as f32 / (bottom - top) as f32;
        let alpha = (60.0 + (20.0 - 60.0) * t).round() as u8;
        hline(fb, y, rgb(10, 50, 80), alpha);
    }

    let pebble = rgb(40, 60, 80);
    let h = h as f32;
    for (x, dy, pw, ph) in [
        (150.0, 50.0, 8.0, 6.0),
        (300.0, 45.0, 6.0, 4.0),
        (500.0, 55.0, 10.0, 8.0),
        (650.0, 48.0, 7.0, 5.0),
    ] {
        fill_ellipse(fb, x, h - dy, pw, ph, pebble);
    }
}

fn paint_fish(fb: &mut FrameBuffer, fish: &Fish) {
    let Fish { x, y, size, color } = *fish;
    let (r, g, b) = color;
    let body = rgb(r, g, b);
    let tail = rgb(r.saturating_sub(50), g.saturating_sub(50), b.saturating_sub(50));

    fill_ellipse(fb, x, y, size, size * 0.6, body);
    fill_triangle(
        fb,
        [
            Point::new(x - size / 2.0, y),
            Point::new(x - size * 0.8, y - size / 3.0),
            Point::new(x - size * 0.8, y + size / 3.0),
        ],
        tail,
    );
    fill_ellipse(fb, x, y + size / 4.0, size / 3.0, size / 6.0, body); // bottom fin
}

fn paint_glass(fb: &mut FrameBuffer) {
    let (w, h) = (fb.width as f32, fb.height as f32);
    let white = rgb(255, 255, 255);
    // (from, to, weight, alpha)
    let streaks = [
        // big diagonal streaks
        ((0.0, 0.0), (w / 2.0, h / 2.0), 8.0, 100),
        ((w / 4.0, 0.0), (w * 0.75, h / 2.0), 8.0, 100),
        // secondary
        ((w / 2.0, 0.0), (w, h / 3.0), 6.0, 60),
        ((0.0, h / 4.0), (w / 3.0, h), 6.0, 60),
        // light bars
        ((0.0, h / 6.0), (w, h / 6.0), 5.0, 80),
        ((0.0, h / 2.0), (w / 2.0, h / 2.0), 5.0, 80),
        // edge highlights just inside the frame
        ((0.0, 35.0), (w, 35.0), 6.0, 70),
        ((15.0, 30.0), (15.0, h - 30.0), 6.0, 70),
    ];
    for ((x0, y0), (x1, y1), weight, alpha) in streaks {
        stroke_line(fb, Point::new(x0, y0), Point::new(x1, y1), weight, white, alpha);
    }
}

fn paint_frame(fb: &mut FrameBuffer) {
    let (w, h) = (fb.width as i32, fb.height as i32);
    fill_rect(fb, 0, 0, w, FRAME_BAR, rgb(80, 80, 80));
    fill_rect(fb, 0, h - FRAME_BAR, w, FRAME_BAR, rgb(80, 80, 80));

    // shadow and highlight strips
    fill_rect(fb, 0, 25, w, 5, rgb(60, 60, 60));
    fill_rect(fb, 0, h - FRAME_BAR, w, 5, rgb(60, 60, 60));
    fill_rect(fb, 0, 30, w, 5, rgb(100, 100, 100));
    fill_rect(fb, 0, h - 5, w, 5, rgb(100, 100, 100));
}

fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> u32 {
    let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    rgb(ch(a.0, b.0), ch(a.1, b.1), ch(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank() -> FrameBuffer {
        let mut fb = FrameBuffer::new(800, 600);
        paint_background(&mut fb);
        fb
    }

    #[test]
    fn frame_bars_and_strips() {
        let fb = tank();
        assert_eq!(fb.pixel(10, 10), Some(rgb(80, 80, 80)));
        assert_eq!(fb.pixel(400, 27), Some(rgb(60, 60, 60)));
        assert_eq!(fb.pixel(400, 32), Some(rgb(100, 100, 100)));
        assert_eq!(fb.pixel(400, 572), Some(rgb(60, 60, 60)));
        assert_eq!(fb.pixel(400, 585), Some(rgb(80, 80, 80)));
        assert_eq!(fb.pixel(400, 598), Some(rgb(100, 100, 100)));
    }

    #[test]
    fn floor_base_and_stripes() {
        let fb = tank();
        assert_eq!(fb.pixel(400, 521), Some(rgb(20, 80, 120)));
        // first stripe: (10,50,80) at alpha 60 over the floor colour
        assert_eq!(fb.pixel(400, 520), Some(rgb(18, 73, 111)));
    }

    #[test]
    fn pebble_on_the_floor() {
        let fb = tank();
        assert_eq!(fb.pixel(150, 550), Some(rgb(40, 60, 80)));
    }

    #[test]
    fn orange_fish_body_and_tail() {
        let fb = tank();
        assert_eq!(fb.pixel(225, 140), Some(rgb(255, 150, 50)));
        assert_eq!(fb.pixel(146, 150), Some(rgb(205, 100, 0)));
    }

    #[test]
    fn water_gradient_runs_top_to_bottom() {
        let fb = tank();
        // a column clear of fish, floor and streaks
        let top = fb.pixel(790, 60).unwrap();
        let low = fb.pixel(790, 480).unwrap();
        assert!((top >> 16) & 0xFF > (low >> 16) & 0xFF);
        assert!(top & 0xFF > low & 0xFF);
    }

    #[test]
    fn gradient_endpoints() {
        assert_eq!(lerp_rgb(WATER_TOP, WATER_BOTTOM, 0.0), rgb(120, 200, 255));
        assert_eq!(lerp_rgb(WATER_TOP, WATER_BOTTOM, 1.0), rgb(40, 140, 200));
        assert_eq!(lerp_rgb(WATER_TOP, WATER_BOTTOM, 0.5), rgb(80, 170, 228));
    }

    #[test]
    fn glass_streak_brightens_water() {
        let mut plain = FrameBuffer::new(800, 600);
        paint_water(&mut plain);
        let fb = tank();
        // on the first diagonal streak, well clear of the fish
        let (x, y) = (100, 75);
        assert!(fb.pixel(x, y).unwrap() & 0xFF >= plain.pixel(x, y).unwrap() & 0xFF);
        assert!((fb.pixel(x, y).unwrap() >> 8) & 0xFF > (plain.pixel(x, y).unwrap() >> 8) & 0xFF);
    }

    #[test]
    fn small_canvas_does_not_panic() {
        let mut fb = FrameBuffer::new(20, 10);
        paint_background(&mut fb);
        assert_eq!(fb.pixel(0, 0), Some(rgb(80, 80, 80)));
    }
}
