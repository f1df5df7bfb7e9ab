// Software drawing on the framebuffer: pixels, rectangles, ellipses,
// triangles and thick round-capped lines, opaque or alpha-blended.
// Coordinates are continuous; pixel (x,y) covers [x,x+1) × [y,y+1) and is
// hit-tested at its centre.

use crate::types::{FrameBuffer, Point};

/// Pack 8-bit channels as 0x00RRGGBB.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Unpack 0x00RRGGBB.
#[inline]
pub const fn channels(c: u32) -> (u8, u8, u8) {
    ((c >> 16) as u8, (c >> 8) as u8, c as u8)
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Mix `color` over the pixel with straight alpha (255 = opaque).
/// Visual: translucent strokes tint what's underneath instead of hiding it.
#[inline]
pub fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32, alpha: u8) {
    if alpha == 255 {
        put_pixel(fb, x, y, color);
        return;
    }
    if x < 0 || y < 0 || alpha == 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = mix(fb.pixels[idx], color, alpha);
}

#[inline]
fn mix(dst: u32, src: u32, alpha: u8) -> u32 {
    let (dr, dg, db) = channels(dst);
    let (sr, sg, sb) = channels(src);
    let a = alpha as u32;
    let ch = |d: u8, s: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    rgb(ch(dr, sr), ch(dg, sg), ch(db, sb))
}

/// Solid axis-aligned rectangle with its top-left corner at (x,y).
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    let x0 = x.clamp(0, fb.width as i32) as usize;
    let x1 = (x + w).clamp(0, fb.width as i32) as usize;
    let y0 = y.clamp(0, fb.height as i32) as usize;
    let y1 = (y + h).clamp(0, fb.height as i32) as usize;
    if x0 >= x1 {
        return;
    }
    for row in y0..y1 {
        let start = row * fb.width;
        fb.pixels[start + x0..start + x1].fill(color);
    }
}

/// One full-width row, optionally translucent.
pub fn hline(fb: &mut FrameBuffer, y: i32, color: u32, alpha: u8) {
    if y < 0 || y as usize >= fb.height {
        return;
    }
    let start = y as usize * fb.width;
    for px in &mut fb.pixels[start..start + fb.width] {
        *px = if alpha == 255 { color } else { mix(*px, color, alpha) };
    }
}

/// Solid ellipse centred at (cx,cy) with full width `w` and height `h`.
pub fn fill_ellipse(fb: &mut FrameBuffer, cx: f32, cy: f32, w: f32, h: f32, color: u32) {
    let (rx, ry) = (w / 2.0, h / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    // Scan just the bounding box
    for y in (cy - ry).floor() as i32..=(cy + ry).ceil() as i32 {
        for x in (cx - rx).floor() as i32..=(cx + rx).ceil() as i32 {
            let nx = (x as f32 + 0.5 - cx) / rx;
            let ny = (y as f32 + 0.5 - cy) / ry;
            if nx * nx + ny * ny <= 1.0 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Solid triangle; either winding works.
pub fn fill_triangle(fb: &mut FrameBuffer, pts: [Point; 3], color: u32) {
    let [a, b, c] = pts;
    let edge = |p: Point, q: Point, x: f32, y: f32| (q.x - p.x) * (y - p.y) - (q.y - p.y) * (x - p.x);
    let area = edge(a, b, c.x, c.y);
    if area == 0.0 {
        return;
    }

    let min_x = a.x.min(b.x).min(c.x).floor() as i32;
    let max_x = a.x.max(b.x).max(c.x).ceil() as i32;
    let min_y = a.y.min(b.y).min(c.y).floor() as i32;
    let max_y = a.y.max(b.y).max(c.y).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            // same sign as the whole triangle on all three edges = inside
            let w0 = edge(b, c, px, py) * area;
            let w1 = edge(c, a, px, py) * area;
            let w2 = edge(a, b, px, py) * area;
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

/// Thick line from `a` to `b` with round caps, `weight` pixels wide.
/// Every covered pixel is written once, so translucent lines don't stack.
/// Visual: a capsule-shaped stroke, like a marker drawn along the segment.
pub fn stroke_line(fb: &mut FrameBuffer, a: Point, b: Point, weight: f32, color: u32, alpha: u8) {
    let r = weight / 2.0;
    if r <= 0.0 {
        return;
    }
    let r2 = r * r;
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;

    let min_x = ((a.x.min(b.x) - r).floor() as i32).max(0);
    let max_x = ((a.x.max(b.x) + r).ceil() as i32).min(fb.width as i32 - 1);
    let min_y = ((a.y.min(b.y) - r).floor() as i32).max(0);
    let max_y = ((a.y.max(b.y) + r).ceil() as i32).min(fb.height as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f32 + 0.5 - a.x, y as f32 + 0.5 - a.y);
            // closest point on the segment, as a fraction of its length
            let t = if len2 > 0.0 { ((px * dx + py * dy) / len2).clamp(0.0, 1.0) } else { 0.0 };
            let (ex, ey) = (px - t * dx, py - t * dy);
            if ex * ex + ey * ey <= r2 {
                blend_pixel(fb, x, y, color, alpha);
            }
        }
    }
}
