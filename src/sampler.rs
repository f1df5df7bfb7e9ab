// Turns one pointer movement into 2–3 parallel claw marks.
// Visual: a single swipe leaves a little bundle of white scratches that
// run alongside the pointer path, slightly wobbly and of uneven width.

use crate::config::Settings;
use crate::random::RandomSource;
use crate::types::{MarkSegment, Point};
use std::f32::consts::FRAC_PI_2;
use std::ops::{Range, RangeInclusive};

pub struct ClawSampler {
    claws: RangeInclusive<usize>,
    spread: Range<f32>,
    jitter: Range<f32>,
    thickness: Range<f32>,
}

impl ClawSampler {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            claws: settings.claws.clone(),
            spread: settings.claw_spread.clone(),
            jitter: settings.jitter.clone(),
            thickness: settings.thickness.clone(),
        }
    }

    /// Marks for a movement from `from` to `to`, in claw order.
    ///
    /// Claw `i` of `n` sits `(i - n/2) * spread` away from the path along its
    /// perpendicular. Each claw gets its own jitter, applied equally to both
    /// ends so the mark stays parallel to the movement.
    pub fn sample<R: RandomSource + ?Sized>(
        &self,
        from: Point,
        to: Point,
        sensitivity: f32,
        rng: &mut R,
    ) -> Vec<MarkSegment> {
        let lo = *self.claws.start();
        let n = lo + rng.below(self.claws.end() - lo + 1);

        let angle = (to.y - from.y).atan2(to.x - from.x);
        let (perp_sin, perp_cos) = (angle + FRAC_PI_2).sin_cos();

        let mut marks = Vec::with_capacity(n);
        for i in 0..n {
            let offset = (i as f32 - n as f32 / 2.0) * rng.range(self.spread.start, self.spread.end);
            let (offset_x, offset_y) = (perp_cos * offset, perp_sin * offset);

            let jitter_x = rng.range(self.jitter.start, self.jitter.end) * sensitivity;
            let jitter_y = rng.range(self.jitter.start, self.jitter.end) * sensitivity;

            let (dx, dy) = (offset_x + jitter_x, offset_y + jitter_y);
            marks.push(MarkSegment {
                start: from.offset(dx, dy),
                end: to.offset(dx, dy),
                thickness: rng.range(self.thickness.start, self.thickness.end),
            });
        }
        marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FastRandom, ScriptedRandom};

    const EPS: f32 = 1e-3;

    fn near(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn sampler() -> ClawSampler {
        ClawSampler::from_settings(&Settings::default())
    }

    #[test]
    fn vertical_drag_with_two_claws() {
        // count -> 2, then per claw: spread, jitter x, jitter y, thickness
        let mut rng = ScriptedRandom::new(&[0.0, 0.5, 0.5, 0.5, 0.5]);
        let marks = sampler().sample(Point::new(100.0, 100.0), Point::new(100.0, 108.0), 0.8, &mut rng);

        assert_eq!(marks.len(), 2);
        assert_eq!(rng.draws(), 1 + 4 * 2);

        // perpendicular of a downward drag points to -x, claw 0 is at -13 along it
        assert!(near(marks[0].start, Point::new(113.0, 100.0)), "{:?}", marks[0]);
        assert!(near(marks[0].end, Point::new(113.0, 108.0)), "{:?}", marks[0]);
        assert!((marks[0].thickness - 3.0).abs() < EPS);

        assert!(near(marks[1].start, Point::new(100.0, 100.0)), "{:?}", marks[1]);
        assert!(near(marks[1].end, Point::new(100.0, 108.0)), "{:?}", marks[1]);
    }

    #[test]
    fn horizontal_drag_with_three_claws() {
        // count draw 0.75 -> 3 claws; each claw: spread 10, no jitter, thickness 2
        let claw = [0.0, 0.5, 0.5, 0.0];
        let script: Vec<f32> = std::iter::once(0.75).chain(claw.iter().copied().cycle().take(12)).collect();
        let mut rng = ScriptedRandom::new(&script);
        let marks = sampler().sample(Point::new(0.0, 50.0), Point::new(20.0, 50.0), 1.0, &mut rng);

        assert_eq!(marks.len(), 3);
        // offsets -15, -5, +5 along +y
        let ys: Vec<f32> = marks.iter().map(|m| m.start.y).collect();
        assert!((ys[0] - 35.0).abs() < EPS, "{ys:?}");
        assert!((ys[2] - 55.0).abs() < EPS, "{ys:?}");
        for m in &marks {
            assert!((m.thickness - 2.0).abs() < EPS);
            assert!((m.end.x - m.start.x - 20.0).abs() < EPS);
        }
    }

    #[test]
    fn jitter_shifts_both_ends_equally() {
        // jitter draws near both ends of the range
        let mut rng = ScriptedRandom::new(&[0.0, 0.5, 0.999, 0.0, 0.5]);
        let from = Point::new(300.0, 300.0);
        let to = Point::new(310.0, 290.0);
        for m in sampler().sample(from, to, 0.5, &mut rng) {
            let ds = (m.start.x - from.x, m.start.y - from.y);
            let de = (m.end.x - to.x, m.end.y - to.y);
            assert!((ds.0 - de.0).abs() < EPS && (ds.1 - de.1).abs() < EPS);
        }
    }

    #[test]
    fn stationary_pointer_still_produces_marks() {
        let mut rng = FastRandom::with_seed(3);
        let p = Point::new(40.0, 40.0);
        let marks = sampler().sample(p, p, 0.8, &mut rng);
        assert!((2..=3).contains(&marks.len()));
        for m in marks {
            assert_eq!(m.start, m.end);
        }
    }

    #[test]
    fn claw_count_thickness_and_jitter_stay_bounded() {
        let settings = Settings::default();
        let sampler = ClawSampler::from_settings(&settings);
        let mut rng = FastRandom::with_seed(0xC0FFEE);
        let sensitivity = 0.6;
        let (from, to) = (Point::new(200.0, 200.0), Point::new(230.0, 240.0));

        // remove the deterministic claw offset and what's left is jitter
        let angle = (to.y - from.y).atan2(to.x - from.x) + FRAC_PI_2;
        let mut seen = [false; 4];
        for _ in 0..2_000 {
            let marks = sampler.sample(from, to, sensitivity, &mut rng);
            assert!((2..=3).contains(&marks.len()));
            seen[marks.len()] = true;
            for m in &marks {
                assert!((2.0..=4.0).contains(&m.thickness));
                let (dx, dy) = (m.start.x - from.x, m.start.y - from.y);
                // component along the path direction is pure jitter
                let along = dx * (angle - FRAC_PI_2).cos() + dy * (angle - FRAC_PI_2).sin();
                assert!(along.abs() <= 3.0 * sensitivity * std::f32::consts::SQRT_2 + EPS);
            }
        }
        assert!(seen[2] && seen[3]);
    }

    #[test]
    fn axis_jitter_bounded_by_sensitivity() {
        // zero spread isolates the jitter term on each axis
        let settings = Settings { claw_spread: 0.0..0.0, ..Settings::default() };
        let sampler = ClawSampler::from_settings(&settings);
        let mut rng = FastRandom::with_seed(11);
        let from = Point::new(100.0, 100.0);
        for sensitivity in [0.3, 0.55, 1.0] {
            for _ in 0..500 {
                for m in sampler.sample(from, Point::new(120.0, 100.0), sensitivity, &mut rng) {
                    assert!((m.start.x - from.x).abs() <= 3.0 * sensitivity + EPS);
                    assert!((m.start.y - from.y).abs() <= 3.0 * sensitivity + EPS);
                }
            }
        }
    }
}
