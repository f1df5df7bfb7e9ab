// All the knobs of the toy in one place. There is no config file: the
// defaults below are the design values and `validate` guards hand edits.

use crate::error::{Error, Result};
use image::ImageFormat;
use std::ops::{Range, RangeInclusive};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub width: usize,                  // canvas width in pixels
    pub height: usize,                 // canvas height in pixels
    pub threshold: f32,                // pointer travel needed before a new batch of claws
    pub capacity: usize,               // max marks kept in the store
    pub evict_batch: usize,            // how many of the oldest marks go once capacity is exceeded
    pub claws: RangeInclusive<usize>,  // how many parallel tracks one swipe leaves
    pub claw_spread: Range<f32>,       // lateral distance between neighbouring claws
    pub jitter: Range<f32>,            // per-claw wobble before scaling by sensitivity
    pub thickness: Range<f32>,         // stroke width of a single claw
    pub sensitivity: Range<f32>,       // where a re-rolled sensitivity lands (inclusive)
    pub initial_sensitivity: f32,
    pub export_base: String,           // file stem of the still capture
    pub export_format: ImageFormat,
    pub target_fps: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            threshold: 5.0,
            capacity: 1000,
            evict_batch: 100,
            claws: 2..=3,
            claw_spread: 10.0..16.0,
            jitter: -3.0..3.0,
            thickness: 2.0..4.0,
            sensitivity: 0.3..1.0,
            initial_sensitivity: 0.8,
            export_base: String::from("cat-scratches"),
            export_format: ImageFormat::Png,
            target_fps: 60,
        }
    }
}

impl Settings {
    /// Reject combinations that would break the store or the sampler.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!("canvas must be non-empty, got {}x{}", self.width, self.height)));
        }
        if self.capacity == 0 {
            return Err(Error::Config("capacity must be at least 1".into()));
        }
        if self.evict_batch == 0 || self.evict_batch > self.capacity {
            return Err(Error::Config(format!(
                "evict batch must be in 1..={}, got {}",
                self.capacity, self.evict_batch
            )));
        }
        if self.claws.is_empty() || *self.claws.start() == 0 {
            return Err(Error::Config(format!("claw count must be at least 1, got {:?}", self.claws)));
        }
        if !(self.threshold >= 0.0) {
            return Err(Error::Config(format!("threshold must be non-negative, got {}", self.threshold)));
        }
        for (name, r) in [
            ("claw spread", &self.claw_spread),
            ("jitter", &self.jitter),
            ("thickness", &self.thickness),
            ("sensitivity", &self.sensitivity),
        ] {
            if !(r.start <= r.end) {
                return Err(Error::Config(format!("{name} range is empty: {}..{}", r.start, r.end)));
            }
        }
        if self.thickness.start <= 0.0 {
            return Err(Error::Config("thickness must be positive".into()));
        }
        if !self.sensitivity.contains(&self.initial_sensitivity) && self.initial_sensitivity != self.sensitivity.end {
            return Err(Error::Config(format!(
                "initial sensitivity {} outside {}..={}",
                self.initial_sensitivity, self.sensitivity.start, self.sensitivity.end
            )));
        }
        Ok(())
    }

    /// `cat-scratches.png` with the defaults; relative, so it lands in the working directory.
    pub fn export_path(&self) -> PathBuf {
        let ext = self.export_format.extensions_str().first().copied().unwrap_or("png");
        PathBuf::from(format!("{}.{}", self.export_base, ext))
    }
}
