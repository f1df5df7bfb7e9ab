// Where the scratch randomness comes from. The sampler and the sensitivity
// re-roll only see this trait, so tests can hand in a fixed sequence.

/// A stream of uniform draws.
pub trait RandomSource {
    /// Uniform in [0,1).
    fn next_f32(&mut self) -> f32;

    /// Uniform in [min,max).
    #[inline]
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    /// Uniform integer in [0,n). `n` must be non-zero.
    #[inline]
    fn below(&mut self, n: usize) -> usize {
        ((self.next_f32() * n as f32) as usize).min(n - 1)
    }
}

/// Live randomness backed by `fastrand`.
pub struct FastRandom {
    rng: fastrand::Rng,
}

impl FastRandom {
    /// Seeded from the OS; every session scratches differently.
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    /// Same seed, same scratches.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        self.rng.f32()
    }
}

/// Replays a fixed list of unit draws, wrapping around at the end.
#[cfg(test)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: &[f32]) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self { values: values.to_vec(), next: 0 }
    }

    /// How many draws have been taken so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
