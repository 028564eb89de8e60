/// Accepted sample points to aim for per source feature.
pub const DEFAULT_SAMPLES: usize = 80;

/// Rejection-sampling draws allowed per requested sample.
pub const DEFAULT_ATTEMPT_FACTOR: usize = 50;

/// Tuning knobs for crosswalk assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswalkConfig {
    /// Accepted sample points to aim for per source.
    pub samples: usize,
    /// Draw budget is `samples * attempt_factor`.
    pub attempt_factor: usize,
    /// Process sources on the rayon thread pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for CrosswalkConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            attempt_factor: DEFAULT_ATTEMPT_FACTOR,
            parallel: true,
        }
    }
}

impl CrosswalkConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_attempt_factor(mut self, attempt_factor: usize) -> Self {
        self.attempt_factor = attempt_factor;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Maximum number of rejection-sampling draws per source.
    #[inline]
    pub fn max_attempts(&self) -> usize { self.samples.saturating_mul(self.attempt_factor) }
}
