use log::{debug, warn};

use crate::sampling::errors::SamplingError;

/// Evenly spaced points over a closed interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    start: f64,
    end: f64,
    steps: usize,
}

impl SampleGrid {
    /// # Errors
    ///
    /// Returns an error if either bound is not finite, if `start > end`,
    /// or if `steps` is zero.
    pub fn new(start: f64, end: f64, steps: usize) -> Result<Self, SamplingError> {
        debug!("Creating sample grid: [{}, {}] with {} steps", start, end, steps);

        if !start.is_finite() || !end.is_finite() {
            warn!("Sample range has a non-finite bound");
            return Err(SamplingError::NonFiniteBound { start, end });
        }
        if start > end {
            warn!("Sample range start {} is greater than end {}", start, end);
            return Err(SamplingError::InvalidRange { start, end });
        }
        if steps == 0 {
            warn!("Sample grid requested with zero steps");
            return Err(SamplingError::ZeroSamples);
        }

        Ok(Self { start, end, steps })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The grid points from `start` to `end` inclusive; a single step yields `start`
    pub fn points(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.start];
        }
        // Interpolate per point; `end - start` overflows for wide finite ranges
        let last = self.steps - 1;
        (0..self.steps)
            .map(|i| {
                if i == 0 {
                    self.start
                } else if i == last {
                    self.end
                } else {
                    let t = i as f64 / last as f64;
                    self.start * (1.0 - t) + self.end * t
                }
            })
            .collect()
    }
}
