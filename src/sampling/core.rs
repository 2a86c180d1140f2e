use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Bindings, Expression};
use crate::sampling::errors::SamplingError;
use crate::sampling::grid::SampleGrid;

/// Function value and derivative at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub at: f64,
    pub value: f64,
    pub slope: f64,
}

/// Tabulates an expression and its derivative along one variable
pub struct Sampler {
    variable: String,
    function: Arc<Expression>,
    derivative: Arc<Expression>,
}

impl Sampler {
    /// Create a sampler; the derivative is computed once here
    pub fn new(function: Expression, variable: &str) -> Self {
        let derivative = function.differentiate(variable);
        Self {
            variable: variable.to_string(),
            function: Arc::new(function),
            derivative: Arc::new(derivative),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn function(&self) -> &Expression {
        &self.function
    }

    pub fn derivative(&self) -> &Expression {
        &self.derivative
    }

    /// Evaluate the function and its derivative at a single point
    ///
    /// # Errors
    ///
    /// Returns an error if either tree references a symbol that is neither
    /// the sampled variable nor present in `base`.
    pub fn sample_at(&self, at: f64, base: &Bindings) -> Result<Sample, SamplingError> {
        let mut bindings = base.clone();
        bindings.insert(self.variable.clone(), at);
        let value = self.function.evaluate(&bindings)?;
        let slope = self.derivative.evaluate(&bindings)?;
        Ok(Sample { at, value, slope })
    }

    /// Evaluate at every grid point in parallel, returning samples in grid order
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing point in grid order.
    pub fn tabulate(
        &self,
        grid: &SampleGrid,
        base: &Bindings,
    ) -> Result<Vec<Sample>, SamplingError> {
        info!(
            "Tabulating {} over {} points of '{}'",
            self.function,
            grid.steps(),
            self.variable
        );

        let results: Vec<Result<Sample, SamplingError>> = grid
            .points()
            .into_par_iter()
            .map(|at| self.sample_at(at, base))
            .collect();

        let samples = results.into_iter().collect::<Result<Vec<_>, _>>();
        match &samples {
            Ok(rows) => debug!("Tabulated {} samples", rows.len()),
            Err(e) => debug!("Tabulation failed: {}", e),
        }
        samples
    }
}
