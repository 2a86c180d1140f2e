mod core;
mod errors;
mod grid;

pub use self::core::{Sample, Sampler};
pub use errors::SamplingError;
pub use grid::SampleGrid;
