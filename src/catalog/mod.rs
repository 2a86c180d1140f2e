//! Named built-in formulas for the command line driver

mod errors;
mod formulas;
mod validation;

pub use errors::CatalogError;
pub use formulas::{Formula, find_formula, formulas};
pub use validation::validate_variable_name;
