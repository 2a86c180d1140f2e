use log::{debug, warn};

use crate::catalog::errors::CatalogError;

/// # Errors
///
/// Returns an error if the name is empty, does not start with a letter or
/// `_`, or contains anything other than letters, digits and `_`.
pub fn validate_variable_name(name: &str) -> Result<(), CatalogError> {
    debug!("Validating variable name: '{}'", name);

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        warn!("Variable name is empty");
        return Err(CatalogError::EmptyVariableName);
    };

    if !(first.is_alphabetic() || first == '_') || !chars.all(|c| c.is_alphanumeric() || c == '_') {
        warn!("Variable name contains invalid characters: '{}'", name);
        return Err(CatalogError::InvalidVariableName(name.to_string()));
    }

    debug!("Variable name validation successful");
    Ok(())
}
