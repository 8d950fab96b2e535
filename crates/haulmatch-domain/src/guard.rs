//! Precondition checks shared by the services

use haulmatch_types::{Error, Result};

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(format!("{} must be positive, got {}", name, value)))
    }
}

pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(format!("{} must not be negative, got {}", name, value)))
    }
}
