//! Construction errors

use crate::float_types::Real;

/// Everything that can go wrong while building a surface model.
///
/// All failures are input-validation failures detected before any
/// sampling takes place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MobiusError {
    /// (InvalidParameter) A construction parameter is out of its domain
    #[error("(InvalidParameter) `{name}` = {value} {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
}

impl MobiusError {
    pub(crate) const fn invalid(name: &'static str, value: Real, reason: &'static str) -> Self {
        MobiusError::InvalidParameter { name, value, reason }
    }

    /// Name of the offending parameter.
    pub const fn parameter(&self) -> &'static str {
        match self {
            MobiusError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: Real) -> Result<Real, MobiusError> {
    if !value.is_finite() {
        return Err(MobiusError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(MobiusError::invalid(name, value, "must be > 0"));
    }
    Ok(value)
}

/// Require a sample count of at least two (one interval).
pub(crate) fn ensure_resolution(name: &'static str, n: usize) -> Result<usize, MobiusError> {
    if n < 2 {
        return Err(MobiusError::invalid(name, n as Real, "must be >= 2"));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_and_non_positive() {
        assert!(ensure_positive("radius", 0.0).is_err());
        assert!(ensure_positive("radius", -1.0).is_err());
        assert!(ensure_positive("radius", Real::NAN).is_err());
        assert!(ensure_positive("radius", Real::INFINITY).is_err());
        assert_eq!(ensure_positive("radius", 0.5), Ok(0.5));
    }

    #[test]
    fn message_names_the_parameter() {
        let err = ensure_resolution("resolution", 1).unwrap_err();
        assert_eq!(err.parameter(), "resolution");
        assert_eq!(err.to_string(), "(InvalidParameter) `resolution` = 1 must be >= 2");
    }
}
