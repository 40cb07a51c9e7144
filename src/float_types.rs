// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// How far apart (relative to `R + w`) the two sides of the half-twist seam
/// may land before `MobiusStrip::is_seam_closed` reports an open seam.
///
/// Build-time override: `MOBIUS_TOLERANCE=1e-8 cargo build`.
/// Runtime override: [`set_tolerance`], first call wins.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Relative seam tolerance: a runtime value if one was set, else
/// `MOBIUS_TOLERANCE` from the build environment, else `1e-9` (`f64`) / `1e-4` (`f32`).
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("MOBIUS_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Fix the seam tolerance for this process. Only the first call (or first
/// read through [`tolerance`]) takes effect; never below `Real::EPSILON`.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_fixed_after_first_read() {
        let first = tolerance();
        assert!(first >= Real::EPSILON);
        set_tolerance(first * 10.0);
        assert_eq!(tolerance(), first);
    }
}
