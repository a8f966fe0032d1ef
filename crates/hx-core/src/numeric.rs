use crate::HxError;

/// Floating point type used throughout the designer
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HxError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HxError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, HxError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(HxError::NonPositive { what, value: v })
    }
}

/// Linear blend between `(x0, y0)` and `(x1, y1)` evaluated at `x`.
///
/// Returns `y0` exactly when `x == x0` and `y1` exactly when `x == x1`.
pub fn lerp(x0: Real, y0: Real, x1: Real, y1: Real, x: Real) -> Real {
    if x == x0 {
        return y0;
    }
    if x == x1 {
        return y1;
    }
    let frac = (x - x0) / (x1 - x0);
    y0 + frac * (y1 - y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.5, "h").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "h"),
            Err(HxError::NonPositive { what: "h", .. })
        ));
        assert!(ensure_positive(-3.0, "h").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "h"),
            Err(HxError::NonFinite { .. })
        ));
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(lerp(300.0, 177.0, 400.0, 186.0, 300.0), 177.0);
        assert_eq!(lerp(300.0, 177.0, 400.0, 186.0, 400.0), 186.0);
        assert!((lerp(300.0, 177.0, 400.0, 186.0, 350.0) - 181.5).abs() < 1e-12);
    }
}
