use crate::DpError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DpError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, DpError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(DpError::NonPositive { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_names_the_quantity() {
        let err = ensure_finite(Real::NAN, "theta1").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Non-finite"));
        assert!(msg.contains("theta1"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.0, "mass").is_err());
        assert!(ensure_positive(-1.0, "mass").is_err());
        assert_eq!(
            ensure_positive(Real::INFINITY, "mass"),
            Err(DpError::NonFinite {
                what: "mass",
                value: Real::INFINITY
            })
        );
        assert_eq!(ensure_positive(2.5, "mass"), Ok(2.5));
    }

    proptest! {
        #[test]
        fn positive_values_pass_through(v in 1e-12_f64..1e12) {
            prop_assert_eq!(ensure_positive(v, "length"), Ok(v));
            prop_assert!(ensure_positive(-v, "length").is_err());
        }
    }
}
