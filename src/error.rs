use thiserror::Error;

/// Errors returned for structural misuse of [Polynomial](crate::Polynomial) and
/// [Spline](crate::Spline). Numerical outcomes such as non-convergence, division by zero
/// or evaluation outside the knot range are never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("Error in Spline: invalid argument, {0}")]
    InvalidArgument(String),

    #[error("Error in Spline: x = {x} is out of range [{min_x}, {max_x}]")]
    OutOfRange { x: f64, min_x: f64, max_x: f64 },

    #[error("Error in Spline: {0} is not implemented")]
    NotImplemented(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let error = SplineError::InvalidArgument("empty input".to_string());
        assert_eq!("Error in Spline: invalid argument, empty input", error.to_string());

        let error = SplineError::OutOfRange { x: 3.5, min_x: 0.0, max_x: 2.0 };
        assert_eq!("Error in Spline: x = 3.5 is out of range [0, 2]", error.to_string());

        let error = SplineError::NotImplemented("Spline::delete_point");
        assert_eq!("Error in Spline: Spline::delete_point is not implemented", error.to_string());
    }
}
