//! Hermite interpolation in Newton divided-difference form and piecewise Hermite splines.
//!
//! Derivative data is encoded by repeating an abscissa: the first sample at given `x` is the
//! function value, the next ones are consecutive derivatives. [Spline] builds one [Polynomial]
//! per segment from the two bounding [Knot]s, so inserting a knot rebuilds only its neighbours.
//!
//! # Example
//! ```
//! use hermite_spline::{Knot, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! // f(x) = x^2 given by values and first derivatives
//! let knots = vec![
//!     Knot::fix1(0.0, 0.0, 0.0),
//!     Knot::fix1(1.0, 1.0, 2.0),
//!     Knot::fix1(2.0, 4.0, 4.0)
//! ];
//! let mut spline = Spline::new(knots).unwrap();
//!
//! assert_approx_eq!(2.25, spline.evaluate(1.5).unwrap(), 1e-9);
//! assert!(spline.evaluate(2.5).is_none());
//!
//! spline.add_point(Knot::fix1(3.0, 9.0, 6.0), true).unwrap();
//! assert_approx_eq!(6.25, spline.evaluate(2.5).unwrap(), 1e-9);
//!
//! // stationary point of the first segment
//! let root = spline.polynomials()[0].find_root(0.7, None, None).unwrap();
//! assert_approx_eq!(0.0, root, 1e-6);
//! ```

mod error;
mod knot;
mod polynomial;
mod spline;

pub use error::SplineError;
pub use knot::Knot;
pub use polynomial::{Polynomial, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE};
pub use spline::Spline;
