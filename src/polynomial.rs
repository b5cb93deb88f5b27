use log::{debug, trace};

use crate::error::SplineError;

/// Step size tolerance used by [Polynomial::find_root] when none is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Iteration limit used by [Polynomial::find_root] when none (or zero) is given.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Interpolating polynomial stored in Newton divided-difference form.
///
/// Samples sharing the same `x` encode derivatives: the first sample at given abscissa is the
/// function value, the second one is first derivative, the third one second derivative and so on.
/// Samples are sorted by `x` with stable order, so the relative order of repeated `x` samples
/// given by the caller decides which derivative they describe.
#[derive(Debug, Clone)]
pub struct Polynomial {
    nodes: Vec<f64>,
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Builds polynomial passing through given `(x, y)` samples.
    /// # Example
    /// ```
    /// use hermite_spline::Polynomial;
    ///
    /// // value 5 and first derivative 2 at x = 1
    /// let polynomial = Polynomial::new(&[(1.0, 5.0), (1.0, 2.0)]).unwrap();
    /// assert_eq!((5.0, 2.0), polynomial.derivative(1.0));
    /// ```
    /// # Errors
    /// [SplineError::InvalidArgument] is returned for empty `points`.
    pub fn new(points: &[(f64, f64)]) -> Result<Self, SplineError> {
        if points.is_empty() {
            return Err(SplineError::InvalidArgument(
                "polynomial requires at least one point".to_string(),
            ));
        }

        let mut sorted = points.to_vec();
        // -0.0 and 0.0 tie so repeated samples keep input order, NaN goes last
        sorted.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or_else(|| a.0.is_nan().cmp(&b.0.is_nan()))
        });
        let (nodes, samples): (Vec<f64>, Vec<f64>) = sorted.into_iter().unzip();

        let coefficients = divided_differences(&nodes, &samples);
        debug!("built polynomial of degree {} from {} samples", nodes.len() - 1, nodes.len());

        Ok(Polynomial { nodes, coefficients })
    }

    /// Builds polynomial from raw rows, each of them has to be `[x, y]` pair.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, SplineError> {
        let mut points = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match row.as_ref() {
                [x, y] => points.push((*x, *y)),
                other => {
                    return Err(SplineError::InvalidArgument(format!(
                        "row {} has {} element(s), expected (x, y) pair",
                        index,
                        other.len()
                    )))
                }
            }
        }
        Polynomial::new(&points)
    }

    /// Builds polynomial from textual coordinates. Coordinates which cannot be parsed become
    /// `NaN` and propagate through every later evaluation.
    /// # Example
    /// ```
    /// use hermite_spline::Polynomial;
    ///
    /// let polynomial = Polynomial::parse(&[("0", "1.5"), ("2", "oops")]).unwrap();
    /// assert!(polynomial.evaluate(1.0).is_nan());
    /// ```
    pub fn parse<S: AsRef<str>>(points: &[(S, S)]) -> Result<Self, SplineError> {
        let parsed: Vec<(f64, f64)> = points
            .iter()
            .map(|(x, y)| (parse_coordinate(x.as_ref()), parse_coordinate(y.as_ref())))
            .collect();
        Polynomial::new(&parsed)
    }

    /// Sorted abscissas of the samples.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Newton form coefficients, `coefficients()[k]` belongs to the term built over `nodes()[0..k]`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.coefficients.len();
        let mut result = self.coefficients[n - 1];
        for i in (0..n - 1).rev() {
            result = result * (x - self.nodes[i]) + self.coefficients[i];
        }
        result
    }

    /// Returns polynomial value and first derivative value at `x`.
    /// [Polynomial::find_root] needs the second derivative too and uses [Polynomial::second_derivative].
    pub fn derivative(&self, x: f64) -> (f64, f64) {
        let n = self.coefficients.len();
        let mut value = self.coefficients[n - 1];
        let mut first = 0.0;
        for i in (0..n - 1).rev() {
            let dx = x - self.nodes[i];
            first = first * dx + value;
            value = value * dx + self.coefficients[i];
        }
        (value, first)
    }

    /// Returns polynomial value, first and second derivative values at `x`.
    pub fn second_derivative(&self, x: f64) -> (f64, f64, f64) {
        let n = self.coefficients.len();
        let mut value = self.coefficients[n - 1];
        let mut first = 0.0;
        let mut second = 0.0;
        for i in (0..n - 1).rev() {
            let dx = x - self.nodes[i];
            second = second * dx + 2.0 * first;
            first = first * dx + value;
            value = value * dx + self.coefficients[i];
        }
        (value, first, second)
    }

    /// Newton-Raphson search for a root of the first derivative, i.e. a stationary point of the
    /// polynomial. Residual is the first derivative and slope is the second derivative.
    ///
    /// - `tolerance` defaults to [DEFAULT_TOLERANCE],
    /// - `iterations` defaults to [DEFAULT_ITERATIONS], also when `Some(0)` is given.
    ///
    /// `seed` is returned without iterating when residual at `seed` is already below `tolerance`.
    /// `None` means the step size did not drop to `tolerance` within `iterations` steps.
    /// Vanishing second derivative is not guarded, the step becomes `inf` or `NaN`
    /// and the search ends without convergence.
    /// # Example
    /// ```
    /// use hermite_spline::Polynomial;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// // (x - 3)^2 sampled at three points
    /// let polynomial = Polynomial::new(&[(2.0, 1.0), (3.0, 0.0), (4.0, 1.0)]).unwrap();
    /// let root = polynomial.find_root(3.4, None, None).unwrap();
    /// assert_approx_eq!(3.0, root, 1e-6);
    /// ```
    pub fn find_root(&self, seed: f64, tolerance: Option<f64>, iterations: Option<usize>) -> Option<f64> {
        let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
        let iterations = match iterations {
            Some(iterations) if iterations > 0 => iterations,
            _ => DEFAULT_ITERATIONS,
        };

        let (_, residual, _) = self.second_derivative(seed);
        if residual.abs() < tolerance {
            debug!("seed {} is already stationary, residual {}", seed, residual);
            return Some(seed);
        }

        let mut x0 = seed;
        for iteration in 1..=iterations {
            let (_, residual, slope) = self.second_derivative(x0);
            let x1 = x0 - residual / slope;
            trace!("newton step {}: x = {}, residual = {}, slope = {}", iteration, x1, residual, slope);

            if (x1 - x0).abs() <= tolerance {
                debug!("newton search converged to {} after {} step(s)", x1, iteration);
                return Some(x1);
            }
            x0 = x1;
        }

        debug!("newton search from {} did not converge in {} step(s)", seed, iterations);
        None
    }
}

fn parse_coordinate(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Divided-difference table computed over a local copy of the samples.
///
/// Table is seeded with the function value of each node's abscissa. When nodes spanned by
/// given order coincide, the coefficient is the derivative sample of that order divided by
/// `order!`. Division by zero is not guarded.
fn divided_differences(nodes: &[f64], samples: &[f64]) -> Vec<f64> {
    let n = nodes.len();

    // index of the first sample at the same abscissa
    let mut group_start = vec![0; n];
    for j in 1..n {
        group_start[j] = if nodes[j] == nodes[j - 1] { group_start[j - 1] } else { j };
    }

    let mut coefficients: Vec<f64> = group_start.iter().map(|start| samples[*start]).collect();

    let mut factorial = 1.0;
    for order in 1..n {
        factorial *= order as f64;
        for j in (order..n).rev() {
            if nodes[j] == nodes[j - order] {
                coefficients[j] = samples[group_start[j] + order] / factorial;
            } else {
                coefficients[j] = (coefficients[j] - coefficients[j - 1]) / (nodes[j] - nodes[j - order]);
            }
        }
    }
    coefficients
}
