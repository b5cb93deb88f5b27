use log::debug;

use crate::{error::SplineError, knot::Knot, polynomial::Polynomial};

/// Piecewise Hermite spline. Every segment between consecutive knots is governed by its own
/// [Polynomial] built from value and derivative data of the two bounding knots only, so knots
/// can be inserted without rebuilding the whole spline.
#[derive(Debug, Clone)]
pub struct Spline {
    knots: Vec<Knot>,
    polynomials: Vec<Polynomial>,
}

impl Spline {
    /// Creates spline from knots. Knots are sorted by `x` before segments are built.
    /// # Example
    /// ```
    /// use hermite_spline::{Knot, Spline};
    ///
    /// let spline = Spline::new(vec![Knot::fix0(0.0, 0.0), Knot::fix0(2.0, 4.0), Knot::fix0(1.0, 1.0)]).unwrap();
    /// assert_eq!(2, spline.polynomials().len());
    /// assert_eq!(Some(0.5), spline.evaluate(0.5));
    /// ```
    /// # Errors
    /// [SplineError::InvalidArgument] when there are fewer than 2 knots or two knots share `x`.
    pub fn new(knots: Vec<Knot>) -> Result<Self, SplineError> {
        if knots.len() < 2 {
            return Err(SplineError::InvalidArgument(
                "spline must have at least 2 knots".to_string(),
            ));
        }

        let number_of_intervals = knots.len() - 1;
        let mut spline = Spline {
            knots,
            polynomials: Vec::with_capacity(number_of_intervals),
        };

        spline.knots.sort();
        spline.check_knots_spacing()?;
        spline.calculate_polynomials()?;
        debug!(
            "built spline with {} segments over [{}, {}]",
            spline.polynomials.len(),
            spline.min_x(),
            spline.max_x()
        );
        Ok(spline)
    }

    /// Creates spline from raw `[x, y, y', ...]` records.
    /// # Example
    /// ```
    /// use hermite_spline::Spline;
    ///
    /// let spline = Spline::from_records(&[vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 2.0]]).unwrap();
    /// assert_eq!(Some(0.25), spline.evaluate(0.5));
    /// ```
    pub fn from_records<R: AsRef<[f64]>>(records: &[R]) -> Result<Self, SplineError> {
        let knots = records
            .iter()
            .map(|record| Knot::from_record(record.as_ref()))
            .collect::<Result<Vec<Knot>, SplineError>>()?;
        Spline::new(knots)
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Segment polynomials, `polynomials()[i]` covers `knots()[i]..=knots()[i + 1]`.
    pub fn polynomials(&self) -> &[Polynomial] {
        &self.polynomials
    }

    pub fn min_x(&self) -> f64 {
        self.knots[0].get_x()
    }

    pub fn max_x(&self) -> f64 {
        self.knots[self.knots.len() - 1].get_x()
    }

    /// True when `x` lies strictly outside the knot range, boundaries themselves are in range.
    pub fn out_of_bounds(&self, x: f64) -> bool {
        x < self.min_x() || x > self.max_x()
    }

    /// Spline value at `x` or `None` when `x` is out of bounds.
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        self.find_segment_index(x)
            .map(|index| self.polynomials[index].evaluate(x))
    }

    /// Spline value and first derivative at `x` or `None` when `x` is out of bounds.
    pub fn derivative(&self, x: f64) -> Option<(f64, f64)> {
        self.find_segment_index(x)
            .map(|index| self.polynomials[index].derivative(x))
    }

    /// Evaluates spline everywhere, outside of the knot range the boundary segment polynomial is used.
    pub fn extrapolate(&self, x: f64) -> f64 {
        match self.evaluate_on_boundaries(x) {
            Some(result) => result,
            None => {
                let index = self.find_interval_index(x);
                self.polynomials[index].evaluate(x)
            }
        }
    }

    /// Evaluates spline for every element of `x_vector`. Segment found for the previous element
    /// is tried first, so ascending input is looked up in constant time.
    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Vec<Option<f64>> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            if self.out_of_bounds(*x) || x.is_nan() {
                results.push(None);
                continue;
            }
            index = self.find_interval_index_near(index, *x);
            results.push(Some(self.polynomials[index].evaluate(*x)));
        }
        results
    }

    /// Inserts new knot and rebuilds only segments adjacent to it.
    ///
    /// Inside the knot range the enclosing segment is split in two. Outside the range new
    /// boundary segment is prepended or appended, but only when `allow_outside_bounds` is set.
    /// # Example
    /// ```
    /// use hermite_spline::{Knot, Spline};
    ///
    /// let mut spline = Spline::new(vec![Knot::fix0(0.0, 0.0), Knot::fix0(2.0, 2.0)]).unwrap();
    /// spline.add_point(Knot::fix0(1.0, 3.0), false).unwrap();
    /// assert_eq!(Some(3.0), spline.evaluate(1.0));
    ///
    /// assert!(spline.add_point(Knot::fix0(5.0, 0.0), false).is_err());
    /// spline.add_point(Knot::fix0(5.0, 0.0), true).unwrap();
    /// assert_eq!(4, spline.knots().len());
    /// ```
    /// # Errors
    /// - [SplineError::OutOfRange] when knot is outside the range and `allow_outside_bounds` is not set,
    /// - [SplineError::InvalidArgument] when knot `x` is `NaN` or a knot with the same `x` already exists.
    pub fn add_point(&mut self, knot: Knot, allow_outside_bounds: bool) -> Result<(), SplineError> {
        let x = knot.get_x();
        if x.is_nan() {
            return Err(SplineError::InvalidArgument("knot x is NaN".to_string()));
        }

        if self.out_of_bounds(x) {
            if !allow_outside_bounds {
                return Err(SplineError::OutOfRange { x, min_x: self.min_x(), max_x: self.max_x() });
            }
            return self.add_boundary_point(knot);
        }

        let index = self.find_point_index(x);
        if x == self.knots[index].get_x() || x == self.knots[index + 1].get_x() {
            return Err(SplineError::InvalidArgument(format!("knot at x = {} already exists", x)));
        }

        let left = Self::segment_polynomial(&self.knots[index], &knot)?;
        let right = Self::segment_polynomial(&knot, &self.knots[index + 1])?;

        self.knots.insert(index + 1, knot);
        self.polynomials[index] = left;
        self.polynomials.insert(index + 1, right);
        debug!("split segment {} at x = {}, {} segments now", index, x, self.polynomials.len());
        Ok(())
    }

    /// Knot removal is not supported.
    /// # Errors
    /// Always returns [SplineError::NotImplemented].
    pub fn delete_point(&mut self, x: f64) -> Result<(), SplineError> {
        debug!("refused to delete knot at x = {}", x);
        Err(SplineError::NotImplemented("Spline::delete_point"))
    }

    fn add_boundary_point(&mut self, knot: Knot) -> Result<(), SplineError> {
        let x = knot.get_x();
        if x < self.min_x() {
            let polynomial = Self::segment_polynomial(&knot, &self.knots[0])?;
            self.knots.insert(0, knot);
            self.polynomials.insert(0, polynomial);
            debug!("prepended segment starting at x = {}", x);
        } else {
            let polynomial = Self::segment_polynomial(&self.knots[self.knots.len() - 1], &knot)?;
            self.knots.push(knot);
            self.polynomials.push(polynomial);
            debug!("appended segment ending at x = {}", x);
        }
        Ok(())
    }

    fn check_knots_spacing(&self) -> Result<(), SplineError> {
        let has_equal_x = self.knots
            .windows(2)
            .map(|w| w[1].get_x() - w[0].get_x())
            .any(|spacing| spacing.is_nan() || spacing <= 0.0);

        if has_equal_x {
            return Err(SplineError::InvalidArgument("knots have equal x values".to_string()));
        }
        Ok(())
    }

    fn calculate_polynomials(&mut self) -> Result<(), SplineError> {
        for w in self.knots.windows(2) {
            let polynomial = Self::segment_polynomial(&w[0], &w[1])?;
            self.polynomials.push(polynomial);
        }
        Ok(())
    }

    /// Earlier knot samples go first, the derivative order of each sample is its position
    /// among samples sharing the same `x`.
    fn segment_polynomial(left: &Knot, right: &Knot) -> Result<Polynomial, SplineError> {
        let samples: Vec<(f64, f64)> = left.samples().chain(right.samples()).collect();
        Polynomial::new(&samples)
    }

    fn find_segment_index(&self, x: f64) -> Option<usize> {
        if self.out_of_bounds(x) || x.is_nan() {
            None
        } else {
            Some(self.find_interval_index(x))
        }
    }

    /// Segment whose left knot is the greatest one with `x >= knot.x`. Inner knots only are
    /// searched, so `x == max_x` lands in the last segment and `x < min_x` in the first one.
    fn find_interval_index(&self, x: f64) -> usize {
        let inner = &self.knots[1..self.knots.len() - 1];
        inner.partition_point(|knot| knot.get_x() <= x)
    }

    /// First segment index with `x <= knots[index + 1].x`.
    fn find_point_index(&self, x: f64) -> usize {
        self.knots[1..]
            .iter()
            .position(|knot| x <= knot.get_x())
            .unwrap_or(self.polynomials.len() - 1)
    }

    /// Tries `previous` segment and its right neighbour before falling back to full search.
    fn find_interval_index_near(&self, previous: usize, x: f64) -> usize {
        [previous, previous + 1]
            .into_iter()
            .filter(|index| *index < self.polynomials.len())
            .find(|index| self.segment_contains(*index, x))
            .unwrap_or_else(|| self.find_interval_index(x))
    }

    fn segment_contains(&self, index: usize, x: f64) -> bool {
        (self.knots[index].get_x()..=self.knots[index + 1].get_x()).contains(&x)
    }

    /// Beyond the first or the last inner knot only a boundary segment can apply.
    fn evaluate_on_boundaries(&self, x: f64) -> Option<f64> {
        let (first, last) = (&self.polynomials[0], &self.polynomials[self.polynomials.len() - 1]);
        if x < self.knots[1].get_x() {
            Some(first.evaluate(x))
        } else if x > self.knots[self.knots.len() - 2].get_x() {
            Some(last.evaluate(x))
        } else {
            None
        }
    }
}
