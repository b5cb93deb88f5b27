use crate::error::SplineError;

/// Knot represents point through which spline passes together with derivative values at that point.
/// - `x` - coordinate,
/// - `values` - `values[0]` is function value, `values[k]` is value of k-th derivative.
///
/// Number of values decides how many samples the knot contributes to each adjacent segment.
#[derive(Debug, Clone)]
pub struct Knot {
    x: f64,
    values: Vec<f64>,
}

impl Knot {
    /// The most generic constructor of [Knot]. `values` lists function value followed by
    /// consecutive derivatives, there can be no gaps between derivative orders.
    /// # Example
    /// ```
    /// use hermite_spline::Knot;
    ///
    /// let knot = Knot::new(1.0, vec![2.0, 0.0, -5.0]);
    /// assert!(knot.is_ok());
    /// ```
    /// # Errors
    /// Error is returned when `values` is empty.
    /// ```
    /// use hermite_spline::Knot;
    ///
    /// let knot = Knot::new(1.0, vec![]);
    /// assert!(knot.is_err());
    /// ```
    pub fn new(x: f64, values: Vec<f64>) -> Result<Self, SplineError> {
        if values.is_empty() {
            return Err(SplineError::InvalidArgument(
                "knot must carry at least function value".to_string(),
            ));
        }
        Ok(Knot { x, values })
    }

    /// Creates [Knot] from raw record `[x, y, y', y'', ...]`.
    /// # Example
    /// ```
    /// use hermite_spline::Knot;
    ///
    /// let knot = Knot::from_record(&[1.0, 2.0, 0.5]).unwrap();
    /// assert_eq!(1.0, knot.get_x());
    /// assert_eq!(2.0, knot.get_y());
    /// assert_eq!(Some(0.5), knot.get_derivative(1));
    /// ```
    pub fn from_record(record: &[f64]) -> Result<Self, SplineError> {
        match record.split_first() {
            Some((x, values)) if !values.is_empty() => Ok(Knot { x: *x, values: values.to_vec() }),
            _ => Err(SplineError::InvalidArgument(format!(
                "knot record needs x and at least one value, got {} element(s)",
                record.len()
            ))),
        }
    }

    /// Simplified method to create [Knot] with function value only.
    pub fn fix0(x: f64, y: f64) -> Self {
        Knot { x, values: vec![y] }
    }

    /// Simplified method to create [Knot] with function value and first derivative.
    pub fn fix1(x: f64, y: f64, first_derivative: f64) -> Self {
        Knot { x, values: vec![y, first_derivative] }
    }

    /// Simplified method to create [Knot] with function value, first and second derivative.
    pub fn fix2(x: f64, y: f64, first_derivative: f64, second_derivative: f64) -> Self {
        Knot { x, values: vec![y, first_derivative, second_derivative] }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.values[0]
    }

    pub fn get_values(&self) -> &[f64] {
        &self.values
    }

    /// Value of derivative of given `order`, order 0 is function value.
    pub fn get_derivative(&self, order: usize) -> Option<f64> {
        self.values.get(order).copied()
    }

    /// Highest derivative order carried by the knot.
    pub fn get_order(&self) -> usize {
        self.values.len() - 1
    }

    /// Repeated-x samples in derivative order: value first, then first derivative and so on.
    pub(crate) fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().map(move |value| (self.x, *value))
    }
}

impl Ord for Knot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x)
    }
}

impl PartialOrd for Knot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Knot {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Eq for Knot {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let x = 1.0;
        let values = vec![2.5, 4.0];
        let knot = Knot::new(x, values).unwrap();

        assert_eq!(x, knot.x);
        assert_eq!(2.5, knot.get_y());
        assert_eq!(1, knot.get_order());
        assert_eq!(Some(4.0), knot.get_derivative(1));
        assert_eq!(None, knot.get_derivative(2));
    }

    #[test]
    fn test_new_without_values() {
        let knot = Knot::new(1.0, Vec::new());

        assert!(matches!(knot, Err(SplineError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_record() {
        let knot = Knot::from_record(&[-1.0, 3.0, 0.5, -2.0]).unwrap();

        assert_eq!(-1.0, knot.get_x());
        assert_eq!(&[3.0, 0.5, -2.0], knot.get_values());
        assert_eq!(2, knot.get_order());
    }

    #[test]
    fn test_from_short_record() {
        assert!(Knot::from_record(&[]).is_err());
        assert!(Knot::from_record(&[1.0]).is_err());
    }

    #[test]
    fn test_fix0() {
        let knot = Knot::fix0(1.0, 2.5);

        assert_eq!(1.0, knot.x);
        assert_eq!(2.5, knot.get_y());
        assert_eq!(0, knot.get_order());
    }

    #[test]
    fn test_fix1() {
        let first_derivative = 0.5;
        let knot = Knot::fix1(1.0, 2.5, first_derivative);

        assert_eq!(1, knot.get_order());
        assert_eq!(Some(first_derivative), knot.get_derivative(1));
    }

    #[test]
    fn test_fix2() {
        let first_derivative = 0.5;
        let second_derivative = -3.5;
        let knot = Knot::fix2(1.0, 2.5, first_derivative, second_derivative);

        assert_eq!(2, knot.get_order());
        assert_eq!(Some(first_derivative), knot.get_derivative(1));
        assert_eq!(Some(second_derivative), knot.get_derivative(2));
    }

    #[test]
    fn test_samples_keep_derivative_order() {
        let knot = Knot::fix2(2.0, 1.0, 3.0, 6.0);
        let samples: Vec<(f64, f64)> = knot.samples().collect();

        assert_eq!(vec![(2.0, 1.0), (2.0, 3.0), (2.0, 6.0)], samples);
    }

    #[test]
    fn test_ordering_by_x() {
        let mut knots = vec![Knot::fix0(2.0, 0.0), Knot::fix1(-1.0, 5.0, 1.0), Knot::fix0(0.5, 3.0)];
        knots.sort();

        let xs: Vec<f64> = knots.iter().map(|k| k.get_x()).collect();
        assert_eq!(vec![-1.0, 0.5, 2.0], xs);
        assert!(Knot::fix0(1.0, 2.0) == Knot::fix1(1.0, 7.0, 0.0));
    }
}
