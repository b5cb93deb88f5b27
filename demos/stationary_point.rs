extern crate hermite_spline;

use hermite_spline::Polynomial;

fn main() {

    // f(x) = x^3 - 3x
    let polynomial = Polynomial::from_rows(&[
        [-2.0, -2.0],
        [0.0, 0.0],
        [1.0, -2.0],
        [2.0, 2.0]
    ]).unwrap();

    for seed in [-3.0, -0.5, 0.5, 3.0] {
        match polynomial.find_root(seed, Some(1e-9), Some(50)) {
            Some(x) => println!("seed {:.2}: stationary point at {:.6}, f = {:.6}", seed, x, polynomial.evaluate(x)),
            None => println!("seed {:.2}: no convergence", seed),
        }
    }
}
