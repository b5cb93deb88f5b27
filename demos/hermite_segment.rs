extern crate hermite_spline;

use hermite_spline::Polynomial;

fn main() {

    // value, first and second derivative at x = 0, value and first derivative at x = 1
    let samples = vec![
        (0.0, 1.0),
        (0.0, 0.0),
        (0.0, -2.0),
        (1.0, 0.5),
        (1.0, 0.0),
    ];

    let polynomial = Polynomial::new(&samples).unwrap();

    let x_min = -0.5;
    let x_max = 1.5;
    let number_of_steps = 40;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y;dy");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        let (y, dy) = polynomial.derivative(x);
        println!("{:.2};{:.4};{:.4}", x, y, dy);
    }
}
