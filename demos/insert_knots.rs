extern crate hermite_spline;

use hermite_spline::{Knot, Spline};

fn main() {

    let mut spline = Spline::new(vec![
        Knot::fix1(0.0, 1.0, 0.0),
        Knot::fix1(4.0, 1.0, 0.0)
    ]).unwrap();

    spline.add_point(Knot::fix0(1.0, -1.0), false).unwrap();
    spline.add_point(Knot::fix1(2.5, 3.0, 0.0), false).unwrap();
    spline.add_point(Knot::fix1(6.0, -2.0, 0.0), true).unwrap();

    if let Err(error) = spline.add_point(Knot::fix0(8.0, 0.0), false) {
        eprintln!("{}", error);
    }

    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();
    let result = spline.batch_evaluate(&x_vector);

    println!("x;y");
    for (x, y) in x_vector.iter().zip(result) {
        if let Some(y) = y {
            println!("{:.2};{:.2}", x, y);
        }
    }
}
