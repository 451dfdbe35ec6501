use chebapprox::{error::Error, ApproximationOptions, ChebyshevApproximation, Normalization};

fn main() -> Result<(), Error> {
    //
    // Approximate cos(x) on [-5, 5] with 8 coefficients.
    // The source is only sampled at the 8 Chebyshev nodes, and never called again.
    let approx = ChebyshevApproximation::new(f64::cos, -5.0, 5.0, 8)?;
    println!("{approx}");

    //
    // The expansion passes exactly through the samples at the nodes
    for (x, y) in approx.samples() {
        println!("x = {x:>8.4}, cos(x) = {y:>8.5}, approximation = {:>8.5}", approx.evaluate(x));
    }
    println!("Largest node residual: {:e}", approx.node_residual());

    //
    // Between the nodes, 8 terms are not quite enough for a function that oscillates this much.
    // Adding a few more terms fixes it quickly.
    for n in [8, 10, 12, 16] {
        let approx = ChebyshevApproximation::new(f64::cos, -5.0, 5.0, n)?;
        let worst = approx
            .solve_range(-5.0..=5.0, 0.01)
            .into_iter()
            .map(|(x, y)| (y - x.cos()).abs())
            .fold(0.0, f64::max);
        println!("n = {n:>2}: max error {worst:.2e}");
    }

    //
    // A fitter can refine the coefficients through the model view.
    // Here we just bump the scale to show the round trip.
    let options = ApproximationOptions::default().with_normalization(Normalization::Normalized);
    let shifted = ChebyshevApproximation::with_options(|x: f64| 2.0 + x.cos(), -5.0, 5.0, 12, options)?;
    let model = shifted.as_model();

    let mut params = model.initial_parameters();
    params[0] *= 1.5;
    println!("Parameters: {:?}", model.parameter_names());
    println!("Scaled model at x = 0: {}", model.eval(0.0, &params)?);

    let refined = shifted.with_coefficients(&params)?;
    println!("{refined}");

    Ok(())
}
