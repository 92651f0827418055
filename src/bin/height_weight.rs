//! Height/weight ordinary least squares demo.
//!
//! Fits a line to 15 height (m) / weight (kg) observations, prints the
//! fitted coefficient, intercept, and R², then prints predictions for two
//! query heights (1.66 m interpolates, 2.0 m extrapolates).
//!
//! Run with:
//! ```bash
//! cargo run --bin height_weight
//! ```

use linfit::{Dataset, Estimator, LinearModel};
use ndarray::{array, Array2};

const HEIGHTS: [f64; 15] = [
    1.47, 1.50, 1.52, 1.55, 1.57, 1.60, 1.63, 1.65, 1.68, 1.70, 1.73, 1.75, 1.78, 1.80, 1.83,
];
const WEIGHTS: [f64; 15] = [
    52.21, 53.12, 54.48, 55.84, 57.20, 58.57, 59.93, 61.29, 63.11, 64.47, 66.28, 68.10, 69.92,
    72.19, 74.46,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::from_xy(&HEIGHTS, &WEIGHTS)?;

    let model = LinearModel::fit(&dataset)?;
    let r2 = model.score(&dataset)?;
    println!("{} {} {}", model.coefficients(), array![model.intercept()], r2);

    let queries = Array2::from_shape_vec((2, 1), vec![1.66, 2.0])?;
    let predictions = model.predict(queries.view())?;
    println!("{}", predictions);

    Ok(())
}
