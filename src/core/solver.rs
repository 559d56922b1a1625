//! Quadratic solver for the lot sizing equation.
//!
//! A lot of width `W = 8x + 40` and length `L = 7x + 40` has area
//! `56x² + 600x + 1600`, so a requested area `A` gives
//! `56x² + 600x + (1600 - A) = 0`.

use crate::domain::model::Solution;

const A: f64 = 56.0;
const B: f64 = 600.0;
const BASE_AREA: f64 = 1600.0;

pub fn width_for(x: f64) -> f64 {
    8.0 * x + 40.0
}

pub fn length_for(x: f64) -> f64 {
    7.0 * x + 40.0
}

pub fn discriminant(area: f64) -> f64 {
    let c = BASE_AREA - area;
    B * B - 4.0 * A * c
}

/// `[x1, x2]` with `x1` the `+√D` root, or `None` when `D < 0`.
pub fn candidate_roots(area: f64) -> Option<[f64; 2]> {
    let d = discriminant(area);
    if d < 0.0 {
        return None;
    }

    let sqrt_d = d.sqrt();
    let x1 = (-B + sqrt_d) / (2.0 * A);
    let x2 = (-B - sqrt_d) / (2.0 * A);
    Some([x1, x2])
}

/// First candidate that is `>= 0`, scanning in the given order.
pub fn first_non_negative(candidates: [f64; 2]) -> Option<f64> {
    candidates.into_iter().find(|root| *root >= 0.0)
}

/// Solves for the lot whose area is `area`, or `None` when no non-negative root exists.
pub fn solve_for_area(area: f64) -> Option<Solution> {
    let x = candidate_roots(area).and_then(first_non_negative)?;

    let width = width_for(x);
    let length = length_for(x);
    Some(Solution {
        x,
        width,
        length,
        computed_area: width * length,
    })
}
