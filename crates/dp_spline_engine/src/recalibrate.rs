//! Neuberechnung der Pole im Frequenzbereich.
//!
//! Filtert die Pole mit der diskreten Fourier-Transformation so, dass der
//! anschließend ausgewertete Spline der Ordnung `r` exakt durch die
//! ursprünglichen Pole läuft.
//!
//! Theorie: <http://dha.spb.ru/PDF/discreteSplines.pdf>

use std::f64::consts::{PI, TAU};

use crate::Vector2;

/// Berechnet die Nenner `tr[0..m]` des Interpolationsfilters.
///
/// `tr[0] = 1`, für `k >= 1`:
/// `tr[k] = Σ_q (2n·sin(π(qm + k)/N))^(-2r) · (2·sin(πk/m))^(2r)`.
///
/// Die Potenz `-2r` wird vor der äußeren Multiplikation angewendet.
/// Sehr kleine Nenner werden nicht abgefangen.
pub fn filter_denominators(order: usize, subdivision: usize, pole_count: usize) -> Vec<f64> {
    let n = subdivision as f64;
    let m = pole_count as f64;
    let len = n * m;
    let exponent = i32::try_from(order).map_or(i32::MAX, |r| r.saturating_mul(2));

    let mut denominators = vec![0.0; pole_count];
    if let Some(first) = denominators.first_mut() {
        *first = 1.0;
    }

    for (k, slot) in denominators.iter_mut().enumerate().skip(1) {
        let k = k as f64;
        let inner: f64 = (0..subdivision)
            .map(|q| (2.0 * n * (PI * (q as f64 * m + k) / len).sin()).powi(-exponent))
            .sum();
        *slot = inner * (2.0 * (PI * k / m).sin()).powi(exponent);
    }

    denominators
}

/// Diskrete Fourier-Transformation der Pole (Real- und Imaginärteil getrennt).
fn forward_transform(poles: &[Vector2]) -> Vec<(Vector2, Vector2)> {
    let m = poles.len() as f64;

    (0..poles.len())
        .map(|j| {
            poles
                .iter()
                .enumerate()
                .fold((Vector2::ZERO, Vector2::ZERO), |(re, im), (k, &pole)| {
                    let angle = -TAU * (j * k) as f64 / m;
                    (re + pole * angle.cos(), im + pole * angle.sin())
                })
        })
        .collect()
}

/// Berechnet die Vektor-Koeffizienten, mit denen der Spline durch `poles` läuft.
///
/// Liefert genau `poles.len()` Vektoren. Die Parameter müssen bereits
/// validiert sein (mindestens 3 Pole, `order >= 1`, `subdivision >= 1`).
pub fn recalibrate_poles(poles: &[Vector2], order: usize, subdivision: usize) -> Vec<Vector2> {
    let pole_count = poles.len();
    let m = pole_count as f64;

    let denominators = filter_denominators(order, subdivision, pole_count);
    let spectrum = forward_transform(poles);

    (0..pole_count)
        .map(|p| {
            let sum = spectrum
                .iter()
                .zip(&denominators)
                .enumerate()
                .fold(Vector2::ZERO, |acc, (k, (&(re, im), &tr))| {
                    let angle = TAU * (k * p) as f64 / m;
                    acc + (re * angle.cos() - im * angle.sin()) * (1.0 / tr)
                });
            sum / m
        })
        .collect()
}
