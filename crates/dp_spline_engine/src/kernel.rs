//! Koeffizienten des diskreten periodischen Q-Splines 1. Ordnung.

/// Berechnet den Faltungskern der Länge N = n·m.
///
/// Dreiecksimpuls mit Wert 1 bei `j = 0`, linear fallend bis 0 bei `j = n`,
/// 0 bis `j = N - n` und danach symmetrisch wieder ansteigend. Über eine
/// Periode summieren sich die Werte zu `n`.
pub fn first_order_kernel(subdivision: usize, pole_count: usize) -> Vec<f64> {
    let n = subdivision;
    let len = n * pole_count;
    let scale = n as f64;

    (0..len)
        .map(|j| {
            if j < n {
                (n - j) as f64 / scale
            } else if j + n <= len {
                0.0
            } else {
                (j + n - len) as f64 / scale
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kernel_length_and_peak() {
        let kernel = first_order_kernel(4, 5);
        assert_eq!(kernel.len(), 20);
        assert_abs_diff_eq!(kernel[0], 1.0);
        assert_abs_diff_eq!(kernel[10], 0.0);
    }

    #[test]
    fn test_kernel_ramps() {
        let kernel = first_order_kernel(4, 3);
        let expected = [
            1.0, 0.75, 0.5, 0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.25, 0.5, 0.75,
        ];
        assert_eq!(kernel.len(), expected.len());
        for (value, want) in kernel.iter().zip(expected) {
            assert_abs_diff_eq!(*value, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_kernel_symmetric_around_zero() {
        for n in 1..=8 {
            for m in 3..=9 {
                let kernel = first_order_kernel(n, m);
                let len = kernel.len();
                for j in 1..n {
                    assert_abs_diff_eq!(kernel[j], kernel[len - j], epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_kernel_sums_to_subdivision() {
        for n in 1..=10 {
            let sum: f64 = first_order_kernel(n, 6).iter().sum();
            assert_abs_diff_eq!(sum, n as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_kernel_without_subdivision_is_unit_pulse() {
        let kernel = first_order_kernel(1, 4);
        assert_eq!(kernel, vec![1.0, 0.0, 0.0, 0.0]);
    }
}
