//! Rekursive Auswertung der Spline-Knoten.
//!
//! Ordnung 1 entsteht aus der Faltung der Pol-Vektoren (an den Positionen
//! `p·n`) mit dem Kern, jede weitere Ordnung aus der dichten periodischen
//! Faltung der vorherigen Ordnung mit demselben Kern, geteilt durch `n`.

use crate::Vector2;
use crate::periodic::periodic_index;

/// Knoten 1. Ordnung: `s1[j] = Σ_p vectors[p] · kernel[(j - p·n) mod N]`.
///
/// `kernel.len()` bestimmt N; `vectors.len()` ist die Polzahl m.
pub fn first_order_nodes(vectors: &[Vector2], kernel: &[f64], subdivision: usize) -> Vec<Vector2> {
    let len = kernel.len();

    (0..len)
        .map(|j| {
            vectors
                .iter()
                .enumerate()
                .fold(Vector2::ZERO, |acc, (p, &vector)| {
                    let offset = j as isize - (p * subdivision) as isize;
                    acc + vector * kernel[periodic_index(offset, len)]
                })
        })
        .collect()
}

/// Hebt die Ordnung um eins an: `s[j] = Σ_k kernel[k] · previous[(j - k) mod N] / n`.
///
/// Liefert immer eine neue Folge, `previous` bleibt unverändert.
pub fn raise_order(previous: &[Vector2], kernel: &[f64], subdivision: usize) -> Vec<Vector2> {
    let len = previous.len();
    debug_assert_eq!(len, kernel.len(), "Kern und Knotenfolge müssen gleich lang sein");
    let scale = subdivision as f64;

    (0..len)
        .map(|j| {
            let sum = kernel
                .iter()
                .enumerate()
                .fold(Vector2::ZERO, |acc, (k, &weight)| {
                    acc + weight * previous[periodic_index(j as isize - k as isize, len)]
                });
            sum / scale
        })
        .collect()
}

/// Berechnet die Knoten der Ordnung `order` (>= 1).
///
/// Es werden nur zwei Ordnungen gleichzeitig gehalten: die aktuelle und die
/// daraus neu berechnete.
pub fn evaluate_nodes(
    vectors: &[Vector2],
    kernel: &[f64],
    order: usize,
    subdivision: usize,
) -> Vec<Vector2> {
    let mut nodes = first_order_nodes(vectors, kernel, subdivision);

    for level in 2..=order {
        nodes = raise_order(&nodes, kernel, subdivision);
        log::trace!("Spline-Ordnung {} berechnet ({} Knoten)", level, nodes.len());
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::first_order_kernel;
    use approx::assert_abs_diff_eq;

    fn triangle() -> Vec<Vector2> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(6.0, 0.0),
            Vector2::new(3.0, 6.0),
        ]
    }

    #[test]
    fn test_first_order_is_linear_interpolation() {
        let poles = triangle();
        let kernel = first_order_kernel(3, poles.len());
        let nodes = first_order_nodes(&poles, &kernel, 3);

        assert_eq!(nodes.len(), 9);
        // Pole liegen auf j = p·n
        for (p, pole) in poles.iter().enumerate() {
            assert_abs_diff_eq!(nodes[p * 3].x, pole.x, epsilon = 1e-12);
            assert_abs_diff_eq!(nodes[p * 3].y, pole.y, epsilon = 1e-12);
        }
        // Zwischenknoten liegen auf den Polygonkanten
        assert_abs_diff_eq!(nodes[1].x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(nodes[1].y, 0.0, epsilon = 1e-12);
        // Letzter Abschnitt schließt das Polygon: (3,6) → (0,0)
        assert_abs_diff_eq!(nodes[8].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(nodes[8].y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_raise_order_keeps_constant_sequence() {
        let kernel = first_order_kernel(4, 3);
        let constant = vec![Vector2::new(1.5, -2.0); kernel.len()];
        let raised = raise_order(&constant, &kernel, 4);
        for v in raised {
            assert_abs_diff_eq!(v.x, 1.5, epsilon = 1e-12);
            assert_abs_diff_eq!(v.y, -2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_order_one_equals_first_order_nodes() {
        let poles = triangle();
        let kernel = first_order_kernel(5, poles.len());
        assert_eq!(
            evaluate_nodes(&poles, &kernel, 1, 5),
            first_order_nodes(&poles, &kernel, 5)
        );
    }

    #[test]
    fn test_evaluate_chains_raise_order() {
        let poles = triangle();
        let kernel = first_order_kernel(2, poles.len());
        let order1 = first_order_nodes(&poles, &kernel, 2);
        let order2 = raise_order(&order1, &kernel, 2);
        let order3 = raise_order(&order2, &kernel, 2);
        assert_eq!(evaluate_nodes(&poles, &kernel, 3, 2), order3);
    }

    #[test]
    fn test_higher_order_preserves_centroid() {
        let poles = triangle();
        let kernel = first_order_kernel(4, poles.len());
        let nodes = evaluate_nodes(&poles, &kernel, 4, 4);
        let centroid = nodes.iter().copied().sum::<Vector2>() / nodes.len() as f64;
        assert_abs_diff_eq!(centroid.x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(centroid.y, 2.0, epsilon = 1e-9);
    }
}
