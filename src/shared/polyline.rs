//! Polyline-Hilfen für die Darstellung geschlossener Splines.

use dp_spline_engine::Vector2;

/// Schließt eine Knotenfolge, indem der erste Knoten am Ende wiederholt wird.
pub fn closed_polyline(nodes: &[Vector2]) -> Vec<Vector2> {
    let mut closed = Vec::with_capacity(nodes.len() + 1);
    closed.extend_from_slice(nodes);
    if let Some(&first) = nodes.first() {
        closed.push(first);
    }
    closed
}

/// Länge der geschlossenen Polyline durch alle Knoten.
pub fn closed_polyline_length(nodes: &[Vector2]) -> f64 {
    if nodes.len() < 2 {
        return 0.0;
    }
    let open: f64 = nodes.windows(2).map(|w| w[0].distance(w[1])).sum();
    open + nodes[nodes.len() - 1].distance(nodes[0])
}
