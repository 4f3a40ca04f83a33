//! Periodische Indexierung für N-periodische Folgen.

/// Bildet einen beliebigen (auch negativen) Index auf `[0, len - 1]` ab.
///
/// Echter Modulo-Rest statt abschneidendem `%`, d.h. `periodic_index(-1, len) == len - 1`.
pub fn periodic_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "Periode muss > 0 sein");
    index.rem_euclid(len as isize) as usize
}
