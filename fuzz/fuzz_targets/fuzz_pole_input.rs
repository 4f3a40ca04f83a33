#![no_main]

use dp_spline_tool::{SplineOptions, run_pole_input};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Große Parameter begrenzen, die Faltung ist O(N²·r)
    let options = SplineOptions {
        order: 2,
        subdivision: 3,
        ..SplineOptions::default()
    };
    if let Ok(input) = dp_spline_tool::parse_pole_input(content) {
        let poles = input.poles.as_ref().map_or(0, Vec::len);
        let params = input.resolve(&options);
        if poles > 64 || params.order > 4 || params.subdivision > 16 {
            return;
        }
        let _ = run_pole_input(content, &options);
    }
});
