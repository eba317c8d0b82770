//! JavaScript bindings.

use crate::hs::HsConfig;
use crate::pairing::PairingSolver;
use wasm_bindgen::prelude::*;

/// Pairs `numbers` and returns the serialized `PairingSolution`.
///
/// Throws on odd-length input or invalid parameters.
#[wasm_bindgen(js_name = solvePairing)]
pub fn solve_pairing(
    numbers: &[f64],
    hms: usize,
    hmcr: f64,
    par: f64,
    iterations: usize,
    seed: Option<u64>,
) -> Result<JsValue, JsError> {
    let config = HsConfig {
        memory_size: hms,
        hmcr,
        par,
        max_iterations: iterations,
        seed,
        ..HsConfig::default()
    };

    let solution =
        PairingSolver::solve(numbers, &config).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&solution).map_err(|e| JsError::new(&e.to_string()))
}
