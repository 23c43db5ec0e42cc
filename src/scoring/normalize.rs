// src/scoring/normalize.rs
//! Min-max rescaling of a raw score map onto [0, 1].

use super::ScoreMap;

/// Rescale every value to `(value - min) / (max - min)`.
///
/// An empty map stays empty. When all values are equal the spread is zero;
/// every key maps to 1.0 so a populated-but-flat score set reads as maximal
/// agreement instead of being dropped at the ranking stage.
pub fn normalize(raw: ScoreMap) -> ScoreMap {
    if raw.is_empty() {
        return raw;
    }
    let min = raw.values().copied().fold(f64::INFINITY, f64::min);
    let max = raw.values().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;
    if spread == 0.0 {
        return raw.into_keys().map(|key| (key, 1.0)).collect();
    }
    raw.into_iter()
        .map(|(key, value)| (key, (value - min) / spread))
        .collect()
}
