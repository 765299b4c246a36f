//! Implements small numeric helpers shared by the models

/// Rounds a value to 1 decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds a value to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds a value to 3 decimal places
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Rounds a value to 4 decimal places
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
