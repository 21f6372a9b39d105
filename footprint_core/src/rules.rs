//! Emission factor rules for each footprint category.
//!
//! Factors are fixed tables; unknown inputs fall back to a per-category
//! default instead of failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Transport factors in kg CO2 per day
static TRANSPORT_FACTORS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| HashMap::from([("car", 2.0), ("bus", 1.5), ("bike", 0.0)]));

/// Diet factors in kg CO2 per day
static DIET_FACTORS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| HashMap::from([("vegetarian", 1.0), ("meat", 2.5)]));

/// Impact for a transport method not in the table
pub const TRANSPORT_FALLBACK: f64 = 0.0;

/// Impact for a dietary habit not in the table
pub const DIET_FALLBACK: f64 = 1.5;

/// Impact of a transport method. Matching is exact and case-sensitive.
pub fn transport_impact(method: &str) -> f64 {
    TRANSPORT_FACTORS
        .get(method)
        .copied()
        .unwrap_or(TRANSPORT_FALLBACK)
}

/// Energy usage maps one-to-one onto its impact.
pub fn energy_impact(usage_kwh: f64) -> f64 {
    usage_kwh
}

/// Impact of a dietary habit. Matching is exact and case-sensitive.
pub fn diet_impact(habit: &str) -> f64 {
    DIET_FACTORS.get(habit).copied().unwrap_or(DIET_FALLBACK)
}

/// Parse an energy usage token, falling back to 0.0
///
/// Anything that is not a finite number (including "nan" and "inf")
/// is treated as no usage.
pub fn parse_energy_usage(token: &str) -> f64 {
    match token.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::warn!("Unrecognized energy usage {:?}, using 0", token);
            0.0
        }
    }
}
