//! Footprint summary and number formatting for console output.

use std::fmt;

/// Render a kg CO2 amount in its shortest exact form
///
/// Two amounts print the same only if they are equal, so a total shown
/// as equal to the target always meets it. `10.0` → "10", `-0.0` → "0".
pub fn format_kg(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// The user name and total footprint block printed after calculation
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintReport {
    pub username: String,
    pub total_kg_per_day: f64,
}

impl FootprintReport {
    pub fn new(username: impl Into<String>, total_kg_per_day: f64) -> Self {
        Self {
            username: username.into(),
            total_kg_per_day,
        }
    }
}

impl fmt::Display for FootprintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User Name: {}", self.username)?;
        write!(
            f,
            "Total Carbon Footprint: {} kg CO2/day",
            format_kg(self.total_kg_per_day)
        )
    }
}
