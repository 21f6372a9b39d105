//! Core domain types for the footprint calculator.
//!
//! A footprint is built from one contributor per category. Each contributor
//! carries the raw user input for its category and maps it to a daily
//! emission value through the rules in [`crate::rules`].

use crate::rules;
use std::fmt;

// ============================================================================
// Categories
// ============================================================================

/// Category a contributor belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Transport,
    Energy,
    Diet,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Diet => "diet",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Contributors
// ============================================================================

/// A single input to the footprint, tagged by category
#[derive(Clone, Debug, PartialEq)]
pub enum Contributor {
    /// How the user travels (e.g. "car", "bus", "bike")
    Transport { method: String },
    /// Daily energy usage, read as kg CO2 per day
    Energy { usage_kwh: f64 },
    /// Dietary habit (e.g. "vegetarian", "meat")
    Diet { habit: String },
}

impl Contributor {
    pub fn transport(method: impl Into<String>) -> Self {
        Contributor::Transport {
            method: method.into(),
        }
    }

    pub fn energy(usage_kwh: f64) -> Self {
        Contributor::Energy { usage_kwh }
    }

    pub fn diet(habit: impl Into<String>) -> Self {
        Contributor::Diet {
            habit: habit.into(),
        }
    }

    /// Category of this contributor
    pub fn category(&self) -> Category {
        match self {
            Contributor::Transport { .. } => Category::Transport,
            Contributor::Energy { .. } => Category::Energy,
            Contributor::Diet { .. } => Category::Diet,
        }
    }

    /// Daily emission value in kg CO2 produced by this contributor's rule
    pub fn impact(&self) -> f64 {
        match self {
            Contributor::Transport { method } => rules::transport_impact(method),
            Contributor::Energy { usage_kwh } => rules::energy_impact(*usage_kwh),
            Contributor::Diet { habit } => rules::diet_impact(habit),
        }
    }
}
