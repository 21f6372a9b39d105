//! Daily footprint goal and progress reporting.

use crate::report::format_kg;
use std::fmt;

/// Target used when nothing else is configured, in kg CO2 per day
pub const DEFAULT_TARGET_KG_PER_DAY: f64 = 10.0;

/// Outcome of comparing a footprint against the target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalStatus {
    Achieved,
    KeepWorking,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStatus::Achieved => f.write_str("Goal achieved!"),
            GoalStatus::KeepWorking => f.write_str("Keep working towards your goal."),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalTracker {
    target_kg_per_day: f64,
}

impl Default for GoalTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_KG_PER_DAY)
    }
}

impl GoalTracker {
    pub fn new(target_kg_per_day: f64) -> Self {
        Self { target_kg_per_day }
    }

    /// Replace the target and return its announcement
    pub fn set_target(&mut self, target_kg_per_day: f64) -> String {
        self.target_kg_per_day = target_kg_per_day;
        tracing::debug!("Goal target set to {}", target_kg_per_day);
        self.announcement()
    }

    pub fn target(&self) -> f64 {
        self.target_kg_per_day
    }

    pub fn announcement(&self) -> String {
        format!(
            "Goal set to reduce footprint by {} kg CO2/day.",
            format_kg(self.target_kg_per_day)
        )
    }

    /// A total at or below the target counts as achieved
    pub fn evaluate(&self, current_kg_per_day: f64) -> GoalStatus {
        if current_kg_per_day <= self.target_kg_per_day {
            GoalStatus::Achieved
        } else {
            GoalStatus::KeepWorking
        }
    }

    /// Current footprint line followed by the status line
    pub fn progress(&self, current_kg_per_day: f64) -> String {
        format!(
            "Current footprint: {} kg CO2/day.\n{}",
            format_kg(current_kg_per_day),
            self.evaluate(current_kg_per_day)
        )
    }
}
