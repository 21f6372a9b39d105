#![forbid(unsafe_code)]

//! Core domain model and interaction flow for the carbon footprint calculator.
//!
//! This crate provides:
//! - Contributor types and their emission factor rules
//! - The bounded footprint aggregator
//! - The in-memory session gate and goal tracker
//! - The console interaction shell that ties them together

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod rules;
pub mod aggregator;
pub mod session;
pub mod goal;
pub mod report;
pub mod resources;
pub mod shell;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use aggregator::{Admission, FootprintAggregator};
pub use session::{Credentials, GateState, SessionGate};
pub use goal::{GoalStatus, GoalTracker};
pub use report::FootprintReport;
pub use resources::EducationalResources;
pub use shell::{FootprintInputs, InteractionShell, SessionOutcome};
