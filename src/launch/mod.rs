//! Launch plan composition
//!
//! Turns the materialized configuration plus the mode flag into the ordered
//! invocation graph handed to the navigation and visualization subsystems.

pub mod plan;

use serde::Serialize;

pub use plan::{compose_plan, LaunchPlan, Subsystem, SubsystemInvocation, TopicRemap};

/// Which of the two mutually exclusive navigation branches runs. Selected
/// once per invocation from the slam flag; there are no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Localization,
    Mapping,
}

impl Mode {
    pub fn from_slam_flag(slam: bool) -> Self {
        if slam {
            Mode::Mapping
        } else {
            Mode::Localization
        }
    }
}
