//! Subsystem invocation graph
//!
//! The plan mirrors the bringup launch description: exactly one of the
//! localization / slam-toolbox branches depending on the selected mode, then
//! the navigation stack with its `cmd_vel -> nav_vel` remap, then the
//! visualization front end. Subsystems are opaque collaborators; composing
//! the graph is where this system's responsibility ends.

use super::Mode;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    Localization,
    SlamToolbox,
    Navigation,
    Rviz,
}

/// A process-wide topic rename scoped to one invocation, modeled as plain
/// data on the invocation rather than ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRemap {
    pub from: String,
    pub to: String,
}

impl TopicRemap {
    pub fn nav_vel() -> Self {
        TopicRemap { from: "cmd_vel".to_string(), to: "nav_vel".to_string() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubsystemInvocation {
    pub subsystem: Subsystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remaps: Vec<TopicRemap>,
}

impl SubsystemInvocation {
    fn new(subsystem: Subsystem) -> Self {
        SubsystemInvocation { subsystem, params_file: None, map: None, remaps: Vec::new() }
    }

    fn with_params(mut self, params_file: &Path) -> Self {
        self.params_file = Some(params_file.to_path_buf());
        self
    }

    fn with_map(mut self, map: &Path) -> Self {
        self.map = Some(map.to_path_buf());
        self
    }

    fn with_remap(mut self, remap: TopicRemap) -> Self {
        self.remaps.push(remap);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchPlan {
    pub mode: Mode,
    pub invocations: Vec<SubsystemInvocation>,
}

impl LaunchPlan {
    pub fn invocation(&self, subsystem: Subsystem) -> Option<&SubsystemInvocation> {
        self.invocations.iter().find(|inv| inv.subsystem == subsystem)
    }
}

/// Compose the invocation graph for one bringup.
///
/// `params_file` is the materialized configuration artifact. `map` is only
/// consulted in localization mode; the mapping branch builds its own map.
pub fn compose_plan(mode: Mode, params_file: &Path, map: &Path) -> LaunchPlan {
    let mut invocations = Vec::with_capacity(3);

    match mode {
        Mode::Localization => invocations.push(
            SubsystemInvocation::new(Subsystem::Localization)
                .with_params(params_file)
                .with_map(map),
        ),
        Mode::Mapping => invocations
            .push(SubsystemInvocation::new(Subsystem::SlamToolbox).with_params(params_file)),
    }

    invocations.push(
        SubsystemInvocation::new(Subsystem::Navigation)
            .with_params(params_file)
            .with_remap(TopicRemap::nav_vel()),
    );
    invocations.push(SubsystemInvocation::new(Subsystem::Rviz));

    LaunchPlan { mode, invocations }
}
