//! nav-bringup: assemble a navigation stack's runtime configuration
//!
//! The core is the parametric merge: N independently-authored parameter
//! fragments, selected by a manifest, are folded in manifest order and then
//! rewritten by a single remappings overlay. The result is one materialized
//! configuration artifact plus a launch plan naming which of the two
//! mutually exclusive navigation branches (localization or SLAM) consumes
//! it.

pub mod cli;
pub mod config;
pub mod error;
pub mod launch;
pub mod utils;

pub use error::ConfigError;
