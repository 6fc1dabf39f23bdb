//! Configuration loading and merging
//!
//! Handles the manifest-driven fragment resolution, the remappings override
//! document, and the parametric merge that materializes one configuration
//! artifact for the navigation subsystems.

pub mod manifest;
pub mod merge;
pub mod overrides;

pub use manifest::{resolve_fragments, FragmentSet, Manifest};
pub use merge::{merge, MergedConfig};
pub use overrides::{OverrideDocument, Rewrite};
