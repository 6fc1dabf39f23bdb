//! nav-bringup: assemble a navigation stack's runtime configuration
//!
//! Merges per-component parameter fragments with a remappings overlay and
//! composes the conditional localization-vs-mapping launch plan.

use anyhow::Result;

fn main() -> Result<()> {
    nav_bringup::cli::run()
}
