//! Render command implementation
//!
//! Merge-only debugging aid: materializes the configuration the launch
//! command would hand to the subsystems, without composing a plan.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{merge, FragmentSet, OverrideDocument};

#[derive(Args)]
pub struct RenderArgs {
    /// Manifest mapping each component to its parameter-set name
    #[arg(short = 'p', long, value_name = "FILE")]
    pub params_file: PathBuf,

    /// Root directory holding per-component parameter fragments
    #[arg(short = 'c', long, value_name = "DIR")]
    pub config_root: PathBuf,

    /// Parameter remappings applied on top of the merged configuration
    #[arg(long, value_name = "FILE")]
    pub remappings_file: Option<PathBuf>,

    /// Bringup directory used to resolve the default remappings file
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub bringup_root: PathBuf,

    /// Write the merged configuration here instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let fragments = FragmentSet::load(&args.params_file, &args.config_root)
        .context("failed to resolve parameter fragments")?;
    let overrides = OverrideDocument::resolve(args.remappings_file.as_deref(), &args.bringup_root)
        .context("failed to load remappings")?;

    let merged = merge(fragments.paths(), &overrides)?;

    match args.output {
        Some(path) => {
            merged.write_to(&path).with_context(|| {
                format!("failed to write merged configuration to {}", path.display())
            })?;
        }
        None => print!("{}", merged.to_yaml()?),
    }

    Ok(())
}
