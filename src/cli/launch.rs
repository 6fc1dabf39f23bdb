//! Launch command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{merge, FragmentSet, OverrideDocument};
use crate::error::ConfigError;
use crate::launch::{compose_plan, Mode};

#[derive(Args)]
pub struct LaunchArgs {
    /// Start SLAM (map construction) instead of map localization
    #[arg(long)]
    pub slam: bool,

    /// Manifest mapping each component to its parameter-set name
    #[arg(short = 'p', long, value_name = "FILE")]
    pub params_file: PathBuf,

    /// Root directory holding per-component parameter fragments
    #[arg(short = 'c', long, value_name = "DIR")]
    pub config_root: PathBuf,

    /// Map descriptor to localize against (localization mode only)
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Maps directory used to resolve the default map descriptor
    #[arg(long, value_name = "DIR", default_value = "maps")]
    pub maps_root: PathBuf,

    /// Parameter remappings applied on top of the merged configuration
    #[arg(long, value_name = "FILE")]
    pub remappings_file: Option<PathBuf>,

    /// Bringup directory used to resolve the default remappings file
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub bringup_root: PathBuf,

    /// Where to write the merged configuration artifact
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit the launch plan as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LaunchArgs) -> Result<()> {
    let fragments = FragmentSet::load(&args.params_file, &args.config_root)
        .context("failed to resolve parameter fragments")?;
    let overrides = OverrideDocument::resolve(args.remappings_file.as_deref(), &args.bringup_root)
        .context("failed to load remappings")?;

    let merged = merge(fragments.paths(), &overrides)?;

    let mode = Mode::from_slam_flag(args.slam);
    let map = args
        .map
        .unwrap_or_else(|| args.maps_root.join("config").join("map.yaml"));
    if mode == Mode::Localization && !map.is_file() {
        return Err(ConfigError::not_found(map)).context("map descriptor required for localization");
    }

    let artifact = match args.output {
        Some(path) => path,
        None => merged.default_artifact_path()?,
    };
    merged
        .write_to(&artifact)
        .with_context(|| format!("failed to write merged configuration to {}", artifact.display()))?;
    tracing::info!("materialized configuration at {}", artifact.display());

    let plan = compose_plan(mode, &artifact, &map);
    let rendered = if args.json {
        serde_json::to_string_pretty(&plan).context("failed to encode launch plan")?
    } else {
        serde_yaml::to_string(&plan).context("failed to encode launch plan")?
    };
    println!("{rendered}");

    Ok(())
}
