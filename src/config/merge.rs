//! Parametric merge of parameter fragments and override rewrites
//!
//! Fragments are folded in manifest order with last-writer-wins on
//! conflicting top-level keys, then every override rewrite is applied. An
//! override targeting a path that does not exist in the merged configuration
//! is rejected; override files cannot invent parameters a fragment never
//! declared. The output preserves document order end to end, so identical
//! ordered inputs always serialize to byte-identical YAML.

use crate::config::manifest::read_document;
use crate::config::overrides::{OverrideDocument, Rewrite};
use crate::error::ConfigError;
use crate::utils::stable_digest;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// The materialized configuration handed to the navigation subsystems.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    root: Mapping,
}

/// Merge the ordered fragment files and apply the override document.
pub fn merge(
    fragment_paths: &[PathBuf],
    overrides: &OverrideDocument,
) -> Result<MergedConfig, ConfigError> {
    let mut accumulator = Mapping::new();

    for path in fragment_paths {
        let fragment = load_fragment(path)?;
        for (key, value) in fragment {
            // Later fragments win on top-level key conflicts.
            accumulator.insert(key, value);
        }
    }

    for rewrite in overrides.rewrites() {
        apply_rewrite(&mut accumulator, rewrite)?;
    }

    Ok(MergedConfig { root: accumulator })
}

fn load_fragment(path: &Path) -> Result<Mapping, ConfigError> {
    let text = read_document(path)?;
    let doc: Value =
        serde_yaml::from_str(&text).map_err(|e| ConfigError::parse(path, e.to_string()))?;

    match doc {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(ConfigError::parse(path, "parameter fragment must be a mapping")),
    }
}

/// Walk `rewrite`'s dotted path through nested mappings and replace the
/// value it lands on. Every intermediate segment must resolve to a mapping
/// and the final segment must already exist.
fn apply_rewrite(root: &mut Mapping, rewrite: &Rewrite) -> Result<(), ConfigError> {
    let segments: Vec<&str> = rewrite.segments().collect();
    let Some((last, parents)) = segments.split_last() else {
        return Err(ConfigError::MergeConflict { path: rewrite.path().to_string() });
    };

    let mut cursor = root;
    for segment in parents {
        let key = Value::String((*segment).to_string());
        cursor = match cursor.get_mut(&key) {
            Some(Value::Mapping(nested)) => nested,
            _ => return Err(ConfigError::MergeConflict { path: rewrite.path().to_string() }),
        };
    }

    let key = Value::String((*last).to_string());
    match cursor.get_mut(&key) {
        Some(slot) => {
            *slot = rewrite.value().clone();
            Ok(())
        }
        None => Err(ConfigError::MergeConflict { path: rewrite.path().to_string() }),
    }
}

impl MergedConfig {
    /// Serialize to YAML. Output is deterministic because mapping order is
    /// insertion order all the way down.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&Value::Mapping(self.root.clone()))?)
    }

    /// Write the artifact file consumed by downstream subsystems.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Default artifact location: a content-addressed file under the system
    /// temp directory, stable across identical invocations.
    pub fn default_artifact_path(&self) -> Result<PathBuf, ConfigError> {
        let yaml = self.to_yaml()?;
        Ok(std::env::temp_dir().join(format!("nav_params_{}.yaml", stable_digest(&yaml))))
    }

    /// Look up a value by dotted key path.
    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut segments = dotted_path.split('.');
        let first = Value::String(segments.next()?.to_string());
        let mut current = self.root.get(&first)?;
        for segment in segments {
            let key = Value::String(segment.to_string());
            current = match current {
                Value::Mapping(nested) => nested.get(&key)?,
                _ => return None,
            };
        }
        Some(current)
    }
}
