//! Parameter manifest loading and fragment path resolution
//!
//! A manifest is a flat YAML mapping from component name to parameter-set
//! name, e.g. `{amcl: default, controller_server: omni}`. Each entry names
//! one fragment file `<config_root>/<component>/<set>.yaml`. Document order
//! is preserved because it is the merge precedence order.

use crate::error::ConfigError;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered component-name -> parameter-set-name pairs.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<(String, String)>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read_document(path)?;
        Self::parse(&text, path)
    }

    /// Parse manifest text. The top level must be a mapping of string keys
    /// to string values naming at least one component; duplicate keys are
    /// rejected by the YAML parser.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let doc: Value = serde_yaml::from_str(text)
            .map_err(|e| ConfigError::parse(path, e.to_string()))?;

        let Value::Mapping(mapping) = doc else {
            return Err(ConfigError::parse(path, "manifest must be a mapping of component names to parameter-set names"));
        };

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let (Value::String(component), Value::String(param_set)) = (key, value) else {
                return Err(ConfigError::parse(path, "manifest entries must map a string component name to a string parameter-set name"));
            };
            entries.push((component, param_set));
        }

        let manifest = Manifest { entries };
        if manifest.is_empty() {
            return Err(ConfigError::parse(path, "manifest must name at least one component"));
        }
        Ok(manifest)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve one fragment path per manifest entry, in manifest order.
///
/// Pure path arithmetic, no filesystem access, so precedence ordering is
/// testable without fixtures. Existence is checked by [`FragmentSet::load`].
pub fn resolve_fragments(manifest: &Manifest, config_root: &Path) -> Vec<PathBuf> {
    manifest
        .entries()
        .iter()
        .map(|(component, param_set)| {
            config_root.join(component).join(format!("{param_set}.yaml"))
        })
        .collect()
}

/// The ordered, existence-checked list of fragment files named by a manifest.
#[derive(Debug, Clone)]
pub struct FragmentSet {
    paths: Vec<PathBuf>,
}

impl FragmentSet {
    /// Load the manifest at `manifest_path` and resolve every entry against
    /// `config_root`, verifying that each fragment file exists. Fails before
    /// any merge work happens when anything is missing.
    pub fn load(manifest_path: &Path, config_root: &Path) -> Result<Self, ConfigError> {
        if !config_root.is_dir() {
            return Err(ConfigError::not_found(config_root));
        }

        let manifest = Manifest::load(manifest_path)?;
        let paths = resolve_fragments(&manifest, config_root);

        for path in &paths {
            if !path.is_file() {
                return Err(ConfigError::not_found(path));
            }
        }

        tracing::debug!("resolved {} parameter fragments from {}", paths.len(), manifest_path.display());
        Ok(FragmentSet { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

pub(crate) fn read_document(path: &Path) -> Result<String, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::not_found(path));
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_preserves_manifest_order() {
        let manifest = Manifest::parse(
            "controller_server: omni\namcl: default\nbt_navigator: default\n",
            Path::new("params.yaml"),
        )
        .expect("manifest");

        let components: Vec<&str> =
            manifest.entries().iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(components, ["controller_server", "amcl", "bt_navigator"]);
    }

    #[test]
    fn test_resolve_one_path_per_entry_in_order() {
        let manifest =
            Manifest::parse("amcl: default\nplanner_server: grid\n", Path::new("params.yaml"))
                .expect("manifest");

        let paths = resolve_fragments(&manifest, Path::new("/cfg"));
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], PathBuf::from("/cfg/amcl/default.yaml"));
        assert_eq!(paths[1], PathBuf::from("/cfg/planner_server/grid.yaml"));
    }

    #[test]
    fn test_parse_rejects_empty_manifest() {
        let err = Manifest::parse("{}\n", Path::new("params.yaml"))
            .expect_err("zero-component manifest should be rejected");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_zero_component_bringup() {
        let tmp = TempDir::new().expect("tmp");
        let manifest_path = tmp.path().join("params.yaml");
        fs::write(&manifest_path, "{}\n").expect("write");

        let err = FragmentSet::load(&manifest_path, tmp.path())
            .expect_err("empty manifest must not resolve to an empty fragment set");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_non_mapping_manifest() {
        let err = Manifest::parse("- amcl\n- planner\n", Path::new("params.yaml"))
            .expect_err("sequence manifest should be rejected");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_non_string_values() {
        let err = Manifest::parse("amcl: [a, b]\n", Path::new("params.yaml"))
            .expect_err("non-string parameter-set name should be rejected");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_duplicate_components() {
        let err = Manifest::parse("amcl: default\namcl: other\n", Path::new("params.yaml"))
            .expect_err("duplicate component keys should be rejected");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_manifest_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = FragmentSet::load(&tmp.path().join("params.yaml"), tmp.path())
            .expect_err("missing manifest");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_missing_fragment_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let manifest_path = tmp.path().join("params.yaml");
        fs::write(&manifest_path, "amcl: default\n").expect("write");

        let err = FragmentSet::load(&manifest_path, tmp.path()).expect_err("missing fragment");
        match err {
            ConfigError::NotFound { path } => {
                assert!(path.ends_with("amcl/default.yaml"), "unexpected path: {}", path.display());
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_config_root_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let manifest_path = tmp.path().join("params.yaml");
        fs::write(&manifest_path, "amcl: default\n").expect("write");

        let err = FragmentSet::load(&manifest_path, &tmp.path().join("no-such-root"))
            .expect_err("missing config root");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_load_resolves_existing_fragments() {
        let tmp = TempDir::new().expect("tmp");
        let manifest_path = tmp.path().join("params.yaml");
        fs::write(&manifest_path, "amcl: default\nbt_navigator: default\n").expect("write");

        fs::create_dir_all(tmp.path().join("amcl")).expect("mkdir");
        fs::create_dir_all(tmp.path().join("bt_navigator")).expect("mkdir");
        fs::write(tmp.path().join("amcl/default.yaml"), "max_particles: 2000\n").expect("write");
        fs::write(tmp.path().join("bt_navigator/default.yaml"), "rate: 10\n").expect("write");

        let fragments = FragmentSet::load(&manifest_path, tmp.path()).expect("fragments");
        assert_eq!(fragments.paths().len(), 2);
        assert!(fragments.paths()[0].ends_with("amcl/default.yaml"));
        assert!(fragments.paths()[1].ends_with("bt_navigator/default.yaml"));
    }
}
