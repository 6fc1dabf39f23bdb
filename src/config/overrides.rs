//! Override (remappings) document loading
//!
//! An override document is a flat YAML mapping from dotted key path to
//! replacement value, e.g. `amcl.max_particles: 5000`. The replacement value
//! may be any YAML value and is substituted verbatim. Nothing is validated
//! against a merged configuration here; unresolvable paths surface during
//! [`crate::config::merge::merge`].

use crate::config::manifest::read_document;
use crate::error::ConfigError;
use serde_yaml::Value;
use std::path::Path;

/// One path-targeted rewrite.
#[derive(Debug, Clone)]
pub struct Rewrite {
    path: String,
    value: Value,
}

impl Rewrite {
    /// The dotted key path as written in the document.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Path segments, split on `.`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.')
    }
}

/// Ordered list of rewrites parsed from one remappings file.
#[derive(Debug, Clone, Default)]
pub struct OverrideDocument {
    rewrites: Vec<Rewrite>,
}

impl OverrideDocument {
    /// No rewrites at all; merging with this document is the identity.
    pub fn empty() -> Self {
        OverrideDocument::default()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read_document(path)?;
        Self::parse(&text, path)
    }

    /// Parse override text. The top level must be a mapping of dotted string
    /// paths to arbitrary values; an empty document means no rewrites.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let doc: Value = serde_yaml::from_str(text)
            .map_err(|e| ConfigError::parse(path, e.to_string()))?;

        let mapping = match doc {
            Value::Null => return Ok(Self::empty()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(ConfigError::parse(path, "override document must be a mapping of dotted key paths to replacement values"));
            }
        };

        let mut rewrites = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let Value::String(key_path) = key else {
                return Err(ConfigError::parse(path, "override keys must be dotted string paths"));
            };
            if key_path.split('.').any(str::is_empty) {
                return Err(ConfigError::parse(path, format!("override key path '{key_path}' contains an empty segment")));
            }
            rewrites.push(Rewrite { path: key_path, value });
        }

        Ok(OverrideDocument { rewrites })
    }

    /// Resolve the remappings file the way the CLI expects: an explicitly
    /// given path must exist and parse, while the conventional default
    /// location degrades to an empty document when absent.
    pub fn resolve(explicit: Option<&Path>, bringup_root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default = bringup_root.join("params").join("default_remappings.yaml");
        if default.is_file() {
            Self::load(&default)
        } else {
            tracing::debug!("no remappings file at {}, applying no rewrites", default.display());
            Ok(Self::empty())
        }
    }

    pub fn rewrites(&self) -> &[Rewrite] {
        &self.rewrites
    }

    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_dotted_paths_in_order() {
        let doc = OverrideDocument::parse(
            "amcl.max_particles: 5000\nbt_navigator.odom_topic: /odom\n",
            Path::new("remap.yaml"),
        )
        .expect("overrides");

        let paths: Vec<&str> = doc.rewrites().iter().map(Rewrite::path).collect();
        assert_eq!(paths, ["amcl.max_particles", "bt_navigator.odom_topic"]);

        let segments: Vec<&str> = doc.rewrites()[0].segments().collect();
        assert_eq!(segments, ["amcl", "max_particles"]);
    }

    #[test]
    fn test_parse_empty_document_has_no_rewrites() {
        let doc = OverrideDocument::parse("", Path::new("remap.yaml")).expect("overrides");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_keeps_structured_replacement_values() {
        let doc = OverrideDocument::parse(
            "planner_server.expected_frequency: [10, 20]\n",
            Path::new("remap.yaml"),
        )
        .expect("overrides");
        assert!(matches!(doc.rewrites()[0].value(), Value::Sequence(_)));
    }

    #[test]
    fn test_parse_rejects_sequence_document() {
        let err = OverrideDocument::parse("- a\n- b\n", Path::new("remap.yaml"))
            .expect_err("sequence override document should be rejected");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_path_segment() {
        let err = OverrideDocument::parse("amcl..max_particles: 1\n", Path::new("remap.yaml"))
            .expect_err("empty path segment should be rejected");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_resolve_explicit_missing_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = OverrideDocument::resolve(Some(&tmp.path().join("nope.yaml")), tmp.path())
            .expect_err("explicit missing remappings file");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_resolve_default_missing_is_empty() {
        let tmp = TempDir::new().expect("tmp");
        let doc = OverrideDocument::resolve(None, tmp.path()).expect("empty overrides");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_resolve_default_location_is_loaded() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir_all(tmp.path().join("params")).expect("mkdir");
        fs::write(tmp.path().join("params/default_remappings.yaml"), "amcl.alpha1: 0.3\n")
            .expect("write");

        let doc = OverrideDocument::resolve(None, tmp.path()).expect("overrides");
        assert_eq!(doc.rewrites().len(), 1);
        assert_eq!(doc.rewrites()[0].path(), "amcl.alpha1");
    }
}
