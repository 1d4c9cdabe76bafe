//! Fixer configuration stored in `pagefix.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::rewrite::{DEFAULT_WRAPPER_TAG, validate_wrapper_tag};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pagefix.toml";

/// Fixer configuration (TOML).
///
/// Missing fields default to the layout of the generated admin app.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixConfig {
    /// Directory searched recursively for target files.
    pub root: PathBuf,

    /// Exact file name of target files.
    pub file_name: String,

    /// Wrapper element whose duplicated/mismatched tags get repaired.
    pub wrapper_tag: String,

    /// Directory names pruned from the walk (e.g. `node_modules`).
    pub skip_dirs: Vec<String>,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src/app"),
            file_name: "page.tsx".to_string(),
            wrapper_tag: DEFAULT_WRAPPER_TAG.to_string(),
            skip_dirs: Vec::new(),
        }
    }
}

impl FixConfig {
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(anyhow!("root must be non-empty"));
        }
        if self.file_name.trim().is_empty() {
            return Err(anyhow!("file_name must be non-empty"));
        }
        if self.file_name.contains('/') || self.file_name.contains('\\') {
            return Err(anyhow!("file_name must not contain path separators"));
        }
        validate_wrapper_tag(&self.wrapper_tag)?;
        if self.skip_dirs.iter().any(|dir| dir.trim().is_empty()) {
            return Err(anyhow!("skip_dirs entries must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FixConfig::default()`.
pub fn load_config(path: &Path) -> Result<FixConfig> {
    if !path.exists() {
        let cfg = FixConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FixConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, FixConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("pagefix.toml");
        fs::write(&path, "root = \"web/app\"\nskip_dirs = [\"node_modules\"]\n")
            .expect("write config");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.root, PathBuf::from("web/app"));
        assert_eq!(cfg.skip_dirs, vec!["node_modules"]);
        assert_eq!(cfg.file_name, "page.tsx");
        assert_eq!(cfg.wrapper_tag, "LayoutWrapper");
    }

    #[test]
    fn rejects_file_name_with_separator() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("pagefix.toml");
        fs::write(&path, "file_name = \"app/page.tsx\"\n").expect("write config");

        let err = load_config(&path).expect_err("invalid config");
        assert!(format!("{err:#}").contains("path separators"));
    }

    #[test]
    fn rejects_wrapper_tag_with_markup() {
        let cfg = FixConfig {
            wrapper_tag: "<Layout>".to_string(),
            ..FixConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_unparseable_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("pagefix.toml");
        fs::write(&path, "skip_dirs = \"node_modules\"\n").expect("write config");

        let err = load_config(&path).expect_err("invalid toml");
        assert!(format!("{err:#}").contains("parse"));
    }
}
