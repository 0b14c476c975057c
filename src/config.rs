use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// Where the tutorial tree lives when no `--root` is given.
pub const DEFAULT_ROOT: &str = "src/content/tutorial";

/// Settings for one scaffolding run. Resolved once before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub root: PathBuf,
}

impl ScaffoldConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Anchors a relative root at the current working directory.
    pub fn resolve(root: &Path) -> anyhow::Result<Self> {
        if root.is_absolute() {
            return Ok(Self::new(root));
        }
        let cwd = std::env::current_dir().context("read current directory")?;
        Ok(Self::new(cwd.join(root)))
    }
}
