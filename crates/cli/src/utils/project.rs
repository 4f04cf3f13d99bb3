use anyhow::{Context, Result};
use omod_scout_core::{ProjectContext, Settings, derive_module_package};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded project together with its effective settings
#[derive(Debug, Clone)]
pub struct Session {
    pub project: ProjectContext,
    pub settings: Settings,
}

impl Session {
    /// Load `pom.xml` from `dir` (or the current directory) and layer the
    /// nearest config file under `overrides`.
    pub fn load(dir: Option<&Path>, overrides: Settings) -> Result<Self> {
        let dir = project_dir(dir)?;
        debug!("Loading project from {:?}", dir);

        let project = ProjectContext::load(&dir)
            .with_context(|| format!("Failed to load project at {}", dir.display()))?;
        let settings = Settings::discover(&dir)
            .context("Failed to load omod-scout configuration")?
            .merge(overrides);

        Ok(Self { project, settings })
    }

    /// Package derived purely from the build coordinates
    pub fn derived_package(&self) -> String {
        derive_module_package(&self.project.identity, None)
    }

    /// Package after applying any configured override
    pub fn effective_package(&self) -> String {
        derive_module_package(
            &self.project.identity,
            self.settings.module_package.as_deref(),
        )
    }

    /// Resolve a configured path against the project base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.project.base_dir.join(path)
    }
}

pub fn project_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    dir.canonicalize()
        .with_context(|| format!("Project directory not found: {}", dir.display()))
}
