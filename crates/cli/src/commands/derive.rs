use anyhow::{Context, Result};
use omod_scout_core::{BuildIdentity, ProjectContext, derive_module_package};
use std::path::PathBuf;
use tracing::debug;

use crate::utils::project_dir;

#[derive(Debug, Clone, Default)]
pub struct DeriveArgs {
    pub artifact_id: Option<String>,
    pub group_id: Option<String>,
    pub project: Option<PathBuf>,
    pub module_package: Option<String>,
}

/// Print only the package, so the output can be captured by scripts
pub fn derive_command(args: DeriveArgs) -> Result<()> {
    let identity = match (args.artifact_id, args.group_id) {
        (Some(artifact_id), Some(group_id)) => BuildIdentity::new(artifact_id, group_id),
        _ => {
            let dir = project_dir(args.project.as_deref())?;
            ProjectContext::load(&dir)
                .with_context(|| format!("Failed to load project at {}", dir.display()))?
                .identity
        }
    };

    debug!("Deriving package for {}", identity);
    println!(
        "{}",
        derive_module_package(&identity, args.module_package.as_deref())
    );
    Ok(())
}
