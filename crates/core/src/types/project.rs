use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::BuildIdentity;

/// Relative location of the OpenMRS module descriptor inside a project
pub const MODULE_DESCRIPTOR: &str = "src/main/resources/config.xml";

/// Everything the reports need to know about a Maven project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectContext {
    pub identity: BuildIdentity,
    pub version: Option<String>,
    pub name: Option<String>,
    pub base_dir: PathBuf,
    pub build_directory: PathBuf,
    pub output_directory: PathBuf,
    pub source_directory: PathBuf,
    pub dependencies: Vec<Dependency>,
}

impl ProjectContext {
    /// Create a context with Maven's default directory layout under `base_dir`.
    pub fn new(identity: BuildIdentity, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let build_directory = base_dir.join("target");
        Self {
            identity,
            version: None,
            name: None,
            output_directory: build_directory.join("classes"),
            source_directory: base_dir.join("src").join("main").join("java"),
            build_directory,
            base_dir,
            dependencies: Vec::new(),
        }
    }

    /// Project name as Maven reports it: `<name>` when set, otherwise the artifactId.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.identity.artifact_id)
    }

    pub fn module_descriptor_path(&self) -> PathBuf {
        self.base_dir.join(MODULE_DESCRIPTOR)
    }

    pub fn has_module_descriptor(&self) -> bool {
        self.module_descriptor_path().is_file()
    }

    /// Default location for the generated OpenAPI document
    pub fn default_openapi_output(&self) -> PathBuf {
        self.build_directory.join("openapi-spec.json")
    }
}

/// A declared dependency, as written in the build descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
}

impl Dependency {
    pub fn effective_scope(&self) -> &str {
        self.scope.as_deref().unwrap_or("compile")
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} ({})",
            self.group_id,
            self.artifact_id,
            self.version.as_deref().unwrap_or("?"),
            self.effective_scope()
        )
    }
}
