//! Generator entry points run inside the forked process
//!
//! The parent passes everything through [`GeneratorProperties`]; the entry
//! point reports progress on its output stream and exits non-zero on failure.

mod document;
pub mod properties;

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Error, Result};

pub use document::render_openapi_stub;
pub use properties::GeneratorProperties;

pub const DEFAULT_OUTPUT_FILE: &str = "simple-openapi-spec.json";
pub const DEFAULT_PROJECT_NAME: &str = "Unknown Project";

/// Entry points the runtime knows how to launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    OpenApiStub,
}

impl EntryPoint {
    pub const OPENAPI_STUB_ID: &'static str = "openapi-stub";

    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            Self::OPENAPI_STUB_ID => Ok(Self::OpenApiStub),
            other => Err(Error::UnknownEntryPoint(other.to_string())),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenApiStub => Self::OPENAPI_STUB_ID,
        }
    }

    pub fn run(&self, props: &GeneratorProperties, out: &mut impl Write) -> Result<()> {
        if props.is_empty() {
            debug!("Running entry point {} with default properties", self);
        } else {
            debug!("Running entry point {} with {} properties", self, props.len());
        }
        match self {
            Self::OpenApiStub => run_spec_stub(props, out).map(|_| ()),
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Write the OpenAPI stub for the configured module package.
///
/// Returns the path of the written document.
pub fn run_spec_stub(props: &GeneratorProperties, out: &mut impl Write) -> Result<PathBuf> {
    writeln!(out, "[Runner] Starting simple OpenAPI generation...")?;

    let module_package = props.get_or(properties::MODULE_PACKAGE, "");
    let output_file = props
        .get(properties::OUTPUT_FILE)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_OUTPUT_FILE);
    let project_name = props.get_or(properties::PROJECT_NAME, DEFAULT_PROJECT_NAME);

    writeln!(out, "[Runner] Module package: {module_package}")?;
    writeln!(out, "[Runner] Output file: {output_file}")?;
    writeln!(out, "[Runner] Project name: {project_name}")?;

    let document = render_openapi_stub(module_package, project_name)?;

    let path = PathBuf::from(output_file);
    std::fs::write(&path, document).map_err(|source| Error::OutputWriteFailure {
        path: path.clone(),
        source,
    })?;

    let shown = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
    writeln!(out, "[Runner] Simple OpenAPI spec written to: {}", shown.display())?;
    writeln!(out, "[Runner] Generation completed successfully!")?;

    Ok(path)
}
