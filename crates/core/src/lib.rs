//! omod-scout - A tool for inspecting OpenMRS-style Maven modules
//!
//! This crate provides functionality to:
//! - Derive a module's Java package from its build coordinates
//! - Discover compiled packages under an output directory
//! - Launch a forked generator process and stream its output
pub mod command;
pub mod config;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod package;
pub mod spec_stub;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::GeneratorCommand;
pub use config::Settings;
pub use discovery::{PackageScan, discover_packages};
pub use generator::{ChildProcessGenerator, LineSink};
pub use package::{ScanPackages, ScanStrategy, derive_module_package, is_openmrs_module};
pub use spec_stub::{EntryPoint, GeneratorProperties, render_openapi_stub};
