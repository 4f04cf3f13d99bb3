use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Config file names, in lookup order within each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".omod-scout.json", "omod-scout.json"];

pub const DEFAULT_GREETING: &str = "World";

/// User-tunable parameters. Every field is optional so that a config file
/// and command-line flags can be layered on top of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Explicit module package, bypassing derivation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_package: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scan_packages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all_packages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_openapi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi_output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
    /// Extra classpath entries handed to the generator
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classpath: Vec<String>,
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(settings)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file at or above `start_path`, or defaults
    /// when there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                debug!("Using config file: {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                debug!("No config file found above {:?}", start_path);
                Ok(Self::default())
            }
        }
    }

    /// Layer `overrides` on top of `self`. Set options and non-empty lists
    /// in `overrides` replace the values here.
    pub fn merge(self, overrides: Settings) -> Settings {
        fn pick_list(base: Vec<String>, over: Vec<String>) -> Vec<String> {
            if over.is_empty() { base } else { over }
        }

        Settings {
            module_package: overrides.module_package.or(self.module_package),
            scan_packages: pick_list(self.scan_packages, overrides.scan_packages),
            verbose: overrides.verbose.or(self.verbose),
            show_all_packages: overrides.show_all_packages.or(self.show_all_packages),
            generate_openapi: overrides.generate_openapi.or(self.generate_openapi),
            openapi_output_file: overrides.openapi_output_file.or(self.openapi_output_file),
            greeting: overrides.greeting.or(self.greeting),
            output_directory: overrides.output_directory.or(self.output_directory),
            classpath: pick_list(self.classpath, overrides.classpath),
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn show_all_packages(&self) -> bool {
        self.show_all_packages.unwrap_or(false)
    }

    pub fn generate_openapi(&self) -> bool {
        self.generate_openapi.unwrap_or(false)
    }

    pub fn greeting(&self) -> &str {
        self.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }
}
