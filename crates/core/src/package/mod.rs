//! Module package derivation
//!
//! Maps Maven coordinates onto the Java package an OpenMRS module lives in.
//! The rules are an ordered list and the first match wins. Derivation never
//! fails: unusual coordinates fall through to the groupId.

use serde::Serialize;

use crate::types::BuildIdentity;

pub const MODULE_GROUP_ID: &str = "org.openmrs.module";
pub const MODULE_PACKAGE_PREFIX: &str = "org.openmrs.module.";
const MODULE_ARTIFACT_PREFIX: &str = "openmrs-module-";
const OMOD_SUFFIX: &str = "-omod";
const API_SUFFIX: &str = "-api";

/// Sub-packages scanned when no explicit list is configured
const DEFAULT_SCAN_SUFFIXES: [&str; 3] = [".web.resources", ".api", ".web"];

/// Derive the module package for `identity`.
///
/// A non-blank `override_package` always wins and is returned trimmed.
/// Otherwise the naming conventions are tried in order:
///
/// 1. `openmrs-module-<name>` -> `org.openmrs.module.<name>`
/// 2. `<name>-omod` in group `org.openmrs.module` -> `org.openmrs.module.<name>`
/// 3. `<name>-api` in group `org.openmrs.module` -> `org.openmrs.module.<name>`
/// 4. `<name>` (no hyphen) in group `org.openmrs.module` -> `org.openmrs.module.<name>`
/// 5. groupId under `org.openmrs.module.` -> the groupId
/// 6. anything else -> the groupId
///
/// An artifactId such as `openmrs-module-x-omod` matches both the first and
/// second convention; the first one is checked first and wins.
pub fn derive_module_package(identity: &BuildIdentity, override_package: Option<&str>) -> String {
    if let Some(explicit) = override_package.map(str::trim).filter(|p| !p.is_empty()) {
        return explicit.to_string();
    }

    let artifact_id = identity.artifact_id.as_str();
    let group_id = identity.group_id.as_str();
    let in_module_group = group_id == MODULE_GROUP_ID;

    if let Some(name) = artifact_id.strip_prefix(MODULE_ARTIFACT_PREFIX) {
        return module_package(name);
    }

    if in_module_group {
        if let Some(name) = artifact_id.strip_suffix(OMOD_SUFFIX) {
            return module_package(name);
        }
        if let Some(name) = artifact_id.strip_suffix(API_SUFFIX) {
            return module_package(name);
        }
        if !artifact_id.contains('-') {
            return module_package(artifact_id);
        }
    }

    // Both remaining conventions (a groupId already under
    // `org.openmrs.module.`, and the plain fallback) resolve to the groupId.
    group_id.to_string()
}

fn module_package(name: &str) -> String {
    format!("{MODULE_PACKAGE_PREFIX}{name}")
}

/// Whether a derived package looks like it belongs to an OpenMRS module
pub fn is_openmrs_module(package: &str) -> bool {
    package.starts_with(MODULE_PACKAGE_PREFIX)
}

/// Where the list of packages to scan came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    Configured,
    AutoDetected,
}

/// The effective list of packages to scan for resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanPackages {
    pub strategy: ScanStrategy,
    pub packages: Vec<String>,
}

impl ScanPackages {
    /// Use `configured` when it has entries, otherwise the conventional
    /// sub-packages of `module_package`.
    pub fn resolve(module_package: &str, configured: &[String]) -> Self {
        if !configured.is_empty() {
            return Self {
                strategy: ScanStrategy::Configured,
                packages: configured.to_vec(),
            };
        }

        Self {
            strategy: ScanStrategy::AutoDetected,
            packages: DEFAULT_SCAN_SUFFIXES
                .iter()
                .map(|suffix| format!("{module_package}{suffix}"))
                .collect(),
        }
    }
}
