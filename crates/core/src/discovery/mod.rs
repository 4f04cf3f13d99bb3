//! Package discovery over compiled output
//!
//! Only path strings are inspected: a directory is a package when it directly
//! holds at least one `.class` file.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const CLASS_EXTENSION: &str = "class";

/// Packages found under a classes directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageScan {
    /// Every package that contains compiled classes
    pub all: BTreeSet<String>,
    /// Subset of `all` starting with the target prefix
    pub module: BTreeSet<String>,
}

impl PackageScan {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Walk `root` and collect every package holding `.class` files.
///
/// Packages whose dotted name starts with `target_prefix` are also recorded
/// in [`PackageScan::module`]. A missing root produces an empty scan.
pub fn discover_packages(root: &Path, target_prefix: &str) -> PackageScan {
    let mut scan = PackageScan::default();

    if !root.is_dir() {
        debug!("Classes directory does not exist: {:?}", root);
        return scan;
    }

    let walker = WalkDir::new(root).min_depth(1).into_iter().filter_map(|entry| {
        entry
            .map_err(|err| debug!("Skipping unreadable entry: {}", err))
            .ok()
    });

    for entry in walker {
        if !entry.file_type().is_file() || !is_class_file(entry.path()) {
            continue;
        }

        let Some(package) = entry.path().parent().and_then(|dir| package_name(root, dir)) else {
            // Classes in the default package have no name to report
            continue;
        };

        if scan.all.contains(&package) {
            continue;
        }

        debug!("Discovered package: {}", package);
        if package.starts_with(target_prefix) {
            scan.module.insert(package.clone());
        }
        scan.all.insert(package);
    }

    scan
}

fn is_class_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CLASS_EXTENSION)
}

/// Dotted package name of `dir` relative to `root`, `None` for the root itself
fn package_name(root: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("."))
    }
}
