use omod_scout_core::{Dependency, ProjectContext, ScanPackages, ScanStrategy};

use super::report::{print_field, print_list, print_section};

pub fn print_scan_packages(scan: &ScanPackages) {
    println!("Effective Scan Packages Strategy:");
    let source = match scan.strategy {
        ScanStrategy::Configured => "USER-CONFIGURED",
        ScanStrategy::AutoDetected => "AUTO-DETECTED",
    };
    println!("   Using {} packages ({}):", source, scan.packages.len());
    print_list(&scan.packages, "• ");
}

pub fn print_dependencies(dependencies: &[Dependency]) {
    println!("Dependencies ({}):", dependencies.len());
    print_list(dependencies, "• ");
}

pub fn print_build_context(project: &ProjectContext) {
    print_section("Build Context");
    print_field("Build Directory", project.build_directory.display());
    print_field("Output Directory", project.output_directory.display());
    print_field("Source Directory", project.source_directory.display());
    print_dependencies(&project.dependencies);
}
