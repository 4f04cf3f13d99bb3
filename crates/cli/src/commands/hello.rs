use anyhow::Result;
use omod_scout_core::Settings;
use std::path::PathBuf;

use crate::cli::ProjectArgs;
use crate::display::{print_banner, print_dependencies, print_field, print_footer, print_list};
use crate::utils::Session;

#[derive(Debug, Clone, Default)]
pub struct HelloArgs {
    pub project: ProjectArgs,
    pub greeting: Option<String>,
    pub output_directory: Option<PathBuf>,
}

/// Show how each parameter resolved against the project
pub fn hello_command(args: HelloArgs) -> Result<()> {
    let overrides = Settings {
        greeting: args.greeting,
        output_directory: args.output_directory,
        ..args.project.to_settings()
    };
    let session = Session::load(args.project.project.as_deref(), overrides)?;
    let project = &session.project;
    let settings = &session.settings;

    print_banner("👋 omod-scout hello");

    print_field("Project ArtifactId", &project.identity.artifact_id);
    print_field("Project GroupId", &project.identity.group_id);
    print_field("Project Version", project.version.as_deref().unwrap_or("(none)"));
    print_field("Project Base Directory", project.base_dir.display());
    print_field("Build Output Directory", project.output_directory.display());

    let output_directory = settings
        .output_directory
        .as_deref()
        .map(|dir| session.resolve(dir))
        .unwrap_or_else(|| project.build_directory.clone());

    print_field("Greeting Parameter", settings.greeting());
    print_field(
        "Module Package",
        settings.module_package.as_deref().unwrap_or("NOT CONFIGURED"),
    );
    print_field("Verbose Mode", settings.verbose());
    print_field("Output Directory", output_directory.display());

    if settings.scan_packages.is_empty() {
        print_field("Scan Packages", "NOT CONFIGURED");
    } else {
        println!("Scan Packages ({}):", settings.scan_packages.len());
        print_list(&settings.scan_packages, "- ");
    }

    print_field("Derived Module Package", session.effective_package());

    if settings.verbose() {
        println!("\n🔎 Verbose mode enabled");
        print_dependencies(&project.dependencies);
    }

    println!("\nHello {} from omod-scout!", settings.greeting());
    print_footer("✅ Hello complete");
    Ok(())
}
