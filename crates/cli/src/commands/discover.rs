use anyhow::{Context, Result};
use omod_scout_core::{
    ChildProcessGenerator, GenerationRequest, ScanPackages, Settings, discover_packages,
    is_openmrs_module,
};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::ProjectArgs;
use crate::display::{
    print_banner, print_build_context, print_field, print_footer, print_list, print_scan_packages,
    print_section,
};
use crate::utils::Session;

#[derive(Debug, Clone, Default)]
pub struct DiscoverArgs {
    pub project: ProjectArgs,
    pub show_all_packages: bool,
    pub generate_openapi: bool,
    pub output: Option<PathBuf>,
    pub classpath: Vec<String>,
    pub dry_run: bool,
}

impl DiscoverArgs {
    fn to_settings(&self) -> Settings {
        Settings {
            show_all_packages: self.show_all_packages.then_some(true),
            generate_openapi: self.generate_openapi.then_some(true),
            openapi_output_file: self.output.clone(),
            classpath: self.classpath.clone(),
            ..self.project.to_settings()
        }
    }
}

pub fn discover_command(args: DiscoverArgs) -> Result<()> {
    let session = Session::load(args.project.project.as_deref(), args.to_settings())?;
    let project = &session.project;
    let settings = &session.settings;

    print_banner("🔍 omod-scout discover");

    // Phase 1: module detection
    print_section("Module Detection");
    let derived = session.derived_package();
    let module_package = session.effective_package();
    print_field("Build Identity", &project.identity);
    print_field("Version", project.version.as_deref().unwrap_or("(none)"));
    print_field("Base Directory", project.base_dir.display());
    print_field("Derived Package", &derived);
    if module_package != derived {
        print_field("Configured Package", &module_package);
    }

    let scan = ScanPackages::resolve(&module_package, &settings.scan_packages);
    print_scan_packages(&scan);
    print_field("Is OpenMRS Module", is_openmrs_module(&module_package));
    print_field("Has config.xml", project.has_module_descriptor());

    // Phase 2: compiled packages
    print_section("Package Discovery");
    print_field("Classes Directory", project.output_directory.display());
    if settings.verbose() {
        for dependency in &project.dependencies {
            println!(
                "Scanning dependency: {}:{}",
                dependency.group_id, dependency.artifact_id
            );
        }
    }
    let found = discover_packages(&project.output_directory, &module_package);
    debug!(
        "Discovered {} packages, {} under {}",
        found.all.len(),
        found.module.len(),
        module_package
    );

    if found.is_empty() {
        println!("No compiled packages found (has the project been built?)");
    } else {
        print_field("Total Packages", found.all.len());
        if settings.show_all_packages() && settings.verbose() {
            println!("All Packages:");
            print_list(&found.all, "• ");
        }
        println!(
            "Module packages in {} ({}):",
            module_package,
            found.module.len()
        );
        print_list(&found.module, "• ");
    }

    // Phase 3: build context
    if settings.verbose() {
        print_build_context(project);
    }

    // Phase 4: generation
    if settings.generate_openapi() {
        print_section("OpenAPI Generation");
        generate_openapi(&session, &module_package, args.dry_run)?;
    }

    print_footer("✅ Discovery complete");
    Ok(())
}

fn generate_openapi(session: &Session, module_package: &str, dry_run: bool) -> Result<()> {
    let project = &session.project;
    let settings = &session.settings;

    let output_path = settings
        .openapi_output_file
        .as_deref()
        .map(|path| session.resolve(path))
        .unwrap_or_else(|| project.default_openapi_output());

    let classpath = std::iter::once(project.output_directory.display().to_string())
        .chain(settings.classpath.iter().cloned());

    let request = GenerationRequest::new(module_package, &output_path, project.display_name())
        .with_classpath(classpath);

    let generator = ChildProcessGenerator::for_current_exe()
        .context("Failed to locate the generator runtime")?
        .with_working_dir(project.base_dir.clone());

    if dry_run {
        let command = generator.command_for(&request);
        println!("Would execute: {}", command.to_shell_command());
        if let Some(dir) = command.working_dir() {
            println!("Working directory: {}", dir.display());
        }
        return Ok(());
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    print_field("Output File", output_path.display());
    let result = generator
        .generate(&request, &mut |line: &str| println!("[OpenAPI] {line}"))
        .context("Failed to generate OpenAPI specification")?;

    info!("Generator exited with code {}", result.exit_code);
    println!("OpenAPI specification generated successfully");
    Ok(())
}
