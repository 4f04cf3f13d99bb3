use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use omod_scout_core::Settings;
use std::path::PathBuf;

use crate::commands::{
    DeriveArgs, DiscoverArgs, HelloArgs, derive_command, discover_command, exec_command,
    hello_command,
};

#[derive(Parser, Debug)]
#[command(name = "omod-scout")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Scout {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that inspects a project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory containing pom.xml (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Use this module package instead of deriving one
    #[arg(short, long, value_name = "PACKAGE")]
    pub module_package: Option<String>,

    /// Package to scan for resources (repeatable, overrides auto-detection)
    #[arg(short, long = "scan-package", value_name = "PACKAGE")]
    pub scan_packages: Vec<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ProjectArgs {
    /// Flags that were actually given, as a settings layer
    pub fn to_settings(&self) -> Settings {
        Settings {
            module_package: self.module_package.clone(),
            scan_packages: self.scan_packages.clone(),
            verbose: self.verbose.then_some(true),
            ..Default::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the module package derived from build coordinates
    #[command(visible_alias = "d")]
    Derive {
        /// Artifact id to derive from (instead of reading pom.xml)
        #[arg(long, requires = "group_id", conflicts_with = "project")]
        artifact_id: Option<String>,

        /// Group id to derive from
        #[arg(long, requires = "artifact_id")]
        group_id: Option<String>,

        /// Project directory containing pom.xml
        #[arg(short, long, value_name = "DIR")]
        project: Option<PathBuf>,

        /// Explicit package; returned as-is when not blank
        #[arg(short, long, value_name = "PACKAGE")]
        module_package: Option<String>,
    },
    /// Show the project context and how parameters resolved
    Hello {
        #[command(flatten)]
        project: ProjectArgs,

        /// Who to greet
        #[arg(short, long)]
        greeting: Option<String>,

        /// Output directory for generated files (defaults to the build directory)
        #[arg(short, long, value_name = "DIR")]
        output_directory: Option<PathBuf>,
    },
    /// Detect the module, discover its packages and optionally generate an OpenAPI stub
    #[command(visible_alias = "scan")]
    Discover {
        #[command(flatten)]
        project: ProjectArgs,

        /// List every discovered package (with --verbose)
        #[arg(long)]
        show_all_packages: bool,

        /// Generate an OpenAPI stub in a forked process
        #[arg(short, long)]
        generate_openapi: bool,

        /// Where to write the OpenAPI document
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Extra classpath entry for the generator (repeatable)
        #[arg(long = "classpath-entry", value_name = "ENTRY")]
        classpath: Vec<String>,

        /// Print the generator command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Run a generator entry point; this is what forked generation launches
    #[command(hide = true)]
    Exec {
        /// Classpath handed over by the parent process
        #[arg(long, value_name = "ENTRIES", default_value = "")]
        classpath: String,

        /// Generator property (-DKEY=VALUE, repeatable)
        #[arg(short = 'D', value_name = "KEY=VALUE")]
        properties: Vec<String>,

        /// Entry point identifier
        entry_point: String,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Derive {
                artifact_id,
                group_id,
                project,
                module_package,
            } => derive_command(DeriveArgs {
                artifact_id,
                group_id,
                project,
                module_package,
            }),
            Commands::Hello {
                project,
                greeting,
                output_directory,
            } => hello_command(HelloArgs {
                project,
                greeting,
                output_directory,
            }),
            Commands::Discover {
                project,
                show_all_packages,
                generate_openapi,
                output,
                classpath,
                dry_run,
            } => discover_command(DiscoverArgs {
                project,
                show_all_packages,
                generate_openapi,
                output,
                classpath,
                dry_run,
            }),
            Commands::Exec {
                classpath,
                properties,
                entry_point,
            } => exec_command(&classpath, &properties, &entry_point),
        }
    }
}
