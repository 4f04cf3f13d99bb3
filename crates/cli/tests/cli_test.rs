//! End-to-end tests for the omod-scout binary

use assert_cmd::Command;
use omod_scout_core::command::CLASSPATH_SEPARATOR;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const QUEUE_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>org.openmrs.module</groupId>
        <artifactId>queue</artifactId>
        <version>2.3.0</version>
    </parent>
    <artifactId>queue-omod</artifactId>
    <name>Queue Module OMOD</name>
    <dependencies>
        <dependency>
            <groupId>org.openmrs.api</groupId>
            <artifactId>openmrs-api</artifactId>
            <version>2.4.0</version>
            <scope>provided</scope>
        </dependency>
    </dependencies>
</project>
"#;

fn scout() -> Command {
    let mut cmd = Command::cargo_bin("omod-scout").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn queue_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pom.xml"), QUEUE_POM).unwrap();
    temp_dir
}

fn add_class(root: &Path, package_dir: &str, class: &str) {
    let dir = root.join("target/classes").join(package_dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{class}.class")), [0xCA, 0xFE, 0xBA, 0xBE]).unwrap();
}

#[test]
fn test_derive_from_coordinates() {
    scout()
        .args(["derive", "--artifact-id", "queue-omod", "--group-id", "org.openmrs.module"])
        .assert()
        .success()
        .stdout("org.openmrs.module.queue\n");

    scout()
        .args(["derive", "--artifact-id", "my-tool", "--group-id", "com.example"])
        .assert()
        .success()
        .stdout("com.example\n");
}

#[test]
fn test_derive_from_pom() {
    let project = queue_project();

    scout()
        .arg("derive")
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout("org.openmrs.module.queue\n");
}

#[test]
fn test_derive_override_wins() {
    scout()
        .args([
            "derive",
            "--artifact-id",
            "queue-omod",
            "--group-id",
            "org.openmrs.module",
            "--module-package",
            "org.example.custom",
        ])
        .assert()
        .success()
        .stdout("org.example.custom\n");
}

#[test]
fn test_missing_pom_is_an_error() {
    let empty = TempDir::new().unwrap();

    scout()
        .arg("derive")
        .arg("--project")
        .arg(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load project"));
}

#[test]
fn test_hello_reports_parameters() {
    let project = queue_project();

    scout()
        .arg("hello")
        .arg("--project")
        .arg(project.path())
        .args(["--greeting", "OpenMRS", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project ArtifactId: queue-omod"))
        .stdout(predicate::str::contains("Module Package: NOT CONFIGURED"))
        .stdout(predicate::str::contains("Scan Packages: NOT CONFIGURED"))
        .stdout(predicate::str::contains(
            "Derived Module Package: org.openmrs.module.queue",
        ))
        .stdout(predicate::str::contains("org.openmrs.api:openmrs-api:2.4.0 (provided)"))
        .stdout(predicate::str::contains("Hello OpenMRS from omod-scout!"));
}

#[test]
fn test_discover_lists_module_packages() {
    let project = queue_project();
    add_class(project.path(), "org/openmrs/module/queue/api", "QueueService");
    add_class(project.path(), "org/openmrs/module/queue/web/resources", "QueueResource");
    add_class(project.path(), "org/example/util", "Helper");

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Derived Package: org.openmrs.module.queue"))
        .stdout(predicate::str::contains("AUTO-DETECTED"))
        .stdout(predicate::str::contains("org.openmrs.module.queue.web.resources"))
        .stdout(predicate::str::contains("Total Packages: 3"))
        .stdout(predicate::str::contains("Module packages in org.openmrs.module.queue (2):"))
        .stdout(predicate::str::contains("Is OpenMRS Module: true"))
        .stdout(predicate::str::contains("Has config.xml: false"))
        .stdout(predicate::str::contains("org.example.util").not());
}

#[test]
fn test_discover_without_build_output() {
    let project = queue_project();

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No compiled packages found"));
}

#[test]
fn test_config_file_overrides_module_package() {
    let project = queue_project();
    let config = serde_json::json!({
        "module_package": "org.example.queue",
        "scan_packages": ["org.example.queue.rest"]
    });
    fs::write(
        project.path().join(".omod-scout.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configured Package: org.example.queue"))
        .stdout(predicate::str::contains("USER-CONFIGURED"))
        .stdout(predicate::str::contains("org.example.queue.rest"))
        .stdout(predicate::str::contains("Is OpenMRS Module: false"));
}

#[test]
fn test_discover_generates_openapi_stub() {
    let project = queue_project();
    add_class(project.path(), "org/openmrs/module/queue/api", "QueueService");

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .arg("--generate-openapi")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[OpenAPI] [Runner] Starting simple OpenAPI generation...",
        ))
        .stdout(predicate::str::contains(
            "[OpenAPI] [Runner] Module package: org.openmrs.module.queue",
        ))
        .stdout(predicate::str::contains(
            "[OpenAPI] [Runner] Project name: Queue Module OMOD",
        ))
        .stdout(predicate::str::contains(
            "OpenAPI specification generated successfully",
        ));

    let written = fs::read_to_string(project.path().join("target/openapi-spec.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(document["openapi"], "3.0.0");
    assert_eq!(document["info"]["title"], "Queue Module OMOD API");
}

#[test]
fn test_discover_dry_run_prints_command() {
    let project = queue_project();

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .args(["--generate-openapi", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would execute:"))
        .stdout(predicate::str::contains("-DmodulePackage=org.openmrs.module.queue"))
        .stdout(predicate::str::contains("openapi-stub"));

    assert!(!project.path().join("target/openapi-spec.json").exists());
}

#[test]
fn test_generation_failure_is_reported() {
    let project = queue_project();
    // A directory where the document should go makes the write fail
    fs::create_dir_all(project.path().join("target/openapi-spec.json")).unwrap();

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .arg("--generate-openapi")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[OpenAPI] openapi-stub failed:"))
        .stderr(predicate::str::contains("Failed to generate OpenAPI specification"))
        .stderr(predicate::str::contains("exited with code 1"));
}

#[test]
fn test_exec_unknown_entry_point_exits_with_one() {
    scout()
        .args(["exec", "--classpath", "", "no-such-entry"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown entry point: no-such-entry"));
}

#[test]
fn test_exec_writes_document_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("spec.json");

    scout()
        .arg("exec")
        .arg(format!("-DoutputFile={}", output.display()))
        .arg("-DmodulePackage=org.openmrs.module.queue")
        .arg("openapi-stub")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Runner] Generation completed successfully!"));

    assert!(output.is_file());
}

#[test]
fn test_runtime_output_ignores_parent_log_filter() {
    let project = queue_project();

    let output = scout()
        .env("RUST_LOG", "debug")
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .arg("--generate-openapi")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let forwarded: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("[OpenAPI]"))
        .collect();
    assert_eq!(forwarded.len(), 6, "unexpected runtime output:\n{stdout}");
    for line in forwarded {
        assert!(line.starts_with("[OpenAPI] [Runner] "), "unexpected line: {line:?}");
    }
}

#[test]
fn test_discover_build_context_only_when_verbose() {
    let project = queue_project();

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Build Context ---").not())
        .stdout(predicate::str::contains("Scanning dependency:").not());

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Build Context ---"))
        .stdout(predicate::str::contains("Source Directory:"))
        .stdout(predicate::str::contains(
            "Scanning dependency: org.openmrs.api:openmrs-api",
        ));
}

#[test]
fn test_show_all_packages_needs_verbose() {
    let project = queue_project();
    add_class(project.path(), "org/openmrs/module/queue/api", "QueueService");
    add_class(project.path(), "org/example/util", "Helper");

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .arg("--show-all-packages")
        .assert()
        .success()
        .stdout(predicate::str::contains("All Packages:").not())
        .stdout(predicate::str::contains("org.example.util").not());

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .args(["--show-all-packages", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All Packages:"))
        .stdout(predicate::str::contains("• org.example.util"));
}

#[test]
fn test_dry_run_resolves_output_and_appends_classpath_entries() {
    let project = queue_project();
    let base = project.path().canonicalize().unwrap();

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .args(["--generate-openapi", "--dry-run"])
        .args(["--output", "out/spec.json", "--classpath-entry", "lib/x.jar"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}{CLASSPATH_SEPARATOR}lib/x.jar ",
            base.join("target/classes").display()
        )))
        .stdout(predicate::str::contains(format!(
            "-DoutputFile={}",
            base.join("out/spec.json").display()
        )));
}

#[test]
fn test_output_file_is_written_under_project_base() {
    let project = queue_project();

    scout()
        .arg("discover")
        .arg("--project")
        .arg(project.path())
        .args(["--generate-openapi", "--output", "out/spec.json"])
        .assert()
        .success();

    assert!(project.path().join("out/spec.json").is_file());
    assert!(!project.path().join("target/openapi-spec.json").exists());
}
