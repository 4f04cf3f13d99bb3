//! Build descriptor (pom.xml) loading
//!
//! Reads just enough of a POM to describe the project: coordinates, name,
//! build directories and declared dependencies. Parent POMs are not
//! resolved; the `<parent>` block only supplies a missing groupId/version.

mod placeholders;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BuildIdentity, Dependency, ProjectContext};

pub use placeholders::resolve_placeholders;

pub const DESCRIPTOR_FILE: &str = "pom.xml";

impl ProjectContext {
    /// Load the project described by `dir/pom.xml`
    pub fn load(dir: &Path) -> Result<Self> {
        load_project(dir)
    }
}

pub fn load_project(dir: &Path) -> Result<ProjectContext> {
    let path = dir.join(DESCRIPTOR_FILE);
    debug!("Loading build descriptor: {:?}", path);

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| descriptor_error(&path, format!("cannot read file: {e}")))?;

    parse_descriptor(&contents, dir, &path)
}

fn parse_descriptor(contents: &str, base_dir: &Path, path: &Path) -> Result<ProjectContext> {
    let doc =
        roxmltree::Document::parse(contents).map_err(|e| descriptor_error(path, e.to_string()))?;
    let project = doc.root_element();
    if project.tag_name().name() != "project" {
        return Err(descriptor_error(path, "root element is not <project>"));
    }

    let parent = child_element(&project, "parent");
    let inherited = |name: &str| parent.as_ref().and_then(|p| child_text(p, name));

    let artifact_id = child_text(&project, "artifactId")
        .ok_or_else(|| descriptor_error(path, "missing <artifactId>"))?;
    let group_id = child_text(&project, "groupId")
        .or_else(|| inherited("groupId"))
        .ok_or_else(|| descriptor_error(path, "missing <groupId> and no <parent> to inherit it from"))?;
    let version = child_text(&project, "version").or_else(|| inherited("version"));

    let mut props = read_properties(&project);
    let base = base_dir.display().to_string();
    props.insert("basedir".to_string(), base.clone());
    props.insert("project.basedir".to_string(), base);
    props.insert("project.groupId".to_string(), group_id.clone());
    props.insert("project.artifactId".to_string(), artifact_id.clone());
    if let Some(v) = &version {
        props.insert("project.version".to_string(), v.clone());
    }

    let mut ctx = ProjectContext::new(BuildIdentity::new(artifact_id, group_id), base_dir);
    ctx.name = child_text(&project, "name").map(|n| resolve_placeholders(&n, &props));
    ctx.version = version;

    if let Some(build) = child_element(&project, "build") {
        let build_path = |name: &str, props: &BTreeMap<String, String>| {
            child_text(&build, name).map(|raw| absolutize(base_dir, &resolve_placeholders(&raw, props)))
        };

        if let Some(dir) = build_path("directory", &props) {
            ctx.build_directory = dir;
        }
        // outputDirectory defaults relative to the (possibly relocated) build directory
        ctx.output_directory = ctx.build_directory.join("classes");
        props.insert(
            "project.build.directory".to_string(),
            ctx.build_directory.display().to_string(),
        );

        if let Some(dir) = build_path("outputDirectory", &props) {
            ctx.output_directory = dir;
        }
        if let Some(dir) = build_path("sourceDirectory", &props) {
            ctx.source_directory = dir;
        }
    }
    props
        .entry("project.build.directory".to_string())
        .or_insert_with(|| ctx.build_directory.display().to_string());

    if let Some(deps) = child_element(&project, "dependencies") {
        ctx.dependencies = read_dependencies(&deps, &props);
    }

    debug!(
        "Loaded {} with {} dependencies",
        ctx.identity,
        ctx.dependencies.len()
    );
    Ok(ctx)
}

fn read_properties(project: &roxmltree::Node<'_, '_>) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();
    if let Some(node) = child_element(project, "properties") {
        for child in node.children().filter(|n| n.is_element()) {
            if let Some(value) = child.text().map(str::trim).filter(|t| !t.is_empty()) {
                props.insert(child.tag_name().name().to_string(), value.to_string());
            }
        }
    }
    props
}

fn read_dependencies(
    deps: &roxmltree::Node<'_, '_>,
    props: &BTreeMap<String, String>,
) -> Vec<Dependency> {
    deps.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "dependency")
        .filter_map(|dep| {
            let group_id = child_text(&dep, "groupId")?;
            let artifact_id = child_text(&dep, "artifactId")?;
            Some(Dependency {
                group_id: resolve_placeholders(&group_id, props),
                artifact_id: resolve_placeholders(&artifact_id, props),
                version: child_text(&dep, "version").map(|v| resolve_placeholders(&v, props)),
                scope: child_text(&dep, "scope"),
            })
        })
        .collect()
}

fn absolutize(base_dir: &Path, raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

fn child_element<'a, 'input>(
    node: &roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn child_text(node: &roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    child_element(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn descriptor_error(path: &Path, message: impl Into<String>) -> Error {
    Error::DescriptorError {
        path: path.to_path_buf(),
        message: message.into(),
    }
}
