use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;

#[derive(Serialize)]
struct OpenApiStub {
    openapi: &'static str,
    info: Info,
    paths: BTreeMap<&'static str, PathItem>,
}

#[derive(Serialize)]
struct Info {
    title: String,
    version: &'static str,
    description: String,
}

#[derive(Serialize)]
struct PathItem {
    get: Operation,
}

#[derive(Serialize)]
struct Operation {
    summary: String,
    responses: BTreeMap<&'static str, Response>,
}

#[derive(Serialize)]
struct Response {
    description: &'static str,
    content: BTreeMap<&'static str, MediaType>,
}

#[derive(Serialize)]
struct MediaType {
    schema: Schema,
}

#[derive(Serialize)]
struct Schema {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: BTreeMap<&'static str, Property>,
}

#[derive(Serialize)]
struct Property {
    #[serde(rename = "type")]
    kind: &'static str,
    example: String,
}

/// Render the single-endpoint OpenAPI 3.0 stub for `module_package`.
pub fn render_openapi_stub(module_package: &str, project_name: &str) -> Result<String> {
    let message = Property {
        kind: "string",
        example: format!("Hello from {module_package}!"),
    };
    let schema = Schema {
        kind: "object",
        properties: BTreeMap::from([("message", message)]),
    };
    let ok = Response {
        description: "Success",
        content: BTreeMap::from([("application/json", MediaType { schema })]),
    };
    let get = Operation {
        summary: format!("Example endpoint for {module_package}"),
        responses: BTreeMap::from([("200", ok)]),
    };

    let stub = OpenApiStub {
        openapi: "3.0.0",
        info: Info {
            title: format!("{project_name} API"),
            version: "1.0.0",
            description: format!("Generated OpenAPI spec for module package: {module_package}"),
        },
        paths: BTreeMap::from([("/example", PathItem { get })]),
    };

    Ok(serde_json::to_string_pretty(&stub)?)
}
