//! Frontend package of the messages archetype: a React + RTK Query module
//! exposing the generated API binding and two views over the messages resource.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::{
    COMPONENT_EXT, FRONTEND_EXT, FRONTEND_SUFFIX, NPM_DEPENDENCIES, NPM_DEV_DEPENDENCIES, RESOURCE,
};
use crate::error::Result;
use crate::names::DerivedNames;
use crate::plan::{to_json, OutputNode};
use crate::prompt::UserInput;
use crate::renderer::TemplateRenderer;

const INDEX_TEMPLATE: &str = include_str!("templates/index.ts.j2");
const BASE_QUERY_TEMPLATE: &str = include_str!("templates/baseQuery.ts.j2");
const API_TEMPLATE: &str = include_str!("templates/api.ts.j2");
const MESSAGE_TEMPLATE: &str = include_str!("templates/Message.tsx.j2");
const MESSAGES_TEMPLATE: &str = include_str!("templates/Messages.tsx.j2");

/// `package.json` of the frontend package.
#[derive(Debug, Serialize)]
pub struct PackageJson {
    pub name: String,
    pub version: &'static str,
    pub description: String,
    pub author: String,
    pub license: &'static str,
    pub main: &'static str,
    pub types: &'static str,
    pub scripts: IndexMap<&'static str, &'static str>,
    pub dependencies: IndexMap<&'static str, &'static str>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: IndexMap<&'static str, &'static str>,
    /// Extension block read by the host shell to mount the package
    pub plugin: Plugin,
}

/// API bindings, routes and menu entries the package contributes.
#[derive(Debug, Serialize)]
pub struct Plugin {
    pub apis: Vec<String>,
    pub routes: Vec<Route>,
    pub menu: Vec<MenuEntry>,
}

/// Route mounting one of the generated views.
#[derive(Debug, Serialize)]
pub struct Route {
    pub path: String,
    pub component: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,
}

impl PackageJson {
    /// Builds the manifest from the answers and derived names.
    pub fn new(input: &UserInput, names: &DerivedNames) -> Self {
        let base = format!("/{}/{}/{RESOURCE}", names.organization, names.application);

        Self {
            name: names.frontend_package(),
            version: "0.1.0",
            description: format!("Frontend package of {}", input.full_app_name),
            author: format!("{} <{}>", input.user_name, input.user_email),
            license: "MIT",
            main: "dist/index.js",
            types: "dist/index.d.ts",
            scripts: IndexMap::from([("build", "tsc"), ("watch", "tsc --watch")]),
            dependencies: IndexMap::from(NPM_DEPENDENCIES),
            dev_dependencies: IndexMap::from(NPM_DEV_DEPENDENCIES),
            plugin: Plugin {
                apis: vec![names.camel_api_name.clone()],
                routes: vec![
                    Route { path: base.clone(), component: "Messages" },
                    Route { path: format!("{base}/:id"), component: "Message" },
                ],
                menu: vec![MenuEntry { label: names.pascal_application.clone(), path: base }],
            },
        }
    }
}

/// `tsconfig.json` of the frontend package.
#[derive(Debug, Serialize)]
pub struct TsConfig {
    #[serde(rename = "compilerOptions")]
    pub compiler_options: CompilerOptions,
    pub include: Vec<&'static str>,
}

/// TypeScript compiler options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub module: &'static str,
    pub module_resolution: &'static str,
    pub jsx: &'static str,
    pub target: &'static str,
    pub out_dir: &'static str,
    pub declaration: bool,
    pub strict: bool,
    pub es_module_interop: bool,
    pub skip_lib_check: bool,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                module: "ESNext",
                module_resolution: "node",
                jsx: "react-jsx",
                target: "ES2020",
                out_dir: "dist",
                declaration: true,
                strict: true,
                es_module_interop: true,
                skip_lib_check: true,
            },
            include: vec!["src/**/*"],
        }
    }
}

/// Plans every directory and file of `<application>/<application>-frontend`.
pub fn plan(
    root: &Path,
    input: &UserInput,
    names: &DerivedNames,
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<Vec<OutputNode>> {
    let frontend = root.join(format!("{}{FRONTEND_SUFFIX}", names.application));
    let src = frontend.join("src");

    Ok(vec![
        OutputNode::directory(&frontend),
        OutputNode::file(frontend.join("package.json"), to_json(&PackageJson::new(input, names))?),
        OutputNode::file(frontend.join("tsconfig.json"), to_json(&TsConfig::default())?),
        OutputNode::directory(&src),
        OutputNode::file(
            src.join(format!("index.{FRONTEND_EXT}")),
            engine.render(INDEX_TEMPLATE, context)?,
        ),
        OutputNode::file(
            src.join(format!("baseQuery.{FRONTEND_EXT}")),
            engine.render(BASE_QUERY_TEMPLATE, context)?,
        ),
        OutputNode::file(src.join(&names.api_file_name), engine.render(API_TEMPLATE, context)?),
        OutputNode::file(
            src.join(format!("Message.{COMPONENT_EXT}")),
            engine.render(MESSAGE_TEMPLATE, context)?,
        ),
        OutputNode::file(
            src.join(format!("Messages.{COMPONENT_EXT}")),
            engine.render(MESSAGES_TEMPLATE, context)?,
        ),
    ])
}
