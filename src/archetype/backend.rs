//! Backend package of the messages archetype: a Laravel-style package with a
//! service provider, a routes stub and a `composer.json` manifest.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::{BACKEND_EXT, BACKEND_SUFFIX, COMPOSER_REQUIRE, COMPOSER_REQUIRE_DEV};
use crate::error::Result;
use crate::names::DerivedNames;
use crate::plan::{to_json, OutputNode};
use crate::prompt::UserInput;
use crate::renderer::TemplateRenderer;

const SERVICE_PROVIDER_TEMPLATE: &str = include_str!("templates/ServiceProvider.php.j2");
const ROUTES_TEMPLATE: &str = include_str!("templates/api.php.j2");
const README_TEMPLATE: &str = include_str!("templates/README.md.j2");

/// `composer.json` of the backend package.
#[derive(Debug, Serialize)]
pub struct ComposerJson {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub package_type: &'static str,
    pub license: &'static str,
    pub authors: Vec<Author>,
    pub require: IndexMap<&'static str, &'static str>,
    #[serde(rename = "require-dev")]
    pub require_dev: IndexMap<&'static str, &'static str>,
    pub autoload: Autoload,
    pub extra: Extra,
    #[serde(rename = "minimum-stability")]
    pub minimum_stability: &'static str,
}

/// Package author taken from the user's answers.
#[derive(Debug, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// PSR-4 autoload mapping of the package namespace.
#[derive(Debug, Serialize)]
pub struct Autoload {
    #[serde(rename = "psr-4")]
    pub psr4: IndexMap<String, &'static str>,
}

/// Configuration block read by the host application.
#[derive(Debug, Serialize)]
pub struct Extra {
    pub laravel: LaravelExtra,
    pub app: AppMetadata,
}

/// Service providers registered by package discovery.
#[derive(Debug, Serialize)]
pub struct LaravelExtra {
    pub providers: Vec<String>,
}

/// Identity of the generated application.
#[derive(Debug, Serialize)]
pub struct AppMetadata {
    pub name: String,
    pub organization: String,
    pub application: String,
}

impl ComposerJson {
    /// Builds the manifest from the answers and derived names.
    pub fn new(input: &UserInput, names: &DerivedNames) -> Self {
        let namespace = names.namespace();
        let provider = format!("{namespace}\\{}ServiceProvider", names.pascal_application);

        Self {
            name: names.backend_package(),
            description: format!("Backend package of {}", input.full_app_name),
            package_type: "library",
            license: "MIT",
            authors: vec![Author {
                name: input.user_name.clone(),
                email: input.user_email.clone(),
            }],
            require: IndexMap::from(COMPOSER_REQUIRE),
            require_dev: IndexMap::from(COMPOSER_REQUIRE_DEV),
            autoload: Autoload { psr4: IndexMap::from([(format!("{namespace}\\"), "src/")]) },
            extra: Extra {
                laravel: LaravelExtra { providers: vec![provider] },
                app: AppMetadata {
                    name: input.full_app_name.clone(),
                    organization: names.organization.clone(),
                    application: names.application.clone(),
                },
            },
            minimum_stability: "stable",
        }
    }
}

/// Plans every directory and file of `<application>/<application>-backend`.
pub fn plan(
    root: &Path,
    input: &UserInput,
    names: &DerivedNames,
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<Vec<OutputNode>> {
    let backend = root.join(format!("{}{BACKEND_SUFFIX}", names.application));
    let src = backend.join("src");

    let provider = engine.render(SERVICE_PROVIDER_TEMPLATE, context)?;
    let routes = engine.render(ROUTES_TEMPLATE, context)?;
    let readme = engine.render(README_TEMPLATE, context)?;

    Ok(vec![
        OutputNode::directory(&backend),
        OutputNode::directory(backend.join("database").join("migrations")),
        OutputNode::directory(backend.join("routes")),
        OutputNode::file(backend.join("routes").join(format!("api.{BACKEND_EXT}")), routes),
        OutputNode::directory(&src),
        OutputNode::directory(src.join("Controllers")),
        OutputNode::directory(src.join("Models")),
        OutputNode::file(
            src.join(format!("{}ServiceProvider.{BACKEND_EXT}", names.pascal_application)),
            provider,
        ),
        OutputNode::file(backend.join("composer.json"), to_json(&ComposerJson::new(input, names))?),
        OutputNode::file(backend.join("README.md"), readme),
    ])
}
