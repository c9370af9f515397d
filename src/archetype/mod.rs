//! Project archetypes.
//! An archetype turns the user's answers and the derived names into the
//! complete, ordered list of directories and files to generate. Planning
//! never touches the file system.

use std::path::PathBuf;

use log::debug;
use serde::Serialize;

use crate::constants::{MANIFEST_FILE, RESOURCE, ROUTE_PREFIX};
use crate::error::Result;
use crate::names::DerivedNames;
use crate::plan::{to_json, OutputNode};
use crate::prompt::UserInput;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

pub mod backend;
pub mod frontend;

/// Trait for the fixed shapes of project twinstack can generate.
pub trait Archetype {
    /// Identifier of the archetype.
    fn id(&self) -> &'static str;

    /// Computes the generation plan.
    ///
    /// Directories always precede the files placed inside them.
    fn plan(
        &self,
        input: &UserInput,
        names: &DerivedNames,
        engine: &dyn TemplateRenderer,
    ) -> Result<Vec<OutputNode>>;
}

/// Root `manifest.json`, mirroring the raw answers.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub name: &'a str,
    pub user: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a UserInput> for Manifest<'a> {
    fn from(input: &'a UserInput) -> Self {
        Self { name: &input.full_app_name, user: &input.user_name, email: &input.user_email }
    }
}

/// Backend package + frontend package wired to the `messages` REST resource.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessagesArchetype;

impl Archetype for MessagesArchetype {
    fn id(&self) -> &'static str {
        RESOURCE
    }

    fn plan(
        &self,
        input: &UserInput,
        names: &DerivedNames,
        engine: &dyn TemplateRenderer,
    ) -> Result<Vec<OutputNode>> {
        let root = PathBuf::from(&names.application);
        let context = template_context(input, names);

        let mut nodes = vec![
            OutputNode::directory(&root),
            OutputNode::file(root.join(MANIFEST_FILE), to_json(&Manifest::from(input))?),
        ];
        nodes.extend(backend::plan(&root, input, names, engine, &context)?);
        nodes.extend(frontend::plan(&root, input, names, engine, &context)?);

        debug!("Archetype '{}' planned {} nodes", self.id(), nodes.len());
        Ok(nodes)
    }
}

/// Builds the context every source template is rendered against.
pub fn template_context(input: &UserInput, names: &DerivedNames) -> serde_json::Value {
    serde_json::json!({
        "input": input,
        "names": names,
        "resource": RESOURCE,
        "route_prefix": format!("{ROUTE_PREFIX}/{}/{}", names.organization, names.application),
    })
}

/// Plans the messages archetype with the default MiniJinja engine.
pub fn render(input: &UserInput, names: &DerivedNames) -> Result<Vec<OutputNode>> {
    MessagesArchetype.plan(input, names, &MiniJinjaRenderer::new())
}
