//! User input and interaction handling.
//! Collects the three answers every generation run needs.

use dialoguer::Input;
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::names::split_app_name;

/// Checks a raw answer before it is accepted.
pub type Validator = fn(&str) -> Result<()>;

/// Values supplied by the user once at start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInput {
    /// Free-form display name of the author
    pub user_name: String,
    /// Author email, not validated
    pub user_email: String,
    /// Namespaced identifier such as `@acme/billing-core`
    pub full_app_name: String,
}

/// Trait for reading answers from the user.
pub trait Prompter {
    /// Asks a single free-text question.
    ///
    /// # Arguments
    /// * `prompt` - Question shown to the user
    /// * `validator` - Optional check; rejected answers are asked again
    ///
    /// # Returns
    /// * `Result<String>` - The accepted answer
    fn text(&self, prompt: &str, validator: Option<Validator>) -> Result<String>;
}

/// Prompter backed by dialoguer terminal widgets.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    /// Creates a prompter reading from the terminal.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, validator: Option<Validator>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);

        input = match validator {
            Some(validate) => {
                input.validate_with(move |answer: &String| -> std::result::Result<(), String> {
                    validate(answer).map_err(|e| e.to_string())
                })
            }
            None => input.allow_empty(true),
        };

        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Validates the application identifier answer.
pub fn validate_app_name(answer: &str) -> Result<()> {
    split_app_name(answer).map(|_| ())
}

/// Prompts for name, email address and application identifier, in that order.
///
/// # Errors
/// * `Error::PromptError` if the terminal cannot be read (for example a closed stdin)
pub fn collect_input(prompt: &dyn Prompter) -> Result<UserInput> {
    let user_name = prompt.text("Your name", None)?;
    let user_email = prompt.text("Your email address", None)?;
    let full_app_name =
        prompt.text("Application name (@organization/application)", Some(validate_app_name))?;

    debug!("Collected answers for '{full_app_name}'");

    Ok(UserInput { user_name, user_email, full_app_name })
}
