//! Name derivation for generated projects.
//! Splits a namespaced application identifier such as `@acme/billing-core`
//! and computes the case variants reused across every generated file.
//!
//! Case conversion relies on Rust's built-in char casing only; there is no
//! Unicode normalization.

use log::debug;
use serde::Serialize;
use std::path::{Component, Path};

use crate::constants::{API_SUFFIX, BACKEND_SUFFIX, FRONTEND_EXT, FRONTEND_SUFFIX};
use crate::error::{Error, Result};

/// Names computed once from the raw application identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    /// Substring before the first `/`
    pub organization: String,
    /// Substring after the first `/`
    pub application: String,
    /// `test-app` -> `TestApp`
    pub pascal_application: String,
    /// PascalCase form of the organization
    pub pascal_organization: String,
    /// `test-app` -> `testAppApi`
    pub camel_api_name: String,
    /// `camel_api_name` with the frontend source extension
    pub api_file_name: String,
}

impl DerivedNames {
    /// Derives every name variant from `full_app_name`.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the identifier does not have the
    ///   `[@]organization/application` shape, see [`split_app_name`]
    pub fn derive(full_app_name: &str) -> Result<Self> {
        let (organization, application) = split_app_name(full_app_name)?;
        let camel_api_name = to_camel_api(application);

        let names = Self {
            organization: organization.to_string(),
            application: application.to_string(),
            pascal_application: to_pascal_case(application),
            pascal_organization: to_pascal_case(organization),
            api_file_name: format!("{camel_api_name}.{FRONTEND_EXT}"),
            camel_api_name,
        };
        debug!("Derived names for '{full_app_name}': {names:?}");
        Ok(names)
    }

    /// Package name of the backend, `organization/application-backend`.
    pub fn backend_package(&self) -> String {
        format!("{}/{}{}", self.organization, self.application, BACKEND_SUFFIX)
    }

    /// Scoped package name of the frontend, `@organization/application-frontend`.
    pub fn frontend_package(&self) -> String {
        format!("@{}/{}{}", self.organization, self.application, FRONTEND_SUFFIX)
    }

    /// Backend namespace, `Organization\Application`.
    pub fn namespace(&self) -> String {
        format!("{}\\{}", self.pascal_organization, self.pascal_application)
    }
}

/// Splits an identifier into its organization and application parts.
///
/// At most one leading `@` is stripped, then the rest is split on the first `/`.
///
/// # Errors
/// * `Error::ValidationError` if there is no `/`, if either part is empty,
///   if the application part contains another path separator, or if it is
///   `.` or `..`
pub fn split_app_name(full_app_name: &str) -> Result<(&str, &str)> {
    let stripped = full_app_name.strip_prefix('@').unwrap_or(full_app_name);

    let (organization, application) = stripped.split_once('/').ok_or_else(|| {
        Error::ValidationError(format!(
            "application identifier '{full_app_name}' must look like '@organization/application'"
        ))
    })?;

    if organization.is_empty() {
        return Err(Error::ValidationError(format!(
            "organization is empty in '{full_app_name}'"
        )));
    }
    if application.is_empty() {
        return Err(Error::ValidationError(format!(
            "application is empty in '{full_app_name}'"
        )));
    }
    if application.contains(['/', '\\']) {
        return Err(Error::ValidationError(format!(
            "application '{application}' must not contain path separators"
        )));
    }

    // `.` and `..` resolve outside the generated tree.
    let mut components = Path::new(application).components();
    if !matches!((components.next(), components.next()), (Some(Component::Normal(_)), None)) {
        return Err(Error::ValidationError(format!(
            "application '{application}' must be a plain directory name"
        )));
    }

    Ok((organization, application))
}

/// Uppercases the first character of `segment` and lowercases the remainder.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// Converts a hyphen-delimited string to PascalCase.
///
/// Empty segments produced by consecutive hyphens contribute nothing.
pub fn to_pascal_case(value: &str) -> String {
    value.split('-').map(capitalize).collect()
}

/// Converts a hyphen-delimited string to camelCase and appends `Api`.
///
/// The first segment is lowercased entirely, the rest go through [`to_pascal_case`].
pub fn to_camel_api(value: &str) -> String {
    let (first, rest) = value.split_once('-').unwrap_or((value, ""));
    format!("{}{}{API_SUFFIX}", first.to_lowercase(), to_pascal_case(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("app"), "App");
        assert_eq!(capitalize("aPP"), "App");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_camel_api_without_hyphen() {
        assert_eq!(to_camel_api("Billing"), "billingApi");
    }

    #[test]
    fn test_camel_api_leading_hyphen() {
        // The first segment is empty, so the next one is capitalized.
        assert_eq!(to_camel_api("-app"), "AppApi");
    }
}
