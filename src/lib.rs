//! twinstack is a project scaffolding generator.
//! Given a name, an email address and a namespaced application identifier it
//! creates a backend package and a frontend package wired to a `messages`
//! REST resource.

/// Project archetypes and the generation plan they produce
pub mod archetype;

/// Command-line interface module for the twinstack application
pub mod cli;

/// Common constants: file extensions, suffixes and route prefix
pub mod constants;

/// Error types and handling for the twinstack application
pub mod error;

/// Name derivation from the application identifier
pub mod names;

/// Planned output nodes
pub mod plan;

/// Writing the plan to the file system
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering for generated source files
pub mod renderer;
