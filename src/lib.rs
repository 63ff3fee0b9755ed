//! whitelabel generates a customized app project from a template directory.
//! It copies the template while excluding build artifacts, patches the project
//! descriptor for the configured target names and substitutes `${name}`
//! placeholders in a fixed set of files.

/// Command-line interface module
pub mod cli;

/// Configuration loading and target name resolution
/// Supports JSON, and YAML for `.yml` / `.yaml` files
pub mod config;

/// Common constants: exclusion list, per-file variable table
pub mod constants;

/// Filtered template tree copy
pub mod copier;

/// Error types and handling
pub mod error;

/// Exclusion rules for template paths
pub mod ignore;

/// Project descriptor patching and entitlement renames
pub mod patch;

/// Question-by-question configuration entry
pub mod interactive;

/// Generation orchestration
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// `${name}` placeholder substitution
pub mod renderer;

/// Configuration validation rules
pub mod validation;
