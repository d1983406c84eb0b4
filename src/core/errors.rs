//! Catalog construction errors and diagnostics.
//!
//! Only construction can fail. Queries against a built catalog degrade to
//! empty results instead of erroring.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// A malformed package definition source.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum CatalogError {
    #[error("duplicate package `{name}` for architecture `{architecture}`")]
    #[diagnostic(
        code(jampkg::catalog::duplicate_package),
        help("Each package may be defined once per architecture")
    )]
    DuplicatePackage { name: String, architecture: String },

    #[error("invalid package name `{name}`")]
    #[diagnostic(code(jampkg::catalog::invalid_name))]
    InvalidPackageName { name: String },

    #[error("invalid architecture `{architecture}`")]
    #[diagnostic(code(jampkg::catalog::invalid_architecture))]
    InvalidArchitecture { architecture: String },

    #[error("invalid package set `{source_name}`: {message}")]
    #[diagnostic(code(jampkg::catalog::invalid_override))]
    InvalidOverride { source_name: String, message: String },
}

impl CatalogError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CatalogError::DuplicatePackage { name, architecture } => Diagnostic::error(format!(
                "package `{}` is defined more than once",
                name
            ))
            .with_context(format!("architecture: {}", architecture))
            .with_suggestion(format!(
                "Remove one of the `{}` entries from the package set",
                name
            ))
            .with_suggestion(
                "Use `mode = \"merge\"` to replace a builtin package instead of redefining it",
            ),

            CatalogError::InvalidPackageName { name } => {
                Diagnostic::error(format!("`{}` is not a valid package name", name))
                    .with_context(
                        "package names may contain only letters, digits, `_`, `.` and `+`",
                    )
                    .with_suggestion("Rename the package in the package set")
            }

            CatalogError::InvalidArchitecture { architecture } => {
                let mut diag = Diagnostic::error(format!(
                    "`{}` is not a valid architecture tag",
                    architecture
                ));

                diag = diag.with_context(format!(
                    "known architectures: {}",
                    crate::core::builtin::KNOWN_ARCHITECTURES.join(", ")
                ));

                diag.with_suggestion("Pass a valid tag with `--arch` or set `profile.architecture`")
            }

            CatalogError::InvalidOverride {
                source_name,
                message,
            } => Diagnostic::error("could not use package set")
                .with_location(source_name.as_str())
                .with_context(message.clone())
                .with_suggestion("Fix the package set file or remove it from the profile"),
        }
    }
}
