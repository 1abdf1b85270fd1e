#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CraftError {
    #[error("Resource file not found: {path}")]
    #[diagnostic(help(
        "Pass --resource-file or place <model>.json under the configured resource_files path"
    ))]
    ResourceNotFound { path: PathBuf },

    #[error("Failed to parse resource file {path}")]
    #[diagnostic(help("The resource file must be JSON: an array of fields or {{\"fields\": [...]}}"))]
    MalformedResource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid resource file {path}: {reason}")]
    InvalidResource { path: PathBuf, reason: String },

    #[error("The resource file {path} does not contain any field visible on the form")]
    #[diagnostic(help("Set \"is-on-form\": true on at least one field"))]
    EmptyResource { path: PathBuf },

    #[error("Invalid model name '{name}'")]
    #[diagnostic(help(
        "Model names must start with a letter and contain only letters, digits or underscores"
    ))]
    InvalidModelName { name: String },

    #[error("The view already exists: {path}")]
    #[diagnostic(help("Use --force to overwrite the existing view"))]
    DestinationExists { path: PathBuf },

    #[error("Failed to write {path}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stub '{stub}' not found for template '{template}'")]
    #[diagnostic(help("Add the stub to the template directory or use the default template"))]
    StubNotFound {
        stub: String,
        template: String,
        path: PathBuf,
    },

    #[error("Failed to parse {path}")]
    #[diagnostic(help("Check the TOML syntax in your formcraft.toml file"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to update language file {path}: {reason}")]
    #[diagnostic(help(
        "Language files are PHP group files of the form <?php return [ 'key' => 'value', ];"
    ))]
    LanguageFile { path: PathBuf, reason: String },

    #[error("Invalid language file name '{name}'")]
    #[diagnostic(help(
        "Language file names must start with a letter or underscore and contain only letters, digits, '_' or '-'"
    ))]
    InvalidLanguageFileName { name: String },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CraftError {
    /// A policy refusal rather than a fault; the CLI reports it as skipped.
    pub fn is_skip(&self) -> bool {
        matches!(self, CraftError::DestinationExists { .. })
    }
}

pub type Result<T> = std::result::Result<T, CraftError>;
