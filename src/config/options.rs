use std::path::PathBuf;

use super::schema::GeneratorConfig;
use crate::error::Result;
use crate::naming;

/// Options for the form-view command as given by the caller; `None` means "use the default".
#[derive(Debug, Clone, Default)]
pub struct FormViewOptions {
    pub model_name: String,
    pub resource_file: Option<String>,
    pub views_directory: Option<String>,
    pub routes_prefix: Option<String>,
    pub language_file_name: Option<String>,
    pub layout_name: Option<String>,
    pub template_name: Option<String>,
    pub force: bool,
}

/// Form-view options with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInput {
    pub model_name: String,
    /// Defaults to the snake-case model name.
    pub resource_file: String,
    pub views_directory: Option<String>,
    /// `None` means routes are named `<plural>.<action>` and views live directly under the plural directory.
    pub routes_prefix: Option<String>,
    /// Defaults to the plural snake-case model name.
    pub language_file_name: String,
    pub layout_name: String,
    pub template_name: String,
    pub force: bool,
    pub views_path: PathBuf,
    pub stubs_path: PathBuf,
    pub languages_path: PathBuf,
    pub resource_files_path: PathBuf,
    pub locale: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CommandInput {
    pub fn resolve(options: FormViewOptions, config: &GeneratorConfig) -> Result<Self> {
        let model_name = options.model_name.trim().to_string();
        naming::validate_model_name(&model_name)?;

        let resource_file =
            non_blank(options.resource_file).unwrap_or_else(|| naming::snake(&model_name));
        let language_file_name = non_blank(options.language_file_name)
            .unwrap_or_else(|| naming::plural_snake(&model_name));
        naming::validate_language_file_name(&language_file_name)?;
        let routes_prefix = non_blank(options.routes_prefix)
            .map(|p| p.trim_matches(|c| c == '/' || c == '.').to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            resource_file,
            views_directory: non_blank(options.views_directory),
            routes_prefix,
            language_file_name,
            layout_name: non_blank(options.layout_name)
                .unwrap_or_else(|| config.defaults.layout_name.clone()),
            template_name: non_blank(options.template_name)
                .unwrap_or_else(|| config.defaults.template_name.clone()),
            force: options.force,
            views_path: config.paths.views.clone(),
            stubs_path: config.paths.stubs.clone(),
            languages_path: config.paths.languages.clone(),
            resource_files_path: config.paths.resource_files.clone(),
            locale: config.defaults.locale.clone(),
            model_name,
        })
    }

    /// Route name for an action, e.g. `admin.posts.store`.
    pub fn route_name(&self, action: &str) -> String {
        let plural = naming::plural_snake(&self.model_name);
        match &self.routes_prefix {
            Some(prefix) => format!("{prefix}.{plural}.{action}"),
            None => format!("{plural}.{action}"),
        }
    }
}
