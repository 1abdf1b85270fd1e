use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Project-level settings read from `formcraft.toml`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Markup settings keyed by template family name.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateStyle>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_resource_files")]
    pub resource_files: PathBuf,

    #[serde(default = "default_views")]
    pub views: PathBuf,

    #[serde(default = "default_stubs")]
    pub stubs: PathBuf,

    #[serde(default = "default_languages")]
    pub languages: PathBuf,
}

fn default_resource_files() -> PathBuf {
    PathBuf::from("resources/codegen")
}

fn default_views() -> PathBuf {
    PathBuf::from("resources/views")
}

fn default_stubs() -> PathBuf {
    PathBuf::from("templates")
}

fn default_languages() -> PathBuf {
    PathBuf::from("resources/lang")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            resource_files: default_resource_files(),
            views: default_views(),
            stubs: default_stubs(),
            languages: default_languages(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_layout_name")]
    pub layout_name: String,

    #[serde(default = "default_template_name")]
    pub template_name: String,

    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_layout_name() -> String {
    "layouts.app".to_string()
}

pub(crate) fn default_template_name() -> String {
    "default".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            layout_name: default_layout_name(),
            template_name: default_template_name(),
            locale: default_locale(),
        }
    }
}

/// CSS classes the HTML renderer emits for one template family.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TemplateStyle {
    #[serde(default = "default_group_class")]
    pub group_class: String,

    #[serde(default = "default_label_class")]
    pub label_class: String,

    #[serde(default = "default_input_wrapper_class")]
    pub input_wrapper_class: String,

    #[serde(default = "default_input_class")]
    pub input_class: String,
}

fn default_group_class() -> String {
    "form-group".to_string()
}

fn default_label_class() -> String {
    "col-md-2 control-label".to_string()
}

fn default_input_wrapper_class() -> String {
    "col-md-10".to_string()
}

fn default_input_class() -> String {
    "form-control".to_string()
}

impl Default for TemplateStyle {
    fn default() -> Self {
        Self {
            group_class: default_group_class(),
            label_class: default_label_class(),
            input_wrapper_class: default_input_wrapper_class(),
            input_class: default_input_class(),
        }
    }
}

impl GeneratorConfig {
    /// Style for a template family; unknown families use the default classes.
    pub fn style_for(&self, template_name: &str) -> TemplateStyle {
        self.templates
            .get(template_name)
            .cloned()
            .unwrap_or_default()
    }
}
