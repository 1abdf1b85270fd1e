pub mod options;
pub mod schema;

use std::path::Path;

use crate::error::{CraftError, Result};

pub use options::{CommandInput, FormViewOptions};
pub use schema::{GeneratorConfig, TemplateStyle};

pub const CONFIG_FILE: &str = "formcraft.toml";

/// Load a GeneratorConfig from `formcraft.toml`.
///
/// `path` may be the file itself or the directory containing it. A missing
/// file yields the defaults; relative paths in the file are resolved against
/// the directory it was found in.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let config_path = if path.ends_with(CONFIG_FILE) || path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    };
    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    if !config_path.exists() {
        return Ok(GeneratorConfig::default().rooted_at(&base_dir));
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| CraftError::Io {
        context: format!("reading {}", config_path.display()),
        source: e,
    })?;

    let config: GeneratorConfig =
        toml::from_str(&content).map_err(|e| CraftError::ConfigParse {
            path: config_path.clone(),
            source: e,
        })?;

    Ok(config.rooted_at(&base_dir))
}

impl GeneratorConfig {
    fn rooted_at(mut self, base_dir: &Path) -> Self {
        let paths = &mut self.paths;
        for path in [
            &mut paths.resource_files,
            &mut paths.views,
            &mut paths.stubs,
            &mut paths.languages,
        ] {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.paths.views, dir.path().join("resources/views"));
        assert_eq!(config.paths.stubs, dir.path().join("templates"));
        assert_eq!(config.defaults.layout_name, "layouts.app");
        assert_eq!(config.defaults.template_name, "default");
        assert_eq!(config.defaults.locale, "en");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[paths]
views = "app/views"

[defaults]
locale = "fr"

[templates.tailwind]
input_class = "input"
"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.paths.views, dir.path().join("app/views"));
        assert_eq!(config.paths.languages, dir.path().join("resources/lang"));
        assert_eq!(config.defaults.locale, "fr");
        assert_eq!(config.defaults.layout_name, "layouts.app");

        let style = config.style_for("tailwind");
        assert_eq!(style.input_class, "input");
        assert_eq!(style.group_class, "form-group");
        assert_eq!(config.style_for("missing"), TemplateStyle::default());
    }

    #[test]
    fn absolute_paths_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let abs = dir.path().join("elsewhere");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            format!("[paths]\nstubs = {:?}\n", abs.to_string_lossy()),
        )
        .unwrap();

        let config = load_config(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.paths.stubs, abs);
    }

    #[test]
    fn malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not valid [[ toml").unwrap();

        let result = load_config(dir.path());
        assert!(matches!(result, Err(CraftError::ConfigParse { .. })));
    }
}
