use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CraftError, Result};
use crate::naming;
use crate::resource::{Resource, View};

pub const FORM_VIEW_FILE: &str = "form.blade.php";

/// How the view file will be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Overwrite,
}

/// Directory segments under the views root: `[views_directory]/[prefix...]/<plural>`.
fn view_segments(
    views_directory: Option<&str>,
    routes_prefix: Option<&str>,
    model_name: &str,
) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for part in [views_directory, routes_prefix].into_iter().flatten() {
        segments.extend(
            part.split(['/', '.', '\\'])
                .filter(|s| !s.is_empty())
                .map(String::from),
        );
    }
    segments.push(naming::plural_snake(model_name));
    segments
}

/// Path of the form view for a model.
pub fn destination(
    views_path: &Path,
    views_directory: Option<&str>,
    routes_prefix: Option<&str>,
    model_name: &str,
) -> PathBuf {
    let mut path = views_path.to_path_buf();
    for segment in view_segments(views_directory, routes_prefix, model_name) {
        path.push(segment);
    }
    path.push(FORM_VIEW_FILE);
    path
}

/// Dotted view name as used by `view()`, e.g. `admin.posts.form`.
pub fn view_name(
    views_directory: Option<&str>,
    routes_prefix: Option<&str>,
    model_name: &str,
) -> String {
    let mut segments = view_segments(views_directory, routes_prefix, model_name);
    segments.push("form".to_string());
    segments.join(".")
}

/// Decide whether the view may be written.
///
/// An existing file is only replaced when `force` is set, and a resource with
/// nothing to show on the form is refused.
pub fn check_destination(path: &Path, force: bool, resource: &Resource) -> Result<WriteMode> {
    let exists = path.exists();
    if exists && !force {
        return Err(CraftError::DestinationExists {
            path: path.to_path_buf(),
        });
    }

    if !resource.has_fields_on(View::Form) {
        return Err(CraftError::EmptyResource {
            path: resource.path.clone(),
        });
    }

    Ok(if exists {
        WriteMode::Overwrite
    } else {
        WriteMode::Create
    })
}

pub fn can_create_view(path: &Path, force: bool, resource: &Resource) -> bool {
    check_destination(path, force, resource).is_ok()
}

/// Write `content` to `path` in one step.
///
/// The content goes to a temporary file next to the destination which is then
/// renamed over it, so a failed write never leaves a truncated view behind.
pub fn create_file(path: &Path, content: &str) -> Result<()> {
    let write_failure = |source| CraftError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_failure)?;

    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(write_failure)?;
    file.write_all(content.as_bytes()).map_err(write_failure)?;
    file.as_file().sync_all().map_err(write_failure)?;
    file.persist(path).map_err(|e| write_failure(e.error))?;

    Ok(())
}

/// Diff of the view on disk against the regenerated one, for `--dry-run --verbose`.
///
/// Empty when regenerating would not change the file.
pub fn unified_diff(existing: &str, generated: &str, path: &Path) -> String {
    let existing_label = format!("{} (existing)", path.display());
    let generated_label = format!("{} (generated)", path.display());

    let diff = similar::TextDiff::from_lines(existing, generated);
    let mut unified = diff.unified_diff();
    unified
        .context_radius(3)
        .header(&existing_label, &generated_label);
    unified.to_string()
}
