//! Translation group files read by the view's `trans('<file>.<key>')` labels.
//!
//! A group file is `<lang>/<locale>/<file>.php` returning a flat PHP array.
//! New keys are appended before the closing `];` so that anything a translator
//! added to the file survives.

use std::path::{Path, PathBuf};

use regex_lite::Regex;

use crate::error::{CraftError, Result};
use crate::naming;
use crate::resource::Resource;
use crate::writer::create_file;

pub const LANGUAGE_FILE_EXTENSION: &str = "php";

/// Outcome of a language file update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFileUpdate {
    pub path: PathBuf,
    /// Keys that were not present before, in insertion order.
    pub added: Vec<String>,
}

pub fn language_file_path(languages_path: &Path, locale: &str, language_file: &str) -> PathBuf {
    languages_path
        .join(locale)
        .join(format!("{language_file}.{LANGUAGE_FILE_EXTENSION}"))
}

/// Entries the form view looks up: model names, then one label per field.
pub fn entries_for(resource: &Resource, model_name: &str) -> Vec<(String, String)> {
    let mut entries = vec![
        ("model_name".to_string(), naming::title(model_name)),
        ("model_plural".to_string(), naming::plural_title(model_name)),
    ];
    entries.extend(
        resource
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.label.clone())),
    );
    entries
}

fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn unescape_php_string(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match (c, chars.clone().next()) {
            ('\\', Some(next @ ('\\' | '\''))) => {
                output.push(next);
                chars.next();
            }
            _ => output.push(c),
        }
    }
    output
}

fn entry_line(key: &str, value: &str) -> String {
    format!("    {} => {},\n", php_string(key), php_string(value))
}

/// A complete group file for `entries`.
pub fn render_language_file(entries: &[(String, String)]) -> String {
    let mut content = String::from("<?php\n\nreturn [\n");
    for (key, value) in entries {
        content.push_str(&entry_line(key, value));
    }
    content.push_str("];\n");
    content
}

/// Keys defined at the start of a line as `'key' =>`, in file order.
pub fn defined_keys(content: &str) -> Vec<String> {
    let re = Regex::new(r#"(?m)^\s*'((?:[^'\\]|\\.)*)'\s*=>"#).expect("key pattern is valid");
    re.captures_iter(content)
        .map(|cap| unescape_php_string(&cap[1]))
        .collect()
}

/// Insert `lines` before the array's closing `];`.
fn append_entries(content: &str, lines: &str, path: &Path) -> Result<String> {
    let invalid = |reason: &str| CraftError::LanguageFile {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if !content.contains("return") {
        return Err(invalid("expected `return [ ... ];`"));
    }
    let close = content
        .rfind("];")
        .ok_or_else(|| invalid("no closing `];` found"))?;

    let head = content[..close].trim_end();
    let separator = if head.ends_with(',') || head.ends_with('[') {
        ""
    } else {
        ","
    };

    Ok(format!("{head}{separator}\n{lines}{}", &content[close..]))
}

/// Create or extend `<languages_path>/<locale>/<language_file>.php`.
///
/// Keys already in the file keep their translated values.
pub fn create_language_file(
    languages_path: &Path,
    locale: &str,
    language_file: &str,
    resource: &Resource,
    model_name: &str,
) -> Result<LanguageFileUpdate> {
    let path = language_file_path(languages_path, locale, language_file);
    let entries = entries_for(resource, model_name);

    if !path.exists() {
        create_file(&path, &render_language_file(&entries))?;
        let added = entries.into_iter().map(|(key, _)| key).collect();
        return Ok(LanguageFileUpdate { path, added });
    }

    let content = std::fs::read_to_string(&path).map_err(|e| CraftError::Io {
        context: format!("reading language file {}", path.display()),
        source: e,
    })?;
    let existing = defined_keys(&content);

    let missing: Vec<(String, String)> = entries
        .into_iter()
        .filter(|(key, _)| !existing.contains(key))
        .collect();

    if !missing.is_empty() {
        let lines: String = missing.iter().map(|(k, v)| entry_line(k, v)).collect();
        create_file(&path, &append_entries(&content, &lines, &path)?)?;
    }

    Ok(LanguageFileUpdate {
        path,
        added: missing.into_iter().map(|(key, _)| key).collect(),
    })
}
