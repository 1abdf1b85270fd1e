//! Stub loading and placeholder substitution.
//!
//! A stub is plain text containing `[% name %]` tokens. Substitution is a
//! single left-to-right pass over the original text: replacement values are
//! copied verbatim and never scanned for further tokens.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex_lite::Regex;

use crate::config::schema::default_template_name;
use crate::error::{CraftError, Result};

pub const STUB_EXTENSION: &str = "stub";

/// Stubs bundled with the binary for the default template family.
const BUILTIN_STUBS: &[(&str, &str)] = &[(
    "form.blade",
    include_str!("../templates/default/form.blade.stub"),
)];

/// Format a placeholder token: `model_name` -> `[% model_name %]`.
pub fn token(name: &str) -> String {
    format!("[% {name} %]")
}

/// Ordered token -> replacement pairs.
///
/// Setting a token that is already present replaces its value and keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: IndexMap<String, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named placeholder (`name` is wrapped with [`token`]).
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(token(name), value);
        self
    }

    /// Register a literal token.
    pub fn set(&mut self, literal_token: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(literal_token.into(), value.into());
    }

    pub fn get(&self, literal_token: &str) -> Option<&str> {
        self.entries.get(literal_token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn extend(&mut self, other: PlaceholderMap) {
        for (literal_token, value) in other.entries {
            self.set(literal_token, value);
        }
    }
}

/// Replace every token occurrence in `template` in one pass.
///
/// At each position the earliest occurrence wins; on a tie the longest token
/// wins. Tokens absent from the template are ignored.
pub fn substitute(template: &str, placeholders: &PlaceholderMap) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let next = placeholders
            .iter()
            .filter(|(literal_token, _)| !literal_token.is_empty())
            .filter_map(|(literal_token, value)| {
                rest.find(literal_token)
                    .map(|pos| (pos, literal_token.len(), value))
            })
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        match next {
            Some((pos, len, value)) => {
                output.push_str(&rest[..pos]);
                output.push_str(value);
                rest = &rest[pos + len..];
            }
            None => {
                output.push_str(rest);
                return output;
            }
        }
    }
}

/// Names of `[% ... %]` tokens in `template` that no placeholder replaces,
/// in order of first appearance.
///
/// Only the template is scanned; replacement values may contain anything.
pub fn unknown_tokens(template: &str, placeholders: &PlaceholderMap) -> Vec<String> {
    let re = Regex::new(r"\[%\s*([A-Za-z0-9_]+)\s*%\]").expect("token pattern is valid");
    let mut names: Vec<String> = Vec::new();
    for cap in re.captures_iter(template) {
        let name = &cap[1];
        if placeholders.get(&cap[0]).is_none() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// A stub whose text has been read but not yet substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedStub {
    pub name: String,
    pub template_name: String,
    pub text: String,
}

/// The final document produced from a stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub stub: String,
    pub text: String,
}

impl LoadedStub {
    pub fn from_text(name: &str, text: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            template_name: default_template_name(),
            text: text.into(),
        }
    }

    pub fn render(&self, placeholders: &PlaceholderMap) -> RenderedView {
        RenderedView {
            stub: self.name.clone(),
            text: substitute(&self.text, placeholders),
        }
    }
}

pub fn stub_path(stubs_path: &Path, template_name: &str, stub_name: &str) -> PathBuf {
    stubs_path
        .join(template_name)
        .join(format!("{stub_name}.{STUB_EXTENSION}"))
}

/// Read `<stubs_path>/<template_name>/<stub_name>.stub`.
///
/// The default template family falls back to the bundled stubs.
pub fn load_stub(stubs_path: &Path, template_name: &str, stub_name: &str) -> Result<LoadedStub> {
    let path = stub_path(stubs_path, template_name, stub_name);

    if path.is_file() {
        let text = std::fs::read_to_string(&path).map_err(|e| CraftError::Io {
            context: format!("reading stub {}", path.display()),
            source: e,
        })?;
        return Ok(LoadedStub {
            name: stub_name.to_string(),
            template_name: template_name.to_string(),
            text,
        });
    }

    if template_name == default_template_name() {
        if let Some((_, text)) = BUILTIN_STUBS.iter().find(|(name, _)| *name == stub_name) {
            return Ok(LoadedStub::from_text(stub_name, *text));
        }
    }

    Err(CraftError::StubNotFound {
        stub: stub_name.to_string(),
        template: template_name.to_string(),
        path,
    })
}
