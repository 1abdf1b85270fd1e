//! The resource model: an ordered list of fields loaded from a JSON resource file.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};
use crate::naming;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Form,
    Index,
    Show,
}

impl View {
    pub const ALL: [View; 3] = [View::Form, View::Index, View::Show];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Form => "form",
            View::Index => "index",
            View::Show => "show",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlType {
    #[default]
    Text,
    Textarea,
    Email,
    Number,
    Password,
    Date,
    Hidden,
    Checkbox,
    Select,
}

impl HtmlType {
    /// Whether the field's value reads as a human label.
    pub fn is_textual(self) -> bool {
        matches!(self, HtmlType::Text | HtmlType::Textarea | HtmlType::Email)
    }
}

/// Which views a field appears on, and whether it labels a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub views: BTreeSet<View>,
    pub is_header: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            views: View::ALL.into_iter().collect(),
            is_header: false,
        }
    }
}

/// A foreign association declared by a field, e.g. `category_id` belongs to `Category`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ForeignRelation {
    pub name: String,
    #[serde(rename = "type", default = "default_relation_kind")]
    pub kind: String,
    #[serde(default)]
    pub foreign_model: Option<String>,
    /// Column of the foreign model shown in the selector.
    #[serde(rename = "field", default = "default_display_field")]
    pub display_field: String,
    /// Overrides the view variable that holds the selector's options.
    #[serde(default)]
    pub collection: Option<String>,
}

fn default_relation_kind() -> String {
    "belongsTo".to_string()
}

fn default_display_field() -> String {
    "name".to_string()
}

impl ForeignRelation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: default_relation_kind(),
            foreign_model: None,
            display_field: default_display_field(),
            collection: None,
        }
    }

    /// Name of the view variable holding the related records, e.g. `categories`.
    pub fn collection_name(&self) -> String {
        match &self.collection {
            Some(name) => name.clone(),
            None => naming::plural_variable(&self.name),
        }
    }

    /// Loop variable used when iterating the collection, e.g. `category`.
    pub fn item_variable(&self) -> String {
        naming::singular_variable(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawField")]
pub struct Field {
    pub name: String,
    pub label: String,
    pub html_type: HtmlType,
    pub data_type: String,
    /// Value -> label pairs for select fields, in display order.
    pub options: IndexMap<String, String>,
    pub capabilities: Capabilities,
    pub relation: Option<ForeignRelation>,
}

impl Field {
    pub fn new(name: impl Into<String>, html_type: HtmlType) -> Self {
        let name = name.into();
        Self {
            label: naming::title(&name),
            name,
            html_type,
            data_type: default_data_type(),
            options: IndexMap::new(),
            capabilities: Capabilities::default(),
            relation: None,
        }
    }

    pub fn with_relation(mut self, relation: ForeignRelation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn with_views(mut self, views: &[View]) -> Self {
        self.capabilities.views = views.iter().copied().collect();
        self
    }

    pub fn as_header(mut self) -> Self {
        self.capabilities.is_header = true;
        self
    }

    pub fn is_on_view(&self, view: View) -> bool {
        self.capabilities.views.contains(&view)
    }

    pub fn is_header(&self) -> bool {
        self.capabilities.is_header
    }
}

fn default_data_type() -> String {
    "string".to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawField {
    name: String,
    label: Option<String>,
    html_type: Option<HtmlType>,
    #[serde(default = "default_data_type")]
    data_type: String,
    #[serde(default)]
    options: IndexMap<String, String>,
    is_on_form: Option<bool>,
    is_on_index: Option<bool>,
    is_on_show: Option<bool>,
    #[serde(default)]
    is_header: bool,
    foreign_relation: Option<ForeignRelation>,
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        let views = [
            (View::Form, raw.is_on_form),
            (View::Index, raw.is_on_index),
            (View::Show, raw.is_on_show),
        ]
        .into_iter()
        .filter(|(_, flag)| flag.unwrap_or(true))
        .map(|(view, _)| view)
        .collect();

        // A relation without an explicit html type renders as a selector.
        let html_type = raw.html_type.unwrap_or(if raw.foreign_relation.is_some() {
            HtmlType::Select
        } else {
            HtmlType::Text
        });

        Field {
            label: raw.label.unwrap_or_else(|| naming::title(&raw.name)),
            name: raw.name,
            html_type,
            data_type: raw.data_type,
            options: raw.options,
            capabilities: Capabilities {
                views,
                is_header: raw.is_header,
            },
            relation: raw.foreign_relation,
        }
    }
}

/// A model's fields for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub path: PathBuf,
    pub fields: Vec<Field>,
    pub language_file: Option<String>,
}

impl Resource {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            path: PathBuf::new(),
            fields,
            language_file: None,
        }
    }

    pub fn fields_on(&self, view: View) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(move |f| f.is_on_view(view))
    }

    pub fn has_fields_on(&self, view: View) -> bool {
        self.fields_on(view).next().is_some()
    }
}

/// Map a resource identifier to a file: `post` -> `<base_dir>/post.json`.
///
/// An identifier that already names an existing file is used as-is.
pub fn resolve_resource_path(resource_file: &str, base_dir: &Path) -> PathBuf {
    let mut path = PathBuf::from(resource_file);
    if path.extension().is_none() {
        path.set_extension("json");
    }
    if path.is_absolute() || path.exists() {
        return path;
    }
    base_dir.join(path)
}

/// Load the resource identified by `resource_file`, resolved against `base_dir`.
pub fn load(resource_file: &str, base_dir: &Path, language_file: Option<&str>) -> Result<Resource> {
    let path = resolve_resource_path(resource_file, base_dir);
    from_file(&path, language_file)
}

pub fn from_file(path: &Path, language_file: Option<&str>) -> Result<Resource> {
    if !path.is_file() {
        return Err(CraftError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CraftError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    let fields = parse_fields(&content, path)?;
    validate_fields(&fields, path)?;

    Ok(Resource {
        path: path.to_path_buf(),
        fields,
        language_file: language_file.map(String::from),
    })
}

fn parse_fields(content: &str, path: &Path) -> Result<Vec<Field>> {
    let malformed = |e| CraftError::MalformedResource {
        path: path.to_path_buf(),
        source: e,
    };

    let value: serde_json::Value = serde_json::from_str(content).map_err(malformed)?;
    let fields = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => match map.remove("fields") {
            Some(fields) => fields,
            None => {
                return Err(CraftError::InvalidResource {
                    path: path.to_path_buf(),
                    reason: "missing \"fields\" key".into(),
                })
            }
        },
        _ => {
            return Err(CraftError::InvalidResource {
                path: path.to_path_buf(),
                reason: "expected an array of fields or an object with a \"fields\" key".into(),
            })
        }
    };

    serde_json::from_value(fields).map_err(malformed)
}

fn validate_fields(fields: &[Field], path: &Path) -> Result<()> {
    let ident = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("field name pattern is valid");
    let mut seen = HashSet::new();

    for field in fields {
        if !ident.is_match(&field.name) {
            return Err(CraftError::InvalidResource {
                path: path.to_path_buf(),
                reason: format!("invalid field name '{}'", field.name),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(CraftError::InvalidResource {
                path: path.to_path_buf(),
                reason: format!("duplicate field '{}'", field.name),
            });
        }
        if let Some(relation) = &field.relation {
            if !ident.is_match(&relation.collection_name()) {
                return Err(CraftError::InvalidResource {
                    path: path.to_path_buf(),
                    reason: format!(
                        "relation on '{}' has an invalid collection name '{}'",
                        field.name,
                        relation.collection_name()
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_resource(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_wrapped_fields_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_resource(
            dir.path(),
            "post.json",
            r#"{
  "fields": [
    { "name": "title", "is-header": true },
    { "name": "body", "html-type": "textarea", "is-on-index": false },
    {
      "name": "category_id",
      "label": "Category",
      "foreign-relation": { "name": "category", "foreign-model": "App\\Models\\Category" }
    }
  ]
}"#,
        );

        let resource = load("post", dir.path(), Some("posts")).unwrap();
        let names: Vec<&str> = resource.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["title", "body", "category_id"]);
        assert_eq!(resource.language_file.as_deref(), Some("posts"));

        let title = &resource.fields[0];
        assert_eq!(title.label, "Title");
        assert_eq!(title.html_type, HtmlType::Text);
        assert!(title.is_header());

        let body = &resource.fields[1];
        assert!(body.is_on_view(View::Form));
        assert!(!body.is_on_view(View::Index));

        let category = &resource.fields[2];
        assert_eq!(category.html_type, HtmlType::Select);
        let relation = category.relation.as_ref().unwrap();
        assert_eq!(relation.kind, "belongsTo");
        assert_eq!(relation.display_field, "name");
        assert_eq!(relation.collection_name(), "categories");
        assert_eq!(relation.item_variable(), "category");
    }

    #[test]
    fn parses_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_resource(
            dir.path(),
            "tags.json",
            r#"[{ "name": "label", "options": { "a": "Alpha", "b": "Beta" }, "html-type": "select" }]"#,
        );

        let resource = from_file(&path, None).unwrap();
        assert_eq!(resource.fields.len(), 1);
        let keys: Vec<&String> = resource.fields[0].options.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load("nope", dir.path(), None);
        assert!(matches!(result, Err(CraftError::ResourceNotFound { .. })));
    }

    #[test]
    fn bad_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_resource(dir.path(), "post.json", "{ not json");
        let result = load("post", dir.path(), None);
        assert!(matches!(result, Err(CraftError::MalformedResource { .. })));
    }

    #[test]
    fn field_without_name_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_resource(dir.path(), "post.json", r#"[{ "label": "Title" }]"#);
        let result = load("post", dir.path(), None);
        assert!(matches!(result, Err(CraftError::MalformedResource { .. })));
    }

    #[test]
    fn object_without_fields_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        write_resource(dir.path(), "post.json", r#"{ "columns": [] }"#);
        let result = load("post", dir.path(), None);
        assert!(matches!(result, Err(CraftError::InvalidResource { .. })));
    }

    #[test]
    fn duplicate_fields_are_invalid() {
        let dir = tempfile::tempdir().unwrap();
        write_resource(
            dir.path(),
            "post.json",
            r#"[{ "name": "title" }, { "name": "title" }]"#,
        );
        let err = load("post", dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("duplicate field 'title'"));
    }

    #[test]
    fn resolve_path_keeps_explicit_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_resource(dir.path(), "custom.json", "[]");
        let base = Path::new("/does/not/matter");
        assert_eq!(resolve_resource_path(path.to_str().unwrap(), base), path);
        assert_eq!(
            resolve_resource_path("post", base),
            base.join("post.json")
        );
    }
}
