use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::header;
use crate::relation;
use crate::resource::{self, HtmlType, View};

/// Result of validating a resource file.
pub struct ResourceReport {
    pub path: PathBuf,
    pub field_count: usize,
    pub form_fields: Vec<String>,
    /// Collection names the form view expects, in field order.
    pub form_collections: Vec<String>,
    pub header_fields: Vec<String>,
    pub warnings: Vec<String>,
}

/// Load a resource file and report what a form view generated from it would use.
pub fn check_resource(resource_file: &str, config: &GeneratorConfig) -> Result<ResourceReport> {
    let resource = resource::load(resource_file, &config.paths.resource_files, None)?;
    let mut warnings = Vec::new();

    for field in &resource.fields {
        match (&field.relation, field.html_type) {
            (Some(_), html_type) if html_type != HtmlType::Select => warnings.push(format!(
                "Field '{}' declares html-type {:?} but renders as a relation selector",
                field.name, html_type
            )),
            (Some(_), _) if !field.is_on_view(View::Form) => warnings.push(format!(
                "Relation on '{}' is hidden on the form and is not passed to the view",
                field.name
            )),
            (None, HtmlType::Select) if field.options.is_empty() => warnings.push(format!(
                "Select field '{}' has neither options nor a relation",
                field.name
            )),
            _ => {}
        }
    }

    if !resource.has_fields_on(View::Form) {
        warnings.push("No field is visible on the form".to_string());
    }

    let form_fields = resource
        .fields_on(View::Form)
        .map(|f| f.name.clone())
        .collect();
    let form_collections = relation::resolve(&resource.fields, View::Form)
        .into_iter()
        .map(|r| r.collection_name())
        .collect();
    let header_fields = header::header_fields(&resource.fields)
        .into_iter()
        .map(|f| f.name.clone())
        .collect();

    Ok(ResourceReport {
        field_count: resource.fields.len(),
        path: resource.path,
        form_fields,
        form_collections,
        header_fields,
        warnings,
    })
}
