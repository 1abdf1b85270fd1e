use crate::naming;
use crate::resource::{Field, View};

/// Fields that label a record, plus the Blade expression that prints them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDescriptor {
    pub fields: Vec<String>,
    pub accessor: String,
}

/// Candidate header fields in field order.
///
/// Fields flagged `is-header` win; otherwise the first textual field shown on
/// any view is used.
pub fn header_fields(fields: &[Field]) -> Vec<&Field> {
    let flagged: Vec<&Field> = fields.iter().filter(|f| f.is_header()).collect();
    if !flagged.is_empty() {
        return flagged;
    }

    fields
        .iter()
        .find(|f| {
            f.html_type.is_textual() && View::ALL.iter().any(|view| f.is_on_view(*view))
        })
        .into_iter()
        .collect()
}

pub fn derive(fields: &[Field], model_name: &str) -> HeaderDescriptor {
    let candidates = header_fields(fields);
    let variable = naming::singular_variable(model_name);
    let fallback = naming::title(model_name);

    let accessor = if candidates.is_empty() {
        fallback
    } else {
        candidates
            .iter()
            .map(|field| {
                format!(
                    "{{{{ isset(${variable}->{name}) ? ${variable}->{name} : '{fallback}' }}}}",
                    name = field.name
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    HeaderDescriptor {
        fields: candidates.iter().map(|f| f.name.clone()).collect(),
        accessor,
    }
}
