//! Builds the `compact(...)` argument list a controller passes to the view.

use crate::relation;
use crate::resource::{Field, ForeignRelation, View};

/// Join variable names as quoted PHP strings: `'post','categories'`.
///
/// Returns an empty string when there is nothing to pass.
pub fn build(model_name: &str, relations: &[&ForeignRelation]) -> String {
    let mut variables = Vec::with_capacity(relations.len() + 1);

    if !model_name.is_empty() {
        variables.push(model_name.to_string());
    }
    variables.extend(relations.iter().map(|r| r.collection_name()));

    compact_variables(&variables)
}

fn compact_variables(variables: &[String]) -> String {
    if variables.is_empty() {
        return String::new();
    }

    variables
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compact expression for the form view: the record variable plus one
/// collection per relation visible on the form.
pub fn compact_variables_for(fields: &[Field], singular_variable: &str) -> String {
    let relations = relation::resolve(fields, View::Form);
    build(singular_variable, &relations)
}
