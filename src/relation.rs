use crate::resource::{Field, ForeignRelation, View};

/// Relations of the fields visible on `view`, in field order.
pub fn resolve(fields: &[Field], view: View) -> Vec<&ForeignRelation> {
    fields
        .iter()
        .filter_map(|field| match (&field.relation, field.is_on_view(view)) {
            (Some(relation), true) => Some(relation),
            (Some(_), false) | (None, _) => None,
        })
        .collect()
}
