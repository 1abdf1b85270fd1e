//! Blade markup for the fields of a form.
//!
//! Every view variable referenced here is named through [`naming`] and
//! [`ForeignRelation::collection_name`], the same functions the compact
//! expression is built from, so the generated controller call and the view
//! always agree on variable names.

use crate::config::{GeneratorConfig, TemplateStyle};
use crate::header::{self, HeaderDescriptor};
use crate::naming;
use crate::relation;
use crate::resource::{Field, ForeignRelation, HtmlType, View};

pub struct HtmlGenerator<'a> {
    fields: &'a [Field],
    model_name: &'a str,
    style: TemplateStyle,
    language_file: Option<&'a str>,
}

impl<'a> HtmlGenerator<'a> {
    /// Markup classes come from the `[templates.<template_name>]` config section.
    pub fn new(
        fields: &'a [Field],
        model_name: &'a str,
        template_name: &str,
        config: &GeneratorConfig,
    ) -> Self {
        Self {
            fields,
            model_name,
            style: config.style_for(template_name),
            language_file: None,
        }
    }

    /// Print labels through `trans()` lookups into this language file.
    pub fn with_language_file(mut self, language_file: &'a str) -> Self {
        self.language_file = Some(language_file);
        self
    }

    /// Markup for every field visible on the form, in field order.
    pub fn html_fields(&self) -> String {
        self.fields
            .iter()
            .filter(|f| f.is_on_view(View::Form))
            .map(|f| self.field_html(f))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn header(&self) -> HeaderDescriptor {
        header::derive(self.fields, self.model_name)
    }

    /// View variables the rendered markup reads: the record, then one collection per relation.
    pub fn referenced_variables(&self) -> Vec<String> {
        let mut variables = vec![self.record_variable()];
        variables.extend(
            relation::resolve(self.fields, View::Form)
                .into_iter()
                .map(ForeignRelation::collection_name),
        );
        variables
    }

    pub fn field_html(&self, field: &Field) -> String {
        // A relation always renders as its selector, whatever the declared type.
        match (&field.relation, field.html_type) {
            (Some(relation), _) => self.group(field, &self.relation_select(field, relation)),
            (None, HtmlType::Hidden) => self.hidden(field),
            (None, HtmlType::Select) => self.group(field, &self.options_select(field)),
            (None, HtmlType::Textarea) => self.group(field, &self.textarea(field)),
            (None, HtmlType::Checkbox) => self.group(field, &self.checkbox(field)),
            (None, HtmlType::Password) => {
                self.group(field, &self.input(field, "password", false))
            }
            (None, HtmlType::Email) => self.group(field, &self.input(field, "email", true)),
            (None, HtmlType::Number) => self.group(field, &self.input(field, "number", true)),
            (None, HtmlType::Date) => self.group(field, &self.input(field, "date", true)),
            (None, HtmlType::Text) => self.group(field, &self.input(field, "text", true)),
        }
    }

    fn record_variable(&self) -> String {
        naming::singular_variable(self.model_name)
    }

    fn label(&self, field: &Field) -> String {
        match self.language_file {
            Some(file) => format!("{{{{ trans('{file}.{}') }}}}", field.name),
            None => field.label.clone(),
        }
    }

    fn old_value(&self, field: &Field) -> String {
        format!(
            "old('{name}', optional(${record})->{name})",
            name = field.name,
            record = self.record_variable()
        )
    }

    fn group(&self, field: &Field, control: &str) -> String {
        let name = &field.name;
        let style = &self.style;
        let control = indent(control, 8);
        format!(
            r#"<div class="{group} {{{{ $errors->has('{name}') ? 'has-error' : '' }}}}">
    <label for="{name}" class="{label_class}">{label}</label>
    <div class="{wrapper}">
{control}
        {{!! $errors->first('{name}', '<p class="help-block">:message</p>') !!}}
    </div>
</div>"#,
            group = style.group_class,
            label_class = style.label_class,
            wrapper = style.input_wrapper_class,
            label = self.label(field),
        )
    }

    fn input(&self, field: &Field, input_type: &str, with_value: bool) -> String {
        let value = if with_value {
            format!(" value=\"{{{{ {} }}}}\"", self.old_value(field))
        } else {
            String::new()
        };
        format!(
            r#"<input class="{class}" name="{name}" type="{input_type}" id="{name}"{value}>"#,
            class = self.style.input_class,
            name = field.name,
        )
    }

    fn hidden(&self, field: &Field) -> String {
        format!(
            r#"<input name="{name}" type="hidden" id="{name}" value="{{{{ {old} }}}}">"#,
            name = field.name,
            old = self.old_value(field),
        )
    }

    fn textarea(&self, field: &Field) -> String {
        format!(
            r#"<textarea class="{class}" name="{name}" cols="50" rows="10" id="{name}">{{{{ {old} }}}}</textarea>"#,
            class = self.style.input_class,
            name = field.name,
            old = self.old_value(field),
        )
    }

    fn checkbox(&self, field: &Field) -> String {
        format!(
            r#"<input name="{name}" type="hidden" value="0">
<input id="{name}" name="{name}" type="checkbox" value="1" {{{{ {old} ? 'checked' : '' }}}}>"#,
            name = field.name,
            old = self.old_value(field),
        )
    }

    fn relation_select(&self, field: &Field, relation: &ForeignRelation) -> String {
        let collection = relation.collection_name();
        let item = relation.item_variable();
        format!(
            r#"<select class="{class}" id="{name}" name="{name}">
    <option value="" style="display: none;" {{{{ {old} == '' ? 'selected' : '' }}}} disabled>Select {prompt}</option>
    @foreach (${collection} as ${item})
        <option value="{{{{ ${item}->getKey() }}}}" {{{{ {old} == ${item}->getKey() ? 'selected' : '' }}}}>
            {{{{ ${item}->{display} }}}}
        </option>
    @endforeach
</select>"#,
            class = self.style.input_class,
            name = field.name,
            old = self.old_value(field),
            prompt = naming::title(&relation.name).to_lowercase(),
            display = relation.display_field,
        )
    }

    fn options_select(&self, field: &Field) -> String {
        let old = self.old_value(field);
        let mut lines = vec![format!(
            r#"<select class="{class}" id="{name}" name="{name}">"#,
            class = self.style.input_class,
            name = field.name,
        )];
        lines.push(format!(
            r#"    <option value="" style="display: none;" {{{{ {old} == '' ? 'selected' : '' }}}} disabled>Select {}</option>"#,
            field.label.to_lowercase()
        ));
        for (value, text) in &field.options {
            lines.push(format!(
                r#"    <option value="{value}" {{{{ {old} == '{quoted}' ? 'selected' : '' }}}}>{text}</option>"#,
                quoted = php_quote(value),
            ));
        }
        lines.push("</select>".to_string());
        lines.join("\n")
    }
}

fn php_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

pub(crate) fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
