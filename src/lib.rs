pub mod check;
pub mod compact;
pub mod config;
pub mod error;
pub mod header;
pub mod html;
pub mod language;
pub mod naming;
pub mod relation;
pub mod resource;
pub mod stub;
pub mod writer;

use std::path::PathBuf;

use console::style;

use crate::config::{CommandInput, FormViewOptions, GeneratorConfig};
use crate::error::Result;
use crate::header::HeaderDescriptor;
use crate::html::HtmlGenerator;
use crate::language::LanguageFileUpdate;
use crate::resource::Resource;
use crate::stub::{load_stub, LoadedStub, PlaceholderMap, RenderedView};
use crate::writer::WriteMode;

pub const FORM_STUB: &str = "form.blade";

/// Everything needed to write a form view that has been planned but not yet written.
pub struct FormViewPlan {
    pub input: CommandInput,
    pub resource: Resource,
    pub destination: PathBuf,
    pub mode: WriteMode,
    pub header: HeaderDescriptor,
    pub view_variables: String,
    pub view: RenderedView,
}

pub struct GeneratedView {
    pub path: PathBuf,
    pub mode: WriteMode,
    pub language: LanguageFileUpdate,
}

/// Placeholders shared by every view of a model.
pub fn common_placeholders(input: &CommandInput) -> PlaceholderMap {
    let model = &input.model_name;
    PlaceholderMap::new()
        .with("layout_name", &input.layout_name)
        .with("model_name_title", naming::title(model))
        .with("model_name_plural_title", naming::plural_title(model))
        .with("model_name_class", naming::class_name(model))
        .with("model_name_snake", naming::snake(model))
        .with("model_name_singular_variable", naming::singular_variable(model))
        .with("model_name_plural_variable", naming::plural_variable(model))
        .with("index_route_name", input.route_name("index"))
        .with("store_route_name", input.route_name("store"))
        .with("update_route_name", input.route_name("update"))
        .with("translation_file", &input.language_file_name)
        .with(
            "view_name",
            writer::view_name(
                input.views_directory.as_deref(),
                input.routes_prefix.as_deref(),
                model,
            ),
        )
}

/// Placeholders in the order the form view registers them: common templates,
/// model name, field markup, view variables, model header.
pub fn form_placeholders(
    input: &CommandInput,
    html_fields: &str,
    view_variables: &str,
    header: &HeaderDescriptor,
) -> PlaceholderMap {
    let mut placeholders = common_placeholders(input);
    placeholders.extend(
        PlaceholderMap::new()
            .with("model_name", &input.model_name)
            .with("form_fields_html", html::indent(html_fields, 16))
            .with("view_variables", view_variables)
            .with("model_header", &header.accessor),
    );
    placeholders
}

/// Plan a form view: resolve options, load the resource and stub, render in memory.
///
/// Fails with `DestinationExists` before anything is rendered when the view
/// already exists and `force` is not set. Nothing is written to disk.
pub fn plan_form_view(options: FormViewOptions, config: &GeneratorConfig) -> Result<FormViewPlan> {
    let input = CommandInput::resolve(options, config)?;

    let resource = resource::load(
        &input.resource_file,
        &input.resource_files_path,
        Some(&input.language_file_name),
    )?;

    let destination = writer::destination(
        &input.views_path,
        input.views_directory.as_deref(),
        input.routes_prefix.as_deref(),
        &input.model_name,
    );
    let mode = writer::check_destination(&destination, input.force, &resource)?;

    let stub = load_stub(&input.stubs_path, &input.template_name, FORM_STUB)?;
    let generator = HtmlGenerator::new(
        &resource.fields,
        &input.model_name,
        &input.template_name,
        config,
    )
    .with_language_file(&input.language_file_name);

    let header = generator.header();
    let view_variables = compact::compact_variables_for(
        &resource.fields,
        &naming::singular_variable(&input.model_name),
    );
    let placeholders =
        form_placeholders(&input, &generator.html_fields(), &view_variables, &header);
    let view = render_stub(&stub, &placeholders);

    Ok(FormViewPlan {
        input,
        resource,
        destination,
        mode,
        header,
        view_variables,
        view,
    })
}

fn render_stub(loaded: &LoadedStub, placeholders: &PlaceholderMap) -> RenderedView {
    for token in stub::unknown_tokens(&loaded.text, placeholders) {
        eprintln!(
            "{} unknown placeholder {} left in stub '{}' ({})",
            style("warning:").yellow().bold(),
            style(stub::token(&token)).yellow(),
            loaded.name,
            loaded.template_name,
        );
    }

    loaded.render(placeholders)
}

/// Write a planned form view, then create or update its language file.
pub fn execute_form_view(plan: FormViewPlan) -> Result<GeneratedView> {
    writer::create_file(&plan.destination, &plan.view.text)?;

    let language = language::create_language_file(
        &plan.input.languages_path,
        &plan.input.locale,
        &plan.input.language_file_name,
        &plan.resource,
        &plan.input.model_name,
    )?;

    Ok(GeneratedView {
        path: plan.destination,
        mode: plan.mode,
        language,
    })
}

/// Generate a form view for a model.
pub fn create_form_view(
    options: FormViewOptions,
    config: &GeneratorConfig,
) -> Result<GeneratedView> {
    let plan = plan_form_view(options, config)?;
    execute_form_view(plan)
}
