use std::process::ExitCode;

use console::style;
use miette::Result;

use formcraft::check::check_resource;
use formcraft::config::GeneratorConfig;

pub fn run(resource_file: String, config: &GeneratorConfig) -> Result<ExitCode> {
    let report = check_resource(&resource_file, config)?;

    println!(
        "{} {}",
        style("Checking resource at").bold(),
        style(report.path.display()).cyan()
    );
    println!("  Fields: {}", report.field_count);
    println!("  On form: {}", join_or_none(&report.form_fields));
    println!("  View collections: {}", join_or_none(&report.form_collections));
    println!("  Header: {}", join_or_none(&report.header_fields));

    if !report.warnings.is_empty() {
        println!("\n{}", style("Warnings:").yellow().bold());
        for w in &report.warnings {
            println!("  {} {}", style("⚠").yellow(), w);
        }
    }

    println!("\n{} Resource is valid!", style("✓").green().bold());
    Ok(ExitCode::SUCCESS)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
