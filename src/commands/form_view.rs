use std::process::ExitCode;

use console::style;
use miette::Result;

use formcraft::config::{FormViewOptions, GeneratorConfig};
use formcraft::error::CraftError;
use formcraft::writer::WriteMode;

/// Exit status for a run that was skipped because the view already exists.
const EXIT_SKIPPED: u8 = 2;

pub fn run(
    options: FormViewOptions,
    config: &GeneratorConfig,
    dry_run: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let plan = match formcraft::plan_form_view(options, config) {
        Ok(plan) => plan,
        Err(err) if err.is_skip() => return Ok(report_skipped(&err)),
        Err(err) => return Err(err.into()),
    };

    if dry_run {
        let action = match plan.mode {
            WriteMode::Create => "create   ",
            WriteMode::Overwrite => "overwrite",
        };
        println!(
            "\n{} Dry run \u{2014} form view for {}:",
            style("==>").cyan().bold(),
            style(&plan.input.model_name).cyan()
        );
        println!(
            "  {} {}",
            style(action).green(),
            plan.destination.display()
        );
        println!(
            "  {} {}",
            style("variables").dim(),
            if plan.view_variables.is_empty() {
                "(none)"
            } else {
                plan.view_variables.as_str()
            }
        );

        if verbose {
            println!("  {}", style("──────").dim());
            match plan.mode {
                WriteMode::Overwrite => {
                    let existing = std::fs::read_to_string(&plan.destination).map_err(|e| {
                        CraftError::Io {
                            context: format!("reading {}", plan.destination.display()),
                            source: e,
                        }
                    })?;
                    let diff = formcraft::writer::unified_diff(
                        &existing,
                        &plan.view.text,
                        &plan.destination,
                    );
                    if diff.is_empty() {
                        println!("  {}", style("(no changes)").dim());
                    }
                    for line in diff.lines() {
                        println!("  {}", line);
                    }
                }
                WriteMode::Create => {
                    for line in plan.view.text.lines() {
                        println!("  {}", line);
                    }
                }
            }
            println!("  {}", style("──────").dim());
        }

        println!(
            "\n{} Dry run \u{2014} no files written.",
            style("\u{2139}").blue().bold()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let generated = formcraft::execute_form_view(plan)?;

    println!(
        "\n{} Form view was crafted successfully.",
        style("✓").green().bold()
    );
    println!("  {}", style(generated.path.display()).cyan());
    if generated.mode == WriteMode::Overwrite {
        println!("  {}", style("(replaced the existing view)").dim());
    }
    if generated.language.added.is_empty() {
        println!(
            "  language file {} is up to date",
            style(generated.language.path.display()).cyan()
        );
    } else {
        println!(
            "  {} translation(s) added to {}",
            generated.language.added.len(),
            style(generated.language.path.display()).cyan()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn report_skipped(err: &CraftError) -> ExitCode {
    eprintln!("{} {}", style("skipped:").yellow().bold(), err);
    eprintln!("  use --force to overwrite it");
    ExitCode::from(EXIT_SKIPPED)
}
