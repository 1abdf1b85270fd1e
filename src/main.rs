mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<ExitCode> {
    let cli = Cli::parse();
    let config = formcraft::config::load_config(Path::new(&cli.config))?;

    match cli.command {
        Commands::FormView {
            model_name,
            resource_file,
            views_directory,
            routes_prefix,
            language_file_name,
            layout_name,
            template_name,
            force,
            dry_run,
            verbose,
        } => commands::form_view::run(
            formcraft::config::FormViewOptions {
                model_name,
                resource_file,
                views_directory,
                routes_prefix,
                language_file_name,
                layout_name,
                template_name,
                force,
            },
            &config,
            dry_run,
            verbose,
        ),
        Commands::Check { resource_file } => commands::check::run(resource_file, &config),
    }
}
