use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "formcraft",
    about = "Generate Blade form views from resource descriptions",
    version
)]
pub struct Cli {
    /// Path to formcraft.toml or the directory containing it
    #[arg(long, global = true, default_value = ".")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a form view for a model
    FormView {
        /// The model name that this view will represent
        model_name: String,

        /// The name of the resource file to import from (default: snake-case model name)
        #[arg(long)]
        resource_file: Option<String>,

        /// The directory to create the views under
        #[arg(long)]
        views_directory: Option<String>,

        /// Prefix of the route group
        #[arg(long)]
        routes_prefix: Option<String>,

        /// The name of the language file (default: plural snake-case model name)
        #[arg(long = "language-filename")]
        language_file_name: Option<String>,

        /// The layout the view extends (default from config: layouts.app)
        #[arg(long)]
        layout_name: Option<String>,

        /// The template family to use when generating the code
        #[arg(long)]
        template_name: Option<String>,

        /// Overwrite the view if one already exists
        #[arg(long)]
        force: bool,

        /// Show what would be written without touching the file system
        #[arg(long)]
        dry_run: bool,

        /// With --dry-run, print the generated view or a diff against the existing one
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a resource file
    Check {
        /// Resource file name or path
        resource_file: String,
    },
}
