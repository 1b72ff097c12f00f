mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Project-scoped permission checks")]
#[command(version)]
struct Cli {
    /// Path to the Warden config directory (default: ~/.warden)
    #[arg(long, global = true, env = "WARDEN_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an example policy file
    Init,

    /// Show the loaded policy
    Show,

    /// Check a permission in a single project
    Check {
        /// Permission name, e.g. createMetrics
        permission: String,
        /// Project id (default scope if omitted)
        #[arg(long, default_value = "")]
        project: String,
        /// Environment the action targets (repeatable)
        #[arg(long = "env")]
        envs: Vec<String>,
    },

    /// Check creating or deleting a resource
    Resource {
        #[arg(value_enum)]
        action: ResourceAction,
        /// Permission name, e.g. createMetrics
        permission: String,
        /// Project the resource belongs to (repeatable; none = default scope)
        #[arg(long = "project")]
        projects: Vec<String>,
    },

    /// Check updating a resource, optionally reassigning its projects
    Update {
        /// Permission name, e.g. createMetrics
        permission: String,
        /// Project the resource belongs to now (repeatable)
        #[arg(long = "project")]
        projects: Vec<String>,
        /// Destination project (repeatable)
        #[arg(long = "to", conflicts_with = "to_default")]
        to: Vec<String>,
        /// Move the resource into the default scope
        #[arg(long)]
        to_default: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResourceAction {
    Create,
    Delete,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warden=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => warden_auth::PolicyFile::default_base_dir()?,
    };

    match cli.command {
        Commands::Init => commands::init::run(&base_dir),
        Commands::Show => commands::show::run(&base_dir),
        Commands::Check {
            ref permission,
            ref project,
            ref envs,
        } => commands::check::single(&base_dir, permission, project, envs),
        Commands::Resource {
            action,
            ref permission,
            ref projects,
        } => commands::check::resource(&base_dir, action, permission, projects),
        Commands::Update {
            ref permission,
            ref projects,
            ref to,
            to_default,
        } => {
            let destination = if to_default || !to.is_empty() {
                Some(to.as_slice())
            } else {
                None
            };
            commands::check::update(&base_dir, permission, projects, destination)
        }
    }
}
