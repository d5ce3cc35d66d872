//! smails CLI
//!
//! Developer tool for scaffolding, listing and rendering email templates.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// smails - Render components to email-ready HTML
#[derive(Parser)]
#[command(name = "smails")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "smails.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new smails project
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Project name (defaults to directory name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all mails
    List,

    /// Render a single mail to HTML
    Render {
        /// Mail name
        mail: String,

        /// YAML or JSON props file (overrides the mail's props.yaml)
        #[arg(short, long)]
        props: Option<String>,

        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render every mail into the output directory
    Build {
        /// Build a specific mail only
        #[arg(short, long)]
        mail: Option<String>,
    },

    /// Validate configuration and templates without rendering
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so rendered HTML on stdout stays clean)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Init { path, name } => {
            commands::init::run(&path, name.as_deref()).await?;
        }
        Commands::List => {
            commands::list::run(&cli.config).await?;
        }
        Commands::Render {
            mail,
            props,
            output,
        } => {
            commands::render::run(&cli.config, &mail, props.as_deref(), output.as_deref())
                .await?;
        }
        Commands::Build { mail } => {
            commands::build::run(&cli.config, mail.as_deref()).await?;
        }
        Commands::Validate => {
            commands::validate::run(&cli.config).await?;
        }
    }

    Ok(())
}
