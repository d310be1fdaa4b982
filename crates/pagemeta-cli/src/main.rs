use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use eyre::{bail, eyre, Result};
use pagemeta_core::SiteConfig;
use pagemeta_jsonld::{validate_config, validate_schema};
use pagemeta_presets::{
    article_page, profile_directory, profile_page, video_library, video_page,
};
use serde_json::Value;
use tracing::info;

#[derive(Parser)]
#[command(name = "pagemeta")]
#[command(about = "Generate JSON-LD and meta-tag head markup from content records")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL, overriding any configuration file
    #[arg(short, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render head markup for a page
    Render {
        /// Page kind to render
        #[arg(value_enum)]
        kind: PageKind,

        /// Path to the content record (JSON); required for record-backed kinds
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Search term the visitor arrived with
        #[arg(short, long)]
        search_term: Option<String>,
    },
    /// Validate a JSON-LD payload file, or the configuration when no input
    /// is given
    Validate {
        /// Path to the payload (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageKind {
    /// Expert profile page
    Profile,
    /// Expert directory landing page
    Directory,
    /// Single video page
    Video,
    /// Video library landing page
    Library,
    /// Blog article page
    Article,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Render {
            kind,
            input,
            search_term,
        } => {
            let page = match kind {
                PageKind::Profile => {
                    let record = read_record(input.as_deref(), "profile")?;
                    profile_page(&record, &config, search_term.as_deref())
                }
                PageKind::Directory => profile_directory(&config),
                PageKind::Video => {
                    let record = read_record(input.as_deref(), "video")?;
                    video_page(&record, &config)
                }
                PageKind::Library => video_library(&config),
                PageKind::Article => {
                    let record = read_record(input.as_deref(), "article")?;
                    article_page(&record, &config)
                }
            };

            info!(
                blocks = page.blocks.len(),
                tags = page.meta_tags.len(),
                "rendered page metadata"
            );
            println!("{}", page.head_html());
        }
        Commands::Validate { input } => match input {
            Some(path) => {
                let payload = read_json(path)?;
                let report = validate_schema(&payload);
                print_report(&report.errors)?;
            }
            None => {
                let report = validate_config(&config);
                print_report(&report.errors)?;
            }
        },
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    if let Some(path) = &cli.config {
        let mut config = SiteConfig::load(path)?;
        if let Some(base_url) = &cli.base_url {
            config.base_url = base_url.clone();
        }
        return Ok(config);
    }

    let base_url = cli
        .base_url
        .as_ref()
        .ok_or_else(|| eyre!("either --config or --base-url is required"))?;
    Ok(SiteConfig::new(base_url))
}

fn read_record(input: Option<&Path>, kind: &str) -> Result<Value> {
    let path = input.ok_or_else(|| eyre!("--input is required for {kind} pages"))?;
    read_json(path)
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_report(errors: &[String]) -> Result<()> {
    if errors.is_empty() {
        println!("valid");
        return Ok(());
    }

    for error in errors {
        println!("error: {error}");
    }
    bail!("{} validation error(s)", errors.len());
}
