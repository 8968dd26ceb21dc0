use anyhow::{Context, Result};
use clap::Parser;
use markdown_hawk_config::Config;
use markdown_hawk_engine::{Hawk, RenderOptions};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Render a markdown document to HTML.
#[derive(Debug, Parser)]
#[command(name = "markdown-hawk", version, about)]
struct Cli {
    /// Document to render. Reads stdin when absent or `-`.
    file: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Turn every line break into `<br />`.
    #[arg(long)]
    breaks: bool,

    /// Leave bare URLs as plain text.
    #[arg(long)]
    no_urls: bool,

    /// Escape raw HTML instead of passing it through.
    #[arg(long)]
    escape_markup: bool,

    /// Prefix for `%Page Name%` internal links.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Deepest nesting of quotes, lists and inline elements rendered.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
}

impl Cli {
    /// Flags given on the command line win over the config file.
    fn apply(&self, options: &mut RenderOptions) {
        if self.breaks {
            options.breaks_enabled = true;
        }
        if self.no_urls {
            options.urls_linked = false;
        }
        if self.escape_markup {
            options.raw_html_allowed = false;
        }
        if let Some(base_url) = &self.base_url {
            options.internal_link_base_url = base_url.clone();
        }
        if let Some(depth) = self.max_depth {
            options.max_nesting_depth = depth;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let mut options = load_options(cli.config.as_deref())?;
    cli.apply(&mut options);

    let document = read_document(cli.file.as_deref())?;
    let html = Hawk::new(options).render(&document);
    println!("{html}");

    Ok(())
}

fn load_options(config_path: Option<&Path>) -> Result<RenderOptions> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    Ok(config.map(|config| config.render).unwrap_or_default())
}

fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut document = String::new();
            io::stdin()
                .read_to_string(&mut document)
                .context("reading stdin")?;
            Ok(document)
        }
    }
}
