//! dealscale-seo - SEO metadata and JSON-LD generator for the DealScale site.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use dealscale_seo::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
    log,
};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name } => cli::init::new_site(&config, name.is_some()),
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Inspect { args } => cli::inspect::run_inspect(args, &config),
        Commands::Validate { args } => cli::validate::validate_site(args, &config),
    }
}
