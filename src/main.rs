//! blog-config - check and print the blog's site configuration.

mod cli;

use anyhow::Result;
use blog_config::{SiteConfig, init_config, log, navigation};
use clap::Parser;
use cli::{Cli, Commands, Format};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Check => {
            let config = SiteConfig::load(&cli.config)?;
            log!(
                "check";
                "ok: `{}`, {} per page, {} menu entries",
                config.site_metadata.title,
                config.items_per_page,
                config.navigation.len()
            );
            Ok(())
        }
        Commands::Show { format } => {
            let config = load_config(cli)?;
            let text = match format {
                Format::Toml => config.to_toml()?,
                Format::Json => config.to_json()?,
            };
            println!("{}", text.trim_end());
            Ok(())
        }
        Commands::Nav => {
            init_config(load_config(cli)?)?;
            for entry in navigation() {
                println!("{}\t{}", entry.href, entry.title);
            }
            Ok(())
        }
    }
}

/// Load and validate the config file, or use the built-in one if it is absent
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    if cli.config.exists() {
        SiteConfig::load(&cli.config)
    } else {
        log!("config"; "`{}` not found, using built-in config", cli.config.display());
        Ok(SiteConfig::default())
    }
}
