//! CLI for the hubres catalog resolver.

mod commands;
mod request;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hubres_core::config::{self, HubConfig};
use hubres_core::url_pattern::UrlPattern;
use hubres_core::{HubResolver, Resolver};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use commands::{run_info, run_pattern, run_resolve, run_validate};

/// Top-level CLI for the hubres resolver.
#[derive(Debug, Parser)]
#[command(name = "hubres")]
#[command(about = "hubres: fetch Tekton Task/Pipeline manifests from a Hub catalog", long_about = None)]
pub struct Cli {
    /// Catalog base URL; overrides HUB_API and the config file.
    #[arg(long, global = true, value_name = "URL")]
    pub hub_api: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a manifest and print its YAML.
    Resolve {
        /// Resolution parameters as key=value (kind, name, version).
        #[arg(value_name = "KEY=VALUE", required = true)]
        params: Vec<String>,

        /// Write the manifest to a file instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Give up after this many seconds.
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Check resolution parameters without contacting the catalog.
    Validate {
        /// Resolution parameters as key=value (kind, name, version).
        #[arg(value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Print the effective lookup URL pattern.
    Pattern,

    /// Print the resolver name and selector labels.
    Info,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                params,
                output,
                timeout,
            } => {
                let resolver: Arc<dyn Resolver> = Arc::new(configured_hub(cli.hub_api)?);
                resolver.initialize()?;
                run_resolve(resolver.as_ref(), &params, output.as_deref(), timeout)?;
            }
            CliCommand::Pattern => run_pattern(configured_hub(cli.hub_api)?.pattern()),
            CliCommand::Validate { params } => {
                run_validate(&unconfigured_hub(), &params, &mut std::io::stdout().lock())?
            }
            CliCommand::Info => run_info(&unconfigured_hub(), &mut std::io::stdout().lock())?,
        }

        Ok(())
    }
}

/// Config precedence: `--hub-api` > `HUB_API` > config file > built-in default.
/// An empty `--hub-api` counts as unset.
pub(crate) fn effective_config<F>(
    file: Option<&Path>,
    env: F,
    hub_api: Option<String>,
) -> Result<HubConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = config::load_with(file, env).context("load config")?;
    if let Some(hub_api) = hub_api.filter(|v| !v.trim().is_empty()) {
        cfg.hub_api = Some(hub_api);
    }
    Ok(cfg)
}

/// Hub resolver built from the on-disk config, the environment and `--hub-api`.
fn configured_hub(hub_api: Option<String>) -> Result<HubResolver> {
    let file = config::config_path().context("locate config")?;
    let cfg = effective_config(file.as_deref(), |key| std::env::var(key).ok(), hub_api)?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(HubResolver::from_config(&cfg)?)
}

/// Name, selector and validation do not depend on the catalog URL, so these
/// commands skip config loading entirely.
fn unconfigured_hub() -> HubResolver {
    HubResolver::new(UrlPattern::default())
}

#[cfg(test)]
mod tests;
