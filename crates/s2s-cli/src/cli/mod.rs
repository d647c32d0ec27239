//! CLI for the s2s site-to-site client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_check, run_cluster, run_config_path, run_resolve, run_resource};

/// Top-level CLI for the s2s site-to-site client.
#[derive(Debug, Parser)]
#[command(name = "s2s")]
#[command(about = "s2s: resolve site-to-site REST API base URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one or more URLs to their REST API base URL.
    Resolve {
        /// URLs as an operator would enter them (e.g. http://host:8080/nifi).
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print a JSON array of {input, base_url} objects.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a comma-separated cluster URL list.
    Cluster {
        /// Comma-separated node URLs.
        urls: String,
        /// Print a JSON array of base URLs.
        #[arg(long)]
        json: bool,
    },

    /// Resolve every cluster URL in the config file.
    Check {
        /// Config file to read instead of the default XDG location.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Print the request URL for a resource under a base URL.
    Resource {
        /// Base URL; resolved before joining.
        base: String,
        /// Resource path (e.g. /site-to-site or /controller).
        resource: String,
    },

    /// Print the default config file location.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve { urls, json } => run_resolve(&urls, json)?,
            CliCommand::Cluster { urls, json } => run_cluster(&urls, json)?,
            CliCommand::Check { config } => run_check(config.as_deref())?,
            CliCommand::Resource { base, resource } => run_resource(&base, &resource)?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
