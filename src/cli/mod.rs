//! CLI module for Sampler.
//!
//! Commands:
//! - generate: build a sample request for an endpoint descriptor
//! - sample: print one sample value
//! - config: print the effective configuration

pub mod generate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sampler")]
#[command(about = "Sampler - sample HTTP requests for detected API endpoints", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ./sampler.toml)
    #[arg(short, long, default_value = "sampler.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample request from an endpoint descriptor (JSON)
    Generate {
        /// Endpoint descriptor file
        #[arg(short, long)]
        endpoint: PathBuf,

        /// Plain base URL
        #[arg(short, long, conflicts_with = "environment", required_unless_present = "environment")]
        base_url: Option<String>,

        /// Environment descriptor file (base URL, base path, headers)
        #[arg(short = 'n', long)]
        environment: Option<PathBuf>,

        /// Parsed class definitions to load into the cache (JSON array)
        #[arg(long)]
        classes: Option<PathBuf>,

        /// Suppress unresolved-type warnings (environment mode)
        #[arg(short, long)]
        preview: bool,

        /// Print warnings as `location|message|remediation` strings
        #[arg(short, long)]
        wire: bool,
    },

    /// Print the sample value for a type and optional field name
    Sample {
        /// Declared type (e.g. "int", "string?", "Guid")
        type_name: String,

        /// Field name used by the name heuristics
        field: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}
