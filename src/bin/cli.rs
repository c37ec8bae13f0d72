//! Sampler CLI - generate sample requests from descriptor files.

use clap::Parser;
use sampler::cli::generate::{self, GenerateArgs};
use sampler::cli::{Cli, Commands};
use sampler::SamplerConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SamplerConfig::load(&cli.config);

    match cli.command {
        Commands::Generate {
            endpoint,
            base_url,
            environment,
            classes,
            preview,
            wire,
        } => {
            let args = GenerateArgs {
                endpoint: &endpoint,
                base_url: base_url.as_deref(),
                environment: environment.as_deref(),
                classes: classes.as_deref(),
                preview,
                wire,
            };
            println!("{}", generate::generate(config, &args)?);
        }

        Commands::Sample { type_name, field } => {
            println!("{}", generate::sample(&type_name, field.as_deref()));
        }

        Commands::Config => {
            print!("{}", generate::show_config(&config)?);
        }
    }

    Ok(())
}
