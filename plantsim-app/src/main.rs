use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use plantsim_core::presentation::{slider, Locale};
use plantsim_schemas::{Environment, EnvironmentKey};
use std::{
    io,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

mod config;
mod plotting;
mod workflow;

#[derive(Debug, Parser)]
#[command(author, version, about = "Interactive plant environment simulator")]
struct Cli {
    /// Optional YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display language for labels (en, ar)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a single environment
    Classify {
        #[command(flatten)]
        environment: EnvironmentArgs,

        /// Print the plant state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Adjust the environment interactively from stdin
    Shell,
    /// Replay a YAML command script and write its transcript
    Run {
        #[arg(long)]
        script: PathBuf,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Draw the temperature/water status map at a fixed wind speed
    Map {
        #[arg(long, default_value_t = Environment::INITIAL.wind)]
        wind: f64,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Draw the plant for an environment as SVG
    Render {
        #[command(flatten)]
        environment: EnvironmentArgs,

        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct EnvironmentArgs {
    /// Temperature in °C
    #[arg(long, default_value_t = Environment::INITIAL.temperature, allow_negative_numbers = true)]
    temperature: f64,

    /// Wind speed in km/h
    #[arg(long, default_value_t = Environment::INITIAL.wind)]
    wind: f64,

    /// Water level in percent
    #[arg(long, default_value_t = Environment::INITIAL.water)]
    water: f64,
}

impl EnvironmentArgs {
    /// Validates each value against its slider.
    fn to_environment(&self) -> Result<Environment> {
        Ok(Environment::new(
            slider(EnvironmentKey::Temperature).accept(self.temperature)?,
            slider(EnvironmentKey::Wind).accept(self.wind)?,
            slider(EnvironmentKey::Water).accept(self.water)?,
        ))
    }
}

fn main() -> Result<()> {
    // Default to INFO level if RUST_LOG is not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::AppConfig::load(cli.config.as_deref())?;
    let locale = match cli.locale.as_deref() {
        Some(code) => Locale::from_code(code).with_context(|| format!("Unsupported locale '{}'", code))?,
        None => config.locale,
    };
    let output_dir = |flag: Option<PathBuf>| flag.unwrap_or_else(|| Path::new(&config.output_dir).to_path_buf());

    match cli.command {
        Command::Classify { environment, json } => {
            workflow::run_classify(environment.to_environment()?, locale, json)?;
        }
        Command::Shell => {
            let stdin = io::stdin();
            workflow::run_shell(stdin.lock(), io::stdout(), locale)?;
        }
        Command::Run { script, output } => {
            let run_dir = workflow::run_script(&script, &output_dir(output), locale)?;
            println!("\nReplay complete. Results are in '{}'", run_dir.display());
        }
        Command::Map { wind, output } => {
            workflow::run_map(wind, config.map_resolution, &output_dir(output), locale)?;
        }
        Command::Render { environment, output } => {
            workflow::run_render(environment.to_environment()?, &output_dir(output), locale)?;
        }
    }

    Ok(())
}
