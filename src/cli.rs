use std::{io, path::PathBuf};

mod intake;
mod persist;
mod prompt;
mod report;
mod reserve;
mod search;
mod session;
mod terminal;

use clap::ArgAction;
use prompt::Prompt;
use rescue::{AnimalFile, Config, Format, Repository};
use session::Session;
use terminal::Palette;
use tracing::{info, instrument};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The file animals are saved to and loaded from [default: animals.txt]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// The format of the data file [default: delimited]
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Start with empty lists instead of the sample animals
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.config()?;
        let repository = if config.seed() {
            Repository::with_samples()
        } else {
            Repository::new()
        };
        let store = AnimalFile::new(config.data_file().to_path_buf(), config.format());
        info!(
            animals = repository.len(),
            file = %store.path().display(),
            format = %store.format(),
            "starting session"
        );

        let prompt = Prompt::new(io::stdin().lock(), io::stdout().lock());
        Session::new(repository, store, prompt, Palette::detect()).run()?;
        Ok(())
    }

    /// Reads the configuration file, if any, then applies command-line
    /// overrides.
    #[instrument(level = "debug", skip(self))]
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))?,
            None => Config::default(),
        };

        if let Some(file) = &self.file {
            config.set_data_file(file.clone());
        }
        if let Some(format) = self.format {
            config.set_format(format);
        }
        if self.no_seed {
            config.set_seed(false);
        }
        Ok(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // The menu owns stdout.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
