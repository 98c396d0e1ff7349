use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::storage::Format;

/// Runtime configuration.
///
/// Loaded from an optional TOML file; any value may be overridden on the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Where animals are saved to and loaded from.
    data_file: PathBuf,

    /// The format of the data file.
    format: Format,

    /// Whether to start with the sample animals.
    ///
    /// When `false`, the session starts with empty lists.
    seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            format: Format::default(),
            seed: default_seed(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// The data file location.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Sets the data file location.
    pub fn set_data_file(&mut self, path: PathBuf) {
        self.data_file = path;
    }

    /// The data file format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Sets the data file format.
    pub const fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// Whether to start with the sample animals.
    #[must_use]
    pub const fn seed(&self) -> bool {
        self.seed
    }

    /// Sets whether to start with the sample animals.
    pub const fn set_seed(&mut self, seed: bool) {
        self.seed = seed;
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("animals.txt")
}

const fn default_seed() -> bool {
    true
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: PathBuf,

        #[serde(default)]
        format: Format,

        #[serde(default = "default_seed")]
        seed: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                format,
                seed,
            } => Self {
                data_file,
                format,
                seed,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_file: config.data_file,
            format: config.format,
            seed: config.seed,
        }
    }
}
