use std::{fs, path::Path, path::PathBuf};

use miette::{Context, IntoDiagnostic};
use serde::{Deserialize, Serialize};

use crate::consts::START_FEN;
use crate::board::RenderStyle;
use crate::utils::log::DEFAULT_LOG_DIR;

/// Settings read from a TOML file. Every key is optional.
///
/// ```toml
/// fen = "8/8/8/4r3/8/8/8/4R3 w - - 0 1"
/// render = "unicode"
///
/// [log]
/// level = "debug"
/// file = true
/// dir = "/tmp/chessrays_logs"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fen: String,
    pub render: RenderStyle,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Console level; when unset `RUST_LOG` (or INFO) stays in charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub file: bool,
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fen: START_FEN.to_string(),
            render: RenderStyle::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: false,
            dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> miette::Result<Option<tracing::Level>> {
        self.level
            .as_deref()
            .map(|level| {
                level
                    .parse()
                    .into_diagnostic()
                    .with_context(|| format!("Invalid log level '{level}'"))
            })
            .transpose()
    }

    /// Console level to apply at startup: the command line flag, then the
    /// config file. `None` leaves the `RUST_LOG` filter alone.
    pub fn resolve_level(
        &self,
        cli_level: Option<tracing::Level>,
    ) -> miette::Result<Option<tracing::Level>> {
        match cli_level {
            Some(level) => Ok(Some(level)),
            None => self.level(),
        }
    }
}

impl Config {
    /// Save to TOML File
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> miette::Result<()> {
        let toml_string = toml::to_string_pretty(self).into_diagnostic()?;
        fs::write(path, toml_string).into_diagnostic()?;
        Ok(())
    }

    /// Load from a TOML File
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> miette::Result<Self> {
        let path = path.as_ref();
        let file_content = fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("Reading config {}", path.display()))?;
        Self::from_toml(&file_content).with_context(|| format!("Parsing config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).into_diagnostic()
    }

    /// Default config, or the file at `path` if one was given.
    pub fn load_or_default(path: Option<&Path>) -> miette::Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
