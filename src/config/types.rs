//! Core configuration types and loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::{
    default_address, default_client, default_log_filter, default_max_line_len, default_true,
};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("input.path is required when input.source = \"file\"")]
    MissingInputPath,
    #[error("input.max_line_len must be greater than zero")]
    ZeroMaxLineLen,
}

/// Harness configuration.
///
/// Every section is optional; an empty file (or no file at all) reads
/// server lines from stdin, echoes them and prints a text summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Where server lines come from.
    #[serde(default)]
    pub input: InputConfig,
    /// What gets written to stdout.
    #[serde(default)]
    pub output: OutputConfig,
    /// Log filter and format.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.source == Source::File && self.input.path.is_none() {
            return Err(ConfigError::MissingInputPath);
        }
        if self.input.max_line_len == 0 {
            return Err(ConfigError::ZeroMaxLineLen);
        }
        Ok(())
    }
}

/// Input source kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Standard input, e.g. a piped session capture.
    #[default]
    Stdin,
    /// A session capture on disk.
    File,
    /// A live server connection.
    Tcp,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stdin => "stdin",
            Self::File => "file",
            Self::Tcp => "tcp",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Source kind: "stdin", "file" or "tcp".
    #[serde(default)]
    pub source: Source,
    /// Capture file (required for `source = "file"`).
    pub path: Option<PathBuf>,
    /// Server address for `source = "tcp"`.
    #[serde(default = "default_address")]
    pub address: String,
    /// Longest accepted line in bytes, terminator included.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
    /// CLIP login sent after connecting (tcp only).
    pub login: Option<LoginConfig>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source: Source::default(),
            path: None,
            address: default_address(),
            max_line_len: default_max_line_len(),
            login: None,
        }
    }
}

impl InputConfig {
    /// Human-readable name of the selected source, for logs.
    pub fn describe(&self) -> String {
        match self.source {
            Source::Stdin => "-".to_string(),
            Source::File => self
                .path
                .as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            Source::Tcp => self.address.clone(),
        }
    }
}

/// CLIP login credentials.
#[derive(Clone, Deserialize)]
pub struct LoginConfig {
    pub user: String,
    pub password: String,
    /// Client name announced to the server.
    #[serde(default = "default_client")]
    pub client: String,
}

impl LoginConfig {
    /// The `login` command for this account at the supported CLIP revision.
    pub fn command(&self) -> String {
        format!(
            "login {} {} {} {}",
            self.client,
            fibs_cookie::CLIP_VERSION,
            self.user,
            self.password
        )
    }
}

impl std::fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("client", &self.client)
            .finish()
    }
}

/// Summary format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Print `code: line` for every line.
    #[serde(default = "default_true")]
    pub echo: bool,
    /// Print the tally once input ends.
    #[serde(default = "default_true")]
    pub summary: bool,
    #[serde(default)]
    pub format: SummaryFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            echo: true,
            summary: true,
            format: SummaryFormat::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of the human format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.input.source, Source::Stdin);
        assert_eq!(config.input.address, "fibs.com:4321");
        assert_eq!(config.input.max_line_len, 4096);
        assert!(config.input.login.is_none());
        assert!(config.output.echo);
        assert!(config.output.summary);
        assert_eq!(config.output.format, SummaryFormat::Text);
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_file_parses() {
        let config: Config = toml::from_str(
            r#"
[input]
source = "tcp"
address = "localhost:4321"
max_line_len = 1024

[input.login]
user = "marv"
password = "secret"

[output]
echo = false
format = "json"

[log]
filter = "fibs_cookie=debug"
json = true
"#,
        )
        .unwrap();

        assert_eq!(config.input.source, Source::Tcp);
        assert_eq!(config.input.describe(), "localhost:4321");
        assert_eq!(config.input.max_line_len, 1024);
        let login = config.input.login.as_ref().unwrap();
        assert_eq!(login.client, "fibscm");
        assert_eq!(login.command(), "login fibscm 1009 marv secret");
        assert!(!config.output.echo);
        assert!(config.output.summary);
        assert_eq!(config.output.format, SummaryFormat::Json);
        assert_eq!(config.log.filter, "fibs_cookie=debug");
        assert!(config.log.json);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[input]\nsource = \"serial\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn file_source_needs_path() {
        let config: Config = toml::from_str("[input]\nsource = \"file\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingInputPath)));
    }

    #[test]
    fn zero_line_length_is_rejected() {
        let config: Config = toml::from_str("[input]\nmax_line_len = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMaxLineLen)));
    }

    #[test]
    fn password_is_not_debug_printed() {
        let login = LoginConfig {
            user: "marv".to_string(),
            password: "hunter2".to_string(),
            client: "fibscm".to_string(),
        };
        assert!(!format!("{:?}", login).contains("hunter2"));
    }

    #[test]
    fn load_reads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[input]\nsource = \"file\"\npath = \"session.log\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.input.describe(), "session.log");

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "[input]\nsource = \"file\"").unwrap();
        assert!(matches!(
            Config::load(bad.path()),
            Err(ConfigError::MissingInputPath)
        ));

        assert!(matches!(
            Config::load("/nonexistent/fibscm.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
