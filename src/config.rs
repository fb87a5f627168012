//! Command-line configuration for the `minic` binary.

use std::path::PathBuf;

use thiserror::Error;

/// The file read when no input path is given.
pub const DEFAULT_INPUT: &str = "foobar.txt";

pub const USAGE: &str = "usage: minic [--tokens] [FILE]";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    /// Echo every token as the lexer produces it.
    pub trace_tokens: bool,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            trace_tokens: false,
            show_help: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown flag {0:?}")]
    UnknownFlag(String),
    #[error("unexpected argument {0:?}, only one input file is accepted")]
    TooManyArguments(String),
}

impl Config {
    /// Builds a configuration from process arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut input = None;

        for arg in args {
            match arg.as_str() {
                "--tokens" => config.trace_tokens = true,
                "-h" | "--help" => config.show_help = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()))
                }
                path if input.is_some() => {
                    return Err(ConfigError::TooManyArguments(path.to_string()))
                }
                path => input = Some(PathBuf::from(path)),
            }
        }

        if let Some(input) = input {
            config.input = input;
        }

        Ok(config)
    }

    /// The input file name as shown in diagnostics.
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.to_string_lossy().into_owned())
    }
}
