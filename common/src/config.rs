use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Environment variable holding an `EnvFilter` directive that overrides `-v`/`-q`.
pub const LOG_ENV: &str = "GREETER_LOG";

/// Any non-empty value disables coloured diagnostics.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How much diagnostic output goes to stderr.
    ///
    /// Never affects what is written to stdout.
    pub verbosity: Verbosity,
    /// Single colour decision shared by the formatter and the subscriber.
    pub color: bool,
}

impl Config {
    pub fn new(quiet: bool, verbose: u8, no_color: bool) -> Self {
        let no_color_env = std::env::var(NO_COLOR_ENV).ok();
        Self {
            verbosity: Verbosity::from_flags(quiet, verbose),
            color: use_color(
                no_color,
                no_color_env.as_deref(),
                std::io::stderr().is_terminal(),
            ),
        }
    }

    /// Builds the subscriber filter.
    ///
    /// A set `GREETER_LOG` wins over the flags. If it does not parse, the
    /// flag-derived level is used and the error is handed back so the caller
    /// can report it once logging is up.
    pub fn env_filter(&self) -> (EnvFilter, Option<ConfigError>) {
        match std::env::var(LOG_ENV) {
            Ok(directive) if !directive.trim().is_empty() => {
                match parse_filter(&directive) {
                    Ok(filter) => (filter, None),
                    Err(err) => (self.flag_filter(), Some(err)),
                }
            }
            _ => (self.flag_filter(), None),
        }
    }

    fn flag_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.verbosity.level_filter().into())
            .parse_lossy("")
    }
}

/// Colour only when stderr is a terminal and neither `--no-color` nor a
/// non-empty `NO_COLOR` asks otherwise.
pub fn use_color(no_color: bool, no_color_env: Option<&str>, stderr_is_terminal: bool) -> bool {
    let env_disabled = no_color_env.is_some_and(|v| !v.is_empty());
    stderr_is_terminal && !no_color && !env_disabled
}

pub fn parse_filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::builder()
        .parse(directive)
        .map_err(|e| ConfigError::InvalidLogFilter {
            var: LOG_ENV,
            reason: e.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// `quiet` wins over any number of `-v`.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::OFF,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }
}
