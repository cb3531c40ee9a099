//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;
use vbit_codes::CodeError;

use super::directive::Directive;
use crate::encoder::EncodeError;

/// Why a single directive value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("expected 'true' or 'false', got '{0}'")]
    ExpectedBool(String),

    #[error("expected {min} to {max} decimal digits, got '{value}'")]
    DecimalDigits {
        min: usize,
        max: usize,
        value: String,
    },

    #[error("header encoder failed: {0}")]
    Encoder(#[from] EncodeError),
}

/// Why a config file line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing '=' separator")]
    MissingSeparator,

    #[error("unknown directive '{0}'")]
    UnknownDirective(String),

    #[error("invalid {directive} value: {source}")]
    Invalid {
        directive: Directive,
        #[source]
        source: DirectiveError,
    },
}

/// A config file could not be read.
#[derive(Debug, Error)]
#[error("cannot read {}: {}", .path.display(), .source)]
pub struct ConfigError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Command line errors.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// Missing or malformed flag value, or a help/version request.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("--reverse requires t42 format, output format is {0}")]
    ReverseRequiresT42(vbit_codes::OutputFormat),
}

/// Conditions that stop resolution. The caller decides whether to exit.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error("{} does not exist or is not a directory", .0.display())]
    PageDirMissing(PathBuf),
}
