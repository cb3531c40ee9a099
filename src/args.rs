//! Command line arguments.
//!
//! Tokens that are not one of the recognised flags are ignored, so the
//! argument list is first reduced to the known flags and their values and
//! only then handed to clap for typed parsing. The dropped tokens are kept
//! and logged when the arguments are applied, once logging is running.

use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use vbit_codes::{CodeError, OutputFormat, ReservedBytes};

use crate::config::ArgsError;
use crate::settings::{Settings, MAX_DEBUG_LEVEL};

const BIN_NAME: &str = "vbit-config";

/// Flags that take the following token as their value.
const FLAGS_WITH_VALUES: &[&str] = &["--dir", "--format", "--reserved", "--debug"];

/// Flags without a value.
const BOOLEAN_FLAGS: &[&str] = &["--reverse", "--help", "--version"];

/// Command line overrides for the teletext inserter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = BIN_NAME, version, args_override_self = true)]
#[command(about = "Resolve the VBIT teletext inserter configuration")]
pub struct Args {
    /// Page directory holding the page files and vbit.conf
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub dir: Option<PathBuf>,

    /// Output format: t42, raw or PES
    #[arg(long, value_name = "FORMAT", value_parser = parse_format, allow_hyphen_values = true)]
    pub format: Option<OutputFormat>,

    /// Reverse bit order of output bytes (t42 only)
    #[arg(long)]
    pub reverse: bool,

    /// Broadcast service data reserved bytes as a 32-bit hex value
    #[arg(long, value_name = "HEX", value_parser = parse_reserved, allow_hyphen_values = true)]
    pub reserved: Option<ReservedBytes>,

    /// Debug level
    #[arg(
        long,
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..i64::from(MAX_DEBUG_LEVEL)),
        allow_hyphen_values = true
    )]
    pub debug: Option<u8>,

    /// Tokens dropped before parsing
    #[arg(skip)]
    pub ignored: Vec<String>,
}

fn parse_format(value: &str) -> Result<OutputFormat, CodeError> {
    value.parse()
}

fn parse_reserved(value: &str) -> Result<ReservedBytes, CodeError> {
    value.parse()
}

impl Args {
    /// Parse process arguments, excluding the program name.
    ///
    /// The error also covers `--help` and `--version`, which clap reports
    /// through [`clap::Error::exit`].
    pub fn parse_args<I, S>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (known, ignored) = split_known_flags(argv.into_iter().map(Into::into));
        let mut args = Self::try_parse_from(std::iter::once(BIN_NAME.to_string()).chain(known))?;
        args.ignored = ignored;
        Ok(args)
    }

    /// Write the overrides into `settings`, then check the bit-reversal
    /// constraint against the resulting output format.
    pub fn apply(&self, settings: &mut Settings) -> Result<(), ArgsError> {
        for arg in &self.ignored {
            debug!(arg = %arg, "ignoring unrecognised argument");
        }

        if let Some(ref dir) = self.dir {
            settings.page_dir = dir.clone();
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }
        if self.reverse {
            settings.reverse_bits = true;
        }
        if let Some(reserved) = self.reserved {
            settings.reserved_bytes = reserved;
        }
        if let Some(level) = self.debug {
            settings.debug_level = level;
            info!(debug_level = level, "debugging enabled");
        }

        if settings.reverse_bits && settings.output_format != OutputFormat::T42 {
            return Err(ArgsError::ReverseRequiresT42(settings.output_format));
        }
        Ok(())
    }

    /// Settings fields this invocation overrides.
    pub fn overridden_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.dir.is_some() {
            fields.push("page_dir");
        }
        if self.format.is_some() {
            fields.push("output_format");
        }
        if self.reverse {
            fields.push("reverse_bits");
        }
        if self.reserved.is_some() {
            fields.push("reserved_bytes");
        }
        if self.debug.is_some() {
            fields.push("debug_level");
        }
        fields
    }
}

/// Separate recognised flags and their values from every other token. A
/// value flag at the end keeps no value so clap reports it missing.
fn split_known_flags(mut argv: impl Iterator<Item = String>) -> (Vec<String>, Vec<String>) {
    let mut known = Vec::new();
    let mut ignored = Vec::new();

    while let Some(arg) = argv.next() {
        if FLAGS_WITH_VALUES.contains(&arg.as_str()) {
            known.push(arg);
            if let Some(value) = argv.next() {
                known.push(value);
            }
        } else if BOOLEAN_FLAGS.contains(&arg.as_str()) {
            known.push(arg);
        } else {
            ignored.push(arg);
        }
    }

    (known, ignored)
}
