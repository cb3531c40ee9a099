//! Config file parser
//!
//! Reads `key=value` lines, skipping blank lines and `;` comments. A bad line
//! is reported and skipped; it never aborts the rest of the file.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::directive::{Directive, DirectiveRegistry};
use super::error::{ConfigError, LineError};
use crate::encoder::LineEncoder;
use crate::settings::Settings;

/// A line that was rejected, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line_number: usize,
    pub line: String,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: LineError,
}

fn serialize_reason<S: serde::Serializer>(reason: &LineError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// Outcome of loading one config file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// File path (None when loading from a string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// SHA-256 digest of raw file bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// Directives applied, in file order
    pub applied: Vec<Directive>,

    pub rejected: Vec<RejectedLine>,
}

/// Applies config files to [`Settings`] through a [`DirectiveRegistry`].
pub struct ConfigLoader<'a> {
    registry: &'a DirectiveRegistry,
    encoder: &'a dyn LineEncoder,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(registry: &'a DirectiveRegistry, encoder: &'a dyn LineEncoder) -> Self {
        Self { registry, encoder }
    }

    /// Load `path` into `settings`.
    ///
    /// Returns an error only when the file cannot be read, in which case
    /// `settings` is unchanged. Invalid lines are listed in the report.
    pub fn load(&self, path: &Path, settings: &mut Settings) -> Result<LoadReport, ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "opened config file");

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8_lossy(&bytes);
        let mut report = self.apply_str(&contents, settings);
        report.path = Some(path.to_path_buf());
        report.digest = Some(digest);
        Ok(report)
    }

    /// Apply config text to `settings`, line by line.
    pub fn apply_str(&self, contents: &str, settings: &mut Settings) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw).trim_start();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            match self.apply_line(line, settings) {
                Ok(directive) => report.applied.push(directive),
                Err(reason) => {
                    warn!(line_number = index + 1, line, %reason, "invalid config line");
                    report.rejected.push(RejectedLine {
                        line_number: index + 1,
                        line: line.to_string(),
                        reason,
                    });
                }
            }
        }

        report
    }

    fn apply_line(&self, line: &str, settings: &mut Settings) -> Result<Directive, LineError> {
        let (key, value) = line.split_once('=').ok_or(LineError::MissingSeparator)?;
        self.registry.apply(key, value, settings, self.encoder)
    }
}
