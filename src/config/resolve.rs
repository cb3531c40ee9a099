//! Resolution orchestrator
//!
//! Builds [`Settings`] from four layers, later layers overriding earlier ones
//! field by field:
//! 1. Compiled-in defaults
//! 2. Command line arguments
//! 3. `<page_dir>/vbit.conf`
//! 4. `<page_dir>/vbit.conf.override`

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::directive::DirectiveRegistry;
use super::error::{ArgsError, ResolveError};
use super::file::{ConfigLoader, LoadReport, RejectedLine};
use crate::args::Args;
use crate::encoder::{LineEncoder, PassthroughEncoder};
use crate::settings::{Settings, CONFIG_FILE};

/// Origin of a configuration layer
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    Cli,
    Base,
    Override,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,

    /// File path (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Rejected config line tagged with the file layer it came from.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedDirective {
    pub origin: ConfigOrigin,
    #[serde(flatten)]
    pub line: RejectedLine,
}

/// Resolved settings with provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSettings {
    /// When resolution finished
    pub resolved_at: DateTime<Utc>,

    pub settings: Settings,

    /// Contributing layers in precedence order
    pub sources: Vec<ConfigSource>,

    /// Layer that last wrote each field. Fields not listed hold defaults.
    pub field_sources: BTreeMap<&'static str, ConfigOrigin>,

    pub rejected: Vec<RejectedDirective>,
}

impl ResolvedSettings {
    /// Layer that supplied `field`.
    pub fn origin_of(&self, field: &str) -> ConfigOrigin {
        self.field_sources
            .get(field)
            .copied()
            .unwrap_or(ConfigOrigin::Builtin)
    }

    /// Hand the frozen settings to downstream components.
    pub fn shared(&self) -> Arc<Settings> {
        Arc::new(self.settings.clone())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the resolution sequence once.
pub struct Resolver {
    registry: DirectiveRegistry,
    encoder: Box<dyn LineEncoder>,
}

impl Resolver {
    /// Resolver using `encoder` for the `header_template` directive.
    pub fn new(encoder: impl LineEncoder + 'static) -> Self {
        Self {
            registry: DirectiveRegistry::new(),
            encoder: Box::new(encoder),
        }
    }

    /// Parse the process arguments and resolve.
    pub fn resolve_argv<I, S>(&self, argv: I) -> Result<ResolvedSettings, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = Args::parse_args(argv).map_err(ArgsError::from)?;
        self.resolve(&args)
    }

    /// Apply defaults, `args`, the base file and the override file.
    pub fn resolve(&self, args: &Args) -> Result<ResolvedSettings, ResolveError> {
        let mut settings = Settings::default();
        let mut field_sources = BTreeMap::new();
        let mut sources = vec![ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        }];

        args.apply(&mut settings)?;
        let cli_fields = args.overridden_fields();
        if !cli_fields.is_empty() {
            for field in cli_fields {
                field_sources.insert(field, ConfigOrigin::Cli);
            }
            sources.push(ConfigSource {
                origin: ConfigOrigin::Cli,
                path: None,
                digest: None,
            });
        }

        if !settings.page_dir.is_dir() {
            return Err(ResolveError::PageDirMissing(settings.page_dir));
        }
        info!(page_dir = %settings.page_dir.display(), "page directory");
        info!(config_file = CONFIG_FILE, "config file");

        let loader = ConfigLoader::new(&self.registry, &*self.encoder);
        let mut rejected = Vec::new();

        let layers = [
            (ConfigOrigin::Base, settings.config_path()),
            (ConfigOrigin::Override, settings.override_path()),
        ];
        for (origin, path) in layers {
            let Some(report) = load_layer(&loader, origin, &path, &mut settings) else {
                continue;
            };
            for directive in &report.applied {
                for field in directive.fields() {
                    field_sources.insert(*field, origin);
                }
            }
            rejected.extend(
                report
                    .rejected
                    .into_iter()
                    .map(|line| RejectedDirective { origin, line }),
            );
            sources.push(ConfigSource {
                origin,
                path: report.path.map(|p| p.to_string_lossy().to_string()),
                digest: report.digest,
            });
        }

        Ok(ResolvedSettings {
            resolved_at: Utc::now(),
            settings,
            sources,
            field_sources,
            rejected,
        })
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(PassthroughEncoder)
    }
}

/// Load one file layer. A missing override file is expected; a missing base
/// file is reported but not fatal.
fn load_layer(
    loader: &ConfigLoader<'_>,
    origin: ConfigOrigin,
    path: &Path,
    settings: &mut Settings,
) -> Option<LoadReport> {
    match loader.load(path, settings) {
        Ok(report) => Some(report),
        Err(e) if origin == ConfigOrigin::Override => {
            debug!(error = %e, "no override file");
            None
        }
        Err(e) => {
            warn!(error = %e, "config file open failed");
            None
        }
    }
}
