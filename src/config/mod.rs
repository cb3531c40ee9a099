//! Layered configuration resolution
//!
//! Settings are resolved once at startup, in order:
//! 1. Compiled-in defaults
//! 2. Command line arguments
//! 3. Base config file (`<page_dir>/vbit.conf`)
//! 4. Local override file (`<page_dir>/vbit.conf.override`)

mod directive;
mod error;
mod file;
mod resolve;

pub use directive::{Directive, DirectiveRegistry, Validator};
pub use error::{ArgsError, ConfigError, DirectiveError, LineError, ResolveError};
pub use file::{ConfigLoader, LoadReport, RejectedLine};
pub use resolve::{ConfigOrigin, ConfigSource, RejectedDirective, ResolvedSettings, Resolver};
