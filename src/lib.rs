//! VBIT configuration
//!
//! Resolves the runtime settings of the VBIT teletext inserter from
//! compiled-in defaults, command line flags, `vbit.conf` and an optional
//! `vbit.conf.override`. The resolved [`Settings`] are handed to the packet
//! generator, page store and command port server, which only read them.

pub mod args;
pub mod config;
pub mod encoder;
pub mod logging;
pub mod settings;

pub use args::Args;
pub use config::{ConfigOrigin, ResolveError, ResolvedSettings, Resolver};
pub use encoder::{EncodeError, LineEncoder, PassthroughEncoder};
pub use settings::Settings;
