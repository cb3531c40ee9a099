//! Settings store
//!
//! The resolved runtime configuration and its compiled-in defaults.

use serde::Serialize;
use std::path::PathBuf;
use vbit_codes::{
    fit_width, MagazinePriority, NetworkCode, OutputFormat, PageAddress, ReservedBytes, Subcode,
};

/// Name of the configuration file inside the page directory.
pub const CONFIG_FILE: &str = "vbit.conf";

/// Suffix appended to the config file path to find the local override file.
pub const OVERRIDE_SUFFIX: &str = ".override";

/// Debug levels are accepted in `0..MAX_DEBUG_LEVEL`.
pub const MAX_DEBUG_LEVEL: u8 = 4;

/// Width of the service status display string.
pub const STATUS_WIDTH: usize = 20;

/// Width of a resolved header line.
pub const HEADER_WIDTH: usize = 32;

/// Default header template, expanded with the live date and time downstream.
pub const DEFAULT_HEADER_TEMPLATE: &str = "VBIT2    %%# %%a %d %%b\x03%H:%M:%S";

/// Default command interface port.
pub const DEFAULT_COMMAND_PORT: u32 = 5570;

#[cfg(feature = "raspbian")]
const DEFAULT_PAGE_DIR: &str = "/home/pi/teletext";

#[cfg(not(feature = "raspbian"))]
const DEFAULT_PAGE_DIR: &str = "./pages";

/// Resolved runtime configuration.
///
/// Built once at startup by [`crate::config::Resolver`] and read-only after
/// that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Directory holding the page files and `vbit.conf`.
    pub page_dir: PathBuf,

    /// Page shown at start-up (packet 8/30).
    pub initial_page: PageAddress,

    pub initial_subcode: Subcode,

    pub network_identification_code: NetworkCode,

    pub country_network_identification_code: NetworkCode,

    /// Reserved bytes of the broadcast service data packet.
    pub reserved_bytes: ReservedBytes,

    /// Status display text, always [`STATUS_WIDTH`] characters.
    pub service_status: String,

    /// Number of times a subtitle transmission is repeated (0-9).
    pub subtitle_repeats: u8,

    /// Header line template. Once set from a config file it is the encoded
    /// line fitted to [`HEADER_WIDTH`] characters.
    pub header_template: String,

    pub command_port_enabled: bool,

    /// Only the digit count is checked, not the port range.
    pub command_port: u32,

    pub row_adaptive: bool,

    pub lines_per_field: u16,

    pub magazine_priority: MagazinePriority,

    pub output_format: OutputFormat,

    /// Reverse bit order in output bytes. Only valid with T42 output.
    pub reverse_bits: bool,

    pub debug_level: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_dir: PathBuf::from(DEFAULT_PAGE_DIR),
            initial_page: PageAddress::default(),
            initial_subcode: Subcode::default(),
            network_identification_code: NetworkCode::default(),
            country_network_identification_code: NetworkCode::default(),
            reserved_bytes: ReservedBytes::default(),
            service_status: fit_width("", STATUS_WIDTH),
            subtitle_repeats: 1,
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
            command_port_enabled: false,
            command_port: DEFAULT_COMMAND_PORT,
            row_adaptive: false,
            lines_per_field: 16,
            magazine_priority: MagazinePriority::default(),
            output_format: OutputFormat::T42,
            reverse_bits: false,
            debug_level: 0,
        }
    }
}

impl Settings {
    /// Magazine of the initial page (1-8).
    pub fn initial_magazine(&self) -> u8 {
        self.initial_page.magazine()
    }

    /// Path of the base config file, `<page_dir>/vbit.conf`.
    pub fn config_path(&self) -> PathBuf {
        self.page_dir.join(CONFIG_FILE)
    }

    /// Path of the local override file, `<page_dir>/vbit.conf.override`.
    pub fn override_path(&self) -> PathBuf {
        self.page_dir
            .join(format!("{}{}", CONFIG_FILE, OVERRIDE_SUFFIX))
    }
}
