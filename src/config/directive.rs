//! Directive registry
//!
//! Maps each recognised `vbit.conf` key to the routine that validates its
//! value and writes it into [`Settings`]. A validator either applies its
//! whole value or leaves `Settings` untouched.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use vbit_codes::{fit_width, InitialPage, MagazinePriority, NetworkCode};

use super::error::{DirectiveError, LineError};
use crate::encoder::LineEncoder;
use crate::settings::{Settings, HEADER_WIDTH, STATUS_WIDTH};

/// Validates a raw value and assigns it.
pub type Validator = fn(&str, &mut Settings, &dyn LineEncoder) -> Result<(), DirectiveError>;

/// Recognised configuration file keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    HeaderTemplate,
    InitialTeletextPage,
    RowAdaptiveMode,
    NetworkIdentificationCode,
    CountryNetworkIdentification,
    FullField,
    StatusDisplay,
    SubtitleRepeats,
    EnableCommandPort,
    CommandPort,
    LinesPerField,
    MagazinePriority,
}

impl Directive {
    pub const ALL: [Directive; 12] = [
        Self::HeaderTemplate,
        Self::InitialTeletextPage,
        Self::RowAdaptiveMode,
        Self::NetworkIdentificationCode,
        Self::CountryNetworkIdentification,
        Self::FullField,
        Self::StatusDisplay,
        Self::SubtitleRepeats,
        Self::EnableCommandPort,
        Self::CommandPort,
        Self::LinesPerField,
        Self::MagazinePriority,
    ];

    /// Key as written in the config file.
    pub fn name(self) -> &'static str {
        match self {
            Self::HeaderTemplate => "header_template",
            Self::InitialTeletextPage => "initial_teletext_page",
            Self::RowAdaptiveMode => "row_adaptive_mode",
            Self::NetworkIdentificationCode => "network_identification_code",
            Self::CountryNetworkIdentification => "country_network_identification",
            Self::FullField => "full_field",
            Self::StatusDisplay => "status_display",
            Self::SubtitleRepeats => "subtitle_repeats",
            Self::EnableCommandPort => "enable_command_port",
            Self::CommandPort => "command_port",
            Self::LinesPerField => "lines_per_field",
            Self::MagazinePriority => "magazine_priority",
        }
    }

    /// Settings fields written by this directive.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::HeaderTemplate => &["header_template"],
            Self::InitialTeletextPage => &["initial_page", "initial_subcode"],
            Self::RowAdaptiveMode => &["row_adaptive"],
            Self::NetworkIdentificationCode => &["network_identification_code"],
            Self::CountryNetworkIdentification => &["country_network_identification_code"],
            Self::FullField => &[],
            Self::StatusDisplay => &["service_status"],
            Self::SubtitleRepeats => &["subtitle_repeats"],
            Self::EnableCommandPort => &["command_port_enabled"],
            Self::CommandPort => &["command_port"],
            Self::LinesPerField => &["lines_per_field"],
            Self::MagazinePriority => &["magazine_priority"],
        }
    }

    fn validator(self) -> Validator {
        match self {
            Self::HeaderTemplate => header_template,
            Self::InitialTeletextPage => initial_teletext_page,
            Self::RowAdaptiveMode => row_adaptive_mode,
            Self::NetworkIdentificationCode => network_identification_code,
            Self::CountryNetworkIdentification => country_network_identification,
            Self::FullField => full_field,
            Self::StatusDisplay => status_display,
            Self::SubtitleRepeats => subtitle_repeats,
            Self::EnableCommandPort => enable_command_port,
            Self::CommandPort => command_port,
            Self::LinesPerField => lines_per_field,
            Self::MagazinePriority => magazine_priority,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup table from config key to directive and validator.
#[derive(Clone)]
pub struct DirectiveRegistry {
    entries: HashMap<&'static str, (Directive, Validator)>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        let entries = Directive::ALL
            .iter()
            .map(|d| (d.name(), (*d, d.validator())))
            .collect();
        Self { entries }
    }

    /// Exact, case-sensitive key lookup.
    pub fn lookup(&self, key: &str) -> Option<Directive> {
        self.entries.get(key).map(|(directive, _)| *directive)
    }

    /// Validate `value` for `key` and apply it to `settings`.
    pub fn apply(
        &self,
        key: &str,
        value: &str,
        settings: &mut Settings,
        encoder: &dyn LineEncoder,
    ) -> Result<Directive, LineError> {
        let (directive, validate) = self
            .entries
            .get(key)
            .ok_or_else(|| LineError::UnknownDirective(key.to_string()))?;

        validate(value, settings, encoder).map_err(|source| LineError::Invalid {
            directive: *directive,
            source,
        })?;
        Ok(*directive)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for DirectiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        f.debug_struct("DirectiveRegistry")
            .field("keys", &keys)
            .finish()
    }
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(value: &str) -> Result<bool, DirectiveError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(DirectiveError::ExpectedBool(other.to_string())),
    }
}

/// Parse a value of `min..=max` ASCII decimal digits.
fn parse_digits<T: std::str::FromStr>(
    value: &str,
    min: usize,
    max: usize,
) -> Result<T, DirectiveError> {
    let invalid = || DirectiveError::DecimalDigits {
        min,
        max,
        value: value.to_string(),
    };
    if !(min..=max).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

fn header_template(
    value: &str,
    settings: &mut Settings,
    encoder: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    let line = encoder.encode(value)?;
    settings.header_template = fit_width(&line, HEADER_WIDTH);
    Ok(())
}

fn initial_teletext_page(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    let initial: InitialPage = value.parse()?;
    settings.initial_page = initial.address;
    if let Some(subcode) = initial.subcode {
        settings.initial_subcode = subcode;
    }
    Ok(())
}

fn row_adaptive_mode(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.row_adaptive = parse_bool(value)?;
    Ok(())
}

fn network_identification_code(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.network_identification_code = value.parse::<NetworkCode>()?;
    Ok(())
}

fn country_network_identification(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.country_network_identification_code = value.parse::<NetworkCode>()?;
    Ok(())
}

/// Accepted for compatibility, has no effect.
fn full_field(_: &str, _: &mut Settings, _: &dyn LineEncoder) -> Result<(), DirectiveError> {
    Ok(())
}

fn status_display(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.service_status = fit_width(value, STATUS_WIDTH);
    Ok(())
}

fn subtitle_repeats(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.subtitle_repeats = parse_digits(value, 1, 1)?;
    Ok(())
}

fn enable_command_port(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.command_port_enabled = parse_bool(value)?;
    Ok(())
}

fn command_port(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.command_port = parse_digits(value, 1, 5)?;
    Ok(())
}

fn lines_per_field(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.lines_per_field = parse_digits(value, 1, 3)?;
    Ok(())
}

fn magazine_priority(
    value: &str,
    settings: &mut Settings,
    _: &dyn LineEncoder,
) -> Result<(), DirectiveError> {
    settings.magazine_priority = value.parse::<MagazinePriority>()?;
    Ok(())
}
