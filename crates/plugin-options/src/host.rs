//! Capability interfaces for the host test framework
//!
//! The resolver only needs to ask the host two questions (was this option
//! given on the command line, and does the INI layer have it), and the
//! registration adapter only needs to hand it flag and INI definitions.

use crate::cast::try_cast;
use crate::project::ProjectFile;
use crate::registry::{IniType, normalize_name};
use crate::value::{OptionValue, TypeHint};
use std::collections::HashMap;

/// Read access to the host's parsed configuration.
pub trait HostConfig {
    /// The command-line value for `dest`, or `None` when the option was not
    /// explicitly supplied.
    fn cli_value(&self, dest: &str) -> Option<OptionValue>;

    /// The INI / project-file value for `name`, if the layer has an entry.
    fn ini_value(&self, name: &str) -> Option<OptionValue>;
}

/// The host's argument and INI registration surface.
pub trait HostParser {
    fn add_cli_option(&mut self, option: CliOption);
    fn add_ini_option(&mut self, option: IniOption);
}

/// A command-line flag definition handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOption {
    /// Flag as typed by the user, e.g. `--output-dir`
    pub flag: String,
    /// Attribute the host stores the parsed value under, e.g. `output_dir`
    pub dest: String,
    pub value_type: Option<TypeHint>,
    pub default: Option<OptionValue>,
    pub help: String,
}

/// An INI-schema entry handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct IniOption {
    pub name: String,
    pub ini_type: IniType,
    pub help: String,
}

/// In-memory host configuration.
///
/// For hosts that hand over their parsed arguments as a plain map. Whether a
/// CLI value was explicitly supplied is decided by comparing it with the
/// parser default recorded for the flag: a user who retypes the default is
/// indistinguishable from one who typed nothing.
#[derive(Debug, Clone, Default)]
pub struct HostSnapshot {
    parsed: HashMap<String, OptionValue>,
    parser_defaults: HashMap<String, OptionValue>,
    ini: HashMap<String, OptionValue>,
    ini_schema: HashMap<String, IniType>,
}

impl HostSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parsed command-line value.
    pub fn with_cli(mut self, dest: &str, value: impl Into<OptionValue>) -> Self {
        self.parsed.insert(normalize_name(dest), value.into());
        self
    }

    /// Record the default the argument parser would report for `dest`.
    pub fn with_parser_default(mut self, dest: &str, value: impl Into<OptionValue>) -> Self {
        self.parser_defaults.insert(normalize_name(dest), value.into());
        self
    }

    /// Record a single INI value.
    pub fn with_ini(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.ini.insert(normalize_name(name), value.into());
        self
    }

    /// Use a loaded project file as the INI layer. Later entries win.
    pub fn with_project_file(mut self, project: ProjectFile) -> Self {
        for (name, value) in project.into_values() {
            self.ini.insert(normalize_name(&name), value);
        }
        self
    }

    /// INI type registered for `name`, if the option went through [`HostParser`].
    pub fn ini_type(&self, name: &str) -> Option<IniType> {
        self.ini_schema.get(&normalize_name(name)).copied()
    }
}

impl HostConfig for HostSnapshot {
    fn cli_value(&self, dest: &str) -> Option<OptionValue> {
        let dest = normalize_name(dest);
        let parsed = self.parsed.get(&dest)?;
        if let Some(default) = self.parser_defaults.get(&dest) {
            // Parsers hand back raw strings; compare in the default's type.
            if try_cast(parsed, default.type_hint()).as_ref() == Ok(default) {
                return None;
            }
        }
        Some(parsed.clone())
    }

    fn ini_value(&self, name: &str) -> Option<OptionValue> {
        self.ini.get(&normalize_name(name)).cloned()
    }
}

impl HostParser for HostSnapshot {
    fn add_cli_option(&mut self, option: CliOption) {
        if let Some(default) = option.default {
            self.parser_defaults.insert(option.dest, default);
        }
    }

    fn add_ini_option(&mut self, option: IniOption) {
        self.ini_schema.insert(option.name, option.ini_type);
    }
}
