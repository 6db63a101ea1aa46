//! A host parser that records every definition it is handed.

use plugin_options::{CliOption, HostParser, IniOption};

/// Records CLI and INI registrations in call order.
///
/// Use for: registration-adapter tests that assert on exactly what the host
/// would have been asked to define.
#[derive(Debug, Default)]
pub struct RecordingParser {
    pub cli: Vec<CliOption>,
    pub ini: Vec<IniOption>,
}

impl RecordingParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The CLI definition registered under `flag`, e.g. `--output-dir`.
    pub fn cli_flag(&self, flag: &str) -> Option<&CliOption> {
        self.cli.iter().find(|option| option.flag == flag)
    }

    /// The INI definition registered under `name`.
    pub fn ini_entry(&self, name: &str) -> Option<&IniOption> {
        self.ini.iter().find(|option| option.name == name)
    }
}

impl HostParser for RecordingParser {
    fn add_cli_option(&mut self, option: CliOption) {
        self.cli.push(option);
    }

    fn add_ini_option(&mut self, option: IniOption) {
        self.ini.push(option);
    }
}
