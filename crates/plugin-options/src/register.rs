//! Registration of declared options with the host's CLI and INI surfaces

use crate::host::{CliOption, HostParser, IniOption};
use crate::registry::{OptionDeclaration, Registry};

impl Registry {
    /// Expose a namespace's declarations to the host.
    ///
    /// Options available on the CLI become `--kebab-case` flags; options
    /// available in INI become schema entries with an inferred INI type.
    /// Internal options are never handed to the host. Returns the number of
    /// definitions emitted.
    ///
    /// Hosts are not required to tolerate duplicate registration, so call
    /// this once per namespace.
    pub fn register_with_host<P>(&self, namespace: &str, parser: &mut P) -> usize
    where
        P: HostParser + ?Sized,
    {
        let mut emitted = 0;
        for decl in self.declarations(namespace) {
            let help = help_with_default(decl);

            if decl.available.exposes_cli() {
                let option = CliOption {
                    flag: decl.cli_flag(),
                    dest: decl.name.clone(),
                    value_type: decl.type_hint,
                    default: decl.default.clone(),
                    help: help.clone(),
                };
                tracing::debug!(namespace, flag = %option.flag, "Registering CLI option");
                parser.add_cli_option(option);
                emitted += 1;
            }

            if decl.available.exposes_ini() {
                tracing::debug!(
                    namespace,
                    option = %decl.name,
                    ini_type = decl.ini_type.as_str(),
                    "Registering INI option"
                );
                parser.add_ini_option(IniOption {
                    name: decl.name.clone(),
                    ini_type: decl.ini_type,
                    help,
                });
                emitted += 1;
            }
        }
        emitted
    }
}

fn help_with_default(decl: &OptionDeclaration) -> String {
    match &decl.default {
        Some(default) => format!("{} (default: {default})", decl.help),
        None => decl.help.clone(),
    }
}
