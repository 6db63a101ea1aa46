//! Precedence-based option resolution
//!
//! Sources are consulted highest first and resolution stops at the first
//! one holding an explicit value:
//!
//! 1. Runtime override set through [`Registry::set_override`]
//! 2. Command-line value, when the host reports it as explicitly supplied
//! 3. INI / project-file value
//! 4. Declared default
//!
//! Empty strings from the CLI and INI layers count as absent.

use crate::cast::cast;
use crate::host::HostConfig;
use crate::registry::Registry;
use crate::value::{OptionValue, TypeHint};
use crate::Result;
use std::fmt;

/// Which source supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    Override,
    Cli,
    Ini,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Override => "override",
            Self::Cli => "cli",
            Self::Ini => "ini",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// A resolved value together with the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// `None` only when every source was empty and the declaration has no default
    pub value: Option<OptionValue>,
    pub source: ValueSource,
}

impl Registry {
    /// Resolve an option's effective value.
    ///
    /// The chosen raw value is cast with `type_hint` when given, otherwise
    /// with the declared hint. Fails with [`crate::Error::UnknownOption`] if
    /// the option was never declared in `namespace`.
    ///
    /// # Example
    ///
    /// ```
    /// use plugin_options::{HostSnapshot, OptionSpec, OptionValue, Registry, TypeHint};
    ///
    /// let mut registry = Registry::new();
    /// registry.declare("ns", OptionSpec::new("retries").default(1).type_hint(TypeHint::Int));
    ///
    /// let host = HostSnapshot::new().with_ini("retries", "4");
    /// let value = registry.resolve("ns", &host, "retries", None).unwrap();
    /// assert_eq!(value, Some(OptionValue::Int(4)));
    /// ```
    pub fn resolve<H>(
        &self,
        namespace: &str,
        host: &H,
        name: &str,
        type_hint: Option<TypeHint>,
    ) -> Result<Option<OptionValue>>
    where
        H: HostConfig + ?Sized,
    {
        self.resolve_with_source(namespace, host, name, type_hint)
            .map(|resolved| resolved.value)
    }

    /// Like [`Registry::resolve`], also reporting which source won.
    pub fn resolve_with_source<H>(
        &self,
        namespace: &str,
        host: &H,
        name: &str,
        type_hint: Option<TypeHint>,
    ) -> Result<Resolved>
    where
        H: HostConfig + ?Sized,
    {
        let decl = self.get_declaration(namespace, name)?;

        if let (Some(requested), Some(declared)) = (type_hint, decl.type_hint) {
            if requested != declared {
                tracing::warn!(
                    namespace,
                    option = %decl.name,
                    %requested,
                    %declared,
                    "Type mismatch for option: requested hint differs from declaration"
                );
            }
        }

        let (raw, source) = if let Some(value) = self.runtime_override(namespace, &decl.name) {
            (Some(value.clone()), ValueSource::Override)
        } else if let Some(value) = host.cli_value(&decl.name).filter(|v| !v.is_blank()) {
            (Some(value), ValueSource::Cli)
        } else if let Some(value) = host.ini_value(&decl.name).filter(|v| !v.is_blank()) {
            (Some(value), ValueSource::Ini)
        } else {
            (decl.default.clone(), ValueSource::Default)
        };

        let value = match (raw.clone(), type_hint.or(decl.type_hint)) {
            (Some(raw), Some(hint)) => Some(cast(raw, hint)),
            (raw, _) => raw,
        };

        tracing::debug!(
            namespace,
            option = %decl.name,
            %source,
            raw = ?raw,
            value = ?value,
            "Resolved option"
        );

        Ok(Resolved { value, source })
    }
}
