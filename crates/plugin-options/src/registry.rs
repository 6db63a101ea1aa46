//! Namespaced option declarations and runtime overrides
//!
//! Plugins sharing one host process declare their options under their own
//! namespace. Declarations are upserted during the host's setup phase and
//! read during execution; runtime overrides attach to an existing
//! declaration and win over every other source.

use crate::value::{OptionValue, TypeHint};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Which host surfaces an option is exposed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Availability {
    /// A `--flag` on the command line.
    #[serde(rename = "cli")]
    Cli,
    /// An entry in the INI / project-file schema.
    #[serde(rename = "ini")]
    Ini,
    /// Both the command line and the INI schema.
    #[serde(rename = "all")]
    All,
    /// Not exposed to the host; settable only through runtime overrides.
    #[default]
    #[serde(rename = "none")]
    Internal,
}

impl Availability {
    pub fn exposes_cli(self) -> bool {
        matches!(self, Self::Cli | Self::All)
    }

    pub fn exposes_ini(self) -> bool {
        matches!(self, Self::Ini | Self::All)
    }
}

/// INI-schema type registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IniType {
    Bool,
    LineList,
    String,
}

impl IniType {
    /// Infer the INI type from a declared type hint.
    pub fn infer(hint: Option<TypeHint>) -> Self {
        match hint {
            Some(TypeHint::Bool) => Self::Bool,
            Some(TypeHint::StrList | TypeHint::PathList) => Self::LineList,
            _ => Self::String,
        }
    }

    /// The name the host's INI parser knows this type by.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::LineList => "linelist",
            Self::String => "string",
        }
    }
}

/// Builder for a declaration, passed to [`Registry::declare`].
///
/// # Example
///
/// ```
/// use plugin_options::{Availability, OptionSpec, Registry, TypeHint};
///
/// let mut registry = Registry::new();
/// registry.declare(
///     "my_plugin",
///     OptionSpec::new("output_dir")
///         .default("test-results")
///         .help("Where artifacts go")
///         .available(Availability::All)
///         .type_hint(TypeHint::Path),
/// );
/// assert!(registry.contains("my_plugin", "output-dir"));
/// ```
#[derive(Debug, Clone)]
pub struct OptionSpec {
    name: String,
    default: Option<OptionValue>,
    help: String,
    available: Availability,
    type_hint: Option<TypeHint>,
}

impl OptionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            help: String::new(),
            available: Availability::default(),
            type_hint: None,
        }
    }

    pub fn default(mut self, value: impl Into<OptionValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn available(mut self, available: Availability) -> Self {
        self.available = available;
        self
    }

    pub fn type_hint(mut self, hint: TypeHint) -> Self {
        self.type_hint = Some(hint);
        self
    }
}

/// A declared option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionDeclaration {
    pub namespace: String,
    /// Normalised name (underscores, never dashes)
    pub name: String,
    pub default: Option<OptionValue>,
    pub help: String,
    pub available: Availability,
    /// Declared type; inferred from the default when not given explicitly
    pub type_hint: Option<TypeHint>,
    pub ini_type: IniType,
}

impl OptionDeclaration {
    /// The `--kebab-case` flag this option is exposed as on the command line.
    pub fn cli_flag(&self) -> String {
        format!("--{}", self.name.replace('_', "-"))
    }
}

/// Normalise an option name so `api-url` and `api_url` address the same key.
pub fn normalize_name(name: &str) -> String {
    name.replace('-', "_")
}

type Key = (String, String);

fn key(namespace: &str, name: &str) -> Key {
    (namespace.to_string(), normalize_name(name))
}

/// Declarations and runtime overrides, keyed by `(namespace, name)`.
///
/// Owned and injectable; [`crate::global`] keeps one per thread for hosts
/// that cannot thread a context object through their hooks.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    declarations: HashMap<Key, OptionDeclaration>,
    overrides: HashMap<Key, OptionValue>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option, replacing any earlier declaration for the same key.
    ///
    /// An existing runtime override for the key is kept.
    pub fn declare(&mut self, namespace: &str, spec: OptionSpec) {
        let name = normalize_name(&spec.name);
        let type_hint = spec
            .type_hint
            .or_else(|| spec.default.as_ref().map(OptionValue::type_hint));
        let declaration = OptionDeclaration {
            namespace: namespace.to_string(),
            name: name.clone(),
            default: spec.default,
            help: spec.help,
            available: spec.available,
            type_hint,
            ini_type: IniType::infer(type_hint),
        };

        if self
            .declarations
            .insert((namespace.to_string(), name.clone()), declaration)
            .is_some()
        {
            tracing::debug!(namespace, option = %name, "Replaced option declaration");
        } else {
            tracing::debug!(namespace, option = %name, "Declared option");
        }
    }

    /// Set a runtime override, the highest-precedence source.
    ///
    /// Fails with [`Error::UnknownOption`] if the option was never declared.
    pub fn set_override(
        &mut self,
        namespace: &str,
        name: &str,
        value: impl Into<OptionValue>,
    ) -> Result<()> {
        let key = key(namespace, name);
        if !self.declarations.contains_key(&key) {
            return Err(Error::unknown_option(namespace, name));
        }
        let value = value.into();
        tracing::debug!(namespace, option = %key.1, %value, "Set runtime override");
        self.overrides.insert(key, value);
        Ok(())
    }

    /// Remove a runtime override, returning the previous value.
    pub fn clear_override(&mut self, namespace: &str, name: &str) -> Option<OptionValue> {
        self.overrides.remove(&key(namespace, name))
    }

    /// Get the runtime override for an option, if one is set.
    pub fn runtime_override(&self, namespace: &str, name: &str) -> Option<&OptionValue> {
        self.overrides.get(&key(namespace, name))
    }

    /// Look up a declaration.
    pub fn get_declaration(&self, namespace: &str, name: &str) -> Result<&OptionDeclaration> {
        self.declarations
            .get(&key(namespace, name))
            .ok_or_else(|| Error::unknown_option(namespace, name))
    }

    /// Check whether an option is declared.
    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.declarations.contains_key(&key(namespace, name))
    }

    /// All declarations in a namespace, sorted by name.
    pub fn declarations(&self, namespace: &str) -> Vec<&OptionDeclaration> {
        let mut found: Vec<_> = self
            .declarations
            .values()
            .filter(|d| d.namespace == namespace)
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    /// Get the number of declared options across all namespaces.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Dump a namespace's declarations and overrides as JSON, for debugging.
    pub fn to_json(&self, namespace: &str) -> Value {
        let options: Vec<Value> = self
            .declarations(namespace)
            .into_iter()
            .map(|decl| {
                json!({
                    "name": decl.name,
                    "default": decl.default,
                    "help": decl.help,
                    "available": decl.available,
                    "type_hint": decl.type_hint,
                    "ini_type": decl.ini_type,
                    "override": self.runtime_override(namespace, &decl.name),
                })
            })
            .collect();
        json!({ "namespace": namespace, "options": options })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_declare_and_get() {
        let mut registry = Registry::new();
        registry.declare(
            "ns",
            OptionSpec::new("api_url")
                .default("http://localhost")
                .help("API endpoint")
                .available(Availability::All),
        );

        let decl = registry.get_declaration("ns", "api_url").unwrap();
        assert_eq!(decl.default, Some("http://localhost".into()));
        assert_eq!(decl.help, "API endpoint");
        assert_eq!(decl.available, Availability::All);
        assert_eq!(decl.type_hint, Some(TypeHint::Str));
        assert_eq!(decl.ini_type, IniType::String);
    }

    #[test]
    fn test_dashes_and_underscores_address_same_option() {
        let mut registry = Registry::new();
        registry.declare("ns", OptionSpec::new("api-url"));

        assert!(registry.contains("ns", "api_url"));
        assert_eq!(registry.get_declaration("ns", "api-url").unwrap().name, "api_url");
    }

    #[test]
    fn test_declare_replaces_existing() {
        let mut registry = Registry::new();
        registry.declare("ns", OptionSpec::new("opt").default("a").help("first"));
        registry.declare(
            "ns",
            OptionSpec::new("opt")
                .default("b")
                .help("second")
                .available(Availability::Cli),
        );

        let decl = registry.get_declaration("ns", "opt").unwrap();
        assert_eq!(decl.default, Some("b".into()));
        assert_eq!(decl.help, "second");
        assert_eq!(decl.available, Availability::Cli);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let mut registry = Registry::new();
        registry.declare("plugin_a", OptionSpec::new("verbose").default(true));

        assert!(registry.contains("plugin_a", "verbose"));
        assert!(!registry.contains("plugin_b", "verbose"));
        assert!(matches!(
            registry.get_declaration("plugin_b", "verbose"),
            Err(Error::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_override_requires_declaration() {
        let mut registry = Registry::new();
        let err = registry.set_override("ns", "missing", "x").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownOption { ref namespace, ref name } if namespace == "ns" && name == "missing"
        ));
        assert!(registry.runtime_override("ns", "missing").is_none());
    }

    #[test]
    fn test_override_survives_redeclaration() {
        let mut registry = Registry::new();
        registry.declare("ns", OptionSpec::new("opt").default(1));
        registry.set_override("ns", "opt", 5).unwrap();
        registry.declare("ns", OptionSpec::new("opt").default(2));

        assert_eq!(registry.runtime_override("ns", "opt"), Some(&OptionValue::Int(5)));
        assert_eq!(registry.clear_override("ns", "opt"), Some(OptionValue::Int(5)));
        assert!(registry.runtime_override("ns", "opt").is_none());
    }

    #[test]
    fn test_declarations_sorted_by_name() {
        let mut registry = Registry::new();
        registry.declare("ns", OptionSpec::new("zeta"));
        registry.declare("ns", OptionSpec::new("alpha"));
        registry.declare("other", OptionSpec::new("beta"));

        let names: Vec<_> = registry
            .declarations("ns")
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_ini_type_inference() {
        assert_eq!(IniType::infer(Some(TypeHint::Bool)), IniType::Bool);
        assert_eq!(IniType::infer(Some(TypeHint::StrList)), IniType::LineList);
        assert_eq!(IniType::infer(Some(TypeHint::PathList)), IniType::LineList);
        assert_eq!(IniType::infer(Some(TypeHint::Int)), IniType::String);
        assert_eq!(IniType::infer(None), IniType::String);
    }

    #[test]
    fn test_cli_flag_is_kebab_case() {
        let mut registry = Registry::new();
        registry.declare("ns", OptionSpec::new("artifacts_output_dir"));
        let decl = registry.get_declaration("ns", "artifacts_output_dir").unwrap();
        assert_eq!(decl.cli_flag(), "--artifacts-output-dir");
    }

    #[test]
    fn test_to_json_includes_overrides() {
        let mut registry = Registry::new();
        registry.declare(
            "ns",
            OptionSpec::new("retries")
                .default(3)
                .available(Availability::Ini),
        );
        registry.set_override("ns", "retries", 7).unwrap();

        let dump = registry.to_json("ns");
        assert_eq!(dump["namespace"], "ns");
        assert_eq!(dump["options"][0]["name"], "retries");
        assert_eq!(dump["options"][0]["default"], 3);
        assert_eq!(dump["options"][0]["available"], "ini");
        assert_eq!(dump["options"][0]["type_hint"], "int");
        assert_eq!(dump["options"][0]["override"], 7);
    }
}
