//! Artifact base-directory bindings and per-test directory resolution

use crate::io::ensure_dir;
use crate::item::TestItem;
use crate::sanitize::sanitize;
use crate::{Error, Result};
use plugin_options::{HostConfig, OptionValue, Registry, TypeHint, normalize_name, try_cast};
use std::collections::HashMap;
use std::path::PathBuf;

/// Which declared option supplies each namespace's artifact base directory.
///
/// One binding per namespace; binding again replaces the previous option.
#[derive(Debug, Clone, Default)]
pub struct ArtifactBindings {
    options: HashMap<String, String>,
}

impl ArtifactBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `option_name` as the base directory option for `namespace`.
    ///
    /// Fails with [`plugin_options::Error::UnknownOption`] if the option is
    /// not declared in `registry`.
    pub fn bind_option(
        &mut self,
        registry: &Registry,
        namespace: &str,
        option_name: &str,
    ) -> Result<()> {
        let decl = registry.get_declaration(namespace, option_name)?;
        if let Some(previous) = self
            .options
            .insert(namespace.to_string(), decl.name.clone())
        {
            tracing::debug!(namespace, %previous, option = %decl.name, "Rebound artifact option");
        } else {
            tracing::debug!(namespace, option = %decl.name, "Bound artifact option");
        }
        Ok(())
    }

    /// The option currently bound for `namespace`.
    pub fn bound_option(&self, namespace: &str) -> Option<&str> {
        self.options.get(namespace).map(String::as_str)
    }

    /// Remove the binding for `namespace`, returning the option it named.
    pub fn unbind(&mut self, namespace: &str) -> Option<String> {
        self.options.remove(namespace)
    }

    /// Get or create the artifact directory for a test.
    ///
    /// Resolves the namespace's bound option to a base directory, appends the
    /// sanitized nodeid of `item`, and creates the result with all missing
    /// ancestors. Calling it again for the same item returns the same path.
    ///
    /// A base that resolves to nothing, to a non-path value, or to an empty
    /// path is a [`Error::MissingArtifactBase`].
    ///
    /// # Example
    ///
    /// ```
    /// use plugin_artifacts::ArtifactBindings;
    /// use plugin_options::{HostSnapshot, OptionSpec, Registry, TypeHint};
    ///
    /// let temp = tempfile::tempdir()?;
    /// let mut registry = Registry::new();
    /// registry.declare(
    ///     "ns",
    ///     OptionSpec::new("artifacts_dir")
    ///         .default(temp.path().join("results"))
    ///         .type_hint(TypeHint::Path),
    /// );
    ///
    /// let mut bindings = ArtifactBindings::new();
    /// bindings.bind_option(&registry, "ns", "artifacts_dir")?;
    ///
    /// let dir = bindings.get_artifact_dir(&registry, "ns", &HostSnapshot::new(), "test_a.py::test_b")?;
    /// assert!(dir.ends_with("results/test-a-py-test-b"));
    /// assert!(dir.is_dir());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get_artifact_dir<H, I>(
        &self,
        registry: &Registry,
        namespace: &str,
        host: &H,
        item: &I,
    ) -> Result<PathBuf>
    where
        H: HostConfig + ?Sized,
        I: TestItem + ?Sized,
    {
        let option = self
            .bound_option(namespace)
            .ok_or_else(|| Error::UnboundArtifactOption {
                namespace: namespace.to_string(),
            })?;

        let missing_base = || Error::MissingArtifactBase {
            namespace: namespace.to_string(),
            option: normalize_name(option),
        };
        let base = registry
            .resolve(namespace, host, option, None)?
            .ok_or_else(missing_base)?;
        let base = match try_cast(&base, TypeHint::Path) {
            Ok(OptionValue::Path(path)) if !path.as_os_str().is_empty() => path,
            _ => return Err(missing_base()),
        };

        let dir = base.join(sanitize(item.nodeid()));
        ensure_dir(&dir)?;
        Ok(dir)
    }
}
