//! Process-wide artifact bindings
//!
//! Pairs with [`plugin_options::global`]: bindings are validated against and
//! resolved through the process-wide option registry kept there, and live
//! for the lifetime of the process.

use crate::bindings::ArtifactBindings;
use crate::item::TestItem;
use crate::Result;
use plugin_options::HostConfig;
use plugin_options::global::with_registry;
use std::path::PathBuf;
use std::sync::{LazyLock, PoisonError, RwLock};

static BINDINGS: LazyLock<RwLock<ArtifactBindings>> =
    LazyLock::new(|| RwLock::new(ArtifactBindings::new()));

/// Run `f` with shared access to the process-wide bindings.
pub fn with_bindings<R>(f: impl FnOnce(&ArtifactBindings) -> R) -> R {
    let bindings = BINDINGS.read().unwrap_or_else(PoisonError::into_inner);
    f(&bindings)
}

fn with_bindings_mut<R>(f: impl FnOnce(&mut ArtifactBindings) -> R) -> R {
    let mut bindings = BINDINGS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut bindings)
}

/// Drop every binding.
pub fn reset() {
    with_bindings_mut(|bindings| *bindings = ArtifactBindings::new());
}

pub fn bind_option(namespace: &str, option_name: &str) -> Result<()> {
    with_registry(|registry| {
        with_bindings_mut(|bindings| bindings.bind_option(registry, namespace, option_name))
    })
}

pub fn bound_option(namespace: &str) -> Option<String> {
    with_bindings(|bindings| bindings.bound_option(namespace).map(String::from))
}

pub fn get_artifact_dir<H, I>(namespace: &str, host: &H, item: &I) -> Result<PathBuf>
where
    H: HostConfig + ?Sized,
    I: TestItem + ?Sized,
{
    with_registry(|registry| {
        with_bindings(|bindings| bindings.get_artifact_dir(registry, namespace, host, item))
    })
}
