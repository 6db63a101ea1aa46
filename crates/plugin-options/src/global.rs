//! Process-wide registry for hosts with phase-split hooks
//!
//! Plugin setup and test execution run in separate host hooks with no shared
//! context object, so the registry lives here for the whole process. Setup
//! may declare options on one thread and tests may resolve them on others.
//! Call [`reset`] or [`replace`] to start from a clean registry.

use crate::host::{HostConfig, HostParser};
use crate::registry::{OptionSpec, Registry};
use crate::value::{OptionValue, TypeHint};
use crate::Result;
use std::sync::{LazyLock, PoisonError, RwLock};

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Run `f` with shared access to the process-wide registry.
pub fn with_registry<R>(f: impl FnOnce(&Registry) -> R) -> R {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    f(&registry)
}

/// Run `f` with exclusive access to the process-wide registry.
pub fn with_registry_mut<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut registry)
}

/// Swap in a new registry, returning the old one.
pub fn replace(registry: Registry) -> Registry {
    with_registry_mut(|current| std::mem::replace(current, registry))
}

/// Clear every declaration and override.
pub fn reset() {
    replace(Registry::new());
}

pub fn declare(namespace: &str, spec: OptionSpec) {
    with_registry_mut(|registry| registry.declare(namespace, spec));
}

pub fn set_override(namespace: &str, name: &str, value: impl Into<OptionValue>) -> Result<()> {
    with_registry_mut(|registry| registry.set_override(namespace, name, value))
}

pub fn resolve<H>(
    namespace: &str,
    host: &H,
    name: &str,
    type_hint: Option<TypeHint>,
) -> Result<Option<OptionValue>>
where
    H: HostConfig + ?Sized,
{
    with_registry(|registry| registry.resolve(namespace, host, name, type_hint))
}

pub fn register_with_host<P>(namespace: &str, parser: &mut P) -> usize
where
    P: HostParser + ?Sized,
{
    with_registry(|registry| registry.register_with_host(namespace, parser))
}
