//! Option registry and resolution for test-framework plugins
//!
//! Plugins declare options under their own namespace, expose them to the
//! host's command line and INI schema, and read them back through a fixed
//! precedence chain:
//!
//! ```text
//! runtime override  >  command line  >  INI / project file  >  default
//! ```
//!
//! Every resolved value is cast to the option's [`TypeHint`].
//!
//! # Example
//!
//! ```
//! use plugin_options::{Availability, HostSnapshot, OptionSpec, OptionValue, Registry, TypeHint};
//!
//! let mut registry = Registry::new();
//! registry.declare(
//!     "my_plugin",
//!     OptionSpec::new("headless")
//!         .default(true)
//!         .help("Run browsers without a window")
//!         .available(Availability::All)
//!         .type_hint(TypeHint::Bool),
//! );
//!
//! let mut host = HostSnapshot::new();
//! registry.register_with_host("my_plugin", &mut host);
//!
//! let host = host.with_cli("headless", "off");
//! let headless = registry.resolve("my_plugin", &host, "headless", None)?;
//! assert_eq!(headless, Some(OptionValue::Bool(false)));
//! # Ok::<(), plugin_options::Error>(())
//! ```

pub mod cast;
pub mod error;
pub mod global;
pub mod host;
pub mod project;
pub mod register;
pub mod registry;
pub mod resolver;
pub mod value;

pub use cast::{CastError, cast, try_cast};
pub use error::{Error, Result};
pub use host::{CliOption, HostConfig, HostParser, HostSnapshot, IniOption};
pub use project::ProjectFile;
pub use registry::{
    Availability, IniType, OptionDeclaration, OptionSpec, Registry, normalize_name,
};
pub use resolver::{Resolved, ValueSource};
pub use value::{OptionValue, TypeHint};
