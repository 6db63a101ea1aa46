//! Project-file INI layer
//!
//! Reads option values from a TOML project file. Both the pyproject layout
//! and a bare table are understood:
//!
//! ```toml
//! [tool.pytest.ini_options]
//! artifacts_dir = "test-results"
//! record_video = true
//! browsers = ["chromium", "firefox"]
//! ```
//!
//! ```toml
//! [ini_options]
//! artifacts_dir = "test-results"
//! ```
//!
//! When both are present, `[tool.pytest.ini_options]` wins per key.

use crate::value::OptionValue;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, Default, Deserialize)]
struct RawProject {
    #[serde(default)]
    tool: Option<RawTool>,
    #[serde(default)]
    ini_options: Option<toml::Table>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTool {
    #[serde(default)]
    pytest: Option<RawPytest>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPytest {
    #[serde(default)]
    ini_options: Option<toml::Table>,
}

/// INI values loaded from a project file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFile {
    path: Option<PathBuf>,
    values: BTreeMap<String, OptionValue>,
}

impl ProjectFile {
    /// Load and parse a project file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut project = Self::parse_from(&content, path)?;
        project.path = Some(path.to_path_buf());
        tracing::debug!(?path, entries = project.len(), "Loaded project file");
        Ok(project)
    }

    /// Parse project-file content that did not come from disk.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_from(content, Path::new(INLINE_SOURCE))
    }

    fn parse_from(content: &str, origin: &Path) -> Result<Self> {
        let raw: RawProject = toml::from_str(content).map_err(|e| Error::ProjectFileParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut values = BTreeMap::new();
        let pytest_table = raw
            .tool
            .and_then(|tool| tool.pytest)
            .and_then(|pytest| pytest.ini_options);
        for table in [raw.ini_options, pytest_table].into_iter().flatten() {
            for (name, value) in table {
                match convert(&value) {
                    Some(converted) => {
                        values.insert(name, converted);
                    }
                    None => tracing::warn!(
                        ?origin,
                        option = %name,
                        kind = value.type_str(),
                        "Ignoring project-file entry of unsupported type"
                    ),
                }
            }
        }

        Ok(Self { path: None, values })
    }

    /// Where this file was loaded from, if it came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn into_values(self) -> impl Iterator<Item = (String, OptionValue)> {
        self.values.into_iter()
    }
}

fn convert(value: &toml::Value) -> Option<OptionValue> {
    match value {
        toml::Value::Boolean(b) => Some(OptionValue::Bool(*b)),
        toml::Value::Integer(i) => Some(OptionValue::Int(*i)),
        toml::Value::Float(f) => Some(OptionValue::Float(*f)),
        toml::Value::String(s) => Some(OptionValue::Str(s.clone())),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
            .map(OptionValue::StrList),
        toml::Value::Datetime(_) | toml::Value::Table(_) => None,
    }
}
