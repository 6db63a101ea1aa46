//! Option values and the closed set of type hints that drive coercion

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A raw or coerced option value.
///
/// Hosts hand values over in whatever shape their parser produced (usually
/// strings); [`crate::cast`] turns them into the variant a [`TypeHint`] asks for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Path(PathBuf),
    StrList(Vec<String>),
    PathList(Vec<PathBuf>),
}

impl OptionValue {
    /// The type hint this value already satisfies.
    pub fn type_hint(&self) -> TypeHint {
        TypeHint::of(self)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            Self::StrList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_path_list(&self) -> Option<&[PathBuf]> {
        match self {
            Self::PathList(items) => Some(items),
            _ => None,
        }
    }

    /// Empty strings count as "not supplied" when they come from the CLI or INI layers.
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::StrList(items) => write!(f, "[{}]", items.join(", ")),
            Self::PathList(items) => {
                let rendered: Vec<String> =
                    items.iter().map(|p| p.display().to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<PathBuf> for OptionValue {
    fn from(p: PathBuf) -> Self {
        Self::Path(p)
    }
}

impl From<&Path> for OptionValue {
    fn from(p: &Path) -> Self {
        Self::Path(p.to_path_buf())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        Self::StrList(items)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(items: Vec<&str>) -> Self {
        Self::StrList(items.into_iter().map(String::from).collect())
    }
}

impl From<Vec<PathBuf>> for OptionValue {
    fn from(items: Vec<PathBuf>) -> Self {
        Self::PathList(items)
    }
}

/// Declared type of an option.
///
/// The set is closed: every hint has exactly one coercion rule in
/// [`crate::cast::try_cast`] and one INI type in [`crate::IniType::infer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeHint {
    Bool,
    Int,
    Float,
    #[default]
    Str,
    Path,
    StrList,
    PathList,
}

impl TypeHint {
    /// The hint a value already matches.
    pub fn of(value: &OptionValue) -> Self {
        match value {
            OptionValue::Bool(_) => Self::Bool,
            OptionValue::Int(_) => Self::Int,
            OptionValue::Float(_) => Self::Float,
            OptionValue::Str(_) => Self::Str,
            OptionValue::Path(_) => Self::Path,
            OptionValue::StrList(_) => Self::StrList,
            OptionValue::PathList(_) => Self::PathList,
        }
    }

    /// Whether `value` is already of this type.
    pub fn matches(self, value: &OptionValue) -> bool {
        Self::of(value) == self
    }

    pub fn is_list(self) -> bool {
        matches!(self, Self::StrList | Self::PathList)
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Path => "path",
            Self::StrList => "list[str]",
            Self::PathList => "list[path]",
        };
        f.write_str(name)
    }
}
