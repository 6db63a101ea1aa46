//! Test-item identity

/// Anything that can name a test with a stable, unique string.
pub trait TestItem {
    /// Module/file path, test name and optional parametrization, e.g.
    /// `tests/test_login.py::test_submit[chromium]`.
    fn nodeid(&self) -> &str;
}

impl TestItem for str {
    fn nodeid(&self) -> &str {
        self
    }
}

impl TestItem for String {
    fn nodeid(&self) -> &str {
        self
    }
}

/// A nodeid assembled from its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestId {
    nodeid: String,
}

impl TestId {
    /// `path::name`, e.g. `tests/test_login.py::TestForm::test_submit`.
    pub fn new(path: &str, name: &str) -> Self {
        Self {
            nodeid: format!("{path}::{name}"),
        }
    }

    /// Append a parametrization suffix: `path::name[params]`.
    pub fn with_params(mut self, params: &str) -> Self {
        self.nodeid = format!("{}[{params}]", self.nodeid);
        self
    }
}

impl TestItem for TestId {
    fn nodeid(&self) -> &str {
        &self.nodeid
    }
}
