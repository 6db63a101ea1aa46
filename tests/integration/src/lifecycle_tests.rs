//! End-to-end plugin lifecycle through the process-wide registry
//!
//! Exercises the flow a host drives: declare options at setup, register them
//! with the host parser, bind the artifact option, then resolve values and
//! artifact directories while tests run.

use plugin_artifacts::{TestId, global as artifacts};
use plugin_options::{
    Availability, Error, HostParser, HostSnapshot, OptionSpec, OptionValue, ProjectFile, TypeHint,
    global as options,
};
use plugin_test_utils::{
    RecordingParser, init_tracing, lock_global_state, scratch_dir, write_project_file,
};
use serde_json::json;
use std::path::PathBuf;

const NS: &str = "browser_plugin";

fn plugin_setup(artifact_default: PathBuf) {
    options::reset();
    artifacts::reset();

    options::declare(
        NS,
        OptionSpec::new("browser_artifacts_dir")
            .default(artifact_default)
            .help("Where screenshots and traces are written")
            .available(Availability::All)
            .type_hint(TypeHint::Path),
    );
    options::declare(
        NS,
        OptionSpec::new("headless")
            .default(true)
            .help("Run without a window")
            .available(Availability::Cli)
            .type_hint(TypeHint::Bool),
    );
    options::declare(
        NS,
        OptionSpec::new("browsers")
            .default(vec!["chromium"])
            .help("Browsers to launch")
            .available(Availability::Ini)
            .type_hint(TypeHint::StrList),
    );
    options::declare(
        NS,
        OptionSpec::new("slow_mo_ms")
            .default(0)
            .available(Availability::Internal),
    );

    artifacts::bind_option(NS, "browser_artifacts_dir").unwrap();
}

#[test]
fn test_setup_state_is_visible_to_worker_threads() {
    let _guard = lock_global_state();
    let temp = scratch_dir();
    plugin_setup(temp.path().join("shared"));
    options::set_override(NS, "headless", false).unwrap();

    let workers: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|name| {
            std::thread::spawn(move || {
                let host = HostSnapshot::new();
                let headless = options::resolve(NS, &host, "headless", None).unwrap();
                let item = format!("tests/test_{name}.py::test_{name}");
                let dir = artifacts::get_artifact_dir(NS, &host, item.as_str()).unwrap();
                (headless, dir)
            })
        })
        .collect();

    for worker in workers {
        let (headless, dir) = worker.join().expect("worker should not panic");
        assert_eq!(headless, Some(OptionValue::Bool(false)));
        assert!(dir.starts_with(temp.path().join("shared")));
        assert!(dir.is_dir());
    }
}

fn register(host: &mut dyn HostParser) -> usize {
    options::register_with_host(NS, host)
}

#[test]
fn test_full_lifecycle() {
    let _guard = lock_global_state();
    init_tracing();
    let temp = scratch_dir();
    plugin_setup(temp.path().join("default-artifacts"));

    let project_path = write_project_file(
        temp.path(),
        r#"
[tool.pytest.ini_options]
browsers = """
chromium
firefox

webkit
"""
"#,
    );

    // Setup phase: expose options to the host.
    let mut recorder = RecordingParser::new();
    assert_eq!(register(&mut recorder), 4);
    assert!(recorder.cli_flag("--browser-artifacts-dir").is_some());
    assert!(recorder.cli_flag("--headless").is_some());
    assert!(recorder.ini_entry("browsers").is_some());
    assert!(recorder.cli_flag("--slow-mo-ms").is_none());

    let mut host = HostSnapshot::new();
    register(&mut host);
    let host = host
        .with_cli("headless", "no")
        .with_project_file(ProjectFile::load(&project_path).unwrap());

    // Execution phase.
    assert_eq!(
        options::resolve(NS, &host, "headless", None).unwrap(),
        Some(OptionValue::Bool(false))
    );
    assert_eq!(
        options::resolve(NS, &host, "browsers", None).unwrap(),
        Some(OptionValue::from(vec!["chromium", "firefox", "webkit"]))
    );
    assert_eq!(
        options::resolve(NS, &host, "slow_mo_ms", None).unwrap(),
        Some(OptionValue::Int(0))
    );

    let item = TestId::new("tests/test_login.py", "test_submit").with_params("firefox");
    let dir = artifacts::get_artifact_dir(NS, &host, &item).unwrap();
    assert_eq!(
        dir,
        temp.path()
            .join("default-artifacts")
            .join("tests-test-login-py-test-submit-firefox")
    );
    assert!(dir.is_dir());
}

#[test]
fn test_runtime_override_during_execution() {
    let _guard = lock_global_state();
    let temp = scratch_dir();
    plugin_setup(temp.path().join("default-artifacts"));
    let host = HostSnapshot::new();

    options::set_override(NS, "slow_mo_ms", "250").unwrap();
    options::set_override(NS, "browser_artifacts_dir", temp.path().join("redirected")).unwrap();

    assert_eq!(
        options::resolve(NS, &host, "slow_mo_ms", None).unwrap(),
        Some(OptionValue::Int(250))
    );
    let dir = artifacts::get_artifact_dir(NS, &host, "tests/test_a.py::test_b").unwrap();
    assert!(dir.starts_with(temp.path().join("redirected")));

    let dump = options::with_registry(|registry| registry.to_json(NS));
    let slow_mo = dump["options"]
        .as_array()
        .unwrap()
        .iter()
        .find(|option| option["name"] == "slow_mo_ms")
        .unwrap();
    assert_eq!(slow_mo["available"], json!("none"));
    assert_eq!(slow_mo["override"], json!("250"));
}

#[test]
fn test_typo_in_option_name_fails_loudly() {
    let _guard = lock_global_state();
    let temp = scratch_dir();
    plugin_setup(temp.path().join("a"));
    let host = HostSnapshot::new();

    for result in [
        options::resolve(NS, &host, "headles", None).map(|_| ()),
        options::set_override(NS, "headles", true),
    ] {
        assert!(matches!(result, Err(Error::UnknownOption { .. })));
    }
    assert!(matches!(
        artifacts::bind_option(NS, "artifacts_dir"),
        Err(plugin_artifacts::Error::Options(Error::UnknownOption { .. }))
    ));
    assert_eq!(
        artifacts::bound_option(NS).as_deref(),
        Some("browser_artifacts_dir")
    );
}
