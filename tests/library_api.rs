use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use nsgen::{
    Action, AppError, EnvironmentSource, PrimaryTemplate, RunOutcome, RunSettings, SkipReason,
    init_templates, run, run_with_env,
};
use serial_test::serial;
use tempfile::TempDir;

struct Request(HashMap<&'static str, &'static str>);

impl Request {
    fn new(action: &'static str, extra: &[(&'static str, &'static str)]) -> Self {
        let mut vars: HashMap<_, _> = [
            ("ACTION", action),
            ("OPENVIRONMENT", "prod"),
            ("REGION", "CH"),
            ("CLUSTERNAME", "aks01"),
            ("SWCI", "ab12"),
            ("SUFFIX", "web"),
        ]
        .into_iter()
        .collect();
        vars.extend(extra.iter().copied());
        Self(vars)
    }
}

impl EnvironmentSource for Request {
    fn var(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.0.get(key).map(|v| v.to_string()))
    }
}

#[test]
#[serial]
fn public_api_lifecycle() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let target = root.join("environment/prod/ch/aks01/ab12-prod-web");

    let installed = init_templates(root).expect("init failed");
    assert!(installed.contains(&"kustomization.yaml".to_string()));

    let outcome = run_with_env(root, RunSettings::default(), &Request::new("add", &[]))
        .expect("add failed");
    match &outcome {
        RunOutcome::Applied { action, outcome } => {
            assert_eq!(*action, Action::Add);
            assert_eq!(outcome.primary, PrimaryTemplate::Default);
            assert!(outcome.skipped.contains(&("gateway.yaml".to_string(), SkipReason::NoDomain)));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(outcome.display_path(), "environment/prod/ch/aks01/ab12-prod-web");
    assert!(target.join("kustomization.yaml").is_file());

    let modify = Request::new("modify", &[("FULLDOMAINNAME", "web.example.com")]);
    run_with_env(root, RunSettings::default(), &modify).expect("modify failed");
    assert!(fs::read_to_string(target.join("gateway.yaml")).unwrap().contains("web.example.com"));

    let removed = run_with_env(root, RunSettings::default(), &Request::new("REMOVE", &[]))
        .expect("remove failed");
    assert!(matches!(removed, RunOutcome::Removed(_)));
    let remaining: Vec<_> = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(remaining, vec!["kustomization.yaml".to_string()]);
}

#[test]
#[serial]
fn unknown_action_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    init_templates(temp.path()).unwrap();

    let err = run_with_env(temp.path(), RunSettings::default(), &Request::new("delete", &[]))
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(!temp.path().join("environment").exists());
}

/// Every file under `dir`, keyed by path relative to `dir`.
fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let key = path.strip_prefix(dir).unwrap().to_string_lossy().to_string();
                files.insert(key, fs::read(&path).unwrap());
            }
        }
    }
    files
}

#[test]
#[serial]
fn repeated_add_produces_identical_overlay() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    init_templates(root).unwrap();
    let request = Request::new("add", &[("FULLDOMAINNAME", "web.example.com")]);

    run_with_env(root, RunSettings::default(), &request).expect("first add failed");
    let first = snapshot(&root.join("environment"));
    run_with_env(root, RunSettings::default(), &request).expect("second add failed");
    let second = snapshot(&root.join("environment"));

    assert!(first.contains_key("prod/ch/aks01/ab12-prod-web/namespace.yaml"));
    assert_eq!(first, second);
}

#[test]
#[serial]
fn run_reads_process_environment() {
    let temp = TempDir::new().unwrap();
    init_templates(temp.path()).unwrap();

    let vars = [
        ("ACTION", "add"),
        ("OPENVIRONMENT", "test"),
        ("REGION", "eu"),
        ("CLUSTERNAME", "c1"),
        ("SWCI", "s1"),
        ("SUFFIX", "default"),
    ];
    unsafe {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
    }

    let result = run(temp.path(), RunSettings::default());

    unsafe {
        for (key, _) in vars {
            std::env::remove_var(key);
        }
    }

    let outcome = result.expect("run failed");
    assert_eq!(outcome.display_path(), "environment/dev/eu/c1/s1-test-default");
}
