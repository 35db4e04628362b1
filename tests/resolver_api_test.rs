//! Integration tests for discovery and resolution.

use mxjdk::compliance::Compliance;
use mxjdk::discovery::{CandidateCollector, CandidateSource, Project};
use mxjdk::platform::{
    InMemoryRegistry, PlatformDescriptor, PlatformRegistry, ReleaseFileRegistry,
};
use mxjdk::resolver::Resolver;
use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a fake JDK with a `release` file.
fn fake_jdk(root: &Path, name: &str, version: &str) -> PathBuf {
    let home = root.join("jdks").join(name);
    fs::create_dir_all(&home).unwrap();
    fs::write(
        home.join("release"),
        format!("IMPLEMENTOR=\"Test Vendor\"\nJAVA_VERSION=\"{}\"\n", version),
    )
    .unwrap();
    home
}

fn env_with_java_home(home: Option<PathBuf>) -> impl Fn(&str) -> Result<String, VarError> {
    move |key: &str| match (key, &home) {
        ("JAVA_HOME", Some(home)) => Ok(home.to_string_lossy().into_owned()),
        _ => Err(VarError::NotPresent),
    }
}

fn write_env(path: &Path, java_home: &Path, extras: &[PathBuf]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let extras = std::env::join_paths(extras).unwrap();
    fs::write(
        path,
        format!(
            "JAVA_HOME={}\nEXTRA_JAVA_HOMES={}\n",
            java_home.display(),
            extras.to_string_lossy()
        ),
    )
    .unwrap();
}

fn c(s: &str) -> Compliance {
    Compliance::parse(s).unwrap()
}

#[test]
fn candidate_order_follows_precedence() {
    let temp = TempDir::new().unwrap();
    let user_home = temp.path().join("home");
    let project = Project::new(temp.path().join("work").join("graal"));

    let user_a = temp.path().join("user-a");
    let user_b = temp.path().join("user-b");
    let suite_a = temp.path().join("suite-a");
    let env_home = temp.path().join("env-home");
    let host = temp.path().join("host");

    write_env(&user_home.join(".mx/env"), &user_a, &[user_b.clone()]);
    write_env(&project.suite_env(), &suite_a, &[user_a.clone()]);

    let collector = CandidateCollector::new(
        Some(user_home),
        Some(host.clone()),
        env_with_java_home(Some(env_home.clone())),
    );

    let set = collector.collect(&project);
    let got: Vec<_> = set.iter().map(|c| (c.path.clone(), c.source)).collect();

    assert_eq!(
        got,
        vec![
            (user_a, CandidateSource::UserEnv),
            (user_b, CandidateSource::UserEnv),
            (suite_a, CandidateSource::SuiteEnv),
            (env_home, CandidateSource::JavaHomeVar),
            (host, CandidateSource::HostRuntime),
        ]
    );

    // Same inputs, same order.
    let again: Vec<_> = collector.collect(&project).iter().map(|c| c.path.clone()).collect();
    assert_eq!(again, set.iter().map(|c| c.path.clone()).collect::<Vec<_>>());
}

#[test]
fn legacy_and_bare_compliance_are_equal() {
    assert_eq!(c("8"), c("1.8"));
    assert_eq!(c("8").major(), 8);
}

#[test]
fn unsatisfiable_request_returns_default() {
    let temp = TempDir::new().unwrap();
    let jdk11 = fake_jdk(temp.path(), "jdk-11", "11.0.21");
    let host = fake_jdk(temp.path(), "host", "21.0.1");

    let collector = CandidateCollector::new(
        None,
        Some(host.clone()),
        env_with_java_home(Some(jdk11)),
    );
    let resolver = Resolver::new(collector, ReleaseFileRegistry::new(Some(host.clone())));

    let resolution = resolver.resolve(&Project::new(temp.path()), &c("1.6"));

    assert!(resolution.is_fallback());
    assert_eq!(resolution.platform.home, host);
    assert_eq!(resolution.platform.version(), Some("21.0.1"));
}

#[test]
fn unsatisfiable_request_without_host_still_returns_descriptor() {
    let temp = TempDir::new().unwrap();
    let collector = CandidateCollector::new(None, None, env_with_java_home(None));
    let resolver = Resolver::new(collector, ReleaseFileRegistry::new(None));

    let found = resolver.find(&Project::new(temp.path()), &c("17"));
    assert_eq!(found.name, "default");
    assert!(!found.is_valid());
}

#[test]
fn jre_candidate_is_retried_against_parent() {
    let temp = TempDir::new().unwrap();
    let jdk8 = fake_jdk(temp.path(), "jdk1.8.0_392", "1.8.0_392");
    let jre = jdk8.join("jre");
    fs::create_dir_all(&jre).unwrap();

    let collector = CandidateCollector::new(None, None, env_with_java_home(Some(jre)));
    let resolver = Resolver::new(collector, ReleaseFileRegistry::default());

    let found = resolver.find(&Project::new(temp.path()), &c("8"));
    assert_eq!(found.home, jdk8);
    assert_eq!(found.name, "jdk1.8.0_392");
}

#[test]
fn first_satisfying_candidate_wins_and_stops_probing() {
    let temp = TempDir::new().unwrap();
    let user_home = temp.path().join("home");
    let jdk11 = PathBuf::from("/jdks/11");
    let jdk8 = PathBuf::from("/jdks/8");
    let jdk17 = PathBuf::from("/jdks/17");
    let later17 = PathBuf::from("/jdks/17-later");
    write_env(
        &user_home.join(".mx/env"),
        &jdk11,
        &[jdk8.clone(), jdk17.clone(), later17.clone()],
    );

    let registry = InMemoryRegistry::new()
        .with_platform(PlatformDescriptor::java_se(&jdk11, "11.0.2"))
        .with_platform(PlatformDescriptor::java_se(&jdk8, "1.8"))
        .with_platform(PlatformDescriptor::java_se(&jdk17, "17.0.9"))
        .with_platform(PlatformDescriptor::java_se(&later17, "17.0.10"));
    let collector = CandidateCollector::new(Some(user_home), None, env_with_java_home(None));
    let resolver = Resolver::new(collector, &registry);

    let found = resolver.find(&Project::new(temp.path().join("suite")), &c("17"));

    assert_eq!(found.home, jdk17);
    assert_eq!(registry.probed(), vec![jdk11, jdk8, jdk17]);
}

#[test]
fn suite_env_is_discovered_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    let suite_root = temp.path().join("truffle");
    let jdk17 = fake_jdk(temp.path(), "labsjdk-17", "17.0.8");
    let project = Project::new(&suite_root);
    write_env(&project.suite_env(), &jdk17, &[]);
    let nested = suite_root.join("src/com.oracle.truffle.api");
    fs::create_dir_all(&nested).unwrap();

    let collector = CandidateCollector::new(None, None, env_with_java_home(None));
    let resolver = Resolver::new(collector, ReleaseFileRegistry::default());

    let resolution = resolver.resolve(&Project::discover(&nested), &c("17+"));

    assert_eq!(resolution.platform.home, jdk17);
    assert_eq!(
        resolution.candidate.unwrap().source,
        CandidateSource::SuiteEnv
    );
}

#[test]
fn probe_lists_all_candidates_with_outcomes() {
    let temp = TempDir::new().unwrap();
    let jdk21 = fake_jdk(temp.path(), "jdk-21", "21.0.2");
    let bogus = temp.path().join("not-a-jdk");
    fs::create_dir_all(&bogus).unwrap();

    let collector = CandidateCollector::new(None, Some(jdk21.clone()), env_with_java_home(Some(bogus)));
    let registry = ReleaseFileRegistry::new(Some(jdk21));
    let resolver = Resolver::new(collector, registry);

    let probes = resolver.probe(&Project::new(temp.path()));

    assert_eq!(probes.len(), 2);
    assert!(probes[0].platform.is_none());
    let jdk = probes[1].platform.as_ref().unwrap();
    assert_eq!(jdk.vendor.as_deref(), Some("Test Vendor"));
    assert_eq!(resolver.registry().current_runtime().version(), Some("21.0.2"));
}
