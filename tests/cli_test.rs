//! Integration tests for the mxjdk binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temp directory with a user home, a suite checkout and some fake JDKs.
struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("home")).unwrap();
        fs::create_dir_all(temp.path().join("work/graal/mx.graal")).unwrap();
        Self { temp }
    }

    fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    fn suite(&self) -> PathBuf {
        self.temp.path().join("work/graal")
    }

    fn jdk(&self, name: &str, version: &str) -> PathBuf {
        let home = self.temp.path().join("jdks").join(name);
        fs::create_dir_all(&home).unwrap();
        fs::write(
            home.join("release"),
            format!("JAVA_VERSION=\"{}\"\n", version),
        )
        .unwrap();
        home
    }

    fn user_env(&self, content: &str) {
        let mx = self.home().join(".mx");
        fs::create_dir_all(&mx).unwrap();
        fs::write(mx.join("env"), content).unwrap();
    }

    /// Command isolated from the caller's home, JAVA_HOME and PATH.
    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("mxjdk"));
        cmd.env("HOME", self.home())
            .env("PATH", "")
            .env("NO_COLOR", "1")
            .env_remove("JAVA_HOME")
            .env_remove("MXJDK_DEFAULT_HOME")
            .env_remove("RUST_LOG")
            .arg("--project")
            .arg(self.suite());
        cmd
    }
}

fn joined(paths: &[&Path]) -> String {
    std::env::join_paths(paths)
        .unwrap()
        .to_string_lossy()
        .into_owned()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("mxjdk"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Locate a Java runtime"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("mxjdk"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn find_prints_first_matching_home() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();
    let jdk11 = fx.jdk("jdk-11", "11.0.21");
    let jdk17 = fx.jdk("jdk-17", "17.0.9");
    fx.user_env(&format!(
        "JAVA_HOME={}\nEXTRA_JAVA_HOMES={}\n",
        jdk11.display(),
        joined(&[&jdk17])
    ));

    fx.cmd()
        .args(["find", "17"])
        .assert()
        .success()
        .stdout(format!("{}\n", jdk17.display()));
    Ok(())
}

#[cfg(unix)]
#[test]
fn find_uses_suite_env_and_jre_parent() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();
    let jdk8 = fx.jdk("jdk8", "1.8.0_392");
    fs::create_dir_all(jdk8.join("jre"))?;
    fs::write(
        fx.suite().join("mx.graal/env"),
        format!("JAVA_HOME={}\n", jdk8.join("jre").display()),
    )?;

    fx.cmd()
        .args(["find", "1.8"])
        .assert()
        .success()
        .stdout(predicate::str::contains(jdk8.display().to_string()));
    Ok(())
}

#[cfg(unix)]
#[test]
fn find_falls_back_to_default_home() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();
    let jdk11 = fx.jdk("jdk-11", "11.0.21");
    let host = fx.jdk("host", "21.0.1");

    fx.cmd()
        .env("JAVA_HOME", &jdk11)
        .arg("--default-home")
        .arg(&host)
        .args(["find", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains(host.display().to_string()))
        .stderr(predicate::str::contains("No Java runtime satisfies 8"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn find_without_any_runtime_fails() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();

    fx.cmd()
        .args(["find", "17"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no default runtime"));
    Ok(())
}

#[test]
fn find_rejects_invalid_compliance() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();

    fx.cmd()
        .args(["find", "latest"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid compliance 'latest'"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn find_json_reports_source() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();
    let jdk17 = fx.jdk("jdk-17", "17.0.9");

    let output = fx
        .cmd()
        .env("JAVA_HOME", &jdk17)
        .args(["find", "11+", "--json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["candidate"]["source"], "java_home_var");
    assert_eq!(value["platform"]["version"], "17.0.9");
    assert_eq!(value["requested"], "11+");
    Ok(())
}

#[cfg(unix)]
#[test]
fn list_shows_candidates_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();
    let jdk11 = fx.jdk("jdk-11", "11.0.21");
    let missing = fx.temp.path().join("jdks/missing");
    fx.user_env(&format!(
        "JAVA_HOME={}\nEXTRA_JAVA_HOMES={}\n",
        jdk11.display(),
        missing.display()
    ));

    fx.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("11.0.21"))
        .stdout(predicate::str::contains("unresolvable"))
        .stderr(predicate::str::contains("Java runtimes for graal"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn list_hint_stays_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();

    fx.cmd()
        .env_remove("NO_COLOR")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No candidate runtimes found"))
        .stderr(predicate::str::contains("Set JAVA_HOME"))
        .stderr(predicate::str::contains("\x1b[").not());
    Ok(())
}

#[test]
fn list_json_is_valid() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();

    let output = fx.cmd().args(["list", "--json"]).output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(value.is_array());
    Ok(())
}

#[cfg(unix)]
#[test]
fn malformed_settings_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new();
    let settings = fx.temp.path().join("mxjdk.yml");
    fs::write(&settings, "unknown_key: 1\n")?;

    fx.cmd()
        .arg("--settings")
        .arg(&settings)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("mxjdk"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mxjdk"));
    Ok(())
}
