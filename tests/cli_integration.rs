//! CLI integration tests for jampkg.
//!
//! These tests run the binary against the builtin catalog and against
//! package-set overrides written to temporary projects.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the jampkg binary command, isolated from user configuration.
fn jampkg(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jampkg").unwrap();
    cmd.current_dir(cwd.path())
        .env("JAMPKG_HOME", cwd.path().join("home"))
        .env_remove("JAMPKG_ARCH");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_config(dir: &TempDir, contents: &str) {
    let config_dir = dir.path().join(".jampkg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), contents).unwrap();
}

// ============================================================================
// jampkg list
// ============================================================================

#[test]
fn test_list_all_packages() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("haiku r1~beta5_1"))
        .stdout(predicate::str::contains("webpositive"));
}

#[test]
fn test_list_core_packages() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["list", "--core", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"haiku_loader\""))
        .stdout(predicate::str::contains("haiku_devel").not());
}

#[test]
fn test_list_unknown_category_is_empty() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["list", "--category", "nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_output_color_from_config() {
    let tmp = temp_dir();
    write_config(&tmp, "[output]\ncolor = true\n");

    jampkg(&tmp)
        .args(["deps", "unknown_pkg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\x1b[1;33mwarning\x1b[0m"));

    jampkg(&tmp)
        .args(["list", "--category", "nonexistent", "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: unknown category"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_list_optional_uses_available_packages() {
    let tmp = temp_dir();
    write_config(
        &tmp,
        r#"
[profile]
available = ["netfs", "haiku"]
"#,
    );

    jampkg(&tmp)
        .args(["list", "--optional"])
        .assert()
        .success()
        .stdout(predicate::eq("netfs r1~beta5_1\n"));
}

// ============================================================================
// jampkg show
// ============================================================================

#[test]
fn test_show_package_info() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["show", "haiku_devel", "--package-info", "--arch", "arm64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("architecture  arm64"))
        .stdout(predicate::str::contains("requires {\n\thaiku=arm64\n}"));
}

#[test]
fn test_show_unknown_package_fails() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["show", "unknown_pkg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: package `unknown_pkg` not found"))
        .stderr(predicate::str::contains("= architecture: x86_64"))
        .stderr(predicate::str::contains("= help: Run `jampkg list`"));
}

// ============================================================================
// jampkg deps / tree / order
// ============================================================================

#[test]
fn test_deps_transitive() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["deps", "makefile_engine", "--transitive"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "cmd:make\nhaiku=x86_64\nhaiku_devel=x86_64\n",
        ));
}

#[test]
fn test_deps_unknown_package_is_empty() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["deps", "unknown_pkg"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not in the x86_64 catalog"));
}

#[test]
fn test_deps_all_json() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["deps", "--all", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"unresolved\""))
        .stdout(predicate::str::contains("lib:libWebKitLegacy"));
}

#[test]
fn test_tree_marks_unresolved() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["tree", "makefile_engine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("haiku_devel=x86_64"))
        .stdout(predicate::str::contains("cmd:make (unresolved)"));
}

#[test]
fn test_order_dependencies_first() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["order", "netfs"])
        .assert()
        .success()
        .stdout(predicate::eq("haiku\nuserland_fs\nnetfs\n"));
}

// ============================================================================
// jampkg with package sets
// ============================================================================

#[test]
fn test_package_set_from_config() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("packages.toml"),
        r#"
mode = "replace"

[[package]]
name = "A"
requires = ["B=${arch}"]
core = true

[[package]]
name = "B"
requires = ["A=${arch}"]
"#,
    )
    .unwrap();
    write_config(&tmp, "[profile]\npackages = \"packages.toml\"\n");

    jampkg(&tmp)
        .args(["deps", "A", "--transitive"])
        .assert()
        .success()
        .stdout(predicate::eq("A=x86_64\nB=x86_64\n"));

    jampkg(&tmp)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("packages:     2 (1 core, 1 optional)"))
        .stdout(predicate::str::contains("cycles:       yes"));
}

#[test]
fn test_duplicate_package_set_is_config_error() {
    let tmp = temp_dir();
    fs::write(
        tmp.path().join("dup.toml"),
        r#"
[[package]]
name = "netfs"

[[package]]
name = "netfs"
"#,
    )
    .unwrap();

    jampkg(&tmp)
        .args(["list", "--packages", "dup.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "package `netfs` is defined more than once",
        ));
}

#[test]
fn test_unreadable_package_set_points_at_file() {
    let tmp = temp_dir();
    fs::write(tmp.path().join("broken.toml"), "[[package]]\nnaem = \"x\"\n").unwrap();

    jampkg(&tmp)
        .args(["list", "--packages", "broken.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: could not use package set"))
        .stderr(predicate::str::contains("--> "))
        .stderr(predicate::str::contains("broken.toml"));
}

#[test]
fn test_invalid_architecture_is_config_error() {
    let tmp = temp_dir();

    jampkg(&tmp)
        .args(["info", "--arch", "x86-64"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid architecture tag"));
}

#[test]
fn test_info_fingerprint_stable() {
    let tmp = temp_dir();

    let first = jampkg(&tmp).args(["info", "--json"]).output().unwrap();
    let second = jampkg(&tmp).args(["info", "--json"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
