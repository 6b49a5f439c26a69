// tests/integration_test.rs
use std::process::Command;

fn pkg_release() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pkg-release"))
}

#[test]
fn test_help() {
    let output = pkg_release()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pkg-release"));
    assert!(stdout.contains("--before-release"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_version() {
    let output = pkg_release()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_multi_digit_manifest_version_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "demo", "version": "1.12.3" }"#,
    )
    .unwrap();

    let output = pkg_release()
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("1.12.3"), "stderr was: {}", stderr);
}

#[test]
fn test_missing_manifest_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = pkg_release()
        .current_dir(dir.path())
        .args(["--manifest", "missing.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Manifest error"), "stderr was: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_outside_git_repository_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "demo", "version": "0.1.0" }"#,
    )
    .unwrap();

    // Keep git from discovering a repository above the temp dir
    let output = pkg_release()
        .current_dir(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path().parent().unwrap())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("Cannot find a git project!") || stderr.contains("No remote repository!"),
        "stderr was: {}",
        stderr
    );
}
