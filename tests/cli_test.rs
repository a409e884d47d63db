use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::{Command,Stdio}; // Run programs
use std::io::Write;

/// Point every grammar search path at the scratch directory so the outcome
/// does not depend on grammars installed on the test machine.
fn isolate(cmd: &mut Command,dir: &std::path::Path) {
    cmd.env("GBKIT_GRAMMAR_PATH",dir)
        .env("XDG_DATA_HOME",dir)
        .env("HOME",dir)
        .current_dir(dir);
}

#[test]
fn check_missing_artifact_fails_with_fixed_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("gbkit")?;
    isolate(&mut cmd,dir.path());
    cmd.arg("check")
        .arg("-g").arg("rgbasm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading Game Boy assembly grammar"));
    Ok(())
}

#[test]
fn check_explicit_library_missing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("gbkit")?;
    isolate(&mut cmd,dir.path());
    cmd.arg("check")
        .arg("-g").arg("rgbasm_identifier")
        .arg("--lib").arg(dir.path().join("librgbasm_identifier.so"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading Game Boy assembly grammar"));
    Ok(())
}

#[test]
fn check_rejects_unknown_grammar() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("gbkit")?;
    cmd.arg("check")
        .arg("-g").arg("agbasm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("agbasm"));
    Ok(())
}

#[test]
fn describe_missing_artifact_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("gbkit")?;
    isolate(&mut cmd,dir.path());
    cmd.arg("describe")
        .arg("-g").arg("rgbasm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading Game Boy assembly grammar"));
    Ok(())
}

#[test]
fn paths_include_env_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("gbkit")?;
    isolate(&mut cmd,dir.path());
    cmd.arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().to_string()));
    Ok(())
}

#[test]
fn hardware_injects_symbols() -> Result<(), Box<dyn std::error::Error>> {
    let hardware_inc =
r#"DEF rLCDC EQU $FF40
DEF rSTAT EQU $FF41
def rLY equ $FF44
DEF lowercase_name EQU 0
"#;
    let target =
r#"(call
  ; WARN: script-generated content, do not edit
  "OLD_PLACEHOLDER"
  ; END WARN
  @constant)
"#;
    let dir = tempfile::tempdir()?;
    let target_path = dir.path().join("highlights.scm");
    std::fs::write(&target_path,target)?;
    let mut cmd = Command::cargo_bin("gbkit")?;
    let mut child = cmd.arg("hardware")
        .arg("-f").arg(&target_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn child process");
    let mut stdin = child.stdin.take().expect("Failed to open stdin");
    std::thread::spawn(move || {
        stdin.write_all(hardware_inc.as_bytes()).expect("Failed to write to stdin");
    });

    let output = child.wait_with_output().expect("Failed to read stdout");
    assert!(output.status.success());
    let object = String::from_utf8_lossy(&output.stdout);
    assert!(object.contains("  \"rLCDC\" \"rLY\" \"rSTAT\"\n"));
    assert!(!object.contains("OLD_PLACEHOLDER"));
    assert!(!object.contains("lowercase_name"));
    Ok(())
}

#[test]
fn hardware_missing_support_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("gbkit")?;
    let mut child = cmd.arg("hardware")
        .arg("-f").arg(dir.path().join("no-such.scm"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn child process");
    let mut stdin = child.stdin.take().expect("Failed to open stdin");
    std::thread::spawn(move || {
        stdin.write_all(b"DEF rLCDC EQU $FF40\n").expect("Failed to write to stdin");
    });

    let output = child.wait_with_output().expect("Failed to read stdout");
    assert!(!output.status.success());
    Ok(())
}
