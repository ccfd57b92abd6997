use std::process::{Command, Output};

use crate::common::{BINARY_PATH, LAUNCHER_ENV};

fn kc(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(BINARY_PATH);
    for name in LAUNCHER_ENV {
        command.env_remove(name);
    }
    command
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("kc should run")
}

#[test]
fn help_lists_debug_option() {
    let output = kc(&["--help"], &[]);
    assert!(output.status.success(), "kc --help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--debug"), "help: {stdout}");
    assert!(stdout.contains("start-dev"), "help: {stdout}");
}

#[test]
fn version_output_uses_name_and_semver_format() {
    let output = kc(&["--version"], &[]);
    assert!(output.status.success(), "kc --version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let mut parts = stdout.split_whitespace();
    assert_eq!(parts.next(), Some("kc"), "unexpected binary name: {stdout}");
    let version = parts.next().unwrap_or_default();
    assert!(
        version.chars().all(|c| c.is_ascii_digit() || c == '.') && version.split('.').count() == 3,
        "version should look like SemVer (X.Y.Z), got: {stdout}"
    );
}

#[test]
fn invalid_cli_debug_port_is_usage_error() {
    let output = kc(&["--debug=notaport"], &[]);
    assert_eq!(output.status.code(), Some(2), "clap usage errors exit with 2");
}

#[test]
fn invalid_trailing_debug_port_is_usage_error() {
    let output = kc(&["start-dev", "--debug=notaport"], &[]);
    assert_eq!(output.status.code(), Some(2), "clap usage errors exit with 2");
}

#[test]
fn malformed_debug_port_env_fails_before_spawning() {
    let output = kc(&[], &[("DEBUG_PORT", "eighty"), ("JAVA", "kc-missing-java")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG_PORT"), "stderr: {stderr}");
    assert!(!stderr.contains("Failed to start"), "stderr: {stderr}");
}

#[test]
fn missing_java_executable_is_reported() {
    let output = kc(&[], &[("JAVA", "kc-launcher-missing-java")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to start `kc-launcher-missing-java`"),
        "stderr: {stderr}"
    );
}

#[cfg(unix)]
mod with_fake_java {
    use std::fs;

    use super::kc;
    use crate::common::fake_java;

    const RECORDING_JAVA: &str = r#"echo "$*" >> "$(dirname "$0")/calls.log"
case "$*" in
  *rebuild-and-exit*) exit "${BUILD_EXIT:-0}" ;;
esac
exit "${RUN_EXIT:-0}""#;

    #[test]
    fn run_phase_exit_code_is_propagated() {
        let temp = tempfile::tempdir().expect("can create temporary directory");
        let java = fake_java(temp.path(), RECORDING_JAVA);
        let java = java.to_str().expect("utf-8 temp path");

        let output = kc(&["-Dkc.db=dev-mem"], &[("JAVA", java), ("RUN_EXIT", "7")]);
        assert_eq!(output.status.code(), Some(7));

        let calls = fs::read_to_string(temp.path().join("calls.log")).expect("fake java ran");
        assert_eq!(calls.lines().count(), 1, "calls: {calls}");
        assert!(calls.contains("-Dkc.db=dev-mem"), "calls: {calls}");
    }

    #[test]
    fn failed_build_phase_skips_server_start() {
        let temp = tempfile::tempdir().expect("can create temporary directory");
        let java = fake_java(temp.path(), RECORDING_JAVA);
        let java = java.to_str().expect("utf-8 temp path");

        let output = kc(&["start-dev"], &[("JAVA", java), ("BUILD_EXIT", "2")]);
        assert_eq!(output.status.code(), Some(2));

        let calls = fs::read_to_string(temp.path().join("calls.log")).expect("fake java ran");
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(lines.len(), 1, "only the build phase should run: {calls}");
        assert!(lines[0].starts_with("-Dkc.config.rebuild-and-exit=true"));
    }

    #[test]
    fn successful_build_phase_starts_server() {
        let temp = tempfile::tempdir().expect("can create temporary directory");
        let java = fake_java(temp.path(), RECORDING_JAVA);
        let java = java.to_str().expect("utf-8 temp path");

        let output = kc(&["start-dev"], &[("JAVA", java)]);
        assert_eq!(output.status.code(), Some(0));

        let calls = fs::read_to_string(temp.path().join("calls.log")).expect("fake java ran");
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(lines.len(), 2, "calls: {calls}");
        assert!(lines[1].ends_with("--profile=dev start-dev --auto-build"));
        assert!(!lines[1].contains("rebuild-and-exit"));
    }

    #[test]
    fn debug_flag_after_start_dev_enables_agent() {
        let temp = tempfile::tempdir().expect("can create temporary directory");
        let java = fake_java(temp.path(), RECORDING_JAVA);
        let java = java.to_str().expect("utf-8 temp path");

        let output = kc(&["start-dev", "--debug"], &[("JAVA", java)]);
        assert_eq!(output.status.code(), Some(0));

        let calls = fs::read_to_string(temp.path().join("calls.log")).expect("fake java ran");
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(lines.len(), 2, "calls: {calls}");
        let run: Vec<&str> = lines[1].split_whitespace().collect();
        assert!(
            run.contains(&"-agentlib:jdwp=transport=dt_socket,address=8787,server=y,suspend=n"),
            "run: {}",
            lines[1]
        );
        assert!(!run.contains(&"--debug"), "run: {}", lines[1]);
    }

    #[test]
    fn debug_port_after_runtime_option_sets_agent_address() {
        let temp = tempfile::tempdir().expect("can create temporary directory");
        let java = fake_java(temp.path(), RECORDING_JAVA);
        let java = java.to_str().expect("utf-8 temp path");

        let output = kc(&["-Dx=1", "--debug=5005"], &[("JAVA", java)]);
        assert_eq!(output.status.code(), Some(0));

        let calls = fs::read_to_string(temp.path().join("calls.log")).expect("fake java ran");
        assert!(calls.contains("address=5005"), "calls: {calls}");
        assert!(calls.contains("-Dx=1"), "calls: {calls}");
        assert!(!calls.contains("--debug=5005"), "calls: {calls}");
    }
}
