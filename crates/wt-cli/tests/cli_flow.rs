//! End-to-end tests driving the `wt` binary through stdin.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn wt_binary() -> String {
    env!("CARGO_BIN_EXE_wt").to_string()
}

/// Builds a command isolated from the user's config, environment and display.
fn wt_command(home: &Path) -> Command {
    let mut command = Command::new(wt_binary());
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("WT_HOURS_PER_DAY")
        .env_remove("WT_DEFAULT_START")
        .env_remove("WT_DEFAULT_PAUSE_MINUTES")
        .env_remove("RUST_LOG")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY");
    command
}

/// Runs the command, answering the prompts with `stdin`.
fn run_with_input(mut command: Command, stdin: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn wt");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait for wt")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_worked_hours_mode() {
    let temp = TempDir::new().unwrap();
    let mut command = wt_command(temp.path());
    command.arg("--no-copy");

    let output = run_with_input(command, "8:30\n30\n17:30\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Start Time:\tPause (min):\tEnd Time:\t"));
    assert!(out.contains("Total working hours:\t8:30"), "stdout: {out}");
    // Not a terminal, so no color codes
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_end_time_mode() {
    let temp = TempDir::new().unwrap();
    let mut command = wt_command(temp.path());
    command.args(["-t", "--no-copy"]);

    let output = run_with_input(command, "830\n60\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(!out.contains("End Time:"));
    assert!(
        out.contains("You will have worked 8 hours at:\t17:30"),
        "stdout: {out}"
    );
}

#[test]
fn test_closed_stdin_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let mut command = wt_command(temp.path());
    command.arg("--no-copy");

    let output = run_with_input(command, "");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Total working hours:\t8:00"));
}

#[test]
fn test_missing_clipboard_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    let mut command = wt_command(temp.path());
    command.arg("-t");

    let output = run_with_input(command, "9\n30\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("You will have worked 8 hours at:\t17:30"));
    assert!(
        out.contains("Clipboard functionality is not available :(")
            || out.contains("The result has been copied to your clipboard."),
        "stdout: {out}"
    );
}

#[test]
fn test_config_file_flag() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("wt.toml");
    std::fs::write(
        &config_path,
        "hours_per_day = 6\ndefault_start = \"7:00\"\ndefault_pause_minutes = 30\n",
    )
    .unwrap();

    let mut command = wt_command(temp.path());
    command.args(["-t", "--no-copy", "--config"]).arg(&config_path);

    let output = run_with_input(command, "\n\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("You will have worked 6 hours at:\t13:30"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_config_from_config_dir() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".config/wt");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "hours_per_day = 7\n").unwrap();

    let mut command = wt_command(temp.path());
    command.args(["-t", "--no-copy"]);

    let output = run_with_input(command, "8:00\n0\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("You will have worked 7 hours at:\t15:00"));
}

#[test]
fn test_environment_overrides_config() {
    let temp = TempDir::new().unwrap();
    let mut command = wt_command(temp.path());
    command
        .args(["-t", "--no-copy"])
        .env("WT_HOURS_PER_DAY", "4");

    let output = run_with_input(command, "8:00\n0\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("You will have worked 4 hours at:\t12:00"));
}

#[test]
fn test_invalid_config_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("bad.toml");
    std::fs::write(&config_path, "default_start = \"8:75\"\nhours_per_day = 6\n").unwrap();

    let mut command = wt_command(temp.path());
    command.args(["-t", "--no-copy", "--config"]).arg(&config_path);

    let output = run_with_input(command, "\n\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("You will have worked 8 hours at:\t17:30"));
}

#[test]
fn test_invalid_environment_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let mut command = wt_command(temp.path());
    command
        .args(["-t", "-v", "--no-copy"])
        .env("WT_HOURS_PER_DAY", "eight");

    let output = run_with_input(command, "8:30\n30\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("You will have worked 8 hours at:\t17:00"));
    assert!(stderr(&output).contains("invalid configuration, using defaults"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();
    let mut command = wt_command(temp.path());
    command.args(["-v", "--no-copy"]);

    let output = run_with_input(command, "8:30\nnone\n17:30\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("loaded configuration"));
    assert!(stderr(&output).contains("unparsable pause"));
    assert!(!stdout(&output).contains("DEBUG"));
    assert!(stdout(&output).contains("Total working hours:\t8:00"));
}
