use tscaffold_util::errors::ScaffoldError;
use tscaffold_util::process::CommandBuilder;

#[cfg(unix)]
#[test]
fn test_exec_captures_stdout() {
    let output = CommandBuilder::new("echo").args(["npm", "install"]).exec().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "npm install");
}

#[cfg(unix)]
#[test]
fn test_exec_runs_in_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("package.json"), "{}").unwrap();

    let output = CommandBuilder::new("ls")
        .arg("package.json")
        .cwd(tmp.path())
        .exec()
        .unwrap();
    assert!(output.status.success());
}

#[cfg(unix)]
#[test]
fn test_run_reports_non_zero_exit() {
    let err = CommandBuilder::new("sh")
        .args(["-c", "exit 3"])
        .run()
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::Process { .. }));
    assert!(err.to_string().contains("sh -c exit 3"), "got: {err}");
}

#[test]
fn test_run_missing_program() {
    let err = CommandBuilder::new("definitely_not_a_package_manager_42")
        .run()
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::Process { .. }));
}

#[test]
fn test_display_joins_program_and_args() {
    let cmd = CommandBuilder::new("pnpm").arg("install").arg("--silent");
    assert_eq!(cmd.display(), "pnpm install --silent");
}
