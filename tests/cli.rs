use std::process::{Command, Output};

fn winpath(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_winpath"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run winpath")
}

#[test]
fn prints_full_report_per_path() {
    let output = winpath(&["C:\\foo\\bar.exe", "C:foo", "\\\\server\\share\\"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "C:\\foo\\bar.exe\ttrue\tbar.exe\nC:foo\tfalse\tfoo\n\\\\server\\share\\\ttrue\t\n"
    );
}

#[test]
fn absolute_flag_prints_booleans_only() {
    let output = winpath(&["-a", "prn", "folder\\PRN", "relative\\path"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "true\nfalse\nfalse\n");
}

#[test]
fn base_flag_prints_names_only() {
    let output = winpath(&["--base", "C:\\foo\\bar\\\\", "noseparator"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "bar\nnoseparator\n");
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = winpath(&["-v", "-b", "C:\\tools\\app.exe"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "app.exe\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("inspected path"));
}

#[test]
fn missing_paths_is_an_error() {
    let output = winpath(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
