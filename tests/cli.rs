use std::fs;
use std::io::{Read, Write};
use std::process::{Command, Output, Stdio};

const FAREWELL: &str = "Caught Ctrl+C (or exit command). Exiting the shell...";

fn run_shell(dir: &std::path::Path, input: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mantle"))
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_ref())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn exit_says_goodbye_with_status_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_shell(dir.path(), "echo hi\nexit\necho never\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("hi\n"));
    assert!(stdout.contains(FAREWELL));
    assert!(!stdout.contains("never"));
    assert_eq!(
        fs::read_to_string(dir.path().join("history.txt")).unwrap(),
        "1 echo hi\n2 exit\n"
    );
}

#[test]
fn end_of_input_takes_the_exit_path() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_shell(dir.path(), "true\nnot_a_real_cmd123\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains(FAREWELL));
    assert_eq!(
        fs::read_to_string(dir.path().join("history.txt")).unwrap(),
        "1 true\n"
    );
}

#[test]
fn usage_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_shell(dir.path(), "setenv\nexit\n");

    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: setenv VAR VALUE"));
    assert!(!dir.path().join("env.txt").exists());
}

#[test]
fn version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_mantle"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("mantle "));
}

#[test]
fn prompt_is_printed_and_follows_chprompt() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_shell(dir.path(), "chprompt dev\necho hi\nexit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let first = stdout.find("shell> ").expect("default prompt missing");
    let changed = stdout.find("dev> ").expect("changed prompt missing");
    assert!(first < changed);
    assert!(stdout.contains("dev> hi\n"));
}

#[test]
fn piped_input_is_not_line_edited() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_shell(dir.path(), b"echo ab\x08c\nexit\n");

    assert!(output.stdout.windows(5).any(|w| w == b"ab\x08c\n"));
    assert_eq!(
        fs::read_to_string(dir.path().join("history.txt")).unwrap(),
        "1 echo ab\x08c\n2 exit\n"
    );
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_shell(
        dir.path(),
        b"echo before\necho \xff\xfe\necho after\nexit\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("before\n"));
    assert!(stdout.contains("after\n"));
    assert!(stdout.contains(FAREWELL));
    let history = fs::read_to_string(dir.path().join("history.txt")).unwrap();
    assert_eq!(history.lines().count(), 4);
    assert!(history.ends_with("3 echo after\n4 exit\n"));
}

#[test]
fn failed_exec_message_reaches_stderr() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_shell(dir.path(), "not_a_real_cmd123\nexit\n");

    assert!(String::from_utf8_lossy(&output.stderr).contains("Command execution failed"));
    assert_eq!(
        fs::read_to_string(dir.path().join("history.txt")).unwrap(),
        "1 exit\n"
    );
}

#[test]
fn sigint_says_goodbye_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_mantle"))
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The first prompt means the handler is installed and the shell is
    // blocked reading.
    let mut stdout = child.stdout.take().unwrap();
    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("shell> ") {
        let n = stdout.read(&mut chunk).unwrap();
        assert!(n > 0, "shell closed stdout before prompting");
        seen.extend_from_slice(&chunk[..n]);
    }

    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };
    assert_eq!(rc, 0);

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(String::from_utf8_lossy(&seen).contains(FAREWELL));
}
