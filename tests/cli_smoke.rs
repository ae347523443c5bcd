use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_quadsolve").to_string()
}

/// Runs the binary with an isolated config file and colours off.
fn run(config: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin())
        .arg("--no-color")
        .arg("--config")
        .arg(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("run")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn solve_reference_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("absent.toml");
    let cases = [
        (["1", "-3", "2"], "2.000000, 1.000000 are roots of the given equation"),
        (["1", "2", "1"], "-1.000000 is the only root of the given equation"),
        (["0", "2", "-4"], "2.000000 is the only root of the given equation"),
        (["0", "0", "5"], "No roots!"),
        (["0", "0", "0"], "Ooh! Infinite number of roots!"),
        (["1", "0", "1"], "No roots!"),
    ];
    for (coeffs, expected) in cases {
        let mut args = vec!["solve"];
        args.extend(coeffs);
        let out = stdout_of(&run(&cfg, &args, ""));
        assert_eq!(out.trim_end(), expected, "coefficients {coeffs:?}");
    }
}

#[test]
fn non_finite_coefficient_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("absent.toml"), &["solve", "nan", "1", "1"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("coefficient a must be finite"), "stderr:\n{stderr}");
}

#[test]
fn interactive_session_reprompts_and_says_goodbye() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(&run(&dir.path().join("absent.toml"), &[], "a b c\n1 2 1\nmaybe\n0\n"));
    assert_eq!(
        out,
        "This is quadratic equation solver!\n\
         Please, input a, b, c\n\
         Incorrect input. Please, try again \n\
         -1.000000 is the only root of the given equation\n\
         Would you like to see our unit tests? (1 or 0) \n\
         Incorrect input. Please, try again \n\
         OK! Goodbye!\n"
    );
}

#[test]
fn interactive_non_finite_input_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir.path().join("absent.toml"), &[], "1 inf 1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("roots"));
}

#[test]
fn seeded_selftest_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("absent.toml");
    let args = ["selftest", "--cases", "8", "--seed", "2020", "--low", "-7", "--high", "7"];
    let first = stdout_of(&run(&cfg, &args, ""));
    let second = stdout_of(&run(&cfg, &args, ""));
    assert_eq!(first, second);
    assert_eq!(first.matches("coefficients").count(), 8);
    assert!(first.trim_end().ends_with("failed"));
}

#[test]
fn config_file_sets_precision_and_cases() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "[output]\nprecision = 2\n\n[selftest]\ncases = 3\nseed = 1\n").unwrap();

    let out = stdout_of(&run(&cfg, &["solve", "1", "-3", "2"], ""));
    assert_eq!(out.trim_end(), "2.00, 1.00 are roots of the given equation");

    let out = stdout_of(&run(&cfg, &["selftest"], ""));
    assert_eq!(out.matches("coefficients").count(), 3);
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "[selftest]\ncases = \"many\"\n").unwrap();
    let output = run(&cfg, &["solve", "1", "2", "1"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Load config"));
}
