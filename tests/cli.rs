use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_poslog-format"))
        .current_dir(root)
        .args(args)
        .output()
        .unwrap()
}

fn setup_root(freq: &str) -> TempDir {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("config")).unwrap();
    fs::write(
        root.path().join("config").join("default.yaml"),
        format!("begin: 2021-07-01 00:00:00\nfreq: {freq}\ntime_basis: utc\n"),
    )
    .unwrap();
    fs::create_dir(root.path().join("raw")).unwrap();
    fs::write(root.path().join("raw").join("track.csv"), "10,0,0\n11,1,2\n12,2,4\n").unwrap();
    root
}

#[test]
fn cli_default_directories() {
    let root = setup_root("2");
    let output = run(root.path(), &[]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = fs::read_to_string(root.path().join("formatted").join("track.csv")).unwrap();
    assert_eq!(text.lines().count(), 5);
    assert!(text.starts_with("2021-07-01 00:00:00.000000,0.0,0.0"));
    assert!(root.path().join("formatted").join("track.pkl").is_file());
}

#[test]
fn cli_single_file_and_target() {
    let root = setup_root("1");
    let output = run(
        root.path(),
        &["--src_file", "raw/track.csv", "--tgt_dir", "elsewhere"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(root.path().join("elsewhere").join("track.csv").is_file());
}

#[test]
fn cli_explicit_conf_file() {
    let root = setup_root("1");
    fs::write(
        root.path().join("other.yaml"),
        "begin: 2000-01-01 00:00:00\nfreq: 4\ntime_basis: utc\n",
    )
    .unwrap();
    let output = run(root.path(), &["-c", "other.yaml"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = fs::read_to_string(root.path().join("formatted").join("track.csv")).unwrap();
    assert_eq!(text.lines().count(), 9);
    assert!(text.starts_with("2000-01-01 00:00:00.000000"));
}

#[test]
fn cli_conflicting_sources() {
    let root = setup_root("1");
    let output = run(
        root.path(),
        &["--src_file", "raw/track.csv", "--src_dir", "raw/*.csv"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("specified at the same time"), "{stderr}");
}

#[test]
fn cli_non_positive_frequency() {
    let root = setup_root("0");
    let output = run(root.path(), &[]);
    assert!(!output.status.success());
    assert!(!root.path().join("formatted").join("track.csv").exists());
}

#[test]
fn cli_missing_config() {
    let root = TempDir::new().unwrap();
    let output = run(root.path(), &[]);
    assert!(!output.status.success());
}
