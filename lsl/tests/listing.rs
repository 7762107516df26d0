use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn lsl_command(home: &Path, args: &[&Path]) -> Command {
    let bin = std::env::var("CARGO_BIN_EXE_lsl").expect("binary path not set by cargo");
    let mut command = Command::new(bin);
    command
        .args(args)
        .env("HOME", home)
        .env("LC_ALL", "C")
        .env_remove("LSL_CONFIG")
        .env_remove("LSL_LOG");
    command
}

fn run_lsl(home: &Path, args: &[&Path]) -> Output {
    lsl_command(home, args).output().expect("failed to run lsl")
}

#[test]
fn lists_a_directory_in_long_format() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("listing");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("file.txt"), vec![b'x'; 100]).unwrap();
    fs::write(root.join(".hidden"), b"secret").unwrap();
    symlink("target", root.join("link")).unwrap();

    let output = run_lsl(tmp.path(), &[&root]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{}", stdout);
    assert!(lines[0].starts_with("total "));
    assert!(lines[1].starts_with("-rw"));
    assert!(lines[1].ends_with(" file.txt"));
    assert!(lines[2].starts_with("lrwxrwxrwx"));
    assert!(lines[2].ends_with(" link -> target"));
    assert!(!stdout.contains(".hidden"));
}

#[test]
fn mixed_arguments_and_missing_paths() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("inner"), b"").unwrap();
    let file = tmp.path().join("file");
    fs::write(&file, b"abc").unwrap();
    let missing = tmp.path().join("missing");

    let output = run_lsl(tmp.path(), &[&dir, &missing, &file]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("lsl: cannot access"));
    assert!(stderr.contains("missing"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].ends_with(&*file.to_string_lossy()));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], format!("{}:", dir.display()));
    assert!(lines[3].starts_with("total "));
    assert!(lines[4].ends_with(" inner"));
}

#[test]
fn no_resolvable_path_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_lsl(tmp.path(), &[&tmp.path().join("nothing-here")]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let config_dir = tmp.path().join(".config").join("lsl");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "max_link_target = 0\n").unwrap();

    let output = run_lsl(tmp.path(), &[tmp.path()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Config Error"));
    assert!(stderr.contains("max_link_target"));
}

#[test]
fn closed_stdout_stops_quietly() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("many");
    fs::create_dir(&root).unwrap();
    for i in 0..2000 {
        fs::write(root.join(format!("file-{:04}", i)), b"").unwrap();
    }

    let mut child = lsl_command(tmp.path(), &[&root])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run lsl");
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("IO Error"), "{}", stderr);
    assert!(!stderr.contains("Broken pipe"), "{}", stderr);
    assert!(output.status.success());
}
