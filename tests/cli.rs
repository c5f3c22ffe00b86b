use std::fs;
use std::process::Command;

use numberlut_codegen::{generate, Language};

#[test]
fn writes_c_header() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let dir = tempfile::tempdir().unwrap();
   let output = dir.path().join("numberlut.h");

   let status = Command::new(exe).arg(&output).status().expect("run failed");
   assert!(status.success());
   assert_eq!(fs::read_to_string(&output).unwrap(), generate(Language::C));
}

#[test]
fn writes_rust_table() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let dir = tempfile::tempdir().unwrap();
   let output = dir.path().join("numberlut.rs");

   let status = Command::new(exe)
      .arg(&output)
      .args(["--lang", "rust"])
      .status()
      .expect("run failed");
   assert!(status.success());
   assert_eq!(fs::read_to_string(&output).unwrap(), generate(Language::Rust));
}

#[test]
fn repeated_runs_are_byte_identical() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let dir = tempfile::tempdir().unwrap();
   let output = dir.path().join("numberlut.h");

   assert!(Command::new(exe).arg(&output).status().unwrap().success());
   let first = fs::read(&output).unwrap();
   assert!(Command::new(exe).arg(&output).status().unwrap().success());
   let second = fs::read(&output).unwrap();
   assert_eq!(first, second);
}

#[test]
fn overwrites_existing_file() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let dir = tempfile::tempdir().unwrap();
   let output = dir.path().join("numberlut.h");
   fs::write(&output, "garbage").unwrap();

   assert!(Command::new(exe).arg(&output).status().unwrap().success());
   assert_eq!(fs::read_to_string(&output).unwrap(), generate(Language::C));
}

#[test]
fn missing_directory_fails_without_output() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let dir = tempfile::tempdir().unwrap();
   let output = dir.path().join("does").join("not").join("exist").join("numberlut.h");

   let result = Command::new(exe).arg(&output).output().expect("run failed");
   assert!(!result.status.success());
   assert!(!output.exists());
   assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn check_mode() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let dir = tempfile::tempdir().unwrap();
   let output = dir.path().join("numberlut.h");

   let result = Command::new(exe).arg(&output).arg("--check").output().unwrap();
   assert!(!result.status.success());
   assert!(!output.exists());

   assert!(Command::new(exe).arg(&output).status().unwrap().success());
   assert!(Command::new(exe).arg(&output).arg("--check").status().unwrap().success());

   fs::write(&output, "stale").unwrap();
   let result = Command::new(exe).arg(&output).arg("--check").output().unwrap();
   assert!(!result.status.success());
   let stderr = String::from_utf8_lossy(&result.stderr);
   assert!(stderr.contains("out of date"));
   assert_eq!(fs::read_to_string(&output).unwrap(), "stale");
}

#[test]
fn stdout_mode_prints_only_the_table() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let result = Command::new(exe).args(["--stdout", "--lang", "rust"]).output().unwrap();
   assert!(result.status.success());
   assert_eq!(String::from_utf8(result.stdout).unwrap(), generate(Language::Rust));
}

#[test]
fn unknown_language_is_rejected() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let result = Command::new(exe).args(["--stdout", "--lang", "python"]).output().unwrap();
   assert!(!result.status.success());
}

#[test]
fn stdout_mode_rejects_output_file() {
   let exe = env!("CARGO_BIN_EXE_numberlut");
   let dir = tempfile::tempdir().unwrap();
   let output = dir.path().join("numberlut.h");

   let result = Command::new(exe).arg(&output).arg("--stdout").output().unwrap();
   assert!(!result.status.success());
   assert!(!output.exists());
}
