/*!
 * Integration test for clipboard functionality
 */

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::process::Command;

use tempfile::tempdir;

#[test]
#[ignore] // This test requires tmux to be running and is ignored by default
          // To run this test manually use: cargo test --test clipboard_integration -- --ignored
fn test_clip_flag() {
    // Skip if not in a tmux session
    if env::var("TMUX").is_err() {
        return;
    }

    // Create a temporary directory with a test file
    let temp_dir = tempdir().unwrap();
    let test_file = temp_dir.path().join("test.txt");

    let mut file = File::create(&test_file).unwrap();
    writeln!(file, "Test content for clipboard integration").unwrap();

    // Build the project first to ensure the binary is available
    assert!(Command::new("cargo")
        .args(["build"])
        .status()
        .unwrap()
        .success());

    let binary = env::current_dir().unwrap().join("target/debug/ctxcat");

    // Run ctxcat with -fc from inside the temp directory: the tool always
    // operates on its working directory
    let status = Command::new(&binary)
        .arg("-fc")
        .current_dir(temp_dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    // The output file is named after the working directory's base name
    let dir_name = temp_dir
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .to_string();
    let output_file = temp_dir
        .path()
        .join(format!("{}-project_context.txt", dir_name));
    assert!(output_file.exists());

    let document = fs::read_to_string(&output_file).unwrap();
    assert!(document.contains("Test content for clipboard integration"));

    // The tmux buffer must hold the same document
    let clipboard_output = Command::new("tmux").args(["show-buffer"]).output().unwrap();
    let clipboard_content = String::from_utf8_lossy(&clipboard_output.stdout);
    assert_eq!(document, clipboard_content);
}

#[test]
fn test_unrecognized_flag_exits_one() {
    assert!(Command::new("cargo")
        .args(["build"])
        .status()
        .unwrap()
        .success());

    let binary = env::current_dir().unwrap().join("target/debug/ctxcat");
    let temp_dir = tempdir().unwrap();

    // An unknown flag exits 1 and produces no output file
    let status = Command::new(&binary)
        .arg("-z")
        .current_dir(temp_dir.path())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);

    // Help exits 0
    let status = Command::new(&binary)
        .arg("--help")
        .current_dir(temp_dir.path())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(0));
}
