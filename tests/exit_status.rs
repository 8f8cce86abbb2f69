use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn sampler(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_funcsampler"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn funcsampler")
}

#[test]
fn readable_file_exits_zero_with_full_transcript() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "contents of the cat section").unwrap();

    let output = sampler(&[file.path().as_os_str()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\n-"));
    assert!(stdout.contains("Example of defer With a cat Command:\ncontents of the cat section\n\n"));
    assert!(stdout.contains("After: slcMod = [2 4 6]\n"));
    assert!(stdout.ends_with("Defer in main() is called here\n\n"));
}

#[test]
fn missing_argument_exits_one() {
    let output = sampler(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "error: no file was specified\n"
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Example of defer With a cat Command:\n"));
}

#[test]
fn unreadable_path_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = sampler(&[missing.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: failed to open"));
    assert!(stderr.contains("missing.txt"));
}
