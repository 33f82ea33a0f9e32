//! End-to-end runs of the `wordle` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn play(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordle"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn win_exits_zero() {
    let output = play(&["--word", "beach", "--no-color"], "beach\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[B][E][A][C][H]\n"));
}

#[test]
fn quit_exits_zero() {
    let output = play(&["--word", "beach"], "STOP\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Guess (1/6): "));
}

#[test]
fn six_wrong_guesses_exit_nonzero_and_reveal() {
    let output = play(&["--word", "booty", "--no-color"], &"raise\n".repeat(6));

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("\n[B][O][O][T][Y]\n"));
}

#[test]
fn color_tiles_are_emitted_when_piped() {
    let output = play(&["--word", "beats"], "burst\nstop\n");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\x1b["));
    assert!(stdout.contains(" B "));
}

#[test]
fn closed_input_is_an_error() {
    let output = play(&["--word", "beach"], "raise\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input closed"));
}

#[test]
fn custom_limits() {
    let output = play(
        &["--word", "cat", "-l", "3", "-g", "1", "--no-color"],
        "dog\n",
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Guess a 3-letter word within 1 guesses..."));
    assert!(stdout.contains("Guess (1/1): "));
}

#[test]
fn word_of_wrong_length_fails_at_startup() {
    let output = play(&["--word", "planet"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("could not choose a solution word"));
}

#[test]
fn daily_word_is_playable() {
    let output = play(&["--no-color"], "stop\n");
    assert!(output.status.success());
}
