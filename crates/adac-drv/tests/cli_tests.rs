//! CLI end-to-end tests: invoke the real `adac` binary against temp files
//! and check exit codes and written output, mirroring the teacher's
//! `assert_cmd`/`predicates`/`tempfile` e2e style.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn adac_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_adac"))
}

fn write_source(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn help_mentions_the_binary_name() {
    Command::new(adac_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("adac"));
}

#[test]
fn missing_input_file_exits_nonzero() {
    Command::new(adac_bin())
        .arg("/no/such/file.ada")
        .assert()
        .failure();
}

#[test]
fn scenario_a_emits_tac_with_start_line() {
    let dir = TempDir::new().unwrap();
    let input = write_source(
        &dir,
        "one.ada",
        "procedure one is a, b, c : integer; begin a := 1; b := a + 2; c := a * b; end one;",
    );
    let output = dir.path().join("one.tac");

    Command::new(adac_bin())
        .arg(&input)
        .arg("-t")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let tac = fs::read_to_string(&output).unwrap();
    assert!(tac.trim_end().ends_with("start one"));
    assert!(tac.contains("ADD"));
}

#[test]
fn scenario_b_undeclared_identifier_fails_and_writes_no_tac() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "u.ada", "procedure u is begin y := 10; end u;");
    let output = dir.path().join("u.tac");

    Command::new(adac_bin())
        .arg(&input)
        .arg("-t")
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stdout(predicate::str::contains("semantic"));

    assert!(!output.exists());
}

#[test]
fn asm_output_contains_masm_segments() {
    let dir = TempDir::new().unwrap();
    let input = write_source(
        &dir,
        "d.ada",
        "procedure d is x, y : integer; begin x := 1; y := x / 5; end d;",
    );
    let output = dir.path().join("d.asm");

    Command::new(adac_bin())
        .arg(&input)
        .arg("-a")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let asm = fs::read_to_string(&output).unwrap();
    assert!(asm.contains(".MODEL SMALL"));
    assert!(asm.contains("D PROC"));
    assert!(asm.contains("IDIV"));
    assert!(asm.contains("END MAIN"));
}

#[test]
fn no_phase_flag_emits_a_token_listing() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "s.ada", "procedure s is begin null; end s;");
    let output = dir.path().join("s.tok");

    Command::new(adac_bin())
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let listing = fs::read_to_string(&output).unwrap();
    assert!(listing.starts_with("Token Type"));
    assert!(listing.contains("Procedure"));
}
