use assert_cmd::Command;
use predicates::prelude::*;

fn cmdtree() -> Command {
    let mut cmd = Command::cargo_bin("cmdtree").unwrap();
    cmd.arg("--no-prompt");
    cmd
}

#[test]
fn echo_round_trips_long_and_short_forms() {
    cmdtree()
        .write_stdin("echo --text hello\necho -t world\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello").and(predicate::str::contains("world")));
}

#[test]
fn commands_lists_registered_terminals() {
    cmdtree()
        .write_stdin("commands\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("commands")
                .and(predicate::str::contains("echo"))
                .and(predicate::str::contains("greet")),
        );
}

#[test]
fn a_bad_line_does_not_abort_the_session() {
    cmdtree()
        .write_stdin("definitely not a command\ngreet\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello!"));
}

#[test]
fn session_ends_cleanly_at_eof() {
    cmdtree().write_stdin("").assert().success();
}
