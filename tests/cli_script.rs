mod common;

use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

use common::{script_command, STEP_ONE};

#[test]
fn show_renders_the_first_step() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(contains("STEP 1 OF 7"))
        .stdout(contains("Full Name"))
        .stdout(contains("14.29% Step 1 of 7"));
}

#[test]
fn next_without_answers_reports_missing_fields() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin("next\nshow\nexit\n")
        .assert()
        .success()
        .stdout(contains("Please fill in all required fields"))
        .stdout(contains("<- required"))
        .stdout(contains("STEP 2 OF 7").not());
}

#[test]
fn walkthrough_completes_with_collected_data() {
    let home = tempdir().unwrap();
    let script = format!(
        "{STEP_ONE}next\n\
         trait Kind\n\
         trait curious\n\
         set description \"A devoted teacher.\"\n\
         next\n\
         rel name 1 Alex\n\
         rel type 1\n\
         rel search son\n\
         rel pick 1\n\
         next\nnext\nnext\nnext\nnext\n\
         exit\n"
    );
    script_command(home.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("STEP 2 OF 7"))
        .stdout(contains("STEP 3 OF 7"))
        .stdout(contains("All steps complete"))
        .stdout(contains("\"fullName\": \"Jane Doe\""))
        .stdout(contains("\"Curious\""))
        .stdout(contains("\"name\": \"Alex\""))
        .stdout(contains("\"type\": \"Son\""));
}

#[test]
fn session_is_resumed_by_the_next_shell() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin(format!("{STEP_ONE}next\nexit\n"))
        .assert()
        .success()
        .stdout(contains("STEP 2 OF 7"));

    assert!(home.path().join("session").join("session.json").exists());

    script_command(home.path())
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(contains("STEP 2 OF 7"));
}

#[test]
fn reset_starts_over() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin(format!("{STEP_ONE}next\nreset\nexit\n"))
        .assert()
        .success()
        .stdout(contains("Session cleared."));

    script_command(home.path())
        .write_stdin("show\nexit\n")
        .assert()
        .success()
        .stdout(contains("STEP 1 OF 7"));
}

#[test]
fn trait_outside_its_step_is_explained() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin("trait Kind\nexit\n")
        .assert()
        .success()
        .stdout(contains("Traits are chosen on step 2."));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin("nxt\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `nxt`"))
        .stdout(contains("Suggestion: `next`?"));
}

#[test]
fn config_set_is_persisted() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin("config set theme plain\nexit\n")
        .assert()
        .success()
        .stdout(contains("Updated `theme`."));

    let saved = std::fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(saved.contains("plain"));

    script_command(home.path())
        .write_stdin("config show\nexit\n")
        .assert()
        .success()
        .stdout(contains("plain"));
}

#[test]
fn dates_cannot_be_typed() {
    let home = tempdir().unwrap();
    script_command(home.path())
        .write_stdin("set dateBirth 01/01/2000\nexit\n")
        .assert()
        .success()
        .stdout(contains("picked from the calendar"));
}
