use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use tempfile::tempdir;

fn daybook() -> Command {
    Command::cargo_bin("daybook").unwrap()
}

#[test]
fn info_prints_journal_folder() {
    let dir = tempdir().unwrap();

    daybook()
        .env("DAYBOOK_JOURNAL_DIR", dir.path())
        .arg("--info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal folder:"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

#[test]
fn list_without_journal_reports_missing_and_creates_nothing() {
    let dir = tempdir().unwrap();

    daybook()
        .env("DAYBOOK_JOURNAL_DIR", dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have no journal for today."));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn list_prints_existing_journal_content() {
    let dir = tempdir().unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let file = dir.path().join(format!("{today}.md"));
    std::fs::write(&file, format!("# {today}\n\n[ ] buy milk\n")).unwrap();

    daybook()
        .env("DAYBOOK_JOURNAL_DIR", dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# {today}")))
        .stdout(predicate::str::contains("[ ] buy milk"));
}

#[test]
fn conflicting_action_flags_are_rejected() {
    daybook().args(["--info", "--list"]).assert().failure();
}
