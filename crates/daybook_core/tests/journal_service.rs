use daybook_core::{Bullet, BulletType, FsJournalStore, JournalDate, JournalService};
use tempfile::tempdir;

fn sample_day() -> JournalDate {
    JournalDate::from_ymd_opt(2024, 1, 5).unwrap()
}

#[test]
fn add_bullet_on_fresh_day_writes_header_then_line() {
    let dir = tempdir().unwrap();
    let service = JournalService::new(FsJournalStore::new(dir.path()));
    let day = sample_day();

    service
        .add_bullet(day, &Bullet::new(BulletType::Note, "Paid rent"))
        .unwrap();

    let content = service.read_day(day).unwrap().unwrap();
    assert_eq!(content, "# 2024-01-05\n\n -  Paid rent\n");
}

#[test]
fn add_bullet_keeps_one_header_across_multiple_adds() {
    let dir = tempdir().unwrap();
    let service = JournalService::new(FsJournalStore::new(dir.path()));
    let day = sample_day();

    service
        .add_bullet(day, &Bullet::new(BulletType::Todo, "water plants"))
        .unwrap();
    service
        .add_bullet(day, &Bullet::new(BulletType::Event, "team lunch"))
        .unwrap();

    let content = service.read_day(day).unwrap().unwrap();
    assert_eq!(
        content,
        "# 2024-01-05\n\n[ ] water plants\n( ) team lunch\n"
    );
    assert_eq!(content.matches("# 2024-01-05").count(), 1);
}

#[test]
fn read_day_reports_missing_journal_as_none() {
    let dir = tempdir().unwrap();
    let service = JournalService::new(FsJournalStore::new(dir.path()));
    let day = sample_day();

    assert_eq!(service.read_day(day).unwrap(), None);
    assert!(!service.day_exists(day).unwrap());
}

#[test]
fn day_path_and_journal_dir_expose_resolved_locations() {
    let dir = tempdir().unwrap();
    let service = JournalService::new(FsJournalStore::new(dir.path()));
    let day = sample_day();

    assert_eq!(service.journal_dir(), dir.path());
    assert_eq!(service.day_path(day), dir.path().join("2024-01-05.md"));
}
