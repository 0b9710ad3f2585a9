mod common;

use std::fs;

use common::{manager_at, setup_test_env};
use kas_core::journal::DEFAULT_NOTE;

#[test]
fn fresh_store_starts_with_documented_defaults() {
    let (manager, _root) = setup_test_env();
    assert!(manager.journal().is_empty());
    assert_eq!(manager.journal().note(), DEFAULT_NOTE);
    assert_eq!(manager.journal().next_id(), 1);
}

#[test]
fn reload_reproduces_entries_note_and_counter() {
    let (mut manager, root) = setup_test_env();
    manager.append(5000, 2000, "Makan siang").expect("append");
    manager.append(3000, 1000, "Jajan").expect("append");
    manager.set_note("Belanja mingguan").expect("set note");

    let reloaded = manager_at(&root);
    assert_eq!(reloaded.journal().entries(), manager.journal().entries());
    assert_eq!(reloaded.journal().note(), "Belanja mingguan");
    assert_eq!(reloaded.journal().next_id(), 3);
}

#[test]
fn counter_survives_deletions_across_reloads() {
    let (mut manager, root) = setup_test_env();
    for n in 1..=3u64 {
        manager.append(n * 100, n * 10, "Catatan").expect("append");
    }
    manager.remove_at(0).expect("remove");

    let mut reloaded = manager_at(&root);
    assert_eq!(reloaded.journal().len(), 2);
    assert_eq!(reloaded.journal().next_id(), 4);
    // New appends keep counting upward; removed ids are never reissued.
    let entry = reloaded.append(7, 7, "Catatan").expect("append");
    assert_eq!(entry.id, 4);
}

#[test]
fn corrupt_entry_record_falls_back_to_empty() {
    let (mut manager, root) = setup_test_env();
    manager.append(5000, 2000, "Makan siang").expect("append");
    fs::write(root.join("financeData"), "{ definitely not an array")
        .expect("corrupt entries record");

    let reloaded = manager_at(&root);
    assert!(reloaded.journal().is_empty());
    // The untouched records still load normally.
    assert_eq!(reloaded.journal().next_id(), 2);
}

#[test]
fn corrupt_counter_record_resets_to_one() {
    let (mut manager, root) = setup_test_env();
    manager.append(1, 1, "a").expect("append");
    fs::write(root.join("financeNextId"), "four").expect("corrupt counter record");

    let reloaded = manager_at(&root);
    assert_eq!(reloaded.journal().next_id(), 1);
    assert_eq!(reloaded.journal().len(), 1);
}

#[test]
fn failed_staged_write_preserves_previous_record() {
    let (mut manager, root) = setup_test_env();
    manager.set_note("catatan awal").expect("initial note");
    let original = fs::read_to_string(root.join("financeDiary")).expect("read note record");

    // A directory squatting on the staging path forces the write to fail.
    fs::create_dir_all(root.join("financeDiary.tmp")).expect("collide with staging path");
    assert!(manager.set_note("catatan baru").is_err());

    let current = fs::read_to_string(root.join("financeDiary")).expect("read after failure");
    assert_eq!(current, original, "failed write must not corrupt the record");
}

#[test]
fn flush_rewrites_every_record() {
    let (mut manager, root) = setup_test_env();
    manager.append(42, 7, "Catatan").expect("append");
    fs::remove_file(root.join("financeDiary")).ok();

    manager.flush().expect("flush");
    assert!(root.join("financeData").exists());
    assert!(root.join("financeDiary").exists());
    assert!(root.join("financeNextId").exists());
}
