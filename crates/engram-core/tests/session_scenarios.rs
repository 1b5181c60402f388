//! End-to-end store + tracker scenarios across a simulated session.

use std::fs;

use engram_core::{ProgressTracker, RecordStore};

fn write_vocab(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("words.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn first_session_starts_at_zero_and_persists_the_cursor() {
    let dir = tempfile::tempdir().unwrap();
    let vocab = write_vocab(
        &dir,
        "cat\t[kæt]\tA small domesticated animal.\ndog\t[dɒg]\tA loyal pet.\n",
    );

    let store = RecordStore::load(&vocab).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].headword, "cat");
    assert_eq!(store.records()[1].headword, "dog");

    let tracker = ProgressTracker::new(dir.path().join("progress.json"));
    let mut index = tracker.load(store.len());
    assert_eq!(index, 0);

    // Navigate "next" once, then shut down cleanly.
    index = (index + 1) % store.len();
    tracker.save(index).unwrap();

    let data = fs::read_to_string(dir.path().join("progress.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(value["current_index"], 1);

    // Next session resumes where the last one left off.
    assert_eq!(tracker.load(store.len()), 1);
}

#[test]
fn shrunken_word_list_resets_a_stale_cursor() {
    let dir = tempfile::tempdir().unwrap();
    let vocab = write_vocab(
        &dir,
        "cat\t[kæt]\tA small domesticated animal.\ndog\t[dɒg]\tA loyal pet.\n",
    );

    let tracker = ProgressTracker::new(dir.path().join("progress.json"));
    tracker.save(5).unwrap();

    let store = RecordStore::load(&vocab).unwrap();
    assert_eq!(tracker.load(store.len()), 0);
}

#[test]
fn round_trip_preserves_any_in_bounds_index() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = ProgressTracker::new(dir.path().join("progress.json"));

    for count in [1usize, 2, 10, 100] {
        for k in [0, count / 2, count - 1] {
            tracker.save(k).unwrap();
            assert_eq!(tracker.load(count), k, "k={k} count={count}");
        }
    }
}
