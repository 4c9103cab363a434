use super::scan;
use crate::config::TracksSettings;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_track(path: &Path, title: &str, artist: &str) {
    let doc = format!(
        r#"{{ "metadata": {{ "title": "{title}", "artist": "{artist}", "language": "en", "audioFile": "a.mp3" }},
              "lyrics": [] }}"#
    );
    fs::write(path, doc).unwrap();
}

#[test]
fn scan_lists_json_tracks_sorted_by_display() {
    let dir = tempdir().unwrap();
    write_track(&dir.path().join("one.json"), "Zebra", "beta");
    write_track(&dir.path().join("two.json"), "Song", "Alpha");
    fs::write(dir.path().join("song.mp3"), b"not a track").unwrap();

    let entries = scan(dir.path(), &TracksSettings::default());
    let names: Vec<&str> = entries.iter().map(|e| e.display.as_str()).collect();
    assert_eq!(names, vec!["Alpha - Song", "beta - Zebra"]);
    assert!(entries.iter().all(|e| e.readable));
}

#[test]
fn scan_keeps_unparseable_files_under_their_stem() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "{ nope").unwrap();

    let entries = scan(dir.path(), &TracksSettings::default());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].display, "broken");
    assert!(!entries[0].readable);
    assert_eq!(entries[0].path, dir.path().join("broken.json"));
}

#[test]
fn scan_skips_hidden_by_default() {
    let dir = tempdir().unwrap();
    write_track(&dir.path().join(".hidden.json"), "Hidden", "");
    write_track(&dir.path().join("visible.json"), "Visible", "");

    let entries = scan(dir.path(), &TracksSettings::default());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].display, "Visible");

    let settings = TracksSettings {
        include_hidden: true,
        ..TracksSettings::default()
    };
    assert_eq!(scan(dir.path(), &settings).len(), 2);
}

#[test]
fn scan_respects_recursive_false() {
    let dir = tempdir().unwrap();
    write_track(&dir.path().join("root.json"), "Root", "");
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    write_track(&sub.join("child.json"), "Child", "");

    let settings = TracksSettings {
        recursive: false,
        ..TracksSettings::default()
    };
    let entries = scan(dir.path(), &settings);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].display, "Root");

    assert_eq!(scan(dir.path(), &TracksSettings::default()).len(), 2);
}

#[test]
fn scan_respects_max_depth() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1");
    let d2 = d1.join("d2");
    fs::create_dir_all(&d2).unwrap();
    write_track(&dir.path().join("root.json"), "root", "");
    write_track(&d1.join("one.json"), "one", "");
    write_track(&d2.join("two.json"), "two", "");

    let settings = TracksSettings {
        max_depth: Some(2),
        ..TracksSettings::default()
    };
    let names: Vec<String> = scan(dir.path(), &settings)
        .into_iter()
        .map(|e| e.display)
        .collect();
    assert!(names.contains(&"root".to_string()));
    assert!(names.contains(&"one".to_string()));
    assert!(!names.contains(&"two".to_string()));
}

#[test]
fn scan_of_missing_directory_is_empty() {
    let dir = tempdir().unwrap();
    let entries = scan(&dir.path().join("absent"), &TracksSettings::default());
    assert!(entries.is_empty());
}
