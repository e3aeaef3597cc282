use std::fs;
use std::path::PathBuf;

use tui_tanks::core::GameState;
use tui_tanks::journal::{Journal, Record};
use tui_tanks::types::GameAction;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tui-tanks-{}-{}.jsonl", name, std::process::id()))
}

#[test]
fn journal_writes_one_json_object_per_line() {
    let path = temp_path("journal");
    let _ = fs::remove_file(&path);

    {
        let journal = Journal::open(&path).unwrap();
        let mut game = GameState::new();
        journal.record(game.tick_count(), Record::start());

        game.apply_action(GameAction::RotateLeft);
        game.apply_action(GameAction::Fire);
        game.tick(false);
        journal.record_events(game.tick_count(), game.drain_events());
        journal.record(game.tick_count(), Record::Quit { fired: 1 });
        // Drop joins the writer and flushes.
    }

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let _ = fs::remove_file(&path);

    let types: Vec<&str> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["start", "turn", "fire", "quit"]);

    assert_eq!(lines[0]["fire_cap"], 24);
    assert_eq!(lines[1]["facing"], "left");
    assert_eq!(lines[2]["shot"], 1);
    assert_eq!(lines[2]["x"], 308);
    assert_eq!(lines[3]["tick"], 1);
    assert!(lines.iter().all(|v| v["ts"].is_u64()));
}

#[test]
fn journal_open_fails_for_unwritable_path() {
    let err = Journal::open("/definitely/not/a/dir/tanks.jsonl")
        .err()
        .expect("open should fail");
    assert!(format!("{:#}", err).contains("open journal"));
}
