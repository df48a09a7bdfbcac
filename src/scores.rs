//! Persisted leaderboard: a ranked top-10 list in a JSON file.

use std::fs;
use std::path::PathBuf;

use log::{error, warn};
use serde::{Deserialize, Serialize};

pub const SCORE_FILE: &str = "high_scores.json";
pub const MAX_ENTRIES: usize = 10;
pub const MAX_NAME_LEN: usize = 20;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub date: String,
    pub mode: String,
    pub difficulty: String,
}

impl ScoreEntry {
    pub fn new(name: &str, score: u32, mode: &str, difficulty: &str) -> Self {
        let name = if name.trim().is_empty() {
            "Anonymous".to_string()
        } else {
            name.to_string()
        };
        Self {
            name,
            score,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            mode: mode.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}

pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn open() -> Self {
        Self::at(SCORE_FILE)
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing or unreadable file is an empty leaderboard, never an error.
    pub fn load(&self) -> Vec<ScoreEntry> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str::<Vec<ScoreEntry>>(&text) {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                entries
            }
            Err(e) => {
                warn!("score file {} is unreadable, starting fresh: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Insert an entry in rank order, keep the top 10, and persist.
    pub fn submit(&self, entry: ScoreEntry) -> Vec<ScoreEntry> {
        let mut entries = self.load();
        entries.push(entry);
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        self.save(&entries);
        entries
    }

    fn save(&self, entries: &[ScoreEntry]) {
        match serde_json::to_string_pretty(entries) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    error!("failed to write {}: {e}", self.path.display());
                }
            }
            Err(e) => error!("failed to encode scores: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempStore {
        store: ScoreStore,
        path: PathBuf,
    }

    impl TempStore {
        fn new(tag: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "snake_arcade_scores_{}_{}.json",
                tag,
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self {
                store: ScoreStore::at(&path),
                path,
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
            date: "2026-08-05".to_string(),
            mode: "Classic".to_string(),
            difficulty: "Medium".to_string(),
        }
    }

    #[test]
    fn missing_file_is_an_empty_leaderboard() {
        let temp = TempStore::new("missing");
        assert!(temp.store.load().is_empty());
    }

    #[test]
    fn malformed_file_is_an_empty_leaderboard() {
        let temp = TempStore::new("malformed");
        fs::write(&temp.path, "not json at all").unwrap();
        assert!(temp.store.load().is_empty());
    }

    #[test]
    fn submit_ranks_and_drops_the_lowest_entry() {
        let temp = TempStore::new("ranked");
        for score in (1..=10).map(|n| n * 100) {
            temp.store.submit(entry("old", score));
        }
        let entries = temp.store.submit(entry("new", 550));
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[5].score, 550);
        assert_eq!(entries[5].name, "new");
        // the previous 10th place (score 100) fell off
        assert!(entries.iter().all(|e| e.score != 100));
        // and the result round-trips through the file
        assert_eq!(temp.store.load(), entries);
    }

    #[test]
    fn leaderboard_is_capped_at_ten_entries() {
        let temp = TempStore::new("capped");
        for score in 0..15 {
            temp.store.submit(entry("player", score));
        }
        assert_eq!(temp.store.load().len(), MAX_ENTRIES);
    }

    #[test]
    fn load_sorts_descending_by_score() {
        let temp = TempStore::new("sorted");
        let unsorted = vec![entry("low", 10), entry("high", 900), entry("mid", 400)];
        fs::write(&temp.path, serde_json::to_string(&unsorted).unwrap()).unwrap();
        let entries = temp.store.load();
        assert_eq!(entries[0].score, 900);
        assert_eq!(entries[1].score, 400);
        assert_eq!(entries[2].score, 10);
    }

    #[test]
    fn empty_names_are_stored_as_anonymous() {
        let e = ScoreEntry::new("  ", 42, "Classic", "Easy");
        assert_eq!(e.name, "Anonymous");
        let named = ScoreEntry::new("Asha", 42, "Classic", "Easy");
        assert_eq!(named.name, "Asha");
    }
}
