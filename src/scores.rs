//! The persisted leaderboard: up to ten entries, one CSV line each
//! (`name,score,difficulty-index`), sorted by score descending. A tied
//! score is inserted after the existing equal scores, so earlier runs keep
//! their rank.

use std::fs;
use std::path::PathBuf;

use crate::game::{Difficulty, MAX_NAME_LEN};

pub const MAX_ENTRIES: usize = 10;
const LEADERBOARD_FILE: &str = "leaderboard.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub difficulty: Difficulty,
}

pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
    path: PathBuf,
    /// Guards against submitting the same run twice.
    submitted: bool,
}

impl Leaderboard {
    pub fn load() -> Self {
        let path = Self::scores_path();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => parse(&text),
            Err(_) => Vec::new(),
        };
        Leaderboard {
            entries,
            path,
            submitted: false,
        }
    }

    fn scores_path() -> PathBuf {
        // Store next to the executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(LEADERBOARD_FILE);
            }
        }
        PathBuf::from(LEADERBOARD_FILE)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Insert a finished run's score at its sorted position and persist.
    /// Returns false if the board is full and the score did not qualify,
    /// or if this run was already submitted.
    pub fn submit(&mut self, name: &str, score: u32, difficulty: Difficulty) -> bool {
        if self.submitted {
            return false;
        }
        self.submitted = true;

        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        let inserted = insert(
            &mut self.entries,
            ScoreEntry {
                name,
                score,
                difficulty,
            },
        );
        if inserted {
            let _ = fs::write(&self.path, to_text(&self.entries));
        }
        inserted
    }

    /// Allow the next run to submit again.
    pub fn clear_submitted(&mut self) {
        self.submitted = false;
    }
}

/// Sorted-descending insert with arrival order preserved on ties; the
/// board is truncated from the bottom when it overflows the cap.
fn insert(entries: &mut Vec<ScoreEntry>, entry: ScoreEntry) -> bool {
    let pos = entries
        .iter()
        .position(|e| entry.score > e.score)
        .unwrap_or(entries.len());
    if pos >= MAX_ENTRIES {
        return false;
    }
    entries.insert(pos, entry);
    entries.truncate(MAX_ENTRIES);
    true
}

/// Parse the CSV file, skipping lines that do not scan. Names may contain
/// anything, even commas; score and difficulty are the last two fields.
fn parse(text: &str) -> Vec<ScoreEntry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        if entries.len() >= MAX_ENTRIES {
            break;
        }
        let mut fields = line.rsplitn(3, ',');
        let (Some(diff), Some(score), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        let (Ok(score), Ok(diff_idx)) = (score.parse::<u32>(), diff.parse::<u8>()) else {
            continue;
        };
        let Some(difficulty) = Difficulty::from_index(diff_idx) else {
            continue;
        };
        entries.push(ScoreEntry {
            name: name.chars().take(MAX_NAME_LEN).collect(),
            score,
            difficulty,
        });
    }
    entries
}

fn to_text(entries: &[ScoreEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        out.push_str(&format!("{},{},{}\n", e.name, e.score, e.difficulty.index()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn inserts_keep_descending_order() {
        let mut board = Vec::new();
        insert(&mut board, entry("a", 100));
        insert(&mut board, entry("b", 300));
        insert(&mut board, entry("c", 200));
        let scores: Vec<u32> = board.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 100]);
    }

    #[test]
    fn ties_preserve_arrival_order() {
        let mut board = Vec::new();
        insert(&mut board, entry("first", 200));
        insert(&mut board, entry("second", 200));
        insert(&mut board, entry("third", 200));
        let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn overflow_drops_the_lowest_entry() {
        let mut board = Vec::new();
        for i in 0..MAX_ENTRIES as u32 {
            insert(&mut board, entry("x", 100 + i));
        }
        assert!(insert(&mut board, entry("new", 150)));
        assert_eq!(board.len(), MAX_ENTRIES);
        assert_eq!(board.last().map(|e| e.score), Some(101));
    }

    #[test]
    fn low_score_on_full_board_is_rejected() {
        let mut board = Vec::new();
        for i in 0..MAX_ENTRIES as u32 {
            insert(&mut board, entry("x", 100 + i));
        }
        assert!(!insert(&mut board, entry("new", 50)));
        assert_eq!(board.len(), MAX_ENTRIES);
    }

    #[test]
    fn csv_round_trips() {
        let board = vec![
            entry("Ada Lovelace", 420),
            ScoreEntry {
                name: "Grace".to_string(),
                score: 300,
                difficulty: Difficulty::Hard,
            },
        ];
        assert_eq!(parse(&to_text(&board)), board);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let text = "good,100,0\nnot a record\nbad,notanumber,1\nworse,50,9\nalso good,25,2\n";
        let parsed = parse(text);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "good");
        assert_eq!(parsed[1].score, 25);
    }

    #[test]
    fn names_with_commas_keep_their_tail_fields() {
        // rsplitn takes score and difficulty from the right, so a comma in
        // the name stays part of the name.
        let parsed = parse("Doe, Jane,75,1\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Doe, Jane");
        assert_eq!(parsed[0].score, 75);
    }
}
