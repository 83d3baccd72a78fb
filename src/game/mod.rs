pub mod entities;
pub mod session;
pub mod turn;
pub mod world;

use std::fmt;

use thiserror::Error;

use crate::game::entities::JunkKind;

/// Maximum player name length, shared with the leaderboard format.
pub const MAX_NAME_LEN: usize = 19;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn starting_fuel(&self) -> i32 {
        match self {
            Difficulty::Easy => 500,
            Difficulty::Medium => 350,
            Difficulty::Hard => 200,
        }
    }

    pub fn fuel_per_move(&self) -> i32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn junk_count(&self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 30,
            Difficulty::Hard => 20,
        }
    }

    pub fn asteroid_speed(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn win_score(&self) -> u32 {
        match self {
            Difficulty::Easy => 500,
            Difficulty::Medium => 750,
            Difficulty::Hard => 1000,
        }
    }

    /// Stable index used by the leaderboard file format.
    pub fn index(&self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn from_index(idx: u8) -> Option<Difficulty> {
        match idx {
            0 => Some(Difficulty::Easy),
            1 => Some(Difficulty::Medium),
            2 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Everything a driver can ask the session to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    Repair,
    Refuel,
    Status,
    Quit,
}

/// Pause-worthy moments surfaced to the UI instead of blocking on them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    Collected { kind: JunkKind, value: u32 },
    Repaired { health: i32, max_health: i32 },
    Refueled { fuel: i32, max_fuel: i32 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Collected { kind, value } => {
                write!(f, "Collected {}! (+{})", kind.label(), value)
            }
            GameEvent::Repaired { health, max_health } => {
                write!(f, "Ship repaired! Health: {}/{}", health, max_health)
            }
            GameEvent::Refueled { fuel, max_fuel } => {
                write!(f, "Ship refueled! Fuel: {}/{}", fuel, max_fuel)
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("The session has already ended")]
    SessionOver,

    #[error("Not enough metal!")]
    NoMetal,

    #[error("Not enough fuel cells!")]
    NoFuelCells,

    #[error("world {width}x{height} cannot fit {demand} placements")]
    WorldTooCrowded { width: i32, height: i32, demand: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
