use rand::Rng;

use crate::game::entities::{Asteroid, Junk, JunkKind, Ship};
use crate::game::turn::{TurnReport, TurnState};
use crate::game::world::{Position, World, MIN_WORLD_SIZE, OBSTACLE_COUNT};
use crate::game::{Command, Difficulty, GameError, GameEvent, Result, MAX_NAME_LEN};

const REPAIR_HEALTH: i32 = 10;
const REFUEL_AMOUNT: i32 = 50;

/// One complete run: world, entities, score and terminal state. The single
/// driver thread owns it; every operation runs to completion synchronously.
pub struct Session {
    pub(crate) world: World,
    pub(crate) ship: Ship,
    pub(crate) asteroid: Asteroid,
    pub(crate) junk: Vec<Junk>,
    pub(crate) difficulty: Difficulty,
    pub(crate) score: u32,
    pub(crate) player_name: String,
    pub(crate) state: TurnState,
}

impl Session {
    /// Set up a fresh session: ship at the grid center, asteroid on a random
    /// border edge heading inward, then obstacles and junk placed by
    /// rejection sampling against everything already on the grid.
    ///
    /// Dimensions below the minimum playable size are clamped up. Fails fast
    /// if the grid could not possibly hold the placement demand; at legal
    /// sizes that cannot happen.
    pub fn new(
        name: &str,
        difficulty: Difficulty,
        width: i32,
        height: i32,
        rng: &mut impl Rng,
    ) -> Result<Session> {
        let width = width.max(MIN_WORLD_SIZE);
        let height = height.max(MIN_WORLD_SIZE);

        let junk_count = difficulty.junk_count();
        let demand = 2 + OBSTACLE_COUNT + junk_count;
        if demand >= (width as usize) * (height as usize) {
            return Err(GameError::WorldTooCrowded {
                width,
                height,
                demand,
            });
        }

        let ship_pos = Position::new(width / 2, height / 2);
        let asteroid = spawn_asteroid_on_edge(width, height, rng);

        let mut obstacles: Vec<Position> = Vec::with_capacity(OBSTACLE_COUNT);
        while obstacles.len() < OBSTACLE_COUNT {
            let pos = random_cell(width, height, rng);
            if pos != ship_pos && pos != asteroid.position && !obstacles.contains(&pos) {
                obstacles.push(pos);
            }
        }

        let mut junk: Vec<Junk> = Vec::with_capacity(junk_count);
        while junk.len() < junk_count {
            let pos = random_cell(width, height, rng);
            if pos != ship_pos
                && pos != asteroid.position
                && !obstacles.contains(&pos)
                && !junk.iter().any(|j| j.position == pos)
            {
                let kind = JunkKind::ALL[rng.gen_range(0..JunkKind::ALL.len())];
                junk.push(Junk::new(pos, kind));
            }
        }

        Ok(Session {
            world: World::new(width, height, obstacles),
            ship: Ship::new(ship_pos, difficulty.starting_fuel()),
            asteroid,
            junk,
            difficulty,
            score: 0,
            player_name: truncate_name(name),
            state: TurnState::InProgress,
        })
    }

    /// Build a session from an explicit layout. Used for scripted scenarios
    /// and tests where the random placement would get in the way.
    pub fn from_parts(
        name: &str,
        difficulty: Difficulty,
        world: World,
        ship: Ship,
        asteroid: Asteroid,
        junk: Vec<Junk>,
    ) -> Session {
        Session {
            world,
            ship,
            asteroid,
            junk,
            difficulty,
            score: 0,
            player_name: truncate_name(name),
            state: TurnState::InProgress,
        }
    }

    /// Route a driver command. Movement goes through the turn resolver;
    /// repair and refuel cost no turn; status is a pure query.
    pub fn execute(&mut self, cmd: Command) -> Result<TurnReport> {
        match cmd {
            Command::Move(dir) => {
                let (dx, dy) = dir.delta();
                self.resolve_move(dx, dy)
            }
            Command::Repair => {
                let event = self.repair()?;
                Ok(TurnReport::idle_with(event))
            }
            Command::Refuel => {
                let event = self.refuel()?;
                Ok(TurnReport::idle_with(event))
            }
            Command::Status => Ok(TurnReport::idle()),
            Command::Quit => {
                self.abort();
                Ok(TurnReport::idle())
            }
        }
    }

    /// Spend one metal to restore 10 health, clamped at the maximum.
    /// Costs no turn; the asteroid does not move.
    pub fn repair(&mut self) -> Result<GameEvent> {
        self.ensure_in_progress()?;
        if self.ship.metal == 0 {
            return Err(GameError::NoMetal);
        }
        self.ship.health = (self.ship.health + REPAIR_HEALTH).min(self.ship.max_health);
        self.ship.metal -= 1;
        Ok(GameEvent::Repaired {
            health: self.ship.health,
            max_health: self.ship.max_health,
        })
    }

    /// Spend one fuel cell to restore 50 fuel, clamped at the maximum.
    /// Costs no turn; the asteroid does not move.
    pub fn refuel(&mut self) -> Result<GameEvent> {
        self.ensure_in_progress()?;
        if self.ship.fuel_cells == 0 {
            return Err(GameError::NoFuelCells);
        }
        self.ship.fuel = (self.ship.fuel + REFUEL_AMOUNT).min(self.ship.max_fuel);
        self.ship.fuel_cells -= 1;
        Ok(GameEvent::Refueled {
            fuel: self.ship.fuel,
            max_fuel: self.ship.max_fuel,
        })
    }

    /// End the run without a win/loss classification. No-op once terminal.
    pub fn abort(&mut self) {
        if self.state == TurnState::InProgress {
            self.state = TurnState::Aborted;
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn asteroid(&self) -> &Asteroid {
        &self.asteroid
    }

    pub fn junk(&self) -> &[Junk] {
        &self.junk
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub(crate) fn ensure_in_progress(&self) -> Result<()> {
        if self.state == TurnState::InProgress {
            Ok(())
        } else {
            Err(GameError::SessionOver)
        }
    }
}

fn truncate_name(name: &str) -> String {
    let name: String = name.chars().take(MAX_NAME_LEN).collect();
    if name.is_empty() {
        "???".to_string()
    } else {
        name
    }
}

fn random_cell(width: i32, height: i32, rng: &mut impl Rng) -> Position {
    Position::new(rng.gen_range(0..width), rng.gen_range(0..height))
}

/// Pick one of the four border edges, a uniform point along it, and a
/// direction whose fixed axis points inward. The free-axis component is
/// drawn from {-1, 0, 1}; a fully zero vector is forced to (1, 0).
fn spawn_asteroid_on_edge(width: i32, height: i32, rng: &mut impl Rng) -> Asteroid {
    let edge = rng.gen_range(0..4);
    let (position, mut direction) = match edge {
        0 => (
            Position::new(rng.gen_range(0..width), 0),
            (rng.gen_range(-1..=1), 1),
        ),
        1 => (
            Position::new(width - 1, rng.gen_range(0..height)),
            (-1, rng.gen_range(-1..=1)),
        ),
        2 => (
            Position::new(rng.gen_range(0..width), height - 1),
            (rng.gen_range(-1..=1), -1),
        ),
        _ => (
            Position::new(0, rng.gen_range(0..height)),
            (1, rng.gen_range(-1..=1)),
        ),
    };
    if direction == (0, 0) {
        direction = (1, 0);
    }
    Asteroid {
        position,
        direction,
    }
}
