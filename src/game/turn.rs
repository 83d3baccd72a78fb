//! The turn resolver: the ordered sequence of effects behind a single move.
//!
//! Order matters and is fixed: validate the candidate cell (a wall or
//! obstacle bump is a free no-op), commit the move, charge fuel, check for
//! fuel death, advance the asteroid with bounce physics, then collect junk
//! and check the win score. Fuel is charged before the fatal-fuel check so
//! the move that empties the tank is the move that ends the game, and the
//! asteroid only moves once the fuel check has passed, so a fuel loss is
//! never masked by a same-turn collision.

use crate::game::entities::JunkKind;
use crate::game::session::Session;
use crate::game::world::Position;
use crate::game::{GameEvent, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LossReason {
    OutOfFuel,
    Collision,
}

/// Terminal states are absorbing: once a session leaves `InProgress`,
/// every further command is rejected with `GameError::SessionOver`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TurnState {
    InProgress,
    Won,
    Lost(LossReason),
    Aborted,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        *self != TurnState::InProgress
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The move was accepted and the full turn sequence ran.
    Moved,
    /// The candidate cell was out of bounds or impassable; nothing changed.
    Blocked,
    /// A non-move command; no turn was consumed.
    Idle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub outcome: Outcome,
    pub events: Vec<GameEvent>,
}

impl TurnReport {
    pub(crate) fn idle() -> Self {
        TurnReport {
            outcome: Outcome::Idle,
            events: Vec::new(),
        }
    }

    pub(crate) fn idle_with(event: GameEvent) -> Self {
        TurnReport {
            outcome: Outcome::Idle,
            events: vec![event],
        }
    }

    fn moved(events: Vec<GameEvent>) -> Self {
        TurnReport {
            outcome: Outcome::Moved,
            events,
        }
    }

    fn blocked() -> Self {
        TurnReport {
            outcome: Outcome::Blocked,
            events: Vec::new(),
        }
    }
}

impl Session {
    /// Resolve one player move. The driver only ever produces axis-aligned
    /// unit vectors; other vectors are not rejected here, they simply go
    /// through the same legality check as any candidate cell.
    pub fn resolve_move(&mut self, dx: i32, dy: i32) -> Result<TurnReport> {
        self.ensure_in_progress()?;

        let candidate = self.ship.position.offset(dx, dy);
        if !self.world.in_bounds(candidate) || self.world.is_blocked(candidate) {
            // Bumping a wall or obstacle costs nothing: no fuel, no
            // asteroid motion, no state change.
            return Ok(TurnReport::blocked());
        }

        self.ship.position = candidate;
        self.ship.fuel -= self.difficulty.fuel_per_move();
        if self.ship.fuel <= 0 {
            self.ship.fuel = 0;
            self.state = TurnState::Lost(LossReason::OutOfFuel);
            return Ok(TurnReport::moved(Vec::new()));
        }

        self.advance_asteroid();
        if self.state.is_terminal() {
            return Ok(TurnReport::moved(Vec::new()));
        }

        let events = self.collect_junk_under_ship();
        if self.score >= self.difficulty.win_score() {
            self.state = TurnState::Won;
        }
        Ok(TurnReport::moved(events))
    }

    /// Advance the asteroid `speed` single steps. Each step bounces off the
    /// horizontal and vertical walls independently; hitting an impassable
    /// cell reverses travel entirely, overriding any wall bounce already
    /// applied this step, and the reversed direction is recomputed from the
    /// pre-step position. A reversal that cancels to (0, 0) is forced to
    /// (1, 0). The ship is checked after every step, not just the last.
    fn advance_asteroid(&mut self) {
        for _ in 0..self.difficulty.asteroid_speed() {
            let pos = self.asteroid.position;
            let (mut dx, mut dy) = self.asteroid.direction;

            let mut nx = pos.x + dx;
            let mut ny = pos.y + dy;
            if nx < 0 || nx >= self.world.width() {
                dx = -dx;
                nx = pos.x + dx;
            }
            if ny < 0 || ny >= self.world.height() {
                dy = -dy;
                ny = pos.y + dy;
            }

            if self.world.is_blocked(Position::new(nx, ny)) {
                dx = -dx;
                dy = -dy;
                if dx == 0 && dy == 0 {
                    dx = 1;
                }
                nx = pos.x + dx;
                ny = pos.y + dy;
            }

            self.asteroid.direction = (dx, dy);
            self.asteroid.position = Position::new(nx, ny);

            if self.asteroid.position == self.ship.position {
                self.state = TurnState::Lost(LossReason::Collision);
                break;
            }
        }
    }

    /// Collect every uncollected item under the ship. Items normally occupy
    /// distinct cells, but co-located items all collect in the same turn.
    fn collect_junk_under_ship(&mut self) -> Vec<GameEvent> {
        let here = self.ship.position;
        let mut events = Vec::new();
        for item in &mut self.junk {
            if item.collected || item.position != here {
                continue;
            }
            item.collected = true;
            let value = item.kind.value();
            self.score += value;
            match item.kind {
                JunkKind::Metal => self.ship.metal += 1,
                JunkKind::Plastic => self.ship.plastic += 1,
                JunkKind::Electronics => self.ship.electronics += 1,
                JunkKind::FuelCell => self.ship.fuel_cells += 1,
            }
            events.push(GameEvent::Collected {
                kind: item.kind,
                value,
            });
        }
        events
    }
}
