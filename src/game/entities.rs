use crate::game::world::Position;

pub const START_HEALTH: i32 = 100;

#[derive(Clone, Debug)]
pub struct Ship {
    pub position: Position,
    pub fuel: i32,
    pub max_fuel: i32,
    pub health: i32,
    pub max_health: i32,
    pub metal: u32,
    pub plastic: u32,
    pub electronics: u32,
    pub fuel_cells: u32,
}

impl Ship {
    pub fn new(position: Position, fuel: i32) -> Self {
        Ship {
            position,
            fuel,
            max_fuel: fuel,
            health: START_HEALTH,
            max_health: START_HEALTH,
            metal: 0,
            plastic: 0,
            electronics: 0,
            fuel_cells: 0,
        }
    }
}

/// The one moving hazard. Direction components stay in {-1, 0, 1} and are
/// never both zero; the bounce rules in the turn resolver preserve that.
#[derive(Clone, Copy, Debug)]
pub struct Asteroid {
    pub position: Position,
    pub direction: (i32, i32),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JunkKind {
    Metal,
    Plastic,
    Electronics,
    FuelCell,
}

impl JunkKind {
    pub const ALL: [JunkKind; 4] = [
        JunkKind::Metal,
        JunkKind::Plastic,
        JunkKind::Electronics,
        JunkKind::FuelCell,
    ];

    pub fn value(&self) -> u32 {
        match self {
            JunkKind::Metal => 10,
            JunkKind::Plastic => 5,
            JunkKind::Electronics => 15,
            JunkKind::FuelCell => 20,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JunkKind::Metal => "metal",
            JunkKind::Plastic => "plastic",
            JunkKind::Electronics => "electronics",
            JunkKind::FuelCell => "fuel cell",
        }
    }
}

/// A collectible. Items are only ever marked collected, never removed,
/// so positions stay fixed for the whole session.
#[derive(Clone, Copy, Debug)]
pub struct Junk {
    pub position: Position,
    pub kind: JunkKind,
    pub collected: bool,
}

impl Junk {
    pub fn new(position: Position, kind: JunkKind) -> Self {
        Junk {
            position,
            kind,
            collected: false,
        }
    }
}
