/// Minimum playable world size in both dimensions.
pub const MIN_WORLD_SIZE: i32 = 18;
/// Number of static impassable cells placed at session start.
pub const OBSTACLE_COUNT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Static grid: dimensions plus the fixed obstacle layout. Pure data,
/// consulted by the turn resolver for both ship and asteroid legality.
#[derive(Clone, Debug)]
pub struct World {
    width: i32,
    height: i32,
    obstacles: Vec<Position>,
}

impl World {
    pub fn new(width: i32, height: i32, obstacles: Vec<Position>) -> Self {
        World {
            width,
            height,
            obstacles,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        self.obstacles.iter().any(|&o| o == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(18, 18, vec![Position::new(4, 7), Position::new(0, 0)])
    }

    #[test]
    fn bounds_are_half_open() {
        let w = world();
        assert!(w.in_bounds(Position::new(0, 0)));
        assert!(w.in_bounds(Position::new(17, 17)));
        assert!(!w.in_bounds(Position::new(18, 0)));
        assert!(!w.in_bounds(Position::new(0, 18)));
        assert!(!w.in_bounds(Position::new(-1, 5)));
    }

    #[test]
    fn only_obstacle_cells_block() {
        let w = world();
        assert!(w.is_blocked(Position::new(4, 7)));
        assert!(w.is_blocked(Position::new(0, 0)));
        assert!(!w.is_blocked(Position::new(7, 4)));
    }
}
