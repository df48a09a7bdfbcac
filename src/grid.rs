//! Grid coordinate space and boundary arithmetic.

use macroquad::math::Rect;

// Game constants
pub const SCREEN_WIDTH: i32 = 1200;
pub const SCREEN_HEIGHT: i32 = 720;
pub const TILE_SIZE: i32 = 30;
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / TILE_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / TILE_SIZE;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn center() -> Self {
        Cell {
            x: GRID_WIDTH / 2,
            y: GRID_HEIGHT / 2,
        }
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            (self.x * TILE_SIZE) as f32,
            (self.y * TILE_SIZE) as f32,
            TILE_SIZE as f32,
            TILE_SIZE as f32,
        )
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Uniform pick, used for the round-start heading.
    pub fn random() -> Self {
        match macroquad::rand::gen_range(0, 4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }
}

pub fn add(cell: Cell, dir: Direction) -> Cell {
    let (dx, dy) = dir.offset();
    Cell {
        x: cell.x + dx,
        y: cell.y + dy,
    }
}

pub fn wrap(cell: Cell) -> Cell {
    Cell {
        x: cell.x.rem_euclid(GRID_WIDTH),
        y: cell.y.rem_euclid(GRID_HEIGHT),
    }
}

pub fn in_bounds(cell: Cell) -> bool {
    cell.x >= 0 && cell.x < GRID_WIDTH && cell.y >= 0 && cell.y < GRID_HEIGHT
}
