//! The player snake: buffered turning, per-tick movement, collision predicates.

use macroquad::prelude::*;

use crate::grid::{self, Cell, Direction};
use crate::palette;

#[derive(Clone, Debug)]
pub struct Snake {
    /// Head at index 0, body cells in order behind it.
    pub(crate) cells: Vec<Cell>,
    /// Target length; `cells` may lag behind it for one tick after growth.
    pub(crate) length: usize,
    pub(crate) direction: Direction,
    pub(crate) next_direction: Direction,
}

impl Snake {
    pub fn spawn() -> Self {
        let direction = Direction::random();
        Self {
            cells: vec![Cell::center()],
            length: 1,
            direction,
            next_direction: direction,
        }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Buffer a turn for the next tick. A turn that exactly reverses the
    /// current heading is dropped while the snake is longer than one cell.
    pub fn turn(&mut self, dir: Direction) {
        if self.length > 1 && dir == self.direction.opposite() {
            return;
        }
        self.next_direction = dir;
    }

    pub fn advance(&mut self, wraparound: bool) {
        self.direction = self.next_direction;
        let mut head = grid::add(self.head(), self.direction);
        if wraparound {
            head = grid::wrap(head);
        }
        self.cells.insert(0, head);
        while self.cells.len() > self.length {
            self.cells.pop();
        }
    }

    /// Takes effect on the next `advance`.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn collides_with_self(&self) -> bool {
        self.cells[1..].contains(&self.head())
    }

    pub fn collides_with_boundary(&self) -> bool {
        !grid::in_bounds(self.head())
    }

    pub fn collides_with_obstacles(&self, obstacles: &[Cell]) -> bool {
        obstacles.contains(&self.head())
    }

    pub fn draw(&self) {
        for (i, cell) in self.cells.iter().enumerate().skip(1) {
            let r = cell.to_rect();
            let color = palette::SNAKE_BODY[(i - 1) % palette::SNAKE_BODY.len()];
            draw_rectangle(r.x, r.y, r.w, r.h, color);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, palette::GRID_LINE);
        }
        let head = self.cells[0].to_rect();
        draw_rectangle(head.x, head.y, head.w, head.h, palette::SNAKE_HEAD);
        draw_rectangle_lines(head.x, head.y, head.w, head.h, 2.0, palette::GRID_LINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(cell: Cell, dir: Direction) -> Snake {
        Snake {
            cells: vec![cell],
            length: 1,
            direction: dir,
            next_direction: dir,
        }
    }

    #[test]
    fn reversal_is_ignored_while_longer_than_one() {
        let mut snake = Snake {
            cells: vec![Cell { x: 5, y: 5 }, Cell { x: 4, y: 5 }],
            length: 2,
            direction: Direction::Right,
            next_direction: Direction::Right,
        };
        snake.turn(Direction::Left);
        assert_eq!(snake.next_direction, Direction::Right);
        snake.advance(false);
        assert_eq!(snake.head(), Cell { x: 6, y: 5 });
    }

    #[test]
    fn reversal_is_allowed_at_length_one() {
        let mut snake = snake_at(Cell { x: 5, y: 5 }, Direction::Right);
        snake.turn(Direction::Left);
        assert_eq!(snake.next_direction, Direction::Left);
    }

    #[test]
    fn straight_line_movement_is_deterministic() {
        let mut snake = snake_at(Cell { x: 10, y: 10 }, Direction::Right);
        snake.advance(false);
        snake.advance(false);
        assert_eq!(snake.head(), Cell { x: 12, y: 10 });
        assert_eq!(snake.cells().len(), 1);
    }

    #[test]
    fn body_never_exceeds_target_length() {
        let mut snake = snake_at(Cell { x: 10, y: 10 }, Direction::Right);
        snake.grow();
        snake.grow();
        for _ in 0..6 {
            snake.advance(false);
            assert!(snake.cells().len() <= snake.length());
        }
        assert_eq!(snake.cells().len(), 3);
    }

    #[test]
    fn growth_is_realized_on_the_next_advance() {
        let mut snake = snake_at(Cell { x: 10, y: 10 }, Direction::Right);
        snake.grow();
        assert_eq!(snake.cells().len(), 1);
        snake.advance(false);
        assert_eq!(snake.cells().len(), 2);
        assert_eq!(snake.cells()[1], Cell { x: 10, y: 10 });
    }

    #[test]
    fn boundary_collision_after_leaving_the_grid() {
        let mut snake = snake_at(Cell { x: 39, y: 10 }, Direction::Right);
        snake.advance(false);
        assert_eq!(snake.head(), Cell { x: 40, y: 10 });
        assert!(snake.collides_with_boundary());
    }

    #[test]
    fn wraparound_keeps_the_head_in_bounds() {
        let mut snake = snake_at(Cell { x: 39, y: 10 }, Direction::Right);
        snake.advance(true);
        assert_eq!(snake.head(), Cell { x: 0, y: 10 });
        assert!(!snake.collides_with_boundary());
    }

    #[test]
    fn self_collision_checks_body_only() {
        let snake = Snake {
            cells: vec![
                Cell { x: 5, y: 5 },
                Cell { x: 6, y: 5 },
                Cell { x: 6, y: 6 },
                Cell { x: 5, y: 6 },
                Cell { x: 5, y: 5 },
            ],
            length: 5,
            direction: Direction::Up,
            next_direction: Direction::Up,
        };
        assert!(snake.collides_with_self());

        let straight = Snake {
            cells: vec![Cell { x: 5, y: 5 }, Cell { x: 4, y: 5 }, Cell { x: 3, y: 5 }],
            length: 3,
            direction: Direction::Right,
            next_direction: Direction::Right,
        };
        assert!(!straight.collides_with_self());
    }

    #[test]
    fn obstacle_collision_matches_head_position() {
        let snake = snake_at(Cell { x: 7, y: 3 }, Direction::Up);
        assert!(snake.collides_with_obstacles(&[Cell { x: 7, y: 3 }]));
        assert!(!snake.collides_with_obstacles(&[Cell { x: 8, y: 3 }]));
    }
}
