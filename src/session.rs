//! One round of play: tick clock, movement, collision and effect resolution.

use log::info;
use macroquad::prelude::*;

use crate::grid::{Cell, Direction};
use crate::items::{self, Item, ItemEffect};
use crate::palette;
use crate::snake::Snake;

/// Speed gained per tick in speed-up mode, in ticks per second.
const SPEED_UP_INCREMENT: f32 = 0.05;

/// Obstacles keep this distance from the snake's starting cell.
const SAFE_ZONE_RADIUS: i32 = 2;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameMode {
    Classic,
    WallLess,
    SpeedUp,
    Obstacle,
    MultiItem,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::WallLess => "Wall-less",
            GameMode::SpeedUp => "Speed-up",
            GameMode::Obstacle => "Obstacle",
            GameMode::MultiItem => "Multi-item",
        }
    }

    pub fn next(self) -> Self {
        match self {
            GameMode::Classic => GameMode::WallLess,
            GameMode::WallLess => GameMode::SpeedUp,
            GameMode::SpeedUp => GameMode::Obstacle,
            GameMode::Obstacle => GameMode::MultiItem,
            GameMode::MultiItem => GameMode::Classic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            GameMode::Classic => GameMode::MultiItem,
            GameMode::WallLess => GameMode::Classic,
            GameMode::SpeedUp => GameMode::WallLess,
            GameMode::Obstacle => GameMode::SpeedUp,
            GameMode::MultiItem => GameMode::Obstacle,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }

    /// Base snake speed in ticks per second.
    pub fn base_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 8.0,
            Difficulty::Medium => 12.0,
            Difficulty::Hard => 16.0,
        }
    }

    pub fn obstacle_count(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }
}

/// Discrete outcomes of a tick, consumed by the presentation layer.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum SessionEvent {
    ItemConsumed { cell: Cell, color: Color },
    RoundOver,
}

#[derive(Clone)]
pub struct Session {
    pub(crate) snake: Snake,
    pub(crate) items: Vec<Item>,
    pub(crate) obstacles: Vec<Cell>,
    pub(crate) score: u32,
    pub(crate) base_speed: f32,
    pub(crate) current_speed: f32,
    tick_timer_ms: f32,
    pub(crate) mode: GameMode,
    pub(crate) difficulty: Difficulty,
    pub(crate) over: bool,
}

impl Session {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        let snake = Snake::spawn();
        let obstacles = if mode == GameMode::Obstacle {
            spawn_obstacles(snake.head(), difficulty.obstacle_count())
        } else {
            Vec::new()
        };
        let base_speed = difficulty.base_speed();
        let mut session = Self {
            snake,
            items: Vec::new(),
            obstacles,
            score: 0,
            base_speed,
            current_speed: base_speed,
            tick_timer_ms: 0.0,
            mode,
            difficulty,
            over: false,
        };
        session.spawn_items();
        session
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn turn(&mut self, dir: Direction) {
        self.snake.turn(dir);
    }

    /// Advance the round by `dt` seconds of wall time. Fires at most one
    /// simulation tick; the accumulator resets fully on each tick so speed
    /// changes never inherit drift from the previous interval.
    pub fn update(&mut self, dt: f32) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.over {
            return events;
        }
        for item in &mut self.items {
            item.animate(dt);
        }
        self.tick_timer_ms += dt * 1000.0;
        if self.tick_timer_ms >= 1000.0 / self.current_speed {
            self.tick_timer_ms = 0.0;
            self.tick(&mut events);
        }
        events
    }

    fn tick(&mut self, events: &mut Vec<SessionEvent>) {
        self.snake.advance(self.mode == GameMode::WallLess);
        let head = self.snake.head();

        // Resolve pickup outside the scan over the active set.
        if let Some(index) = self.items.iter().position(|item| item.cell == head) {
            let item = self.items.remove(index);
            self.score += item.kind.score();
            self.snake.grow();
            match item.kind.effect() {
                ItemEffect::SpeedUp => self.current_speed *= 1.5,
                ItemEffect::SlowDown => {
                    self.current_speed = self.base_speed.max(self.current_speed * 0.75)
                }
                ItemEffect::None => {}
            }
            events.push(SessionEvent::ItemConsumed {
                cell: head,
                color: item.kind.color(),
            });
            if self.items.is_empty() {
                self.spawn_items();
            }
        }

        if self.snake.collides_with_self() {
            return self.finish(events);
        }
        if self.mode != GameMode::WallLess && self.snake.collides_with_boundary() {
            return self.finish(events);
        }
        if self.mode == GameMode::Obstacle && self.snake.collides_with_obstacles(&self.obstacles) {
            return self.finish(events);
        }

        if self.mode == GameMode::SpeedUp {
            self.current_speed += SPEED_UP_INCREMENT;
        }
    }

    fn finish(&mut self, events: &mut Vec<SessionEvent>) {
        self.over = true;
        events.push(SessionEvent::RoundOver);
        info!(
            "round over: score {} ({} / {})",
            self.score,
            self.mode.label(),
            self.difficulty.label()
        );
    }

    fn spawn_items(&mut self) {
        let count = if self.mode == GameMode::MultiItem { 3 } else { 1 };
        for _ in 0..count {
            let occupied = self.occupied();
            if let Some(cell) = items::place_random(&occupied) {
                let kind = items::roll_kind(self.mode == GameMode::MultiItem);
                self.items.push(Item::new(kind, cell));
            }
        }
    }

    fn occupied(&self) -> Vec<Cell> {
        self.snake
            .cells()
            .iter()
            .copied()
            .chain(self.obstacles.iter().copied())
            .chain(self.items.iter().map(|item| item.cell))
            .collect()
    }

    pub fn draw(&self) {
        for cell in &self.obstacles {
            let r = cell.to_rect();
            draw_rectangle(r.x, r.y, r.w, r.h, palette::OBSTACLE);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, palette::GRID_LINE);
        }
        for item in &self.items {
            item.draw();
        }
        self.snake.draw();
    }
}

fn spawn_obstacles(start: Cell, count: usize) -> Vec<Cell> {
    // Safe area around the snake start stays clear of obstacles
    let mut occupied = Vec::new();
    for dy in -SAFE_ZONE_RADIUS..=SAFE_ZONE_RADIUS {
        for dx in -SAFE_ZONE_RADIUS..=SAFE_ZONE_RADIUS {
            occupied.push(Cell {
                x: start.x + dx,
                y: start.y + dy,
            });
        }
    }
    let mut obstacles = Vec::new();
    for _ in 0..count {
        if let Some(cell) = items::place_random(&occupied) {
            obstacles.push(cell);
            occupied.push(cell);
        }
    }
    obstacles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    /// A session pinned to a known state: length-1 snake at (10,10) moving
    /// right, no obstacles, a single chosen item.
    fn fixed_session(mode: GameMode, difficulty: Difficulty, item: Option<Item>) -> Session {
        let mut session = Session::new(mode, difficulty);
        session.snake = Snake {
            cells: vec![Cell { x: 10, y: 10 }],
            length: 1,
            direction: Direction::Right,
            next_direction: Direction::Right,
        };
        session.obstacles.clear();
        session.items = item.into_iter().collect();
        session
    }

    fn far_item() -> Option<Item> {
        Some(Item::new(ItemKind::Normal, Cell { x: 0, y: 0 }))
    }

    #[test]
    fn no_tick_before_the_interval_elapses() {
        let mut session = fixed_session(GameMode::Classic, Difficulty::Medium, far_item());
        // 12 ticks/s -> 83.3ms interval
        let events = session.update(0.05);
        assert!(events.is_empty());
        assert_eq!(session.snake.head(), Cell { x: 10, y: 10 });
    }

    #[test]
    fn consuming_a_normal_item_scores_and_grows() {
        let mut session = fixed_session(
            GameMode::Classic,
            Difficulty::Medium,
            Some(Item::new(ItemKind::Normal, Cell { x: 11, y: 10 })),
        );
        let events = session.update(0.1);
        assert_eq!(session.score(), 10);
        assert_eq!(session.snake.length(), 2);
        assert_eq!(session.snake.head(), Cell { x: 11, y: 10 });
        assert!(events.iter().any(|e| matches!(
            e,
            SessionEvent::ItemConsumed {
                cell: Cell { x: 11, y: 10 },
                ..
            }
        )));
        // the active set was refilled
        assert_eq!(session.items.len(), 1);
        assert!(!session.is_over());
    }

    #[test]
    fn fast_bonus_multiplies_speed() {
        let mut session = fixed_session(
            GameMode::MultiItem,
            Difficulty::Medium,
            Some(Item::new(ItemKind::FastBonus, Cell { x: 11, y: 10 })),
        );
        session.update(0.1);
        assert_eq!(session.current_speed, 18.0);
    }

    #[test]
    fn slow_bonus_decays_toward_base_speed() {
        let mut session = fixed_session(
            GameMode::MultiItem,
            Difficulty::Medium,
            Some(Item::new(ItemKind::SlowBonus, Cell { x: 11, y: 10 })),
        );
        session.current_speed = 20.0;
        session.update(0.1);
        assert_eq!(session.current_speed, 15.0);
    }

    #[test]
    fn slow_bonus_never_drops_below_base_speed() {
        let mut session = fixed_session(
            GameMode::MultiItem,
            Difficulty::Medium,
            Some(Item::new(ItemKind::SlowBonus, Cell { x: 11, y: 10 })),
        );
        session.update(0.1);
        assert_eq!(session.current_speed, session.base_speed);
    }

    #[test]
    fn multi_item_mode_respawns_a_full_set() {
        let mut session = fixed_session(
            GameMode::MultiItem,
            Difficulty::Medium,
            Some(Item::new(ItemKind::Normal, Cell { x: 11, y: 10 })),
        );
        session.update(0.1);
        assert_eq!(session.items.len(), 3);
        let head = session.snake.head();
        assert!(session.items.iter().all(|item| item.cell != head));
    }

    #[test]
    fn speed_up_mode_accrues_per_tick() {
        let mut session = fixed_session(GameMode::SpeedUp, Difficulty::Medium, far_item());
        session.update(0.1);
        assert!((session.current_speed - 12.05).abs() < 1e-4);
        assert!(!session.is_over());
    }

    #[test]
    fn leaving_the_grid_ends_a_classic_round() {
        let mut session = fixed_session(GameMode::Classic, Difficulty::Medium, far_item());
        session.snake.cells = vec![Cell { x: 39, y: 10 }];
        let events = session.update(0.1);
        assert!(session.is_over());
        assert!(events.contains(&SessionEvent::RoundOver));
    }

    #[test]
    fn wall_less_mode_wraps_instead_of_ending() {
        let mut session = fixed_session(GameMode::WallLess, Difficulty::Medium, far_item());
        session.snake.cells = vec![Cell { x: 39, y: 10 }];
        session.update(0.1);
        assert!(!session.is_over());
        assert_eq!(session.snake.head(), Cell { x: 0, y: 10 });
    }

    #[test]
    fn hitting_an_obstacle_ends_the_round() {
        let mut session = fixed_session(GameMode::Obstacle, Difficulty::Medium, far_item());
        session.obstacles = vec![Cell { x: 11, y: 10 }];
        session.update(0.1);
        assert!(session.is_over());
    }

    #[test]
    fn obstacles_only_matter_in_obstacle_mode() {
        let mut session = fixed_session(GameMode::Classic, Difficulty::Medium, far_item());
        session.obstacles = vec![Cell { x: 11, y: 10 }];
        session.update(0.1);
        assert!(!session.is_over());
    }

    #[test]
    fn a_finished_session_stops_ticking() {
        let mut session = fixed_session(GameMode::Classic, Difficulty::Medium, far_item());
        session.snake.cells = vec![Cell { x: 39, y: 10 }];
        session.update(0.1);
        assert!(session.is_over());
        let head = session.snake.head();
        let events = session.update(1.0);
        assert!(events.is_empty());
        assert_eq!(session.snake.head(), head);
    }

    #[test]
    fn obstacle_rounds_start_with_obstacles_clear_of_the_snake() {
        let session = Session::new(GameMode::Obstacle, Difficulty::Hard);
        assert_eq!(session.obstacles.len(), 30);
        let start = session.snake.head();
        for cell in &session.obstacles {
            assert!((cell.x - start.x).abs() > 2 || (cell.y - start.y).abs() > 2);
        }
    }

    #[test]
    fn classic_rounds_start_with_one_normal_item() {
        let session = Session::new(GameMode::Classic, Difficulty::Easy);
        assert_eq!(session.items.len(), 1);
        assert_eq!(session.items[0].kind, ItemKind::Normal);
        assert_eq!(session.base_speed, 8.0);
    }

    #[test]
    fn multi_item_rounds_start_with_three_items_on_distinct_cells() {
        let session = Session::new(GameMode::MultiItem, Difficulty::Medium);
        assert_eq!(session.items.len(), 3);
        for (i, a) in session.items.iter().enumerate() {
            for b in &session.items[i + 1..] {
                assert_ne!(a.cell, b.cell);
            }
        }
    }
}
