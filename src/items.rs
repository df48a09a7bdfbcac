//! Consumable items and free-cell placement.

use macroquad::prelude::*;

use crate::grid::{Cell, GRID_HEIGHT, GRID_WIDTH};
use crate::palette;

/// Cosmetic grow-in animation after a spawn, in seconds.
pub const SPAWN_ANIM_SECS: f32 = 0.5;

const PLACE_ATTEMPTS: usize = 64;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ItemKind {
    Normal,
    FastBonus,
    SlowBonus,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ItemEffect {
    None,
    SpeedUp,
    SlowDown,
}

impl ItemKind {
    pub fn score(self) -> u32 {
        match self {
            ItemKind::Normal => 10,
            ItemKind::FastBonus => 50,
            ItemKind::SlowBonus => 20,
        }
    }

    pub fn effect(self) -> ItemEffect {
        match self {
            ItemKind::Normal => ItemEffect::None,
            ItemKind::FastBonus => ItemEffect::SpeedUp,
            ItemKind::SlowBonus => ItemEffect::SlowDown,
        }
    }

    pub fn color(self) -> Color {
        match self {
            ItemKind::Normal => palette::ACCENT,
            ItemKind::FastBonus => palette::GOLD,
            ItemKind::SlowBonus => palette::PURPLE,
        }
    }
}

/// Weighted draw used in multi-item mode; single-item rounds always get
/// the normal kind.
pub fn roll_kind(multi: bool) -> ItemKind {
    if !multi {
        return ItemKind::Normal;
    }
    match macroquad::rand::gen_range(0, 100) {
        0..=69 => ItemKind::Normal,
        70..=79 => ItemKind::FastBonus,
        _ => ItemKind::SlowBonus,
    }
}

/// Pick a uniformly random cell outside `occupied`. Sampling is bounded;
/// on a dense board the free cells are enumerated instead. `None` means
/// the grid has no free cell and the spawn is skipped.
pub fn place_random(occupied: &[Cell]) -> Option<Cell> {
    for _ in 0..PLACE_ATTEMPTS {
        let cell = Cell {
            x: macroquad::rand::gen_range(0, GRID_WIDTH),
            y: macroquad::rand::gen_range(0, GRID_HEIGHT),
        };
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
    let mut free = Vec::new();
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let cell = Cell { x, y };
            if !occupied.contains(&cell) {
                free.push(cell);
            }
        }
    }
    if free.is_empty() {
        None
    } else {
        Some(free[macroquad::rand::gen_range(0, free.len())])
    }
}

#[derive(Clone, Debug)]
pub struct Item {
    pub kind: ItemKind,
    pub cell: Cell,
    spawn_anim: f32,
}

impl Item {
    pub fn new(kind: ItemKind, cell: Cell) -> Self {
        Self {
            kind,
            cell,
            spawn_anim: SPAWN_ANIM_SECS,
        }
    }

    /// Advance the spawn animation; has no effect on game logic.
    pub fn animate(&mut self, dt: f32) {
        self.spawn_anim = (self.spawn_anim - dt).max(0.0);
    }

    pub fn draw(&self) {
        let r = self.cell.to_rect();
        let progress = 1.0 - self.spawn_anim / SPAWN_ANIM_SECS;
        let radius = (r.w * 0.5 - 2.0) * progress;
        if radius > 0.0 {
            draw_circle(r.x + r.w * 0.5, r.y + r.h * 0.5, radius, self.kind.color());
        }
    }
}
