//! Main-menu selection model: a cursor over rows, two of which cycle
//! through option lists.

use crate::session::{Difficulty, GameMode};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MenuRow {
    GameMode,
    Difficulty,
    Start,
    Leaderboard,
    Quit,
}

impl MenuRow {
    pub const ALL: [MenuRow; 5] = [
        MenuRow::GameMode,
        MenuRow::Difficulty,
        MenuRow::Start,
        MenuRow::Leaderboard,
        MenuRow::Quit,
    ];
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MenuAction {
    Start,
    Leaderboard,
    Quit,
}

pub struct Menu {
    selected: usize,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            selected: 0,
            mode: GameMode::Classic,
            difficulty: Difficulty::Medium,
        }
    }

    pub fn selected_row(&self) -> MenuRow {
        MenuRow::ALL[self.selected]
    }

    pub fn prev_row(&mut self) {
        self.selected = (self.selected + MenuRow::ALL.len() - 1) % MenuRow::ALL.len();
    }

    pub fn next_row(&mut self) {
        self.selected = (self.selected + 1) % MenuRow::ALL.len();
    }

    /// Cycle the option list under the cursor; action rows ignore this.
    pub fn adjust_left(&mut self) {
        match self.selected_row() {
            MenuRow::GameMode => self.mode = self.mode.prev(),
            MenuRow::Difficulty => self.difficulty = self.difficulty.prev(),
            _ => {}
        }
    }

    pub fn adjust_right(&mut self) {
        match self.selected_row() {
            MenuRow::GameMode => self.mode = self.mode.next(),
            MenuRow::Difficulty => self.difficulty = self.difficulty.next(),
            _ => {}
        }
    }

    /// Option rows do nothing on confirm.
    pub fn activate(&self) -> Option<MenuAction> {
        match self.selected_row() {
            MenuRow::Start => Some(MenuAction::Start),
            MenuRow::Leaderboard => Some(MenuAction::Leaderboard),
            MenuRow::Quit => Some(MenuAction::Quit),
            _ => None,
        }
    }

    pub fn row_label(&self, row: MenuRow) -> String {
        match row {
            MenuRow::GameMode => format!("Game Mode: {}", self.mode.label()),
            MenuRow::Difficulty => format!("Difficulty: {}", self.difficulty.label()),
            MenuRow::Start => "Start Game".to_string(),
            MenuRow::Leaderboard => "Leaderboard".to_string(),
            MenuRow::Quit => "Quit".to_string(),
        }
    }
}
