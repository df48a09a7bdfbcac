//! Screen state machine: main menu, play, game over, leaderboard.

use log::info;
use macroquad::prelude::*;

use crate::audio::Sounds;
use crate::fx::Fx;
use crate::grid::{Direction, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};
use crate::input::{self, Intent};
use crate::menu::{Menu, MenuAction, MenuRow};
use crate::palette;
use crate::scores::{MAX_NAME_LEN, ScoreEntry, ScoreStore};
use crate::session::{Session, SessionEvent};

/// HUD score pop duration after eating, in seconds.
const SCORE_POP_SECS: f32 = 0.25;

pub enum Screen {
    Menu(MenuScreen),
    Playing(PlayingScreen),
    GameOver(GameOverScreen),
    Leaderboard(LeaderboardScreen),
}

impl Screen {
    /// Run one frame of the active screen; a returned screen replaces it.
    pub fn frame(&mut self, dt: f32, sounds: &Sounds, fx: &mut Fx) -> Option<Screen> {
        match self {
            Screen::Menu(menu) => menu.frame(sounds),
            Screen::Playing(playing) => playing.frame(dt, sounds, fx),
            Screen::GameOver(over) => over.frame(),
            Screen::Leaderboard(board) => board.frame(),
        }
    }
}

pub struct MenuScreen {
    menu: Menu,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { menu: Menu::new() }
    }

    fn frame(&mut self, sounds: &Sounds) -> Option<Screen> {
        draw_background();
        draw_centered(
            "S N A K E - G A M E",
            SCREEN_HEIGHT as f32 * 0.25,
            72,
            palette::ACCENT,
        );

        let mut y = SCREEN_HEIGHT as f32 * 0.5 - 50.0;
        for row in MenuRow::ALL {
            let color = if row == self.menu.selected_row() {
                palette::ACCENT
            } else {
                palette::TEXT
            };
            draw_centered(&self.menu.row_label(row), y, 48, color);
            y += 70.0;
        }

        let intents = input::menu_intents();
        if !intents.is_empty() {
            sounds.click();
        }
        for intent in intents {
            match intent {
                Intent::MenuPrev => self.menu.prev_row(),
                Intent::MenuNext => self.menu.next_row(),
                Intent::MenuAdjustLeft => self.menu.adjust_left(),
                Intent::MenuAdjustRight => self.menu.adjust_right(),
                Intent::Confirm => match self.menu.activate() {
                    Some(MenuAction::Start) => {
                        info!(
                            "starting round: {} / {}",
                            self.menu.mode.label(),
                            self.menu.difficulty.label()
                        );
                        let session = Session::new(self.menu.mode, self.menu.difficulty);
                        return Some(Screen::Playing(PlayingScreen::new(session)));
                    }
                    Some(MenuAction::Leaderboard) => {
                        return Some(Screen::Leaderboard(LeaderboardScreen::load()));
                    }
                    Some(MenuAction::Quit) => std::process::exit(0),
                    None => {}
                },
                Intent::Quit => std::process::exit(0),
                _ => {}
            }
        }
        None
    }
}

pub struct PlayingScreen {
    session: Session,
    score_pop: f32,
}

impl PlayingScreen {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            score_pop: 0.0,
        }
    }

    fn frame(&mut self, dt: f32, sounds: &Sounds, fx: &mut Fx) -> Option<Screen> {
        for intent in input::game_intents() {
            match intent {
                Intent::TurnUp => self.session.turn(Direction::Up),
                Intent::TurnDown => self.session.turn(Direction::Down),
                Intent::TurnLeft => self.session.turn(Direction::Left),
                Intent::TurnRight => self.session.turn(Direction::Right),
                Intent::Cancel => return Some(Screen::Menu(MenuScreen::new())),
                Intent::Quit => std::process::exit(0),
                _ => {}
            }
        }

        for event in self.session.update(dt) {
            match event {
                SessionEvent::ItemConsumed { cell, color } => {
                    sounds.eat();
                    fx.burst(cell, color);
                    self.score_pop = SCORE_POP_SECS;
                }
                SessionEvent::RoundOver => sounds.game_over(),
            }
        }
        self.score_pop = (self.score_pop - dt).max(0.0);

        draw_background();
        self.session.draw();
        self.draw_hud();

        if self.session.is_over() {
            return Some(Screen::GameOver(GameOverScreen::new(self.session.clone())));
        }
        None
    }

    fn draw_hud(&self) {
        let scale = 1.0 + 0.5 * (self.score_pop / SCORE_POP_SECS);
        draw_text(
            &format!("Score: {}", self.session.score()),
            20.0,
            40.0,
            28.0 * scale,
            palette::TEXT,
        );
        draw_text(
            &format!("Mode: {}", self.session.mode().label()),
            20.0,
            72.0,
            24.0,
            palette::TEXT,
        );
        draw_text(
            &format!("Difficulty: {}", self.session.difficulty().label()),
            20.0,
            100.0,
            24.0,
            palette::TEXT,
        );
    }
}

pub struct GameOverScreen {
    session: Session,
    name: String,
}

impl GameOverScreen {
    pub fn new(session: Session) -> Self {
        // stale characters typed during play must not leak into the name box
        while get_char_pressed().is_some() {}
        Self {
            session,
            name: String::new(),
        }
    }

    fn frame(&mut self) -> Option<Screen> {
        draw_background();
        // final board as a dimmed backdrop
        self.session.draw();
        draw_rectangle(
            0.0,
            0.0,
            SCREEN_WIDTH as f32,
            SCREEN_HEIGHT as f32,
            palette::OVERLAY,
        );

        let w = SCREEN_WIDTH as f32;
        let h = SCREEN_HEIGHT as f32;
        draw_centered("GAME OVER", h * 0.25, 72, palette::ACCENT);
        draw_centered(
            &format!("Final Score: {}", self.session.score()),
            h * 0.5 - 50.0,
            48,
            palette::TEXT,
        );

        let box_w = 300.0;
        let box_h = 50.0;
        let box_x = (w - box_w) * 0.5;
        let box_y = h * 0.5 + 25.0;
        draw_centered("Enter Name:", box_y - 16.0, 24, palette::TEXT);
        draw_rectangle(box_x, box_y, box_w, box_h, palette::INPUT_BOX);
        draw_rectangle_lines(box_x, box_y, box_w, box_h, 2.0, palette::TEXT);
        draw_text(&self.name, box_x + 10.0, box_y + 34.0, 24.0, palette::TEXT);
        draw_centered(
            "Enter to save your score, Esc for the menu",
            h * 0.78,
            18,
            palette::TEXT,
        );

        for intent in input::name_intents() {
            match intent {
                Intent::Text(c) => {
                    if self.name.chars().count() < MAX_NAME_LEN {
                        self.name.push(c);
                    }
                }
                Intent::Backspace => {
                    self.name.pop();
                }
                Intent::Confirm => {
                    let entry = ScoreEntry::new(
                        &self.name,
                        self.session.score(),
                        self.session.mode().label(),
                        self.session.difficulty().label(),
                    );
                    ScoreStore::open().submit(entry);
                    return Some(Screen::Leaderboard(LeaderboardScreen::load()));
                }
                Intent::Cancel => return Some(Screen::Menu(MenuScreen::new())),
                _ => {}
            }
        }
        None
    }
}

pub struct LeaderboardScreen {
    entries: Vec<ScoreEntry>,
}

impl LeaderboardScreen {
    pub fn load() -> Self {
        Self {
            entries: ScoreStore::open().load(),
        }
    }

    fn frame(&mut self) -> Option<Screen> {
        draw_background();
        let w = SCREEN_WIDTH as f32;
        let h = SCREEN_HEIGHT as f32;
        draw_centered("Leaderboard", 110.0, 72, palette::GOLD);

        let columns = [
            (0.2, "Rank"),
            (0.3, "Name"),
            (0.5, "Score"),
            (0.6, "Mode"),
            (0.8, "Difficulty"),
        ];
        let mut y = 220.0;
        for (fraction, label) in columns {
            draw_text(label, w * fraction, y, 24.0, palette::ACCENT);
        }
        y += 40.0;
        for (i, entry) in self.entries.iter().enumerate() {
            draw_text(&format!("#{}", i + 1), w * 0.2, y, 24.0, palette::TEXT);
            draw_text(&entry.name, w * 0.3, y, 24.0, palette::TEXT);
            draw_text(&entry.score.to_string(), w * 0.5, y, 24.0, palette::TEXT);
            draw_text(&entry.mode, w * 0.6, y, 24.0, palette::TEXT);
            draw_text(&entry.difficulty, w * 0.8, y, 24.0, palette::TEXT);
            y += 40.0;
        }
        draw_centered("Press ESC to return to the menu", h - 50.0, 24, palette::TEXT);

        for intent in input::menu_intents() {
            match intent {
                Intent::Cancel => return Some(Screen::Menu(MenuScreen::new())),
                Intent::Quit => std::process::exit(0),
                _ => {}
            }
        }
        None
    }
}

fn draw_background() {
    clear_background(palette::BG);
    for x in (0..=SCREEN_WIDTH).step_by(TILE_SIZE as usize) {
        draw_line(
            x as f32,
            0.0,
            x as f32,
            SCREEN_HEIGHT as f32,
            1.0,
            palette::GRID_LINE,
        );
    }
    for y in (0..=SCREEN_HEIGHT).step_by(TILE_SIZE as usize) {
        draw_line(
            0.0,
            y as f32,
            SCREEN_WIDTH as f32,
            y as f32,
            1.0,
            palette::GRID_LINE,
        );
    }
}

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text(
        text,
        (SCREEN_WIDTH as f32 - dims.width) * 0.5,
        y,
        font_size as f32,
        color,
    );
}
