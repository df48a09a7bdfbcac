//! Keyboard state translated into device-agnostic intents.

use macroquad::prelude::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Intent {
    TurnUp,
    TurnDown,
    TurnLeft,
    TurnRight,
    Confirm,
    Cancel,
    MenuPrev,
    MenuNext,
    MenuAdjustLeft,
    MenuAdjustRight,
    Text(char),
    Backspace,
    Quit,
}

pub fn game_intents() -> Vec<Intent> {
    let mut intents = Vec::new();
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        intents.push(Intent::TurnUp);
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        intents.push(Intent::TurnDown);
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        intents.push(Intent::TurnLeft);
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        intents.push(Intent::TurnRight);
    }
    if is_key_pressed(KeyCode::Escape) {
        intents.push(Intent::Cancel);
    }
    if is_key_pressed(KeyCode::Q) {
        intents.push(Intent::Quit);
    }
    intents
}

pub fn menu_intents() -> Vec<Intent> {
    let mut intents = Vec::new();
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        intents.push(Intent::MenuPrev);
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        intents.push(Intent::MenuNext);
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        intents.push(Intent::MenuAdjustLeft);
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        intents.push(Intent::MenuAdjustRight);
    }
    if is_key_pressed(KeyCode::Enter) {
        intents.push(Intent::Confirm);
    }
    if is_key_pressed(KeyCode::Escape) {
        intents.push(Intent::Cancel);
    }
    if is_key_pressed(KeyCode::Q) {
        intents.push(Intent::Quit);
    }
    intents
}

/// Name-entry input: queued characters plus editing and confirmation keys.
pub fn name_intents() -> Vec<Intent> {
    let mut intents = Vec::new();
    while let Some(c) = get_char_pressed() {
        if !c.is_control() {
            intents.push(Intent::Text(c));
        }
    }
    if is_key_pressed(KeyCode::Backspace) {
        intents.push(Intent::Backspace);
    }
    if is_key_pressed(KeyCode::Enter) {
        intents.push(Intent::Confirm);
    }
    if is_key_pressed(KeyCode::Escape) {
        intents.push(Intent::Cancel);
    }
    intents
}
