use std::fs::File;

use log::info;
use macroquad::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

mod audio;
mod fx;
mod grid;
mod input;
mod items;
mod menu;
mod palette;
mod scores;
mod screens;
mod session;
mod snake;

use audio::Sounds;
use fx::Fx;
use grid::{SCREEN_HEIGHT, SCREEN_WIDTH};
use screens::{MenuScreen, Screen};

const LOG_FILE: &str = "snake_arcade.log";

fn window_conf() -> Conf {
    Conf {
        window_title: " S N A K E ".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging() {
    if let Ok(file) = File::create(LOG_FILE) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    info!("snake arcade starting");
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let sounds = Sounds::load().await;
    let mut fx = Fx::new();
    let mut screen = Screen::Menu(MenuScreen::new());

    loop {
        let dt = get_frame_time();

        let next_screen = screen.frame(dt, &sounds, &mut fx);
        fx.update(dt);
        fx.draw();

        if let Some(ns) = next_screen {
            screen = ns;
        }

        next_frame().await;
    }
}
