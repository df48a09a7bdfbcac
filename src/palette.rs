use macroquad::prelude::Color;

pub const BG: Color = Color::new(0.06, 0.08, 0.12, 1.0);
pub const GRID_LINE: Color = Color::new(0.10, 0.12, 0.16, 1.0);
pub const SNAKE_HEAD: Color = Color::new(0.45, 0.82, 0.86, 1.0);
pub const SNAKE_BODY: [Color; 4] = [
    Color::new(0.31, 0.63, 0.67, 1.0),
    Color::new(0.35, 0.71, 0.75, 1.0),
    Color::new(0.27, 0.55, 0.59, 1.0),
    Color::new(0.39, 0.78, 0.82, 1.0),
];
pub const OBSTACLE: Color = Color::new(0.47, 0.47, 0.47, 1.0);
pub const TEXT: Color = Color::new(0.86, 0.86, 0.86, 1.0);
pub const ACCENT: Color = Color::new(0.90, 0.39, 0.39, 1.0);
pub const GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);
pub const PURPLE: Color = Color::new(0.71, 0.47, 1.0, 1.0);
pub const INPUT_BOX: Color = Color::new(0.16, 0.20, 0.25, 1.0);
pub const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.4);
