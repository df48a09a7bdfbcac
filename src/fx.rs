//! Particle bursts for consumed items.

use macroquad::prelude::*;

use crate::grid::{Cell, TILE_SIZE};

const BURST_COUNT: usize = 20;
const PARTICLE_LIFE: f32 = 0.33;
const SHRINK_PER_SEC: f32 = 12.0;

struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: f32,
    life: f32,
    color: Color,
}

pub struct Fx {
    particles: Vec<Particle>,
}

impl Fx {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    pub fn burst(&mut self, cell: Cell, color: Color) {
        let cx = (cell.x * TILE_SIZE + TILE_SIZE / 2) as f32;
        let cy = (cell.y * TILE_SIZE + TILE_SIZE / 2) as f32;
        for _ in 0..BURST_COUNT {
            let angle = macroquad::rand::gen_range(0.0, std::f32::consts::TAU);
            let speed = macroquad::rand::gen_range(60.0, 240.0);
            self.particles.push(Particle {
                x: cx,
                y: cy,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                radius: macroquad::rand::gen_range(4.0, 8.0),
                life: PARTICLE_LIFE,
                color,
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.radius -= SHRINK_PER_SEC * dt;
            p.life -= dt;
        }
        self.particles.retain(|p| p.life > 0.0 && p.radius > 0.0);
    }

    pub fn draw(&self) {
        for p in &self.particles {
            draw_circle(p.x, p.y, p.radius, p.color);
        }
    }
}
