//! Generated beep sounds, no audio assets required.

use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};

pub struct Sounds {
    eat: Sound,
    game_over: Sound,
    click: Sound,
}

impl Sounds {
    pub async fn load() -> Self {
        let eat = load_sound_from_bytes(&sine_wav(880.0, 0.08, 0.6)).await.unwrap();
        let game_over = load_sound_from_bytes(&sine_wav(110.0, 0.25, 0.7)).await.unwrap();
        let click = load_sound_from_bytes(&sine_wav(660.0, 0.05, 0.5)).await.unwrap();
        Self {
            eat,
            game_over,
            click,
        }
    }

    pub fn eat(&self) {
        play(&self.eat, 0.3);
    }

    pub fn game_over(&self) {
        play(&self.game_over, 0.2);
    }

    pub fn click(&self) {
        play(&self.click, 0.3);
    }
}

fn play(sound: &Sound, volume: f32) {
    audio::play_sound(
        sound,
        PlaySoundParams {
            looped: false,
            volume,
        },
    );
}

// Mono PCM16 WAV assembled in memory, one sine tone per sound
fn sine_wav(frequency_hz: f32, duration_secs: f32, volume: f32) -> Vec<u8> {
    const SAMPLE_RATE: u32 = 44100;
    let sample_count = (duration_secs * SAMPLE_RATE as f32) as u32;
    let data_len = sample_count * 2;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7 * i16::MAX as f32;
    let phase_step = std::f32::consts::TAU * frequency_hz / SAMPLE_RATE as f32;
    for n in 0..sample_count {
        let sample = (amplitude * (phase_step * n as f32).sin()) as i16;
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    wav
}
