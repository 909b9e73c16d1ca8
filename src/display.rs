/// Rendering layer — all terminal I/O lives here.
///
/// The frame is composed into a pixel `Buffer` first, then presented to the
/// terminal as half-block cells (two vertically stacked pixels per cell).
/// No game logic is performed; this module only translates state into
/// pixels and pixels into terminal commands.
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::buffer::{rgb, Buffer};
use crate::entities::{AlienState, GameStatus, SimulationState};
use crate::sprites::SpriteStore;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: u32 = rgb(0, 0, 0);
const C_HUD: u32 = rgb(128, 0, 0);
const C_SWARM: u32 = rgb(0, 128, 0);

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: compose the pixel buffer from the game state,
/// then push it to the terminal.
pub fn render<W: Write>(
    out: &mut W,
    state: &SimulationState,
    sprites: &SpriteStore,
    frame: &mut Buffer,
) -> std::io::Result<()> {
    frame.clear(C_BACKGROUND);

    draw_hud(frame, state, sprites);

    if state.status == GameStatus::GameOver {
        draw_game_over(frame, sprites);
    } else {
        draw_swarm(frame, state, sprites);
        draw_bullets(frame, state, sprites);
        frame.draw_sprite(sprites.get(sprites.player), state.player.x, state.player.y, C_HUD);
    }

    present(out, frame)?;
    out.flush()?;
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud(frame: &mut Buffer, state: &SimulationState, sprites: &SpriteStore) {
    frame.draw_text(sprites, "SCORE", 4, frame.height() - 14, C_HUD);
    frame.draw_number(sprites, state.score, 14, frame.height() - 26, C_HUD);

    frame.draw_text(
        sprites,
        &format!("CREDIT {:02}", state.credits),
        164,
        7,
        C_HUD,
    );

    // Lives counter plus one ship icon per remaining life, and the
    // separator between the playfield and the bottom HUD strip. The
    // game-over screen shows only the score and credit text.
    if state.status != GameStatus::GameOver {
        frame.draw_sprite(sprites.get(sprites.digit(state.player.lives.min(9))), 4, 7, C_HUD);
        let ship = sprites.get(sprites.player);
        let mut xp = 16;
        for _ in 0..state.player.lives {
            frame.draw_sprite(ship, xp, 7, C_HUD);
            xp += ship.width + 2;
        }
        frame.fill_row(16, C_HUD);
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_swarm(frame: &mut Buffer, state: &SimulationState, sprites: &SpriteStore) {
    for alien in &state.aliens {
        match alien.state {
            AlienState::Alive(tier) => {
                let id = state.alien_animations[tier.index()].current_frame();
                frame.draw_sprite(sprites.get(id), alien.x, alien.y, C_SWARM);
            }
            AlienState::Dead { countdown } if countdown > 0 => {
                frame.draw_sprite(sprites.get(sprites.alien_death), alien.x, alien.y, C_HUD);
            }
            AlienState::Dead { .. } => {}
        }
    }
}

fn draw_bullets(frame: &mut Buffer, state: &SimulationState, sprites: &SpriteStore) {
    for bullet in state.bullets.iter() {
        let id = if bullet.dir > 0 {
            sprites.player_bullet
        } else {
            state.alien_bullet_animation.current_frame()
        };
        frame.draw_sprite(sprites.get(id), bullet.x, bullet.y, C_HUD);
    }
}

// ── Game-over screen ──────────────────────────────────────────────────────────

fn draw_game_over(frame: &mut Buffer, sprites: &SpriteStore) {
    frame.draw_text(sprites, "GAME OVER", 82, 128, C_HUD);
    frame.draw_text(sprites, "PRESS R TO START OVER", 42, 78, C_HUD);
}

// ── Terminal presenter ────────────────────────────────────────────────────────

fn to_color(pixel: u32) -> Color {
    Color::Rgb {
        r: (pixel >> 24) as u8,
        g: (pixel >> 16) as u8,
        b: (pixel >> 8) as u8,
    }
}

/// Push the pixel buffer to the terminal. Each cell shows two pixels via
/// the upper-half-block glyph (foreground = upper pixel, background =
/// lower), and colour commands are only emitted on change. The buffer is
/// y-up, so terminal row 0 shows the top of the buffer.
fn present<W: Write>(out: &mut W, frame: &Buffer) -> std::io::Result<()> {
    let rows = frame.height() / 2;
    let mut fg = None;
    let mut bg = None;

    for row in 0..rows {
        out.queue(cursor::MoveTo(0, row as u16))?;
        let upper_y = frame.height() - 1 - row * 2;
        for x in 0..frame.width() {
            let upper = frame.get(x, upper_y);
            let lower = frame.get(x, upper_y - 1);
            if fg != Some(upper) {
                out.queue(style::SetForegroundColor(to_color(upper)))?;
                fg = Some(upper);
            }
            if bg != Some(lower) {
                out.queue(style::SetBackgroundColor(to_color(lower)))?;
                bg = Some(lower);
            }
            out.queue(Print('▀'))?;
        }
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows as u16))?;
    Ok(())
}
