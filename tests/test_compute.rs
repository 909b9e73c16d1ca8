use pixel_invaders::compute::*;
use pixel_invaders::entities::*;
use pixel_invaders::sprites::{Sprite, SpriteStore};

fn setup() -> (SpriteStore, SimulationState) {
    let sprites = SpriteStore::new();
    let state = init_state(&sprites);
    (sprites, state)
}

const NO_INPUT: InputFrame = InputFrame { move_dir: 0, fire: false };

// ── init_state / formation layout ────────────────────────────────────────────

#[test]
fn init_state_player_and_counters() {
    let (_, s) = setup();
    assert_eq!(s.player.x, 107);
    assert_eq!(s.player.y, 32);
    assert_eq!(s.player.lives, 3);
    assert!(s.bullets.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.aliens_killed, 0);
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.width, 224);
    assert_eq!(s.height, 256);
}

#[test]
fn init_state_swarm_parameters() {
    let (_, s) = setup();
    assert_eq!(s.swarm_position, INITIAL_SWARM_POSITION);
    assert_eq!(s.swarm_move_dir, INITIAL_SWARM_MOVE_DIR);
    assert_eq!(s.swarm_max_position, 224 - 16 * 11 - 3);
    assert_eq!(s.alien_update_frequency, BASE_UPDATE_FREQUENCY);
}

#[test]
fn init_state_formation_layout() {
    let (_, s) = setup();
    assert_eq!(s.aliens.iter().filter(|a| a.is_alive()).count(), NUM_ALIENS);

    // Bottom-left octopus sits flush at the swarm's reference edge
    assert_eq!(s.aliens[0].x, 24);
    assert_eq!(s.aliens[0].y, 128);
    assert_eq!(s.aliens[0].tier(), Some(Tier::Octopus));

    // Top-right squid: column 10, row 4, centered in its 16px slot
    assert_eq!(s.aliens[54].x, 16 * 10 + 24 + 2);
    assert_eq!(s.aliens[54].y, 17 * 4 + 128);
    assert_eq!(s.aliens[54].tier(), Some(Tier::Squid));

    // Row spacing is 17, column spacing 16
    assert_eq!(s.aliens[11].y - s.aliens[0].y, 17);
    assert_eq!(s.aliens[1].x - s.aliens[0].x, 16);
}

// ── sprite_overlap ────────────────────────────────────────────────────────────

#[test]
fn overlap_is_symmetric() {
    let a = Sprite { width: 5, height: 5, data: &[] };
    let b = Sprite { width: 3, height: 3, data: &[] };
    assert!(sprite_overlap(&a, 0, 0, &b, 4, 4));
    assert!(sprite_overlap(&b, 4, 4, &a, 0, 0));
    assert!(!sprite_overlap(&a, 0, 0, &b, 20, 20));
    assert!(!sprite_overlap(&b, 20, 20, &a, 0, 0));
}

#[test]
fn overlap_excludes_touching_edges() {
    let a = Sprite { width: 5, height: 5, data: &[] };
    let b = Sprite { width: 5, height: 5, data: &[] };
    // Abutting horizontally or vertically is not an overlap
    assert!(!sprite_overlap(&a, 0, 0, &b, 5, 0));
    assert!(!sprite_overlap(&a, 0, 0, &b, 0, 5));
    // One pixel of penetration is
    assert!(sprite_overlap(&a, 0, 0, &b, 4, 0));
    assert!(sprite_overlap(&a, 0, 0, &b, 0, 4));
}

// ── tick — bullet movement & expiry ───────────────────────────────────────────

#[test]
fn tick_player_bullet_moves_up() {
    let (sprites, mut s) = setup();
    s.bullets.spawn(Bullet { x: 100, y: 50, dir: 2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].y, 52);
}

#[test]
fn tick_alien_bullet_moves_down() {
    let (sprites, mut s) = setup();
    s.bullets.spawn(Bullet { x: 10, y: 50, dir: -2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].y, 48);
}

#[test]
fn tick_bullet_expires_at_top() {
    let (sprites, mut s) = setup();
    s.bullets.spawn(Bullet { x: 100, y: 255, dir: 2 }); // moves to 257 ≥ 256
    s.bullets.spawn(Bullet { x: 100, y: 253, dir: 2 }); // moves to 255, kept
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].y, 255);
}

#[test]
fn tick_bullet_expires_below_bullet_height() {
    let (sprites, mut s) = setup();
    s.bullets.spawn(Bullet { x: 10, y: 4, dir: -2 }); // moves to 2 < 3, dropped
    s.bullets.spawn(Bullet { x: 10, y: 5, dir: -2 }); // moves to 3, kept
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].y, 3);
}

// ── tick — collisions ─────────────────────────────────────────────────────────

#[test]
fn tick_alien_bullet_hits_player() {
    let (sprites, mut s) = setup(); // player at (107, 32), 11×7
    s.bullets.spawn(Bullet { x: 110, y: 36, dir: -2 }); // moves to 34, inside
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.player.lives, 2);
    assert!(s2.bullets.is_empty());
}

#[test]
fn tick_player_bullet_kills_alien() {
    let (sprites, mut s) = setup();
    // Alien 0 is the octopus at (24, 128); bullet moves to y=126, 1×3 footprint
    s.bullets.spawn(Bullet { x: 28, y: 124, dir: 2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);

    assert!(!s2.aliens[0].is_alive());
    assert!(matches!(s2.aliens[0].state, AlienState::Dead { .. }));
    assert_eq!(s2.score, 10); // octopus = 10 points
    assert_eq!(s2.aliens_killed, 1);
    assert!(s2.bullets.is_empty());
    // First kill is below the speed-up threshold
    assert_eq!(s2.alien_update_frequency, BASE_UPDATE_FREQUENCY);
}

#[test]
fn tick_kill_scores_by_tier() {
    // Crab row 2, column 0 at (25, 162)
    let (sprites, mut s) = setup();
    s.bullets.spawn(Bullet { x: 28, y: 158, dir: 2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.score, 20);

    // Squid row 4, column 0 at (26, 196)
    let (sprites, mut s) = setup();
    s.bullets.spawn(Bullet { x: 30, y: 192, dir: 2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.score, 30);
}

#[test]
fn tick_bullet_kills_at_most_one_alien() {
    let (sprites, mut s) = setup();
    // Stack two aliens on the same footprint; one bullet must kill only one
    s.aliens[1].x = s.aliens[0].x;
    s.aliens[1].y = s.aliens[0].y;
    s.bullets.spawn(Bullet { x: 28, y: 124, dir: 2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.aliens_killed, 1);
    assert_eq!(s2.score, 10);
    assert!(s2.aliens[0].is_alive() != s2.aliens[1].is_alive());
}

#[test]
fn tick_opposing_bullets_destroy_each_other() {
    let (sprites, mut s) = setup();
    s.bullets.spawn(Bullet { x: 100, y: 50, dir: 2 });
    s.bullets.spawn(Bullet { x: 100, y: 53, dir: -2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert!(s2.bullets.is_empty());
    assert_eq!(s2.player.lives, 3);
    assert_eq!(s2.score, 0);
}

#[test]
fn tick_cancellation_still_advances_remaining_bullets() {
    let (sprites, mut s) = setup();
    // Swarm shot in the lowest slot, the player shot that cancels it next,
    // then an unrelated player shot in the last slot
    s.bullets.spawn(Bullet { x: 100, y: 56, dir: -2 });
    s.bullets.spawn(Bullet { x: 100, y: 50, dir: 2 });
    s.bullets.spawn(Bullet { x: 150, y: 60, dir: 2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    // The cancelling pair is gone and the bystander moved its full step
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0], Bullet { x: 150, y: 62, dir: 2 });
    assert_eq!(s2.player.lives, 3);
    assert_eq!(s2.score, 0);
}

// ── tick — death countdown ────────────────────────────────────────────────────

#[test]
fn death_countdown_decays_to_zero_and_stops() {
    let (sprites, mut s) = setup();
    s.aliens[0].state = AlienState::Dead { countdown: 2 };
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.aliens[0].state, AlienState::Dead { countdown: 1 });
    let s3 = tick(&s2, &NO_INPUT, &sprites);
    assert_eq!(s3.aliens[0].state, AlienState::Dead { countdown: 0 });
    let s4 = tick(&s3, &NO_INPUT, &sprites);
    assert_eq!(s4.aliens[0].state, AlienState::Dead { countdown: 0 });
}

// ── tick — sweep ──────────────────────────────────────────────────────────────

#[test]
fn sweep_waits_for_update_frequency() {
    let (sprites, s) = setup();
    let s2 = tick(&s, &NO_INPUT, &sprites);
    // Timer accumulates but the formation has not moved yet
    assert_eq!(s2.sweep_timer, 1);
    assert_eq!(s2.aliens[0].x, 24);
    assert!(s2.bullets.is_empty());
}

#[test]
fn sweep_moves_formation_and_spawns_alien_shot() {
    let (sprites, mut s) = setup();
    s.sweep_timer = 120;
    let s2 = tick(&s, &NO_INPUT, &sprites);

    assert_eq!(s2.swarm_position, 24 + 4);
    assert_eq!(s2.aliens[0].x, 28);
    assert_eq!(s2.sweep_timer, 1); // reset, then the frame counter ticked

    // One swarm shot, fired after the move. Seed 13's first draw selects
    // alien 0, the bottom-left octopus (12 wide).
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].dir, -2);
    assert_eq!(s2.bullets[0].x, 28 + 6);
    assert_eq!(s2.bullets[0].y, 128 - 7);
}

#[test]
fn sweep_flips_at_right_bound_without_descent() {
    let (sprites, mut s) = setup();
    s.sweep_timer = 120;
    s.swarm_position = 42; // past max (45) − dir (4)
    let s2 = tick(&s, &NO_INPUT, &sprites);

    assert_eq!(s2.swarm_move_dir, -4);
    assert_eq!(s2.swarm_position, 42 - 4);
    assert_eq!(s2.aliens[0].x, 24 - 4);
    assert_eq!(s2.aliens[0].y, 128); // no descent on the right flip
}

#[test]
fn sweep_flips_at_left_bound_with_descent() {
    let (sprites, mut s) = setup();
    s.sweep_timer = 120;
    s.swarm_position = 2;
    s.swarm_move_dir = -4;
    let s2 = tick(&s, &NO_INPUT, &sprites);

    assert_eq!(s2.swarm_move_dir, 4);
    assert_eq!(s2.aliens[0].x, 24 + 4);
    assert_eq!(s2.aliens[0].y, 128 - 8); // the whole swarm steps down
    // The per-frame bounds recompute snaps the reference edge back onto
    // the living footprint
    assert_eq!(s2.swarm_position, 28);
}

// ── tick — drift / escape ─────────────────────────────────────────────────────

#[test]
fn drift_waits_for_cadence() {
    let (sprites, s) = setup();
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.drift_timer, 1);
    assert_eq!(s2.aliens[0].y, 128);
}

#[test]
fn escaped_alien_is_relocated_and_slows_the_sweep() {
    let (sprites, mut s) = setup();
    s.drift_timer = 119; // drift pass fires this tick
    s.aliens[0].y = 257; // past the playfield top
    let s2 = tick(&s, &NO_INPUT, &sprites);

    // Relocated to a random column (seed 13: 3514797 % 45 = 27), reset to
    // the bottom, marked dead without counting as a kill
    assert!(!s2.aliens[0].is_alive());
    assert_eq!(s2.aliens[0].x, 27);
    assert_eq!(s2.aliens[0].y, 0);
    assert_eq!(s2.aliens_killed, 0);

    // Sweep magnitude shrank by one, and the rest of the swarm bled down
    // by the reduced step
    assert_eq!(s2.swarm_move_dir, 3);
    assert_eq!(s2.aliens[1].y, 128 + 3);
}

#[test]
fn on_alien_escape_decrements_magnitude_toward_zero() {
    let mut dir = 4;
    on_alien_escape(&mut dir);
    assert_eq!(dir, 3);

    let mut dir = -4;
    on_alien_escape(&mut dir);
    assert_eq!(dir, -3);

    let mut dir = 0;
    on_alien_escape(&mut dir);
    assert_eq!(dir, 0);
}

// ── tick — difficulty scaling ─────────────────────────────────────────────────

#[test]
fn fifteenth_kill_halves_update_frequency() {
    let (sprites, mut s) = setup();
    s.aliens_killed = 14;
    s.bullets.spawn(Bullet { x: 28, y: 124, dir: 2 }); // kills alien 0
    let s2 = tick(&s, &NO_INPUT, &sprites);

    assert_eq!(s2.aliens_killed, 15);
    assert_eq!(s2.alien_update_frequency, 60);
    // Animation cadence tracks the sweep cadence
    for anim in &s2.alien_animations {
        assert_eq!(anim.frame_duration, 60);
    }
}

#[test]
fn thirtieth_kill_halves_again() {
    let (sprites, mut s) = setup();
    s.aliens_killed = 29;
    s.alien_update_frequency = 60;
    s.bullets.spawn(Bullet { x: 28, y: 124, dir: 2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);
    assert_eq!(s2.alien_update_frequency, 30);
}

// ── tick — wave exhaustion ────────────────────────────────────────────────────

#[test]
fn exhausted_wave_respawns_fresh_formation() {
    let (sprites, mut s) = setup();
    for alien in s.aliens.iter_mut() {
        alien.state = AlienState::Dead { countdown: 0 };
    }
    s.aliens_killed = NUM_ALIENS as u32;
    s.alien_update_frequency = 30;
    s.score = 990;
    let s2 = tick(&s, &NO_INPUT, &sprites);

    assert_eq!(s2.aliens.iter().filter(|a| a.is_alive()).count(), NUM_ALIENS);
    assert_eq!(s2.aliens[0].x, 24);
    assert_eq!(s2.aliens[0].y, 128);
    assert_eq!(s2.swarm_position, 24);
    assert_eq!(s2.swarm_move_dir, 4);
    assert_eq!(s2.aliens_killed, 0);
    assert_eq!(s2.alien_update_frequency, BASE_UPDATE_FREQUENCY);
    assert_eq!(s2.sweep_timer, 0);
    // Score and lives carry across waves
    assert_eq!(s2.score, 990);
    assert_eq!(s2.player.lives, 3);
}

// ── tick — player movement & fire ─────────────────────────────────────────────

#[test]
fn player_moves_by_twice_the_intent() {
    let (sprites, s) = setup();
    let right = tick(&s, &InputFrame { move_dir: 1, fire: false }, &sprites);
    assert_eq!(right.player.x, 109);
    let left = tick(&s, &InputFrame { move_dir: -1, fire: false }, &sprites);
    assert_eq!(left.player.x, 105);
}

#[test]
fn player_clamps_at_playfield_edges() {
    let (sprites, mut s) = setup();
    s.player.x = 212; // 212 + 11 + 2 ≥ 224
    let s2 = tick(&s, &InputFrame { move_dir: 1, fire: false }, &sprites);
    assert_eq!(s2.player.x, 224 - 11);

    let (sprites, mut s) = setup();
    s.player.x = 1;
    let s2 = tick(&s, &InputFrame { move_dir: -1, fire: false }, &sprites);
    assert_eq!(s2.player.x, 0);
}

#[test]
fn fire_spawns_bullet_at_the_muzzle() {
    let (sprites, s) = setup();
    let s2 = tick(&s, &InputFrame { move_dir: 0, fire: true }, &sprites);
    assert_eq!(s2.bullets.len(), 1);
    // Fire intake runs after movement, so the bullet starts unmoved this tick
    assert_eq!(s2.bullets[0], Bullet { x: 107 + 11 / 2, y: 32, dir: 2 });
}

#[test]
fn fire_is_dropped_when_bullet_array_is_full() {
    let (sprites, mut s) = setup();
    for _ in 0..MAX_BULLETS {
        s.bullets.spawn(Bullet { x: 5, y: 100, dir: 0 });
    }
    let s2 = tick(&s, &InputFrame { move_dir: 0, fire: true }, &sprites);
    assert_eq!(s2.bullets.len(), MAX_BULLETS);
}

// ── tick — game over ──────────────────────────────────────────────────────────

#[test]
fn losing_last_life_plays_out_the_frame() {
    let (sprites, mut s) = setup();
    s.player.lives = 1;
    s.bullets.spawn(Bullet { x: 110, y: 36, dir: -2 });
    let s2 = tick(&s, &NO_INPUT, &sprites);

    // The zeroing frame still simulates as "alive"
    assert_eq!(s2.player.lives, 0);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.sweep_timer, 1);

    // The next frame enters game over and skips everything
    let s3 = tick(&s2, &NO_INPUT, &sprites);
    assert_eq!(s3.status, GameStatus::GameOver);
    assert_eq!(s3.sweep_timer, 1);
}

#[test]
fn game_over_tick_freezes_the_simulation() {
    let (sprites, mut s) = setup();
    s.player.lives = 0;
    s.bullets.spawn(Bullet { x: 100, y: 50, dir: 2 });
    let s2 = tick(&s, &InputFrame { move_dir: 1, fire: true }, &sprites);

    assert_eq!(s2.status, GameStatus::GameOver);
    // Nothing moved, nothing spawned, nothing expired
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].y, 50);
    assert_eq!(s2.player.x, 107);
    assert_eq!(s2.sweep_timer, 0);
}
