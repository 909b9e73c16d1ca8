/// Pure game-logic functions.
///
/// `tick` takes an immutable reference to the current `SimulationState` and
/// returns a brand-new state one frame later. All randomness flows through
/// the xorshift generator stored in the state, so the same seed and inputs
/// always reproduce the same run.
use crate::entities::{
    Alien, AlienState, Bullet, Bullets, GameStatus, InputFrame, Player, SimulationState, Tier,
    MAX_BULLETS, NUM_ALIENS, SWARM_COLS, SWARM_ROWS,
};
use crate::rng::Xorshift32;
use crate::sprites::{Animation, Sprite, SpriteStore};

// ── Playfield & formation constants ──────────────────────────────────────────

pub const PLAYFIELD_WIDTH: i32 = 224;
pub const PLAYFIELD_HEIGHT: i32 = 256;

const COLUMN_SPACING: i32 = 16;
const ROW_SPACING: i32 = 17;
const FORMATION_BASE_Y: i32 = 128;

pub const INITIAL_SWARM_POSITION: i32 = 24;
pub const INITIAL_SWARM_MOVE_DIR: i32 = 4;
/// Pixels the formation drops when it bounces off the left bound.
const DESCENT_STEP: i32 = 8;

/// Frames between sweep ticks at the start of a wave.
pub const BASE_UPDATE_FREQUENCY: u32 = 120;
/// Cadence of the vertical-drift pass, fixed regardless of difficulty.
const DRIFT_CADENCE: u32 = 120;
/// The sweep cadence halves every this many kills.
const KILLS_PER_SPEEDUP: u32 = 15;

const ALIEN_FRAME_DURATION: u32 = 10;
const ALIEN_BULLET_FRAME_DURATION: u32 = 5;
/// Frames the death flash stays on screen after a kill.
const DEATH_COUNTDOWN: u8 = 10;

const PLAYER_SPAWN_X: i32 = 107;
const PLAYER_SPAWN_Y: i32 = 32;
const INITIAL_LIVES: u32 = 3;
const PLAYER_SPEED: i32 = 2;

const PLAYER_BULLET_SPEED: i32 = 2;
const ALIEN_BULLET_SPEED: i32 = -2;

const RNG_SEED: u32 = 13;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned overlap test between two sprite footprints. Strict
/// inequalities on both axes: touching edges do not count as overlap.
pub fn sprite_overlap(a: &Sprite, ax: i32, ay: i32, b: &Sprite, bx: i32, by: i32) -> bool {
    ax < bx + b.width && ax + a.width > bx && ay < by + b.height && ay + a.height > by
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: full swarm, three lives, seeded RNG.
pub fn init_state(sprites: &SpriteStore) -> SimulationState {
    let mut state = SimulationState {
        width: PLAYFIELD_WIDTH,
        height: PLAYFIELD_HEIGHT,
        aliens: [Alien {
            x: 0,
            y: 0,
            state: AlienState::Dead { countdown: 0 },
        }; NUM_ALIENS],
        player: Player {
            x: PLAYER_SPAWN_X,
            y: PLAYER_SPAWN_Y,
            lives: INITIAL_LIVES,
        },
        bullets: Bullets::new(),
        swarm_position: INITIAL_SWARM_POSITION,
        swarm_max_position: PLAYFIELD_WIDTH - COLUMN_SPACING * SWARM_COLS as i32 - 3,
        swarm_move_dir: INITIAL_SWARM_MOVE_DIR,
        sweep_timer: 0,
        drift_timer: 0,
        alien_update_frequency: BASE_UPDATE_FREQUENCY,
        aliens_killed: 0,
        score: 0,
        credits: 0,
        alien_animations: std::array::from_fn(|i| {
            Animation::new(sprites.alien_frames[i], ALIEN_FRAME_DURATION)
        }),
        alien_bullet_animation: Animation::new(sprites.alien_bullet, ALIEN_BULLET_FRAME_DURATION),
        status: GameStatus::Playing,
        rng: Xorshift32::new(RNG_SEED),
    };
    spawn_wave(&mut state, sprites);
    state
}

/// Reset the swarm for a fresh wave: difficulty back to base, kill counter
/// cleared, formation rebuilt from the row/column layout. Score, lives and
/// in-flight bullets carry over.
pub fn spawn_wave(state: &mut SimulationState, sprites: &SpriteStore) {
    state.alien_update_frequency = BASE_UPDATE_FREQUENCY;
    state.swarm_position = INITIAL_SWARM_POSITION;
    state.swarm_move_dir = INITIAL_SWARM_MOVE_DIR;
    state.aliens_killed = 0;
    state.sweep_timer = 0;
    for animation in &mut state.alien_animations {
        animation.frame_duration = ALIEN_FRAME_DURATION;
        animation.time = 0;
    }

    let death_width = sprites.get(sprites.alien_death).width;
    for row in 0..SWARM_ROWS {
        for col in 0..SWARM_COLS {
            let tier = Tier::for_row(row);
            let sprite = sprites.get(sprites.alien_frames[tier.index()][0]);
            // The death flash is wider than any tier sprite; offsetting by
            // half the difference keeps every sprite centred in its slot.
            state.aliens[row * SWARM_COLS + col] = Alien {
                x: COLUMN_SPACING * col as i32
                    + state.swarm_position
                    + (death_width - sprite.width) / 2,
                y: ROW_SPACING * row as i32 + FORMATION_BASE_Y,
                state: AlienState::Alive(tier),
            };
        }
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Pass order is load-bearing: bullets must be fully resolved before the
/// bounds recompute and before new-bullet intake, since those read state
/// the bullet pass mutates. The terminal check runs before any simulation
/// step, so the frame that zeroes the lives still plays out as "alive"
/// once; the next tick enters GameOver and skips everything.
pub fn tick(state: &SimulationState, input: &InputFrame, sprites: &SpriteStore) -> SimulationState {
    let mut next = state.clone();

    if next.player.lives == 0 {
        next.status = GameStatus::GameOver;
        return next;
    }

    drift_pass(&mut next);
    if simulate_bullets(&mut next, sprites) {
        apply_speedup(&mut next);
    }
    decay_death_countdowns(&mut next);
    sweep_pass(&mut next, sprites);
    advance_animations(&mut next);
    next.sweep_timer += 1;
    apply_player_move(&mut next, input.move_dir, sprites);
    if next.aliens_killed < NUM_ALIENS as u32 {
        recompute_swarm_bounds(&mut next, sprites);
    } else {
        spawn_wave(&mut next, sprites);
    }
    if input.fire {
        fire_player_bullet(&mut next, sprites);
    }
    next
}

// ── Swarm controller ─────────────────────────────────────────────────────────

/// An alien slipped off the playfield: the sweep loses one unit of speed.
/// The magnitude shrinks toward zero whichever way the swarm is moving.
pub fn on_alien_escape(swarm_move_dir: &mut i32) {
    *swarm_move_dir -= swarm_move_dir.signum();
}

/// Periodic vertical-drift pass: living aliens bleed along the sweep
/// direction, and one that leaves the playfield is respawned at a random
/// column as a dead slot, slowing the sweep via `on_alien_escape`.
fn drift_pass(state: &mut SimulationState) {
    state.drift_timer += 1;
    if state.drift_timer < DRIFT_CADENCE {
        return;
    }
    state.drift_timer = 0;

    for i in 0..NUM_ALIENS {
        if !state.aliens[i].is_alive() {
            continue;
        }
        if state.aliens[i].y > state.height {
            state.aliens[i].x = (state.rng.next() % state.swarm_max_position as u32) as i32;
            state.aliens[i].y = 0;
            state.aliens[i].state = AlienState::Dead {
                countdown: DEATH_COUNTDOWN,
            };
            on_alien_escape(&mut state.swarm_move_dir);
        } else {
            // Read the direction live: an escape earlier in this pass
            // already slows the remaining aliens' bleed.
            state.aliens[i].y += state.swarm_move_dir;
        }
    }
}

/// Sweep tick, gated on the difficulty cadence: flip direction at the
/// horizontal bounds (descending one row when the left bound is crossed),
/// move the formation, then let one living alien shoot.
fn sweep_pass(state: &mut SimulationState, sprites: &SpriteStore) {
    if state.sweep_timer < state.alien_update_frequency {
        return;
    }
    state.sweep_timer = 0;

    if state.swarm_position + state.swarm_move_dir < 0 {
        state.swarm_move_dir = -state.swarm_move_dir;
        for alien in state.aliens.iter_mut().filter(|a| a.is_alive()) {
            alien.y -= DESCENT_STEP;
        }
    } else if state.swarm_position > state.swarm_max_position - state.swarm_move_dir {
        state.swarm_move_dir = -state.swarm_move_dir;
    }
    state.swarm_position += state.swarm_move_dir;

    let step = state.swarm_move_dir;
    for alien in state.aliens.iter_mut().filter(|a| a.is_alive()) {
        alien.x += step;
    }

    // Shooter selection. The kill-count guard is what keeps the rejection
    // loop finite: it guarantees at least one living slot exists.
    if state.aliens_killed < NUM_ALIENS as u32 {
        let mut shooter = (NUM_ALIENS as f64 * state.rng.unit()) as usize;
        while !state.aliens[shooter].is_alive() {
            shooter = (NUM_ALIENS as f64 * state.rng.unit()) as usize;
        }
        let alien = state.aliens[shooter];
        if let Some(tier) = alien.tier() {
            let muzzle = sprites.get(sprites.alien_frames[tier.index()][0]);
            let shot = sprites.get(sprites.alien_bullet[0]);
            // Dropped silently if the bullet array happens to be full.
            state.bullets.spawn(Bullet {
                x: alien.x + muzzle.width / 2,
                y: alien.y - shot.height,
                dir: ALIEN_BULLET_SPEED,
            });
        }
    }
}

/// Tighten the sweep reversal points to the living formation's footprint:
/// the leftmost living sprite raises the left bound and the rightmost
/// extends the right bound. Precondition: at least one alien is alive
/// (`aliens_killed < NUM_ALIENS`), checked by the caller.
fn recompute_swarm_bounds(state: &mut SimulationState, sprites: &SpriteStore) {
    let death_width = sprites.get(sprites.alien_death).width;

    let Some(first) = state.aliens.iter().position(Alien::is_alive) else {
        return;
    };
    let Some(tier) = state.aliens[first].tier() else {
        return;
    };
    let sprite_width = sprites.get(sprites.alien_frames[tier.index()][0]).width;
    let left = state.aliens[first].x - (death_width - sprite_width) / 2;
    if left > state.swarm_position {
        state.swarm_position = left;
    }

    let Some(last) = state.aliens.iter().rposition(Alien::is_alive) else {
        return;
    };
    let right = state.width - state.aliens[last].x - death_width + left;
    if right > state.swarm_max_position {
        state.swarm_max_position = right;
    }
}

// ── Bullet subsystem ─────────────────────────────────────────────────────────

/// One pass over the live bullets: advance, expire, resolve collisions.
/// Removals are deferred — slots are marked dead during the scan and the
/// array is compacted once afterwards, so every bullet live at the start
/// of the pass is visited exactly once regardless of which slots die.
/// Returns true when a kill crossed a speed-up threshold.
fn simulate_bullets(state: &mut SimulationState, sprites: &SpriteStore) -> bool {
    let player_bullet = *sprites.get(sprites.player_bullet);
    let alien_bullet = *sprites.get(sprites.alien_bullet[0]);
    let player_sprite = *sprites.get(sprites.player);
    let death_width = sprites.get(sprites.alien_death).width;

    let mut dead = [false; MAX_BULLETS];
    let mut speed_up = false;
    for i in 0..state.bullets.len() {
        if dead[i] {
            continue;
        }
        state.bullets[i].y += state.bullets[i].dir;
        // Expired once outside [bullet height, playfield height).
        if state.bullets[i].y >= state.height || state.bullets[i].y < player_bullet.height {
            dead[i] = true;
            continue;
        }

        if state.bullets[i].dir < 0 {
            // Swarm shot against the player's footprint.
            let b = state.bullets[i];
            if sprite_overlap(
                &alien_bullet,
                b.x,
                b.y,
                &player_sprite,
                state.player.x,
                state.player.y,
            ) {
                state.player.lives = state.player.lives.saturating_sub(1);
                dead[i] = true;
                continue;
            }
        } else {
            // Player shot: may cancel a falling swarm shot...
            if let Some(j) = find_opposing_bullet(state, &dead, &player_bullet, &alien_bullet, i) {
                dead[i] = true;
                dead[j] = true;
                continue;
            }
            // ...or kill at most one alien.
            if resolve_alien_hit(state, sprites, &player_bullet, death_width, i) {
                dead[i] = true;
                if state.aliens_killed % KILLS_PER_SPEEDUP == 0 {
                    speed_up = true;
                }
                continue;
            }
        }
    }

    compact_bullets(&mut state.bullets, &mut dead);
    speed_up
}

/// Slot of a falling swarm shot overlapping the player bullet in slot `i`,
/// ignoring slots already marked for removal. Overlap means mutual
/// destruction; the caller marks both slots.
fn find_opposing_bullet(
    state: &SimulationState,
    dead: &[bool; MAX_BULLETS],
    player_bullet: &Sprite,
    alien_bullet: &Sprite,
    i: usize,
) -> Option<usize> {
    let b = state.bullets[i];
    (0..state.bullets.len()).find(|&j| {
        j != i
            && !dead[j]
            && state.bullets[j].dir < 0
            && sprite_overlap(
                player_bullet,
                b.x,
                b.y,
                alien_bullet,
                state.bullets[j].x,
                state.bullets[j].y,
            )
    })
}

/// Drop every slot marked dead in one compaction pass. Each swap-remove
/// carries the tail slot's mark along with the tail bullet.
fn compact_bullets(bullets: &mut Bullets, dead: &mut [bool; MAX_BULLETS]) {
    let mut i = 0;
    while i < bullets.len() {
        if dead[i] {
            let last = bullets.len() - 1;
            dead[i] = dead[last];
            dead[last] = false;
            bullets.swap_remove(i);
        } else {
            i += 1;
        }
    }
}

/// Player bullet versus the swarm. The overlap is tested against whichever
/// animation frame is visible this tick, and a bullet kills at most one
/// alien. Returns true on a kill; the caller retires the bullet slot.
fn resolve_alien_hit(
    state: &mut SimulationState,
    sprites: &SpriteStore,
    player_bullet: &Sprite,
    death_width: i32,
    i: usize,
) -> bool {
    let b = state.bullets[i];
    for j in 0..NUM_ALIENS {
        let Some(tier) = state.aliens[j].tier() else {
            continue;
        };
        let frame = state.alien_animations[tier.index()].current_frame();
        let alien_sprite = sprites.get(frame);
        if sprite_overlap(
            player_bullet,
            b.x,
            b.y,
            alien_sprite,
            state.aliens[j].x,
            state.aliens[j].y,
        ) {
            state.score += tier.score();
            state.aliens[j].state = AlienState::Dead {
                countdown: DEATH_COUNTDOWN,
            };
            // Recenter so the wider death flash sits on the old footprint.
            state.aliens[j].x -= (death_width - alien_sprite.width) / 2;
            state.aliens_killed += 1;
            return true;
        }
    }
    false
}

// ── Difficulty scaler ────────────────────────────────────────────────────────

/// Halve the sweep cadence and retune the tier animations to match, so
/// movement and animation speed up together. Monotonic within a wave;
/// `spawn_wave` is the only reset.
fn apply_speedup(state: &mut SimulationState) {
    state.alien_update_frequency /= 2;
    for animation in &mut state.alien_animations {
        // Clamp keeps `current_frame` well-defined once the cadence
        // bottoms out at zero.
        animation.frame_duration = state.alien_update_frequency.max(1);
        animation.time = 0;
    }
}

// ── Housekeeping passes ──────────────────────────────────────────────────────

/// Death flashes fade: per-slot countdowns tick toward zero and stay there.
fn decay_death_countdowns(state: &mut SimulationState) {
    for alien in &mut state.aliens {
        if let AlienState::Dead { countdown } = &mut alien.state {
            *countdown = countdown.saturating_sub(1);
        }
    }
}

fn advance_animations(state: &mut SimulationState) {
    for animation in &mut state.alien_animations {
        animation.advance();
    }
    state.alien_bullet_animation.advance();
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Apply the coalesced horizontal intent, clamping the ship to the
/// playfield.
fn apply_player_move(state: &mut SimulationState, move_dir: i32, sprites: &SpriteStore) {
    let step = PLAYER_SPEED * move_dir;
    if step == 0 {
        return;
    }
    let width = sprites.get(sprites.player).width;
    if state.player.x + width + step >= state.width {
        state.player.x = state.width - width;
    } else if state.player.x + step <= 0 {
        state.player.x = 0;
    } else {
        state.player.x += step;
    }
}

/// Fire intake — silently dropped when the bullet array is at capacity.
fn fire_player_bullet(state: &mut SimulationState, sprites: &SpriteStore) {
    let ship = sprites.get(sprites.player);
    state.bullets.spawn(Bullet {
        x: state.player.x + ship.width / 2,
        y: state.player.y,
        dir: PLAYER_BULLET_SPEED,
    });
}
