/// All game entity types — pure data plus small accessors, no per-frame
/// logic.
use crate::rng::Xorshift32;
use crate::sprites::Animation;

pub const SWARM_ROWS: usize = 5;
pub const SWARM_COLS: usize = 11;
pub const NUM_ALIENS: usize = SWARM_ROWS * SWARM_COLS;

/// Strength category of a living alien, determining sprite, animation and
/// score value. Rank 1 sits in the top rows and is worth the most.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Squid,
    Crab,
    Octopus,
}

impl Tier {
    /// Numeric rank, 1..=3.
    pub fn rank(self) -> u32 {
        match self {
            Tier::Squid => 1,
            Tier::Crab => 2,
            Tier::Octopus => 3,
        }
    }

    /// Index into per-tier tables (animations, sprite frames).
    pub fn index(self) -> usize {
        (self.rank() - 1) as usize
    }

    /// Points awarded for a kill: `10 * (4 - rank)` → 30 / 20 / 10.
    pub fn score(self) -> u32 {
        10 * (4 - self.rank())
    }

    /// Tier assigned to a formation row; row 0 is the lowest row.
    pub fn for_row(row: usize) -> Tier {
        match (5 - row) / 2 + 1 {
            1 => Tier::Squid,
            2 => Tier::Crab,
            _ => Tier::Octopus,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienState {
    Alive(Tier),
    /// Shot (or escaped off the playfield). The death flash stays visible
    /// while `countdown` is nonzero; the slot is never removed from the
    /// swarm, only flagged.
    Dead { countdown: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub state: AlienState,
}

impl Alien {
    pub fn is_alive(&self) -> bool {
        matches!(self.state, AlienState::Alive(_))
    }

    pub fn tier(&self) -> Option<Tier> {
        match self.state {
            AlienState::Alive(tier) => Some(tier),
            AlienState::Dead { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub lives: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Vertical speed: positive bullets are the player's (moving up),
    /// negative ones the swarm's.
    pub dir: i32,
}

pub const MAX_BULLETS: usize = 128;

/// Fixed-capacity unordered bullet storage. Removal is swap-remove: the
/// removed slot is overwritten with the last live bullet and the live count
/// shrinks by one, so a loop that removes while iterating must revisit the
/// same index instead of advancing.
#[derive(Clone, Debug)]
pub struct Bullets {
    slots: [Bullet; MAX_BULLETS],
    len: usize,
}

impl Bullets {
    pub fn new() -> Self {
        Self {
            slots: [Bullet::default(); MAX_BULLETS],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a bullet. Returns false — dropping the bullet — when the array
    /// is at capacity.
    pub fn spawn(&mut self, bullet: Bullet) -> bool {
        if self.len == MAX_BULLETS {
            return false;
        }
        self.slots[self.len] = bullet;
        self.len += 1;
        true
    }

    pub fn swap_remove(&mut self, i: usize) {
        debug_assert!(i < self.len);
        self.slots[i] = self.slots[self.len - 1];
        self.len -= 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.slots[..self.len].iter()
    }
}

impl Default for Bullets {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Bullets {
    type Output = Bullet;

    fn index(&self, i: usize) -> &Bullet {
        &self.slots[..self.len][i]
    }
}

impl std::ops::IndexMut<usize> for Bullets {
    fn index_mut(&mut self, i: usize) -> &mut Bullet {
        &mut self.slots[..self.len][i]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Input coalesced over one tick: accumulated horizontal intent (negative =
/// left) and a one-shot fire latch, cleared by the shell after the tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputFrame {
    pub move_dir: i32,
    pub fire: bool,
}

/// The entire simulation state. Cloneable so the pure tick function can
/// return a new copy without mutating the original; every former process
/// global — timers, counters, the RNG — is a field here.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub width: i32,
    pub height: i32,
    /// Fixed sequence of 55 slots, row-major over the 5×11 grid. Slot
    /// identity is stable for the lifetime of a wave and reused verbatim
    /// when a new wave spawns.
    pub aliens: [Alien; NUM_ALIENS],
    pub player: Player,
    pub bullets: Bullets,
    /// Left reference edge of the formation.
    pub swarm_position: i32,
    /// Current right bound of the sweep; widens as the living footprint
    /// shrinks from the outside in.
    pub swarm_max_position: i32,
    /// Signed step applied to the formation each sweep tick.
    pub swarm_move_dir: i32,
    /// Accumulating frame counter gating the sweep tick.
    pub sweep_timer: u32,
    /// Frame counter for the periodic vertical-drift pass (fixed cadence,
    /// independent of difficulty).
    pub drift_timer: u32,
    /// Frames between sweep ticks; halved by the difficulty scaler.
    pub alien_update_frequency: u32,
    /// Kills in the current wave; feeds difficulty scaling and wave
    /// exhaustion, reset on wave respawn.
    pub aliens_killed: u32,
    pub score: u32,
    pub credits: u32,
    pub alien_animations: [Animation; 3],
    pub alien_bullet_animation: Animation,
    pub status: GameStatus,
    pub rng: Xorshift32,
}
