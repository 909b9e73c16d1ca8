//! Sprite assets and animation clocks.
//!
//! All art is 1-bit bitmaps stored as static tables, row-major with the top
//! row first; a nonzero byte is an opaque texel. The `SpriteStore` owns one
//! `Sprite` entry per asset and hands out stable `SpriteId` handles, so
//! nothing outside this module ever touches the raw tables or does pointer
//! arithmetic over the font sheet.

/// A 1-bit bitmap with its dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub width: i32,
    pub height: i32,
    pub data: &'static [u8],
}

/// Stable handle into the `SpriteStore` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteId(usize);

// ── Swarm art — two animation frames per tier ─────────────────────────────────

static SQUID_FRAME_A: [u8; 64] = [
    0, 0, 0, 1, 1, 0, 0, 0, // ...@@...
    0, 0, 1, 1, 1, 1, 0, 0, // ..@@@@..
    0, 1, 1, 1, 1, 1, 1, 0, // .@@@@@@.
    1, 1, 0, 1, 1, 0, 1, 1, // @@.@@.@@
    1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@
    0, 1, 0, 1, 1, 0, 1, 0, // .@.@@.@.
    1, 0, 0, 0, 0, 0, 0, 1, // @......@
    0, 1, 0, 0, 0, 0, 1, 0, // .@....@.
];

static SQUID_FRAME_B: [u8; 64] = [
    0, 0, 0, 1, 1, 0, 0, 0, // ...@@...
    0, 0, 1, 1, 1, 1, 0, 0, // ..@@@@..
    0, 1, 1, 1, 1, 1, 1, 0, // .@@@@@@.
    1, 1, 0, 1, 1, 0, 1, 1, // @@.@@.@@
    1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@
    0, 0, 1, 0, 0, 1, 0, 0, // ..@..@..
    0, 1, 0, 1, 1, 0, 1, 0, // .@.@@.@.
    1, 0, 1, 0, 0, 1, 0, 1, // @.@..@.@
];

static CRAB_FRAME_A: [u8; 88] = [
    0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, // ..@.....@..
    0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, // ...@...@...
    0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, // ..@@@@@@@..
    0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, // .@@.@@@.@@.
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@
    1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, // @.@@@@@@@.@
    1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, // @.@.....@.@
    0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, // ...@@.@@...
];

static CRAB_FRAME_B: [u8; 88] = [
    0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, // ..@.....@..
    1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, // @..@...@..@
    1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, // @.@@@@@@@.@
    1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, // @@@.@@@.@@@
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, // .@@@@@@@@@.
    0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, // ..@.....@..
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, // .@.......@.
];

static OCTOPUS_FRAME_A: [u8; 96] = [
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, // ....@@@@....
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, // .@@@@@@@@@@.
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@@
    1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, // @@@..@@..@@@
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@@
    0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, // ...@@..@@...
    0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0, // ..@@.@@.@@..
    1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, // @@........@@
];

static OCTOPUS_FRAME_B: [u8; 96] = [
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, // ....@@@@....
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, // .@@@@@@@@@@.
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@@
    1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, // @@@..@@..@@@
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@@
    0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, // ..@@@..@@@..
    0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, // .@@..@@..@@.
    0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, // ..@@....@@..
];

static DEATH_FLASH: [u8; 91] = [
    0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, // .@..@...@..@.
    0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, // ..@..@.@..@..
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, // ...@.....@...
    1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, // @@.........@@
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, // ...@.....@...
    0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, // ..@..@.@..@..
    0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, // .@..@...@..@.
];

// ── Player & projectiles ──────────────────────────────────────────────────────

static PLAYER_SHIP: [u8; 77] = [
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, // .....@.....
    0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, // ....@@@....
    0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, // ....@@@....
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, // .@@@@@@@@@.
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // @@@@@@@@@@@
];

static PLAYER_BULLET: [u8; 3] = [
    1, // @
    1, // @
    1, // @
];

static ALIEN_BULLET_A: [u8; 21] = [
    0, 1, 0, // .@.
    1, 0, 0, // @..
    0, 1, 0, // .@.
    0, 0, 1, // ..@
    0, 1, 0, // .@.
    1, 0, 0, // @..
    0, 1, 0, // .@.
];

static ALIEN_BULLET_B: [u8; 21] = [
    0, 1, 0, // .@.
    0, 0, 1, // ..@
    0, 1, 0, // .@.
    1, 0, 0, // @..
    0, 1, 0, // .@.
    0, 0, 1, // ..@
    0, 1, 0, // .@.
];

// ── Font sheet — 5×7 glyphs covering ASCII 32..=96 ────────────────────────────

pub const GLYPH_COUNT: usize = 65;
const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
const GLYPH_STRIDE: usize = (GLYPH_WIDTH * GLYPH_HEIGHT) as usize;
/// First character on the sheet (ASCII space).
const GLYPH_BASE: u8 = 32;

#[rustfmt::skip]
static FONT_SHEET: [u8; GLYPH_COUNT * GLYPH_STRIDE] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // ' '
    0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, // '!'
    0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // '"'
    0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, // '#'
    0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, // '$'
    1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, // '%'
    0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, // '&'
    0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // '''
    0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, // '('
    1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, // ')'
    0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, // '*'
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, // '+'
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, // ','
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // '-'
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, // '.'
    0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, // '/'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // '0'
    0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, // '1'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, // '2'
    1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // '3'
    0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, // '4'
    1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // '5'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // '6'
    1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, // '7'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // '8'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // '9'
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, // ':'
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, // ';'
    0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, // '<'
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // '='
    1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, // '>'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, // '?'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // '@'
    0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, // 'A'
    1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, // 'B'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // 'C'
    1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, // 'D'
    1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, // 'E'
    1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, // 'F'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // 'G'
    1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, // 'H'
    0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, // 'I'
    0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // 'J'
    1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, // 'K'
    1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, // 'L'
    1, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, // 'M'
    1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, // 'N'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // 'O'
    1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, // 'P'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 1, // 'Q'
    1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, // 'R'
    0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, // 'S'
    1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, // 'T'
    1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, // 'U'
    1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, // 'V'
    1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, // 'W'
    1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, // 'X'
    1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, // 'Y'
    1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, // 'Z'
    0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, // '['
    0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, // '\\'
    1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, // ']'
    0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // '^'
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, // '_'
    0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, // '`'
];

// ── Asset table ───────────────────────────────────────────────────────────────

/// Loader context owning every sprite. Built once at startup; the simulation
/// and renderer refer to entries by `SpriteId`.
pub struct SpriteStore {
    sprites: Vec<Sprite>,
    pub player: SpriteId,
    pub player_bullet: SpriteId,
    pub alien_death: SpriteId,
    /// Two frames of the falling swarm shot.
    pub alien_bullet: [SpriteId; 2],
    /// Two animation frames per tier, indexed by `Tier::index()`.
    pub alien_frames: [[SpriteId; 2]; 3],
    glyphs: [SpriteId; GLYPH_COUNT],
}

impl SpriteStore {
    pub fn new() -> Self {
        let mut sprites = Vec::with_capacity(11 + GLYPH_COUNT);
        let mut add = |width: i32, height: i32, data: &'static [u8]| {
            debug_assert_eq!((width * height) as usize, data.len());
            sprites.push(Sprite { width, height, data });
            SpriteId(sprites.len() - 1)
        };

        let alien_frames = [
            [add(8, 8, &SQUID_FRAME_A), add(8, 8, &SQUID_FRAME_B)],
            [add(11, 8, &CRAB_FRAME_A), add(11, 8, &CRAB_FRAME_B)],
            [add(12, 8, &OCTOPUS_FRAME_A), add(12, 8, &OCTOPUS_FRAME_B)],
        ];
        let alien_death = add(13, 7, &DEATH_FLASH);
        let player = add(11, 7, &PLAYER_SHIP);
        let player_bullet = add(1, 3, &PLAYER_BULLET);
        let alien_bullet = [add(3, 7, &ALIEN_BULLET_A), add(3, 7, &ALIEN_BULLET_B)];

        let first_glyph = sprites.len();
        for g in 0..GLYPH_COUNT {
            sprites.push(Sprite {
                width: GLYPH_WIDTH,
                height: GLYPH_HEIGHT,
                data: &FONT_SHEET[g * GLYPH_STRIDE..(g + 1) * GLYPH_STRIDE],
            });
        }
        let glyphs = std::array::from_fn(|g| SpriteId(first_glyph + g));

        Self {
            sprites,
            player,
            player_bullet,
            alien_death,
            alien_bullet,
            alien_frames,
            glyphs,
        }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.0]
    }

    /// Font glyph for `c`, or `None` for characters off the sheet.
    pub fn glyph(&self, c: char) -> Option<SpriteId> {
        let index = (c as u32).checked_sub(u32::from(GLYPH_BASE))? as usize;
        self.glyphs.get(index).copied()
    }

    /// Glyph for a decimal digit 0..=9.
    pub fn digit(&self, d: u32) -> SpriteId {
        debug_assert!(d < 10);
        self.glyphs[(b'0' - GLYPH_BASE) as usize + d as usize]
    }
}

impl Default for SpriteStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── Animation clocks ──────────────────────────────────────────────────────────

/// Frame clock for a sprite animation. Advanced once per simulation tick and
/// read by the renderer (and by collision resolution, which tests against
/// the visible frame).
///
/// Invariant: `time < num_frames * frame_duration`. `advance` maintains it;
/// code that rewrites `frame_duration` must reset `time`.
#[derive(Clone, Debug)]
pub struct Animation {
    pub frames: [SpriteId; 2],
    pub num_frames: u32,
    pub frame_duration: u32,
    pub time: u32,
    pub looping: bool,
}

impl Animation {
    pub fn new(frames: [SpriteId; 2], frame_duration: u32) -> Self {
        Self {
            frames,
            num_frames: 2,
            frame_duration,
            time: 0,
            looping: true,
        }
    }

    /// Sprite visible on the current tick.
    pub fn current_frame(&self) -> SpriteId {
        self.frames[(self.time / self.frame_duration) as usize]
    }

    /// One tick of the clock; wraps when looping, else holds the last frame.
    pub fn advance(&mut self) {
        self.time += 1;
        let span = self.num_frames * self.frame_duration;
        if self.time >= span {
            self.time = if self.looping { 0 } else { span - 1 };
        }
    }
}
