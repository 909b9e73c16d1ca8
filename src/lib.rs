//! Fixed-formation arcade shooter: a 5×11 alien swarm sweeps across a
//! 224×256 pixel playfield, trading shots with the player ship. The
//! simulation core is pure and deterministic; rendering and input live at
//! the edges.

pub mod buffer;
pub mod compute;
pub mod display;
pub mod entities;
pub mod rng;
pub mod sprites;
