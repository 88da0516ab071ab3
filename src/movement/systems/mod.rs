//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod presentation;
pub(crate) mod probes;

pub(crate) use input::read_input;
pub(crate) use movement::step_player;
pub(crate) use presentation::{load_jump_sfx, play_jump_sfx, update_facing, update_presentation};

#[cfg(test)]
mod tests;
