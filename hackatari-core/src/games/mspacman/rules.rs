//! RAM patches for Ms. Pac-Man.
//!
//! Cells 1..=4 hold the ghost states, 6..=9 and 12..=15 their x and y
//! positions, 116 the edible-ghost timer and 117 the power-pill marker.
//! Cells 62 and 95 decide whether a pill slot shows a power pill or a dot.

use super::state::{Mode, ModificationState};
use super::Ghost;
use crate::traits::RamAccess;

pub const TIMER_CELL: usize = 116;
pub const POWER_PILL_CELL: usize = 117;
pub const PILL_SLOT_CELLS: [usize; 2] = [62, 95];

/// Ghost state: edible
pub const EDIBLE: u8 = 130;
/// Ghost state: eaten, eyes on the way home
pub const EATEN: u8 = 112;
/// Ghost state: hunting
pub const HUNTING: u8 = 0;

pub const TIMER_MAX: u8 = 255;
/// Timer values below this are topped up
pub const TIMER_REFILL_BELOW: u8 = 250;
/// How long ghosts hunt after a pill in inverted mode
pub const INVERTED_TIMER: u8 = 62;
/// Timer after ghosts turn edible again in inverted mode
pub const RECOVERED_TIMER: u8 = 190;
/// The marker cell jitters during play, changes up to this are ignored
pub const MARKER_TOLERANCE: u8 = 3;

/// `(cell 62, cell 95, cell 117)` for 0..=3 remaining power pills
const POWER_PILL_LAYOUTS: [[u8; 3]; 4] = [[80, 80, 0], [64, 80, 8], [0, 80, 40], [0, 64, 46]];

/// Turns `ghost` edible and moves it to its spawn point.
///
/// Flipping the state alone makes the ghost glitch, so it's always
/// relocated as well.
pub fn make_edible(ram: &mut dyn RamAccess, ghost: Ghost) {
    let (x, y) = ghost.spawn();
    ram.set_ram(ghost.state_cell(), EDIBLE);
    ram.set_ram(ghost.x_cell(), x);
    ram.set_ram(ghost.y_cell(), y);
}

/// All ghosts edible with a full timer, used at level start
pub fn set_start_condition(ram: &mut dyn RamAccess) {
    for ghost in Ghost::ALL {
        make_edible(ram, ghost);
    }
    ram.set_ram(TIMER_CELL, TIMER_MAX);
}

/// Parks every caged ghost inside the center box
pub fn apply_static_positions(ram: &mut dyn RamAccess, state: &ModificationState) {
    for ghost in Ghost::ALL {
        if state.is_caged(ghost) {
            let (x, y) = ghost.home();
            ram.set_ram(ghost.x_cell(), x);
            ram.set_ram(ghost.y_cell(), y);
        }
    }
}

/// Replaces power pills with dots until `count` are left, 4 changes nothing
pub fn apply_token_count(ram: &mut dyn RamAccess, count: u8) {
    if let Some(layout) = POWER_PILL_LAYOUTS.get(count as usize) {
        ram.set_ram(PILL_SLOT_CELLS[0], layout[0]);
        ram.set_ram(PILL_SLOT_CELLS[1], layout[1]);
        ram.set_ram(POWER_PILL_CELL, layout[2]);
    }
}

fn eaten_ghosts(ram: &dyn RamAccess) -> [bool; 4] {
    let mut eaten = [false; 4];
    for ghost in Ghost::ALL {
        eaten[ghost.index()] = ram.ram(ghost.state_cell()) == EATEN;
    }
    eaten
}

fn respawn_eaten(ram: &mut dyn RamAccess, eaten: [bool; 4]) {
    for ghost in Ghost::ALL {
        if eaten[ghost.index()] {
            make_edible(ram, ghost);
        }
    }
}

fn set_all_ghosts(ram: &mut dyn RamAccess, value: u8) {
    for ghost in Ghost::ALL {
        ram.set_ram(ghost.state_cell(), value);
    }
}

/// Keeps the edible timer from running out and brings eaten ghosts back
pub fn apply_always_edible(ram: &mut dyn RamAccess) {
    let timer = ram.ram(TIMER_CELL);
    let eaten = eaten_ghosts(ram);

    if timer < TIMER_REFILL_BELOW {
        ram.set_ram(TIMER_CELL, TIMER_MAX);
    }
    respawn_eaten(ram, eaten);
}

/// One frame of inverted mode: ghosts are edible until a power pill is
/// eaten, then hunt for a while.
///
/// Timer, marker and ghost states are read once up front, every decision
/// below uses those values even if an earlier branch rewrote the cell.
pub fn apply_inverted(ram: &mut dyn RamAccess, state: &mut ModificationState) {
    let marker = ram.ram(POWER_PILL_CELL);
    let timer = ram.ram(TIMER_CELL);
    let eaten = eaten_ghosts(ram);

    if timer < TIMER_REFILL_BELOW && state.mode == Mode::Normal {
        ram.set_ram(TIMER_CELL, TIMER_MAX);
    }

    if marker.abs_diff(state.last_marker) > MARKER_TOLERANCE {
        log::trace!(
            "power pill eaten (marker {} -> {}), ghosts hunting",
            state.last_marker,
            marker
        );
        state.mode = Mode::Inverted;
        set_all_ghosts(ram, HUNTING);
        ram.set_ram(TIMER_CELL, INVERTED_TIMER);
        state.last_marker = marker;
    }

    if timer == 0 {
        if state.mode == Mode::Inverted {
            log::trace!("power pill ran out, ghosts edible again");
        }
        state.mode = Mode::Normal;
        set_all_ghosts(ram, EDIBLE);
        ram.set_ram(TIMER_CELL, RECOVERED_TIMER);
    }

    if state.mode == Mode::Normal {
        respawn_eaten(ram, eaten);
    }
}

/// Reset hook of inverted mode
pub fn reset_inverted(ram: &mut dyn RamAccess, state: &mut ModificationState) {
    set_start_condition(ram);
    state.back_to_normal();
}
