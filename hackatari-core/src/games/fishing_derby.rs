//! Fishing Derby shark modes, selected with `shark<N>`:
//!
//! - 0 default, the shark is left alone
//! - 1 shark pinned at x = 105, below the opponent
//! - 2 shark pinned at x = 25, below the player
//! - 3 shark teleports between the two sides when it reaches x = 30 or 100
//! - 4 shark races right, wrapping back to x = 1 past x = 120

use crate::error::HackError;
use crate::structs::Hooks;
use crate::traits::RamAccess;
use derive_more::Display;

pub const SHARK_X_CELL: usize = 75;

const OPPONENT_SIDE_X: u8 = 105;
const PLAYER_SIDE_X: u8 = 25;
const SPEED_STEP: u8 = 5;
const SPEED_WRAP_AT: u8 = 120;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum SharkMode {
    #[default]
    Default,
    FixedOpponentSide,
    FixedPlayerSide,
    Teleport,
    Speed,
}

impl SharkMode {
    pub fn from_index(index: i64) -> Option<SharkMode> {
        match index {
            0 => Some(SharkMode::Default),
            1 => Some(SharkMode::FixedOpponentSide),
            2 => Some(SharkMode::FixedPlayerSide),
            3 => Some(SharkMode::Teleport),
            4 => Some(SharkMode::Speed),
            _ => None,
        }
    }

    /// Step hook for this mode
    pub fn apply(self, ram: &mut dyn RamAccess) {
        let x = ram.ram(SHARK_X_CELL);
        match self {
            SharkMode::Default => {}
            SharkMode::FixedOpponentSide => ram.set_ram(SHARK_X_CELL, OPPONENT_SIDE_X),
            SharkMode::FixedPlayerSide => ram.set_ram(SHARK_X_CELL, PLAYER_SIDE_X),
            SharkMode::Teleport => match x {
                100 => ram.set_ram(SHARK_X_CELL, PLAYER_SIDE_X),
                30 => ram.set_ram(SHARK_X_CELL, OPPONENT_SIDE_X),
                _ => {}
            },
            SharkMode::Speed => {
                if x < SPEED_WRAP_AT {
                    ram.set_ram(SHARK_X_CELL, x + SPEED_STEP);
                } else {
                    ram.set_ram(SHARK_X_CELL, 1);
                }
            }
        }
    }
}

/// Parses `shark<N>`; a bad `N` falls back to the default mode with a warning
fn parse_shark_mode(name: &str) -> Option<SharkMode> {
    let index = name.strip_prefix("shark")?;
    match index.parse::<i64>().ok().and_then(SharkMode::from_index) {
        Some(mode) => Some(mode),
        None => {
            log::warn!(
                "fishing derby: illegal shark mode '{}', must be 0..=4; continuing with the default",
                index
            );
            Some(SharkMode::Default)
        }
    }
}

/// Builds the hooks for `names`, the last `shark<N>` wins
pub fn configure<S: AsRef<str>>(names: &[S]) -> Result<Hooks, HackError> {
    let mut mode = SharkMode::Default;
    for name in names {
        let name: &str = name.as_ref();
        match parse_shark_mode(name) {
            Some(m) => mode = m,
            None => log::debug!("fishing derby: ignoring unknown modification '{}'", name),
        }
    }

    let mut hooks = Hooks::new();
    if mode != SharkMode::Default {
        log::debug!("fishing derby: shark mode {}", mode);
        hooks.push_step(move |ram| mode.apply(ram));
    }
    Ok(hooks)
}
