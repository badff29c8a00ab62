//! Ms. Pac-Man modifications.
//!
//! | name            | hook  | effect                                              |
//! |-----------------|-------|-----------------------------------------------------|
//! | `caged_ghosts`  | step  | all four ghosts stay in the center box              |
//! | `disable_<g>`   | step  | one ghost (`orange`, `cyan`, `pink`, `red`) is caged |
//! | `power<N>`      | reset | only `N` (0..=4) power pills are left in the maze   |
//! | `edible_ghosts` | step  | ghosts are edible for the whole game                |
//! | `inverted`      | both  | ghosts are edible until a power pill is eaten       |
//!
//! For `power<N>` only the last character is read as `N`, so `power12`
//! means 2 pills.

mod rules;
mod state;

pub use rules::*;
pub use state::*;

use crate::error::HackError;
use crate::structs::Hooks;
use derive_more::Display;
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use strum_macros::{EnumString, IntoStaticStr};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Ghost {
    #[strum(serialize = "orange")]
    Orange,
    #[strum(serialize = "cyan")]
    Cyan,
    #[strum(serialize = "pink")]
    Pink,
    #[strum(serialize = "red")]
    Red,
}

impl Ghost {
    pub const ALL: [Ghost; 4] = [Ghost::Orange, Ghost::Cyan, Ghost::Pink, Ghost::Red];

    pub(crate) fn index(self) -> usize {
        match self {
            Ghost::Orange => 0,
            Ghost::Cyan => 1,
            Ghost::Pink => 2,
            Ghost::Red => 3,
        }
    }

    pub fn state_cell(self) -> usize {
        1 + self.index()
    }

    pub fn x_cell(self) -> usize {
        6 + self.index()
    }

    pub fn y_cell(self) -> usize {
        12 + self.index()
    }

    /// Where the ghost reappears after being made edible
    pub fn spawn(self) -> (u8, u8) {
        match self {
            Ghost::Orange => (120, 50),
            Ghost::Cyan => (100, 50),
            Ghost::Pink => (80, 50),
            Ghost::Red => (60, 50),
        }
    }

    /// Parking spot inside the center box
    pub fn home(self) -> (u8, u8) {
        match self {
            Ghost::Orange => (93, 80),
            Ghost::Cyan => (83, 80),
            Ghost::Pink => (93, 67),
            Ghost::Red => (83, 67),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modification {
    CagedGhosts,
    DisableGhost(Ghost),
    PowerPills(u8),
    EdibleGhosts,
    Inverted,
}

impl Modification {
    /// `Ok(None)` for names this game doesn't know
    pub fn from_name(name: &str) -> Result<Option<Modification>, HackError> {
        let m = match name {
            "caged_ghosts" => Modification::CagedGhosts,
            "edible_ghosts" => Modification::EdibleGhosts,
            "inverted" => Modification::Inverted,
            _ => {
                if let Some(count) = name.strip_prefix("power") {
                    return parse_power_pills(name, count).map(Some);
                }
                match name.strip_prefix("disable_").map(Ghost::from_str) {
                    Some(Ok(ghost)) => Modification::DisableGhost(ghost),
                    _ => return Ok(None),
                }
            }
        };
        Ok(Some(m))
    }
}

fn parse_power_pills(name: &str, suffix: &str) -> Result<Modification, HackError> {
    let digit = suffix.chars().last().and_then(|c| c.to_digit(10));
    match digit {
        Some(n) if n <= DEFAULT_POWER_PILLS as u32 => Ok(Modification::PowerPills(n as u8)),
        _ => Err(HackError::InvalidParameter {
            modification: name.to_string(),
            value: suffix.to_string(),
        }),
    }
}

/// Builds the hooks for `names`, in the order given.
///
/// Every name is parsed before anything is registered, so a bad `powerN`
/// leaves no half-built configuration behind. Every cage, pill and edible
/// name pushes its own hook at its own position, and all of them read the
/// shared state, so every pill hook writes the last `powerN` count. `inverted`
/// is registered once since its step hook advances the state machine.
pub fn configure<S: AsRef<str>>(names: &[S]) -> Result<Hooks, HackError> {
    let mut mods = Vec::with_capacity(names.len());
    for name in names {
        let name: &str = name.as_ref();
        match Modification::from_name(name)? {
            Some(m) => mods.push(m),
            None => log::debug!("ms. pac-man: ignoring unknown modification '{}'", name),
        }
    }

    let state = Rc::new(RefCell::new(ModificationState::new()));
    let mut hooks = Hooks::new();
    let mut inverted = false;

    for m in mods {
        log::debug!("ms. pac-man: enabling {:?}", m);
        match m {
            Modification::CagedGhosts | Modification::DisableGhost(_) => {
                match m {
                    Modification::DisableGhost(ghost) => state.borrow_mut().cage(ghost),
                    _ => Ghost::ALL.iter().for_each(|&g| state.borrow_mut().cage(g)),
                }
                let state = Rc::clone(&state);
                hooks.push_step(move |ram| apply_static_positions(ram, &state.borrow()));
            }
            Modification::PowerPills(count) => {
                state.borrow_mut().set_power_pills(count);
                let state = Rc::clone(&state);
                hooks.push_reset(move |ram| {
                    let count = state.borrow().power_pills();
                    apply_token_count(ram, count)
                });
            }
            Modification::EdibleGhosts => {
                hooks.push_step(apply_always_edible);
            }
            Modification::Inverted => {
                if !inverted {
                    inverted = true;
                    let step_state = Rc::clone(&state);
                    hooks.push_step(move |ram| apply_inverted(ram, &mut step_state.borrow_mut()));
                    let reset_state = Rc::clone(&state);
                    hooks.push_reset(move |ram| reset_inverted(ram, &mut reset_state.borrow_mut()));
                }
            }
        }
    }
    Ok(hooks)
}
