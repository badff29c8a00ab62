pub mod fishing_derby;
pub mod mspacman;

use crate::error::HackError;
use crate::structs::Hooks;
use std::str::FromStr;
use strum_macros::IntoStaticStr;

/// Games that have modifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Game {
    MsPacman,
    FishingDerby,
}

impl Game {
    /// Turns modification names into hooks for this game
    pub fn configure<S: AsRef<str>>(self, names: &[S]) -> Result<Hooks, HackError> {
        let hooks = match self {
            Game::MsPacman => mspacman::configure(names)?,
            Game::FishingDerby => fishing_derby::configure(names)?,
        };
        log::debug!("{:?}: {:?}", self, hooks);
        Ok(hooks)
    }
}

/// Case, `_` and `-` are ignored, so `MsPacman`, `ms_pacman` and `mspacman` all match
impl FromStr for Game {
    type Err = HackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "mspacman" => Ok(Game::MsPacman),
            "fishingderby" => Ok(Game::FishingDerby),
            _ => Err(HackError::UnknownGame(s.to_string())),
        }
    }
}
