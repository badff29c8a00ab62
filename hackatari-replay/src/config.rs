use anyhow::Context;
use hackatari_core::Game;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::{io::Read, ops::Deref};

#[derive(Deserialize)]
pub(crate) struct Config {
    pub(crate) game: GameName,
    #[serde(default)]
    pub(crate) modifications: Vec<String>,
    #[serde(default)]
    pub output: Output,
}

pub(crate) fn load_config(path: &Path) -> anyhow::Result<Config> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open config {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("cannot parse config {}", path.display()))?;
    Ok(config)
}

#[derive(Debug, Copy, Clone)]
pub struct GameName(Game);

impl GameName {
    pub fn new(game: Game) -> GameName {
        GameName(game)
    }
}

impl<'de> Deserialize<'de> for GameName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        Game::from_str(&s)
            .map(GameName)
            .map_err(|e| D::Error::custom(format!("err in '{}', {}", &s, e)))
    }
}

impl Deref for GameName {
    type Target = Game;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Deserialize, Copy, Clone, Default)]
pub(crate) struct Output {
    /// Print only the cells the hooks changed instead of the whole RAM
    #[serde(default)]
    pub only_changed: bool,
}
