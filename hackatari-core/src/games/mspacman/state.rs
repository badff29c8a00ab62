use super::Ghost;
use derive_more::Display;

/// Power-pill count that leaves the maze untouched
pub const DEFAULT_POWER_PILLS: u8 = 4;
/// Marker baseline after a reset, the value of the power-pill cell on a fresh level
pub const MARKER_BASELINE: u8 = 63;

/// Whether power pills currently work the usual way round
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ghosts stay edible
    Normal,
    /// A pill was eaten, ghosts hunt Ms. Pac-Man until the timer runs out
    Inverted,
}

/// Shared state of all Ms. Pac-Man hooks of one configuration
#[derive(Debug, Clone)]
pub struct ModificationState {
    caged: [bool; 4],
    power_pills: u8,
    pub(crate) last_marker: u8,
    pub(crate) mode: Mode,
}

impl ModificationState {
    pub fn new() -> ModificationState {
        ModificationState {
            caged: [false; 4],
            power_pills: DEFAULT_POWER_PILLS,
            last_marker: MARKER_BASELINE,
            mode: Mode::Normal,
        }
    }

    pub fn cage(&mut self, ghost: Ghost) {
        self.caged[ghost.index()] = true;
    }

    pub fn is_caged(&self, ghost: Ghost) -> bool {
        self.caged[ghost.index()]
    }

    /// Caller guarantees `count <= 4`, the registry checks it while parsing
    pub fn set_power_pills(&mut self, count: u8) {
        debug_assert!(count <= DEFAULT_POWER_PILLS);
        self.power_pills = count;
    }

    pub fn power_pills(&self) -> u8 {
        self.power_pills
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_marker(&self) -> u8 {
        self.last_marker
    }

    pub(crate) fn back_to_normal(&mut self) {
        self.mode = Mode::Normal;
        self.last_marker = MARKER_BASELINE;
    }
}

impl Default for ModificationState {
    fn default() -> Self {
        ModificationState::new()
    }
}
