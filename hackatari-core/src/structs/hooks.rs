use crate::traits::RamAccess;

/// A RAM patch run by the host, either every frame or on every reset
pub type RamHook = Box<dyn FnMut(&mut dyn RamAccess)>;

/// Ordered step and reset hooks built from a list of modifications.
///
/// Hooks run in the order they were pushed. Hooks that touch the same cell
/// see each other's writes within one frame, so the order is kept as given.
#[derive(Default)]
pub struct Hooks {
    step: Vec<RamHook>,
    reset: Vec<RamHook>,
}

impl Hooks {
    pub fn new() -> Hooks {
        Hooks::default()
    }

    pub fn push_step(&mut self, hook: impl FnMut(&mut dyn RamAccess) + 'static) {
        self.step.push(Box::new(hook));
    }

    pub fn push_reset(&mut self, hook: impl FnMut(&mut dyn RamAccess) + 'static) {
        self.reset.push(Box::new(hook));
    }

    /// Invoked by the host once per emulated frame
    pub fn on_step(&mut self, ram: &mut dyn RamAccess) {
        for hook in self.step.iter_mut() {
            hook(&mut *ram);
        }
    }

    /// Invoked by the host whenever the game is reset
    pub fn on_reset(&mut self, ram: &mut dyn RamAccess) {
        for hook in self.reset.iter_mut() {
            hook(&mut *ram);
        }
    }

    pub fn step_len(&self) -> usize {
        self.step.len()
    }

    pub fn reset_len(&self) -> usize {
        self.reset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.step.is_empty() && self.reset.is_empty()
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hooks {{ step: {}, reset: {} }}", self.step_len(), self.reset_len())
    }
}
