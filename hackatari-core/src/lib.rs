mod error;
pub mod games;
mod structs;
mod traits;

pub use error::HackError;
pub use games::Game;
pub use structs::{AtariRam, Hooks, RamHook, RAM_SIZE};
pub use traits::RamAccess;
