mod atari_ram;
pub use atari_ram::*;

mod hooks;
pub use hooks::*;
