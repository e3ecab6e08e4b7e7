// Timing constants for the game screen, in milliseconds.

pub const TICK_MS: i32 = 1000; // countdown resolution
pub const MESSAGE_CLEAR_MS: i32 = 2000; // wrong-guess advisory lifetime
pub const REVEAL_MARKERS_DELAY_MS: i32 = 1500; // verdict first, then the map
