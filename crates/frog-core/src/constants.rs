// Gameplay tuning constants shared by layout, proximity and round logic.
// All distances are in board space: 0-100 per axis, independent of the
// on-screen pixel size of the play area.

// Spawn placement
pub const DECOY_COUNT_MIN: u32 = 5;
pub const DECOY_COUNT_MAX: u32 = 7;
pub const MIN_SPACING: f32 = 20.0; // minimum pairwise distance between frogs
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 20;

// Frogs spawn inside this sub-rectangle of the board
pub const SPAWN_X_MIN: f32 = 10.0;
pub const SPAWN_X_MAX: f32 = 90.0;
pub const SPAWN_Y_MIN: f32 = 15.0;
pub const SPAWN_Y_MAX: f32 = 85.0;

// Centered region kept clear for in-round UI controls
pub const RESERVED_X_MIN: f32 = 35.0;
pub const RESERVED_X_MAX: f32 = 65.0;
pub const RESERVED_Y_MIN: f32 = 40.0;
pub const RESERVED_Y_MAX: f32 = 60.0;

// Proximity audio
pub const SOUND_THRESHOLD: f32 = 15.0; // beyond this distance everything is silent
pub const VOLUME_FLOOR: f32 = 0.2; // audible floor once inside the threshold
pub const VOLUME_CURVE_EXPONENT: f32 = 1.5; // sharper-than-linear falloff

// Click resolution
pub const HIT_RADIUS: f32 = 10.0;

// Round budget
pub const ROUND_SECONDS: u32 = 20;
pub const START_ATTEMPTS: u32 = 3;

// Reveal phase length, in countdown ticks
pub const REVEAL_SECONDS_WIN: u32 = 10;
pub const REVEAL_SECONDS_LOSE: u32 = 6;
