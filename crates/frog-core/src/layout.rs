use crate::config::RoundConfig;
use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// One placed, clickable, audible frog on the board.
#[derive(Clone, Debug)]
pub struct Frog {
    pub id: u32,
    pub position: Vec2, // board space, 0-100 per axis
    pub kind: String,
    pub sound: String,
    pub is_target: bool,
}

/// Axis-aligned board-space rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Placement constraints, parameterized so tests can tighten or relax them.
#[derive(Clone, Copy, Debug)]
pub struct LayoutParams {
    pub spawn: Rect,
    pub reserved: Rect,
    pub min_spacing: f32,
    pub max_attempts: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            spawn: Rect::new(
                Vec2::new(SPAWN_X_MIN, SPAWN_Y_MIN),
                Vec2::new(SPAWN_X_MAX, SPAWN_Y_MAX),
            ),
            reserved: Rect::new(
                Vec2::new(RESERVED_X_MIN, RESERVED_Y_MIN),
                Vec2::new(RESERVED_X_MAX, RESERVED_Y_MAX),
            ),
            min_spacing: MIN_SPACING,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Scatter 5-7 decoys plus exactly one target across the board.
///
/// Every position goes through the same rejection sampler; the target is
/// placed last. Always returns `count + 1` frogs regardless of how cramped
/// the board gets.
pub fn place_frogs<R: Rng>(rng: &mut R, config: &RoundConfig, params: &LayoutParams) -> Vec<Frog> {
    let count = rng.gen_range(DECOY_COUNT_MIN..=DECOY_COUNT_MAX);
    let mut frogs = Vec::with_capacity(count as usize + 1);

    for id in 0..count {
        let kind = match config.decoys.choose(rng) {
            Some(k) => k,
            None => break,
        };
        let position = sample_position(rng, params, &frogs);
        frogs.push(Frog {
            id,
            position,
            kind: kind.name.clone(),
            sound: kind.sound.clone(),
            is_target: false,
        });
    }

    let position = sample_position(rng, params, &frogs);
    frogs.push(Frog {
        id: frogs.len() as u32,
        position,
        kind: config.target.name.clone(),
        sound: config.target.sound.clone(),
        is_target: true,
    });
    frogs
}

fn sample_position<R: Rng>(rng: &mut R, params: &LayoutParams, placed: &[Frog]) -> Vec2 {
    for _ in 0..params.max_attempts {
        let pos = random_point(rng, &params.spawn);
        if !params.reserved.contains(pos) && !too_close(pos, placed, params.min_spacing) {
            return pos;
        }
    }
    // Retry budget exhausted: accept one last sample so placement always
    // terminates, even if it lands closer than min_spacing.
    log::warn!("[layout] placement retries exhausted; accepting a cramped spot");
    random_point(rng, &params.spawn)
}

#[inline]
fn random_point<R: Rng>(rng: &mut R, spawn: &Rect) -> Vec2 {
    Vec2::new(
        rng.gen_range(spawn.min.x..spawn.max.x),
        rng.gen_range(spawn.min.y..spawn.max.y),
    )
}

#[inline]
fn too_close(pos: Vec2, placed: &[Frog], min_spacing: f32) -> bool {
    placed.iter().any(|f| f.position.distance(pos) < min_spacing)
}
