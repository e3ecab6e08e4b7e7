use crate::constants::*;
use crate::layout::Frog;
use glam::Vec2;
use smallvec::SmallVec;

/// Target playback gain for one frog after a pointer-move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrogVolume {
    pub id: u32,
    pub volume: f32,
}

/// Per-move volume list; the board never holds more than 8 frogs.
pub type FrogVolumes = SmallVec<[FrogVolume; 8]>;

/// Gain curve for pointer-to-frog distance. Zero at and beyond the sound
/// threshold; inside it, a power curve with an audible floor so the nearest
/// frog never fades out entirely.
#[inline]
pub fn volume_for_distance(distance: f32) -> f32 {
    if distance >= SOUND_THRESHOLD {
        return 0.0;
    }
    (1.0 - distance / SOUND_THRESHOLD)
        .powf(VOLUME_CURVE_EXPONENT)
        .max(VOLUME_FLOOR)
}

/// Index and distance of the frog nearest to the pointer.
pub fn nearest_frog(pointer: Vec2, frogs: &[Frog]) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, f) in frogs.iter().enumerate() {
        let d = f.position.distance(pointer);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

/// Compute one volume entry per frog for the current pointer position: the
/// nearest frog gets the distance-derived gain, every other frog gets 0.
pub fn proximity_volumes(pointer: Vec2, frogs: &[Frog], out: &mut FrogVolumes) {
    out.clear();
    let nearest = nearest_frog(pointer, frogs);
    for (i, f) in frogs.iter().enumerate() {
        let volume = match nearest {
            Some((n, d)) if n == i => volume_for_distance(d),
            _ => 0.0,
        };
        out.push(FrogVolume { id: f.id, volume });
    }
}
