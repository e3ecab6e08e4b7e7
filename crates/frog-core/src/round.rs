use crate::constants::*;
use crate::layout::Frog;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Revealing,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unset,
    Win,
    Lose,
}

/// What a click did to the round.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The round is no longer active; the click was discarded.
    Ignored,
    /// Nothing within the hit radius. Costs no attempt.
    Miss,
    /// A decoy was clicked; one attempt spent.
    WrongGuess { kind: String, attempts_left: u32 },
    /// The target was clicked; the round is won.
    TargetFound,
}

/// One playthrough: countdown, attempt budget and the
/// Active -> Revealing -> Ended progression. Transitions are one-way.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub time_remaining: u32,
    pub attempts_remaining: u32,
    pub phase: Phase,
    pub outcome: Outcome,
    reveal_remaining: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            time_remaining: ROUND_SECONDS,
            attempts_remaining: START_ATTEMPTS,
            phase: Phase::Active,
            outcome: Outcome::Unset,
            reveal_remaining: 0,
        }
    }

    /// Advance the clock by one second. Returns the newly-entered phase when
    /// this tick fired a transition.
    pub fn tick_second(&mut self) -> Option<Phase> {
        match self.phase {
            Phase::Active => {
                self.time_remaining = self.time_remaining.saturating_sub(1);
                if self.time_remaining == 0 {
                    self.begin_reveal(Outcome::Lose);
                    return Some(Phase::Revealing);
                }
                None
            }
            Phase::Revealing => {
                self.reveal_remaining = self.reveal_remaining.saturating_sub(1);
                if self.reveal_remaining == 0 {
                    self.phase = Phase::Ended;
                    return Some(Phase::Ended);
                }
                None
            }
            Phase::Ended => None,
        }
    }

    /// Resolve a click at a board position against the frog roster.
    ///
    /// Overlapping hit circles resolve to the frog nearest the click point.
    /// Running out of attempts ends the round within this same call.
    pub fn resolve_click(&mut self, click: Vec2, frogs: &[Frog]) -> ClickOutcome {
        if self.phase != Phase::Active {
            return ClickOutcome::Ignored;
        }
        let hit = frogs
            .iter()
            .map(|f| (f, f.position.distance(click)))
            .filter(|(_, d)| *d < HIT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(f, _)| f);

        match hit {
            None => ClickOutcome::Miss,
            Some(f) if f.is_target => {
                self.begin_reveal(Outcome::Win);
                ClickOutcome::TargetFound
            }
            Some(f) => {
                self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
                if self.attempts_remaining == 0 {
                    self.begin_reveal(Outcome::Lose);
                }
                ClickOutcome::WrongGuess {
                    kind: f.kind.clone(),
                    attempts_left: self.attempts_remaining,
                }
            }
        }
    }

    fn begin_reveal(&mut self, outcome: Outcome) {
        debug_assert_eq!(self.phase, Phase::Active);
        self.phase = Phase::Revealing;
        self.outcome = outcome;
        self.reveal_remaining = match outcome {
            Outcome::Win => REVEAL_SECONDS_WIN,
            _ => REVEAL_SECONDS_LOSE,
        };
    }
}
