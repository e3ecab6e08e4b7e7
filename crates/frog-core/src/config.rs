use fnv::FnvHashSet;
use thiserror::Error;

/// One playable species: a display name and the path of its call recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrogKind {
    pub name: String,
    pub sound: String,
}

impl FrogKind {
    pub fn new(name: &str, sound: &str) -> Self {
        Self {
            name: name.to_owned(),
            sound: sound.to_owned(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("roster has no kinds besides the target `{0}`")]
    EmptyRoster(String),
}

/// Per-round configuration: the kind the player must find plus the roster
/// of decoy kinds that pad out the board.
#[derive(Clone, Debug)]
pub struct RoundConfig {
    pub target: FrogKind,
    pub decoys: Vec<FrogKind>,
}

impl RoundConfig {
    /// Build a config from a full roster; the target's own kind is filtered
    /// out so decoys never duplicate the answer.
    pub fn new(target: FrogKind, roster: Vec<FrogKind>) -> Result<Self, ConfigError> {
        let decoys: Vec<FrogKind> = roster
            .into_iter()
            .filter(|k| k.name != target.name)
            .collect();
        if decoys.is_empty() {
            return Err(ConfigError::EmptyRoster(target.name));
        }
        Ok(Self { target, decoys })
    }

    /// Distinct sound paths for preloading, in first-seen order. Kinds may
    /// share a recording, so the list can be shorter than the roster.
    pub fn sound_paths(&self) -> Vec<String> {
        let mut seen: FnvHashSet<&str> = FnvHashSet::default();
        let mut paths = Vec::new();
        for kind in std::iter::once(&self.target).chain(self.decoys.iter()) {
            if seen.insert(kind.sound.as_str()) {
                paths.push(kind.sound.clone());
            }
        }
        paths
    }
}

// Default species roster; the first entry is the default target.
pub const DEFAULT_ROSTER: [(&str, &str); 4] = [
    ("black-spectacled toad", "sounds/black-spectacled-toad.mp3"),
    ("rice paddy frog", "sounds/rice-paddy-frog.mp3"),
    ("Taipei tree frog", "sounds/taipei-tree-frog.mp3"),
    ("Mientien tree frog", "sounds/mientien-tree-frog.mp3"),
];

pub fn default_config() -> RoundConfig {
    let (name, sound) = DEFAULT_ROSTER[0];
    RoundConfig {
        target: FrogKind::new(name, sound),
        decoys: DEFAULT_ROSTER[1..]
            .iter()
            .map(|(n, s)| FrogKind::new(n, s))
            .collect(),
    }
}
