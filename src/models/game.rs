//! Game records

use std::fmt;
use std::hash::{Hash, Hasher};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Platform on which a game is played
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ps5,
    Ps4,
    Ps3,
    Switch,
    Pc,
}

impl Platform {
    /// Whether the platform belongs to the PlayStation family
    #[must_use]
    pub const fn is_playstation(self) -> bool {
        matches!(self, Self::Ps5 | Self::Ps4 | Self::Ps3)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Ps5 => "ps5",
            Self::Ps4 => "ps4",
            Self::Ps3 => "ps3",
            Self::Switch => "switch",
            Self::Pc => "pc",
        };
        write!(f, "{token}")
    }
}

/// Achievement progress for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievements {
    /// Whether every achievement has been completed
    #[serde(default)]
    pub complete: bool,
    /// Difficulty of completing the achievements, out of 10
    #[serde(default = "default_difficulty")]
    pub difficulty: f32,
}

fn default_difficulty() -> f32 {
    10.0
}

impl Default for Achievements {
    fn default() -> Self {
        Self {
            complete: false,
            difficulty: default_difficulty(),
        }
    }
}

/// A game in the backlog
///
/// Identity (equality and hashing) is name + platform; the remaining fields
/// are detail that may change without making it a different entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Name of the game
    pub name: String,
    /// Platform on which to play the game
    pub platform: Platform,
    /// Score as given on Metacritic, out of 100
    #[serde(default)]
    pub metacritic_score: f32,
    /// Whether the game has been played
    #[serde(default)]
    pub played: bool,
    /// Whether the game has been completed before
    #[serde(default)]
    pub completed: bool,
    /// Achievement progress
    #[serde(default)]
    pub achievements: Achievements,
    /// Hours it takes to complete the game
    #[serde(default)]
    pub time_to_beat: f32,
    /// Tags associated with the game
    #[serde(default)]
    pub tags: Vec<String>,
    /// Developer of the game
    #[serde(default)]
    pub developer: String,
    /// Genres associated with the game
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Game {
    /// Create a game with the given name and platform and all other fields
    /// defaulted
    #[must_use]
    pub fn new(name: impl Into<String>, platform: Platform) -> Self {
        Self {
            name: name.into(),
            platform,
            metacritic_score: 0.0,
            played: false,
            completed: false,
            achievements: Achievements::default(),
            time_to_beat: 0.0,
            tags: Vec::new(),
            developer: String::new(),
            genres: Vec::new(),
        }
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.platform == other.platform
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.platform.hash(state);
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playstation_family() {
        assert!(Platform::Ps5.is_playstation());
        assert!(Platform::Ps4.is_playstation());
        assert!(Platform::Ps3.is_playstation());
        assert!(!Platform::Switch.is_playstation());
        assert!(!Platform::Pc.is_playstation());
    }

    #[test]
    fn test_platform_serde_tokens() {
        assert_eq!(serde_json::to_string(&Platform::Ps5).unwrap(), r#""ps5""#);
        let platform: Platform = serde_json::from_str(r#""switch""#).unwrap();
        assert_eq!(platform, Platform::Switch);
    }

    #[test]
    fn test_identity_is_name_and_platform() {
        let mut one = Game::new("Hades", Platform::Switch);
        one.time_to_beat = 40.0;
        let two = Game::new("Hades", Platform::Switch);
        assert_eq!(one, two);

        let other_platform = Game::new("Hades", Platform::Pc);
        assert_ne!(one, other_platform);
    }

    #[test]
    fn test_json_defaults() {
        let game: Game = serde_json::from_str(r#"{"name": "Hades", "platform": "switch"}"#).unwrap();
        assert!(!game.played);
        assert!(!game.completed);
        assert!(!game.achievements.complete);
        assert!((game.achievements.difficulty - 10.0).abs() < f32::EPSILON);
        assert_eq!(game.time_to_beat, 0.0);
        assert!(game.developer.is_empty());
    }

    #[test]
    fn test_achievements_difficulty_default_applies_inside_partial_object() {
        let game: Game = serde_json::from_str(
            r#"{"name": "Hades", "platform": "switch", "achievements": {"complete": true}}"#,
        )
        .unwrap();
        assert!(game.achievements.complete);
        assert!((game.achievements.difficulty - 10.0).abs() < f32::EPSILON);
    }
}
